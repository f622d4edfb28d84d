//! Comparator chains.
//!
//! A [`Chain`] is an ordered, immutable list of keys evaluated in priority
//! order. The first key that does not tie decides; if every key ties the two
//! values are equivalent and neither precedes the other.
//!
//! Chains are built once, through [`ChainBuilder`] or the
//! [`make_compare!`](crate::make_compare!) macro, and can not be extended
//! afterwards. Cloning a chain shares its keys.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::key::{IntoKey, Key};
use crate::ordered::Ordered;
use crate::relation::Relation;

/// A key as stored inside a chain.
pub type BoxedKey<T> = Box<dyn Key<T> + Send + Sync>;

/// Lexicographic comparator over `T`.
///
/// # Example
///
/// ```
/// use lexord::{field, make_compare};
///
/// struct Point {
///     x: i32,
///     active: bool,
/// }
///
/// let chain = make_compare!(field!(Point, x), field!(Point, active));
///
/// let a = Point { x: 2, active: false };
/// let b = Point { x: 2, active: true };
/// assert!(chain.precedes(&a, &b));
///
/// let mut points = vec![b, a];
/// points.sort_by(|l, r| chain.compare(l, r));
/// assert!(!points[0].active);
/// ```
pub struct Chain<T: ?Sized> {
    keys: Arc<[BoxedKey<T>]>,
}

impl<T: ?Sized> Chain<T> {
    /// Starts building a chain.
    pub fn builder() -> ChainBuilder<T> {
        ChainBuilder::new()
    }

    /// Creates a chain with no keys. Every pair of values is equivalent.
    pub fn empty() -> Self {
        ChainBuilder::new().build()
    }

    /// Returns the number of keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if the chain has no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Compares two values key by key.
    ///
    /// Keys after the first non-tying one are not evaluated.
    pub fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        for key in self.keys.iter() {
            match key.compare(lhs, rhs) {
                Ordering::Equal => continue,
                decided => return decided,
            }
        }
        Ordering::Equal
    }

    /// Returns `true` if `lhs` strictly precedes `rhs`.
    pub fn precedes(&self, lhs: &T, rhs: &T) -> bool {
        self.compare(lhs, rhs) == Ordering::Less
    }

    /// Returns `true` if neither value precedes the other.
    pub fn equivalent(&self, lhs: &T, rhs: &T) -> bool {
        self.compare(lhs, rhs) == Ordering::Equal
    }

    /// Returns the chain as a plain `(lhs, rhs) -> bool` predicate.
    pub fn as_fn(&self) -> impl Fn(&T, &T) -> bool + '_ {
        move |lhs, rhs| self.precedes(lhs, rhs)
    }

    /// Wraps a value so it orders by this chain in `Ord`-based containers.
    pub fn wrap(&self, value: T) -> Ordered<T>
    where
        T: Sized,
    {
        Ordered::new(value, self.clone())
    }
}

impl<T: ?Sized> Clone for Chain<T> {
    fn clone(&self) -> Self {
        Chain {
            keys: Arc::clone(&self.keys),
        }
    }
}

impl<T: ?Sized> Default for Chain<T> {
    fn default() -> Self {
        Chain::empty()
    }
}

impl<T: ?Sized> fmt::Debug for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("subject", &std::any::type_name::<T>())
            .field("keys", &self.keys.len())
            .finish()
    }
}

impl<T: ?Sized> Key<T> for Chain<T> {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        Chain::compare(self, lhs, rhs)
    }
}

impl<T: ?Sized> Relation<T> for Chain<T> {
    fn lt(&self, a: &T, b: &T) -> bool {
        self.precedes(a, b)
    }
}

impl<T: ?Sized> IntoKey<T> for Chain<T> {
    type Key = Self;

    fn into_key(self) -> Self {
        self
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Collects keys in priority order and freezes them into a [`Chain`].
pub struct ChainBuilder<T: ?Sized> {
    keys: Vec<BoxedKey<T>>,
}

impl<T: ?Sized> ChainBuilder<T> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        ChainBuilder { keys: Vec::new() }
    }

    /// Appends a key with lower priority than every key added so far.
    pub fn key<K>(mut self, key: K) -> Self
    where
        K: IntoKey<T>,
        K::Key: Send + Sync + 'static,
    {
        self.keys.push(Box::new(key.into_key()));
        self
    }

    /// Appends already-boxed keys in iteration order.
    pub fn boxed_keys<I>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = BoxedKey<T>>,
    {
        self.keys.extend(keys);
        self
    }

    /// Freezes the collected keys into a chain.
    pub fn build(self) -> Chain<T> {
        debug!(
            subject = std::any::type_name::<T>(),
            keys = self.keys.len(),
            "comparator chain built"
        );
        Chain {
            keys: self.keys.into(),
        }
    }
}

impl<T: ?Sized> Default for ChainBuilder<T> {
    fn default() -> Self {
        ChainBuilder::new()
    }
}

impl<T: ?Sized> fmt::Debug for ChainBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainBuilder")
            .field("keys", &self.keys.len())
            .finish()
    }
}

/// Builds a chain from already-boxed keys, most significant first.
pub fn make_compare<T, I>(keys: I) -> Chain<T>
where
    T: ?Sized,
    I: IntoIterator<Item = BoxedKey<T>>,
{
    ChainBuilder::new().boxed_keys(keys).build()
}

/// Builds a [`Chain`] from key descriptors, most significant first.
///
/// Each argument may be a field accessor, a derivation, an identity, a
/// [`KeySpec`](crate::KeySpec) from [`compare_using`](crate::compare_using),
/// another chain, or a named [`OrderBy`](crate::OrderBy).
///
/// ```
/// use lexord::{make_compare, Chain};
///
/// let empty: Chain<i32> = make_compare!();
/// assert!(!empty.precedes(&1, &2));
/// assert!(!empty.precedes(&2, &1));
/// ```
#[macro_export]
macro_rules! make_compare {
    () => {
        $crate::Chain::builder().build()
    };
    ($($key:expr),+ $(,)?) => {
        $crate::Chain::builder()$(.key($key))+.build()
    };
}
