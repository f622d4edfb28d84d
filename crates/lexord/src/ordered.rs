//! Ordering values by a chain inside `Ord`-based containers.
//!
//! Standard ordered containers (`BTreeMap`, `BTreeSet`, `BinaryHeap`) take
//! their order from `Ord` rather than from a comparator argument. [`Ordered`]
//! bridges the two: it carries a value together with the chain it orders by.
//!
//! All values stored in one container must be wrapped with the same chain
//! (or clones of it); comparing values wrapped with different chains uses
//! the left-hand chain and is not a consistent order.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

use crate::chain::Chain;

/// A value ordered by a comparator chain.
///
/// ```
/// use std::collections::BTreeSet;
/// use lexord::{desc, field, make_compare};
///
/// struct Job {
///     priority: u8,
///     name: &'static str,
/// }
///
/// let chain = make_compare!(desc(field!(Job, priority)), field!(Job, name));
///
/// let mut queue = BTreeSet::new();
/// queue.insert(chain.wrap(Job { priority: 1, name: "sweep" }));
/// queue.insert(chain.wrap(Job { priority: 9, name: "deploy" }));
/// queue.insert(chain.wrap(Job { priority: 9, name: "build" }));
///
/// let order: Vec<_> = queue.iter().map(|job| job.name).collect();
/// assert_eq!(order, ["build", "deploy", "sweep"]);
/// ```
pub struct Ordered<T> {
    value: T,
    chain: Chain<T>,
}

impl<T> Ordered<T> {
    /// Wraps `value` to order by `chain`.
    pub fn new(value: T, chain: Chain<T>) -> Self {
        Ordered { value, chain }
    }

    /// Returns the wrapped value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the chain this value orders by.
    pub fn chain(&self) -> &Chain<T> {
        &self.chain
    }

    /// Unwraps the value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Deref for Ordered<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> PartialEq for Ordered<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Ordered<T> {}

impl<T> PartialOrd for Ordered<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Ordered<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.chain.compare(&self.value, &other.value)
    }
}

impl<T: Clone> Clone for Ordered<T> {
    fn clone(&self) -> Self {
        Ordered {
            value: self.value.clone(),
            chain: self.chain.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Ordered<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Ordered").field(&self.value).finish()
    }
}
