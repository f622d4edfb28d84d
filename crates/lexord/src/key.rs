//! Keys: an extractor paired with the relation that orders its projections.
//!
//! [`KeySpec`] is the one key shape chains are built from. Plain extractors
//! become a `KeySpec` with the [`Natural`] ascending relation when they are
//! added to a chain; [`compare_using`] builds one with any other relation.

use std::cmp::Ordering;

use crate::extract::{Derived, Extract, Field, Identity};
use crate::relation::{decide, Natural, Relation, Reverse};

/// A single ordering criterion over `T`.
///
/// This is the uniform unit a [`Chain`](crate::Chain) evaluates, whatever
/// descriptor it was built from.
pub trait Key<T: ?Sized> {
    /// Three-way decision of this key alone.
    ///
    /// `Equal` means the two values tie under this key and the next key in
    /// a chain gets to decide.
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering;

    /// Returns `true` if `lhs` strictly precedes `rhs` under this key.
    fn precedes(&self, lhs: &T, rhs: &T) -> bool {
        self.compare(lhs, rhs) == Ordering::Less
    }
}

/// An extractor together with the relation used to order its projections.
#[derive(Debug, Clone, Copy)]
pub struct KeySpec<E, R> {
    extract: E,
    order: R,
}

impl<E, R> KeySpec<E, R> {
    /// Pairs an extractor with a relation.
    pub fn new(extract: E, order: R) -> Self {
        KeySpec { extract, order }
    }

    /// Returns the extractor.
    pub fn extractor(&self) -> &E {
        &self.extract
    }

    /// Returns the relation.
    pub fn relation(&self) -> &R {
        &self.order
    }

    /// Returns the same key with its relation reversed.
    pub fn reversed(self) -> KeySpec<E, Reverse<R>> {
        KeySpec {
            extract: self.extract,
            order: Reverse(self.order),
        }
    }
}

impl<T, E, R> Key<T> for KeySpec<E, R>
where
    T: ?Sized,
    E: Extract<T>,
    R: Relation<E::Value>,
{
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        self.extract
            .project(lhs, rhs, |a, b| decide(&self.order, a, b))
    }
}

/// Pairs an extractor with a custom relation.
///
/// The relation may be a closure, one of the built-in relations, or a whole
/// [`Chain`](crate::Chain) over the projected type:
///
/// ```
/// use lexord::{compare_using, field, make_compare};
///
/// struct Nested {
///     a: i32,
///     b: i32,
/// }
///
/// struct Outer {
///     x: i32,
///     n: Nested,
/// }
///
/// let chain = make_compare!(
///     field!(Outer, x),
///     compare_using(field!(Outer, n), make_compare!(field!(Nested, a), field!(Nested, b))),
/// );
///
/// let p = Outer { x: 4, n: Nested { a: 2, b: 2 } };
/// let q = Outer { x: 4, n: Nested { a: 2, b: 3 } };
/// assert!(chain.precedes(&p, &q));
/// assert!(!chain.precedes(&q, &p));
/// assert!(!chain.precedes(&p, &p));
/// ```
pub fn compare_using<E, R>(extractor: E, relation: R) -> KeySpec<E, R> {
    KeySpec::new(extractor, relation)
}

/// Orders by the extractor's projection, smallest first.
pub fn asc<E>(extractor: E) -> KeySpec<E, Natural> {
    compare_using(extractor, Natural::ASC)
}

/// Orders by the extractor's projection, largest first.
pub fn desc<E>(extractor: E) -> KeySpec<E, Natural> {
    compare_using(extractor, Natural::DESC)
}

/// Greater-than ordering on the extractor's projection. Same as [`desc`].
pub fn gt<E>(extractor: E) -> KeySpec<E, Natural> {
    desc(extractor)
}

// ============================================================================
// Normalization
// ============================================================================

/// Conversion of a key descriptor into the key a chain stores.
///
/// Implemented for every descriptor shape: field accessors, derivations and
/// identity (ordered naturally), already-built [`KeySpec`]s (passed
/// through), whole chains, and named [`OrderBy`](crate::OrderBy) clauses.
pub trait IntoKey<T: ?Sized> {
    /// The normalized key.
    type Key: Key<T>;

    /// Performs the conversion.
    fn into_key(self) -> Self::Key;
}

impl<T, V, F> IntoKey<T> for Field<T, V, F>
where
    T: ?Sized,
    V: PartialOrd + ?Sized,
    F: Fn(&T) -> &V,
{
    type Key = KeySpec<Self, Natural>;

    fn into_key(self) -> Self::Key {
        asc(self)
    }
}

impl<T, V, F> IntoKey<T> for Derived<T, V, F>
where
    T: ?Sized,
    V: PartialOrd,
    F: Fn(&T) -> V,
{
    type Key = KeySpec<Self, Natural>;

    fn into_key(self) -> Self::Key {
        asc(self)
    }
}

impl<T: PartialOrd + ?Sized> IntoKey<T> for Identity<T> {
    type Key = KeySpec<Self, Natural>;

    fn into_key(self) -> Self::Key {
        asc(self)
    }
}

impl<T, E, R> IntoKey<T> for KeySpec<E, R>
where
    T: ?Sized,
    E: Extract<T>,
    R: Relation<E::Value>,
{
    type Key = Self;

    fn into_key(self) -> Self {
        self
    }
}
