//! Key extractors.
//!
//! An extractor turns a value of the subject type into the projection a key
//! orders by. Every descriptor shape a caller can hand to a chain adapts to
//! the single [`Extract`] interface:
//!
//! - [`Field`] borrows a field (or any other place reachable by reference)
//!   out of the value. Build one with [`field()`] or the [`field!`] macro.
//! - [`Derived`] computes an owned projection with an arbitrary function,
//!   including method calls with bound arguments. Build one with [`by()`].
//! - [`Identity`] projects the value itself. Build one with [`identity()`].
//!
//! [`field!`]: crate::field!

use std::fmt;
use std::marker::PhantomData;

/// Projects a value of type `T` onto the value a key orders by.
///
/// Both sides of a comparison are projected together so that borrowed and
/// owned projections share one interface: the extractor hands both
/// projections to `f` and returns whatever `f` decides.
pub trait Extract<T: ?Sized> {
    /// The projected type. May be unsized, e.g. `str`.
    type Value: ?Sized;

    /// Projects `lhs` and `rhs` and passes both projections to `f`.
    fn project<R>(&self, lhs: &T, rhs: &T, f: impl FnOnce(&Self::Value, &Self::Value) -> R) -> R;
}

// ============================================================================
// Field accessor
// ============================================================================

/// Extractor borrowing a field out of the value.
pub struct Field<T: ?Sized, V: ?Sized, F> {
    get: F,
    _marker: PhantomData<fn(&T) -> &V>,
}

/// Creates a field accessor from a function returning a reference into `T`.
///
/// ```
/// use lexord::{field, make_compare};
///
/// struct User {
///     name: String,
/// }
///
/// let by_name = make_compare!(field(|u: &User| u.name.as_str()));
/// let a = User { name: "ada".into() };
/// let b = User { name: "bob".into() };
/// assert!(by_name.precedes(&a, &b));
/// ```
pub fn field<T, V, F>(get: F) -> Field<T, V, F>
where
    T: ?Sized,
    V: ?Sized,
    F: Fn(&T) -> &V,
{
    Field {
        get,
        _marker: PhantomData,
    }
}

impl<T: ?Sized, V: ?Sized, F> Extract<T> for Field<T, V, F>
where
    F: Fn(&T) -> &V,
{
    type Value = V;

    fn project<R>(&self, lhs: &T, rhs: &T, f: impl FnOnce(&V, &V) -> R) -> R {
        f((self.get)(lhs), (self.get)(rhs))
    }
}

impl<T: ?Sized, V: ?Sized, F: Clone> Clone for Field<T, V, F> {
    fn clone(&self) -> Self {
        Field {
            get: self.get.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: ?Sized, V: ?Sized, F: Copy> Copy for Field<T, V, F> {}

impl<T: ?Sized, V: ?Sized, F> fmt::Debug for Field<T, V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("subject", &std::any::type_name::<T>())
            .field("value", &std::any::type_name::<V>())
            .finish()
    }
}

/// Builds a [`Field`] extractor from a type and a field path.
///
/// Nested paths and tuple indices are accepted:
///
/// ```
/// use lexord::{field, make_compare};
///
/// struct Inner {
///     a: i32,
/// }
///
/// struct Outer {
///     inner: Inner,
///     pair: (u8, u8),
/// }
///
/// let chain = make_compare!(field!(Outer, inner.a), field!(Outer, pair.1));
/// let x = Outer { inner: Inner { a: 1 }, pair: (0, 9) };
/// let y = Outer { inner: Inner { a: 1 }, pair: (0, 3) };
/// assert!(chain.precedes(&y, &x));
/// ```
#[macro_export]
macro_rules! field {
    ($ty:ty, $($name:tt).+) => {
        $crate::field(|value: &$ty| &value.$($name).+)
    };
}

// ============================================================================
// Derivation callable
// ============================================================================

/// Extractor computing an owned projection from the value.
pub struct Derived<T: ?Sized, V, F> {
    derive: F,
    _marker: PhantomData<fn(&T) -> V>,
}

/// Creates an extractor from any function of `&T`.
///
/// Method calls with fixed arguments are closures capturing the argument:
///
/// ```
/// use lexord::{by, make_compare};
///
/// struct Reading {
///     raw: i64,
/// }
///
/// impl Reading {
///     fn scaled(&self, factor: i64) -> i64 {
///         self.raw * factor
///     }
/// }
///
/// let factor = -1;
/// let chain = make_compare!(by(move |r: &Reading| r.scaled(factor)));
/// assert!(chain.precedes(&Reading { raw: 5 }, &Reading { raw: 2 }));
/// ```
pub fn by<T, V, F>(derive: F) -> Derived<T, V, F>
where
    T: ?Sized,
    F: Fn(&T) -> V,
{
    Derived {
        derive,
        _marker: PhantomData,
    }
}

impl<T: ?Sized, V, F> Extract<T> for Derived<T, V, F>
where
    F: Fn(&T) -> V,
{
    type Value = V;

    fn project<R>(&self, lhs: &T, rhs: &T, f: impl FnOnce(&V, &V) -> R) -> R {
        let a = (self.derive)(lhs);
        let b = (self.derive)(rhs);
        f(&a, &b)
    }
}

impl<T: ?Sized, V, F: Clone> Clone for Derived<T, V, F> {
    fn clone(&self) -> Self {
        Derived {
            derive: self.derive.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: ?Sized, V, F: Copy> Copy for Derived<T, V, F> {}

impl<T: ?Sized, V, F> fmt::Debug for Derived<T, V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Derived")
            .field("subject", &std::any::type_name::<T>())
            .field("value", &std::any::type_name::<V>())
            .finish()
    }
}

// ============================================================================
// Identity
// ============================================================================

/// Extractor projecting the value onto itself.
pub struct Identity<T: ?Sized>(PhantomData<fn(&T)>);

/// Creates an [`Identity`] extractor.
pub fn identity<T: ?Sized>() -> Identity<T> {
    Identity(PhantomData)
}

impl<T: ?Sized> Extract<T> for Identity<T> {
    type Value = T;

    fn project<R>(&self, lhs: &T, rhs: &T, f: impl FnOnce(&T, &T) -> R) -> R {
        f(lhs, rhs)
    }
}

impl<T: ?Sized> Clone for Identity<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Identity<T> {}

impl<T: ?Sized> fmt::Debug for Identity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identity<{}>", std::any::type_name::<T>())
    }
}
