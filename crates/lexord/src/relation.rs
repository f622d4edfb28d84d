//! Ordering relations applied to projections.
//!
//! A [`Relation`] is a binary "precedes" predicate over projections. It is
//! expected to be a strict weak ordering; the library can not check this.
//!
//! Provided relations:
//!
//! | Relation | Meaning |
//! |----------|---------|
//! | [`Natural`] | `PartialOrd::lt`, ascending or descending via [`Dir`] |
//! | [`Reverse`] | any relation with its arguments swapped |
//! | [`CaseInsensitive`] | lowercased string comparison |
//! | [`FromCmp`] | a three-way `Ordering` function used as a relation |
//! | `Fn(&V, &V) -> bool` | any closure or function |
//! | [`Chain`](crate::Chain) | a whole comparator chain over `V` |

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::LexordError;

/// Binary strict-weak-order relation over `V`.
pub trait Relation<V: ?Sized> {
    /// Returns `true` if `a` strictly precedes `b`.
    fn lt(&self, a: &V, b: &V) -> bool;
}

impl<V: ?Sized, F> Relation<V> for F
where
    F: Fn(&V, &V) -> bool,
{
    fn lt(&self, a: &V, b: &V) -> bool {
        self(a, b)
    }
}

/// Turns a binary relation into a three-way decision.
///
/// Calls the relation at most twice: `a < b` first, then `b < a` only when
/// the first call was not decisive.
pub fn decide<V, R>(order: &R, a: &V, b: &V) -> Ordering
where
    V: ?Sized,
    R: Relation<V> + ?Sized,
{
    if order.lt(a, b) {
        Ordering::Less
    } else if order.lt(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

// ============================================================================
// Direction
// ============================================================================

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the opposite direction.
    pub fn flip(self) -> Dir {
        match self {
            Dir::Asc => Dir::Desc,
            Dir::Desc => Dir::Asc,
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Dir {
    type Err = LexordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Dir::Asc),
            "desc" | "descending" => Ok(Dir::Desc),
            _ => Err(LexordError::InvalidDirection(s.trim().to_string())),
        }
    }
}

// ============================================================================
// Built-in relations
// ============================================================================

/// The natural `<` of the projected type, in a given direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Natural {
    /// Direction the natural order is applied in.
    pub dir: Dir,
}

impl Natural {
    /// Natural ascending order.
    pub const ASC: Natural = Natural { dir: Dir::Asc };
    /// Natural descending order.
    pub const DESC: Natural = Natural { dir: Dir::Desc };

    /// Creates a natural relation in the given direction.
    pub fn new(dir: Dir) -> Self {
        Natural { dir }
    }
}

impl<V: PartialOrd + ?Sized> Relation<V> for Natural {
    fn lt(&self, a: &V, b: &V) -> bool {
        match self.dir {
            Dir::Asc => a < b,
            Dir::Desc => b < a,
        }
    }
}

/// Swaps the arguments of the wrapped relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Reverse<R>(pub R);

impl<V: ?Sized, R: Relation<V>> Relation<V> for Reverse<R> {
    fn lt(&self, a: &V, b: &V) -> bool {
        self.0.lt(b, a)
    }
}

/// Orders strings by their lowercased characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CaseInsensitive;

impl<V: AsRef<str> + ?Sized> Relation<V> for CaseInsensitive {
    fn lt(&self, a: &V, b: &V) -> bool {
        let a = a.as_ref().chars().flat_map(char::to_lowercase);
        let b = b.as_ref().chars().flat_map(char::to_lowercase);
        Iterator::lt(a, b)
    }
}

/// A three-way comparison function used as a relation.
#[derive(Clone, Copy)]
pub struct FromCmp<F>(F);

/// Adapts `Fn(&V, &V) -> Ordering` into a [`Relation`].
///
/// ```
/// use lexord::{compare_using, field, from_cmp, make_compare};
///
/// struct Version {
///     tag: (u32, u32),
/// }
///
/// let chain = make_compare!(compare_using(
///     field!(Version, tag),
///     from_cmp(|a: &(u32, u32), b: &(u32, u32)| a.1.cmp(&b.1)),
/// ));
/// let old = Version { tag: (9, 1) };
/// let new = Version { tag: (1, 2) };
/// assert!(chain.precedes(&old, &new));
/// ```
pub fn from_cmp<V, F>(cmp: F) -> FromCmp<F>
where
    V: ?Sized,
    F: Fn(&V, &V) -> Ordering,
{
    FromCmp(cmp)
}

impl<V: ?Sized, F> Relation<V> for FromCmp<F>
where
    F: Fn(&V, &V) -> Ordering,
{
    fn lt(&self, a: &V, b: &V) -> bool {
        (self.0)(a, b) == Ordering::Less
    }
}

impl<F> fmt::Debug for FromCmp<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FromCmp")
    }
}
