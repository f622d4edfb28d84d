//! Lexord - strict-weak-order comparators from prioritized keys.
//!
//! Instead of hand-writing a comparator that inspects several fields in
//! priority order, declare the keys that matter and let lexord assemble a
//! single lexicographic comparator. It supports:
//!
//! - Field accessors, derived values and method calls with bound arguments
//! - Custom per-key relations: descending, case-insensitive, closures
//! - Nested chains: a chain over a sub-structure used as one key's relation
//! - Ordered containers via [`Ordered`]
//! - Keys addressed by field name, parsed from text ([`Keyed`], [`OrderBy`])
//!
//! # Quick Start
//!
//! ```rust
//! use lexord::{compare_using, field, make_compare, Natural};
//!
//! #[derive(Debug)]
//! struct Point {
//!     x: i32,
//!     active: bool,
//! }
//!
//! // x first, then active with true before false
//! let chain = make_compare!(
//!     field!(Point, x),
//!     compare_using(field!(Point, active), Natural::DESC),
//! );
//!
//! let mut points = vec![
//!     Point { x: 2, active: false },
//!     Point { x: 1, active: false },
//!     Point { x: 2, active: true },
//! ];
//! points.sort_by(|a, b| chain.compare(a, b));
//!
//! assert_eq!(points[0].x, 1);
//! assert!(points[1].active);
//! assert!(!points[2].active);
//! ```
//!
//! # Evaluation
//!
//! For keys `k1..kn` the chain decides `precedes(lhs, rhs)` as:
//!
//! ```text
//! for each key, most significant first:
//!     a, b = key.extract(lhs), key.extract(rhs)
//!     if key.order(a, b): return true
//!     if key.order(b, a): return false
//! return false
//! ```
//!
//! Later keys are never evaluated once an earlier key decides. A chain with
//! no keys reports every pair as equivalent.
//!
//! If every key's relation is a strict weak ordering, so is the chain. That
//! is the caller's side of the contract; it can not be checked.
//!
//! # Descriptor Shapes
//!
//! | Descriptor | Built with | Ordered by |
//! |------------|------------|------------|
//! | Field accessor | [`field()`], [`field!`] | natural `<` |
//! | Derivation | [`by()`] | natural `<` |
//! | Whole value | [`identity()`] | natural `<` |
//! | Custom relation | [`compare_using`], [`asc`], [`desc`] | the given [`Relation`] |
//! | Another chain | [`make_compare!`] | the chain |
//! | Named field | [`OrderBy`] | [`compare_values`] |

mod chain;
mod error;
mod extract;
mod key;
mod named;
mod ordered;
mod relation;
mod value;

// Re-export public API
pub use chain::{make_compare, BoxedKey, Chain, ChainBuilder};
pub use error::{LexordError, Result};
pub use extract::{by, field, identity, Derived, Extract, Field, Identity};
pub use key::{asc, compare_using, desc, gt, IntoKey, Key, KeySpec};
pub use named::{compare_values, parse_order, Keyed, OrderBy};
pub use ordered::Ordered;
pub use relation::{from_cmp, CaseInsensitive, Dir, FromCmp, Natural, Relation, Reverse};
pub use value::{Number, Value};

#[cfg(feature = "derive")]
pub use lexord_macros::Keyed;
