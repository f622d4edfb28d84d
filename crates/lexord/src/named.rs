//! Keys addressed by field name.
//!
//! Sometimes the sort order arrives as text (a `--sort` flag, a config
//! entry) rather than as code. This module turns field names into keys:
//!
//! - [`Keyed`] exposes a type's fields by name as runtime [`Value`]s. It is
//!   usually derived with `#[derive(Keyed)]`.
//! - [`OrderBy`] names one field and a [`Dir`]; it is a [`Key`] for every
//!   `Keyed` type and can sit in a chain next to typed keys.
//! - [`parse_order`] reads `"priority:desc,name"` style lists.
//! - [`Chain::by_names`] validates the names against the type and builds the
//!   chain, so unknown fields fail at construction rather than silently
//!   comparing equal.
//!
//! ```
//! use lexord::{Chain, Keyed, Number, Value};
//!
//! struct Task {
//!     name: String,
//!     priority: i64,
//! }
//!
//! impl Keyed for Task {
//!     fn key_value(&self, field: &str) -> Value<'_> {
//!         match field {
//!             "name" => Value::Str(&self.name),
//!             "priority" => Value::Number(Number::I64(self.priority)),
//!             _ => Value::None,
//!         }
//!     }
//!
//!     fn key_fields() -> &'static [&'static str] {
//!         &["name", "priority"]
//!     }
//! }
//!
//! let chain: Chain<Task> = Chain::parse("priority:desc, name").unwrap();
//! let mut tasks = vec![
//!     Task { name: "b".into(), priority: 1 },
//!     Task { name: "a".into(), priority: 1 },
//!     Task { name: "c".into(), priority: 5 },
//! ];
//! tasks.sort_by(|l, r| chain.compare(l, r));
//! let names: Vec<_> = tasks.iter().map(|t| t.name.as_str()).collect();
//! assert_eq!(names, ["c", "a", "b"]);
//!
//! assert!(Chain::<Task>::parse("owner").is_err());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::chain::Chain;
use crate::error::{LexordError, Result};
use crate::key::{IntoKey, Key};
use crate::relation::Dir;
use crate::value::Value;

/// Types whose fields can be addressed by name.
///
/// Derive it with `#[derive(Keyed)]` (feature `derive`), or implement it by
/// hand as shown on [`Value`].
pub trait Keyed {
    /// Returns the value of `field`, or [`Value::None`] if the field is not
    /// keyed.
    fn key_value(&self, field: &str) -> Value<'_>;

    /// Names accepted by [`key_value`](Keyed::key_value).
    fn key_fields() -> &'static [&'static str]
    where
        Self: Sized;
}

/// Compares two runtime values.
///
/// This is a total order. Values of the same kind compare naturally (see
/// [`Number`](crate::Number) for numbers, where NaN sorts last). Values of
/// different kinds order by kind: booleans, then numbers, then strings.
/// `None` sorts after every other value.
pub fn compare_values(a: &Value<'_>, b: &Value<'_>) -> Ordering {
    match (a, b) {
        (Value::Str(a), Value::Str(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => a.compare(*b),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}

fn kind_rank(value: &Value<'_>) -> u8 {
    match value {
        Value::Bool(_) => 0,
        Value::Number(_) => 1,
        Value::Str(_) => 2,
        Value::None => 3,
    }
}

/// A named field and the direction to order it in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderBy {
    /// The field to order by.
    pub field: String,
    /// The direction.
    pub dir: Dir,
}

impl OrderBy {
    /// Creates an ascending ordering for the given field.
    pub fn asc(field: impl Into<String>) -> Self {
        OrderBy::new(field, Dir::Asc)
    }

    /// Creates a descending ordering for the given field.
    pub fn desc(field: impl Into<String>) -> Self {
        OrderBy::new(field, Dir::Desc)
    }

    /// Creates an ordering with the given direction.
    pub fn new(field: impl Into<String>, dir: Dir) -> Self {
        OrderBy {
            field: field.into(),
            dir,
        }
    }

    /// Returns the same field ordered the other way.
    pub fn reversed(&self) -> Self {
        OrderBy::new(self.field.clone(), self.dir.flip())
    }

    /// Compares two values according to this ordering.
    pub fn compare_values(&self, a: &Value<'_>, b: &Value<'_>) -> Ordering {
        self.dir.apply(compare_values(a, b))
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field, self.dir)
    }
}

/// Parses `field`, `field:asc`, `field:desc`, `+field` or `-field`.
impl FromStr for OrderBy {
    type Err = LexordError;

    fn from_str(s: &str) -> Result<Self> {
        let clause = s.trim();
        let (field, dir) = if let Some(rest) = clause.strip_prefix('-') {
            (rest, Dir::Desc)
        } else if let Some(rest) = clause.strip_prefix('+') {
            (rest, Dir::Asc)
        } else if let Some((field, dir)) = clause.split_once(':') {
            (field, dir.parse::<Dir>()?)
        } else {
            (clause, Dir::Asc)
        };

        let field = field.trim();
        if field.is_empty() {
            return Err(LexordError::EmptyField);
        }
        Ok(OrderBy::new(field, dir))
    }
}

impl<T: Keyed + ?Sized> Key<T> for OrderBy {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        let a = lhs.key_value(&self.field);
        let b = rhs.key_value(&self.field);
        self.compare_values(&a, &b)
    }
}

impl<T: Keyed + ?Sized> IntoKey<T> for OrderBy {
    type Key = Self;

    fn into_key(self) -> Self {
        self
    }
}

/// Parses a comma-separated list of order clauses.
///
/// An empty or blank string yields no clauses.
///
/// ```
/// use lexord::{parse_order, Dir};
///
/// let clauses = parse_order("priority:desc, -due, name").unwrap();
/// assert_eq!(clauses.len(), 3);
/// assert_eq!(clauses[1].field, "due");
/// assert_eq!(clauses[1].dir, Dir::Desc);
/// assert!(parse_order("name,,priority").is_err());
/// ```
pub fn parse_order(spec: &str) -> Result<Vec<OrderBy>> {
    let spec = spec.trim();
    if spec.is_empty() {
        return Ok(Vec::new());
    }

    let orderings = spec
        .split(',')
        .map(str::parse::<OrderBy>)
        .collect::<Result<Vec<OrderBy>>>()?;
    trace!(spec, clauses = orderings.len(), "parsed order spec");
    Ok(orderings)
}

impl<T: Keyed> Chain<T> {
    /// Builds a chain from named orderings, most significant first.
    ///
    /// Fails with [`LexordError::UnknownField`] if a name is not one of
    /// `T::key_fields()`.
    pub fn by_names(orderings: &[OrderBy]) -> Result<Self> {
        let fields = T::key_fields();
        let mut builder = Chain::<T>::builder();

        for order in orderings {
            if !fields.contains(&order.field.as_str()) {
                debug!(field = %order.field, "rejected unknown sort field");
                return Err(LexordError::UnknownField {
                    field: order.field.clone(),
                    available: fields.join(", "),
                });
            }
            builder = builder.key(order.clone());
        }

        Ok(builder.build())
    }

    /// Parses an order spec with [`parse_order`] and builds the chain.
    pub fn parse(spec: &str) -> Result<Self> {
        Chain::by_names(&parse_order(spec)?)
    }
}
