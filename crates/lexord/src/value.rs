//! Runtime values produced by named keys.
//!
//! [`Value`] is what a [`Keyed`](crate::Keyed) type hands back for a field
//! name. Values of the same kind compare naturally; see
//! [`compare_values`](crate::compare_values) for the cross-kind rules.

use std::cmp::Ordering;

/// Runtime value of a keyed field, borrowed from the source struct.
///
/// ```
/// use lexord::{Keyed, Number, Value};
///
/// struct Task {
///     name: String,
///     priority: u8,
/// }
///
/// impl Keyed for Task {
///     fn key_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "name" => Value::Str(&self.name),
///             "priority" => Value::Number(Number::from(self.priority)),
///             _ => Value::None,
///         }
///     }
///
///     fn key_fields() -> &'static [&'static str] {
///         &["name", "priority"]
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// String value (borrowed).
    Str(&'a str),
    /// Numeric value.
    Number(Number),
    /// Boolean value.
    Bool(bool),
    /// Field not present, null, or unsupported.
    None,
}

impl<'a> Value<'a> {
    /// Returns `true` if this is a `None` value.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the boolean value, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Str(s)
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::None, Into::into)
    }
}

/// Numeric value covering the common primitive types.
///
/// Numbers form a total order across variants. Integer comparisons are
/// exact, including against floats, and NaN sorts after every other number.
/// Equality follows the same order, so `I64(7) == U64(7) == F64(7.0)` and
/// `-0.0 == 0.0`.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Compares two numbers, handling mixed types.
    pub fn compare(self, other: Number) -> Ordering {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => a.cmp(&b),
            (Number::U64(a), Number::U64(b)) => a.cmp(&b),
            (Number::I64(a), Number::U64(b)) => i128::from(a).cmp(&i128::from(b)),
            (Number::U64(a), Number::I64(b)) => i128::from(a).cmp(&i128::from(b)),
            (Number::I64(a), Number::F64(b)) => compare_int_float(a.into(), b),
            (Number::U64(a), Number::F64(b)) => compare_int_float(a.into(), b),
            (Number::F64(a), Number::I64(b)) => compare_int_float(b.into(), a).reverse(),
            (Number::F64(a), Number::U64(b)) => compare_int_float(b.into(), a).reverse(),
            (Number::F64(a), Number::F64(b)) => compare_floats(a, b),
        }
    }
}

fn compare_floats(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        // Neither is NaN; `-0.0` and `0.0` stay equal.
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

// Exact: the float's integral part is compared as an integer, then its
// fraction breaks the tie. Out-of-range floats saturate past any i64/u64.
fn compare_int_float(a: i128, b: f64) -> Ordering {
    if b.is_nan() {
        return Ordering::Less;
    }
    let whole = b.trunc();
    a.cmp(&(whole as i128)).then_with(|| {
        if whole < b {
            Ordering::Less
        } else if whole > b {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    })
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.compare(*other) == Ordering::Equal
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(*other)
    }
}

macro_rules! number_from {
    ($variant:ident as $wide:ty: $($ty:ty),+) => {
        $(
            impl From<$ty> for Number {
                fn from(n: $ty) -> Self {
                    Number::$variant(n as $wide)
                }
            }

            impl From<$ty> for Value<'_> {
                fn from(n: $ty) -> Self {
                    Value::Number(Number::from(n))
                }
            }
        )+
    };
}

number_from!(I64 as i64: i8, i16, i32, i64, isize);
number_from!(U64 as u64: u8, u16, u32, u64, usize);
number_from!(F64 as f64: f32, f64);
