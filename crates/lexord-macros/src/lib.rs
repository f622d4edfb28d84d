//! Proc macros for Lexord.
//!
//! # Derive Macros
//!
//! - [`Keyed`] - Expose struct fields by name for named comparator keys
//!
//! For working examples, see `lexord/tests/keyed_derive.rs`.

mod keyed;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `Keyed` trait so fields can be ordered by name.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `String` | String field, anything that derefs to `str` |
/// | `Number` | Numeric field, any primitive integer or float |
/// | `Bool` | Boolean field |
/// | `skip` | Exclude this field |
/// | `rename = "..."` | Use a custom name for the field |
///
/// Fields without a `#[key(...)]` attribute are not keyed.
///
/// # Generated Code
///
/// 1. Field name constants (e.g., `Task::NAME`, `Task::PRIORITY`)
/// 2. Implementation of `Keyed::key_value()` and `Keyed::key_fields()`
///
/// # Example
///
/// ```ignore
/// use lexord::{Chain, Keyed, OrderBy};
///
/// #[derive(Keyed)]
/// struct Task {
///     #[key(String)]
///     name: String,
///
///     #[key(Number)]
///     priority: u8,
///
///     #[key(Bool, rename = "is_done")]
///     done: bool,
///
///     internal_id: u64,
/// }
///
/// let chain = Chain::<Task>::by_names(&[
///     OrderBy::asc(Task::IS_DONE),
///     OrderBy::desc(Task::PRIORITY),
/// ])?;
/// ```
#[proc_macro_derive(Keyed, attributes(key))]
pub fn keyed_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    keyed::keyed_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
