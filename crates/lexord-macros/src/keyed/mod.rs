//! Implementation of the `#[derive(Keyed)]` macro.
//!
//! Generates the `Keyed` impl and field name constants from `#[key(...)]`
//! field annotations.

mod attrs;
mod derive;

pub use derive::keyed_derive_impl;
