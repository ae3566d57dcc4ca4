//! # Spindle Registry Derive
//!
//! Provides `#[derive(Injectable)]` for `spindle_registry`.
//!
//! The derive walks the struct's fields in declaration order and emits one
//! field descriptor per field. A field becomes an injection site when it
//! carries `#[inject("dependency name")]`:
//!
//! ```ignore
//! use spindle_registry::Injectable;
//! use std::sync::Arc;
//!
//! #[derive(Default, Injectable)]
//! pub struct Service {
//!     #[inject("Repository")]
//!     pub repository: Option<Arc<dyn Repository>>,
//!     #[inject("Logger")]
//!     pub logger: Option<Arc<dyn Logger>>,
//!     requests: u64,
//! }
//! ```
//!
//! Only `pub` fields are writable. A tagged field without `pub` is still
//! described, so the registry can report it as unsettable.
//!
//! Generic structs are supported. The generated impl adds a `'static` bound
//! to every type parameter.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod injectable;

/// Derives `spindle_registry::Injectable`.
///
/// # Attributes
///
/// - `#[inject("name")]` - inject the dependency registered as `name`
/// - `#[inject("")]` - present but empty, the field is skipped
#[proc_macro_derive(Injectable, attributes(inject))]
pub fn derive_injectable(input: TokenStream) -> TokenStream {
  let input = parse_macro_input!(input as DeriveInput);
  injectable::expand(&input)
    .unwrap_or_else(syn::Error::into_compile_error)
    .into()
}
