//! The global registry instance and access function.

use crate::registry::Registry;
use once_cell::sync::Lazy;

// Created on first access.
static GLOBAL_REGISTRY: Lazy<Registry> = Lazy::new(|| Registry::new("global"));

/// Provides a reference to the process-wide registry, named `"global"`.
///
/// # Examples
///
/// ```
/// use spindle_registry::global;
///
/// fn register_services() {
///   global().register("greeting", String::from("Hello from global!"));
/// }
///
/// register_services();
/// assert!(global().contains("greeting"));
/// ```
pub fn global() -> &'static Registry {
  &GLOBAL_REGISTRY
}
