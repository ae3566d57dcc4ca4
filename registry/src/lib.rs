//! # Spindle Registry
//!
//! A minimal, name-keyed dependency registry with attribute-driven field injection.
//!
//! Instances are registered under string names. Consumer structs derive
//! [`Injectable`] and mark the fields they want filled with
//! `#[inject("name")]`; [`Registry::resolve`] then walks those fields and
//! assigns the matching instances.
//!
//! ## Core Concepts
//!
//! - **Registry**: the store of named instances. Re-registering a name
//!   overwrites it and logs a warning.
//! - **Injection site**: a `pub` field of type `Option<Arc<T>>` carrying a
//!   non-empty `#[inject("..")]` attribute. Empty tags are skipped.
//! - **Resolution**: `resolve` returns an [`Error`]; `resolve_all` and the
//!   [`resolve_all!`] macro panic, for composition roots where a missing
//!   dependency is a startup bug.
//! - **Global Registry**: a lazily created registry available via [`global()`].
//!
//! ## Quick Start
//!
//! ```
//! use spindle_registry::{Injectable, Registry};
//! use std::sync::Arc;
//!
//! trait Greeter: Send + Sync {
//!   fn greet(&self) -> String;
//! }
//!
//! struct EnglishGreeter;
//!
//! impl Greeter for EnglishGreeter {
//!   fn greet(&self) -> String {
//!     "Hello, World!".to_string()
//!   }
//! }
//!
//! #[derive(Default, Injectable)]
//! struct Welcome {
//!   #[inject("greeter")]
//!   pub greeter: Option<Arc<dyn Greeter>>,
//! }
//!
//! let registry = Registry::new("app");
//! registry.register_shared::<dyn Greeter>("greeter", Arc::new(EnglishGreeter));
//!
//! let mut welcome = Welcome::default();
//! registry.resolve(&mut welcome).unwrap();
//!
//! assert_eq!(welcome.greeter.unwrap().greet(), "Hello, World!");
//! ```

// Lets the derive macro's `::spindle_registry` paths resolve inside this crate.
extern crate self as spindle_registry;

mod core;
mod dependency;
mod error;
mod global;
#[cfg(feature = "local")]
mod local_registry;
mod macros;
mod reflect;
mod registry;

pub use dependency::Dependency;
pub use error::{Error, Result};
pub use global::global;
#[cfg(feature = "local")]
pub use local_registry::{LocalDependency, LocalRegistry};
pub use reflect::{FieldMut, Injectable, ReflectMut, Slot};
pub use registry::Registry;
pub use spindle_registry_derive::Injectable;
