use thiserror::Error;

/// Errors returned while injecting dependencies into a target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  /// The target does not reflect as a struct. Plain values, shared handles
  /// and null pointers (`Option::None`) all end up here.
  #[error("target must be a mutable reference to a struct, got {type_name}")]
  InvalidTarget { type_name: &'static str },

  #[error("dependency {dependency} not found in registry {registry}")]
  DependencyNotFound { dependency: String, registry: String },

  /// The dependency exists but the tagged field is not `pub`.
  #[error("cannot set dependency {dependency}")]
  UnsettableField {
    dependency: String,
    field: &'static str,
  },

  #[error(
    "dependency {dependency} of type {found} cannot be assigned to field {field} of type {expected}"
  )]
  TypeMismatch {
    dependency: String,
    field: &'static str,
    expected: &'static str,
    found: &'static str,
  },
}

/// A specialized `Result` type for registry operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
