//! Core, non-public injection machinery shared by the registries.

use crate::error::{Error, Result};
use crate::reflect::{Injectable, ReflectMut};
use std::any::Any;

/// Listing returned for a registry with no entries.
pub(crate) const NO_DEPENDENCIES: &str = "No dependencies registered.";

/// A stored, type-erased instance as seen by the injection walk.
pub(crate) trait Handle {
  fn erased(&self) -> &dyn Any;
  fn type_name(&self) -> &'static str;
}

/// Walks the fields of `target` in declaration order and assigns every
/// injection site from `lookup`.
///
/// Stops at the first failure. Fields assigned before the failure keep their
/// new values.
pub(crate) fn inject<T, H, F>(registry: &str, target: &mut T, mut lookup: F) -> Result<()>
where
  T: Injectable + ?Sized,
  H: Handle,
  F: FnMut(&str) -> Option<H>,
{
  let fields = match target.reflect_mut() {
    ReflectMut::Struct(fields) => fields,
    ReflectMut::Value { type_name } | ReflectMut::Null { type_name } => {
      return Err(Error::InvalidTarget { type_name });
    }
  };

  for mut field in fields {
    let Some(key) = field.injection_key() else {
      continue;
    };
    let field_name = field.name();

    let handle = lookup(key).ok_or_else(|| Error::DependencyNotFound {
      dependency: key.to_owned(),
      registry: registry.to_owned(),
    })?;

    let Some(slot) = field.slot_mut() else {
      return Err(Error::UnsettableField {
        dependency: key.to_owned(),
        field: field_name,
      });
    };

    if !slot.assign(handle.erased()) {
      return Err(Error::TypeMismatch {
        dependency: key.to_owned(),
        field: field_name,
        expected: slot.expected_type(),
        found: handle.type_name(),
      });
    }

    tracing::trace!(registry, dependency = key, field = field_name, "injected dependency");
  }

  Ok(())
}

/// Renders `name: type` lines sorted by name, or the empty-registry sentinel.
pub(crate) fn describe(entries: impl Iterator<Item = (String, &'static str)>) -> Vec<String> {
  let mut entries: Vec<_> = entries.collect();
  if entries.is_empty() {
    return vec![NO_DEPENDENCIES.to_string()];
  }
  entries.sort_by(|a, b| a.0.cmp(&b.0));
  entries
    .into_iter()
    .map(|(name, type_name)| format!("{}: {}", name, type_name))
    .collect()
}

pub(crate) fn warn_overwrite(registry: &str, dependency: &str) {
  tracing::warn!(
    registry,
    dependency,
    "Dependency {} is already registered. Overwriting.",
    dependency
  );
}

pub(crate) fn panic_on_failure(result: Result<()>) {
  if let Err(err) = result {
    panic!("failed to resolve dependency: {}", err);
  }
}
