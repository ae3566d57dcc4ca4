// registry/src/local_registry.rs

//! A single-threaded, non-thread-safe registry.

use crate::core::{self, Handle};
use crate::error::Result;
use crate::reflect::Injectable;
use std::any::{type_name, Any};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// A registered instance in a [`LocalRegistry`]: an `Rc<T>` behind `dyn Any`.
#[derive(Clone)]
pub struct LocalDependency {
  instance: Rc<dyn Any>,
  type_name: &'static str,
}

impl LocalDependency {
  fn new<T: ?Sized + Any>(instance: Rc<T>) -> Self {
    Self {
      instance: Rc::new(instance),
      type_name: type_name::<T>(),
    }
  }

  pub fn type_name(&self) -> &'static str {
    self.type_name
  }

  /// Returns the instance if it was registered as `T`.
  pub fn downcast<T: ?Sized + Any>(&self) -> Option<Rc<T>> {
    (*self.instance).downcast_ref::<Rc<T>>().cloned()
  }

  pub fn is<T: ?Sized + Any>(&self) -> bool {
    (*self.instance).is::<Rc<T>>()
  }
}

impl Handle for LocalDependency {
  fn erased(&self) -> &dyn Any {
    &*self.instance
  }

  fn type_name(&self) -> &'static str {
    self.type_name
  }
}

impl fmt::Debug for LocalDependency {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("LocalDependency")
      .field("type_name", &self.type_name)
      .finish_non_exhaustive()
  }
}

/// A single-threaded registry.
///
/// Uses a plain `HashMap` and `Rc`, so it can hold instances that are not
/// `Send` or `Sync`. Injects into `Option<Rc<T>>` fields.
///
/// # Note on API
///
/// Unlike [`Registry`](crate::Registry), registration takes `&mut self`.
/// All registrations are expected to happen on one thread before any
/// resolution.
pub struct LocalRegistry {
  name: String,
  instances: HashMap<String, LocalDependency>,
}

impl Default for LocalRegistry {
  fn default() -> Self {
    Self::new("default")
  }
}

impl LocalRegistry {
  /// Creates an empty registry. `name` only shows up in diagnostics.
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      instances: HashMap::new(),
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  // --- Registration ---

  pub fn register<T: Any>(&mut self, name: &str, instance: T) {
    self.register_shared(name, Rc::new(instance));
  }

  pub fn register_shared<T: ?Sized + Any>(&mut self, name: &str, instance: Rc<T>) {
    let dependency = LocalDependency::new(instance);
    if self.instances.insert(name.to_owned(), dependency).is_some() {
      core::warn_overwrite(&self.name, name);
    }
  }

  // --- Lookup ---

  pub fn get(&self, name: &str) -> Option<LocalDependency> {
    self.instances.get(name).cloned()
  }

  pub fn get_as<T: ?Sized + Any>(&self, name: &str) -> Option<Rc<T>> {
    self.instances.get(name)?.downcast::<T>()
  }

  pub fn contains(&self, name: &str) -> bool {
    self.instances.contains_key(name)
  }

  pub fn len(&self) -> usize {
    self.instances.len()
  }

  pub fn is_empty(&self) -> bool {
    self.instances.is_empty()
  }

  // --- Resolution ---

  pub fn resolve<T: Injectable + ?Sized>(&self, target: &mut T) -> Result<()> {
    core::inject(&self.name, target, |key| self.get(key))
  }

  /// # Panics
  ///
  /// Panics on the first target that fails to resolve.
  pub fn resolve_all(&self, targets: &mut [&mut dyn Injectable]) {
    for target in targets.iter_mut() {
      core::panic_on_failure(self.resolve(&mut **target));
    }
  }

  pub fn list_dependencies(&self) -> Vec<String> {
    core::describe(
      self
        .instances
        .iter()
        .map(|(name, dependency)| (name.clone(), dependency.type_name())),
    )
  }
}

impl fmt::Debug for LocalRegistry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("LocalRegistry")
      .field("name", &self.name)
      .field("dependencies", &self.instances.len())
      .finish()
  }
}
