//! The main `Registry` struct and its associated methods.

use crate::core;
use crate::dependency::Dependency;
use crate::error::Result;
use crate::reflect::Injectable;
use dashmap::DashMap;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A name-keyed store of dependency instances.
///
/// The registry is thread-safe: registration and resolution may happen
/// concurrently from any thread. Registering a name twice replaces the
/// earlier instance and logs a warning.
pub struct Registry {
  name: String,
  instances: DashMap<String, Dependency>,
}

impl Default for Registry {
  fn default() -> Self {
    Self::new("default")
  }
}

impl Registry {
  /// Creates an empty registry. `name` only shows up in diagnostics.
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      instances: DashMap::new(),
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  // --- Registration ---

  /// Registers `instance` under `name`, wrapping it in an `Arc`.
  pub fn register<T: Any + Send + Sync>(&self, name: &str, instance: T) {
    self.register_shared(name, Arc::new(instance));
  }

  /// Registers an already shared instance under `name`.
  ///
  /// Fields receive the instance only when their slot holds exactly `Arc<T>`,
  /// so trait objects are registered with the trait as `T`:
  ///
  /// ```
  /// use spindle_registry::Registry;
  /// use std::sync::Arc;
  ///
  /// trait Storage: Send + Sync {}
  /// struct InMemoryStorage;
  /// impl Storage for InMemoryStorage {}
  ///
  /// let registry = Registry::new("app");
  /// registry.register_shared::<dyn Storage>("storage", Arc::new(InMemoryStorage));
  /// assert!(registry.get_as::<dyn Storage>("storage").is_some());
  /// ```
  pub fn register_shared<T: ?Sized + Any + Send + Sync>(&self, name: &str, instance: Arc<T>) {
    let dependency = Dependency::new(instance);
    if self.instances.insert(name.to_owned(), dependency).is_some() {
      core::warn_overwrite(&self.name, name);
    }
  }

  // --- Lookup ---

  /// Returns the instance registered under `name`.
  pub fn get(&self, name: &str) -> Option<Dependency> {
    self.instances.get(name).map(|entry| entry.value().clone())
  }

  /// Returns the instance registered under `name` if it was registered as `T`.
  pub fn get_as<T: ?Sized + Any>(&self, name: &str) -> Option<Arc<T>> {
    self.get(name)?.downcast::<T>()
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

  /// Injects registered instances into every `#[inject("..")]` field of `target`.
  ///
  /// Fields are visited in declaration order and resolution stops at the
  /// first error. Fields assigned before that error keep their new values.
  pub fn resolve<T: Injectable + ?Sized>(&self, target: &mut T) -> Result<()> {
    core::inject(&self.name, target, |key| self.get(key))
  }

  /// Resolves each target in order.
  ///
  /// # Panics
  ///
  /// Panics on the first target that fails to resolve. Use [`resolve`](Self::resolve)
  /// to handle the error instead.
  pub fn resolve_all(&self, targets: &mut [&mut dyn Injectable]) {
    for target in targets.iter_mut() {
      core::panic_on_failure(self.resolve(&mut **target));
    }
  }

  /// One `"name: type"` line per registered instance, sorted by name.
  pub fn list_dependencies(&self) -> Vec<String> {
    core::describe(
      self
        .instances
        .iter()
        .map(|entry| (entry.key().clone(), entry.value().type_name())),
    )
  }
}

impl fmt::Debug for Registry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Registry")
      .field("name", &self.name)
      .field("dependencies", &self.instances.len())
      .finish()
  }
}
