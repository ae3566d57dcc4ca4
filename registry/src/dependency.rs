//! The type-erased instance handle stored by [`Registry`](crate::Registry).

use crate::core::Handle;
use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;

/// A registered instance.
///
/// Holds an `Arc<T>` behind `dyn Any`, where `T` may be unsized (for example
/// `dyn Logger`), along with the name of `T` captured at registration.
/// Cloning is cheap and shares the underlying instance.
#[derive(Clone)]
pub struct Dependency {
  instance: Arc<dyn Any + Send + Sync>,
  type_name: &'static str,
}

impl Dependency {
  pub(crate) fn new<T: ?Sized + Any + Send + Sync>(instance: Arc<T>) -> Self {
    Self {
      instance: Arc::new(instance),
      type_name: type_name::<T>(),
    }
  }

  /// Name of the registered type, as reported by `std::any::type_name`.
  pub fn type_name(&self) -> &'static str {
    self.type_name
  }

  /// Returns the instance if it was registered as `T`.
  pub fn downcast<T: ?Sized + Any>(&self) -> Option<Arc<T>> {
    self.as_any().downcast_ref::<Arc<T>>().cloned()
  }

  pub fn is<T: ?Sized + Any>(&self) -> bool {
    self.as_any().is::<Arc<T>>()
  }

  /// The erased `Arc<T>` itself.
  pub fn as_any(&self) -> &dyn Any {
    &*self.instance
  }
}

impl Handle for Dependency {
  fn erased(&self) -> &dyn Any {
    self.as_any()
  }

  fn type_name(&self) -> &'static str {
    self.type_name
  }
}

impl fmt::Debug for Dependency {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Dependency")
      .field("type_name", &self.type_name)
      .finish_non_exhaustive()
  }
}
