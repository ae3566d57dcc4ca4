//! Field introspection used by the registry to discover injection sites.
//!
//! Rust has no runtime reflection, so every injectable type describes its own
//! fields through [`Injectable::reflect_mut`]. The `#[derive(Injectable)]`
//! macro generates that table from `#[inject("name")]` attributes.

use std::any::{type_name, Any};
#[cfg(feature = "local")]
use std::rc::Rc;
use std::sync::Arc;

/// A type the registry can inject dependencies into.
///
/// Usually derived:
///
/// ```
/// use spindle_registry::Injectable;
/// use std::sync::Arc;
///
/// struct Clock;
///
/// #[derive(Default, Injectable)]
/// struct Scheduler {
///   #[inject("clock")]
///   pub clock: Option<Arc<Clock>>,
///   pending: usize,
/// }
/// ```
pub trait Injectable {
  /// Describes the shape of `self`, handing out mutable access to the
  /// fields that may receive a dependency.
  fn reflect_mut(&mut self) -> ReflectMut<'_>;
}

/// The reflected shape of an injection target.
pub enum ReflectMut<'a> {
  /// A record with fields in declaration order.
  Struct(Vec<FieldMut<'a>>),
  /// Anything that is not a record: scalars, strings, shared handles.
  Value { type_name: &'static str },
  /// An absent value behind an optional pointer.
  Null { type_name: &'static str },
}

/// A single field of a reflected struct.
pub struct FieldMut<'a> {
  name: &'static str,
  tag: Option<&'static str>,
  slot: Option<&'a mut dyn Slot>,
}

impl<'a> FieldMut<'a> {
  /// A field the registry is allowed to assign.
  pub fn writable(name: &'static str, tag: Option<&'static str>, slot: &'a mut dyn Slot) -> Self {
    Self {
      name,
      tag,
      slot: Some(slot),
    }
  }

  /// A field the registry may inspect but never assign.
  pub fn read_only(name: &'static str, tag: Option<&'static str>) -> Self {
    Self {
      name,
      tag,
      slot: None,
    }
  }

  pub fn name(&self) -> &'static str {
    self.name
  }

  /// The raw `inject` tag. `Some("")` means the attribute was present but empty.
  pub fn tag(&self) -> Option<&'static str> {
    self.tag
  }

  /// The dependency name this field asks for, if it is an injection site.
  pub fn injection_key(&self) -> Option<&'static str> {
    self.tag.filter(|tag| !tag.is_empty())
  }

  pub(crate) fn slot_mut(&mut self) -> Option<&mut (dyn Slot + 'a)> {
    self.slot.as_deref_mut()
  }
}

/// Destination storage for an injected dependency.
///
/// `handle` is the type-erased value kept by a registry: an `Arc<T>` for
/// [`Registry`](crate::Registry), an `Rc<T>` for `LocalRegistry`.
pub trait Slot {
  /// Stores the instance behind `handle`. Returns `false`, leaving the slot
  /// untouched, when the handle does not hold the type this slot expects.
  fn assign(&mut self, handle: &dyn Any) -> bool;

  /// Name of the type this slot accepts, used in mismatch errors.
  fn expected_type(&self) -> &'static str;
}

impl<T: ?Sized + Any> Slot for Option<Arc<T>> {
  fn assign(&mut self, handle: &dyn Any) -> bool {
    match handle.downcast_ref::<Arc<T>>() {
      Some(instance) => {
        *self = Some(Arc::clone(instance));
        true
      }
      None => false,
    }
  }

  fn expected_type(&self) -> &'static str {
    type_name::<T>()
  }
}

#[cfg(feature = "local")]
impl<T: ?Sized + Any> Slot for Option<Rc<T>> {
  fn assign(&mut self, handle: &dyn Any) -> bool {
    match handle.downcast_ref::<Rc<T>>() {
      Some(instance) => {
        *self = Some(Rc::clone(instance));
        true
      }
      None => false,
    }
  }

  fn expected_type(&self) -> &'static str {
    type_name::<T>()
  }
}

// --- Non-record targets ---

macro_rules! impl_value_target {
  ($($ty:ty),* $(,)?) => {
    $(
      impl Injectable for $ty {
        fn reflect_mut(&mut self) -> ReflectMut<'_> {
          ReflectMut::Value { type_name: type_name::<$ty>() }
        }
      }
    )*
  };
}

impl_value_target!(
  (),
  bool,
  char,
  u8,
  u16,
  u32,
  u64,
  u128,
  usize,
  i8,
  i16,
  i32,
  i64,
  i128,
  isize,
  f32,
  f64,
  String,
  &'static str,
);

impl<T> Injectable for Vec<T> {
  fn reflect_mut(&mut self) -> ReflectMut<'_> {
    ReflectMut::Value {
      type_name: type_name::<Self>(),
    }
  }
}

// Shared handles cannot hand out `&mut` to their contents.
impl<T: ?Sized> Injectable for Arc<T> {
  fn reflect_mut(&mut self) -> ReflectMut<'_> {
    ReflectMut::Value {
      type_name: type_name::<Self>(),
    }
  }
}

impl<T: ?Sized> Injectable for std::rc::Rc<T> {
  fn reflect_mut(&mut self) -> ReflectMut<'_> {
    ReflectMut::Value {
      type_name: type_name::<Self>(),
    }
  }
}

// --- Pointer-like targets forward to their contents ---

impl<T: ?Sized + Injectable> Injectable for Box<T> {
  fn reflect_mut(&mut self) -> ReflectMut<'_> {
    (**self).reflect_mut()
  }
}

impl<T: ?Sized + Injectable> Injectable for &mut T {
  fn reflect_mut(&mut self) -> ReflectMut<'_> {
    (**self).reflect_mut()
  }
}

impl<T: Injectable> Injectable for Option<T> {
  fn reflect_mut(&mut self) -> ReflectMut<'_> {
    match self {
      Some(inner) => inner.reflect_mut(),
      None => ReflectMut::Null {
        type_name: type_name::<Self>(),
      },
    }
  }
}
