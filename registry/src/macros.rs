//! Public macros for wiring several targets at once.

/// Resolves every target against a registry, panicking on the first failure.
///
/// `resolve_all!(registry => a, b, c)` resolves against `registry`;
/// `resolve_all!(a, b)` resolves against [`global()`](crate::global).
/// Each target is borrowed mutably, so pass places rather than temporaries.
///
/// # Panics
///
/// Panics with `failed to resolve dependency: ...` when any target fails.
///
/// # Examples
///
/// ```
/// use spindle_registry::{resolve_all, Injectable, Registry};
/// use std::sync::Arc;
///
/// struct Clock;
///
/// #[derive(Default, Injectable)]
/// struct Scheduler {
///   #[inject("clock")]
///   pub clock: Option<Arc<Clock>>,
/// }
///
/// #[derive(Default, Injectable)]
/// struct Reporter {
///   #[inject("clock")]
///   pub clock: Option<Arc<Clock>>,
/// }
///
/// let registry = Registry::new("app");
/// registry.register("clock", Clock);
///
/// let mut scheduler = Scheduler::default();
/// let mut reporter = Reporter::default();
/// resolve_all!(registry => scheduler, reporter);
///
/// assert!(scheduler.clock.is_some());
/// assert!(reporter.clock.is_some());
/// ```
#[macro_export]
macro_rules! resolve_all {
  ($registry:expr => $($target:expr),+ $(,)?) => {
    $registry.resolve_all(&mut [$(&mut $target as &mut dyn $crate::Injectable),+])
  };

  ($($target:expr),+ $(,)?) => {
    $crate::global().resolve_all(&mut [$(&mut $target as &mut dyn $crate::Injectable),+])
  };
}
