use spindle_registry::{Injectable, Registry};
use std::panic;
use std::sync::Arc;

struct Mailer;

#[derive(Default, Injectable)]
struct Newsletter {
  #[inject("mailer")]
  pub mailer: Option<Arc<Mailer>>,
}

fn main() {
  let registry = Registry::new("missing-demo");

  // --- Using the fallible `resolve()` method ---
  println!("Resolving a target whose dependency was never registered...");

  let mut newsletter = Newsletter::default();
  match registry.resolve(&mut newsletter) {
    Ok(()) => panic!("Should not have resolved the newsletter!"),
    Err(err) => println!("Correctly received an error: {}", err),
  }

  // --- Using the panicking `resolve_all()` method ---
  println!("\nNow resolving the same target with `resolve_all()`...");

  let result = panic::catch_unwind(panic::AssertUnwindSafe(|| {
    registry.resolve_all(&mut [&mut newsletter]);
  }));

  assert!(result.is_err(), "resolve_all should have panicked.");
  println!("Successfully caught the expected panic from resolve_all.");
}
