use spindle_registry::{Injectable, LocalRegistry};
use std::cell::RefCell;
use std::rc::Rc;

// An audit trail shared through `Rc<RefCell<..>>`, which the thread-safe
// `Registry` could not hold.
struct AuditTrail {
  events: RefCell<Vec<String>>,
}

#[derive(Default, Injectable)]
struct Checkout {
  #[inject("audit")]
  pub audit: Option<Rc<AuditTrail>>,
}

impl Checkout {
  fn pay(&self, amount: u32) {
    if let Some(audit) = &self.audit {
      audit.events.borrow_mut().push(format!("paid {}", amount));
    }
  }
}

fn main() {
  let mut registry = LocalRegistry::new("local-demo");
  let audit = Rc::new(AuditTrail {
    events: RefCell::new(Vec::new()),
  });
  registry.register_shared("audit", Rc::clone(&audit));

  let mut checkout = Checkout::default();
  registry.resolve(&mut checkout).expect("audit trail is registered");
  checkout.pay(42);

  println!("{:?}", registry.list_dependencies());
  println!("{:?}", audit.events.borrow());
  assert_eq!(*audit.events.borrow(), vec!["paid 42".to_string()]);
}
