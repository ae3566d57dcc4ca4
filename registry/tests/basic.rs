use pretty_assertions::assert_eq;
use spindle_registry::Registry;
use std::any::type_name;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

// --- Test Fixtures ---

#[derive(Debug)]
struct MockDependency;

trait Greeter: Send + Sync {
  fn greet(&self) -> String;
}

struct EnglishGreeter;
impl Greeter for EnglishGreeter {
  fn greet(&self) -> String {
    "Hello!".to_string()
  }
}

// Collects formatted log output so warnings can be asserted on.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
  fn contents(&self) -> String {
    String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
  }
}

impl Write for CapturedLogs {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    self.0.lock().unwrap().extend_from_slice(buf);
    Ok(buf.len())
  }

  fn flush(&mut self) -> io::Result<()> {
    Ok(())
  }
}

// --- Registration & Lookup ---

#[test]
fn test_get_returns_registered_instance() {
  // Arrange
  let registry = Registry::new("TestRegistry");
  let dependency = Arc::new(MockDependency);
  registry.register_shared("MockDependency", Arc::clone(&dependency));

  // Act
  let found = registry.get("MockDependency").expect("dependency should exist");

  // Assert
  let instance = found.downcast::<MockDependency>().unwrap();
  assert!(Arc::ptr_eq(&instance, &dependency));
  assert_eq!(found.type_name(), type_name::<MockDependency>());
  assert!(found.is::<MockDependency>());
}

#[test]
fn test_get_missing_returns_none() {
  let registry = Registry::new("TestRegistry");
  assert!(registry.get("NonExistentDependency").is_none());
  assert!(!registry.contains("NonExistentDependency"));
}

#[test]
fn test_register_overwrites_existing_instance() {
  // Arrange
  let registry = Registry::new("TestRegistry");
  let first = Arc::new(MockDependency);
  let second = Arc::new(MockDependency);

  // Act
  registry.register_shared("MockDependency", Arc::clone(&first));
  registry.register_shared("MockDependency", Arc::clone(&second));

  // Assert
  let instance = registry.get_as::<MockDependency>("MockDependency").unwrap();
  assert!(Arc::ptr_eq(&instance, &second));
  assert!(!Arc::ptr_eq(&instance, &first));
  assert_eq!(registry.len(), 1);
}

#[test]
fn test_register_overwrite_logs_warning() {
  // Arrange
  let logs = CapturedLogs::default();
  let writer = logs.clone();
  let subscriber = tracing_subscriber::fmt()
    .with_writer(move || writer.clone())
    .with_ansi(false)
    .finish();
  let registry = Registry::new("TestRegistry");

  // Act
  tracing::subscriber::with_default(subscriber, || {
    registry.register("MockDependency", MockDependency);
    registry.register("Other", MockDependency);
    registry.register("MockDependency", MockDependency);
  });

  // Assert
  let output = logs.contents();
  assert_eq!(output.matches("WARN").count(), 1);
  assert!(output.contains("Dependency MockDependency is already registered. Overwriting."));
  assert!(output.contains("registry=\"TestRegistry\""));
}

#[test]
fn test_register_accepts_any_value_shape() {
  let registry = Registry::new("TestRegistry");
  registry.register("unit", ());
  registry.register("number", 42_u64);
  registry.register("maybe", Option::<String>::None);
  registry.register_shared::<dyn Greeter>("greeter", Arc::new(EnglishGreeter));

  assert_eq!(*registry.get_as::<u64>("number").unwrap(), 42);
  assert!(registry.get_as::<Option<String>>("maybe").unwrap().is_none());
  assert_eq!(registry.get_as::<dyn Greeter>("greeter").unwrap().greet(), "Hello!");
  assert_eq!(registry.len(), 4);
}

#[test]
fn test_get_as_wrong_type_returns_none() {
  let registry = Registry::new("TestRegistry");
  registry.register("number", 7_u32);

  assert!(registry.get_as::<u64>("number").is_none());
  assert!(registry.get_as::<u32>("number").is_some());
  assert!(registry.get_as::<u32>("missing").is_none());
}

#[test]
fn test_empty_registry_name_is_allowed() {
  let registry = Registry::new("");
  registry.register("a", 1_u8);
  assert_eq!(registry.name(), "");
  assert_eq!(Registry::default().name(), "default");
}

// --- Listing ---

#[test]
fn test_list_dependencies_on_empty_registry() {
  let registry = Registry::new("TestRegistry");

  let dependencies = registry.list_dependencies();

  assert_eq!(dependencies, vec!["No dependencies registered.".to_string()]);
  assert!(registry.is_empty());
}

#[test]
fn test_list_dependencies_formats_name_and_type() {
  let registry = Registry::new("TestRegistry");
  registry.register("MockDependency", MockDependency);

  let dependencies = registry.list_dependencies();

  assert_eq!(
    dependencies,
    vec![format!("MockDependency: {}", type_name::<MockDependency>())]
  );
}

#[test]
fn test_list_dependencies_reports_trait_objects_and_is_sorted() {
  let registry = Registry::new("TestRegistry");
  registry.register_shared::<dyn Greeter>("b_greeter", Arc::new(EnglishGreeter));
  registry.register("a_count", 3_i32);

  let dependencies = registry.list_dependencies();

  assert_eq!(
    dependencies,
    vec![
      "a_count: i32".to_string(),
      format!("b_greeter: {}", type_name::<dyn Greeter>()),
    ]
  );
}
