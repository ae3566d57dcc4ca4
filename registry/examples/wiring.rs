//! A small application wired through a `Registry`: a logger, two
//! repositories, a storage backend and a service that consumes them.
//!
//! Run with `RUST_LOG=debug cargo run -p spindle_registry --example wiring`.

use spindle_registry::{resolve_all, Injectable, Registry};
use std::collections::HashMap;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

// --- Logger ---

trait Logger: Send + Sync {
  fn info(&self, message: &str, fields: &[(&str, &dyn std::fmt::Display)]);
}

struct TracingLogger;

impl Logger for TracingLogger {
  fn info(&self, message: &str, fields: &[(&str, &dyn std::fmt::Display)]) {
    let fields = fields
      .iter()
      .map(|(key, value)| format!("{}={}", key, value))
      .collect::<Vec<_>>()
      .join(" ");
    tracing::info!(target: "app", "{} {}", message, fields);
  }
}

// --- Repositories ---

trait Repository: Send + Sync {
  fn get_by_id(&self, id: u32) -> Option<String>;
}

#[derive(Injectable)]
struct InMemoryRepository {
  #[inject("TracingLogger")]
  pub logger: Option<Arc<dyn Logger>>,
  entities: HashMap<u32, String>,
}

impl InMemoryRepository {
  fn new() -> Self {
    Self {
      logger: None,
      entities: HashMap::from([(1, "Entity One".to_string()), (2, "Entity Two".to_string())]),
    }
  }
}

impl Repository for InMemoryRepository {
  fn get_by_id(&self, id: u32) -> Option<String> {
    if let Some(logger) = &self.logger {
      logger.info("Fetching entity", &[("id", &id)]);
    }
    self.entities.get(&id).cloned()
  }
}

#[derive(Injectable)]
struct SomeOtherRepository {
  #[inject("TracingLogger")]
  pub logger: Option<Arc<dyn Logger>>,
  entities: HashMap<u32, String>,
}

impl SomeOtherRepository {
  fn new() -> Self {
    Self {
      logger: None,
      entities: HashMap::from([
        (1, "Some other Entity One".to_string()),
        (2, "Some other Entity Two".to_string()),
      ]),
    }
  }
}

impl Repository for SomeOtherRepository {
  fn get_by_id(&self, id: u32) -> Option<String> {
    if let Some(logger) = &self.logger {
      logger.info("Fetching some other entity", &[("id", &id)]);
    }
    self.entities.get(&id).cloned()
  }
}

// --- Storage ---

trait Storage: Send + Sync {
  fn download(&self, url: &str) -> std::io::Result<()>;
}

struct InMemoryStorage;

impl Storage for InMemoryStorage {
  fn download(&self, url: &str) -> std::io::Result<()> {
    println!("Downloading file from {}", url);
    Ok(())
  }
}

// --- Service ---

#[derive(Default, Injectable)]
struct Service {
  #[inject("InMemoryRepository")]
  pub repository: Option<Arc<dyn Repository>>,
  #[inject("InMemoryStorage")]
  pub storage: Option<Arc<dyn Storage>>,
  #[inject("TracingLogger")]
  pub logger: Option<Arc<dyn Logger>>,
}

impl Service {
  fn get_by_id(&self, id: u32) -> Option<String> {
    let logger = self.logger.as_ref()?;
    logger.info("Downloading file", &[("url", &"http://example.com")]);
    if let Some(storage) = &self.storage {
      if let Err(err) = storage.download("http://example.com") {
        tracing::error!(error = %err, "download failed");
      }
    }
    logger.info("Get repository by ID", &[("id", &id)]);
    self.repository.as_ref()?.get_by_id(id)
  }
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let registry = Registry::new("main");

  // Instances that depend on the logger are wired before they are shared.
  registry.register_shared::<dyn Logger>("TracingLogger", Arc::new(TracingLogger));

  let mut repository = InMemoryRepository::new();
  let mut other = SomeOtherRepository::new();
  resolve_all!(registry => repository, other);

  registry.register_shared::<dyn Repository>("SomeOtherRepository", Arc::new(other));
  registry.register_shared::<dyn Repository>("InMemoryRepository", Arc::new(repository));
  registry.register_shared::<dyn Storage>("InMemoryStorage", Arc::new(InMemoryStorage));

  let mut service = Service::default();
  resolve_all!(registry => service);

  println!("{:?}", registry.list_dependencies());
  println!("{:?}", service.get_by_id(1));
}
