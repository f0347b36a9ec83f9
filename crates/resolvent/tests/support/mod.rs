//! Shared fixtures for the integration tests.
//!
//! Set `RESOLVENT_LOG` (or `RUST_LOG`) to see the engine's trace output
//! while a test runs:
//!
//! ```bash
//! RESOLVENT_LOG=resolvent=trace cargo test -p resolvent
//! ```

use std::sync::{Arc, Once};

use tracing_subscriber::EnvFilter;

use resolvent::{Container, Instance, ResolverChain, ServiceRegistry, Value};

static INIT: Once = Once::new();

/// Installs a stderr subscriber when `RESOLVENT_LOG` or `RUST_LOG` is
/// set; a no-op otherwise, and safe to call from every test.
pub fn init_tracing() {
    INIT.call_once(|| {
        let Ok(filter) = std::env::var("RESOLVENT_LOG").or_else(|_| std::env::var("RUST_LOG"))
        else {
            return;
        };
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_writer(std::io::stderr)
            .try_init()
            .ok();
    });
}

/// A service instance implementing the `Logger` interface.
pub fn logger() -> Value {
    Value::Instance(Instance::new("FileLogger", ()).implementing(["Logger"]))
}

/// A registry preloaded with the configuration tree and the services
/// the tests resolve against.
pub fn registry() -> ServiceRegistry {
    let mut registry = ServiceRegistry::new();
    registry.register(
        "config",
        Value::from(serde_json::json!({
            "database": {"host": "localhost", "port": 5432},
            "app": {"debug": true, "name": "resolvent"},
        })),
    );
    registry.register("custom.logger", logger());
    registry.register("Logger", logger());
    registry
}

pub fn container() -> Arc<dyn Container> {
    Arc::new(registry())
}

/// The conventional chain over the preloaded registry.
pub fn chain() -> ResolverChain {
    init_tracing();
    ResolverChain::with_defaults(container())
}
