//! Tool dispatch: lookup, validate, build, execute.
//!
//! The dispatcher is the single entry point for invoking a tool by name. It
//! holds no per-call state and is cheap to clone, so every transport shares
//! one instance.

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;

use futures::FutureExt;
use serde_json::{Map, Value};
use tracing::{debug, error, info, warn};

use super::backend::{Backend, HttpBackend};
use super::error::ToolError;
use super::registry::ToolRegistry;
use super::request;
use super::validator::validate;
use crate::core::config::BackendConfig;

/// Routes invocations to the admin API.
#[derive(Clone)]
pub struct ToolDispatcher {
    registry: Arc<ToolRegistry>,
    backend: Arc<dyn Backend>,
}

impl std::fmt::Debug for ToolDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolDispatcher")
            .field("tools", &self.registry.len())
            .finish_non_exhaustive()
    }
}

impl ToolDispatcher {
    pub fn new(registry: Arc<ToolRegistry>, backend: Arc<dyn Backend>) -> Self {
        Self { registry, backend }
    }

    /// Dispatcher over the builtin tool table and an HTTP backend.
    pub fn from_config(config: &BackendConfig) -> Result<Self, ToolError> {
        let registry = ToolRegistry::builtin()?;
        let backend = HttpBackend::new(config)?;
        debug!("Backend client: {:?}", backend);
        Ok(Self::new(Arc::new(registry), Arc::new(backend)))
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Invoke a tool by name.
    ///
    /// Every failure is returned as a [`ToolError`]; a panic during the call
    /// is reported as [`ToolError::Internal`].
    pub async fn invoke(&self, name: &str, arguments: Map<String, Value>) -> Result<Value, ToolError> {
        let started = Instant::now();
        let outcome = AssertUnwindSafe(self.run(name, arguments))
            .catch_unwind()
            .await
            .unwrap_or_else(|payload| {
                let msg = panic_message(payload.as_ref());
                error!("Tool '{}' panicked: {}", name, msg);
                Err(ToolError::internal(format!("tool panicked: {}", msg)))
            });

        match &outcome {
            Ok(_) => info!("Tool '{}' completed in {:?}", name, started.elapsed()),
            Err(e) => warn!("Tool '{}' failed ({:?}): {}", name, e.kind(), e),
        }
        outcome
    }

    /// Invoke a tool, giving up as soon as `cancelled` resolves.
    ///
    /// Dropping the in-flight future aborts the outbound request.
    pub async fn invoke_cancellable<F>(
        &self,
        name: &str,
        arguments: Map<String, Value>,
        cancelled: F,
    ) -> Result<Value, ToolError>
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            result = self.invoke(name, arguments) => result,
            _ = cancelled => {
                info!("Tool '{}' cancelled by client", name);
                Err(ToolError::network("request cancelled"))
            }
        }
    }

    async fn run(&self, name: &str, arguments: Map<String, Value>) -> Result<Value, ToolError> {
        let def = self.registry.lookup(name)?;
        let validated = validate(def.parameters, &arguments)?;
        let request = request::build(def, &validated).inspect_err(|e| {
            error!("Request build defect in '{}': {}", name, e);
        })?;
        debug!("Tool '{}' -> {} {}", name, request.method, request.url());
        self.backend.execute(&request).await
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
