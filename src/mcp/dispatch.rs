//! Tool invocation dispatcher.
//!
//! Resolves a tool name against the closed capability set, validates the
//! arguments, performs exactly one model call, and folds every failure into
//! a single `"Error: ..."` content block so nothing escapes the dispatch
//! boundary.

use std::sync::Arc;

use serde_json::{Map, Value};
use tokio_util::sync::CancellationToken;
use tracing::{info, info_span, warn, Instrument};

use crate::llm::ModelClient;
use crate::mcp::{catalog, tools};
use crate::models::capability::{Capability, CapabilityDescriptor, CapabilityKind};
use crate::models::invocation::InvocationResult;
use crate::{AppError, Result};

/// Stateless router from tool calls to the model collaborator.
#[derive(Clone)]
pub struct Dispatcher {
    model: Arc<dyn ModelClient>,
}

impl Dispatcher {
    /// Create a dispatcher that sends requests through `model`.
    #[must_use]
    pub fn new(model: Arc<dyn ModelClient>) -> Self {
        Self { model }
    }

    /// The capability catalog in declaration order.
    #[must_use]
    pub fn capabilities(&self) -> Vec<CapabilityDescriptor> {
        catalog::list_capabilities()
    }

    /// Invoke tool `name`, reporting any failure as error content.
    pub async fn invoke(
        &self,
        name: &str,
        arguments: Map<String, Value>,
        ct: &CancellationToken,
    ) -> InvocationResult {
        let invocation_id = uuid::Uuid::new_v4();
        let span = info_span!("invoke", tool = %name, %invocation_id);

        async move {
            match self.execute(name, arguments, ct).await {
                Ok(text) => {
                    info!(bytes = text.len(), "tool invocation succeeded");
                    InvocationResult::text(text)
                }
                Err(err) => {
                    warn!(%err, "tool invocation failed");
                    InvocationResult::error(&err)
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Invoke tool `name`, returning the typed error on failure.
    ///
    /// # Errors
    ///
    /// - `AppError::UnknownCapability` if `name` is not in the catalog.
    /// - `AppError::Validation` if `arguments` do not satisfy the schema.
    /// - `AppError::Upstream` if the model call fails or its reply cannot be
    ///   shaped.
    /// - `AppError::Cancelled` if `ct` fires before the model answers.
    pub async fn execute(
        &self,
        name: &str,
        arguments: Map<String, Value>,
        ct: &CancellationToken,
    ) -> Result<String> {
        let kind = CapabilityKind::from_name(name)
            .ok_or_else(|| AppError::UnknownCapability(format!("unknown tool: {name}")))?;
        let capability = Capability::parse(kind, arguments)?;
        let request = tools::build_request(&capability);

        // Dropping the losing branch aborts the in-flight HTTP request.
        let reply = tokio::select! {
            biased;
            () = ct.cancelled() => {
                return Err(AppError::Cancelled("request cancelled".into()));
            }
            reply = self.model.complete(&request) => reply,
        }
        .map_err(|err| upstream(kind, &err))?;

        tools::shape_response(kind, reply).map_err(|err| upstream(kind, &err))
    }
}

fn upstream(kind: CapabilityKind, err: &AppError) -> AppError {
    AppError::Upstream(format!("{} failed: {}", kind.action(), err.detail()))
}
