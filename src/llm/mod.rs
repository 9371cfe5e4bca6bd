//! Language-model collaborator abstraction.
//!
//! The [`ModelClient`] trait is the only path by which tool invocations
//! reach the hosted model. The dispatcher builds a [`ModelRequest`] and
//! hands it to whichever client was injected into the application state.

pub mod azure;

use std::future::Future;
use std::pin::Pin;

use crate::Result;

/// Sampling options attached to a model request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionOptions {
    /// Sampling temperature.
    pub temperature: f32,
    /// Whether the model is asked for a JSON object reply.
    pub json_output: bool,
}

/// A fully-rendered chat request: one system instruction, one user turn.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelRequest {
    /// System instruction.
    pub system: String,
    /// User message.
    pub user: String,
    /// Sampling options.
    pub options: CompletionOptions,
}

/// Interface to the hosted language model.
///
/// Implementations own their timeout policy. Dropping the returned future
/// must abort the outbound call.
pub trait ModelClient: Send + Sync {
    /// Send `request` and return the text of the first completion choice.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`](crate::AppError::Upstream) on network,
    /// authentication, or malformed-response failures.
    fn complete<'a>(
        &'a self,
        request: &'a ModelRequest,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>>;
}
