//! MCP server handler bridging rmcp requests to the workshop tool core.

use std::future::Future;
use std::sync::Arc;

use rmcp::handler::server::ServerHandler;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, GetPromptRequestParam, GetPromptResult,
    Implementation, ListPromptsResult, ListResourcesResult, ListToolsResult,
    PaginatedRequestParam, Prompt, ReadResourceRequestParam, ReadResourceResult, Resource,
    ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::{RequestContext, RoleServer};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{info_span, Instrument};

pub use super::context::AppState;
use super::dispatch::Dispatcher;
use super::{prompts, resources::workshop_docs};
use crate::models::invocation::{ContentBlock, InvocationResult};
use crate::models::prompt::{PromptExpansion, PromptRole};
use crate::AppError;

/// Name reported in the `initialize` handshake.
pub const SERVER_NAME: &str = "ai-workshop-mcp-server";

const INSTRUCTIONS: &str = "AI-powered development tools for the workshop: code review, test \
     generation, optimization, security scanning and documentation. Reference documents are \
     available as workshop:// resources.";

/// MCP server exposing the five workshop tools, three resources and three
/// prompt templates.
#[derive(Clone)]
pub struct WorkshopServer {
    state: Arc<AppState>,
    dispatcher: Dispatcher,
}

impl WorkshopServer {
    /// Create a new MCP server bound to shared application state.
    #[must_use]
    pub fn new(state: Arc<AppState>) -> Self {
        let dispatcher = Dispatcher::new(Arc::clone(&state.model));
        Self { state, dispatcher }
    }

    /// Access the shared application state.
    #[must_use]
    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// Access the tool dispatcher.
    #[must_use]
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Tool definitions in catalog order.
    #[must_use]
    pub fn all_tools(&self) -> Vec<Tool> {
        self.dispatcher
            .capabilities()
            .into_iter()
            .map(|descriptor| {
                Tool::new(
                    descriptor.name,
                    descriptor.description,
                    Arc::new(descriptor.input_schema),
                )
            })
            .collect()
    }
}

/// Convert a dispatcher result into an MCP tool result.
#[must_use]
pub fn to_call_tool_result(result: InvocationResult) -> CallToolResult {
    let content = result
        .content
        .into_iter()
        .map(|block| match block {
            ContentBlock::Text(text) => Content::text(text),
        })
        .collect();

    if result.is_error {
        CallToolResult::error(content)
    } else {
        CallToolResult::success(content)
    }
}

/// Render a prompt expansion in MCP wire form.
///
/// MCP messages carry only `user` and `assistant` roles, so the system
/// instruction is delivered as the leading `user` message.
#[must_use]
pub fn prompt_wire_value(expansion: &PromptExpansion) -> Value {
    let messages: Vec<Value> = expansion
        .messages
        .iter()
        .map(|message| {
            let role = match message.role {
                PromptRole::System | PromptRole::User => "user",
            };
            json!({
                "role": role,
                "content": { "type": "text", "text": message.content },
            })
        })
        .collect();

    json!({ "description": expansion.description, "messages": messages })
}

/// Re-shape a domain value into its rmcp model type through serde.
fn to_wire<S: Serialize, T: DeserializeOwned>(value: &S) -> Result<T, rmcp::ErrorData> {
    serde_json::to_value(value)
        .and_then(serde_json::from_value)
        .map_err(|err| {
            rmcp::ErrorData::internal_error(format!("wire conversion failed: {err}"), None)
        })
}

fn to_error_data(err: &AppError) -> rmcp::ErrorData {
    match err {
        AppError::NotFound(_) => rmcp::ErrorData::resource_not_found(err.to_string(), None),
        AppError::Validation(_) => rmcp::ErrorData::invalid_params(err.to_string(), None),
        _ => rmcp::ErrorData::internal_error(err.to_string(), None),
    }
}

impl ServerHandler for WorkshopServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder()
                .enable_prompts()
                .enable_resources()
                .enable_tools()
                .build(),
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Implementation::default()
            },
            instructions: Some(INSTRUCTIONS.into()),
            ..ServerInfo::default()
        }
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListToolsResult, rmcp::ErrorData>> + Send + '_ {
        std::future::ready(Ok(ListToolsResult::with_all_items(self.all_tools())))
    }

    fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<CallToolResult, rmcp::ErrorData>> + Send + '_ {
        let span = info_span!("call_tool", tool = %request.name);

        async move {
            let arguments = request.arguments.unwrap_or_default();
            let result = self
                .dispatcher
                .invoke(&request.name, arguments, &context.ct)
                .await;
            Ok(to_call_tool_result(result))
        }
        .instrument(span)
    }

    fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListResourcesResult, rmcp::ErrorData>> + Send + '_ {
        let resources = workshop_docs::list_resources()
            .iter()
            .map(to_wire)
            .collect::<Result<Vec<Resource>, _>>()
            .map(ListResourcesResult::with_all_items);

        std::future::ready(resources)
    }

    fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ReadResourceResult, rmcp::ErrorData>> + Send + '_ {
        let span = info_span!("read_resource", uri = %request.uri);

        async move {
            let document =
                workshop_docs::read_resource(self.state.documents.as_ref(), &request.uri)
                    .await
                    .map_err(|err| to_error_data(&err))?;
            to_wire(&json!({ "contents": [document] }))
        }
        .instrument(span)
    }

    fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListPromptsResult, rmcp::ErrorData>> + Send + '_ {
        let prompts = prompts::list_prompts()
            .iter()
            .map(to_wire)
            .collect::<Result<Vec<Prompt>, _>>()
            .map(ListPromptsResult::with_all_items);

        std::future::ready(prompts)
    }

    fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<GetPromptResult, rmcp::ErrorData>> + Send + '_ {
        let arguments = request.arguments.unwrap_or_default();
        let result = prompts::get_prompt(&request.name, &arguments)
            .map_err(|err| to_error_data(&err))
            .and_then(|expansion| to_wire(&prompt_wire_value(&expansion)));

        std::future::ready(result)
    }
}
