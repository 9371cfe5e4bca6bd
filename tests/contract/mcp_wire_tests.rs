//! Contract tests for conversions into rmcp wire types.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use ai_workshop_mcp::mcp::handler::{
    prompt_wire_value, to_call_tool_result, WorkshopServer, SERVER_NAME,
};
use ai_workshop_mcp::mcp::prompts::get_prompt;
use ai_workshop_mcp::models::invocation::InvocationResult;
use ai_workshop_mcp::llm::{ModelClient, ModelRequest};
use ai_workshop_mcp::mcp::context::AppState;
use ai_workshop_mcp::storage::{DocumentStore, FsDocumentStore};
use ai_workshop_mcp::{AppError, GlobalConfig};
use rmcp::ServerHandler;
use serde_json::{json, Map, Value};

struct UnreachableModel;

impl ModelClient for UnreachableModel {
    fn complete<'a>(
        &'a self,
        _request: &'a ModelRequest,
    ) -> Pin<Box<dyn Future<Output = ai_workshop_mcp::Result<String>> + Send + 'a>> {
        Box::pin(async { Err(AppError::Upstream("no model in contract tests".into())) })
    }
}

fn test_state() -> AppState {
    let documents: Arc<dyn DocumentStore> = Arc::new(FsDocumentStore::new("resources"));
    AppState::new(
        Arc::new(GlobalConfig::default()),
        Arc::new(UnreachableModel),
        documents,
    )
}

#[test]
fn success_result_is_not_error() {
    let result = to_call_tool_result(InvocationResult::text("{\"score\": 90}"));
    assert_ne!(result.is_error, Some(true));
    assert_eq!(result.content.len(), 1);

    let wire = serde_json::to_value(&result).unwrap();
    assert_eq!(wire["content"][0]["type"], "text");
    assert_eq!(wire["content"][0]["text"], "{\"score\": 90}");
}

#[test]
fn error_result_is_flagged() {
    let err = AppError::UnknownCapability("unknown tool: nope".into());
    let result = to_call_tool_result(InvocationResult::error(&err));
    assert_eq!(result.is_error, Some(true));

    let wire = serde_json::to_value(&result).unwrap();
    let text = wire["content"][0]["text"].as_str().unwrap();
    assert!(text.starts_with("Error:"));
    assert!(text.contains("nope"));
}

#[test]
fn prompt_roles_are_mapped_to_user() {
    let mut arguments = Map::new();
    arguments.insert("code".into(), Value::String("x=1".into()));
    let expansion = get_prompt("refactor_for_performance", &arguments).unwrap();

    let wire = prompt_wire_value(&expansion);
    let messages = wire["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    for message in messages {
        assert_eq!(message["role"], "user");
        assert_eq!(message["content"]["type"], "text");
    }
    assert!(messages[1]["content"]["text"]
        .as_str()
        .unwrap()
        .contains("x=1"));
    assert_eq!(wire["description"], json!(expansion.description));
}

#[test]
fn prompt_wire_value_deserializes_as_rmcp_result() {
    let mut arguments = Map::new();
    arguments.insert("spec".into(), Value::String("openapi: 3.1.0".into()));
    let expansion = get_prompt("generate_api_from_spec", &arguments).unwrap();

    let parsed: rmcp::model::GetPromptResult =
        serde_json::from_value(prompt_wire_value(&expansion)).unwrap();
    assert_eq!(parsed.messages.len(), 2);
}

#[test]
fn server_advertises_catalog_and_capabilities() {
    let server = WorkshopServer::new(Arc::new(test_state()));

    let tools = server.all_tools();
    assert_eq!(tools.len(), 5);
    assert_eq!(tools[0].name, "code_review");
    assert_eq!(tools[4].name, "generate_documentation");
    assert!(tools
        .iter()
        .all(|tool| tool.input_schema.get("properties").is_some()));

    let info = server.get_info();
    assert_eq!(info.server_info.name, SERVER_NAME);
    assert!(info.capabilities.tools.is_some());
    assert!(info.capabilities.resources.is_some());
    assert!(info.capabilities.prompts.is_some());
}
