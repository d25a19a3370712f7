mod pagination;
mod posts;

use serde::{Deserialize, Serialize};

// Re-export types needed by tool handlers
pub use super::{JsonRpcError, Tool, INTERNAL_ERROR, INVALID_PARAMS};

// MCP Protocol types for tools
#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ServerCapabilities {
    pub tools: Option<ToolsCapability>,
}

#[derive(Debug, Serialize)]
pub struct ToolsCapability {}

#[derive(Debug, Serialize)]
pub struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
}

#[derive(Debug, Serialize)]
pub struct ToolsList {
    pub tools: Vec<Tool>,
}

#[derive(Debug, Deserialize)]
pub struct CallToolParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct CallToolResult {
    pub content: Vec<Content>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum Content {
    #[serde(rename = "text")]
    Text { text: String },
}

pub fn handle_initialize() -> Result<serde_json::Value, JsonRpcError> {
    let result = InitializeResult {
        protocol_version: "2024-11-05".to_string(),
        capabilities: ServerCapabilities {
            tools: Some(ToolsCapability {}),
        },
        server_info: ServerInfo {
            name: "postpager".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };

    to_json_value(result)
}

pub fn handle_tools_list() -> Result<serde_json::Value, JsonRpcError> {
    let tools = vec![
        Tool {
            name: "posts_list".to_string(),
            description: "Fetch the post list and return one page of it. The response holds the posts of the page, the pagination window (total_pages, current_set, start_page, end_page, start_index, end_index) and the page buttons to show, including the pages the previous-set and next-set controls jump to.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "page": {
                        "type": "number",
                        "description": "Page number, 1-indexed (default: 1)"
                    },
                    "items_per_page": {
                        "type": "number",
                        "description": "Posts per page (default: 5)"
                    },
                    "buttons_per_page": {
                        "type": "number",
                        "description": "Page buttons shown at once (default: 5)"
                    }
                }
            }),
        },
        Tool {
            name: "pagination_calculate".to_string(),
            description: "Calculate the pagination window for a list of total_items items without fetching anything. Returns total_pages, current_set, start_page, end_page, start_index and end_index. end_page < start_page means there are no page buttons to show.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "total_items": {
                        "type": "number",
                        "description": "Number of items in the full list"
                    },
                    "current_page": {
                        "type": "number",
                        "description": "Page number, 1-indexed"
                    },
                    "items_per_page": {
                        "type": "number",
                        "description": "Items per page (default: 5)"
                    },
                    "buttons_per_page": {
                        "type": "number",
                        "description": "Page buttons shown at once (default: 5)"
                    }
                },
                "required": ["total_items", "current_page"]
            }),
        },
    ];

    to_json_value(ToolsList { tools })
}

pub async fn handle_tools_call(
    params: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    let params: CallToolParams = serde_json::from_value(params.unwrap_or(serde_json::Value::Null))
        .map_err(|e| JsonRpcError::new(INVALID_PARAMS, format!("Invalid params: {e}")))?;

    match params.name.as_str() {
        "posts_list" => posts::handle_posts_list(params.arguments, global).await,
        "pagination_calculate" => {
            pagination::handle_pagination_calculate(params.arguments, global)
        }
        _ => Err(JsonRpcError::new(
            INVALID_PARAMS,
            format!("Unknown tool: {}", params.name),
        )),
    }
}

/// Deserialize tool arguments, treating missing arguments as an empty object
pub fn parse_arguments<T: serde::de::DeserializeOwned>(
    arguments: Option<serde_json::Value>,
) -> Result<T, JsonRpcError> {
    let arguments = arguments.unwrap_or_else(|| serde_json::json!({}));
    serde_json::from_value(arguments)
        .map_err(|e| JsonRpcError::new(INVALID_PARAMS, format!("Invalid arguments: {e}")))
}

/// Wrap a serializable value as pretty JSON text content
pub fn text_result<T: Serialize>(value: &T) -> Result<serde_json::Value, JsonRpcError> {
    let json_string = serde_json::to_string_pretty(value)
        .map_err(|e| JsonRpcError::new(INTERNAL_ERROR, format!("Serialization error: {e}")))?;

    to_json_value(CallToolResult {
        content: vec![Content::Text { text: json_string }],
        is_error: None,
    })
}

fn to_json_value<T: Serialize>(value: T) -> Result<serde_json::Value, JsonRpcError> {
    serde_json::to_value(value)
        .map_err(|e| JsonRpcError::new(INTERNAL_ERROR, format!("Internal error: {e}")))
}
