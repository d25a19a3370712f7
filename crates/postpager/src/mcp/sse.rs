use crate::prelude::{eprintln, *};
use axum::{
    extract::State,
    http::StatusCode,
    response::{
        sse::{Event, Sse},
        IntoResponse, Response,
    },
    routing::{get, post},
    Json, Router,
};
use futures::stream::{self, Stream};
use log::info;
use std::convert::Infallible;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub async fn run_sse(options: super::cli::SseOptions, global: crate::Global) -> Result<()> {
    let addr = format!("{}:{}", options.host, options.port);

    if global.verbose {
        eprintln!("Starting MCP server with SSE transport on {addr}...");
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {addr}: {e}"))?;

    info!("MCP server listening on http://{addr}");
    if global.verbose {
        eprintln!("SSE endpoint: http://{addr}/sse");
        eprintln!("Message endpoint: http://{addr}/message");
    }

    axum::serve(listener, router(global))
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

fn router(global: crate::Global) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/sse", get(sse_handler))
        .route("/message", post(message_handler))
        .layer(cors)
        .with_state(Arc::new(global))
}

async fn sse_handler(
    State(_global): State<Arc<crate::Global>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = stream::once(async { Ok(Event::default().data("MCP SSE endpoint ready")) });
    Sse::new(stream)
}

/// Takes the raw body; malformed JSON is answered with a -32700 reply.
/// Notifications get an empty 202 Accepted.
async fn message_handler(State(global): State<Arc<crate::Global>>, body: String) -> Response {
    match super::handle_request(&body, &global).await {
        Some(response) => Json(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}
