use crate::prelude::{eprintln, *};
use log::debug;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

/// Serve one JSON-RPC request per line until stdin closes.
pub async fn run_stdio(global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Starting MCP server with stdio transport...");
        eprintln!();
    }

    let reader = BufReader::new(tokio::io::stdin());
    let writer = tokio::io::stdout();

    serve_lines(reader, writer, &global).await
}

/// Answer each non-blank line of `reader` on `writer`, one response per line.
///
/// Notifications get no line back. Returns when `reader` reaches EOF.
async fn serve_lines<R, W>(mut reader: R, mut writer: W, global: &crate::Global) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line).await?;

        if bytes_read == 0 {
            debug!("input closed, stopping MCP server");
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        debug!("Received: {trimmed}");

        let Some(response) = super::handle_request(trimmed, global).await else {
            continue;
        };
        let response_json = serde_json::to_string(&response)?;

        debug!("Sending: {response_json}");

        writer.write_all(response_json.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }

    Ok(())
}
