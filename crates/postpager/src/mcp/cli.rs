#[derive(Debug, clap::Parser)]
#[command(name = "mcp")]
#[command(about = "Serve the posts_list and pagination_calculate tools over MCP")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Read JSON-RPC requests from stdin, one per line
    #[clap(name = "stdio")]
    Stdio,

    /// Accept JSON-RPC requests on POST /message (GET /sse for the event stream)
    #[clap(name = "sse")]
    Sse(SseOptions),
}

/// Listen address of the HTTP transport
#[derive(Debug, clap::Args)]
pub struct SseOptions {
    /// TCP port for the HTTP listener
    #[arg(long, default_value_t = 3000)]
    pub port: u16,

    /// Interface address, e.g. 0.0.0.0 to accept remote agents
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
}
