use crate::prelude::*;
use clap::Parser;

mod error;
mod mcp;
mod pagination;
mod posts;
mod prelude;

/// Public mock REST endpoint the posts are read from
pub const DEFAULT_API_BASE: &str = "https://jsonplaceholder.typicode.com";

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Page through a REST post listing from the terminal or over MCP"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Base URL of the posts API
    #[clap(
        long,
        env = "POSTPAGER_API_BASE",
        global = true,
        default_value = DEFAULT_API_BASE
    )]
    api_base: String,

    /// Whether to display additional information.
    #[clap(long, env = "POSTPAGER_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Browse posts one page at a time
    Posts(crate::posts::App),

    /// Calculate a pagination window without fetching anything
    Pagination(crate::pagination::App),

    /// Model Context Protocol server
    Mcp(crate::mcp::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Posts(sub_app) => crate::posts::run(sub_app, app.global).await,
        SubCommands::Pagination(sub_app) => crate::pagination::run(sub_app, app.global),
        SubCommands::Mcp(sub_app) => crate::mcp::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
