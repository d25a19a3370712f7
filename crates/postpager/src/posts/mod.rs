use crate::prelude::{eprintln, *};
use log::{debug, info};
use postpager_core::posts::Post;

pub mod list;

// Re-export public data functions
pub use list::list_posts_data;

#[derive(Debug, clap::Parser)]
#[command(name = "posts")]
#[command(about = "Browse posts one page at a time")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List one page of posts followed by its page buttons
    #[clap(name = "list")]
    List(list::ListOptions),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Posts API Base: {}", global.api_base);
        eprintln!();
    }

    match app.command {
        Commands::List(options) => list::run(options, global).await,
    }
}

pub fn posts_url(api_base: &str) -> String {
    format!("{}/posts", api_base.trim_end_matches('/'))
}

/// Fetch the complete post list in a single request. Failures are not retried.
pub async fn fetch_posts(client: &reqwest::Client, api_base: &str) -> Result<Vec<Post>, Error> {
    let url = posts_url(api_base);
    debug!("GET {url}");

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| Error::Network(f!("Failed to fetch {url}: {e}")))?;

    let status = response.status();
    debug!("GET {url} returned {status}");

    if !status.is_success() {
        return Err(Error::Network(f!("Failed to fetch {url}: HTTP {status}")));
    }

    let posts: Vec<Post> = response
        .json()
        .await
        .map_err(|e| Error::Decode(f!("Failed to parse posts from {url}: {e}")))?;

    info!("Fetched {} posts from {url}", posts.len());

    Ok(posts)
}
