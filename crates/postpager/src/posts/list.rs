use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use postpager_core::pagination::PaginationRequest;
use postpager_core::posts::{paginate_posts, Navigation, PostsPage};

use super::{fetch_posts, posts_url};

pub const DEFAULT_ITEMS_PER_PAGE: usize = 5;
pub const DEFAULT_BUTTONS_PER_PAGE: usize = 5;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ListOptions {
    /// Page number (1-indexed)
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Number of posts per page
    #[arg(
        short = 'l',
        long,
        env = "POSTPAGER_ITEMS_PER_PAGE",
        default_value_t = DEFAULT_ITEMS_PER_PAGE
    )]
    pub items_per_page: usize,

    /// Number of page buttons shown at once
    #[arg(
        short,
        long,
        env = "POSTPAGER_BUTTONS_PER_PAGE",
        default_value_t = DEFAULT_BUTTONS_PER_PAGE
    )]
    pub buttons_per_page: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: ListOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Fetching posts from {}...", posts_url(&global.api_base));
    }

    let posts_page = list_posts_data(
        &global.api_base,
        options.page,
        options.items_per_page,
        options.buttons_per_page,
    )
    .await?;

    if options.json {
        output_json(&posts_page)?;
    } else {
        output_formatted(&posts_page, &options)?;
    }

    Ok(())
}

/// Fetches the post list and returns the requested page as a structured PostsPage
pub async fn list_posts_data(
    api_base: &str,
    page: usize,
    items_per_page: usize,
    buttons_per_page: usize,
) -> Result<PostsPage> {
    // Reject bad sizes before touching the network
    PaginationRequest::new(0, page, items_per_page, buttons_per_page)
        .validate()
        .map_err(Error::from)?;

    let client = reqwest::Client::new();
    let posts = fetch_posts(&client, api_base).await?;

    let command = list_command(items_per_page, buttons_per_page);
    let posts_page = paginate_posts(posts, page, items_per_page, buttons_per_page, &command)
        .map_err(Error::from)?;

    Ok(posts_page)
}

/// The command that lists posts with the given sizes, omitting defaults
pub fn list_command(items_per_page: usize, buttons_per_page: usize) -> String {
    let mut command = String::from("postpager posts list");
    if items_per_page != DEFAULT_ITEMS_PER_PAGE {
        command.push_str(&f!(" --items-per-page {items_per_page}"));
    }
    if buttons_per_page != DEFAULT_BUTTONS_PER_PAGE {
        command.push_str(&f!(" --buttons-per-page {buttons_per_page}"));
    }
    command
}

/// Render the page buttons as a single line, e.g. `< 6 [7] 8 9 10 >`
///
/// `<` and `>` stand for the previous-set and next-set controls. The
/// current page is wrapped in brackets. Empty when there are no buttons.
pub fn format_button_bar(navigation: &Navigation) -> String {
    let mut parts: Vec<String> = Vec::new();

    if navigation.prev_set_page.is_some() {
        parts.push("<".to_string());
    }

    for button in &navigation.buttons {
        if button.active {
            parts.push(f!("[{}]", button.page));
        } else {
            parts.push(button.page.to_string());
        }
    }

    if navigation.next_set_page.is_some() {
        parts.push(">".to_string());
    }

    parts.join(" ")
}

fn format_list_json(output: &PostsPage) -> Result<String> {
    serde_json::to_string_pretty(output).wrap_err("JSON serialization failed")
}

fn format_list_text(posts_page: &PostsPage, options: &ListOptions) -> String {
    let mut result = String::new();
    let window = &posts_page.window;
    let navigation = &posts_page.navigation;
    let command = list_command(options.items_per_page, options.buttons_per_page);

    // Header
    result.push_str(&f!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&f!(
        "{}\n",
        f!("POSTS (Page {} of {})", window.current_page, window.total_pages)
            .bright_cyan()
            .bold()
    ));
    result.push_str(&f!("{}\n", "=".repeat(80).bright_cyan()));

    if posts_page.posts.is_empty() {
        result.push_str(&f!("\n{}\n", "No posts on this page.".yellow()));
    } else {
        for post in &posts_page.posts {
            result.push_str(&f!(
                "\n{} {}\n",
                f!("[{}]", post.id).yellow().bold(),
                post.title.white().bold()
            ));
            for line in post.body.lines() {
                result.push_str(&f!("    {line}\n"));
            }
            result.push_str(&f!(
                "    {}: {}\n",
                "User".green(),
                post.user_id.to_string().bright_white()
            ));
        }
    }

    // Page buttons
    let button_bar = format_button_bar(navigation);
    result.push('\n');
    if button_bar.is_empty() {
        result.push_str(&f!("{}\n", "(no pages)".bright_black()));
    } else {
        result.push_str(&f!("{}\n", button_bar.bright_white().bold()));
    }

    // Navigation section
    result.push_str(&f!("\n{}\n", "=".repeat(80).bright_yellow()));
    result.push_str(&f!("{}\n", "NAVIGATION".bright_yellow().bold()));
    result.push_str(&f!("{}\n", "=".repeat(80).bright_yellow()));

    result.push_str(&f!(
        "\n{} {} {} {} ({} {} {})\n",
        "Showing page".bright_white(),
        window.current_page.to_string().bright_cyan().bold(),
        "of".bright_white(),
        window.total_pages.to_string().bright_cyan().bold(),
        posts_page.total_items.to_string().bright_cyan().bold(),
        "total".bright_white(),
        "posts".bright_white()
    ));

    result.push_str(&f!("\n{}:\n", "To navigate".bright_white().bold()));
    if let Some(next) = &navigation.next_page_command {
        result.push_str(&f!("  {}: {}\n", "Next page".green(), next.cyan()));
    }
    if let Some(prev) = &navigation.prev_page_command {
        result.push_str(&f!("  {}: {}\n", "Previous page".green(), prev.cyan()));
    }
    if let Some(page) = navigation.next_set_page {
        result.push_str(&f!(
            "  {}: {}\n",
            "Next set".green(),
            f!("{command} --page {page}").cyan()
        ));
    }
    // Past the end the previous set is empty too; only "First page" helps
    if let Some(page) = navigation.prev_set_page.filter(|_| window.is_page_in_range()) {
        result.push_str(&f!(
            "  {}: {}\n",
            "Previous set".green(),
            f!("{command} --page {page}").cyan()
        ));
    }
    if !window.is_page_in_range() && window.total_pages > 0 {
        result.push_str(&f!(
            "  {}: {}\n",
            "First page".green(),
            f!("{command} --page 1").cyan()
        ));
    }

    result.push_str(&f!(
        "\n{}:\n",
        "To change page size".bright_white().bold()
    ));
    result.push_str(&f!(
        "  {}\n",
        "postpager posts list --items-per-page <number> --buttons-per-page <number>".cyan()
    ));

    result.push_str(&f!(
        "\n{}:\n",
        "To get JSON output".bright_white().bold()
    ));
    result.push_str(&f!(
        "  {}\n",
        f!("{command} --page {} --json", window.current_page).cyan()
    ));

    result.push('\n');
    result
}

fn output_json(output: &PostsPage) -> Result<()> {
    let json = format_list_json(output)?;
    println!("{json}");
    Ok(())
}

fn output_formatted(posts_page: &PostsPage, options: &ListOptions) -> Result<()> {
    let formatted = format_list_text(posts_page, options);
    anstream::print!("{formatted}");
    Ok(())
}
