use crate::prelude::{eprintln, println, *};
use postpager_core::pagination::{PaginationRequest, PaginationWindow};

use crate::posts::list::{DEFAULT_BUTTONS_PER_PAGE, DEFAULT_ITEMS_PER_PAGE};

#[derive(Debug, clap::Parser)]
#[command(name = "pagination")]
#[command(about = "Calculate a pagination window without fetching anything")]
pub struct App {
    /// Total number of items
    #[arg(short, long)]
    pub total: usize,

    /// Page number (1-indexed)
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Number of items per page
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

pub fn run(app: App, global: crate::Global) -> Result<()> {
    let request = PaginationRequest::new(
        app.total,
        app.page,
        app.items_per_page,
        app.buttons_per_page,
    );

    if global.verbose {
        eprintln!("Calculating pagination for {request:?}");
    }

    let window = request.calculate().map_err(Error::from)?;

    if app.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&window).wrap_err("JSON serialization failed")?
        );
    } else {
        window_table(&window).printstd();
    }

    Ok(())
}

fn window_table(window: &PaginationWindow) -> prettytable::Table {
    let buttons = if window.has_buttons() {
        f!("{}..={}", window.start_page, window.end_page)
    } else {
        "(none)".to_string()
    };

    let mut table = new_table();
    table.add_row(prettytable::row!["Total pages", window.total_pages]);
    table.add_row(prettytable::row!["Current set", window.current_set]);
    table.add_row(prettytable::row!["Total sets", window.total_sets()]);
    table.add_row(prettytable::row!["Start page", window.start_page]);
    table.add_row(prettytable::row!["End page", window.end_page]);
    table.add_row(prettytable::row!["Buttons", buttons]);
    table.add_row(prettytable::row!["Start index", window.start_index]);
    table.add_row(prettytable::row!["End index", window.end_index]);

    if let Some(page) = window.prev_set_page() {
        table.add_row(prettytable::row!["Previous set", page]);
    }

    if let Some(page) = window.next_set_page() {
        table.add_row(prettytable::row!["Next set", page]);
    }

    table
}
