use serde::{Deserialize, Serialize};

use crate::pagination::{calculate_pagination, PaginationError, PaginationWindow};

/// Post as returned by the `/posts` endpoint
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub body: String,
}

/// A single page-number selector
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub page: usize,
    pub active: bool,
}

/// Page selectors and navigation targets for one page
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub buttons: Vec<PageButton>,
    pub prev_set_page: Option<usize>,
    pub next_set_page: Option<usize>,
    pub next_page_command: Option<String>,
    pub prev_page_command: Option<String>,
}

/// One page of posts with everything needed to render it
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PostsPage {
    pub total_items: usize,
    pub posts: Vec<Post>,
    pub window: PaginationWindow,
    pub navigation: Navigation,
}

/// Build the button bar and navigation targets for a window
///
/// `command_prefix` is the command that lists posts; page commands are built
/// by appending `--page <n>` to it.
pub fn build_navigation(window: &PaginationWindow, command_prefix: &str) -> Navigation {
    let buttons = window
        .button_range()
        .map(|page| PageButton {
            page,
            active: page == window.current_page,
        })
        .collect();

    let next_page_command = (window.current_page < window.total_pages)
        .then(|| page_command(command_prefix, window.current_page + 1));

    let prev_page_command =
        (window.current_page > 1).then(|| page_command(command_prefix, window.current_page - 1));

    Navigation {
        buttons,
        prev_set_page: window.prev_set_page(),
        next_set_page: window.next_set_page(),
        next_page_command,
        prev_page_command,
    }
}

fn page_command(command_prefix: &str, page: usize) -> String {
    format!("{command_prefix} --page {page}")
}

/// Slice a full post list down to one page
///
/// Takes the complete list fetched from the API and constructs a PostsPage
/// with the posts of `current_page`, the pagination window and navigation.
/// A page past the end yields an empty `posts` list rather than an error.
pub fn paginate_posts(
    posts: Vec<Post>,
    current_page: usize,
    items_per_page: usize,
    buttons_per_page: usize,
    command_prefix: &str,
) -> Result<PostsPage, PaginationError> {
    let total_items = posts.len();
    let window = calculate_pagination(total_items, current_page, items_per_page, buttons_per_page)?;
    let (start, end) = window.slice_bounds(total_items);

    let page_posts: Vec<Post> = posts.into_iter().skip(start).take(end - start).collect();
    let navigation = build_navigation(&window, command_prefix);

    Ok(PostsPage {
        total_items,
        posts: page_posts,
        window,
        navigation,
    })
}
