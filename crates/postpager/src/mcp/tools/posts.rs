use crate::prelude::{eprintln, Error};
use crate::posts::list::{DEFAULT_BUTTONS_PER_PAGE, DEFAULT_ITEMS_PER_PAGE};
use serde::Deserialize;

use super::{parse_arguments, text_result, JsonRpcError, INTERNAL_ERROR, INVALID_PARAMS};

pub async fn handle_posts_list(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct PostsListArgs {
        page: Option<usize>,
        items_per_page: Option<usize>,
        buttons_per_page: Option<usize>,
    }

    let args: PostsListArgs = parse_arguments(arguments)?;

    if global.verbose {
        eprintln!(
            "Calling posts_list: page={:?}, items_per_page={:?}, buttons_per_page={:?}",
            args.page, args.items_per_page, args.buttons_per_page
        );
    }

    let posts_page = crate::posts::list_posts_data(
        &global.api_base,
        args.page.unwrap_or(1),
        args.items_per_page.unwrap_or(DEFAULT_ITEMS_PER_PAGE),
        args.buttons_per_page.unwrap_or(DEFAULT_BUTTONS_PER_PAGE),
    )
    .await
    .map_err(|e| {
        // Bad sizes are the caller's fault, everything else is ours
        let code = match e.downcast_ref::<Error>() {
            Some(Error::Pagination(_)) => INVALID_PARAMS,
            _ => INTERNAL_ERROR,
        };
        JsonRpcError::new(code, format!("Tool execution error: {e}"))
    })?;

    text_result(&posts_page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use postpager_core::posts::{Post, PostsPage};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mock_posts(count: u64) -> MockServer {
        let posts: Vec<Post> = (1..=count)
            .map(|id| Post {
                user_id: 1,
                id,
                title: format!("title {id}"),
                body: format!("body {id}"),
            })
            .collect();

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(posts))
            .mount(&server)
            .await;
        server
    }

    fn global_for(server: &MockServer) -> crate::Global {
        crate::Global {
            api_base: server.uri(),
            verbose: false,
        }
    }

    fn page_from(value: &serde_json::Value) -> PostsPage {
        let text = value["content"][0]["text"].as_str().unwrap();
        serde_json::from_str(text).unwrap()
    }

    #[tokio::test]
    async fn test_posts_list_defaults() {
        let server = mock_posts(100).await;

        let value = handle_posts_list(None, &global_for(&server)).await.unwrap();
        let page = page_from(&value);

        assert_eq!(page.posts.len(), 5);
        assert_eq!(page.window.current_page, 1);
        assert_eq!(page.window.total_pages, 20);
        assert_eq!(page.navigation.next_set_page, Some(6));
    }

    #[tokio::test]
    async fn test_posts_list_custom_page() {
        let server = mock_posts(100).await;

        let value = handle_posts_list(
            Some(serde_json::json!({"page": 4, "items_per_page": 10, "buttons_per_page": 3})),
            &global_for(&server),
        )
        .await
        .unwrap();
        let page = page_from(&value);

        assert_eq!(page.posts[0].id, 31);
        assert_eq!(page.window.current_set, 2);
        let buttons: Vec<usize> = page.navigation.buttons.iter().map(|b| b.page).collect();
        assert_eq!(buttons, vec![4, 5, 6]);
    }

    #[tokio::test]
    async fn test_posts_list_zero_page_is_invalid_params() {
        let server = mock_posts(10).await;

        let err = handle_posts_list(Some(serde_json::json!({"page": 0})), &global_for(&server))
            .await
            .unwrap_err();

        assert_eq!(err.code, INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_posts_list_upstream_failure_is_internal_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = handle_posts_list(None, &global_for(&server))
            .await
            .unwrap_err();

        assert_eq!(err.code, INTERNAL_ERROR);
        assert!(err.message.contains("500"));
    }

    #[tokio::test]
    async fn test_posts_list_rejects_wrong_argument_types() {
        let server = mock_posts(10).await;

        let err = handle_posts_list(
            Some(serde_json::json!({"page": "two"})),
            &global_for(&server),
        )
        .await
        .unwrap_err();

        assert_eq!(err.code, INVALID_PARAMS);
    }
}
