use crate::prelude::eprintln;
use crate::posts::list::{DEFAULT_BUTTONS_PER_PAGE, DEFAULT_ITEMS_PER_PAGE};
use postpager_core::pagination::PaginationRequest;
use serde::Deserialize;

use super::{parse_arguments, text_result, JsonRpcError, INVALID_PARAMS};

pub fn handle_pagination_calculate(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct PaginationCalculateArgs {
        total_items: usize,
        current_page: usize,
        items_per_page: Option<usize>,
        buttons_per_page: Option<usize>,
    }

    let args: PaginationCalculateArgs = parse_arguments(arguments)?;

    if global.verbose {
        eprintln!(
            "Calling pagination_calculate: total_items={}, current_page={}",
            args.total_items, args.current_page
        );
    }

    let window = PaginationRequest::new(
        args.total_items,
        args.current_page,
        args.items_per_page.unwrap_or(DEFAULT_ITEMS_PER_PAGE),
        args.buttons_per_page.unwrap_or(DEFAULT_BUTTONS_PER_PAGE),
    )
    .calculate()
    .map_err(|e| JsonRpcError::new(INVALID_PARAMS, e.to_string()))?;

    text_result(&window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use postpager_core::pagination::PaginationWindow;

    fn test_global() -> crate::Global {
        crate::Global {
            api_base: crate::DEFAULT_API_BASE.to_string(),
            verbose: false,
        }
    }

    fn window_from(value: &serde_json::Value) -> PaginationWindow {
        let text = value["content"][0]["text"].as_str().unwrap();
        serde_json::from_str(text).unwrap()
    }

    #[test]
    fn test_calculate_with_defaults() {
        let value = handle_pagination_calculate(
            Some(serde_json::json!({"total_items": 12, "current_page": 3})),
            &test_global(),
        )
        .unwrap();
        let window = window_from(&value);

        assert_eq!(window.total_pages, 3);
        assert_eq!(window.start_page, 1);
        assert_eq!(window.end_page, 3);
        assert_eq!(window.start_index, 10);
        assert_eq!(window.end_index, 15);
    }

    #[test]
    fn test_calculate_empty_list() {
        let value = handle_pagination_calculate(
            Some(serde_json::json!({"total_items": 0, "current_page": 1})),
            &test_global(),
        )
        .unwrap();
        let window = window_from(&value);

        assert_eq!(window.total_pages, 0);
        assert!(window.end_page < window.start_page);
    }

    #[test]
    fn test_calculate_requires_total_items() {
        let err =
            handle_pagination_calculate(Some(serde_json::json!({"current_page": 1})), &test_global())
                .unwrap_err();

        assert_eq!(err.code, INVALID_PARAMS);
        assert!(err.message.contains("total_items"));
    }

    #[test]
    fn test_calculate_rejects_zero_buttons() {
        let err = handle_pagination_calculate(
            Some(serde_json::json!({
                "total_items": 12,
                "current_page": 1,
                "buttons_per_page": 0
            })),
            &test_global(),
        )
        .unwrap_err();

        assert_eq!(err.code, INVALID_PARAMS);
        assert!(err.message.contains("buttons_per_page"));
    }

    #[test]
    fn test_calculate_rejects_negative_numbers() {
        let err = handle_pagination_calculate(
            Some(serde_json::json!({"total_items": 12, "current_page": -1})),
            &test_global(),
        )
        .unwrap_err();

        assert_eq!(err.code, INVALID_PARAMS);
    }
}
