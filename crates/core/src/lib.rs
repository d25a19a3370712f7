//! Core library for postpager
//!
//! This crate implements the **Functional Core** of the postpager application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`postpager_core`** (this crate): Pure transformation functions with zero I/O
//! - **`postpager`**: HTTP fetching, rendering and the MCP server (the Imperative Shell)
//!
//! Every function here returns the same output for the same input and can be
//! tested with plain fixture data.
//!
//! # Module Organization
//!
//! - [`pagination`]: Pagination window calculation (item slice and page-button set)
//! - [`posts`]: Post model, page slicing and the page-button bar
//!
//! # Example Usage
//!
//! ```rust
//! use postpager_core::pagination::calculate_pagination;
//!
//! let window = calculate_pagination(12, 1, 5, 5).unwrap();
//!
//! assert_eq!(window.total_pages, 3);
//! assert_eq!(window.button_range().collect::<Vec<_>>(), vec![1, 2, 3]);
//! assert_eq!((window.start_index, window.end_index), (0, 5));
//! ```

pub mod pagination;
pub mod posts;
