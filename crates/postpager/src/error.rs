use postpager_core::pagination::PaginationError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error(transparent)]
    Pagination(#[from] PaginationError),
}
