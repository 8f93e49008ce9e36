//! HTTP transport layer — `DocuSignHttp` with per-endpoint retry policies
//! and offset pagination.

pub mod client;
pub mod paginate;
pub mod retry;

pub use client::DocuSignHttp;
pub use paginate::{collect_all_pages, DEFAULT_PAGE_SIZE};
pub use retry::{RetryConfig, RetryPolicy};
