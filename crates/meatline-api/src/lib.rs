//! Async client for the Meatline distribution backend.
//!
//! The crate is organized around a single JSON gateway ([`ApiClient`]) that
//! owns the base URL, default headers, and error normalization, plus one
//! module per backend resource under [`resources`]. Query strings are built
//! through [`query::QueryBuilder`] with shared encoding rules; list
//! endpoints return the [`page::Paginated`] envelope. File uploads go
//! through a separate multipart path in [`upload`] because they must not
//! carry the JSON content type.
//!
//! The gateway performs a single attempt per call: no retries, no timeout
//! enforcement, no caching. Callers own sequencing and recovery.

pub mod auth;
pub mod client;
pub mod error;
pub mod page;
pub mod query;
pub mod resources;
pub mod upload;

pub use auth::{AccessToken, NoAuth, StaticTokenProvider, TokenProvider};
pub use client::ApiClient;
pub use error::Error;
pub use page::{PageItem, Paginated, PaginatedWith, page_window, total_pages};
pub use query::{DateFormat, QueryBuilder};
pub use upload::{UploadSource, UploadedFile};
