/// TheCocktailDB access module
///
/// This module handles:
/// - The HTTP client for the random, search and lookup endpoints (client.rs)
/// - Downloading and shrinking cocktail thumbnails (thumbnail.rs)

pub mod client;
pub mod thumbnail;

use async_trait::async_trait;
use thiserror::Error;

use crate::state::data::Cocktail;

pub use client::CocktailDbClient;
pub use thumbnail::Thumbnail;

/// Everything that can go wrong while talking to the API
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status: {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no matching cocktail")]
    NotFound,

    #[error("could not decode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Where cocktails come from
///
/// The application only talks to this trait, so tests can swap the
/// HTTP client for a canned source.
#[async_trait]
pub trait CocktailSource: Send + Sync {
    /// One random cocktail
    async fn random(&self) -> Result<Cocktail, FetchError>;

    /// Every cocktail whose name matches `query`; empty when nothing does
    async fn search(&self, query: &str) -> Result<Vec<Cocktail>, FetchError>;

    /// The cocktail with `id`
    async fn lookup(&self, id: &str) -> Result<Cocktail, FetchError>;

    /// The image at `url`, shrunk to fit a `size` square
    async fn thumbnail(&self, url: &str, size: u32) -> Result<Thumbnail, FetchError>;
}
