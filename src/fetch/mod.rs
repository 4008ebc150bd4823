/// Random screenshot fetching module
///
/// This module turns one button press into one displayed screenshot:
/// - Random page tokens and candidate URLs (token.rs)
/// - Locating the screenshot reference in the fetched page (scrape.rs)
/// - The full fetch-and-decode sequence (grab.rs)

pub mod grab;
pub mod scrape;
pub mod token;

#[cfg(test)]
mod stub_server;

use thiserror::Error;

/// One terminal failure per fetch invocation.
///
/// There are no retries inside the sequence; the caller decides whether to
/// try again by running the whole sequence anew.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The page or image request could not complete (connection failure,
    /// timeout, or a non-2xx status).
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The fetched page does not reference a screenshot image.
    #[error("no screenshot in page: {0}")]
    Parse(String),

    /// The downloaded bytes are not a decodable image.
    #[error("not a valid image: {0}")]
    Decode(#[from] image::ImageError),
}
