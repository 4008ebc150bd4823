/// The fetch-and-decode sequence
///
/// One invocation: draw a token, fetch the candidate page, locate the
/// screenshot reference, download the bytes, decode them. Any failure along
/// the way is terminal for that invocation; the caller simply runs the whole
/// sequence again.

use image::{DynamicImage, GenericImageView};
use reqwest::Client;

use super::{scrape, token, FetchError};

/// Base path of the screenshot hosting service.
pub const SCREENSHOT_BASE_URL: &str = "https://prnt.sc";

/// The hosting service turns away clients that do not look like a browser.
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) snapgrab/0.1";

/// Everything one successful fetch produces.
///
/// Immutable once constructed, replaced wholesale by the next fetch. There is
/// never a partially populated result: a fetch either yields all three fields
/// or an error.
#[derive(Clone)]
pub struct FetchResult {
    /// The candidate page URL the screenshot was found on.
    pub source_url: String,
    /// Raw bytes exactly as served by the image host.
    pub image_bytes: Vec<u8>,
    /// The decoded bitmap.
    pub image: DynamicImage,
}

impl std::fmt::Debug for FetchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchResult")
            .field("source_url", &self.source_url)
            .field("image_bytes", &self.image_bytes.len())
            .field("dimensions", &self.image.dimensions())
            .finish()
    }
}

/// Stateless fetcher for random screenshots.
///
/// Holds only the HTTP client (a connection pool) and the base URL, so it is
/// reentrant and consecutive invocations are fully independent. The base URL
/// is injectable so tests can point it at a local stub server.
#[derive(Debug, Clone)]
pub struct Grabber {
    client: Client,
    base_url: String,
}

impl Grabber {
    /// Fetcher against the production hosting service.
    pub fn new() -> Self {
        Self::with_base_url(SCREENSHOT_BASE_URL)
    }

    /// Fetcher against an arbitrary base URL (no trailing slash).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("HTTP client configuration is static");

        Grabber {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch one random screenshot.
    ///
    /// Returns a fully populated `FetchResult`, or the first error hit along
    /// the sequence. No retries: a dead token is an ordinary failure.
    pub async fn fetch_random(&self) -> Result<FetchResult, FetchError> {
        let token = token::random_token();
        let source_url = token::page_url(&self.base_url, &token);

        let page = self
            .client
            .get(&source_url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let image_src = scrape::extract_image_src(&page)?;

        let image_bytes = self
            .client
            .get(&image_src)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?
            .to_vec();

        let image = image::load_from_memory(&image_bytes)?;

        Ok(FetchResult {
            source_url,
            image_bytes,
            image,
        })
    }
}

impl Default for Grabber {
    fn default() -> Self {
        Self::new()
    }
}
