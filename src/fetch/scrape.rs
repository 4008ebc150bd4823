/// Screenshot page scraping
///
/// The hosting service serves one HTML page per token; the screenshot itself
/// is referenced by a single designated `<img>` element on that page.

use scraper::{Html, Selector};

use super::FetchError;

/// CSS selector for the screenshot element on a hosting-service page.
pub const SCREENSHOT_SELECTOR: &str = "#screenshot-image";

/// Extract the image resource URL from a fetched page.
///
/// Fails with `FetchError::Parse` when the designated element is missing, or
/// when its `src` attribute is absent or empty.
pub fn extract_image_src(html: &str) -> Result<String, FetchError> {
    let selector =
        Selector::parse(SCREENSHOT_SELECTOR).expect("screenshot selector is valid CSS");

    let document = Html::parse_document(html);

    let element = document.select(&selector).next().ok_or_else(|| {
        FetchError::Parse(format!("no element matches {}", SCREENSHOT_SELECTOR))
    })?;

    match element.value().attr("src") {
        Some(src) if !src.is_empty() => Ok(src.to_string()),
        Some(_) => Err(FetchError::Parse(String::from(
            "screenshot src attribute is empty",
        ))),
        None => Err(FetchError::Parse(String::from(
            "screenshot element has no src attribute",
        ))),
    }
}
