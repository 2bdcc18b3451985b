// src/utils/url.rs

//! URL manipulation utilities.

use url::Url;

use crate::error::Result;

/// Query parameter carrying the 1-based results page.
pub const PAGE_PARAM: &str = "page";

/// Build the URL for one results page.
///
/// Appends `page=<n>` to the query of `base`. The query is edited as raw
/// text: a `page` segment already present is dropped, and every other
/// segment is kept byte for byte in its original order.
///
/// # Examples
/// ```
/// use shopscrape::utils::url::page_url;
///
/// assert_eq!(
///     page_url("https://www.jumia.com.ng/catalog/?q=smartphones", 2)
///         .unwrap()
///         .as_str(),
///     "https://www.jumia.com.ng/catalog/?q=smartphones&page=2"
/// );
/// ```
pub fn page_url(base: &str, page: u32) -> Result<Url> {
    let mut url = Url::parse(base)?;
    let page_segment = format!("{PAGE_PARAM}={page}");

    let mut segments: Vec<&str> = url
        .query()
        .unwrap_or_default()
        .split('&')
        .filter(|segment| !segment.is_empty() && !is_page_segment(segment))
        .collect();
    segments.push(&page_segment);

    let query = segments.join("&");
    url.set_query(Some(&query));
    Ok(url)
}

fn is_page_segment(segment: &str) -> bool {
    segment.split('=').next() == Some(PAGE_PARAM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url_appends_to_existing_query() {
        let url = page_url("https://www.jumia.com.ng/catalog/?q=smartphones", 1).unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.jumia.com.ng/catalog/?q=smartphones&page=1"
        );
    }

    #[test]
    fn test_page_url_without_query() {
        let url = page_url("https://shop.example/catalog/", 3).unwrap();
        assert_eq!(url.as_str(), "https://shop.example/catalog/?page=3");
    }

    #[test]
    fn test_page_url_replaces_existing_page() {
        let url = page_url("https://shop.example/catalog/?page=9&q=tv&sort=price", 2).unwrap();
        assert_eq!(
            url.as_str(),
            "https://shop.example/catalog/?q=tv&sort=price&page=2"
        );
    }

    #[test]
    fn test_page_url_keeps_encoded_values() {
        let url = page_url("https://shop.example/catalog/?q=smart+phones", 1).unwrap();
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("q".to_string(), "smart phones".to_string()),
                ("page".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_page_url_keeps_bare_key() {
        let url = page_url("https://shop.example/catalog/?smartphones", 1).unwrap();
        assert_eq!(url.as_str(), "https://shop.example/catalog/?smartphones&page=1");
    }

    #[test]
    fn test_page_url_keeps_percent_encoding() {
        let url = page_url("https://shop.example/catalog/?q=smart%20phones", 1).unwrap();
        assert_eq!(
            url.as_str(),
            "https://shop.example/catalog/?q=smart%20phones&page=1"
        );
    }

    #[test]
    fn test_page_url_keeps_invalid_utf8_escape() {
        let url = page_url("https://shop.example/catalog/?q=%E2", 4).unwrap();
        assert_eq!(url.as_str(), "https://shop.example/catalog/?q=%E2&page=4");
    }

    #[test]
    fn test_page_url_empty_query_and_fragment() {
        let url = page_url("https://shop.example/catalog/?#grid", 2).unwrap();
        assert_eq!(url.as_str(), "https://shop.example/catalog/?page=2#grid");
    }

    #[test]
    fn test_page_url_ignores_similar_keys() {
        let url = page_url("https://shop.example/catalog/?pages=5&page&q=tv", 1).unwrap();
        assert_eq!(
            url.as_str(),
            "https://shop.example/catalog/?pages=5&q=tv&page=1"
        );
    }

    #[test]
    fn test_page_url_rejects_garbage() {
        assert!(page_url("not a url", 1).is_err());
    }
}
