/// Name of the query parameter carrying the page number.
pub const PAGE_PARAM: &str = "page";

/// Build the navigation link for `page` relative to `base_url`.
///
/// The base URL is used verbatim. Existing query strings are not merged
/// and nothing is percent-encoded.
///
/// # Example
/// ```
/// use tome_core::link::page_url;
///
/// assert_eq!(
///     page_url("https://api.example.com/books", 2),
///     "https://api.example.com/books?page=2"
/// );
/// assert_eq!(page_url("/books", 0), "/books?page=0");
/// assert_eq!(page_url("/books", -1), "/books?page=-1");
/// ```
pub fn page_url(base_url: &str, page: i64) -> String {
    format!("{base_url}?{PAGE_PARAM}={page}")
}
