use serde::{Deserialize, Serialize};

use crate::config::PagingDefaults;
use crate::error::{Error, ValidationError};
use crate::link::page_url;

/// Pagination settings and results for one page of `data`.
///
/// The same value carries the request (`base_url`, `requested_page`, `limit`,
/// `current_page`, `total`) and, once [`Chapter::paginate`] returns, the
/// computed window and navigation links. Link fields hold an empty string when
/// the link does not apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter<T> {
    /// Payload returned along with the pagination settings.
    pub data: T,
    /// API base URL the page parameter is appended to.
    pub base_url: String,
    pub first_url: String,
    pub next_url: String,
    pub prev_url: String,
    pub last_url: String,
    /// Index of the first item of the current page.
    #[serde(skip)]
    pub offset: i64,
    /// Items per page.
    #[serde(rename = "per_page")]
    pub limit: i64,
    /// Page number captured from the request params.
    #[serde(skip)]
    pub requested_page: i64,
    pub current_page: i64,
    pub last_page: i64,
    /// Total number of items, usually the row count of the underlying query.
    pub total: i64,
}

impl<T> Chapter<T> {
    pub fn new(base_url: impl Into<String>, data: T) -> Self {
        Self {
            data,
            base_url: base_url.into(),
            first_url: String::new(),
            next_url: String::new(),
            prev_url: String::new(),
            last_url: String::new(),
            offset: 0,
            limit: 0,
            requested_page: 0,
            current_page: 0,
            last_page: 0,
            total: 0,
        }
    }

    pub fn with_requested_page(mut self, page: i64) -> Self {
        self.requested_page = page;
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_current_page(mut self, page: i64) -> Self {
        self.current_page = page;
        self
    }

    pub fn with_total(mut self, total: i64) -> Self {
        self.total = total;
        self
    }

    /// Compute the page window and links using [`PagingDefaults::default`].
    ///
    /// # Example
    /// ```
    /// use tome_core::Chapter;
    ///
    /// let chapter = Chapter::new("https://api.example.com/books", ())
    ///     .with_requested_page(2)
    ///     .with_total(30)
    ///     .paginate()
    ///     .unwrap();
    ///
    /// assert_eq!(chapter.limit, 10);
    /// assert_eq!(chapter.offset, 10);
    /// assert_eq!(chapter.last_page, 3);
    /// assert_eq!(chapter.next_url, "https://api.example.com/books?page=3");
    /// assert_eq!(chapter.prev_url, "https://api.example.com/books?page=1");
    /// ```
    pub fn paginate(self) -> Result<Self, Error> {
        self.paginate_with(&PagingDefaults::default())
    }

    /// Compute the page window and links, filling unset fields from `defaults`.
    ///
    /// The offset only moves forward: it is recomputed when `requested_page`
    /// is greater than `current_page` and kept otherwise. Paginating a
    /// returned chapter again with a smaller `requested_page` therefore
    /// leaves `offset` and `current_page` where they were.
    pub fn paginate_with(mut self, defaults: &PagingDefaults) -> Result<Self, Error> {
        if self.base_url.is_empty() {
            log::debug!("rejecting chapter without a base url");
            return Err(ValidationError::BaseUrlMissing.into());
        }

        self.set_defaults(defaults);
        self.ceil_last_page()?;
        self.advance_offset();
        self.create_links();

        log::debug!(
            "paginated {} items at {} per page: page {} of {} (offset {})",
            self.total,
            self.limit,
            self.current_page,
            self.last_page,
            self.offset
        );
        Ok(self)
    }

    pub fn next_link(&self) -> Option<&str> {
        Some(self.next_url.as_str()).filter(|s| !s.is_empty())
    }

    pub fn prev_link(&self) -> Option<&str> {
        Some(self.prev_url.as_str()).filter(|s| !s.is_empty())
    }

    pub fn into_data(self) -> T {
        self.data
    }

    /// Replace the payload while keeping every pagination field.
    pub fn map_data<U, F>(self, f: F) -> Chapter<U>
    where
        F: FnOnce(T) -> U,
    {
        Chapter {
            data: f(self.data),
            base_url: self.base_url,
            first_url: self.first_url,
            next_url: self.next_url,
            prev_url: self.prev_url,
            last_url: self.last_url,
            offset: self.offset,
            limit: self.limit,
            requested_page: self.requested_page,
            current_page: self.current_page,
            last_page: self.last_page,
            total: self.total,
        }
    }

    fn set_defaults(&mut self, defaults: &PagingDefaults) {
        if self.current_page == 0 {
            self.current_page = defaults.page;
        }
        if self.limit == 0 {
            self.limit = defaults.limit;
        }
    }

    fn ceil_last_page(&mut self) -> Result<(), Error> {
        if self.limit <= 0 {
            log::debug!("rejecting chapter with page size {}", self.limit);
            return Err(Error::InvalidLimit { limit: self.limit });
        }
        self.last_page = (self.total as f64 / self.limit as f64).ceil() as i64;
        Ok(())
    }

    fn advance_offset(&mut self) {
        if self.requested_page > self.current_page {
            self.current_page = self.requested_page;
            self.offset = (self.current_page - 1).wrapping_mul(self.limit);
        }
    }

    // next and prev share the same guard, so they appear together
    fn create_links(&mut self) {
        self.first_url = page_url(&self.base_url, 1);
        self.next_url = if self.requested_page < self.last_page {
            page_url(&self.base_url, self.current_page.wrapping_add(1))
        } else {
            String::new()
        };
        self.prev_url = if self.last_page > self.requested_page {
            page_url(&self.base_url, self.current_page.wrapping_sub(1))
        } else {
            String::new()
        };
        self.last_url = page_url(&self.base_url, self.last_page);
    }
}

#[cfg(test)]
#[path = "chapter_tests.rs"]
mod tests;
