use serde::{Deserialize, Serialize};

/// Values substituted when a chapter leaves `current_page` or `limit` at zero.
///
/// Zero always means "unset", so a host cannot ask for an explicit zero.
///
/// # Example
/// ```
/// use tome_core::config::PagingDefaults;
///
/// let defaults: PagingDefaults = serde_json::from_str(r#"{ "limit": 25 }"#).unwrap();
/// assert_eq!(defaults.page, 1);
/// assert_eq!(defaults.limit, 25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagingDefaults {
    pub page: i64,
    pub limit: i64,
}

impl Default for PagingDefaults {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}
