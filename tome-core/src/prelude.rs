pub use crate::chapter::Chapter;
pub use crate::config::PagingDefaults;
pub use crate::error::{Error, ValidationError};
pub use crate::link::page_url;
