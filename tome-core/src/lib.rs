pub mod chapter;
pub mod config;
pub mod error;
pub mod link;
pub mod prelude;

pub use chapter::Chapter;
