#![allow(dead_code)]

use serde::{Deserialize, Serialize};

pub const BASE_URL: &str = "https://api.example.com/v1/books";

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: u32,
    pub title: String,
}

pub fn books(ids: std::ops::Range<u32>) -> Vec<Book> {
    ids.map(|id| Book {
        id,
        title: format!("Book {id}"),
    })
    .collect()
}
