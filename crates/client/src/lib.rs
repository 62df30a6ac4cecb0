#![forbid(unsafe_code)]

pub mod http;
pub mod service;

pub use http::HttpCardService;
pub use service::{CardService, InMemoryCardService, PracticeRequest, ServiceError};
