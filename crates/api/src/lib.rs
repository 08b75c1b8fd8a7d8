#![forbid(unsafe_code)]

pub mod client;
pub mod fake;
pub mod http;

pub use client::{ApiError, RoadmapApi};
pub use reqwest::StatusCode;
pub use fake::{FailureMode, InMemoryRoadmapApi};
pub use http::{ApiConfig, HttpRoadmapApi};
