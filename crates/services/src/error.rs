//! Shared error types for the services crate.

use thiserror::Error;

use api::ApiError;
use momentum_core::model::GenerateError;

/// Errors emitted by `RoadmapService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RoadmapServiceError {
    #[error("no user is signed in")]
    NotSignedIn,
    #[error(transparent)]
    Invalid(#[from] GenerateError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `AssistantService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AssistantError {
    #[error("no user is signed in")]
    NotSignedIn,
    #[error("question must not be empty")]
    EmptyQuestion,
    #[error(transparent)]
    Api(#[from] ApiError),
}
