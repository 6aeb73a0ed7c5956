use thiserror::Error;

/// Failures talking to the food-composition provider. They all surface
/// to callers as [`ResolveError::Upstream`].
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("food data request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("food data provider responded with status {0}")]
    Status(reqwest::StatusCode),
    #[error("food data response is missing the {0} field")]
    MissingField(&'static str),
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
    #[error("no food matched the query {food_name:?}")]
    NotFound { food_name: String },
    #[error("food data provider failed: {0}")]
    Upstream(#[from] ProviderError),
}
