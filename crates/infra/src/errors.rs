//! Conversions from external infrastructure errors into domain errors.

use reelgrid_domain::ReelgridError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub ReelgridError);

impl From<InfraError> for ReelgridError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ReelgridError> for InfraError {
    fn from(value: ReelgridError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoReelgridError {
    fn into_reelgrid(self) -> ReelgridError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → ReelgridError */
/* -------------------------------------------------------------------------- */

impl IntoReelgridError for HttpError {
    fn into_reelgrid(self) -> ReelgridError {
        if self.is_timeout() {
            return ReelgridError::Network("http request timed out".into());
        }
        if self.is_connect() {
            return ReelgridError::Network(format!("http connection failed: {self}"));
        }
        if self.is_decode() {
            return ReelgridError::Parse(format!("failed to decode http response: {self}"));
        }
        if self.is_builder() || self.is_request() {
            return ReelgridError::Internal(format!("http request could not be built: {self}"));
        }
        ReelgridError::Network(format!("http error: {self}"))
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_reelgrid())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → ReelgridError */
/* -------------------------------------------------------------------------- */

impl IntoReelgridError for serde_json::Error {
    fn into_reelgrid(self) -> ReelgridError {
        ReelgridError::Parse(format!("invalid json payload: {self}"))
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(value.into_reelgrid())
    }
}
