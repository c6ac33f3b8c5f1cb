use crate::app::{CallContext, LookupService};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use utoipa::{IntoParams, ToSchema};

#[derive(Clone)]
pub struct AppState {
    pub lookup: LookupService,
    /// Deadline given to every lookup made for a request.
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(lookup: LookupService, request_timeout: Duration) -> Self {
        Self {
            lookup,
            request_timeout,
        }
    }

    pub fn call_context(&self) -> CallContext {
        CallContext::with_timeout(self.request_timeout)
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CitiesQuery {
    /// Slug of the district whose cities should be listed.
    #[serde(default)]
    pub district: Option<String>,
}

/// Responses may be cached by clients and proxies for up to one hour.
pub const CACHE_CONTROL_VALUE: &str = "public, max-age=3600";
