//! Per-route behavior and the outer failure boundary.

use crate::error::FixtureError;
use crate::http::{Envelope, FixtureRequest, FixtureResponse, Method, StatusCode};
use crate::routing::{custom_headers, normalize_path, parse_body, Route};
use std::future::Future;
use std::time::Duration;
use tokio::task::JoinError;
use tracing::{error, info};

/// Stateless request router.
///
/// Holds nothing but the `/slow` delay, so clones are free to hand to every
/// connection task.
#[derive(Debug, Clone)]
pub struct Router {
    slow_delay: Duration,
}

impl Router {
    /// Create a router whose `/slow` route waits `slow_delay` before answering.
    pub fn new(slow_delay: Duration) -> Self {
        Self { slow_delay }
    }

    /// Handle one request. Never fails: an error or a panic from
    /// [`Router::dispatch`] becomes a 500 response.
    pub async fn handle(&self, mut request: FixtureRequest) -> FixtureResponse {
        request.path = normalize_path(&request.path);
        info!("{} {}", request.method, request.path);

        let router = self.clone();
        guard(async move { router.dispatch(request).await }).await
    }

    /// Route a request to its behavior.
    pub async fn dispatch(&self, request: FixtureRequest) -> Result<FixtureResponse, FixtureError> {
        match Route::resolve(&request.path) {
            Route::Test => {
                let received = parse_body(&request);
                let status = if request.method == Method::Post {
                    StatusCode::CREATED
                } else {
                    StatusCode::OK
                };
                let envelope = Envelope::success()
                    .message(format!("{} response", request.method))
                    .received(received);
                Ok(FixtureResponse::json(status, &envelope)?)
            }
            Route::Headers => {
                let envelope = Envelope::success().headers(custom_headers(&request));
                Ok(FixtureResponse::json(StatusCode::OK, &envelope)?)
            }
            Route::Echo => {
                let envelope = Envelope::success().received(parse_body(&request));
                Ok(FixtureResponse::json(StatusCode::OK, &envelope)?)
            }
            Route::Slow => {
                tokio::time::sleep(self.slow_delay).await;
                let envelope = Envelope::success().message("Slow response");
                Ok(FixtureResponse::json(StatusCode::OK, &envelope)?)
            }
            Route::NotFound => {
                let envelope = Envelope::failure("Not found");
                Ok(FixtureResponse::json(StatusCode::NOT_FOUND, &envelope)?)
            }
        }
    }
}

/// Run `dispatch` on its own task and turn an `Err` or a panic into a 500.
async fn guard<F>(dispatch: F) -> FixtureResponse
where
    F: Future<Output = Result<FixtureResponse, FixtureError>> + Send + 'static,
{
    let outcome = match tokio::spawn(dispatch).await {
        Ok(result) => result,
        Err(e) => Err(join_failure(e)),
    };

    match outcome {
        Ok(response) => response,
        Err(e) => {
            error!("Error handling request: {}", e);
            e.into()
        }
    }
}

fn join_failure(err: JoinError) -> FixtureError {
    if !err.is_panic() {
        return FixtureError::internal(err.to_string());
    }

    let payload = err.into_panic();
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "request handler panicked".to_string());
    FixtureError::internal(message)
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Duration::from_millis(2000))
    }
}
