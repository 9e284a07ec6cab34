//! Fixture HTTP server.

use crate::error::FixtureError;
use crate::http::{FixtureRequest, FixtureResponse, Method};
use crate::routing::Router;
use crate::runtime::FixtureConfig;
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::header::{HeaderName, HeaderValue};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, error, info, warn};

/// Fixture HTTP server.
///
/// Every accepted connection is served on its own task, so a request parked
/// on `/slow` never holds up another connection.
pub struct FixtureServer {
    listener: TcpListener,
    local_addr: SocketAddr,
    router: Router,
}

impl FixtureServer {
    /// Bind the listener described by `config`.
    pub async fn bind(config: FixtureConfig) -> Result<Self, FixtureError> {
        let addr: SocketAddr = config.bind_addr().parse()?;
        let listener = TcpListener::bind(addr).await?;
        let local_addr = listener.local_addr()?;

        Ok(Self {
            listener,
            local_addr,
            router: Router::new(config.slow_delay()),
        })
    }

    /// The address the server is listening on.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Accept connections forever.
    pub async fn run(self) -> Result<(), FixtureError> {
        self.run_until(std::future::pending()).await
    }

    /// Accept connections until `shutdown` resolves. Connections already
    /// accepted are left to finish on their own tasks.
    pub async fn run_until<F>(self, shutdown: F) -> Result<(), FixtureError>
    where
        F: Future<Output = ()>,
    {
        info!("HTTP server running on http://{}", self.local_addr);

        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                accepted = self.listener.accept() => match accepted {
                    Ok((stream, remote_addr)) => {
                        serve_connection(stream, remote_addr, self.router.clone());
                    }
                    Err(e) => error!("Failed to accept connection: {}", e),
                },
                _ = &mut shutdown => {
                    info!("Shutting down HTTP server on {}", self.local_addr);
                    return Ok(());
                }
            }
        }
    }
}

/// Serve one connection on a background task.
fn serve_connection(stream: TcpStream, remote_addr: SocketAddr, router: Router) {
    debug!("Accepted connection from {}", remote_addr);
    let io = TokioIo::new(stream);

    tokio::task::spawn(async move {
        let service = service_fn(move |req| {
            let router = router.clone();
            async move { handle_request(req, router).await }
        });

        if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
            error!("Error serving connection from {}: {:?}", remote_addr, err);
        }
    });
}

/// Handle an incoming HTTP request.
async fn handle_request(
    req: Request<Incoming>,
    router: Router,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let request = convert_request(req).await;
    let response = router.handle(request).await;
    Ok(build_response(response))
}

/// Convert a hyper Request to a FixtureRequest.
///
/// A body that cannot be read is logged and treated as empty.
async fn convert_request(req: Request<Incoming>) -> FixtureRequest {
    let method = Method::from(req.method());
    let mut request = FixtureRequest::new(method, req.uri().path());

    for (name, value) in req.headers() {
        request.append_header(name.as_str(), &decode_header_value(value));
    }

    match req.collect().await {
        Ok(collected) => request.body(collected.to_bytes()),
        Err(e) => {
            warn!("Failed to read request body: {}", e);
            request
        }
    }
}

/// Decode a header value one byte per char (Latin-1), so values outside
/// visible ASCII are reported instead of dropped.
fn decode_header_value(value: &HeaderValue) -> String {
    value.as_bytes().iter().map(|&b| b as char).collect()
}

/// Build a hyper Response from a FixtureResponse.
fn build_response(fixture: FixtureResponse) -> Response<Full<Bytes>> {
    let status = hyper::StatusCode::from_u16(fixture.status.0).unwrap_or_else(|_| {
        warn!(
            "Invalid status code {}, falling back to 500 Internal Server Error",
            fixture.status.0
        );
        hyper::StatusCode::INTERNAL_SERVER_ERROR
    });

    let mut response = Response::new(Full::new(fixture.body));
    *response.status_mut() = status;

    for (name, value) in fixture.headers {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(&value),
        ) {
            (Ok(name), Ok(value)) => {
                response.headers_mut().insert(name, value);
            }
            _ => warn!("Dropping invalid response header {}: {}", name, value),
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{Envelope, StatusCode};

    #[test]
    fn test_build_response_copies_status_and_headers() {
        let fixture = FixtureResponse::json(StatusCode::CREATED, &Envelope::success()).unwrap();
        let response = build_response(fixture);

        assert_eq!(response.status(), hyper::StatusCode::CREATED);
        assert_eq!(
            response.headers().get(hyper::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_decode_header_value_latin1() {
        let ascii = HeaderValue::from_static("plain");
        assert_eq!(decode_header_value(&ascii), "plain");

        let utf8 = HeaderValue::from_bytes("café".as_bytes()).unwrap();
        assert_eq!(decode_header_value(&utf8), "caf\u{c3}\u{a9}");

        let latin1 = HeaderValue::from_bytes(b"caf\xe9").unwrap();
        assert_eq!(decode_header_value(&latin1), "café");
    }

    #[test]
    fn test_build_response_invalid_status_falls_back() {
        let mut fixture = FixtureResponse::json(StatusCode::OK, &Envelope::success()).unwrap();
        fixture.status = StatusCode(42);

        let response = build_response(fixture);
        assert_eq!(response.status(), hyper::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_bind_ephemeral_port() {
        let server = FixtureServer::bind(FixtureConfig::new().host("127.0.0.1").port(0))
            .await
            .unwrap();
        assert_ne!(server.local_addr().port(), 0);
    }

    #[tokio::test]
    async fn test_bind_rejects_bad_host() {
        let result = FixtureServer::bind(FixtureConfig::new().host("not a host")).await;
        assert!(result.is_err());
    }
}
