//! Tower middleware stage.
//!
//! Sits between a retry stage and the transport:
//!
//! ```text
//! caller → [retry] → HostRotatorService → [transport] → network
//! ```
//!
//! The request is rewritten before it is handed to the inner service and the
//! outcome is inspected on the way back. The inner result is returned as is.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use http::{Request, Response};
use tower::{Layer, Service};

use crate::health::ClassifyFailure;
use crate::http::rotator::HostRotator;

/// Layer that applies [`HostRotatorService`] around a transport.
///
/// Every service built from one layer shares the same rotator.
#[derive(Debug, Clone)]
pub struct HostRotatorLayer {
    rotator: Arc<HostRotator>,
}

impl HostRotatorLayer {
    pub fn new(rotator: Arc<HostRotator>) -> Self {
        Self { rotator }
    }

    pub fn rotator(&self) -> &Arc<HostRotator> {
        &self.rotator
    }
}

impl<S> Layer<S> for HostRotatorLayer {
    type Service = HostRotatorService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        HostRotatorService {
            inner,
            rotator: self.rotator.clone(),
        }
    }
}

/// Service that routes requests to the rotator's current host.
#[derive(Debug, Clone)]
pub struct HostRotatorService<S> {
    inner: S,
    rotator: Arc<HostRotator>,
}

impl<S> HostRotatorService<S> {
    pub fn new(inner: S, rotator: Arc<HostRotator>) -> Self {
        Self { inner, rotator }
    }

    pub fn rotator(&self) -> &Arc<HostRotator> {
        &self.rotator
    }

    pub fn get_ref(&self) -> &S {
        &self.inner
    }
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for HostRotatorService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
    S::Future: Send + 'static,
    S::Error: ClassifyFailure + Send + 'static,
    ResBody: Send + 'static,
{
    type Response = Response<ResBody>;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<ReqBody>) -> Self::Future {
        let (request, host) = self.rotator.rewrite(request);
        let future = self.inner.call(request);
        let rotator = self.rotator.clone();
        Box::pin(async move {
            let result = future.await;
            rotator.observe(&host, &result);
            result
        })
    }
}
