//! Request rewriting.
//!
//! # Responsibilities
//! - Point a request at the selected host (scheme + authority)
//! - Preserve path and query exactly as the caller built them
//! - Keep an explicit `Host` header in step with the new authority
//!
//! # Design Decisions
//! - Rewriting is infallible: host components are validated at construction
//! - Origin-form requests (`/foo?x=1`) become absolute-form
//! - A missing path becomes `/`

use http::header::{self, HeaderValue};
use http::uri::PathAndQuery;
use http::{Request, Uri};

use crate::pool::HostEntry;

/// Replace scheme and authority of the request target with those of `host`.
pub fn rewrite_request<B>(request: Request<B>, host: &HostEntry) -> Request<B> {
    let (mut parts, body) = request.into_parts();
    parts.uri = rewrite_uri(&parts.uri, host);

    if parts.headers.contains_key(header::HOST) {
        if let Ok(value) = HeaderValue::from_str(host.authority().as_str()) {
            parts.headers.insert(header::HOST, value);
        }
    }

    Request::from_parts(parts, body)
}

/// Rewrite a single URI, keeping its path and query.
pub fn rewrite_uri(uri: &Uri, host: &HostEntry) -> Uri {
    let mut uri_parts = uri.clone().into_parts();
    uri_parts.scheme = Some(host.scheme().clone());
    uri_parts.authority = Some(host.authority().clone());
    if uri_parts.path_and_query.is_none() {
        uri_parts.path_and_query = Some(PathAndQuery::from_static("/"));
    }

    // Scheme, authority and path are all set, so this cannot fail.
    Uri::from_parts(uri_parts).unwrap_or_else(|_| uri.clone())
}
