//! Bearer-token decoration for outgoing API requests.
//!
//! DESIGN
//! ======
//! A thin wrapper over `gloo-net` builders: it only attaches headers and
//! never inspects responses. Failure handling stays with the caller.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

#[cfg(feature = "hydrate")]
use crate::auth::store::CredentialStore;

/// Header set for an outgoing API request given the current session token.
///
/// Requests always declare JSON; the `Authorization` header is added only
/// when a token exists. Requests without one are valid for the public
/// endpoints.
pub fn auth_headers(token: Option<&str>) -> Vec<(&'static str, String)> {
    let mut headers = vec![("Content-Type", "application/json".to_owned())];
    if let Some(token) = token {
        headers.push(("Authorization", bearer(token)));
    }
    headers
}

/// `Authorization` header value for `token`.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// GET builder carrying the current session headers.
#[cfg(feature = "hydrate")]
pub fn get(url: &str) -> gloo_net::http::RequestBuilder {
    decorate(gloo_net::http::Request::get(url))
}

/// POST builder carrying the current session headers.
#[cfg(feature = "hydrate")]
pub fn post(url: &str) -> gloo_net::http::RequestBuilder {
    decorate(gloo_net::http::Request::post(url))
}

// Each call re-reads browser storage, so a login or logout in this tab or a
// sibling tab is reflected on the very next request.
#[cfg(feature = "hydrate")]
fn decorate(mut builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    let store = CredentialStore::browser();
    for (name, value) in auth_headers(store.token().as_deref()) {
        builder = builder.header(name, &value);
    }
    builder
}
