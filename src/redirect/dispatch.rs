//! The ordered guard chain deciding every request.
//!
//! # Responsibilities
//! - Enforce https (301) and GET (405) before anything else
//! - Send browsers to the documentation viewer (307)
//! - Answer package tooling with the go-import document (200)
//!
//! # Design Decisions
//! - Guards return `Option<Response>`: `Some` fully handles the request and
//!   short-circuits the chain, `None` passes to the next guard
//! - Exactly one terminal response per request; no retries, no fallthrough

use std::borrow::Cow;

use askama::Template;
use axum::{
    body::Body,
    http::{header, uri::Scheme, Method, Request, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use url::form_urlencoded;

use crate::redirect::descriptor::PackageDescriptor;
use crate::redirect::DOCVIEWER_BASE;

/// Entry point for every request hitting the wildcard route.
pub async fn redirect_handler(request: Request<Body>) -> Response {
    tracing::debug!(
        method = %request.method(),
        path = %request.uri().path(),
        "Dispatching request"
    );

    if let Some(response) = require_https(&request)
        .or_else(|| require_get(&request))
        .or_else(|| redirect_browser_to_docviewer(&request))
    {
        return response;
    }

    serve_import_meta(&request)
}

/// Step 1: insecure requests are permanently redirected to https.
///
/// Only the declared scheme is inspected, never the method or path.
/// Origin-form request targets carry no scheme and fall through.
fn require_https(request: &Request<Body>) -> Option<Response> {
    if request.uri().scheme() != Some(&Scheme::HTTP) {
        return None;
    }

    let location = with_https_scheme(request.uri());
    Some((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}

/// Rewrite the scheme to https, leaving authority, path and query untouched.
fn with_https_scheme(uri: &Uri) -> String {
    let authority = uri.authority().map_or("", |authority| authority.as_str());

    let mut location = format!("https://{}{}", authority, uri.path());
    if let Some(query) = uri.query() {
        location.push('?');
        location.push_str(query);
    }
    location
}

/// Step 2: only the read-only retrieval method is served.
fn require_get(request: &Request<Body>) -> Option<Response> {
    if request.method() == Method::GET {
        return None;
    }

    let status = StatusCode::METHOD_NOT_ALLOWED;
    let reason = status.canonical_reason().unwrap_or("Method Not Allowed");
    Some((status, reason).into_response())
}

/// Step 3: browsers (anything not asking `go-get=1`) go to the docviewer.
fn redirect_browser_to_docviewer(request: &Request<Body>) -> Option<Response> {
    if wants_import_meta(request.uri()) {
        return None;
    }

    let uri = request.uri();
    let mut location = format!("{}/{}{}", DOCVIEWER_BASE, request_host(request), uri.path());
    if let Some(query) = uri.query() {
        location.push('?');
        location.push_str(query);
    }

    Some((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response())
}

/// True when the request announces itself as a package tool lookup.
///
/// The first `go-get` query value decides, matching form-value semantics.
fn wants_import_meta(uri: &Uri) -> bool {
    first_query_value(uri, "go-get").is_some_and(|value| value == "1")
}

fn first_query_value<'a>(uri: &'a Uri, name: &str) -> Option<Cow<'a, str>> {
    let query = uri.query()?;

    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
}

/// Host the client asked for: request-target authority when present
/// (absolute-form), Host header otherwise.
fn request_host(request: &Request<Body>) -> &str {
    if let Some(authority) = request.uri().authority() {
        return authority.as_str();
    }

    request
        .headers()
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

/// Step 4: answer the tool lookup with the go-import document.
///
/// Exactly one leading separator is stripped. Multi-segment suffixes keep
/// every segment, so a sub-package remote carries the full path as given.
fn serve_import_meta(request: &Request<Body>) -> Response {
    let path = request.uri().path();
    let suffix = path.strip_prefix('/').unwrap_or(path);
    let descriptor = PackageDescriptor::new(suffix);

    match descriptor.render() {
        Ok(body) => (
            [(header::CACHE_CONTROL, "public, max-age=600")],
            Html(body),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Template rendering failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}
