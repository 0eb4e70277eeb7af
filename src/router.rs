use crate::api::ListingApi;
use crate::errors::ServerError;
use crate::responses::{html_response, html_response_with_cookie, text_response, ResultResp};
use crate::templates::pages;
use crate::view::sessions::{token_from_cookie_header, Session};
use crate::view::{Storefront, ViewSnapshot};
use astra::Request;
use std::collections::HashMap;
use tracing::debug;
use url::form_urlencoded;

const MAX_QUERY_LEN: usize = 200;

pub fn handle<A: ListingApi>(req: Request, app: &Storefront<A>) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    debug!(method, path, "request");

    match (method, path) {
        ("GET", "/healthz") => text_response("ok"),

        // Every page load is a fresh mount of the storefront view.
        ("GET", "/") => {
            let session = open_session(&req, app);
            let view = app.mount(&session);
            respond(app, &session, &view, false)
        }

        // Polling must not mint sessions: unknown visitors get a one-off view.
        ("GET", "/listings") => {
            let session = cookie_token(&req)
                .and_then(|token| app.sessions().find(token))
                .unwrap_or_else(Session::detached);
            let view = app.current(&session);
            respond(app, &session, &view, is_htmx(&req))
        }

        ("GET", "/listings/featured") => {
            let session = open_session(&req, app);
            let view = app.refresh(&session);
            respond(app, &session, &view, is_htmx(&req))
        }

        ("GET", "/listings/search") => {
            let params = parse_query(&req);
            let query = params.get("q").map(|s| s.trim()).unwrap_or("");
            let property_type = params.get("type").map(|s| s.trim()).unwrap_or("");

            if query.chars().count() > MAX_QUERY_LEN {
                return Err(ServerError::BadRequest(format!(
                    "search text is limited to {MAX_QUERY_LEN} characters"
                )));
            }
            if !pages::PROPERTY_TYPES.iter().any(|(v, _)| *v == property_type) {
                return Err(ServerError::BadRequest(format!(
                    "unknown property type: {property_type}"
                )));
            }

            let session = open_session(&req, app);
            let view = app.search(&session, query, property_type);
            respond(app, &session, &view, is_htmx(&req))
        }

        (_, "/" | "/healthz" | "/listings" | "/listings/featured" | "/listings/search") => {
            Err(ServerError::MethodNotAllowed)
        }

        _ => Err(ServerError::NotFound),
    }
}

fn cookie_token(req: &Request) -> Option<&str> {
    req.headers()
        .get("Cookie")
        .and_then(|v| v.to_str().ok())
        .and_then(token_from_cookie_header)
}

fn open_session<A: ListingApi>(req: &Request, app: &Storefront<A>) -> Session {
    app.sessions().open(cookie_token(req))
}

fn is_htmx(req: &Request) -> bool {
    req.headers()
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "true")
}

/// Full page for normal navigation, just the grid for htmx swaps.
fn respond<A: ListingApi>(
    app: &Storefront<A>,
    session: &Session,
    view: &ViewSnapshot,
    fragment: bool,
) -> ResultResp {
    let markup = if fragment {
        pages::listing_grid(view)
    } else {
        pages::home_page(view, app.scene_url())
    };

    if session.is_new {
        html_response_with_cookie(markup, &session.set_cookie())
    } else {
        html_response(markup)
    }
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
