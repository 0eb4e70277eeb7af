// src/tests/router_tests/page_tests.rs
use crate::domain::listing::{COVER_SUFFIX, FALLBACK_IMAGE};
use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{attrs, body_string, count, get, get_with, listing, storefront, FakeApi, SCENE_URL};
use crate::view::sessions::SESSION_COOKIE;
use astra::{Body, Request};
use http::Method;

fn session_cookie(resp: &astra::Response) -> Option<String> {
    resp.headers()
        .get("Set-Cookie")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(String::from)
}

#[test]
fn home_mounts_featured_listings_and_sets_cookie() {
    let app = storefront(FakeApi::with_featured(vec![
        listing("a", "Villa Serena"),
        listing("b", "Cypress Farmhouse"),
    ]));

    let resp = handle(get("/"), &app).unwrap();

    assert_eq!(resp.status(), 200);
    let cookie = session_cookie(&resp).expect("new visitor gets a cookie");
    assert!(cookie.starts_with(&format!("{SESSION_COOKIE}=")));

    let body = body_string(resp);
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("Featured stays"));
    assert_eq!(count(&body, "#listing-grid .property-card"), 2);
    assert_eq!(count(&body, "#listing-grid .skeleton-card"), 0);
    assert_eq!(attrs(&body, "spline-viewer", "url"), [SCENE_URL]);
    assert_eq!(
        attrs(&body, "#listing-grid .property-card", "data-listing-id"),
        ["a", "b"]
    );
}

#[test]
fn returning_visitor_keeps_cookie_and_refetches() {
    let app = storefront(FakeApi::with_featured(vec![listing("a", "Villa Serena")]));

    let first = handle(get("/"), &app).unwrap();
    let cookie = session_cookie(&first).unwrap();

    let second = handle(get_with("/", &[("Cookie", cookie.as_str())]), &app).unwrap();

    assert!(session_cookie(&second).is_none());
    assert_eq!(app.sessions().len(), 1);
    assert_eq!(app.api().calls(), ["featured", "featured"]);
}

#[test]
fn empty_backend_renders_zero_cards_and_no_skeletons() {
    let app = storefront(FakeApi::with_featured(vec![]));

    let body = body_string(handle(get("/"), &app).unwrap());

    assert_eq!(count(&body, "#listing-grid .property-card"), 0);
    assert_eq!(count(&body, "#listing-grid .skeleton-card"), 0);
    assert_eq!(count(&body, "#listing-grid .no-results"), 1);
}

#[test]
fn unreachable_backend_still_renders_page() {
    let app = storefront(FakeApi::unreachable());

    let resp = handle(get("/"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert_eq!(count(&body, "#listing-grid .property-card"), 0);
    assert_eq!(count(&body, "#listing-grid .skeleton-card"), 0);
    assert_eq!(count(&body, "#listing-grid .fetch-alert"), 1);
}

#[test]
fn card_shows_fallback_cover_price_and_three_amenities() {
    let mut bare = listing("z", "Stone Barn");
    bare.images.clear();
    bare.price_per_night = 175.0;
    bare.amenities = ["Pool", "Wifi", "Fireplace", "Orchard", "Tennis"]
        .map(String::from)
        .to_vec();
    let app = storefront(FakeApi::with_featured(vec![bare]));

    let body = body_string(handle(get("/"), &app).unwrap());

    assert_eq!(
        attrs(&body, "#listing-grid .property-card img", "src"),
        [format!("{FALLBACK_IMAGE}{COVER_SUFFIX}")]
    );
    assert_eq!(count(&body, "#listing-grid .property-card .amenity"), 3);
    assert!(body.contains("$175/night"));
    assert!(body.contains("Provence, France"));
}

#[test]
fn healthz_answers_ok() {
    let app = storefront(FakeApi::with_featured(vec![]));

    let resp = handle(get("/healthz"), &app).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(body_string(resp), "ok");
    assert!(app.api().calls().is_empty());
}

#[test]
fn unknown_path_is_not_found() {
    let app = storefront(FakeApi::with_featured(vec![]));

    let err = handle(get("/admin"), &app).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));

    let resp = error_to_response(err);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Error 404"));
}

#[test]
fn post_to_known_path_is_method_not_allowed() {
    let app = storefront(FakeApi::with_featured(vec![]));
    let req: Request = http::Request::builder()
        .method(Method::POST)
        .uri("/listings/search")
        .body(Body::empty())
        .unwrap();

    let err = handle(req, &app).unwrap_err();
    assert!(matches!(err, ServerError::MethodNotAllowed));

    let resp = error_to_response(err);
    assert_eq!(resp.status(), 405);
    assert_eq!(
        resp.headers().get("Allow").and_then(|v| v.to_str().ok()),
        Some("GET")
    );
}
