// src/tests/router_tests/listings_tests.rs
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{attrs, body_string, count, get, get_with, listing, storefront, FakeApi};

const HTMX: (&str, &str) = ("HX-Request", "true");

fn cookie_for<A: crate::api::ListingApi>(app: &crate::view::Storefront<A>) -> String {
    let resp = handle(get("/"), app).unwrap();
    let header = resp.headers().get("Set-Cookie").unwrap().to_str().unwrap();
    header.split(';').next().unwrap().to_string()
}

#[test]
fn htmx_search_returns_only_the_grid() {
    let app = storefront(FakeApi::with_featured(vec![listing("a", "Villa Serena")]));
    app.api()
        .set_search_results(vec![listing("v1", "Villa Luna"), listing("v2", "Villa Sole")]);
    let cookie = cookie_for(&app);

    let resp = handle(
        get_with(
            "/listings/search?q=villa&type=cottage",
            &[HTMX, ("Cookie", cookie.as_str())],
        ),
        &app,
    )
    .unwrap();
    let body = body_string(resp);

    assert!(body.starts_with(r#"<div id="listing-grid""#));
    assert!(!body.contains("<html"));
    assert_eq!(
        attrs(&body, ".property-card", "data-listing-id"),
        ["v1", "v2"]
    );
    assert_eq!(
        app.api().calls(),
        ["featured", "search q=villa type=cottage"]
    );
}

#[test]
fn plain_search_renders_full_page_with_filters_kept() {
    let app = storefront(FakeApi::with_featured(vec![]));
    app.api().set_search_results(vec![listing("f1", "Fig Tree Farm")]);

    let body = body_string(
        handle(get("/listings/search?q=lake+como&type=farmhouse"), &app).unwrap(),
    );

    assert!(body.starts_with("<!DOCTYPE html>"));
    assert_eq!(attrs(&body, "input#q", "value"), ["lake como"]);
    assert_eq!(attrs(&body, "select#type option[selected]", "value"), ["farmhouse"]);
    assert_eq!(count(&body, "#listing-grid .property-card"), 1);
    assert_eq!(app.api().calls(), ["search q=lake como type=farmhouse"]);
}

#[test]
fn empty_filters_are_passed_as_empty() {
    let app = storefront(FakeApi::with_featured(vec![]));

    handle(get_with("/listings/search?q=&type=", &[HTMX]), &app).unwrap();

    assert_eq!(app.api().calls(), ["search q= type="]);
}

#[test]
fn refresh_reissues_featured_fetch() {
    let app = storefront(FakeApi::with_featured(vec![listing("a", "Villa Serena")]));
    let cookie = cookie_for(&app);

    let first = body_string(
        handle(get_with("/listings/featured", &[HTMX, ("Cookie", cookie.as_str())]), &app).unwrap(),
    );
    let second = body_string(
        handle(get_with("/listings/featured", &[HTMX, ("Cookie", cookie.as_str())]), &app).unwrap(),
    );

    assert_eq!(first, second);
    assert_eq!(count(&first, ".property-card"), 1);
    assert_eq!(app.api().calls(), ["featured", "featured", "featured"]);
}

#[test]
fn unknown_type_is_bad_request() {
    let app = storefront(FakeApi::with_featured(vec![]));

    let err = handle(get("/listings/search?type=castle"), &app).unwrap_err();

    assert!(matches!(err, ServerError::BadRequest(_)));
    assert!(app.api().calls().is_empty());
}

#[test]
fn overlong_query_is_bad_request() {
    let app = storefront(FakeApi::with_featured(vec![]));
    let uri = format!("/listings/search?q={}", "a".repeat(201));

    let err = handle(get(&uri), &app).unwrap_err();

    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn first_poll_of_unstarted_view_settles() {
    let app = storefront(FakeApi::with_featured(vec![listing("a", "Villa Serena")]));
    let fresh = app.sessions().open(None);
    let cookie = format!("stayfront_sid={}", fresh.token);

    let body = body_string(
        handle(get_with("/listings", &[HTMX, ("Cookie", cookie.as_str())]), &app).unwrap(),
    );

    assert_eq!(count(&body, "#listing-grid .skeleton-card"), 0);
    assert!(attrs(&body, "#listing-grid", "hx-get").is_empty());
    assert_eq!(attrs(&body, ".property-card", "data-listing-id"), ["a"]);
    assert_eq!(app.api().calls(), ["featured"]);

    // settled now: further polls read state without fetching
    handle(get_with("/listings", &[HTMX, ("Cookie", cookie.as_str())]), &app).unwrap();
    assert_eq!(app.api().calls(), ["featured"]);
}

#[test]
fn cookieless_polls_do_not_create_sessions() {
    let app = storefront(FakeApi::with_featured(vec![listing("a", "Villa Serena")]));
    let visitor = cookie_for(&app);

    for _ in 0..20 {
        let resp = handle(get_with("/listings", &[HTMX]), &app).unwrap();
        assert!(resp.headers().get("Set-Cookie").is_none());
        let body = body_string(resp);
        assert_eq!(count(&body, "#listing-grid .skeleton-card"), 0);
        assert_eq!(count(&body, ".property-card"), 1);
    }

    assert_eq!(app.sessions().len(), 1);
    let resp = handle(get_with("/listings", &[HTMX, ("Cookie", visitor.as_str())]), &app).unwrap();
    assert_eq!(count(&body_string(resp), ".property-card"), 1);
}

#[test]
fn stale_cookie_poll_settles_without_new_session() {
    let app = storefront(FakeApi::with_featured(vec![listing("a", "Villa Serena")]));

    let resp = handle(
        get_with("/listings", &[HTMX, ("Cookie", "stayfront_sid=evicted-or-forged")]),
        &app,
    )
    .unwrap();

    assert!(resp.headers().get("Set-Cookie").is_none());
    assert_eq!(count(&body_string(resp), ".property-card"), 1);
    assert_eq!(app.sessions().len(), 0);
}

#[test]
fn failed_search_keeps_cards_and_shows_alert() {
    let app = storefront(FakeApi::with_featured(vec![
        listing("a", "Villa Serena"),
        listing("b", "Cypress Farmhouse"),
    ]));
    let cookie = cookie_for(&app);
    app.api().fail_search("upstream timed out");

    let body = body_string(
        handle(
            get_with("/listings/search?q=villa", &[HTMX, ("Cookie", cookie.as_str())]),
            &app,
        )
        .unwrap(),
    );

    assert_eq!(attrs(&body, ".property-card", "data-listing-id"), ["a", "b"]);
    assert_eq!(count(&body, ".fetch-alert"), 1);
    assert!(body.contains("upstream timed out"));
}

#[test]
fn current_listings_after_mount_match_mount() {
    let app = storefront(FakeApi::with_featured(vec![listing("a", "Villa Serena")]));
    let cookie = cookie_for(&app);

    let body = body_string(
        handle(get_with("/listings", &[HTMX, ("Cookie", cookie.as_str())]), &app).unwrap(),
    );

    assert_eq!(attrs(&body, ".property-card", "data-listing-id"), ["a"]);
    assert_eq!(app.api().calls(), ["featured"]);
}
