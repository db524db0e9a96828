// src/tests/router_tests/dashboard_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_string, init_test_state, request, FIXTURE_CSV};
use http::Method;

fn get_ok(uri: &str) -> String {
    let (state, _csv) = init_test_state(FIXTURE_CSV);
    let resp = handle(request(Method::GET, uri), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200, "GET {uri} should succeed");
    body_string(resp)
}

#[test]
fn dashboard_renders_metrics_and_selectors() {
    let body = get_ok("/");

    // the 3500 row is above the ceiling
    assert!(body.contains("9 listings"));
    assert!(body.contains("Total Listings"));
    assert!(body.contains("All States"));
    assert!(body.contains("All Segments"));
    assert!(body.contains("Baden Württemberg"));
    assert!(body.contains("Market Share by Price Segment"));
    assert!(body.contains("Living Space vs Rent Relationship"));
}

#[test]
fn region_filter_narrows_the_metrics() {
    let body = get_ok("/?region=Berlin&segment=All+Segments");

    // Berlin: 400, 1200, 2600 -> mean 1400
    assert!(body.contains("€1400"));
    assert!(body.contains(r#"<option value="Berlin" selected>"#));
}

#[test]
fn berlin_budget_and_mid_range_rows() {
    let body = get_ok("/?region=Berlin&segment=Budget");

    // only the 400 / 40 m² listing
    assert!(body.contains("€400"));
    assert!(body.contains("40.0 m²"));
    assert!(body.contains("€10.0"));
}

#[test]
fn empty_selection_shows_placeholders() {
    let body = get_ok("/?region=Hamburg&segment=Budget");

    assert!(body.contains(">0<"));
    assert!(body.contains("–"));
    assert!(body.contains("No data for the current selection"));
}

#[test]
fn geography_tab_lists_states_by_rent() {
    let body = get_ok("/?tab=geography");

    assert!(body.contains("Average Rent by State"));
    assert!(body.contains("Listings Distribution by State"));
    // Berlin out-rents Bayern, so it comes first despite the alphabet
    let chart = &body[body.find("Average Rent by State").unwrap()..];
    let berlin = chart.find(">Berlin<").expect("Berlin bar");
    let bayern = chart.find(">Bayern<").expect("Bayern bar");
    assert!(berlin < bayern, "states should be sorted by rent");
}

#[test]
fn amenities_tab_renders_both_charts() {
    let body = get_ok("/?tab=amenities");

    assert!(body.contains("Price Premium for Amenities"));
    assert!(body.contains("Amenity Prevalence"));
    assert!(body.contains(">balcony<"));
}

#[test]
fn amenities_tab_explains_when_nothing_compares() {
    // a single row has no baseline for any amenity
    let body = get_ok("/?tab=amenities&region=Hamburg");
    assert!(body.contains("Not enough listings"));
}

#[test]
fn relationships_tab_renders_the_heatmap() {
    let body = get_ok("/?tab=relationships");

    assert!(body.contains("Price Segments by State (%)"));
    assert!(body.contains(">Mid-Range<"));
    assert!(body.contains("100.0"));
}

#[test]
fn tab_links_keep_the_filters() {
    let body = get_ok("/?region=Sachsen&segment=Economy");
    assert!(body.contains("/?region=Sachsen&amp;segment=Economy&amp;tab=geography"));
}

#[test]
fn unknown_segment_is_a_bad_request() {
    let (state, _csv) = init_test_state(FIXTURE_CSV);
    let err = handle(request(Method::GET, "/?segment=Luxury"), &state).err().expect("handler should fail");

    assert_eq!(err.status(), 400);
    assert!(err.to_string().contains("Luxury"));
}
