use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{body_string, init_test_state, request, FIXTURE_CSV};
use http::Method;

#[test]
fn unknown_paths_are_not_found() {
    let (state, _csv) = init_test_state(FIXTURE_CSV);

    let err = handle(request(Method::GET, "/admin"), &state).err().expect("handler should fail");
    assert!(matches!(err, ServerError::NotFound));
    assert_eq!(error_to_response(err).status(), 404);
}

#[test]
fn refresh_requires_post() {
    let (state, _csv) = init_test_state(FIXTURE_CSV);

    let err = handle(request(Method::GET, "/refresh"), &state).err().expect("handler should fail");
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn stylesheet_is_served() {
    let (state, _csv) = init_test_state(FIXTURE_CSV);

    let resp = handle(request(Method::GET, "/static/main.css"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "text/css; charset=utf-8"
    );
    assert!(body_string(resp).contains(".chart-svg"));
}
