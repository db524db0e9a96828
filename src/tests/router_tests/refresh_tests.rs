use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{body_string, init_test_state, request, FIXTURE_CSV};
use http::Method;

#[test]
fn refresh_reloads_the_dataset() {
    let (state, csv) = init_test_state(FIXTURE_CSV);

    let body = body_string(handle(request(Method::GET, "/"), &state).unwrap());
    assert!(body.contains("9 listings"));

    std::fs::write(
        csv.path(),
        format!("{FIXTURE_CSV}Bremen,80,700,50,True,False,False,False,True,1970\n"),
    )
    .unwrap();

    // still served from the cache
    let body = body_string(handle(request(Method::GET, "/"), &state).unwrap());
    assert!(body.contains("9 listings"));

    let resp = handle(request(Method::POST, "/refresh"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 302, "Should redirect after refresh");
    assert_eq!(
        resp.headers().get("Location").unwrap().to_str().unwrap(),
        "/"
    );

    let body = body_string(handle(request(Method::GET, "/"), &state).unwrap());
    assert!(body.contains("10 listings"));
    assert!(body.contains("Bremen"));
}

#[test]
fn load_failure_is_shown_to_the_user() {
    let (state, csv) = init_test_state(FIXTURE_CSV);
    std::fs::remove_file(csv.path()).unwrap();

    let err = handle(request(Method::GET, "/"), &state).err().expect("handler should fail");
    assert!(matches!(err, ServerError::DataLoad(_)));

    let resp = error_to_response(err);
    assert_eq!(resp.status(), 502);
    assert!(body_string(resp).contains("Error loading data"));
}

#[test]
fn schema_failure_is_shown_to_the_user() {
    let (state, _csv) = init_test_state("regio1,totalRent\nBerlin,400\n");

    let err = handle(request(Method::GET, "/"), &state).err().expect("handler should fail");
    let body = body_string(error_to_response(err));
    assert!(body.contains("missing column"));
    assert!(body.contains("livingSpace"));
}
