//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results. Comparing parsed JSON (not raw strings) avoids
//! false negatives from field-ordering differences.

use hero_core::{ApiError, Hero, HeroClient, HttpMethod, HttpRequest, HttpResponse, NewHero};

const BASE_URL: &str = "http://localhost:3000";

fn client() -> HeroClient {
    HeroClient::new(BASE_URL)
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn load(raw: &str) -> Vec<serde_json::Value> {
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

/// Check method and path, plus headers and JSON body when the vector has them.
fn assert_request(name: &str, req: &HttpRequest, expected: &serde_json::Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.path, format!("{BASE_URL}{}", expected["path"].as_str().unwrap()), "{name}: path");

    if let Some(headers) = expected.get("headers") {
        let expected_headers: Vec<(String, String)> = headers
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let arr = h.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");
    }

    match expected.get("body") {
        Some(body) => {
            let req_body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(&req_body, body, "{name}: body");
        }
        None => assert!(req.body.is_none(), "{name}: body should be None"),
    }
}

fn simulated_response(case: &serde_json::Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

/// Compare a parse outcome with the vector's `expected_error`, if any.
/// Returns the success value when no error is expected.
fn check_outcome<T: std::fmt::Debug>(name: &str, case: &serde_json::Value, result: Result<T, ApiError>) -> Option<T> {
    match case.get("expected_error") {
        Some(expected_error) => {
            let err = result.unwrap_err();
            match expected_error.as_str().unwrap() {
                "NotFound" => assert!(matches!(err, ApiError::NotFound), "{name}: expected NotFound"),
                "Http" => assert!(matches!(err, ApiError::Http { .. }), "{name}: expected Http"),
                other => panic!("{name}: unknown expected_error: {other}"),
            }
            None
        }
        None => Some(result.unwrap()),
    }
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[test]
fn list_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/list.json")) {
        let name = case["name"].as_str().unwrap();

        let req = c.build_list_heroes();
        assert_request(name, &req, &case["expected_request"]);

        let heroes = c.parse_list_heroes(simulated_response(&case)).unwrap();
        let expected: Vec<Hero> = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(heroes, expected, "{name}: parsed result");
    }
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

#[test]
fn get_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/get.json")) {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_u64().unwrap();

        let req = c.build_get_hero(id);
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_get_hero(simulated_response(&case));
        if let Some(hero) = check_outcome(name, &case, result) {
            let expected: Hero = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(hero, expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[test]
fn create_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/create.json")) {
        let name = case["name"].as_str().unwrap();
        let input: NewHero = serde_json::from_value(case["input"].clone()).unwrap();

        let req = c.build_create_hero(&input).unwrap();
        assert_request(name, &req, &case["expected_request"]);

        let hero = c.parse_create_hero(simulated_response(&case)).unwrap();
        let expected: Hero = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(hero, expected, "{name}: parsed result");
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[test]
fn update_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/update.json")) {
        let name = case["name"].as_str().unwrap();
        let input: Hero = serde_json::from_value(case["input"].clone()).unwrap();

        let req = c.build_update_hero(&input).unwrap();
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_update_hero(simulated_response(&case));
        check_outcome(name, &case, result);
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/delete.json")) {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_u64().unwrap();

        let req = c.build_delete_hero(id);
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_delete_hero(simulated_response(&case));
        check_outcome(name, &case, result);
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[test]
fn search_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/search.json")) {
        let name = case["name"].as_str().unwrap();
        let term = case["term"].as_str().unwrap();

        let req = c.build_search_heroes(term);
        assert_request(name, &req, &case["expected_request"]);

        let heroes = c.parse_search_heroes(simulated_response(&case)).unwrap();
        let expected: Vec<Hero> = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(heroes, expected, "{name}: parsed result");
    }
}
