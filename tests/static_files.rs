mod support;

use reqwest::StatusCode;

#[tokio::test]
async fn root_serves_the_index_page() {
    let base_url = support::ensure_server();

    let res = reqwest::get(format!("{base_url}/")).await.expect("request should succeed");

    assert_eq!(res.status(), StatusCode::OK);
    let body = res.text().await.expect("body");
    assert_eq!(body, support::INDEX_HTML);
}

#[tokio::test]
async fn public_assets_are_served_by_path() {
    let base_url = support::ensure_server();

    let res = reqwest::get(format!("{base_url}/assets/three.min.js"))
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.expect("body"), "// three");
}

#[tokio::test]
async fn bundle_is_served_from_its_own_root() {
    let base_url = support::ensure_server();

    let res = reqwest::get(format!("{base_url}/build/client-bundle.js"))
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), StatusCode::OK);
    let content_type = res
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.contains("javascript"), "{content_type}");
    assert_eq!(res.text().await.expect("body"), support::BUNDLE_JS);
}

#[tokio::test]
async fn bundle_is_not_visible_under_the_public_root() {
    let base_url = support::ensure_server();

    let res = reqwest::get(format!("{base_url}/client-bundle.js"))
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_files_are_not_found() {
    let base_url = support::ensure_server();

    let res = reqwest::get(format!("{base_url}/nope.html"))
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn writes_are_rejected() {
    let base_url = support::ensure_server();
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{base_url}/index.html"))
        .body("overwrite")
        .send()
        .await
        .expect("request should succeed");
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);

    let res = client
        .put(format!("{base_url}/build/client-bundle.js"))
        .body("overwrite")
        .send()
        .await
        .expect("request should succeed");
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);

    // The page is untouched.
    let body = reqwest::get(format!("{base_url}/"))
        .await
        .expect("request should succeed")
        .text()
        .await
        .expect("body");
    assert_eq!(body, support::INDEX_HTML);
}
