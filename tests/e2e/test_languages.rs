use crate::e2e::helpers;
use hyper::StatusCode;

#[tokio::test]
async fn it_should_list_the_full_language_catalog() {
    let app = helpers::spawn_app().await;

    let response = app.client.get("/api/languages").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    let languages = body.get("languages").and_then(|v| v.as_array()).unwrap();
    assert!(
        languages.len() > 70,
        "expected the full catalog, got {} languages",
        languages.len()
    );

    let japanese = languages
        .iter()
        .find(|l| l.get("code").and_then(|c| c.as_str()) == Some("ja"))
        .expect("Japanese should be in the catalog");
    assert_eq!(
        japanese.get("name").and_then(|n| n.as_str()),
        Some("Japanese")
    );
    assert_eq!(
        japanese.get("openaiCode").and_then(|c| c.as_str()),
        Some("ja")
    );
}

#[tokio::test]
async fn it_should_group_languages_by_region() {
    let app = helpers::spawn_app().await;

    let response = app.client.get("/api/languages").await.unwrap();

    let body = response.body.as_ref().unwrap();
    let regions = body.get("regions").unwrap();

    for key in ["europe", "asia", "middleEast", "africa", "americas"] {
        let group = regions.get(key).and_then(|v| v.as_array());
        assert!(
            group.is_some_and(|g| !g.is_empty()),
            "region {} should be present and non-empty",
            key
        );
    }
}

#[tokio::test]
async fn it_should_expose_the_default_quick_select_set() {
    let app = helpers::spawn_app().await;

    let response = app.client.get("/api/languages").await.unwrap();

    let body = response.body.as_ref().unwrap();
    let defaults = body.get("defaults").and_then(|v| v.as_array()).unwrap();
    assert_eq!(defaults.len(), 10);
    assert_eq!(
        defaults[0].get("code").and_then(|c| c.as_str()),
        Some("en")
    );
}
