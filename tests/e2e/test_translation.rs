use crate::e2e::helpers::{
    self,
    mocks::{MockSpeechRepository, MockTranslationRepository},
};
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::sync::Arc;

fn language(code: &str, name: &str) -> Value {
    json!({ "code": code, "name": name, "openaiCode": code })
}

fn translate_request(text: &str, languages: Vec<Value>) -> Value {
    json!({
        "text": text,
        "targetLanguages": languages,
        "openaiKey": "sk-test",
        "elevenlabsKey": "el-test"
    })
}

#[tokio::test]
async fn it_should_translate_into_all_selected_languages() {
    let app = helpers::spawn_app().await;
    let body = translate_request(
        "  Hello  ",
        vec![language("es", "Spanish"), language("ja", "Japanese")],
    );

    let response = app.client.post("/api/translate", &body).await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("success").and_then(|v| v.as_bool()), Some(true));
    assert_eq!(
        body.get("originalText").and_then(|v| v.as_str()),
        Some("Hello")
    );

    let translations = body.get("translations").and_then(|v| v.as_array()).unwrap();
    assert_eq!(translations.len(), 2);

    // Mock provider wraps its response in quotes; the service strips them
    assert_eq!(
        translations[0].get("text").and_then(|v| v.as_str()),
        Some("Hello (Spanish)")
    );
    assert_eq!(
        translations[0].get("language").and_then(|v| v.as_str()),
        Some("es")
    );
    assert_eq!(
        translations[0].get("audioGenerated").and_then(|v| v.as_bool()),
        Some(false)
    );
    assert!(translations[0].get("audioUrl").unwrap().is_null());
}

#[tokio::test]
async fn it_should_keep_result_order_across_batches() {
    let app = helpers::spawn_app().await;
    let body = translate_request(
        "Hello",
        vec![
            language("es", "Spanish"),
            language("fr", "French"),
            language("de", "German"),
            language("ja", "Japanese"),
        ],
    );

    let response = app.client.post("/api/translate", &body).await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    let translations = body.get("translations").and_then(|v| v.as_array()).unwrap();
    let codes: Vec<&str> = translations
        .iter()
        .filter_map(|t| t.get("language").and_then(|v| v.as_str()))
        .collect();
    assert_eq!(codes, vec!["es", "fr", "de", "ja"]);
}

#[tokio::test]
async fn it_should_isolate_a_failing_language_from_its_siblings() {
    let app = helpers::spawn_app_with(
        Arc::new(MockTranslationRepository::failing_for(vec!["French"])),
        Arc::new(MockSpeechRepository::ok()),
    )
    .await;
    let body = translate_request(
        "Hello",
        vec![
            language("es", "Spanish"),
            language("fr", "French"),
            language("de", "German"),
        ],
    );

    let response = app.client.post("/api/translate", &body).await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    let translations = body.get("translations").and_then(|v| v.as_array()).unwrap();
    assert_eq!(translations.len(), 3);

    let failed = translations[1].get("text").and_then(|v| v.as_str()).unwrap();
    assert!(failed.starts_with("Error:"), "got '{}'", failed);
    assert!(failed.contains("French"));

    assert_eq!(
        translations[0].get("text").and_then(|v| v.as_str()),
        Some("Hello (Spanish)")
    );
    assert_eq!(
        translations[2].get("text").and_then(|v| v.as_str()),
        Some("Hello (German)")
    );
}

#[tokio::test]
async fn it_should_reject_empty_text() {
    let app = helpers::spawn_app().await;
    let body = translate_request("   ", vec![language("es", "Spanish")]);

    let response = app.client.post("/api/translate", &body).await.unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Text cannot be empty");
}

#[tokio::test]
async fn it_should_reject_oversized_text() {
    let app = helpers::spawn_app().await;
    let body = translate_request(&"a".repeat(5001), vec![language("es", "Spanish")]);

    let response = app.client.post("/api/translate", &body).await.unwrap();

    response
        .assert_status(StatusCode::PAYLOAD_TOO_LARGE)
        .assert_error_message("Text must be less than 5000 characters");
}

#[tokio::test]
async fn it_should_reject_an_empty_language_list() {
    let app = helpers::spawn_app().await;
    let body = translate_request("Hello", vec![]);

    let response = app.client.post("/api/translate", &body).await.unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Target languages are required");
}

#[tokio::test]
async fn it_should_reject_an_incomplete_language_entry() {
    let app = helpers::spawn_app().await;
    let body = translate_request(
        "Hello",
        vec![json!({ "code": "es", "name": "Spanish", "openaiCode": "" })],
    );

    let response = app.client.post("/api/translate", &body).await.unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Each target language must have code, name, and openaiCode");
}

#[tokio::test]
async fn it_should_require_both_api_keys() {
    let app = helpers::spawn_app().await;

    let body = json!({
        "text": "Hello",
        "targetLanguages": [language("es", "Spanish")],
        "openaiKey": "",
        "elevenlabsKey": "el-test"
    });
    let response = app.client.post("/api/translate", &body).await.unwrap();
    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("OpenAI API key is required");

    let body = json!({
        "text": "Hello",
        "targetLanguages": [language("es", "Spanish")],
        "openaiKey": "sk-test",
        "elevenlabsKey": ""
    });
    let response = app.client.post("/api/translate", &body).await.unwrap();
    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("ElevenLabs API key is required");
}
