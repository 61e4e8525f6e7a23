//! Remote Classifier Tests
//!
//! Exercises the inference API adapter against a local mock server and checks
//! that every failure mode degrades to the lexicon result.

use crate::analysis::{EntryMetadata, RemoteClassifier, RiskLevel, Sentiment, WellnessAnalyzer};
use crate::config::AnalysisConfig;
use crate::error::AppError;
use serde_json::json;
use std::time::Duration;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "hf_test_key";
const SENTIMENT_PATH: &str = "/models/distilbert-base-uncased-finetuned-sst-2-english";
const EMOTION_PATH: &str = "/models/j-hartmann/emotion-english-distilroberta-base";

fn config_for(server: &MockServer) -> AnalysisConfig {
    let mut config = AnalysisConfig::offline().with_api_key(API_KEY);
    config.api_base_url = Url::parse(&server.uri()).unwrap();
    config.request_timeout = Duration::from_secs(1);
    config
}

fn analyzer_for(server: &MockServer) -> WellnessAnalyzer {
    WellnessAnalyzer::from_config(&config_for(server)).unwrap()
}

fn sentiment_body(negative: f64, positive: f64) -> serde_json::Value {
    json!([[
        { "label": "NEGATIVE", "score": negative },
        { "label": "POSITIVE", "score": positive }
    ]])
}

/// The remote path must produce exactly the offline result when it fails.
async fn assert_degrades_to_offline(server: &MockServer, content: &str) {
    let metadata = EntryMetadata::text().with_voice(true);
    let remote = analyzer_for(server).analyze(content, &metadata).await;
    let offline = WellnessAnalyzer::offline().analyze(content, &metadata).await;
    assert_eq!(remote, offline);
}

#[tokio::test]
async fn test_remote_sentiment_used() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SENTIMENT_PATH))
        .and(header("authorization", "Bearer hf_test_key"))
        .and(body_json(json!({ "inputs": "The meeting was moved to Thursday" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(sentiment_body(0.95, 0.05)))
        .expect(1)
        .mount(&server)
        .await;

    let result = analyzer_for(&server)
        .analyze("The meeting was moved to Thursday", &EntryMetadata::text())
        .await;

    assert_eq!(result.sentiment, Sentiment::Negative);
    assert_eq!(result.mood_score, 1);
    assert_eq!(result.risk_level, RiskLevel::Medium);
}

#[tokio::test]
async fn test_label_order_ignored() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SENTIMENT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([[
            { "label": "POSITIVE", "score": 0.88 },
            { "label": "NEGATIVE", "score": 0.12 }
        ]])))
        .mount(&server)
        .await;

    let classifier = RemoteClassifier::new(&config_for(&server), API_KEY).unwrap();
    let scores = classifier.try_classify("a calm evening").await.unwrap();
    assert_eq!(scores.positive, 0.88);
    assert_eq!(scores.negative, 0.12);
}

#[tokio::test]
async fn test_lowercase_labels_degrade() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SENTIMENT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([[
            { "label": "negative", "score": 0.95 },
            { "label": "positive", "score": 0.05 }
        ]])))
        .mount(&server)
        .await;

    let classifier = RemoteClassifier::new(&config_for(&server), API_KEY).unwrap();
    let err = classifier.try_classify("happy and grateful").await.unwrap_err();
    assert!(matches!(err, AppError::Classifier(_)));

    assert_degrades_to_offline(&server, "happy and grateful").await;
}

#[tokio::test]
async fn test_server_error_degrades() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Model is loading"))
        .mount(&server)
        .await;

    let classifier = RemoteClassifier::new(&config_for(&server), API_KEY).unwrap();
    let err = classifier.try_classify("so lonely and tired").await.unwrap_err();
    assert!(matches!(err, AppError::Classifier(ref msg) if msg.contains("503")));

    assert_degrades_to_offline(&server, "so lonely and tired").await;
}

#[tokio::test]
async fn test_malformed_json_degrades() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[[{\"label\": \"NEG"))
        .mount(&server)
        .await;

    assert_degrades_to_offline(&server, "I feel sad and hopeless").await;
}

#[tokio::test]
async fn test_wrong_shape_degrades() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "error": "Model is currently loading" })))
        .mount(&server)
        .await;

    assert_degrades_to_offline(&server, "happy and grateful").await;
}

#[tokio::test]
async fn test_empty_label_list_degrades() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([[]])))
        .mount(&server)
        .await;

    let classifier = RemoteClassifier::new(&config_for(&server), API_KEY).unwrap();
    assert!(classifier.try_classify("anything").await.is_err());

    assert_degrades_to_offline(&server, "anxious about work").await;
}

#[tokio::test]
async fn test_missing_label_degrades() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([[
            { "label": "POSITIVE", "score": 0.99 }
        ]])))
        .mount(&server)
        .await;

    assert_degrades_to_offline(&server, "so tired and exhausted, can't sleep").await;
}

#[tokio::test]
async fn test_timeout_degrades() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(sentiment_body(0.01, 0.99))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let classifier = RemoteClassifier::new(&config_for(&server), API_KEY).unwrap();
    let err = classifier.try_classify("sad").await.unwrap_err();
    assert!(matches!(err, AppError::Timeout(_)));

    assert_degrades_to_offline(&server, "sad").await;
}

#[tokio::test]
async fn test_self_harm_overrides_remote_positive() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SENTIMENT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(sentiment_body(0.02, 0.98)))
        .mount(&server)
        .await;

    let result = analyzer_for(&server)
        .analyze("Feeling good lately but I still think about suicide and hurting myself", &EntryMetadata::text())
        .await;

    assert_eq!(result.sentiment, Sentiment::Positive);
    assert_eq!(result.risk_level, RiskLevel::High);
}

#[tokio::test]
async fn test_no_credential_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sentiment_body(0.9, 0.1)))
        .expect(0)
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.api_key = None;
    let analyzer = WellnessAnalyzer::from_config(&config).unwrap();

    let result = analyzer.analyze("I feel happy and grateful today", &EntryMetadata::text()).await;
    assert_eq!(result.sentiment, Sentiment::Positive);
    assert!(analyzer.emotions("I feel happy").await.is_none());
}

#[tokio::test]
async fn test_empty_entry_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sentiment_body(0.9, 0.1)))
        .expect(0)
        .mount(&server)
        .await;

    let result = analyzer_for(&server).analyze("   ", &EntryMetadata::text()).await;
    assert_eq!(result.mood_score, 7);
}

#[tokio::test]
async fn test_emotions_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(EMOTION_PATH))
        .and(header("authorization", "Bearer hf_test_key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([[
            { "label": "joy", "score": 0.91 },
            { "label": "sadness", "score": 0.04 },
            { "label": "fear", "score": 0.02 }
        ]])))
        .expect(1)
        .mount(&server)
        .await;

    let emotions = analyzer_for(&server).emotions("What a lovely day").await.unwrap();
    assert_eq!(emotions.len(), 3);
    assert_eq!(emotions[0].label, "joy");
    assert_eq!(emotions[0].score, 0.91);
}

#[tokio::test]
async fn test_emotions_failure_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(EMOTION_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    assert!(analyzer_for(&server).emotions("What a lovely day").await.is_none());
}
