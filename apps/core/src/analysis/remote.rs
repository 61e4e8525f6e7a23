//! Remote classifier adapter for the hosted inference API.
//!
//! One POST per call, no retries. Transport errors, non-success statuses and
//! bodies of the wrong shape all degrade to "unavailable" with a warning.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use super::classifier::{ClassifierScores, EmotionScore, SentimentClassifier};
use crate::config::AnalysisConfig;
use crate::error::AppError;

const NEGATIVE_LABEL: &str = "NEGATIVE";
const POSITIVE_LABEL: &str = "POSITIVE";

/// One `{label, score}` pair from the inference API
#[derive(Debug, Clone, Deserialize)]
struct LabelScore {
    label: String,
    score: f64,
}

impl ClassifierScores {
    /// Extracts both polarity probabilities. Labels must match exactly; either
    /// label missing, or a score outside [0, 1], is a malformed response.
    fn from_labels(labels: &[LabelScore]) -> Result<Self, AppError> {
        let find = |wanted: &str| -> Result<f64, AppError> {
            let score = labels
                .iter()
                .find(|l| l.label == wanted)
                .map(|l| l.score)
                .ok_or_else(|| AppError::Classifier(format!("response is missing the {} label", wanted)))?;
            if !score.is_finite() || !(0.0..=1.0).contains(&score) {
                return Err(AppError::Classifier(format!("{} score {} is out of range", wanted, score)));
            }
            Ok(score)
        };

        Ok(Self {
            negative: find(NEGATIVE_LABEL)?,
            positive: find(POSITIVE_LABEL)?,
        })
    }
}

/// Sentiment classifier backed by the hosted inference API
pub struct RemoteClassifier {
    client: Client,
    api_key: String,
    sentiment_url: Url,
    emotion_url: Url,
}

impl RemoteClassifier {
    /// Builds the adapter. Fails only on unusable configuration.
    pub fn new(config: &AnalysisConfig, api_key: impl Into<String>) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            sentiment_url: model_url(&config.api_base_url, &config.sentiment_model)?,
            emotion_url: model_url(&config.api_base_url, &config.emotion_model)?,
        })
    }

    /// Binary sentiment scores, with every failure surfaced as an error.
    pub async fn try_classify(&self, content: &str) -> Result<ClassifierScores, AppError> {
        let labels = self.request_labels(&self.sentiment_url, content).await?;
        ClassifierScores::from_labels(&labels)
    }

    /// Emotion label scores, with every failure surfaced as an error.
    pub async fn try_emotions(&self, content: &str) -> Result<Vec<EmotionScore>, AppError> {
        let labels = self.request_labels(&self.emotion_url, content).await?;
        Ok(labels
            .into_iter()
            .map(|l| EmotionScore {
                label: l.label,
                score: l.score,
            })
            .collect())
    }

    /// POSTs `{"inputs": content}` and returns the first label list of the
    /// `[[{label, score}, ...]]` response.
    async fn request_labels(&self, url: &Url, content: &str) -> Result<Vec<LabelScore>, AppError> {
        let payload = serde_json::json!({ "inputs": content });

        let res = self
            .client
            .post(url.clone())
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(AppError::Classifier(format!(
                "Inference request failed with status {}",
                status
            )));
        }

        let body: Vec<Vec<LabelScore>> = res
            .json()
            .await
            .map_err(|e| AppError::Classifier(format!("Unexpected response body: {}", e)))?;

        body.into_iter()
            .next()
            .filter(|labels| !labels.is_empty())
            .ok_or_else(|| AppError::Classifier("Response contained no labels".to_string()))
    }
}

#[async_trait]
impl SentimentClassifier for RemoteClassifier {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn classify(&self, content: &str) -> Option<ClassifierScores> {
        match self.try_classify(content).await {
            Ok(scores) => {
                debug!(
                    "Remote sentiment: negative={:.3} positive={:.3}",
                    scores.negative, scores.positive
                );
                Some(scores)
            }
            Err(e) => {
                warn!("Remote sentiment classifier unavailable, using lexicon analysis: {}", e);
                None
            }
        }
    }

    async fn emotions(&self, content: &str) -> Option<Vec<EmotionScore>> {
        match self.try_emotions(content).await {
            Ok(emotions) => Some(emotions),
            Err(e) => {
                warn!("Remote emotion classifier unavailable: {}", e);
                None
            }
        }
    }
}

/// `{base}/models/{model}`. Model ids may contain a namespace slash.
fn model_url(base: &Url, model: &str) -> Result<Url, AppError> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base.join(&format!("models/{}", model.trim_matches('/')))?)
}
