use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::preprocess::ImageTensor;

#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("inference service unreachable: {0}")]
    Unavailable(String),
    #[error("inference service returned {status}: {body}")]
    Service { status: u16, body: String },
    #[error("malformed inference response: {0}")]
    MalformedResponse(String),
}

/// One decoded prediction: the winning class, its score, and the full
/// score vector it was taken from.
#[derive(Debug, Clone)]
pub struct PredictionOutcome {
    pub class_index: usize,
    pub confidence: f64,
    pub scores: Vec<f32>,
}

#[derive(Serialize)]
struct PredictRequest {
    signature_name: &'static str,
    instances: [Vec<Vec<Vec<f32>>>; 1],
}

#[derive(Deserialize)]
struct PredictResponse {
    predictions: Vec<Vec<f32>>,
}

/// Client for the remote TensorFlow-Serving prediction endpoint.
/// Issues exactly one POST per prediction; no retry.
#[derive(Clone)]
pub struct InferenceClient {
    http: reqwest::Client,
    endpoint: String,
}

impl InferenceClient {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, endpoint })
    }

    pub async fn predict(
        &self,
        tensor: &ImageTensor,
    ) -> Result<PredictionOutcome, InferenceError> {
        let request = PredictRequest {
            signature_name: "serving_default",
            instances: [tensor.to_instance()],
        };

        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| InferenceError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::Service {
                status: status.as_u16(),
                body,
            });
        }

        let decoded: PredictResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::MalformedResponse(e.to_string()))?;
        let scores = decoded
            .predictions
            .into_iter()
            .next()
            .ok_or_else(|| InferenceError::MalformedResponse("empty predictions list".into()))?;

        decode_scores(scores)
    }
}

/// Stable argmax over the score vector: on ties the lowest index wins.
pub fn decode_scores(scores: Vec<f32>) -> Result<PredictionOutcome, InferenceError> {
    if scores.is_empty() {
        return Err(InferenceError::MalformedResponse(
            "empty score vector".into(),
        ));
    }

    let mut class_index = 0;
    let mut best = scores[0];
    for (i, &score) in scores.iter().enumerate().skip(1) {
        if score > best {
            best = score;
            class_index = i;
        }
    }

    Ok(PredictionOutcome {
        class_index,
        confidence: best as f64,
        scores,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argmax_picks_highest_score() {
        let outcome = decode_scores(vec![0.1, 0.7, 0.2]).unwrap();
        assert_eq!(outcome.class_index, 1);
        assert!((outcome.confidence - 0.7).abs() < 1e-6);
    }

    #[test]
    fn tie_breaks_to_first_occurrence() {
        let outcome = decode_scores(vec![0.5, 0.5]).unwrap();
        assert_eq!(outcome.class_index, 0);
    }

    #[test]
    fn empty_score_vector_is_malformed() {
        assert!(matches!(
            decode_scores(vec![]),
            Err(InferenceError::MalformedResponse(_))
        ));
    }

    #[test]
    fn outcome_keeps_raw_scores() {
        let outcome = decode_scores(vec![0.2, 0.3, 0.5]).unwrap();
        assert_eq!(outcome.scores, vec![0.2, 0.3, 0.5]);
    }
}
