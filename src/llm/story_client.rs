use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::API_HOST;

#[derive(Debug, Error)]
pub enum StoryError {
    #[error("Text field must not be empty")]
    MissingText,
    #[error("Creative level must not be empty")]
    MissingCreative,
    #[error("Language must not be empty")]
    MissingLanguage,
    #[error("Syllable min and max must be at least 1")]
    SyllableTooSmall,
    #[error("Syllable min must not exceed max")]
    SyllableRangeInverted,
    #[error("Story API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("Story API returned an invalid response")]
    InvalidResponse,
    #[error("Network error: {0}")]
    Network(String),
}

impl StoryError {
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            StoryError::MissingText
                | StoryError::MissingCreative
                | StoryError::MissingLanguage
                | StoryError::SyllableTooSmall
                | StoryError::SyllableRangeInverted
        )
    }
}

impl From<reqwest::Error> for StoryError {
    fn from(err: reqwest::Error) -> Self {
        StoryError::Network(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllableRange {
    pub min: u32,
    pub max: u32,
}

/// Body of the story-generation form, forwarded to the external API as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryRequest {
    pub text: String,
    pub client: String,
    pub mode: String,
    pub length: String,
    pub creative: String,
    pub language: String,
    pub syllable: SyllableRange,
}

impl StoryRequest {
    pub fn validate(&self) -> Result<(), StoryError> {
        if self.text.trim().is_empty() {
            return Err(StoryError::MissingText);
        }
        if self.creative.trim().is_empty() {
            return Err(StoryError::MissingCreative);
        }
        if self.language.trim().is_empty() {
            return Err(StoryError::MissingLanguage);
        }
        if self.syllable.min < 1 || self.syllable.max < 1 {
            return Err(StoryError::SyllableTooSmall);
        }
        if self.syllable.min > self.syllable.max {
            return Err(StoryError::SyllableRangeInverted);
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct StoryResponse {
    success: bool,
    #[serde(default)]
    text: String,
}

/// Client for the one real outbound call this service makes. Single
/// fire-and-forget request per submission, reqwest default timeout policy.
pub struct StoryClient {
    base_url: String,
    client: reqwest::Client,
}

impl StoryClient {
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| API_HOST.to_string()),
            client: reqwest::Client::new(),
        }
    }

    pub async fn generate(&self, request: &StoryRequest) -> Result<String, StoryError> {
        request.validate()?;

        let response = self
            .client
            .post(format!("{}/ai/storygenerator", self.base_url))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(StoryError::Api { status, message });
        }

        let body: StoryResponse = response.json().await?;
        if !body.success || body.text.trim().is_empty() {
            return Err(StoryError::InvalidResponse);
        }

        Ok(body.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> StoryRequest {
        StoryRequest {
            text: "A lighthouse keeper finds a message in a bottle".to_string(),
            client: "StoryGenerator".to_string(),
            mode: "Young Adult".to_string(),
            length: "Novel".to_string(),
            creative: "High".to_string(),
            language: "en".to_string(),
            syllable: SyllableRange { min: 2, max: 4 },
        }
    }

    #[test]
    fn complete_request_passes_validation() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn blank_text_is_rejected() {
        let mut req = request();
        req.text = "   ".to_string();
        assert!(matches!(req.validate(), Err(StoryError::MissingText)));
    }

    #[test]
    fn blank_creative_and_language_are_rejected() {
        let mut req = request();
        req.creative = String::new();
        assert!(matches!(req.validate(), Err(StoryError::MissingCreative)));

        let mut req = request();
        req.language = String::new();
        assert!(matches!(req.validate(), Err(StoryError::MissingLanguage)));
    }

    #[test]
    fn syllable_bounds_are_enforced() {
        let mut req = request();
        req.syllable = SyllableRange { min: 0, max: 4 };
        assert!(matches!(req.validate(), Err(StoryError::SyllableTooSmall)));

        let mut req = request();
        req.syllable = SyllableRange { min: 5, max: 2 };
        assert!(matches!(req.validate(), Err(StoryError::SyllableRangeInverted)));
    }

    #[test]
    fn validation_errors_are_classified_as_such() {
        assert!(StoryError::MissingText.is_validation());
        assert!(StoryError::SyllableRangeInverted.is_validation());
        assert!(!StoryError::InvalidResponse.is_validation());
        assert!(
            !StoryError::Api {
                status: 500,
                message: "upstream".to_string()
            }
            .is_validation()
        );
    }

    #[test]
    fn request_serializes_with_the_expected_field_names() {
        let wire = serde_json::to_value(request()).unwrap();
        for key in ["text", "client", "mode", "length", "creative", "language", "syllable"] {
            assert!(wire.get(key).is_some(), "missing field {}", key);
        }
        assert_eq!(wire["syllable"], serde_json::json!({"min": 2, "max": 4}));
    }
}
