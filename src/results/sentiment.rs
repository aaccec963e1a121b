use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<DocumentSentimentResults>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<TargetedSentimentResults>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentSentimentResults {
    // "positive", "neutral" or "negative".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    // Score in [-1, 1]; negative values indicate negative sentiment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetedSentimentResults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Sentiment attached to another feature's result, e.g. a keyword or an
/// entity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureSentimentResults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}
