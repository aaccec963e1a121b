use crate::results::emotion::EmotionScores;
use crate::results::sentiment::FeatureSentimentResults;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<EmotionScores>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<FeatureSentimentResults>,
}
