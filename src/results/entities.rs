use crate::results::emotion::EmotionScores;
use crate::results::sentiment::FeatureSentimentResults;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EntitiesResult {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mentions: Option<Vec<EntityMention>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<EmotionScores>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<FeatureSentimentResults>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disambiguation: Option<DisambiguationResult>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityMention {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    // [begin, end) character offsets into the analyzed text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Vec<u32>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DisambiguationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dbpedia_resource: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtype: Option<Vec<String>>,
}
