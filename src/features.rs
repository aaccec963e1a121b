use crate::feature_type::FeatureType;
use serde::{Deserialize, Serialize};

/// Selects the analyses the service runs over the submitted content. A
/// feature is requested by attaching its options, even when those options
/// are empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Features {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concepts: Option<ConceptsOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<EmotionOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<EntitiesOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<KeywordsOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MetadataOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relations: Option<RelationsOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semantic_roles: Option<SemanticRolesOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<CategoriesOptions>,
}

impl Features {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn concepts(mut self, concepts: ConceptsOptions) -> Self {
        self.concepts = Some(concepts);
        self
    }

    pub fn emotion(mut self, emotion: EmotionOptions) -> Self {
        self.emotion = Some(emotion);
        self
    }

    pub fn entities(mut self, entities: EntitiesOptions) -> Self {
        self.entities = Some(entities);
        self
    }

    pub fn keywords(mut self, keywords: KeywordsOptions) -> Self {
        self.keywords = Some(keywords);
        self
    }

    pub fn metadata(mut self, metadata: MetadataOptions) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn relations(mut self, relations: RelationsOptions) -> Self {
        self.relations = Some(relations);
        self
    }

    pub fn semantic_roles(mut self, semantic_roles: SemanticRolesOptions) -> Self {
        self.semantic_roles = Some(semantic_roles);
        self
    }

    pub fn sentiment(mut self, sentiment: SentimentOptions) -> Self {
        self.sentiment = Some(sentiment);
        self
    }

    pub fn categories(mut self, categories: CategoriesOptions) -> Self {
        self.categories = Some(categories);
        self
    }

    pub fn requested(&self) -> Vec<FeatureType> {
        let mut requested = vec![];
        if self.concepts.is_some() {
            requested.push(FeatureType::Concepts);
        }
        if self.emotion.is_some() {
            requested.push(FeatureType::Emotion);
        }
        if self.entities.is_some() {
            requested.push(FeatureType::Entities);
        }
        if self.keywords.is_some() {
            requested.push(FeatureType::Keywords);
        }
        if self.metadata.is_some() {
            requested.push(FeatureType::Metadata);
        }
        if self.relations.is_some() {
            requested.push(FeatureType::Relations);
        }
        if self.semantic_roles.is_some() {
            requested.push(FeatureType::SemanticRoles);
        }
        if self.sentiment.is_some() {
            requested.push(FeatureType::Sentiment);
        }
        if self.categories.is_some() {
            requested.push(FeatureType::Categories);
        }

        requested
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConceptsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl ConceptsOptions {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<String>>,
}

impl EmotionOptions {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn document(mut self, document: bool) -> Self {
        self.document = Some(document);
        self
    }

    pub fn targets(mut self, targets: Vec<String>) -> Self {
        self.targets = Some(targets);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EntitiesOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mentions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<bool>,
}

impl EntitiesOptions {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn mentions(mut self, mentions: bool) -> Self {
        self.mentions = Some(mentions);
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn sentiment(mut self, sentiment: bool) -> Self {
        self.sentiment = Some(sentiment);
        self
    }

    pub fn emotion(mut self, emotion: bool) -> Self {
        self.emotion = Some(emotion);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<bool>,
}

impl KeywordsOptions {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn sentiment(mut self, sentiment: bool) -> Self {
        self.sentiment = Some(sentiment);
        self
    }

    pub fn emotion(mut self, emotion: bool) -> Self {
        self.emotion = Some(emotion);
        self
    }
}

// Requested by key presence alone; the service defines no options for it yet.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataOptions {}

impl MetadataOptions {
    pub fn new() -> Self {
        Default::default()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl RelationsOptions {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SemanticRolesOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<bool>,
}

impl SemanticRolesOptions {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn keywords(mut self, keywords: bool) -> Self {
        self.keywords = Some(keywords);
        self
    }

    pub fn entities(mut self, entities: bool) -> Self {
        self.entities = Some(entities);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<String>>,
}

impl SentimentOptions {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn document(mut self, document: bool) -> Self {
        self.document = Some(document);
        self
    }

    pub fn targets(mut self, targets: Vec<String>) -> Self {
        self.targets = Some(targets);
        self
    }
}

// Requested by key presence alone; the service defines no options for it yet.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoriesOptions {}

impl CategoriesOptions {
    pub fn new() -> Self {
        Default::default()
    }
}

#[cfg(test)]
mod tests {
    use crate::feature_type::FeatureType;
    use crate::features::{EntitiesOptions, Features, SemanticRolesOptions, SentimentOptions};

    #[test]
    fn test_requested_reports_present_features() {
        let features = Features::new()
            .entities(EntitiesOptions::new().limit(5))
            .semantic_roles(SemanticRolesOptions::new())
            .sentiment(SentimentOptions::new().document(true));

        assert_eq!(
            vec![
                FeatureType::Entities,
                FeatureType::SemanticRoles,
                FeatureType::Sentiment,
            ],
            features.requested()
        );
        assert!(Features::new().requested().is_empty());
    }

    #[test]
    fn test_unset_features_are_omitted_from_the_body() {
        let features = Features::new().semantic_roles(SemanticRolesOptions::new().limit(10));

        let body = serde_json::to_value(&features).unwrap();
        let object = body.as_object().unwrap();

        assert_eq!(1, object.len());
        assert_eq!(10, object["semantic_roles"]["limit"]);
    }
}
