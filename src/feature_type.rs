/*
 *
 *  * Copyright (c) 2025 The nlu Contributors.
 *  *
 *  * Licensed under the Apache License, Version 2.0 (the "License");
 *  * you may not use this file except in compliance with the License.
 *  * You may obtain a copy of the License at
 *  *
 *  *    http://www.apache.org/licenses/LICENSE-2.0
 *  *
 *  * Unless required by applicable law or agreed to in writing, software
 *  * distributed under the License is distributed on an "AS IS" BASIS,
 *  * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *  * See the License for the specific language governing permissions and
 *  * limitations under the License.
 *
 */

use serde::Serialize;
use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Debug, Hash, Ord, PartialOrd, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureType {
    Concepts,
    Emotion,
    Entities,
    Keywords,
    Metadata,
    Relations,
    SemanticRoles,
    Sentiment,
    Categories,
}

impl Display for FeatureType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let txt = match self {
            FeatureType::Concepts => "concepts",
            FeatureType::Emotion => "emotion",
            FeatureType::Entities => "entities",
            FeatureType::Keywords => "keywords",
            FeatureType::Metadata => "metadata",
            FeatureType::Relations => "relations",
            FeatureType::SemanticRoles => "semantic_roles",
            FeatureType::Sentiment => "sentiment",
            FeatureType::Categories => "categories",
        };

        write!(f, "{txt}")
    }
}

#[cfg(test)]
mod tests {
    use crate::feature_type::FeatureType;

    #[test]
    fn test_display_matches_wire_names() {
        let cases = vec![
            (FeatureType::Concepts, "concepts"),
            (FeatureType::Emotion, "emotion"),
            (FeatureType::Entities, "entities"),
            (FeatureType::Keywords, "keywords"),
            (FeatureType::Metadata, "metadata"),
            (FeatureType::Relations, "relations"),
            (FeatureType::SemanticRoles, "semantic_roles"),
            (FeatureType::Sentiment, "sentiment"),
            (FeatureType::Categories, "categories"),
        ];

        for (feature, expected) in cases {
            assert_eq!(expected, feature.to_string());
            assert_eq!(
                format!("\"{expected}\""),
                serde_json::to_string(&feature).unwrap()
            );
        }
    }
}
