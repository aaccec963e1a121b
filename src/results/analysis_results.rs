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

use crate::error;
use crate::results::categories::CategoriesResult;
use crate::results::concepts::ConceptsResult;
use crate::results::emotion::EmotionResult;
use crate::results::entities::EntitiesResult;
use crate::results::keywords::KeywordsResult;
use crate::results::metadata::MetadataResult;
use crate::results::relations::RelationsResult;
use crate::results::semantic_roles::SemanticRolesResult;
use crate::results::sentiment::SentimentResult;
use crate::results::usage::Usage;
use crate::transcoding;
use serde::{Deserialize, Serialize};

/// Results of an analyze call, organized by feature. A field is populated
/// only when the corresponding feature was requested; absence is never an
/// error.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analyzed_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retrieved_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concepts: Option<Vec<ConceptsResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<EntitiesResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<KeywordsResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<CategoriesResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<EmotionResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MetadataResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relations: Option<Vec<RelationsResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semantic_roles: Option<Vec<SemanticRolesResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentResult>,
}

impl AnalysisResults {
    pub fn from_json(bytes: &[u8]) -> error::Result<AnalysisResults> {
        transcoding::decode(bytes)
    }
}
