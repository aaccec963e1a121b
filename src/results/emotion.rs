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

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<DocumentEmotionResults>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<TargetedEmotionResults>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentEmotionResults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<EmotionScores>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetedEmotionResults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<EmotionScores>,
}

/// Per-emotion likelihoods in [0, 1]; higher means the content is more
/// likely to convey that emotion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionScores {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anger: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disgust: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fear: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sadness: Option<f64>,
}
