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

use std::error::Error as StdError;
use std::fmt::{Display, Formatter};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Error {
    kind: Box<ErrorKind>,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind) -> Self {
        Self {
            kind: Box::new(kind),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    // We don't use a From impl as it'd be a blanket coverage and we want to
    // distinguish encoding from decoding.
    pub(crate) fn encoding_failure_from_serde(e: serde_json::Error) -> Self {
        Self::new(ErrorKind::EncodingFailure(format!("encoding failed: {e}")))
    }

    // We don't use a From impl as it'd be a blanket coverage and we want to
    // distinguish encoding from decoding.
    pub(crate) fn decoding_failure_from_serde(e: serde_json::Error) -> Self {
        Self::new(ErrorKind::DecodingFailure(format!("decoding failed: {e}")))
    }

    pub(crate) fn invalid_argument(arg: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument(InvalidArgumentErrorKind {
            msg: msg.into(),
            arg: Some(arg.into()),
        }))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl StdError for Error {}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    OtherFailure(String),
    InvalidArgument(InvalidArgumentErrorKind),
    EncodingFailure(String),
    DecodingFailure(String),
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::OtherFailure(msg) => write!(f, "{msg}"),
            ErrorKind::InvalidArgument(invalid_arg_kind) => {
                let arg = &invalid_arg_kind.arg;
                let msg = &invalid_arg_kind.msg;

                if let Some(arg) = arg {
                    write!(f, "invalid argument for {arg}: {msg}")
                } else {
                    write!(f, "invalid argument: {msg}")
                }
            }
            ErrorKind::EncodingFailure(msg) => write!(f, "encoding failure: {msg}"),
            ErrorKind::DecodingFailure(msg) => write!(f, "decoding failure: {msg}"),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct InvalidArgumentErrorKind {
    pub(crate) msg: String,
    pub arg: Option<String>,
}
