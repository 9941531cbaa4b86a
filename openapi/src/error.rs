// SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::edm::model::Error as ModelError;
use crate::edm::ValidateError;
use crate::path::SegmentError;
use crate::settings::Error as SettingsError;
use serde_json::Error as JsonError;
use serde_yaml::Error as YamlError;
use std::error::Error as StdError;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::io::Error as IoError;
use std::path::PathBuf;

/// Conversion errors.
#[derive(Debug)]
pub enum Error {
    /// Model query failed.
    Model(ModelError),
    /// Segment cannot be built.
    Segment(SegmentError),
    /// Attempt to remove a segment from an empty path.
    EmptyPath,
    /// Model construct without OpenAPI representation.
    Unsupported(String),
    /// Error in the context of the path.
    Path(String, Box<Error>),
    /// Error in the context of the schema.
    Schema(String, Box<Error>),
    AtLeastOneCsdlFileNeeded,
    Io(String, IoError),
    Edmx(String, ValidateError),
    Settings(SettingsError),
    Json(JsonError),
    Yaml(YamlError),
    WriteOutput(PathBuf, IoError),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Model(err) => write!(f, "model error: {err}"),
            Self::Segment(err) => write!(f, "invalid segment: {err}"),
            Self::EmptyPath => "path is empty".fmt(f),
            Self::Unsupported(what) => write!(f, "not supported: {what}"),
            Self::Path(path, err) => write!(f, "path {path}: {err}"),
            Self::Schema(name, err) => write!(f, "schema {name}: {err}"),
            Self::AtLeastOneCsdlFileNeeded => "at least one CSDL file is needed".fmt(f),
            Self::Io(fname, err) => write!(f, "input/output error: file: {fname}: {err}"),
            Self::Edmx(fname, err) => {
                write!(f, "EDMX format validation error: file: {fname}: {err}")
            }
            Self::Settings(err) => write!(f, "settings error: {err}"),
            Self::Json(err) => write!(f, "JSON serialization error: {err}"),
            Self::Yaml(err) => write!(f, "YAML serialization error: {err}"),
            Self::WriteOutput(fname, err) => {
                write!(f, "failed write output file: {}: {err}", fname.display())
            }
        }
    }
}

impl StdError for Error {}

impl From<ModelError> for Error {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::UnsupportedPrimitive(name) => {
                Self::Unsupported(format!("primitive type {name}"))
            }
            err => Self::Model(err),
        }
    }
}

impl From<SegmentError> for Error {
    fn from(err: SegmentError) -> Self {
        Self::Segment(err)
    }
}
