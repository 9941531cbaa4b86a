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

//! Serialization of generated documents.

use crate::Error;
use clap::ValueEnum;
use openapiv3::OpenAPI;
use std::fs::write as write_file;
use std::path::Path;

/// Output format of the document.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Json,
    Yaml,
}

/// Pretty-printed JSON of the document.
///
/// # Errors
///
/// Returns `Error::Json` if the document cannot be serialized.
pub fn to_json(document: &OpenAPI) -> Result<String, Error> {
    serde_json::to_string_pretty(document).map_err(Error::Json)
}

/// YAML of the document.
///
/// # Errors
///
/// Returns `Error::Yaml` if the document cannot be serialized.
pub fn to_yaml(document: &OpenAPI) -> Result<String, Error> {
    serde_yaml::to_string(document).map_err(Error::Yaml)
}

/// Serialize the document and write it to the file.
///
/// # Errors
///
/// Returns an error if the document cannot be serialized or the file
/// cannot be written.
pub fn write(document: &OpenAPI, format: Format, output: &Path) -> Result<(), Error> {
    let content = match format {
        Format::Json => to_json(document)?,
        Format::Yaml => to_yaml(document)?,
    };
    write_file(output, content).map_err(|err| Error::WriteOutput(output.into(), err))
}

#[cfg(test)]
mod test {
    use super::*;
    use openapiv3::Info;

    fn document() -> OpenAPI {
        OpenAPI {
            openapi: "3.0.1".into(),
            info: Info {
                title: "OData Service".into(),
                version: "1.0.0".into(),
                ..Info::default()
            },
            ..OpenAPI::default()
        }
    }

    #[test]
    fn test_json() {
        let json = to_json(&document()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["openapi"], "3.0.1");
        assert_eq!(value["info"]["title"], "OData Service");
    }

    #[test]
    fn test_yaml() {
        let yaml = to_yaml(&document()).unwrap();
        assert!(yaml.contains("openapi: 3.0.1"));
        assert!(yaml.contains("title: OData Service"));
    }
}
