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

//! Conversion settings.
//!
//! Settings can be read from a TOML file. Every option is optional in
//! the file and falls back to its default:
//!
//! ```toml
//! service_root = "https://services.example.com/odata"
//! enable_key_as_segment = true
//! tag_depth = 2
//! ```

use serde::Deserialize;
use std::error::Error as StdError;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::fs::File;
use std::io::Error as IoError;
use std::io::Read as _;
use std::path::Path;
use toml::de::Error as TomlError;

/// Default service root.
pub const DEFAULT_SERVICE_ROOT: &str = "http://localhost";

/// Default version of the described API.
pub const DEFAULT_VERSION: &str = "1.0.0";

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Settings {
    /// URL of the service. Used as the only server of the document.
    pub service_root: String,
    /// Title of the document. Derived from the entity container if
    /// not set.
    pub title: Option<String>,
    /// Version of the described API.
    pub version: String,
    /// Render single keys as a path segment (`/Customers/{ID}`)
    /// instead of parentheses (`/Customers({ID})`).
    pub enable_key_as_segment: bool,
    /// Render operations without namespace.
    pub enable_unqualified_call: bool,
    /// Render type casts and operations with the schema alias.
    pub use_namespace_alias: bool,
    /// Wrap string key and function parameters with single quotes.
    pub add_single_quotes_for_string_parameters: bool,
    /// Prefix single key placeholder with the entity type name
    /// (`{Customer-ID}`).
    pub prefix_entity_type_name_before_key: bool,
    /// Render functions annotated with `Core.IsURLEscapeFunction` in
    /// the escaped form (`:/{path}`).
    pub enable_uri_escape_function_call: bool,
    pub enable_navigation_property_path: bool,
    /// Generate paths of bound operations.
    pub enable_operation_path: bool,
    /// Generate paths of action and function imports.
    pub enable_operation_import_path: bool,
    pub enable_dollar_count_path: bool,
    /// Generate type cast segments to derived types.
    pub enable_odata_type_cast: bool,
    /// Cast only to derived types listed by
    /// `Validation.DerivedTypeConstraint`.
    pub require_derived_types_constraint_for_odata_type_cast_segments: bool,
    /// Bind operations of derived types only if the type is listed by
    /// `Validation.DerivedTypeConstraint`.
    pub require_derived_types_constraint_for_bound_operations: bool,
    /// Append operations bound to derived types after a type cast
    /// segment.
    pub append_bound_operations_on_derived_type_cast_segments: bool,
    /// Generate paths of navigation properties declared by derived
    /// types after a type cast segment.
    pub generate_derived_types_properties: bool,
    /// Generate paths of complex properties only if they are
    /// annotated with read, insert or update restrictions.
    pub require_restriction_annotations_to_generate_complex_property_paths: bool,
    /// Generate paths addressing entities by `Core.AlternateKeys`.
    pub add_alternate_key_paths: bool,
    /// Add `@odata.nextLink` to collection responses.
    pub enable_pagination: bool,
    /// Add `@odata.count` to collection responses.
    pub enable_count: bool,
    pub enable_operation_id: bool,
    /// Maximum number of components of a tag name.
    pub tag_depth: usize,
    /// Prefix of all paths (`/api/v1`).
    pub path_prefix: Option<String>,
    /// Represent `Edm.Int64` and `Edm.Decimal` as strings as well as
    /// numbers.
    pub ieee754_compatible: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            service_root: DEFAULT_SERVICE_ROOT.into(),
            title: None,
            version: DEFAULT_VERSION.into(),
            enable_key_as_segment: false,
            enable_unqualified_call: false,
            use_namespace_alias: false,
            add_single_quotes_for_string_parameters: false,
            prefix_entity_type_name_before_key: false,
            enable_uri_escape_function_call: false,
            enable_navigation_property_path: true,
            enable_operation_path: true,
            enable_operation_import_path: true,
            enable_dollar_count_path: true,
            enable_odata_type_cast: true,
            require_derived_types_constraint_for_odata_type_cast_segments: true,
            require_derived_types_constraint_for_bound_operations: false,
            append_bound_operations_on_derived_type_cast_segments: false,
            generate_derived_types_properties: true,
            require_restriction_annotations_to_generate_complex_property_paths: true,
            add_alternate_key_paths: false,
            enable_pagination: false,
            enable_count: false,
            enable_operation_id: true,
            tag_depth: 4,
            path_prefix: None,
            ieee754_compatible: false,
        }
    }
}

impl Settings {
    /// Read settings from TOML file.
    ///
    /// # Errors
    ///
    /// - `Error::Io` if failed to read file
    /// - `Error::Toml` if content is not valid settings TOML.
    pub fn read(fname: &Path) -> Result<Self, Error> {
        let mut file = File::open(fname).map_err(Error::Io)?;
        let mut content = String::new();
        file.read_to_string(&mut content).map_err(Error::Io)?;
        toml::from_str(&content).map_err(Error::Toml)
    }
}

#[derive(Debug)]
pub enum Error {
    Io(IoError),
    Toml(TomlError),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Io(err) => write!(f, "input/output error: {err}"),
            Self::Toml(err) => write!(f, "settings file format error: {err}"),
        }
    }
}

impl StdError for Error {}
