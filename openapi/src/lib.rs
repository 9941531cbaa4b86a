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

//! Converter of OData Entity Data Models to OpenAPI documents.
//!
//! The heart of the crate is the path provider: it walks the
//! navigation graph of the model (entity sets, singletons, navigation
//! properties, type hierarchies, bound and unbound operations,
//! containment and streams) and produces the de-duplicated set of URL
//! path templates. Vocabulary annotations (capabilities, core and
//! validation terms) gate every step of the walk.
//!
//! The generator turns each path into an OpenAPI path item with the
//! operations legal for it and assembles the final document.
//!
//! ```no_run
//! use odata_openapi::edm::Edmx;
//! use odata_openapi::edm::Model;
//! use odata_openapi::Settings;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let docs = vec![Edmx::parse(&std::fs::read_to_string("service.xml")?)?];
//! let model = Model::build(&docs)?;
//! let document = odata_openapi::convert(&model, &Settings::default())?;
//! println!("{}", odata_openapi::writer::to_json(&document)?);
//! # Ok(())
//! # }
//! ```

/// Command-line interface.
pub mod commands;

/// Conversion errors.
pub mod error;

/// OpenAPI document assembly.
pub mod generator;

/// Path segments, paths and the path provider.
pub mod path;

/// Conversion settings.
pub mod settings;

/// Typed access to vocabulary annotations.
pub mod vocabulary;

/// Document serialization.
pub mod writer;

use openapiv3::OpenAPI;

#[doc(inline)]
pub use error::Error;
#[doc(inline)]
pub use odata_openapi_edm as edm;
#[doc(inline)]
pub use path::ODataPath;
#[doc(inline)]
pub use path::PathProvider;
#[doc(inline)]
pub use settings::Settings;

/// Convert the model into an OpenAPI document.
///
/// # Errors
///
/// Returns an error if the model contains a construct that cannot be
/// expressed in OpenAPI or a path cannot be built.
pub fn convert(model: &edm::Model<'_>, settings: &Settings) -> Result<OpenAPI, Error> {
    let paths = PathProvider::new(model, settings).paths()?;
    generator::Document::new(model, settings).generate(&paths)
}
