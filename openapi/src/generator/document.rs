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

//! OpenAPI document of a model.

use crate::edm::Model;
use crate::generator::operations::OperationGenerator;
use crate::generator::parameters;
use crate::generator::responses;
use crate::generator::schema::SchemaGenerator;
use crate::path::ODataPath;
use crate::settings::Settings;
use crate::Error;
use indexmap::IndexMap;
use openapiv3::Components;
use openapiv3::Info;
use openapiv3::OpenAPI;
use openapiv3::Paths;
use openapiv3::ReferenceOr;
use openapiv3::Server;
use tracing::debug;
use tracing::info;

/// Version of the OpenAPI specification of generated documents.
pub const OPENAPI_VERSION: &str = "3.0.1";

pub struct Document<'m, 'a> {
    model: &'m Model<'a>,
    settings: &'m Settings,
}

impl<'m, 'a> Document<'m, 'a> {
    #[must_use]
    pub const fn new(model: &'m Model<'a>, settings: &'m Settings) -> Self {
        Self { model, settings }
    }

    /// Generate the document for the paths.
    ///
    /// # Errors
    ///
    /// Returns an error if operations of a path or a schema of a type
    /// cannot be generated.
    pub fn generate(&self, paths: &[ODataPath<'a>]) -> Result<OpenAPI, Error> {
        let mut operations = OperationGenerator::new(self.model, self.settings);
        let mut items = IndexMap::new();
        for path in paths {
            let rendered = path.render(self.settings);
            debug!(path = %rendered.name, "generating path item");
            let item = operations
                .path_item(path, &rendered)
                .map_err(|err| Error::Path(rendered.name.clone(), Box::new(err)))?;
            items.insert(rendered.name, ReferenceOr::Item(item));
        }

        let mut schemas = SchemaGenerator::new(self.model, self.settings).components()?;
        schemas.extend(operations.collection_schemas());

        info!(paths = items.len(), schemas = schemas.len(), "document generated");
        Ok(OpenAPI {
            openapi: OPENAPI_VERSION.into(),
            info: self.info(),
            servers: vec![Server {
                url: self.settings.service_root.clone(),
                ..Server::default()
            }],
            paths: Paths {
                paths: items,
                ..Paths::default()
            },
            components: Some(Components {
                schemas,
                responses: responses::components(),
                parameters: parameters::components(),
                request_bodies: responses::request_body_components(),
                ..Components::default()
            }),
            tags: operations.tags(),
            ..OpenAPI::default()
        })
    }

    fn info(&self) -> Info {
        let title = self.settings.title.clone().unwrap_or_else(|| {
            self.model.entity_container().map_or_else(
                || "OData Service".into(),
                |container| format!("OData Service for namespace {}", container.schema.namespace),
            )
        });
        Info {
            title,
            description: Some(format!(
                "This OData service is located at {}",
                self.settings.service_root
            )),
            version: self.settings.version.clone(),
            ..Info::default()
        }
    }
}
