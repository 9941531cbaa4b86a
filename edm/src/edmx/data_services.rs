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

use crate::edmx::schema::DeSchema;
use crate::edmx::Schema;
use crate::edmx::ValidateError;
use serde::Deserialize;
use std::collections::HashSet;

/// 3.2 Element edmx:DataServices
#[derive(Debug, Deserialize)]
pub struct DeDataServices {
    /// edm:Schema elements which define the schemas exposed by the
    /// `OData` service
    #[serde(rename = "Schema", default)]
    pub schemas: Vec<DeSchema>,
}

/// Validated `DataServices`. Contains at least one schema and
/// namespaces and aliases of the schemas are unique in the document.
#[derive(Debug)]
pub struct DataServices {
    pub schemas: Vec<Schema>,
}

impl DeDataServices {
    /// # Errors
    ///
    /// Validation error if there are no schemas, any of schemas is
    /// invalid or a schema namespace or alias is used twice.
    pub fn validate(self) -> Result<DataServices, ValidateError> {
        if self.schemas.is_empty() {
            return Err(ValidateError::NoSchemas);
        }
        let schemas = self
            .schemas
            .into_iter()
            .map(DeSchema::validate)
            .collect::<Result<Vec<_>, _>>()?;
        let mut names = HashSet::new();
        for schema in &schemas {
            let namespace = schema.namespace.to_string();
            let alias = schema.alias.as_ref().map(ToString::to_string);
            for name in std::iter::once(namespace).chain(alias) {
                if !names.insert(name.clone()) {
                    return Err(ValidateError::DuplicateSchemaName(name));
                }
            }
        }
        Ok(DataServices { schemas })
    }
}

#[cfg(test)]
mod test {
    use crate::edmx::Edmx;
    use crate::edmx::ValidateError;

    fn parse(schemas: &str) -> Result<Edmx, ValidateError> {
        Edmx::parse(&format!(
            r#"<edmx:Edmx Version="4.0">
                 <edmx:DataServices>{schemas}</edmx:DataServices>
               </edmx:Edmx>"#
        ))
    }

    #[test]
    fn test_no_schemas() {
        assert!(matches!(parse(""), Err(ValidateError::NoSchemas)));
    }

    #[test]
    fn test_duplicate_names() {
        assert!(matches!(
            parse(r#"<Schema Namespace="NS"/><Schema Namespace="NS"/>"#),
            Err(ValidateError::DuplicateSchemaName(name)) if name == "NS"
        ));
        assert!(matches!(
            parse(
                r#"<Schema Namespace="NS" Alias="Self"/>
                   <Schema Namespace="Other" Alias="Self"/>"#
            ),
            Err(ValidateError::DuplicateSchemaName(name)) if name == "Self"
        ));
        let edmx = parse(r#"<Schema Namespace="NS" Alias="Self"/><Schema Namespace="Other"/>"#)
            .unwrap();
        assert_eq!(edmx.data_services.schemas.len(), 2);
    }
}
