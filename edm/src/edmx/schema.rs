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

use crate::edmx::complex_type::DeComplexType;
use crate::edmx::entity_container::DeEntityContainer;
use crate::edmx::entity_type::DeEntityType;
use crate::edmx::enum_type::DeEnumType;
use crate::edmx::operation::DeAction;
use crate::edmx::operation::DeFunction;
use crate::edmx::Annotation;
use crate::edmx::Annotations;
use crate::edmx::ComplexType;
use crate::edmx::EntityContainer;
use crate::edmx::EntityType;
use crate::edmx::EnumType;
use crate::edmx::LocalTypeName;
use crate::edmx::Namespace;
use crate::edmx::Operation;
use crate::edmx::SimpleIdentifier;
use crate::edmx::TypeDefinition;
use crate::edmx::ValidateError;
use serde::Deserialize;

/// 5.1 Element edm:Schema
#[derive(Debug, Deserialize)]
pub struct DeSchema {
    /// 5.1.1 Attribute `Namespace`
    #[serde(rename = "@Namespace")]
    pub namespace: Namespace,
    /// 5.1.2 Attribute `Alias`
    #[serde(rename = "@Alias")]
    pub alias: Option<SimpleIdentifier>,
    /// Items of edm:Schema
    #[serde(rename = "$value", default)]
    pub items: Vec<DeSchemaItem>,
}

/// Items of edm:Schema
#[derive(Debug, Deserialize)]
pub enum DeSchemaItem {
    EntityType(DeEntityType),
    ComplexType(DeComplexType),
    EnumType(DeEnumType),
    TypeDefinition(TypeDefinition),
    Action(DeAction),
    Function(DeFunction),
    EntityContainer(DeEntityContainer),
    Term(Term),
    Annotations(Annotations),
    Annotation(Annotation),
}

/// 14.1 Element edm:Term
#[derive(Debug, Deserialize)]
pub struct Term {
    /// 14.1.1 Attribute `Name`
    #[serde(rename = "@Name")]
    pub name: LocalTypeName,
    /// 14.1.2 Attribute `Type`
    #[serde(rename = "@Type")]
    pub ttype: Option<String>,
    /// 14.1.4 Attribute `DefaultValue`
    #[serde(rename = "@DefaultValue")]
    pub default_value: Option<String>,
    /// 14.1.5 Attribute `AppliesTo`
    #[serde(rename = "@AppliesTo")]
    pub applies_to: Option<String>,
    #[serde(rename = "Annotation", default)]
    pub annotations: Vec<Annotation>,
}

/// Validated edm:Schema. Elements keep their declaration order.
#[derive(Debug)]
pub struct Schema {
    pub namespace: Namespace,
    pub alias: Option<SimpleIdentifier>,
    pub entity_types: Vec<EntityType>,
    pub complex_types: Vec<ComplexType>,
    pub enum_types: Vec<EnumType>,
    pub type_definitions: Vec<TypeDefinition>,
    pub operations: Vec<Operation>,
    pub entity_container: Option<EntityContainer>,
    pub terms: Vec<Term>,
    /// Out-of-line annotations (edm:Annotations).
    pub out_of_line_annotations: Vec<Annotations>,
    /// Annotations of the schema itself.
    pub annotations: Vec<Annotation>,
}

impl DeSchema {
    /// # Errors
    ///
    /// Returns error if any of items failed to validate.
    pub fn validate(self) -> Result<Schema, ValidateError> {
        let namespace = self.namespace;
        let mut schema = Schema {
            namespace: namespace.clone(),
            alias: self.alias,
            entity_types: Vec::new(),
            complex_types: Vec::new(),
            enum_types: Vec::new(),
            type_definitions: Vec::new(),
            operations: Vec::new(),
            entity_container: None,
            terms: Vec::new(),
            out_of_line_annotations: Vec::new(),
            annotations: Vec::new(),
        };
        let mut containers = Vec::new();
        self.items
            .into_iter()
            .try_for_each(|v| {
                match v {
                    DeSchemaItem::EntityType(v) => schema.entity_types.push(v.validate()?),
                    DeSchemaItem::ComplexType(v) => schema.complex_types.push(v.validate()?),
                    DeSchemaItem::EnumType(v) => schema.enum_types.push(v.validate()),
                    DeSchemaItem::TypeDefinition(v) => schema.type_definitions.push(v),
                    DeSchemaItem::Action(v) => schema.operations.push(v.validate()?),
                    DeSchemaItem::Function(v) => schema.operations.push(v.validate()?),
                    DeSchemaItem::EntityContainer(v) => containers.push(v.validate()),
                    DeSchemaItem::Term(v) => schema.terms.push(v),
                    DeSchemaItem::Annotations(v) => schema.out_of_line_annotations.push(v),
                    DeSchemaItem::Annotation(v) => schema.annotations.push(v),
                }
                Ok::<_, ValidateError>(())
            })
            .map_err(|e| ValidateError::Schema(namespace.clone(), Box::new(e)))?;
        if containers.len() > 1 {
            return Err(ValidateError::Schema(
                namespace,
                Box::new(ValidateError::TooManyEntityContainers),
            ));
        }
        schema.entity_container = containers.into_iter().next();
        Ok(schema)
    }
}

#[cfg(test)]
mod test {
    use crate::edmx::Edmx;
    use crate::edmx::ValidateError;

    #[test]
    fn test_schema_items() -> Result<(), ValidateError> {
        let data = r#"
           <edmx:Edmx Version="4.0">
             <edmx:DataServices>
               <Schema Namespace="Org.OData.Core.V1" Alias="Core">
                  <Term Name="Computed" Type="Core.Tag" DefaultValue="true" AppliesTo="Property">
                    <Annotation Term="Core.Description" String="A value for this property is generated on both insert and update"/>
                  </Term>
                  <TypeDefinition Name="Tag" UnderlyingType="Edm.Boolean"/>
               </Schema>
             </edmx:DataServices>
           </edmx:Edmx>"#;
        let edmx = Edmx::parse(data)?;
        let schema = &edmx.data_services.schemas[0];
        assert_eq!(schema.namespace.to_string(), "Org.OData.Core.V1");
        assert_eq!(schema.terms.len(), 1);
        let term = &schema.terms[0];
        assert_eq!(term.name.inner().inner(), "Computed");
        assert_eq!(term.ttype.as_deref(), Some("Core.Tag"));
        assert_eq!(term.default_value.as_deref(), Some("true"));
        assert_eq!(term.applies_to.as_deref(), Some("Property"));
        assert_eq!(term.annotations.len(), 1);
        assert_eq!(schema.type_definitions.len(), 1);
        Ok(())
    }

    #[test]
    fn test_too_many_containers() {
        let data = r#"
           <edmx:Edmx Version="4.0">
             <edmx:DataServices>
               <Schema Namespace="NS">
                  <EntityContainer Name="A"/>
                  <EntityContainer Name="B"/>
               </Schema>
             </edmx:DataServices>
           </edmx:Edmx>"#;
        assert!(matches!(
            Edmx::parse(data),
            Err(ValidateError::Schema(_, e)) if matches!(*e, ValidateError::TooManyEntityContainers)
        ));
    }
}
