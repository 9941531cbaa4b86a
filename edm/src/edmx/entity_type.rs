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

use crate::edmx::property::DeNavigationProperty;
use crate::edmx::Annotation;
use crate::edmx::LocalTypeName;
use crate::edmx::NavigationProperty;
use crate::edmx::QualifiedTypeName;
use crate::edmx::SimpleIdentifier;
use crate::edmx::StructuralProperty;
use crate::edmx::ValidateError;
use serde::Deserialize;

/// 8.1 Element edm:EntityType
#[derive(Debug, Deserialize)]
pub struct DeEntityType {
    /// 8.1.1 Attribute Name
    #[serde(rename = "@Name")]
    pub name: LocalTypeName,
    /// 8.1.2 Attribute `BaseType`
    #[serde(rename = "@BaseType")]
    pub base_type: Option<QualifiedTypeName>,
    /// 8.1.3 Attribute `Abstract`
    #[serde(rename = "@Abstract")]
    pub r#abstract: Option<bool>,
    /// 8.1.4 Attribute `OpenType`
    #[serde(rename = "@OpenType")]
    pub open_type: Option<bool>,
    /// 8.1.5 Attribute `HasStream`
    #[serde(rename = "@HasStream")]
    pub has_stream: Option<bool>,
    /// Items of edm:EntityType
    #[serde(rename = "$value", default)]
    pub items: Vec<DeEntityTypeItem>,
}

/// 8.2 Element edm:Key
#[derive(Debug, Deserialize)]
pub struct Key {
    /// Items of edm:Key
    #[serde(rename = "PropertyRef", default)]
    pub property_refs: Vec<PropertyRef>,
}

/// 8.3 Element edm:PropertyRef
#[derive(Debug, Deserialize)]
pub struct PropertyRef {
    /// 8.3.1 Attribute Name
    ///
    /// Path to the primitive property, possibly through complex
    /// properties (`Address/Street`).
    #[serde(rename = "@Name")]
    pub name: String,
    /// 8.3.2 Attribute Alias
    #[serde(rename = "@Alias")]
    pub alias: Option<SimpleIdentifier>,
}

impl PropertyRef {
    /// Name of the key in URLs: the alias if defined, otherwise the
    /// property path.
    #[must_use]
    pub fn key_name(&self) -> &str {
        self.alias
            .as_ref()
            .map_or(self.name.as_str(), |alias| alias.inner().as_str())
    }
}

/// Items of edm:EntityType
#[derive(Debug, Deserialize)]
pub enum DeEntityTypeItem {
    Key(Key),
    #[serde(rename = "Property")]
    StructuralProperty(StructuralProperty),
    NavigationProperty(DeNavigationProperty),
    Annotation(Annotation),
}

/// Validated edm:EntityType
#[derive(Debug)]
pub struct EntityType {
    pub name: LocalTypeName,
    pub base_type: Option<QualifiedTypeName>,
    pub is_abstract: bool,
    pub open_type: bool,
    /// Entity type is a media entity type.
    pub has_stream: bool,
    pub key: Option<Key>,
    pub properties: Vec<StructuralProperty>,
    pub navigation_properties: Vec<NavigationProperty>,
    pub annotations: Vec<Annotation>,
}

impl DeEntityType {
    /// # Errors
    ///
    /// - `ValidateError::EntityType` if error occured. Internal `ValidateError` contains details.
    pub fn validate(self) -> Result<EntityType, ValidateError> {
        let (keys, properties, navigation_properties, annotations) = self.items.into_iter().fold(
            (Vec::new(), Vec::new(), Vec::new(), Vec::new()),
            |(mut keys, mut ps, mut navs, mut anns), v| {
                match v {
                    DeEntityTypeItem::Key(k) => keys.push(k),
                    DeEntityTypeItem::StructuralProperty(p) => ps.push(p),
                    DeEntityTypeItem::NavigationProperty(p) => navs.push(p.validate()),
                    DeEntityTypeItem::Annotation(a) => anns.push(a),
                }
                (keys, ps, navs, anns)
            },
        );
        if keys.len() > 1 {
            return Err(ValidateError::EntityType(
                self.name,
                Box::new(ValidateError::TooManyKeys),
            ));
        }
        let name = self.name;
        let navigation_properties = navigation_properties
            .into_iter()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ValidateError::EntityType(name.clone(), Box::new(e)))?;
        Ok(EntityType {
            name,
            base_type: self.base_type,
            is_abstract: self.r#abstract.unwrap_or(false),
            open_type: self.open_type.unwrap_or(false),
            has_stream: self.has_stream.unwrap_or(false),
            key: keys.into_iter().next(),
            properties,
            navigation_properties,
            annotations,
        })
    }
}

#[cfg(test)]
mod test {
    use crate::edmx::Edmx;
    use crate::edmx::ValidateError;

    #[test]
    fn test_entity_type() -> Result<(), ValidateError> {
        let data = r#"
           <edmx:Edmx Version="4.0">
             <edmx:DataServices>
               <Schema Namespace="NS">
                 <EntityType Name="Person" HasStream="true">
                   <Key>
                     <PropertyRef Name="FirstName"/>
                     <PropertyRef Name="LastName"/>
                   </Key>
                   <Property Name="FirstName" Type="Edm.String" Nullable="false"/>
                   <NavigationProperty Name="Friends" Type="Collection(NS.Person)">
                     <Annotation Term="Core.Description" String="Friends of the person"/>
                   </NavigationProperty>
                   <Property Name="LastName" Type="Edm.String" Nullable="false"/>
                   <NavigationProperty Name="Photo" Type="NS.Photo" ContainsTarget="true"/>
                 </EntityType>
               </Schema>
             </edmx:DataServices>
           </edmx:Edmx>"#;
        let edmx = Edmx::parse(data)?;
        let et = &edmx.data_services.schemas[0].entity_types[0];
        assert!(et.has_stream);
        assert!(!et.is_abstract);
        let key = et.key.as_ref().expect("key");
        assert_eq!(
            key.property_refs.iter().map(|p| p.key_name()).collect::<Vec<_>>(),
            vec!["FirstName", "LastName"]
        );
        assert_eq!(et.properties.len(), 2);
        assert!(!et.properties[0].is_nullable());
        assert_eq!(et.navigation_properties.len(), 2);
        assert!(et.navigation_properties[0].is_collection());
        assert_eq!(et.navigation_properties[0].annotations.len(), 1);
        assert!(et.navigation_properties[1].contains_target);
        Ok(())
    }

    #[test]
    fn test_too_many_keys() {
        let data = r#"
           <edmx:Edmx Version="4.0">
             <edmx:DataServices>
               <Schema Namespace="NS">
                 <EntityType Name="Person">
                   <Key><PropertyRef Name="Id"/></Key>
                   <Key><PropertyRef Name="Id"/></Key>
                   <Property Name="Id" Type="Edm.Int32"/>
                 </EntityType>
               </Schema>
             </edmx:DataServices>
           </edmx:Edmx>"#;
        assert!(matches!(
            Edmx::parse(data),
            Err(ValidateError::Schema(_, e)) if matches!(*e, ValidateError::EntityType(_, _))
        ));
    }
}
