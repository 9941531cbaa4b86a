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

use crate::edmx::Annotation;
use crate::edmx::ContainerElementName;
use crate::edmx::QualifiedTypeName;
use crate::edmx::SimpleIdentifier;
use serde::Deserialize;

/// 13.1 Element edm:EntityContainer
#[derive(Debug, Deserialize)]
pub struct DeEntityContainer {
    /// 13.1.1 Attribute `Name`
    #[serde(rename = "@Name")]
    pub name: SimpleIdentifier,
    /// 13.1.2 Attribute `Extends`
    #[serde(rename = "@Extends")]
    pub extends: Option<QualifiedTypeName>,
    /// Items of edm:EntityContainer
    #[serde(rename = "$value", default)]
    pub items: Vec<DeEntityContainerItem>,
}

#[derive(Debug, Deserialize)]
pub enum DeEntityContainerItem {
    EntitySet(DeEntitySet),
    Singleton(DeSingleton),
    ActionImport(ActionImport),
    FunctionImport(FunctionImport),
    Annotation(Annotation),
}

/// 13.2 Element edm:EntitySet
#[derive(Debug, Deserialize)]
pub struct DeEntitySet {
    /// 13.2.1 Attribute `Name`
    #[serde(rename = "@Name")]
    pub name: ContainerElementName,
    /// 13.2.2 Attribute `EntityType`
    #[serde(rename = "@EntityType")]
    pub entity_type: QualifiedTypeName,
    /// 13.2.3 Attribute `IncludeInServiceDocument`
    #[serde(rename = "@IncludeInServiceDocument")]
    pub include_in_service_document: Option<bool>,
    #[serde(rename = "$value", default)]
    pub items: Vec<DeNavigationSourceItem>,
}

/// 13.3 Element edm:Singleton
#[derive(Debug, Deserialize)]
pub struct DeSingleton {
    /// 13.3.1 Attribute `Name`
    #[serde(rename = "@Name")]
    pub name: ContainerElementName,
    /// 13.3.2 Attribute `Type`
    #[serde(rename = "@Type")]
    pub stype: QualifiedTypeName,
    #[serde(rename = "$value", default)]
    pub items: Vec<DeNavigationSourceItem>,
}

/// Items of edm:EntitySet and edm:Singleton
#[derive(Debug, Deserialize)]
pub enum DeNavigationSourceItem {
    NavigationPropertyBinding(NavigationPropertyBinding),
    Annotation(Annotation),
}

/// 13.4 Element edm:NavigationPropertyBinding
#[derive(Debug, Deserialize)]
pub struct NavigationPropertyBinding {
    /// 13.4.1 Attribute `Path`
    #[serde(rename = "@Path")]
    pub path: String,
    /// 13.4.2 Attribute `Target`
    #[serde(rename = "@Target")]
    pub target: String,
}

/// 13.5 Element edm:ActionImport
#[derive(Debug, Deserialize)]
pub struct ActionImport {
    /// 13.5.1 Attribute `Name`
    #[serde(rename = "@Name")]
    pub name: ContainerElementName,
    /// 13.5.2 Attribute `Action`
    #[serde(rename = "@Action")]
    pub action: QualifiedTypeName,
    /// 13.5.3 Attribute `EntitySet`
    #[serde(rename = "@EntitySet")]
    pub entity_set: Option<String>,
    #[serde(rename = "Annotation", default)]
    pub annotations: Vec<Annotation>,
}

/// 13.6 Element edm:FunctionImport
#[derive(Debug, Deserialize)]
pub struct FunctionImport {
    /// 13.6.1 Attribute `Name`
    #[serde(rename = "@Name")]
    pub name: ContainerElementName,
    /// 13.6.2 Attribute `Function`
    #[serde(rename = "@Function")]
    pub function: QualifiedTypeName,
    /// 13.6.3 Attribute `EntitySet`
    #[serde(rename = "@EntitySet")]
    pub entity_set: Option<String>,
    /// 13.6.4 Attribute `IncludeInServiceDocument`
    #[serde(rename = "@IncludeInServiceDocument")]
    pub include_in_service_document: Option<bool>,
    #[serde(rename = "Annotation", default)]
    pub annotations: Vec<Annotation>,
}

/// Validated edm:EntitySet
#[derive(Debug)]
pub struct EntitySet {
    pub name: ContainerElementName,
    pub entity_type: QualifiedTypeName,
    pub navigation_property_bindings: Vec<NavigationPropertyBinding>,
    pub annotations: Vec<Annotation>,
}

/// Validated edm:Singleton
#[derive(Debug)]
pub struct Singleton {
    pub name: ContainerElementName,
    pub stype: QualifiedTypeName,
    pub navigation_property_bindings: Vec<NavigationPropertyBinding>,
    pub annotations: Vec<Annotation>,
}

/// Validated edm:EntityContainer. Elements keep declaration order.
#[derive(Debug)]
pub struct EntityContainer {
    pub name: SimpleIdentifier,
    pub extends: Option<QualifiedTypeName>,
    pub entity_sets: Vec<EntitySet>,
    pub singletons: Vec<Singleton>,
    pub action_imports: Vec<ActionImport>,
    pub function_imports: Vec<FunctionImport>,
    pub annotations: Vec<Annotation>,
}

fn split_navigation_source_items(
    items: Vec<DeNavigationSourceItem>,
) -> (Vec<NavigationPropertyBinding>, Vec<Annotation>) {
    items
        .into_iter()
        .fold((Vec::new(), Vec::new()), |(mut bs, mut anns), v| {
            match v {
                DeNavigationSourceItem::NavigationPropertyBinding(v) => bs.push(v),
                DeNavigationSourceItem::Annotation(v) => anns.push(v),
            }
            (bs, anns)
        })
}

impl DeEntityContainer {
    #[must_use]
    pub fn validate(self) -> EntityContainer {
        let mut container = EntityContainer {
            name: self.name,
            extends: self.extends,
            entity_sets: Vec::new(),
            singletons: Vec::new(),
            action_imports: Vec::new(),
            function_imports: Vec::new(),
            annotations: Vec::new(),
        };
        for item in self.items {
            match item {
                DeEntityContainerItem::EntitySet(v) => {
                    let (navigation_property_bindings, annotations) =
                        split_navigation_source_items(v.items);
                    container.entity_sets.push(EntitySet {
                        name: v.name,
                        entity_type: v.entity_type,
                        navigation_property_bindings,
                        annotations,
                    });
                }
                DeEntityContainerItem::Singleton(v) => {
                    let (navigation_property_bindings, annotations) =
                        split_navigation_source_items(v.items);
                    container.singletons.push(Singleton {
                        name: v.name,
                        stype: v.stype,
                        navigation_property_bindings,
                        annotations,
                    });
                }
                DeEntityContainerItem::ActionImport(v) => container.action_imports.push(v),
                DeEntityContainerItem::FunctionImport(v) => container.function_imports.push(v),
                DeEntityContainerItem::Annotation(v) => container.annotations.push(v),
            }
        }
        container
    }
}
