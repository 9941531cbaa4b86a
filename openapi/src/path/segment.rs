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

//! Path segments.
//!
//! Every segment renders its own URL template fragment. Placeholders
//! of key properties and function parameters are registered in
//! [`PathParameters`] which keeps them unique within the path.

use crate::edm::edmx::Parameter;
use crate::edm::edmx::StructuralProperty;
use crate::edm::edmx::TypeName;
use crate::edm::model::ComplexTypeRef;
use crate::edm::model::EntityTypeRef;
use crate::edm::model::NavigationPropertyRef;
use crate::edm::model::NavigationSource;
use crate::edm::model::OperationImport;
use crate::edm::model::OperationRef;
use crate::edm::model::StructuralPropertyRef;
use crate::edm::Model;
use crate::settings::Settings;
use crate::vocabulary::core::AlternateKey;
use std::collections::HashSet;
use std::error::Error as StdError;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

/// Errors of segment construction.
#[derive(Debug)]
pub enum Error {
    /// Entity type has no key.
    MissingKey(String),
    /// Key references a property that does not exist.
    KeyPropertyNotFound(String, String),
    /// Target type of the navigation property is not an entity type.
    NavigationTarget(String),
    /// Operation segment requires a bound operation.
    UnboundOperation(String),
    /// Escaped function call needs a non-binding parameter.
    NoEscapeParameter(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::MissingKey(et) => write!(f, "entity type {et} has no key"),
            Self::KeyPropertyNotFound(et, prop) => {
                write!(f, "key property {prop} is not found in entity type {et}")
            }
            Self::NavigationTarget(nav) => {
                write!(f, "target of navigation property {nav} is not an entity type")
            }
            Self::UnboundOperation(op) => write!(f, "operation {op} is not bound"),
            Self::NoEscapeParameter(op) => {
                write!(f, "escaped function {op} must have exactly one non-binding parameter")
            }
        }
    }
}

impl StdError for Error {}

/// Element of the model that is represented by a path placeholder.
#[derive(Debug, Clone, Copy)]
pub enum ParameterSource<'a> {
    Key {
        entity_type: EntityTypeRef<'a>,
        property: &'a StructuralProperty,
    },
    Function(&'a Parameter),
}

impl<'a> ParameterSource<'a> {
    /// Type of the placeholder value.
    #[must_use]
    pub fn type_name(&self) -> &'a TypeName {
        match *self {
            Self::Key { property, .. } => &property.ptype,
            Self::Function(p) => &p.ptype,
        }
    }
}

/// Placeholder of the rendered path.
#[derive(Debug, Clone)]
pub struct PathParameter<'a> {
    pub name: String,
    pub source: ParameterSource<'a>,
}

/// Placeholders of a path being rendered.
#[derive(Debug, Default)]
pub struct PathParameters<'a> {
    used: HashSet<String>,
    parameters: Vec<PathParameter<'a>>,
}

impl<'a> PathParameters<'a> {
    /// Register placeholder. Repeated names get numeric suffix
    /// (`ID`, `ID1`, `ID2`).
    pub fn add(&mut self, name: &str, source: ParameterSource<'a>) -> String {
        let mut unique = name.to_string();
        let mut n = 0;
        while self.used.contains(&unique) {
            n += 1;
            unique = format!("{name}{n}");
        }
        self.used.insert(unique.clone());
        self.parameters.push(PathParameter {
            name: unique.clone(),
            source,
        });
        unique
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<PathParameter<'a>> {
        self.parameters
    }
}

fn is_string(tname: &TypeName) -> bool {
    let qname = tname.qualified_type_name().inner();
    qname.namespace.is_edm() && qname.name.inner() == "String"
}

/// Placeholder in braces, in quotes if required.
fn placeholder(settings: &Settings, name: &str, tname: &TypeName) -> String {
    if settings.add_single_quotes_for_string_parameters && is_string(tname) {
        format!("'{{{name}}}'")
    } else {
        format!("{{{name}}}")
    }
}

/// Property of the key.
#[derive(Debug, Clone)]
pub struct KeyProperty<'a> {
    /// Name of the key in URL (alias if defined).
    pub name: String,
    pub property: &'a StructuralProperty,
}

#[derive(Debug, Clone)]
pub struct KeySegment<'a> {
    pub entity_type: EntityTypeRef<'a>,
    pub properties: Vec<KeyProperty<'a>>,
    /// Key is one of `Core.AlternateKeys`.
    pub alternate: bool,
}

impl<'a> KeySegment<'a> {
    /// Segment of the entity type key.
    ///
    /// # Errors
    ///
    /// Returns error if entity type (and all its base types) has no
    /// key or key property cannot be resolved.
    pub fn new(model: &Model<'a>, entity_type: EntityTypeRef<'a>) -> Result<Self, Error> {
        let key = model
            .key(entity_type)
            .filter(|key| !key.property_refs.is_empty())
            .ok_or_else(|| Error::MissingKey(entity_type.full_name()))?;
        let properties = key
            .property_refs
            .iter()
            .map(|pref| {
                let property = model.key_property(entity_type, &pref.name).ok_or_else(|| {
                    Error::KeyPropertyNotFound(entity_type.full_name(), pref.name.clone())
                })?;
                Ok(KeyProperty {
                    name: pref.key_name().into(),
                    property,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            entity_type,
            properties,
            alternate: false,
        })
    }

    /// Segment of the alternate key.
    ///
    /// # Errors
    ///
    /// Returns error if key property cannot be resolved.
    pub fn alternate(
        model: &Model<'a>,
        entity_type: EntityTypeRef<'a>,
        key: &AlternateKey,
    ) -> Result<Self, Error> {
        let properties = key
            .parts
            .iter()
            .map(|part| {
                let property = model.key_property(entity_type, &part.path).ok_or_else(|| {
                    Error::KeyPropertyNotFound(entity_type.full_name(), part.path.clone())
                })?;
                Ok(KeyProperty {
                    name: part.alias.clone(),
                    property,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            entity_type,
            properties,
            alternate: true,
        })
    }

    /// Single key rendered as a path segment of its own.
    fn is_segment(&self, settings: &Settings) -> bool {
        settings.enable_key_as_segment && !self.alternate && self.properties.len() == 1
    }

    fn path_item_name(&self, settings: &Settings, parameters: &mut PathParameters<'a>) -> String {
        let mut add = |name: &str, key: &KeyProperty<'a>| {
            let source = ParameterSource::Key {
                entity_type: self.entity_type,
                property: key.property,
            };
            let name = parameters.add(name, source);
            placeholder(settings, &name, &key.property.ptype)
        };
        match self.properties.as_slice() {
            [key] if !self.alternate => {
                let name = if settings.prefix_entity_type_name_before_key {
                    format!("{}-{}", self.entity_type.name(), key.name)
                } else {
                    key.name.clone()
                };
                let value = add(&name, key);
                if settings.enable_key_as_segment {
                    value
                } else {
                    format!("({value})")
                }
            }
            keys => {
                let pairs = keys
                    .iter()
                    .map(|key| format!("{}={}", key.name, add(&key.name, key)))
                    .collect::<Vec<_>>();
                format!("({})", pairs.join(","))
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NavigationPropertySegment<'a> {
    pub property: NavigationPropertyRef<'a>,
    pub target: EntityTypeRef<'a>,
}

impl<'a> NavigationPropertySegment<'a> {
    /// # Errors
    ///
    /// Returns error if the target type is not an entity type.
    pub fn new(model: &Model<'a>, property: NavigationPropertyRef<'a>) -> Result<Self, Error> {
        let target = model
            .navigation_target(property)
            .map_err(|_| Error::NavigationTarget(property.target_path()))?;
        Ok(Self { property, target })
    }

    #[must_use]
    pub const fn is_collection(&self) -> bool {
        self.property.property.is_collection()
    }

    #[must_use]
    pub const fn is_contained(&self) -> bool {
        self.property.property.contains_target
    }
}

/// Entity or complex type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StructuredType<'a> {
    Entity(EntityTypeRef<'a>),
    Complex(ComplexTypeRef<'a>),
}

impl StructuredType<'_> {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Entity(v) => v.name(),
            Self::Complex(v) => v.name(),
        }
    }

    #[must_use]
    pub fn full_name(&self) -> String {
        match self {
            Self::Entity(v) => v.full_name(),
            Self::Complex(v) => v.full_name(),
        }
    }

    #[must_use]
    pub fn qualified_name(&self, use_alias: bool) -> String {
        match self {
            Self::Entity(v) => v.qualified_name(use_alias),
            Self::Complex(v) => v.qualified_name(use_alias),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OperationSegment<'a> {
    pub operation: OperationRef<'a>,
    /// Function is called with the escaped syntax (`:/{path}`).
    pub escaped: bool,
}

impl<'a> OperationSegment<'a> {
    /// # Errors
    ///
    /// Returns error if operation is not bound.
    pub fn new(operation: OperationRef<'a>) -> Result<Self, Error> {
        if !operation.is_bound {
            return Err(Error::UnboundOperation(operation.full_name()));
        }
        Ok(Self {
            operation,
            escaped: false,
        })
    }

    /// Function called with the escaped syntax.
    ///
    /// # Errors
    ///
    /// Returns error if operation is not bound or it is not a function
    /// with exactly one non-binding parameter.
    pub fn escaped(operation: OperationRef<'a>) -> Result<Self, Error> {
        let segment = Self::new(operation)?;
        if !Self::is_escapable(operation) {
            return Err(Error::NoEscapeParameter(operation.full_name()));
        }
        Ok(Self {
            escaped: true,
            ..segment
        })
    }

    /// Function has the single non-binding parameter that the escaped
    /// syntax can carry.
    #[must_use]
    pub fn is_escapable(operation: OperationRef<'a>) -> bool {
        operation.is_function() && operation.element.non_binding_parameters().len() == 1
    }

    fn path_item_name(&self, settings: &Settings, parameters: &mut PathParameters<'a>) -> String {
        let op = self.operation;
        let params = op.element.non_binding_parameters();
        if self.escaped {
            if let [param] = params {
                let source = ParameterSource::Function(param);
                let name = parameters.add(param.name.inner().as_ref(), source);
                let suffix = if op.is_composable { ":" } else { "" };
                return format!("{{{name}}}{suffix}");
            }
        }
        let name = if settings.enable_unqualified_call {
            op.name().to_string()
        } else {
            op.qualified_name(settings.use_namespace_alias)
        };
        if op.is_function() {
            format!("{name}({})", function_parameters(settings, params, parameters))
        } else {
            name
        }
    }
}

fn function_parameters<'a>(
    settings: &Settings,
    params: &'a [Parameter],
    parameters: &mut PathParameters<'a>,
) -> String {
    params
        .iter()
        .map(|p| {
            let pname = p.name.inner().as_ref();
            let name = parameters.add(pname, ParameterSource::Function(p));
            format!("{pname}={}", placeholder(settings, &name, &p.ptype))
        })
        .collect::<Vec<_>>()
        .join(",")
}

#[derive(Debug, Clone, Copy)]
pub struct ComplexPropertySegment<'a> {
    pub property: StructuralPropertyRef<'a>,
    pub complex_type: ComplexTypeRef<'a>,
}

impl ComplexPropertySegment<'_> {
    #[must_use]
    pub const fn is_collection(&self) -> bool {
        self.property.property.ptype.is_collection()
    }
}

/// Segment of an OData resource path.
#[derive(Debug, Clone)]
pub enum Segment<'a> {
    NavigationSource(NavigationSource<'a>),
    Key(KeySegment<'a>),
    NavigationProperty(NavigationPropertySegment<'a>),
    TypeCast(StructuredType<'a>),
    Operation(OperationSegment<'a>),
    OperationImport(OperationImport<'a>),
    ComplexProperty(ComplexPropertySegment<'a>),
    StreamProperty(StructuralPropertyRef<'a>),
    /// `$value`
    StreamContent,
    /// `$ref`
    Ref,
    /// `$count`
    DollarCount,
}

impl<'a> Segment<'a> {
    /// Entity type addressed by the segment.
    #[must_use]
    pub fn entity_type(&self) -> Option<EntityTypeRef<'a>> {
        match self {
            Self::NavigationSource(v) => Some(v.entity_type),
            Self::Key(v) => Some(v.entity_type),
            Self::NavigationProperty(v) => Some(v.target),
            Self::TypeCast(StructuredType::Entity(v)) => Some(*v),
            _ => None,
        }
    }

    /// Name of the segment used in identifiers (tags, operation ids).
    #[must_use]
    pub fn identifier(&self) -> &'a str {
        match self {
            Self::NavigationSource(v) => v.name(),
            Self::Key(_) => "Key",
            Self::NavigationProperty(v) => v.property.name(),
            Self::TypeCast(StructuredType::Entity(v)) => v.name(),
            Self::TypeCast(StructuredType::Complex(v)) => v.name(),
            Self::Operation(v) => v.operation.name(),
            Self::OperationImport(v) => v.name(),
            Self::ComplexProperty(v) => v.property.name(),
            Self::StreamProperty(v) => v.name(),
            Self::StreamContent => "Content",
            Self::Ref => "Ref",
            Self::DollarCount => "Count",
        }
    }

    /// Separator between the previous segment and this one.
    #[must_use]
    pub fn separator(&self, settings: &Settings) -> &'static str {
        match self {
            Self::Key(key) if !key.is_segment(settings) => "",
            Self::Operation(op) if op.escaped => ":/",
            _ => "/",
        }
    }

    /// URL template fragment of the segment.
    pub fn path_item_name(
        &self,
        settings: &Settings,
        parameters: &mut PathParameters<'a>,
    ) -> String {
        match self {
            Self::NavigationSource(v) => v.name().into(),
            Self::Key(v) => v.path_item_name(settings, parameters),
            Self::NavigationProperty(v) => v.property.name().into(),
            Self::TypeCast(v) => v.qualified_name(settings.use_namespace_alias),
            Self::Operation(v) => v.path_item_name(settings, parameters),
            Self::OperationImport(v) => {
                if v.operation.is_function() {
                    let params = &v.operation.element.parameters;
                    format!("{}({})", v.name(), function_parameters(settings, params, parameters))
                } else {
                    v.name().into()
                }
            }
            Self::ComplexProperty(v) => v.property.name().into(),
            Self::StreamProperty(v) => v.name().into(),
            Self::StreamContent => "$value".into(),
            Self::Ref => "$ref".into(),
            Self::DollarCount => "$count".into(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::edm::Edmx;

    const MODEL: &str = r#"
      <edmx:Edmx Version="4.0">
        <edmx:DataServices>
          <Schema Namespace="Microsoft.Test" Alias="Self">
            <EntityType Name="Customer">
              <Key><PropertyRef Name="ID"/></Key>
              <Property Name="ID" Type="Edm.Int32" Nullable="false"/>
            </EntityType>
            <EntityType Name="Person">
              <Key>
                <PropertyRef Name="FirstName"/>
                <PropertyRef Name="LastName"/>
              </Key>
              <Property Name="FirstName" Type="Edm.String" Nullable="false"/>
              <Property Name="LastName" Type="Edm.String" Nullable="false"/>
            </EntityType>
            <EntityType Name="Note"/>
            <Function Name="Search" IsBound="true" IsComposable="true">
              <Parameter Name="customer" Type="Self.Customer"/>
              <Parameter Name="path" Type="Edm.String"/>
              <Parameter Name="depth" Type="Edm.Int32"/>
              <ReturnType Type="Collection(Self.Customer)"/>
            </Function>
            <Function Name="Lookup" IsBound="true" IsComposable="true">
              <Parameter Name="customer" Type="Self.Customer"/>
              <Parameter Name="path" Type="Edm.String"/>
              <ReturnType Type="Self.Customer"/>
            </Function>
            <Action Name="Reset" IsBound="true">
              <Parameter Name="customer" Type="Self.Customer"/>
            </Action>
            <Function Name="Unbound">
              <ReturnType Type="Edm.String"/>
            </Function>
          </Schema>
        </edmx:DataServices>
      </edmx:Edmx>"#;

    fn render(segment: &Segment<'_>, settings: &Settings) -> String {
        segment.path_item_name(settings, &mut PathParameters::default())
    }

    #[test]
    fn test_single_key() {
        let docs = vec![Edmx::parse(MODEL).unwrap()];
        let model = Model::build(&docs).unwrap();
        let customer = model.entity_type_by_name("Self.Customer").unwrap();
        let key = Segment::Key(KeySegment::new(&model, customer).unwrap());

        let mut settings = Settings::default();
        assert_eq!(render(&key, &settings), "({ID})");
        assert_eq!(key.separator(&settings), "");

        settings.enable_key_as_segment = true;
        assert_eq!(render(&key, &settings), "{ID}");
        assert_eq!(key.separator(&settings), "/");

        settings.prefix_entity_type_name_before_key = true;
        assert_eq!(render(&key, &settings), "{Customer-ID}");
    }

    #[test]
    fn test_composite_key() {
        let docs = vec![Edmx::parse(MODEL).unwrap()];
        let model = Model::build(&docs).unwrap();
        let person = model.entity_type_by_name("Self.Person").unwrap();
        let key = Segment::Key(KeySegment::new(&model, person).unwrap());
        for key_as_segment in [false, true] {
            let settings = Settings {
                enable_key_as_segment: key_as_segment,
                ..Settings::default()
            };
            assert_eq!(
                render(&key, &settings),
                "(FirstName={FirstName},LastName={LastName})"
            );
            assert_eq!(key.separator(&settings), "");
        }
        let settings = Settings {
            add_single_quotes_for_string_parameters: true,
            ..Settings::default()
        };
        assert_eq!(
            render(&key, &settings),
            "(FirstName='{FirstName}',LastName='{LastName}')"
        );
    }

    #[test]
    fn test_missing_key() {
        let docs = vec![Edmx::parse(MODEL).unwrap()];
        let model = Model::build(&docs).unwrap();
        let note = model.entity_type_by_name("Self.Note").unwrap();
        assert!(matches!(
            KeySegment::new(&model, note),
            Err(Error::MissingKey(_))
        ));
    }

    #[test]
    fn test_unique_placeholders() {
        let docs = vec![Edmx::parse(MODEL).unwrap()];
        let model = Model::build(&docs).unwrap();
        let customer = model.entity_type_by_name("Self.Customer").unwrap();
        let key = Segment::Key(KeySegment::new(&model, customer).unwrap());
        let settings = Settings::default();
        let mut parameters = PathParameters::default();
        assert_eq!(key.path_item_name(&settings, &mut parameters), "({ID})");
        assert_eq!(key.path_item_name(&settings, &mut parameters), "({ID1})");
        assert_eq!(key.path_item_name(&settings, &mut parameters), "({ID2})");
        let names = parameters
            .into_inner()
            .into_iter()
            .map(|p| p.name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["ID", "ID1", "ID2"]);
    }

    #[test]
    fn test_operations() {
        let docs = vec![Edmx::parse(MODEL).unwrap()];
        let model = Model::build(&docs).unwrap();
        let find = |name: &str| {
            model
                .operations()
                .iter()
                .find(|op| op.name() == name)
                .copied()
                .unwrap()
        };
        let mut settings = Settings::default();
        let search = Segment::Operation(OperationSegment::new(find("Search")).unwrap());
        assert_eq!(
            render(&search, &settings),
            "Microsoft.Test.Search(path={path},depth={depth})"
        );
        settings.use_namespace_alias = true;
        assert_eq!(
            render(&search, &settings),
            "Self.Search(path={path},depth={depth})"
        );
        settings.enable_unqualified_call = true;
        assert_eq!(render(&search, &settings), "Search(path={path},depth={depth})");

        let reset = Segment::Operation(OperationSegment::new(find("Reset")).unwrap());
        assert_eq!(render(&reset, &settings), "Reset");

        let escaped = Segment::Operation(OperationSegment::escaped(find("Lookup")).unwrap());
        assert_eq!(render(&escaped, &settings), "{path}:");
        assert_eq!(escaped.separator(&settings), ":/");

        assert!(matches!(
            OperationSegment::new(find("Unbound")),
            Err(Error::UnboundOperation(_))
        ));
        assert!(matches!(
            OperationSegment::escaped(find("Reset")),
            Err(Error::NoEscapeParameter(_))
        ));
        assert!(matches!(
            OperationSegment::escaped(find("Search")),
            Err(Error::NoEscapeParameter(_))
        ));
    }
}
