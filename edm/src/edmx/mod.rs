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

//! EDMX parser and validator.

/// 3.1 Element edmx:Edmx
pub mod edmx_root;

/// 3.2 Element edmx:DataServices
pub mod data_services;

/// 3.3 Element edmx:Reference
pub mod reference;

/// 5 Schema
pub mod schema;

/// 6 Structural Property / 7 Navigation Property
pub mod property;

/// 8 Entity Type
pub mod entity_type;

/// 9 Complex Type
pub mod complex_type;

/// 10 Enumeration Type
pub mod enum_type;

/// 11 Type Definition
pub mod type_definition;

/// 12 Action and Function
pub mod operation;

/// 13 Entity Container
pub mod entity_container;

/// 14 Vocabulary and Annotation
pub mod annotation;

/// 17 Attribute Values
pub mod attribute_values;

use quick_xml::DeError;
use std::error::Error as StdError;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use tagged_types::TaggedType;

#[doc(inline)]
pub use annotation::Annotation;
#[doc(inline)]
pub use annotation::Annotations;
#[doc(inline)]
pub use annotation::Expression;
#[doc(inline)]
pub use annotation::PropertyValue;
#[doc(inline)]
pub use annotation::Record;
#[doc(inline)]
pub use attribute_values::Namespace;
#[doc(inline)]
pub use attribute_values::QualifiedName;
#[doc(inline)]
pub use attribute_values::SimpleIdentifier;
#[doc(inline)]
pub use attribute_values::TypeName;
#[doc(inline)]
pub use complex_type::ComplexType;
#[doc(inline)]
pub use entity_container::ActionImport;
#[doc(inline)]
pub use entity_container::EntityContainer;
#[doc(inline)]
pub use entity_container::EntitySet;
#[doc(inline)]
pub use entity_container::FunctionImport;
#[doc(inline)]
pub use entity_container::NavigationPropertyBinding;
#[doc(inline)]
pub use entity_container::Singleton;
#[doc(inline)]
pub use entity_type::EntityType;
#[doc(inline)]
pub use entity_type::Key;
#[doc(inline)]
pub use entity_type::PropertyRef;
#[doc(inline)]
pub use enum_type::EnumMember;
#[doc(inline)]
pub use enum_type::EnumType;
#[doc(inline)]
pub use operation::Operation;
#[doc(inline)]
pub use operation::OperationKind;
#[doc(inline)]
pub use operation::Parameter;
#[doc(inline)]
pub use operation::ReturnType;
#[doc(inline)]
pub use property::NavigationProperty;
#[doc(inline)]
pub use property::StructuralProperty;
#[doc(inline)]
pub use schema::Schema;
#[doc(inline)]
pub use type_definition::TypeDefinition;

/// Reexport of Edmx type to root.
pub type Edmx = edmx_root::Edmx;

/// Name of a type local to its schema.
pub type LocalTypeName = TaggedType<SimpleIdentifier, LocalTypeNameTag>;
#[doc(hidden)]
#[derive(tagged_types::Tag)]
#[implement(Clone, Hash, PartialEq, Eq)]
#[transparent(Debug, Display, Deserialize)]
#[capability(inner_access)]
pub enum LocalTypeNameTag {}

/// Namespace- or alias-qualified name of a type, operation or term.
pub type QualifiedTypeName = TaggedType<QualifiedName, QualifiedTypeNameTag>;
#[doc(hidden)]
#[derive(tagged_types::Tag)]
#[implement(Clone, Hash, PartialEq, Eq)]
#[transparent(Debug, Display, Deserialize)]
#[capability(inner_access)]
pub enum QualifiedTypeNameTag {}

/// Name of a structural or navigation property.
pub type PropertyName = TaggedType<SimpleIdentifier, PropertyNameTag>;
#[doc(hidden)]
#[derive(tagged_types::Tag)]
#[implement(Clone, Hash, PartialEq, Eq)]
#[transparent(Debug, Display, Deserialize)]
#[capability(inner_access)]
pub enum PropertyNameTag {}

/// Name of an operation parameter.
pub type ParameterName = TaggedType<SimpleIdentifier, ParameterNameTag>;
#[doc(hidden)]
#[derive(tagged_types::Tag)]
#[implement(Clone, Hash, PartialEq, Eq)]
#[transparent(Debug, Display, Deserialize)]
#[capability(inner_access)]
pub enum ParameterNameTag {}

/// Name of an element of the entity container.
pub type ContainerElementName = TaggedType<SimpleIdentifier, ContainerElementNameTag>;
#[doc(hidden)]
#[derive(tagged_types::Tag)]
#[implement(Clone, Hash, PartialEq, Eq)]
#[transparent(Debug, Display, Deserialize)]
#[capability(inner_access)]
pub enum ContainerElementNameTag {}

/// EDMX compilation errors.
#[derive(Debug)]
pub enum ValidateError {
    /// XML deserialization error.
    XmlDeserialize(DeError),
    /// Invalid number of `DataServices`.
    WrongDataServicesNumber,
    /// `DataServices` without schemas.
    NoSchemas,
    /// Schema namespace or alias is used more than once in a document.
    DuplicateSchemaName(String),
    /// More than one `EntityContainer` in a schema.
    TooManyEntityContainers,
    /// In the `EntityType` too many keys.
    TooManyKeys,
    /// In the `NavigationProperty` too many `OnDelete` items.
    TooManyOnDelete,
    /// In the `Action` or `Function` too many `ReturnType` items.
    TooManyReturnTypes,
    /// Function without `ReturnType`.
    NoReturnType,
    /// Bound operation without parameters.
    NoBindingParameter,
    /// Schema validation error.
    Schema(Namespace, Box<ValidateError>),
    /// `ComplexType` validation error.
    ComplexType(LocalTypeName, Box<ValidateError>),
    /// `EntityType` validation error.
    EntityType(LocalTypeName, Box<ValidateError>),
    /// `NavigationProperty` validation error.
    NavigationProperty(PropertyName, Box<ValidateError>),
    /// `Action` or `Function` validation error.
    Operation(LocalTypeName, Box<ValidateError>),
}

impl Display for ValidateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::XmlDeserialize(err) => write!(f, "xml deserialization error: {err}"),
            Self::WrongDataServicesNumber => "exactly one edmx:DataServices is expected".fmt(f),
            Self::NoSchemas => "edmx:DataServices must contain at least one schema".fmt(f),
            Self::DuplicateSchemaName(name) => write!(f, "duplicate schema name: {name}"),
            Self::TooManyEntityContainers => "too many entity containers in schema".fmt(f),
            Self::TooManyKeys => "too many keys".fmt(f),
            Self::TooManyOnDelete => "too many OnDelete elements".fmt(f),
            Self::TooManyReturnTypes => "too many return types".fmt(f),
            Self::NoReturnType => "function must have return type".fmt(f),
            Self::NoBindingParameter => "bound operation must have binding parameter".fmt(f),
            Self::Schema(ns, err) => write!(f, "schema {ns}: {err}"),
            Self::ComplexType(name, err) => write!(f, "complex type {name}: {err}"),
            Self::EntityType(name, err) => write!(f, "entity type {name}: {err}"),
            Self::NavigationProperty(name, err) => {
                write!(f, "navigation property {name}: {err}")
            }
            Self::Operation(name, err) => write!(f, "operation {name}: {err}"),
        }
    }
}

impl StdError for ValidateError {}
