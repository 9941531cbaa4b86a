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

//! Handles to model elements that remember their schema.

use crate::edmx::ActionImport;
use crate::edmx::Annotation;
use crate::edmx::ComplexType;
use crate::edmx::EntityContainer;
use crate::edmx::EntitySet;
use crate::edmx::EntityType;
use crate::edmx::EnumType;
use crate::edmx::FunctionImport;
use crate::edmx::LocalTypeName;
use crate::edmx::NavigationProperty;
use crate::edmx::NavigationPropertyBinding;
use crate::edmx::Operation;
use crate::edmx::Schema;
use crate::edmx::Singleton;
use crate::edmx::StructuralProperty;
use crate::edmx::TypeDefinition;
use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::ops::Deref;
use std::ptr;

/// Element that has a local (non-qualified) name.
pub trait Named {
    fn local_name(&self) -> &str;
}

impl Named for EntityType {
    fn local_name(&self) -> &str {
        self.name.inner().as_ref()
    }
}

impl Named for ComplexType {
    fn local_name(&self) -> &str {
        self.name.inner().as_ref()
    }
}

impl Named for EnumType {
    fn local_name(&self) -> &str {
        self.name.inner().as_ref()
    }
}

impl Named for TypeDefinition {
    fn local_name(&self) -> &str {
        self.name.inner().as_ref()
    }
}

impl Named for Operation {
    fn local_name(&self) -> &str {
        self.name.inner().as_ref()
    }
}

impl Named for EntityContainer {
    fn local_name(&self) -> &str {
        self.name.as_ref()
    }
}

impl Named for StructuralProperty {
    fn local_name(&self) -> &str {
        self.name.inner().as_ref()
    }
}

impl Named for NavigationProperty {
    fn local_name(&self) -> &str {
        self.name.inner().as_ref()
    }
}

/// Schema child element together with its schema.
pub struct Element<'a, T> {
    pub schema: &'a Schema,
    pub element: &'a T,
}

pub type EntityTypeRef<'a> = Element<'a, EntityType>;
pub type ComplexTypeRef<'a> = Element<'a, ComplexType>;
pub type EnumTypeRef<'a> = Element<'a, EnumType>;
pub type TypeDefinitionRef<'a> = Element<'a, TypeDefinition>;
pub type OperationRef<'a> = Element<'a, Operation>;
pub type EntityContainerRef<'a> = Element<'a, EntityContainer>;

impl<'a, T> Element<'a, T> {
    #[must_use]
    pub const fn new(schema: &'a Schema, element: &'a T) -> Self {
        Self { schema, element }
    }
}

impl<'a, T: Named> Element<'a, T> {
    /// Name of the element in its schema.
    #[must_use]
    pub fn name(&self) -> &'a str {
        self.element.local_name()
    }

    /// Namespace-qualified name of the element.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.schema.namespace, self.name())
    }

    /// Alias-qualified name if the schema has alias, otherwise
    /// namespace-qualified name.
    #[must_use]
    pub fn alias_name(&self) -> String {
        self.schema.alias.as_ref().map_or_else(
            || self.full_name(),
            |alias| format!("{alias}.{}", self.name()),
        )
    }

    #[must_use]
    pub fn qualified_name(&self, use_alias: bool) -> String {
        if use_alias {
            self.alias_name()
        } else {
            self.full_name()
        }
    }
}

impl<T> Clone for Element<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Element<'_, T> {}

impl<T> PartialEq for Element<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.element, other.element)
    }
}

impl<T> Eq for Element<'_, T> {}

impl<T> Deref for Element<'_, T> {
    type Target = T;
    fn deref(&self) -> &T {
        self.element
    }
}

impl<T: Named> Debug for Element<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Element({})", self.full_name())
    }
}

/// Property of a structured type together with its declaring type.
pub struct Member<'a, T> {
    pub schema: &'a Schema,
    pub declaring_type: &'a LocalTypeName,
    pub property: &'a T,
}

pub type NavigationPropertyRef<'a> = Member<'a, NavigationProperty>;
pub type StructuralPropertyRef<'a> = Member<'a, StructuralProperty>;

impl<'a, T: Named> Member<'a, T> {
    #[must_use]
    pub const fn new(
        schema: &'a Schema,
        declaring_type: &'a LocalTypeName,
        property: &'a T,
    ) -> Self {
        Self {
            schema,
            declaring_type,
            property,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'a str {
        self.property.local_name()
    }

    /// Namespace-qualified name of the declaring type.
    #[must_use]
    pub fn declaring_type_full_name(&self) -> String {
        format!("{}.{}", self.schema.namespace, self.declaring_type)
    }

    /// Annotation target path of the property (`NS.Type/Property`).
    #[must_use]
    pub fn target_path(&self) -> String {
        format!("{}/{}", self.declaring_type_full_name(), self.name())
    }
}

impl<T> Clone for Member<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Member<'_, T> {}

impl<T> PartialEq for Member<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.property, other.property)
    }
}

impl<T> Eq for Member<'_, T> {}

impl<T> Deref for Member<'_, T> {
    type Target = T;
    fn deref(&self) -> &T {
        self.property
    }
}

impl<T: Named> Debug for Member<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Member({})", self.target_path())
    }
}

#[derive(Clone, Copy, Debug)]
pub enum NavigationSourceKind<'a> {
    EntitySet(&'a EntitySet),
    Singleton(&'a Singleton),
}

/// Entity set or singleton with resolved entity type.
#[derive(Clone, Copy, Debug)]
pub struct NavigationSource<'a> {
    pub container: EntityContainerRef<'a>,
    pub kind: NavigationSourceKind<'a>,
    pub entity_type: EntityTypeRef<'a>,
}

impl<'a> NavigationSource<'a> {
    #[must_use]
    pub fn name(&self) -> &'a str {
        match self.kind {
            NavigationSourceKind::EntitySet(v) => v.name.inner().as_ref(),
            NavigationSourceKind::Singleton(v) => v.name.inner().as_ref(),
        }
    }

    #[must_use]
    pub const fn is_entity_set(&self) -> bool {
        matches!(self.kind, NavigationSourceKind::EntitySet(_))
    }

    #[must_use]
    pub fn annotations(&self) -> &'a [Annotation] {
        match self.kind {
            NavigationSourceKind::EntitySet(v) => &v.annotations,
            NavigationSourceKind::Singleton(v) => &v.annotations,
        }
    }

    #[must_use]
    pub fn navigation_property_bindings(&self) -> &'a [NavigationPropertyBinding] {
        match self.kind {
            NavigationSourceKind::EntitySet(v) => &v.navigation_property_bindings,
            NavigationSourceKind::Singleton(v) => &v.navigation_property_bindings,
        }
    }

    /// Annotation target path (`NS.Container/Name`).
    #[must_use]
    pub fn target_path(&self) -> String {
        format!("{}/{}", self.container.full_name(), self.name())
    }
}

impl PartialEq for NavigationSource<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self.kind, other.kind) {
            (NavigationSourceKind::EntitySet(a), NavigationSourceKind::EntitySet(b)) => {
                ptr::eq(a, b)
            }
            (NavigationSourceKind::Singleton(a), NavigationSourceKind::Singleton(b)) => {
                ptr::eq(a, b)
            }
            _ => false,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub enum OperationImportKind<'a> {
    Action(&'a ActionImport),
    Function(&'a FunctionImport),
}

/// Action or function import with resolved operation. Function
/// imports of overloaded functions produce one import per overload.
#[derive(Clone, Copy, Debug)]
pub struct OperationImport<'a> {
    pub container: EntityContainerRef<'a>,
    pub kind: OperationImportKind<'a>,
    pub operation: OperationRef<'a>,
}

impl<'a> OperationImport<'a> {
    #[must_use]
    pub fn name(&self) -> &'a str {
        match self.kind {
            OperationImportKind::Action(v) => v.name.inner().as_ref(),
            OperationImportKind::Function(v) => v.name.inner().as_ref(),
        }
    }

    #[must_use]
    pub fn annotations(&self) -> &'a [Annotation] {
        match self.kind {
            OperationImportKind::Action(v) => &v.annotations,
            OperationImportKind::Function(v) => &v.annotations,
        }
    }

    #[must_use]
    pub fn target_path(&self) -> String {
        format!("{}/{}", self.container.full_name(), self.name())
    }
}
