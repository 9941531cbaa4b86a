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

//! Read-only index over validated EDMX documents.
//!
//! All handles returned by the model borrow from the documents, so
//! the model is cheap to query and can be shared between threads.

/// Handles of model elements.
pub mod element;

/// Primitive types.
pub mod primitive;

/// Annotatable elements.
pub mod target;

use crate::edmx::Annotation;
use crate::edmx::Edmx;
use crate::edmx::Key;
use crate::edmx::QualifiedName;
use crate::edmx::QualifiedTypeName;
use crate::edmx::Schema;
use crate::edmx::StructuralProperty;
use crate::edmx::TypeName;
use std::collections::HashMap;
use std::collections::HashSet;
use std::error::Error as StdError;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

#[doc(inline)]
pub use element::ComplexTypeRef;
#[doc(inline)]
pub use element::Element;
#[doc(inline)]
pub use element::EntityContainerRef;
#[doc(inline)]
pub use element::EntityTypeRef;
#[doc(inline)]
pub use element::EnumTypeRef;
#[doc(inline)]
pub use element::Member;
#[doc(inline)]
pub use element::Named;
#[doc(inline)]
pub use element::NavigationPropertyRef;
#[doc(inline)]
pub use element::NavigationSource;
#[doc(inline)]
pub use element::NavigationSourceKind;
#[doc(inline)]
pub use element::OperationImport;
#[doc(inline)]
pub use element::OperationImportKind;
#[doc(inline)]
pub use element::OperationRef;
#[doc(inline)]
pub use element::StructuralPropertyRef;
#[doc(inline)]
pub use element::TypeDefinitionRef;
#[doc(inline)]
pub use primitive::PrimitiveKind;
#[doc(inline)]
pub use target::Target;

/// Namespaces of standard vocabularies with their conventional
/// aliases. Used when documents refer to a vocabulary by alias
/// without including it.
pub const WELL_KNOWN_ALIASES: &[(&str, &str)] = &[
    ("Core", "Org.OData.Core.V1"),
    ("Capabilities", "Org.OData.Capabilities.V1"),
    ("Validation", "Org.OData.Validation.V1"),
    ("Measures", "Org.OData.Measures.V1"),
    ("Authorization", "Org.OData.Authorization.V1"),
];

/// Model index errors.
#[derive(Debug)]
pub enum Error {
    /// Type is not defined in any of the schemas.
    TypeNotFound(String),
    /// Type is defined but is not an entity type.
    NotEntityType(String),
    /// Operation referenced by an import is not found.
    OperationNotFound(String),
    /// Type of `Edm` namespace that is not a primitive type.
    UnsupportedPrimitive(String),
    /// Error in the context of the entity container element.
    ContainerElement(String, Box<Error>),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::TypeNotFound(name) => write!(f, "type is not found: {name}"),
            Self::NotEntityType(name) => write!(f, "not an entity type: {name}"),
            Self::OperationNotFound(name) => write!(f, "operation is not found: {name}"),
            Self::UnsupportedPrimitive(name) => write!(f, "unsupported primitive type: {name}"),
            Self::ContainerElement(name, err) => write!(f, "container element {name}: {err}"),
        }
    }
}

impl StdError for Error {}

/// Resolved type of a property, parameter or return value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SchemaType<'a> {
    Primitive(PrimitiveKind),
    Entity(EntityTypeRef<'a>),
    Complex(ComplexTypeRef<'a>),
    Enum(EnumTypeRef<'a>),
    TypeDefinition(TypeDefinitionRef<'a>),
}

impl SchemaType<'_> {
    /// Namespace-qualified name of the type.
    #[must_use]
    pub fn full_name(&self) -> String {
        match self {
            Self::Primitive(v) => v.to_string(),
            Self::Entity(v) => v.full_name(),
            Self::Complex(v) => v.full_name(),
            Self::Enum(v) => v.full_name(),
            Self::TypeDefinition(v) => v.full_name(),
        }
    }
}

/// Key of the binding index: qualified name of the binding type and
/// collection flag.
type BindingKey = (String, bool);

pub struct Model<'a> {
    schemas: Vec<&'a Schema>,
    /// Namespace or alias to namespace.
    namespaces: HashMap<String, String>,
    /// Namespace-qualified name to the type.
    types: HashMap<String, SchemaType<'a>>,
    operations: Vec<OperationRef<'a>>,
    operations_by_name: HashMap<String, Vec<OperationRef<'a>>>,
    /// Mapping from base entity types to directly derived types.
    derived_entity_types: HashMap<String, Vec<EntityTypeRef<'a>>>,
    /// Mapping from base complex types to directly derived types.
    derived_complex_types: HashMap<String, Vec<ComplexTypeRef<'a>>>,
    /// Bound operations by binding type.
    bound_operations: HashMap<BindingKey, Vec<OperationRef<'a>>>,
    navigation_sources: Vec<NavigationSource<'a>>,
    operation_imports: Vec<OperationImport<'a>>,
    /// Out-of-line annotations by normalized target path.
    out_of_line: HashMap<String, Vec<&'a Annotation>>,
}

impl<'a> Model<'a> {
    /// Build the index from the provided documents.
    ///
    /// # Errors
    ///
    /// Returns an error if any entity set, singleton or operation
    /// import references a missing element.
    pub fn build(edmx_docs: &'a [Edmx]) -> Result<Self, Error> {
        let schemas = edmx_docs
            .iter()
            .flat_map(|doc| doc.data_services.schemas.iter())
            .collect::<Vec<_>>();

        let mut namespaces = HashMap::new();
        for s in &schemas {
            let ns = s.namespace.to_string();
            if let Some(alias) = &s.alias {
                namespaces.insert(alias.to_string(), ns.clone());
            }
            namespaces.insert(ns.clone(), ns);
        }
        for include in edmx_docs
            .iter()
            .flat_map(|doc| doc.references.iter())
            .flat_map(|r| r.includes.iter())
        {
            let ns = include.namespace.to_string();
            if let Some(alias) = &include.alias {
                namespaces.entry(alias.to_string()).or_insert_with(|| ns.clone());
            }
            namespaces.entry(ns.clone()).or_insert(ns);
        }
        for (alias, ns) in WELL_KNOWN_ALIASES {
            namespaces
                .entry((*alias).to_string())
                .or_insert_with(|| (*ns).to_string());
        }

        let mut model = Self {
            schemas,
            namespaces,
            types: HashMap::new(),
            operations: Vec::new(),
            operations_by_name: HashMap::new(),
            derived_entity_types: HashMap::new(),
            derived_complex_types: HashMap::new(),
            bound_operations: HashMap::new(),
            navigation_sources: Vec::new(),
            operation_imports: Vec::new(),
            out_of_line: HashMap::new(),
        };
        model.index_types();
        model.index_operations();
        model.index_annotations();
        model.index_container()?;
        Ok(model)
    }

    fn index_types(&mut self) {
        for &schema in &self.schemas {
            for et in &schema.entity_types {
                let et = EntityTypeRef::new(schema, et);
                self.types.insert(et.full_name(), SchemaType::Entity(et));
            }
            for ct in &schema.complex_types {
                let ct = ComplexTypeRef::new(schema, ct);
                self.types.insert(ct.full_name(), SchemaType::Complex(ct));
            }
            for en in &schema.enum_types {
                let en = EnumTypeRef::new(schema, en);
                self.types.insert(en.full_name(), SchemaType::Enum(en));
            }
            for td in &schema.type_definitions {
                let td = TypeDefinitionRef::new(schema, td);
                self.types.insert(td.full_name(), SchemaType::TypeDefinition(td));
            }
        }
        for &schema in &self.schemas {
            for et in &schema.entity_types {
                if let Some(base) = &et.base_type {
                    let base = self.normalize_name(base.inner());
                    self.derived_entity_types
                        .entry(base)
                        .or_default()
                        .push(EntityTypeRef::new(schema, et));
                }
            }
            for ct in &schema.complex_types {
                if let Some(base) = &ct.base_type {
                    let base = self.normalize_name(base.inner());
                    self.derived_complex_types
                        .entry(base)
                        .or_default()
                        .push(ComplexTypeRef::new(schema, ct));
                }
            }
        }
    }

    fn index_operations(&mut self) {
        for &schema in &self.schemas {
            for op in &schema.operations {
                let op = OperationRef::new(schema, op);
                self.operations.push(op);
                self.operations_by_name
                    .entry(op.full_name())
                    .or_default()
                    .push(op);
                if let Some(binding) = op.binding_parameter() {
                    let key = (
                        self.normalize_name(binding.ptype.qualified_type_name().inner()),
                        binding.ptype.is_collection(),
                    );
                    self.bound_operations.entry(key).or_default().push(op);
                }
            }
        }
    }

    fn index_annotations(&mut self) {
        for &schema in &self.schemas {
            for block in &schema.out_of_line_annotations {
                // Only unqualified annotations are applied.
                if block.qualifier.is_some() {
                    continue;
                }
                let target = self.normalize_target(&block.target);
                self.out_of_line.entry(target).or_default().extend(
                    block
                        .annotations
                        .iter()
                        .filter(|a| a.qualifier.is_none()),
                );
            }
        }
    }

    fn index_container(&mut self) -> Result<(), Error> {
        for &schema in &self.schemas {
            let Some(container) = &schema.entity_container else {
                continue;
            };
            let container = EntityContainerRef::new(schema, container);
            for es in &container.element.entity_sets {
                let entity_type = self.find_entity_type(&es.entity_type).map_err(|e| {
                    Error::ContainerElement(es.name.to_string(), Box::new(e))
                })?;
                self.navigation_sources.push(NavigationSource {
                    container,
                    kind: NavigationSourceKind::EntitySet(es),
                    entity_type,
                });
            }
            for s in &container.element.singletons {
                let entity_type = self
                    .find_entity_type(&s.stype)
                    .map_err(|e| Error::ContainerElement(s.name.to_string(), Box::new(e)))?;
                self.navigation_sources.push(NavigationSource {
                    container,
                    kind: NavigationSourceKind::Singleton(s),
                    entity_type,
                });
            }
            for ai in &container.element.action_imports {
                let name = self.normalize_name(ai.action.inner());
                let operation = self
                    .operations_by_name
                    .get(&name)
                    .and_then(|ops| ops.iter().find(|op| op.is_action() && !op.is_bound))
                    .copied()
                    .ok_or_else(|| {
                        Error::ContainerElement(
                            ai.name.to_string(),
                            Box::new(Error::OperationNotFound(name.clone())),
                        )
                    })?;
                self.operation_imports.push(OperationImport {
                    container,
                    kind: OperationImportKind::Action(ai),
                    operation,
                });
            }
            for fi in &container.element.function_imports {
                let name = self.normalize_name(fi.function.inner());
                let overloads = self
                    .operations_by_name
                    .get(&name)
                    .map(|ops| {
                        ops.iter()
                            .filter(|op| op.is_function() && !op.is_bound)
                            .copied()
                            .collect::<Vec<_>>()
                    })
                    .unwrap_or_default();
                if overloads.is_empty() {
                    return Err(Error::ContainerElement(
                        fi.name.to_string(),
                        Box::new(Error::OperationNotFound(name)),
                    ));
                }
                self.operation_imports
                    .extend(overloads.into_iter().map(|operation| OperationImport {
                        container,
                        kind: OperationImportKind::Function(fi),
                        operation,
                    }));
            }
        }
        Ok(())
    }

    /// Resolve namespace alias. Unknown namespaces are returned as is.
    #[must_use]
    pub fn resolve_namespace<'s>(&'s self, ns: &'s str) -> &'s str {
        self.namespaces.get(ns).map_or(ns, String::as_str)
    }

    /// Namespace-qualified name of the (possibly alias-qualified) name.
    #[must_use]
    pub fn normalize_name(&self, qname: &QualifiedName) -> String {
        let ns = qname.namespace.to_string();
        format!("{}.{}", self.resolve_namespace(&ns), qname.name)
    }

    /// Replace aliases of all qualified names in the annotation target
    /// path (`Alias.Container/Set`, `Alias.Op(Alias.Type)`).
    #[must_use]
    pub fn normalize_target(&self, target: &str) -> String {
        let normalize = |token: &str| {
            token
                .rsplit_once('.')
                .map_or_else(|| token.to_string(), |(ns, name)| {
                    format!("{}.{name}", self.resolve_namespace(ns))
                })
        };
        let mut result = String::with_capacity(target.len());
        let mut start = 0;
        for (i, c) in target.char_indices() {
            if matches!(c, '/' | '(' | ')' | ',') {
                result.push_str(&normalize(&target[start..i]));
                result.push(c);
                start = i + 1;
            }
        }
        result.push_str(&normalize(&target[start..]));
        result
    }

    /// All schemas of the model in document order.
    #[must_use]
    pub fn schemas(&self) -> &[&'a Schema] {
        &self.schemas
    }

    /// First entity container of the model.
    #[must_use]
    pub fn entity_container(&self) -> Option<EntityContainerRef<'a>> {
        self.schemas.iter().find_map(|schema| {
            schema
                .entity_container
                .as_ref()
                .map(|c| EntityContainerRef::new(schema, c))
        })
    }

    /// Entity sets and singletons of all containers.
    #[must_use]
    pub fn navigation_sources(&self) -> &[NavigationSource<'a>] {
        &self.navigation_sources
    }

    /// Action and function imports of all containers.
    #[must_use]
    pub fn operation_imports(&self) -> &[OperationImport<'a>] {
        &self.operation_imports
    }

    /// All actions and functions of the model.
    #[must_use]
    pub fn operations(&self) -> &[OperationRef<'a>] {
        &self.operations
    }

    /// Entity types of all schemas in declaration order.
    pub fn entity_types(&self) -> impl Iterator<Item = EntityTypeRef<'a>> + '_ {
        self.schemas.iter().flat_map(|&schema| {
            schema
                .entity_types
                .iter()
                .map(move |v| EntityTypeRef::new(schema, v))
        })
    }

    /// Complex types of all schemas in declaration order.
    pub fn complex_types(&self) -> impl Iterator<Item = ComplexTypeRef<'a>> + '_ {
        self.schemas.iter().flat_map(|&schema| {
            schema
                .complex_types
                .iter()
                .map(move |v| ComplexTypeRef::new(schema, v))
        })
    }

    /// Enum types of all schemas in declaration order.
    pub fn enum_types(&self) -> impl Iterator<Item = EnumTypeRef<'a>> + '_ {
        self.schemas.iter().flat_map(|&schema| {
            schema
                .enum_types
                .iter()
                .map(move |v| EnumTypeRef::new(schema, v))
        })
    }

    /// Type definitions of all schemas in declaration order.
    pub fn type_definitions(&self) -> impl Iterator<Item = TypeDefinitionRef<'a>> + '_ {
        self.schemas.iter().flat_map(|&schema| {
            schema
                .type_definitions
                .iter()
                .map(move |v| TypeDefinitionRef::new(schema, v))
        })
    }

    /// Resolve type by its qualified name.
    ///
    /// # Errors
    ///
    /// - `Error::UnsupportedPrimitive` if type of `Edm` namespace is not known.
    /// - `Error::TypeNotFound` if type is not defined in any schema.
    pub fn resolve_type(&self, qtype: &QualifiedTypeName) -> Result<SchemaType<'a>, Error> {
        let qtype = qtype.inner();
        if qtype.namespace.is_edm() {
            return qtype
                .name
                .inner()
                .parse()
                .map(SchemaType::Primitive)
                .map_err(|_| Error::UnsupportedPrimitive(qtype.to_string()));
        }
        let name = self.normalize_name(qtype);
        self.types
            .get(&name)
            .copied()
            .ok_or(Error::TypeNotFound(name))
    }

    /// Resolve type of the property, parameter or return value.
    ///
    /// # Errors
    ///
    /// See [`Model::resolve_type`].
    pub fn resolve_type_name(&self, tname: &TypeName) -> Result<SchemaType<'a>, Error> {
        self.resolve_type(tname.qualified_type_name())
    }

    /// Find entity type by its qualified name.
    ///
    /// # Errors
    ///
    /// Returns an error if the type is not found or is not an entity type.
    pub fn find_entity_type(&self, qtype: &QualifiedTypeName) -> Result<EntityTypeRef<'a>, Error> {
        match self.resolve_type(qtype)? {
            SchemaType::Entity(et) => Ok(et),
            _ => Err(Error::NotEntityType(qtype.to_string())),
        }
    }

    /// Find entity type by namespace- or alias-qualified name string.
    #[must_use]
    pub fn entity_type_by_name(&self, name: &str) -> Option<EntityTypeRef<'a>> {
        let qname = name.parse::<QualifiedName>().ok()?;
        match self.types.get(&self.normalize_name(&qname)) {
            Some(SchemaType::Entity(et)) => Some(*et),
            _ => None,
        }
    }

    /// Direct base type of the entity type.
    #[must_use]
    pub fn base_type(&self, et: EntityTypeRef<'a>) -> Option<EntityTypeRef<'a>> {
        et.base_type
            .as_ref()
            .and_then(|base| self.find_entity_type(base).ok())
    }

    /// All base types of the entity type starting from the nearest one.
    #[must_use]
    pub fn base_types(&self, et: EntityTypeRef<'a>) -> Vec<EntityTypeRef<'a>> {
        let mut result = Vec::new();
        let mut current = et;
        while let Some(base) = self.base_type(current) {
            // Inheritance cycles are invalid but must not hang.
            if base == et || result.contains(&base) {
                break;
            }
            result.push(base);
            current = base;
        }
        result
    }

    /// Entity type is the same as `base` or derived from it.
    #[must_use]
    pub fn is_a(&self, et: EntityTypeRef<'a>, base: EntityTypeRef<'a>) -> bool {
        et == base || self.base_types(et).contains(&base)
    }

    /// Directly derived entity types.
    #[must_use]
    pub fn derived_types(&self, et: EntityTypeRef<'a>) -> &[EntityTypeRef<'a>] {
        self.derived_entity_types
            .get(&et.full_name())
            .map_or(&[][..], Vec::as_slice)
    }

    /// All directly and indirectly derived entity types in depth-first
    /// order.
    #[must_use]
    pub fn all_derived_types(&self, et: EntityTypeRef<'a>) -> Vec<EntityTypeRef<'a>> {
        let mut result = Vec::new();
        let mut stack = self.derived_types(et).iter().rev().copied().collect::<Vec<_>>();
        while let Some(v) = stack.pop() {
            if v == et || result.contains(&v) {
                continue;
            }
            result.push(v);
            stack.extend(self.derived_types(v).iter().rev().copied());
        }
        result
    }

    /// Key of the entity type or of the nearest base type that defines
    /// key.
    #[must_use]
    pub fn key(&self, et: EntityTypeRef<'a>) -> Option<&'a Key> {
        et.element
            .key
            .as_ref()
            .or_else(|| self.base_types(et).into_iter().find_map(|b| b.element.key.as_ref()))
    }

    /// Structural properties of the entity type including inherited,
    /// base type properties first.
    #[must_use]
    pub fn structural_properties(&self, et: EntityTypeRef<'a>) -> Vec<StructuralPropertyRef<'a>> {
        let mut chain = self.base_types(et);
        chain.reverse();
        chain.push(et);
        chain
            .into_iter()
            .flat_map(|t| {
                t.element
                    .properties
                    .iter()
                    .map(move |p| StructuralPropertyRef::new(t.schema, &t.element.name, p))
            })
            .collect()
    }

    /// Navigation properties of the entity type including inherited,
    /// base type properties first.
    #[must_use]
    pub fn navigation_properties(&self, et: EntityTypeRef<'a>) -> Vec<NavigationPropertyRef<'a>> {
        let mut chain = self.base_types(et);
        chain.reverse();
        chain.push(et);
        chain
            .into_iter()
            .flat_map(|t| self.declared_navigation_properties(t))
            .collect()
    }

    /// Navigation properties declared by the entity type itself.
    #[must_use]
    pub fn declared_navigation_properties(
        &self,
        et: EntityTypeRef<'a>,
    ) -> Vec<NavigationPropertyRef<'a>> {
        et.element
            .navigation_properties
            .iter()
            .map(|p| NavigationPropertyRef::new(et.schema, &et.element.name, p))
            .collect()
    }

    /// Find structural property by name including inherited.
    #[must_use]
    pub fn find_structural_property(
        &self,
        et: EntityTypeRef<'a>,
        name: &str,
    ) -> Option<StructuralPropertyRef<'a>> {
        self.structural_properties(et)
            .into_iter()
            .find(|p| p.name() == name)
    }

    /// Resolve the property referenced by a key property path. Path
    /// may go through complex properties (`Address/Street`).
    #[must_use]
    pub fn key_property(
        &self,
        et: EntityTypeRef<'a>,
        path: &str,
    ) -> Option<&'a StructuralProperty> {
        let mut parts = path.split('/');
        let first = parts.next()?;
        let mut current = self.find_structural_property(et, first)?.property;
        for part in parts {
            let SchemaType::Complex(ct) = self.resolve_type_name(&current.ptype).ok()? else {
                return None;
            };
            current = self
                .complex_structural_properties(ct)
                .into_iter()
                .find(|p| p.name() == part)?
                .property;
        }
        Some(current)
    }

    /// Target entity type of the navigation property.
    ///
    /// # Errors
    ///
    /// Returns an error if the target type is not an entity type.
    pub fn navigation_target(
        &self,
        nav: NavigationPropertyRef<'a>,
    ) -> Result<EntityTypeRef<'a>, Error> {
        self.find_entity_type(nav.ptype.qualified_type_name())
    }

    /// Direct base type of the complex type.
    #[must_use]
    pub fn complex_base_type(&self, ct: ComplexTypeRef<'a>) -> Option<ComplexTypeRef<'a>> {
        let base = ct.base_type.as_ref()?;
        match self.resolve_type(base).ok()? {
            SchemaType::Complex(v) => Some(v),
            _ => None,
        }
    }

    /// Structural properties of the complex type including inherited.
    #[must_use]
    pub fn complex_structural_properties(
        &self,
        ct: ComplexTypeRef<'a>,
    ) -> Vec<StructuralPropertyRef<'a>> {
        let mut chain = vec![ct];
        let mut visited = HashSet::new();
        visited.insert(ct.full_name());
        let mut current = ct;
        while let Some(base) = self.complex_base_type(current) {
            if !visited.insert(base.full_name()) {
                break;
            }
            chain.push(base);
            current = base;
        }
        chain
            .into_iter()
            .rev()
            .flat_map(|t| {
                t.element
                    .properties
                    .iter()
                    .map(move |p| StructuralPropertyRef::new(t.schema, &t.element.name, p))
            })
            .collect()
    }

    /// All directly and indirectly derived complex types.
    #[must_use]
    pub fn all_derived_complex_types(&self, ct: ComplexTypeRef<'a>) -> Vec<ComplexTypeRef<'a>> {
        let derived = |v: ComplexTypeRef<'a>| {
            self.derived_complex_types
                .get(&v.full_name())
                .map_or(&[][..], Vec::as_slice)
        };
        let mut result = Vec::new();
        let mut stack = derived(ct).iter().rev().copied().collect::<Vec<_>>();
        while let Some(v) = stack.pop() {
            if v == ct || result.contains(&v) {
                continue;
            }
            result.push(v);
            stack.extend(derived(v).iter().rev().copied());
        }
        result
    }

    /// Operations bound exactly to the type (not to its base types).
    #[must_use]
    pub fn bound_operations_exact(
        &self,
        et: EntityTypeRef<'a>,
        collection: bool,
    ) -> &[OperationRef<'a>] {
        self.bound_operations
            .get(&(et.full_name(), collection))
            .map_or(&[][..], Vec::as_slice)
    }

    /// Operations that can be bound to the entity type or collection of
    /// the entity type: operations bound to the type itself and to any
    /// of its base types.
    #[must_use]
    pub fn bound_operations(
        &self,
        et: EntityTypeRef<'a>,
        collection: bool,
    ) -> Vec<OperationRef<'a>> {
        std::iter::once(et)
            .chain(self.base_types(et))
            .flat_map(|t| self.bound_operations_exact(t, collection).iter().copied())
            .collect()
    }

    /// Annotation term is `namespace.name` (namespace may be aliased in
    /// the annotation).
    #[must_use]
    pub fn is_term(&self, annotation: &Annotation, namespace: &str, name: &str) -> bool {
        let term = annotation.term.inner();
        term.name.inner() == name
            && self.resolve_namespace(&term.namespace.to_string()) == namespace
    }

    /// Unqualified annotations of the target. Inline annotations come
    /// first.
    #[must_use]
    pub fn annotations(&self, target: &Target<'a>) -> Vec<&'a Annotation> {
        target
            .inline_annotations()
            .iter()
            .filter(|a| a.qualifier.is_none())
            .chain(
                target
                    .target_paths(self)
                    .iter()
                    .filter_map(|path| self.out_of_line.get(path))
                    .flatten()
                    .copied(),
            )
            .collect()
    }

    /// First unqualified annotation of the target with the term.
    #[must_use]
    pub fn find_annotation(
        &self,
        target: &Target<'a>,
        namespace: &str,
        name: &str,
    ) -> Option<&'a Annotation> {
        self.annotations(target)
            .into_iter()
            .find(|a| self.is_term(a, namespace, name))
    }
}

#[cfg(test)]
mod test {
    use super::Model;
    use super::OperationRef;
    use super::SchemaType;
    use super::Target;
    use crate::edmx::Edmx;

    const MODEL: &str = r#"
      <edmx:Edmx Version="4.0">
        <edmx:Reference Uri="http://example.com/vocabularies/capabilities.xml">
          <edmx:Include Namespace="Org.OData.Capabilities.V1" Alias="Cap"/>
        </edmx:Reference>
        <edmx:DataServices>
          <Schema Namespace="Microsoft.Test" Alias="Self">
            <EntityType Name="Person" Abstract="true">
              <Key><PropertyRef Name="Id"/></Key>
              <Property Name="Id" Type="Edm.Int32" Nullable="false"/>
              <Property Name="Address" Type="Self.Address"/>
              <NavigationProperty Name="Friends" Type="Collection(Self.Person)"/>
            </EntityType>
            <EntityType Name="Customer" BaseType="Self.Person">
              <NavigationProperty Name="Orders" Type="Collection(Self.Order)" ContainsTarget="true"/>
            </EntityType>
            <EntityType Name="VipCustomer" BaseType="Self.Customer"/>
            <EntityType Name="Order">
              <Key><PropertyRef Name="Id"/></Key>
              <Property Name="Id" Type="Edm.Guid" Nullable="false"/>
            </EntityType>
            <ComplexType Name="Address">
              <Property Name="Street" Type="Edm.String"/>
            </ComplexType>
            <Action Name="Promote" IsBound="true">
              <Parameter Name="customer" Type="Self.Customer"/>
            </Action>
            <Function Name="Count" IsBound="true">
              <Parameter Name="people" Type="Collection(Self.Person)"/>
              <ReturnType Type="Edm.Int32"/>
            </Function>
            <Function Name="Lookup">
              <Parameter Name="Name" Type="Edm.String"/>
              <ReturnType Type="Self.Person"/>
            </Function>
            <EntityContainer Name="Container">
              <EntitySet Name="People" EntityType="Self.Person">
                <Annotation Term="Cap.TopSupported" Bool="false"/>
              </EntitySet>
              <Singleton Name="Me" Type="Self.Customer"/>
              <FunctionImport Name="Lookup" Function="Self.Lookup"/>
            </EntityContainer>
            <Annotations Target="Self.Container/People">
              <Annotation Term="Org.OData.Core.V1.Description" String="All people"/>
              <Annotation Term="Org.OData.Core.V1.Description" Qualifier="Tablet" String="Ignored"/>
            </Annotations>
          </Schema>
        </edmx:DataServices>
      </edmx:Edmx>"#;

    #[test]
    fn test_index() {
        let docs = vec![Edmx::parse(MODEL).unwrap()];
        let model = Model::build(&docs).unwrap();

        assert_eq!(model.resolve_namespace("Self"), "Microsoft.Test");
        assert_eq!(model.resolve_namespace("Cap"), "Org.OData.Capabilities.V1");
        assert_eq!(model.resolve_namespace("Core"), "Org.OData.Core.V1");
        assert_eq!(
            model.normalize_target("Self.Count(Collection(Self.Person))"),
            "Microsoft.Test.Count(Collection(Microsoft.Test.Person))"
        );

        let sources = model.navigation_sources();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].name(), "People");
        assert!(sources[0].is_entity_set());
        assert_eq!(sources[1].entity_type.name(), "Customer");
        assert_eq!(model.operation_imports().len(), 1);
    }

    #[test]
    fn test_inheritance() {
        let docs = vec![Edmx::parse(MODEL).unwrap()];
        let model = Model::build(&docs).unwrap();
        let person = model.entity_type_by_name("Self.Person").unwrap();
        let customer = model.entity_type_by_name("Microsoft.Test.Customer").unwrap();
        let vip = model.entity_type_by_name("Self.VipCustomer").unwrap();

        assert_eq!(model.base_types(vip), vec![customer, person]);
        assert_eq!(model.all_derived_types(person), vec![customer, vip]);
        assert!(model.is_a(vip, person));
        assert!(!model.is_a(person, vip));
        assert!(model.key(vip).is_some());
        assert_eq!(
            model
                .structural_properties(vip)
                .iter()
                .map(|p| p.name())
                .collect::<Vec<_>>(),
            vec!["Id", "Address"]
        );
        assert_eq!(
            model
                .navigation_properties(vip)
                .iter()
                .map(|p| p.name())
                .collect::<Vec<_>>(),
            vec!["Friends", "Orders"]
        );
        assert!(model.declared_navigation_properties(vip).is_empty());
        assert!(matches!(
            model.resolve_type_name(&model.structural_properties(person)[1].ptype),
            Ok(SchemaType::Complex(_))
        ));
    }

    fn names(ops: &[OperationRef<'_>]) -> Vec<String> {
        ops.iter().map(|op| op.name().to_string()).collect()
    }

    #[test]
    fn test_bound_operations() {
        let docs = vec![Edmx::parse(MODEL).unwrap()];
        let model = Model::build(&docs).unwrap();
        let person = model.entity_type_by_name("Self.Person").unwrap();
        let vip = model.entity_type_by_name("Self.VipCustomer").unwrap();

        assert_eq!(names(&model.bound_operations(vip, false)), vec!["Promote"]);
        assert_eq!(names(&model.bound_operations(vip, true)), vec!["Count"]);
        assert!(model.bound_operations(person, false).is_empty());
    }

    #[test]
    fn test_annotations() {
        let docs = vec![Edmx::parse(MODEL).unwrap()];
        let model = Model::build(&docs).unwrap();
        let people = Target::NavigationSource(model.navigation_sources()[0]);
        let annotations = model.annotations(&people);
        assert_eq!(annotations.len(), 2);
        assert!(model.is_term(annotations[0], "Org.OData.Capabilities.V1", "TopSupported"));
        let description = model
            .find_annotation(&people, "Org.OData.Core.V1", "Description")
            .and_then(|a| a.value.as_ref())
            .and_then(|v| v.as_str());
        assert_eq!(description, Some("All people"));

        let count = model
            .operations()
            .iter()
            .find(|op| op.name() == "Count")
            .copied()
            .unwrap();
        assert_eq!(
            Target::Operation(count).target_paths(&model),
            vec![
                "Microsoft.Test.Count(Collection(Microsoft.Test.Person))".to_string(),
                "Microsoft.Test.Count".to_string()
            ]
        );
    }

    #[test]
    fn test_missing_entity_type() {
        let data = r#"
          <edmx:Edmx Version="4.0">
            <edmx:DataServices>
              <Schema Namespace="NS">
                <EntityContainer Name="Container">
                  <EntitySet Name="Things" EntityType="NS.Thing"/>
                </EntityContainer>
              </Schema>
            </edmx:DataServices>
          </edmx:Edmx>"#;
        let docs = vec![Edmx::parse(data).unwrap()];
        assert!(Model::build(&docs).is_err());
    }
}
