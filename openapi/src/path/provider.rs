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

//! Generation of all resource paths of a model.
//!
//! Traversal starts at every entity set and singleton and walks the
//! navigation graph depth-first. A navigation edge
//! (`DeclaringType/Property`) that is already on the current chain is
//! not expanded again, only containment navigation is expanded
//! recursively and `Capabilities.ExpandRestrictions/MaxLevels` of the
//! navigation source caps the nesting. Bound operations are appended
//! to the generated paths once the traversal is finished.
//!
//! Paths are de-duplicated by their rendered template. The first
//! generated path wins.

use crate::edm::edmx::TypeName;
use crate::edm::model::EntityTypeRef;
use crate::edm::model::NavigationPropertyRef;
use crate::edm::model::NavigationSource;
use crate::edm::model::OperationRef;
use crate::edm::model::SchemaType;
use crate::edm::model::Target;
use crate::edm::Model;
use crate::path::segment::ComplexPropertySegment;
use crate::path::segment::KeySegment;
use crate::path::segment::NavigationPropertySegment;
use crate::path::segment::OperationSegment;
use crate::path::segment::StructuredType;
use crate::path::ODataPath;
use crate::path::ODataPathKind;
use crate::path::Segment;
use crate::settings::Settings;
use crate::vocabulary::capabilities::CountRestrictions;
use crate::vocabulary::capabilities::ExpandRestrictions;
use crate::vocabulary::capabilities::InsertRestrictions;
use crate::vocabulary::capabilities::NavigationPropertyRestriction;
use crate::vocabulary::capabilities::NavigationRestrictions;
use crate::vocabulary::capabilities::NavigationType;
use crate::vocabulary::capabilities::ReadRestrictions;
use crate::vocabulary::capabilities::UpdateRestrictions;
use crate::vocabulary::capabilities::INDEXABLE_BY_KEY;
use crate::vocabulary::core::alternate_keys;
use crate::vocabulary::core::explicit_operation_bindings;
use crate::vocabulary::core::is_url_escape_function;
use crate::vocabulary::resolve;
use crate::vocabulary::tag;
use crate::vocabulary::term;
use crate::vocabulary::validation::derived_type_constraint;
use crate::vocabulary::CAPABILITIES;
use crate::Error;
use indexmap::map::Entry;
use indexmap::IndexMap;
use tracing::debug;
use tracing::info;

/// Restrictions of the navigation source being expanded.
struct SourceContext {
    navigation: Option<NavigationRestrictions>,
    count: Option<CountRestrictions>,
    max_levels: Option<usize>,
}

impl SourceContext {
    fn restricted_property(&self, path: &str) -> Option<&NavigationPropertyRestriction> {
        self.navigation
            .as_ref()
            .and_then(|r| r.restricted_property(path))
    }
}

/// Navigation restrictions that apply to one navigation property.
struct NavigationRules<'r> {
    /// Entry of `RestrictedProperties` of the navigation source.
    entry: Option<&'r NavigationPropertyRestriction>,
    /// Annotation of the navigation property itself.
    property: Option<NavigationRestrictions>,
    /// Property path relative to the navigation source.
    path: String,
}

pub struct PathProvider<'m, 'a> {
    model: &'m Model<'a>,
    settings: &'m Settings,
    paths: IndexMap<String, ODataPath<'a>>,
    /// Navigation edges of the path being expanded.
    visited: Vec<String>,
}

impl<'m, 'a> PathProvider<'m, 'a> {
    #[must_use]
    pub fn new(model: &'m Model<'a>, settings: &'m Settings) -> Self {
        Self {
            model,
            settings,
            paths: IndexMap::new(),
            visited: Vec::new(),
        }
    }

    /// Generate all paths of the model.
    ///
    /// # Errors
    ///
    /// Returns error if any segment cannot be built (entity type
    /// without key, navigation property with unresolvable target, ...).
    pub fn paths(mut self) -> Result<Vec<ODataPath<'a>>, Error> {
        let model = self.model;
        let settings = self.settings;
        info!(
            sources = model.navigation_sources().len(),
            "generating paths"
        );
        for source in model.navigation_sources() {
            self.navigation_source(*source)
                .map_err(|e| Error::Path(source.name().into(), Box::new(e)))?;
        }
        if settings.enable_operation_path {
            self.bound_operations()?;
        }
        if settings.enable_operation_import_path {
            for import in model.operation_imports() {
                self.add(&ODataPath::new(Segment::OperationImport(*import)));
            }
        }
        info!(paths = self.paths.len(), "paths generated");
        Ok(self.paths.into_values().collect())
    }

    fn add(&mut self, path: &ODataPath<'a>) {
        match self.paths.entry(path.name(self.settings)) {
            Entry::Occupied(e) => debug!(path = e.key(), "path is already generated"),
            Entry::Vacant(e) => {
                e.insert(path.clone());
            }
        }
    }

    fn navigation_source(&mut self, source: NavigationSource<'a>) -> Result<(), Error> {
        let model = self.model;
        let settings = self.settings;
        let entity_type = source.entity_type;
        let specific = Target::NavigationSource(source);
        let general = Target::EntityType(entity_type);
        let context = SourceContext {
            navigation: resolve(model, &specific, &general),
            count: resolve(model, &specific, &general),
            max_levels: resolve::<ExpandRestrictions>(model, &specific, &general)
                .and_then(|r| r.levels_limit()),
        };
        let constraint = derived_type_constraint(model, &specific);

        let mut path = ODataPath::new(Segment::NavigationSource(source));
        self.add(&path);
        if !source.is_entity_set() {
            return self.entity(&mut path, &context, entity_type, constraint.as_deref(), true);
        }

        let countable = context
            .count
            .as_ref()
            .is_none_or(CountRestrictions::is_countable);
        if settings.enable_dollar_count_path && countable {
            self.add(&path.with(Segment::DollarCount));
        }
        self.type_casts(&mut path, &context, entity_type, true, constraint.as_deref(), true)?;

        let indexable = tag(model, &specific, CAPABILITIES, INDEXABLE_BY_KEY)
            .or_else(|| tag(model, &general, CAPABILITIES, INDEXABLE_BY_KEY))
            .unwrap_or(true);
        if !indexable {
            debug!(source = source.name(), "entity set is not indexable by key");
            return Ok(());
        }
        path.push(Segment::Key(KeySegment::new(model, entity_type)?));
        self.add(&path);
        self.entity(&mut path, &context, entity_type, constraint.as_deref(), true)?;
        path.pop()?;

        if settings.add_alternate_key_paths {
            let mut keys = alternate_keys(model, &specific);
            if keys.is_empty() {
                keys = alternate_keys(model, &general);
            }
            for key in keys {
                let segment = KeySegment::alternate(model, entity_type, &key)?;
                self.add(&path.with(Segment::Key(segment)));
            }
        }
        Ok(())
    }

    /// Expand single entity location.
    fn entity(
        &mut self,
        path: &mut ODataPath<'a>,
        context: &SourceContext,
        entity_type: EntityTypeRef<'a>,
        constraint: Option<&[String]>,
        expand_navigation: bool,
    ) -> Result<(), Error> {
        let model = self.model;
        self.streams(path, entity_type);
        self.complex_properties(path, context, entity_type)?;
        self.type_casts(path, context, entity_type, false, constraint, expand_navigation)?;
        if expand_navigation && self.settings.enable_navigation_property_path {
            for nav in model.navigation_properties(entity_type) {
                self.navigation_property(path, context, nav)?;
            }
        }
        Ok(())
    }

    fn streams(&mut self, path: &ODataPath<'a>, entity_type: EntityTypeRef<'a>) {
        let model = self.model;
        let properties = model.structural_properties(entity_type);
        let has_stream = entity_type.has_stream
            || model
                .base_types(entity_type)
                .iter()
                .any(|base| base.has_stream);
        if has_stream && !properties.iter().any(|p| p.name() == "content") {
            self.add(&path.with(Segment::StreamContent));
        }
        for property in properties.into_iter().filter(|p| is_stream(&p.ptype)) {
            self.add(&path.with(Segment::StreamProperty(property)));
        }
    }

    fn complex_properties(
        &mut self,
        path: &mut ODataPath<'a>,
        context: &SourceContext,
        entity_type: EntityTypeRef<'a>,
    ) -> Result<(), Error> {
        let model = self.model;
        let settings = self.settings;
        for property in model.structural_properties(entity_type) {
            let SchemaType::Complex(complex_type) = model.resolve_type_name(&property.ptype)?
            else {
                continue;
            };
            let target = Target::StructuralProperty(property);
            if settings.require_restriction_annotations_to_generate_complex_property_paths
                && !self.has_complex_restrictions(&target)
            {
                continue;
            }
            let segment = ComplexPropertySegment {
                property,
                complex_type,
            };
            path.push(Segment::ComplexProperty(segment));
            self.add(path);
            if segment.is_collection() {
                let property_path = path.property_path(settings);
                let countable = !context
                    .count
                    .as_ref()
                    .is_some_and(|c| c.is_non_countable_property(&property_path))
                    && term::<CountRestrictions>(model, &target)
                        .is_none_or(|c| c.is_countable());
                if settings.enable_dollar_count_path && countable {
                    self.add(&path.with(Segment::DollarCount));
                }
            } else if settings.enable_odata_type_cast {
                let constraint = derived_type_constraint(model, &target);
                for derived in model.all_derived_complex_types(complex_type) {
                    let cast = StructuredType::Complex(derived);
                    if self.cast_allowed(&cast, constraint.as_deref()) && !path.has_type_cast(&cast)
                    {
                        self.add(&path.with(Segment::TypeCast(cast)));
                    }
                }
            }
            path.pop()?;
        }
        Ok(())
    }

    fn has_complex_restrictions(&self, target: &Target<'a>) -> bool {
        let model = self.model;
        term::<ReadRestrictions>(model, target).is_some_and(|r| r.is_readable())
            || term::<UpdateRestrictions>(model, target).is_some_and(|r| r.is_updatable())
            || term::<InsertRestrictions>(model, target).is_some_and(|r| r.is_insertable())
    }

    fn cast_allowed(&self, cast: &StructuredType<'a>, constraint: Option<&[String]>) -> bool {
        !self
            .settings
            .require_derived_types_constraint_for_odata_type_cast_segments
            || constraint.is_some_and(|types| types.contains(&cast.full_name()))
    }

    /// Casts of the current location to derived types.
    fn type_casts(
        &mut self,
        path: &mut ODataPath<'a>,
        context: &SourceContext,
        entity_type: EntityTypeRef<'a>,
        collection: bool,
        constraint: Option<&[String]>,
        expand_navigation: bool,
    ) -> Result<(), Error> {
        let model = self.model;
        let settings = self.settings;
        if !settings.enable_odata_type_cast {
            return Ok(());
        }
        for derived in model.all_derived_types(entity_type) {
            let cast = StructuredType::Entity(derived);
            if !self.cast_allowed(&cast, constraint) || path.has_type_cast(&cast) {
                continue;
            }
            path.push(Segment::TypeCast(cast));
            self.add(path);
            if collection {
                if settings.enable_dollar_count_path {
                    self.add(&path.with(Segment::DollarCount));
                }
            } else if expand_navigation
                && settings.generate_derived_types_properties
                && settings.enable_navigation_property_path
            {
                for nav in model.declared_navigation_properties(derived) {
                    self.navigation_property(path, context, nav)?;
                }
            }
            path.pop()?;
        }
        Ok(())
    }

    fn navigation_property(
        &mut self,
        path: &mut ODataPath<'a>,
        context: &SourceContext,
        nav: NavigationPropertyRef<'a>,
    ) -> Result<(), Error> {
        let model = self.model;
        let edge = nav.target_path();
        if self.visited.contains(&edge) {
            return Ok(());
        }
        let segment = NavigationPropertySegment::new(model, nav)?;
        path.push(Segment::NavigationProperty(segment));
        let property_path = path.property_path(self.settings);
        let rules = NavigationRules {
            entry: context.restricted_property(&property_path),
            property: term(model, &Target::NavigationProperty(nav)),
            path: property_path,
        };
        let navigability = rules
            .entry
            .and_then(|e| e.navigability)
            .or_else(|| rules.property.as_ref().and_then(|r| r.navigability))
            .or_else(|| context.navigation.as_ref().and_then(|r| r.navigability));
        if navigability == Some(NavigationType::None) {
            debug!(path = rules.path, "navigation property is not navigable");
            path.pop()?;
            return Ok(());
        }

        self.visited.push(edge);
        let result = self.navigation_target(path, context, segment, &rules);
        self.visited.pop();
        path.pop()?;
        result
    }

    fn navigation_target(
        &mut self,
        path: &mut ODataPath<'a>,
        context: &SourceContext,
        segment: NavigationPropertySegment<'a>,
        rules: &NavigationRules<'_>,
    ) -> Result<(), Error> {
        let model = self.model;
        let settings = self.settings;
        let target = segment.target;
        let annotated = Target::NavigationProperty(segment.property);
        let constraint = derived_type_constraint(model, &annotated);
        let referenceable = rules
            .entry
            .and_then(|e| e.referenceable)
            .or_else(|| rules.property.as_ref().and_then(|r| r.referenceable))
            .or_else(|| context.navigation.as_ref().and_then(|r| r.referenceable))
            == Some(true);
        let expand_navigation = segment.is_contained()
            && context
                .max_levels
                .is_none_or(|max| path.navigation_depth() < max);

        self.add(path);
        if referenceable {
            self.add(&path.with(Segment::Ref));
        }
        if !segment.is_collection() {
            return self.entity(path, context, target, constraint.as_deref(), expand_navigation);
        }

        if settings.enable_dollar_count_path && self.navigation_countable(context, segment, rules) {
            self.add(&path.with(Segment::DollarCount));
        }
        self.type_casts(path, context, target, true, constraint.as_deref(), false)?;
        let indexable = rules.entry.and_then(|e| e.indexable_by_key) != Some(false);
        if indexable && model.key(target).is_some() {
            path.push(Segment::Key(KeySegment::new(model, target)?));
            self.add(path);
            if referenceable {
                self.add(&path.with(Segment::Ref));
            }
            self.entity(path, context, target, constraint.as_deref(), expand_navigation)?;
            path.pop()?;
        }
        Ok(())
    }

    fn navigation_countable(
        &self,
        context: &SourceContext,
        segment: NavigationPropertySegment<'a>,
        rules: &NavigationRules<'_>,
    ) -> bool {
        let listed = context
            .count
            .as_ref()
            .is_some_and(|c| c.is_non_countable_navigation_property(&rules.path));
        let entry = rules
            .entry
            .and_then(|e| e.count_restrictions.as_ref())
            .is_none_or(CountRestrictions::is_countable);
        let target = Target::NavigationProperty(segment.property);
        let property = term::<CountRestrictions>(self.model, &target)
            .is_none_or(|c| c.is_countable());
        !listed && entry && property
    }

    /// Append bound operations to the generated paths.
    fn bound_operations(&mut self) -> Result<(), Error> {
        let model = self.model;
        let on_casts = self
            .settings
            .append_bound_operations_on_derived_type_cast_segments;
        let candidates = self
            .paths
            .values()
            .filter(|path| is_binding_candidate(path, on_casts))
            .cloned()
            .collect::<Vec<_>>();
        for path in candidates {
            let Some(entity_type) = path.target_entity_type() else {
                continue;
            };
            let is_cast = path.kind() == ODataPathKind::TypeCast;
            if is_cast && !self.cast_binding_allowed(&path, entity_type) {
                continue;
            }
            self.operations_of(&path, entity_type)?;
            if !on_casts || is_cast {
                continue;
            }
            for derived in model.all_derived_types(entity_type) {
                if self.cast_binding_allowed(&path, derived) {
                    let cast = path.with(Segment::TypeCast(StructuredType::Entity(derived)));
                    self.operations_of(&cast, derived)?;
                }
            }
        }
        Ok(())
    }

    /// Append operations bound to the type (or to its base types) of
    /// the path.
    fn operations_of(
        &mut self,
        path: &ODataPath<'a>,
        entity_type: EntityTypeRef<'a>,
    ) -> Result<(), Error> {
        let model = self.model;
        for operation in model.bound_operations(entity_type, path.is_collection()) {
            if self.binding_allowed(entity_type, operation) {
                self.operation(path, operation)?;
            }
        }
        Ok(())
    }

    fn cast_binding_allowed(&self, path: &ODataPath<'a>, derived: EntityTypeRef<'a>) -> bool {
        !self
            .settings
            .require_derived_types_constraint_for_bound_operations
            || self
                .path_constraint(path)
                .is_some_and(|types| types.contains(&derived.full_name()))
    }

    fn operation(
        &mut self,
        path: &ODataPath<'a>,
        operation: OperationRef<'a>,
    ) -> Result<(), Error> {
        let settings = self.settings;
        let escaped = settings.enable_uri_escape_function_call
            && OperationSegment::is_escapable(operation)
            && is_url_escape_function(self.model, &Target::Operation(operation));
        let segment = if escaped {
            OperationSegment::escaped(operation)?
        } else {
            OperationSegment::new(operation)?
        };
        let path = path.with(Segment::Operation(segment));
        self.add(&path);
        let returns_collection = operation
            .return_type
            .as_ref()
            .is_some_and(|r| r.rtype.is_collection());
        if operation.is_function() && returns_collection && settings.enable_dollar_count_path {
            self.add(&path.with(Segment::DollarCount));
        }
        Ok(())
    }

    /// `Core.ExplicitOperationBindings` of the binding type lists the
    /// operation (or is absent).
    fn binding_allowed(
        &self,
        binding_type: EntityTypeRef<'a>,
        operation: OperationRef<'a>,
    ) -> bool {
        let model = self.model;
        explicit_operation_bindings(model, &Target::EntityType(binding_type)).is_none_or(|names| {
            names
                .iter()
                .any(|name| model.normalize_target(name) == operation.full_name())
        })
    }

    /// Derived type constraint of the last navigation property of the
    /// path or of its navigation source.
    fn path_constraint(&self, path: &ODataPath<'a>) -> Option<Vec<String>> {
        let target = path.segments().iter().rev().find_map(|s| match s {
            Segment::NavigationProperty(v) => Some(Target::NavigationProperty(v.property)),
            Segment::NavigationSource(v) => Some(Target::NavigationSource(*v)),
            _ => None,
        })?;
        derived_type_constraint(self.model, &target)
    }
}

fn is_stream(tname: &TypeName) -> bool {
    let qname = tname.qualified_type_name().inner();
    !tname.is_collection() && qname.namespace.is_edm() && qname.name.inner() == "Stream"
}

/// Bound operations are appended to entity sets, entities, singletons
/// and containment navigation. With `on_casts` also to entity type
/// casts of these paths.
fn is_binding_candidate(path: &ODataPath<'_>, on_casts: bool) -> bool {
    match path.kind() {
        ODataPathKind::EntitySet | ODataPathKind::Entity | ODataPathKind::Singleton => true,
        ODataPathKind::TypeCast if on_casts => {
            let mut parent = path.clone();
            matches!(
                parent.pop(),
                Ok(Segment::TypeCast(StructuredType::Entity(_)))
            ) && is_binding_candidate(&parent, false)
        }
        ODataPathKind::NavigationProperty => path
            .segments()
            .iter()
            .rev()
            .find_map(|s| match s {
                Segment::NavigationProperty(v) => Some(v.is_contained()),
                _ => None,
            })
            .unwrap_or(false),
        _ => false,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::edm::Edmx;
    use pretty_assertions::assert_eq;

    fn names(csdl: &str, settings: &Settings) -> Vec<String> {
        let docs = vec![Edmx::parse(csdl).unwrap()];
        let model = Model::build(&docs).unwrap();
        let mut names = PathProvider::new(&model, settings)
            .paths()
            .unwrap()
            .iter()
            .map(|path| path.name(settings))
            .collect::<Vec<_>>();
        names.sort();
        names
    }

    fn csdl(types: &str, source: &str) -> String {
        format!(
            r#"<edmx:Edmx Version="4.0">
                 <edmx:DataServices>
                   <Schema Namespace="NS">
                     {types}
                     <EntityContainer Name="Container">{source}</EntityContainer>
                   </Schema>
                 </edmx:DataServices>
               </edmx:Edmx>"#
        )
    }

    #[test]
    fn test_containment_cycle() {
        let types = r#"
            <EntityType Name="Person">
              <Key><PropertyRef Name="ID"/></Key>
              <Property Name="ID" Type="Edm.Int32" Nullable="false"/>
              <NavigationProperty Name="Friends" Type="Collection(NS.Person)"
                                  ContainsTarget="true"/>
            </EntityType>"#;
        let csdl = csdl(types, r#"<EntitySet Name="People" EntityType="NS.Person"/>"#);
        assert_eq!(
            names(&csdl, &Settings::default()),
            vec![
                "/People",
                "/People({ID})",
                "/People({ID})/Friends",
                "/People({ID})/Friends({ID1})",
                "/People({ID})/Friends/$count",
                "/People/$count",
            ]
        );
    }

    #[test]
    fn test_max_levels() {
        let types = r#"
            <EntityType Name="Person">
              <Key><PropertyRef Name="ID"/></Key>
              <Property Name="ID" Type="Edm.Int32" Nullable="false"/>
              <NavigationProperty Name="Cars" Type="Collection(NS.Car)" ContainsTarget="true"/>
            </EntityType>
            <EntityType Name="Car">
              <Key><PropertyRef Name="ID"/></Key>
              <Property Name="ID" Type="Edm.Int32" Nullable="false"/>
              <NavigationProperty Name="Wheels" Type="Collection(NS.Wheel)" ContainsTarget="true"/>
            </EntityType>
            <EntityType Name="Wheel">
              <Key><PropertyRef Name="ID"/></Key>
              <Property Name="ID" Type="Edm.Int32" Nullable="false"/>
            </EntityType>"#;
        let unlimited = names(
            &csdl(types, r#"<EntitySet Name="People" EntityType="NS.Person"/>"#),
            &Settings::default(),
        );
        assert!(unlimited.contains(&"/People({ID})/Cars({ID1})/Wheels({ID2})".to_string()));

        let limited = names(
            &csdl(
                types,
                r#"<EntitySet Name="People" EntityType="NS.Person">
                     <Annotation Term="Org.OData.Capabilities.V1.ExpandRestrictions">
                       <Record>
                         <PropertyValue Property="MaxLevels" Int="1"/>
                       </Record>
                     </Annotation>
                   </EntitySet>"#,
            ),
            &Settings::default(),
        );
        assert!(limited.contains(&"/People({ID})/Cars({ID1})".to_string()));
        assert!(!limited.iter().any(|name| name.contains("Wheels")));
    }

    #[test]
    fn test_type_casts() {
        let types = r#"
            <EntityType Name="Customer">
              <Key><PropertyRef Name="ID"/></Key>
              <Property Name="ID" Type="Edm.Int32" Nullable="false"/>
            </EntityType>
            <EntityType Name="VipCustomer" BaseType="NS.Customer"/>"#;
        let constrained = r#"
            <EntitySet Name="Customers" EntityType="NS.Customer">
              <Annotation Term="Org.OData.Validation.V1.DerivedTypeConstraint">
                <Collection><String>NS.VipCustomer</String></Collection>
              </Annotation>
            </EntitySet>"#;
        let plain = r#"<EntitySet Name="Customers" EntityType="NS.Customer"/>"#;
        let casts = [
            "/Customers/NS.VipCustomer",
            "/Customers/NS.VipCustomer/$count",
            "/Customers({ID})/NS.VipCustomer",
        ];

        let paths = names(&csdl(types, constrained), &Settings::default());
        assert!(casts.iter().all(|cast| paths.contains(&cast.to_string())));

        let paths = names(&csdl(types, plain), &Settings::default());
        assert!(!paths.iter().any(|name| name.contains("VipCustomer")));

        let settings = Settings {
            require_derived_types_constraint_for_odata_type_cast_segments: false,
            ..Settings::default()
        };
        let paths = names(&csdl(types, plain), &settings);
        assert!(casts.iter().all(|cast| paths.contains(&cast.to_string())));
    }

    #[test]
    fn test_missing_key() {
        let types = r#"
            <EntityType Name="Note">
              <Property Name="Text" Type="Edm.String"/>
            </EntityType>"#;
        let csdl = csdl(types, r#"<EntitySet Name="Notes" EntityType="NS.Note"/>"#);
        let docs = vec![Edmx::parse(&csdl).unwrap()];
        let model = Model::build(&docs).unwrap();
        let result = PathProvider::new(&model, &Settings::default()).paths();
        assert!(matches!(result, Err(Error::Path(name, _)) if name == "Notes"));
    }
}
