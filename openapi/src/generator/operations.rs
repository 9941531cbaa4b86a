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

//! Operations of the path items.
//!
//! The HTTP methods of a path item depend on the kind of the path and
//! on the capabilities restrictions that apply to the addressed
//! resource. Restrictions of a navigation property are taken from the
//! `RestrictedProperties` of the navigation source first, then from
//! the annotations of the property and its target type.

use crate::edm::edmx::TypeName;
use crate::edm::model::EntityTypeRef;
use crate::edm::model::Target;
use crate::edm::Model;
use crate::generator::parameters;
use crate::generator::parameters::query_ref;
use crate::generator::parameters::COUNT;
use crate::generator::parameters::FILTER;
use crate::generator::parameters::SEARCH;
use crate::generator::parameters::SKIP;
use crate::generator::parameters::TOP;
use crate::generator::responses::created;
use crate::generator::responses::no_content;
use crate::generator::responses::ok;
use crate::generator::responses::request_body;
use crate::generator::responses::request_body_ref;
use crate::generator::responses::JSON;
use crate::generator::responses::OCTET_STREAM;
use crate::generator::responses::REF_POST_BODY;
use crate::generator::responses::REF_PUT_BODY;
use crate::generator::responses::TEXT_PLAIN;
use crate::generator::schema::binary;
use crate::generator::schema::count;
use crate::generator::schema::object;
use crate::generator::schema::schema_ref;
use crate::generator::schema::string;
use crate::generator::schema::SchemaGenerator;
use crate::path::segment::NavigationPropertySegment;
use crate::path::segment::ParameterSource;
use crate::path::segment::PathParameter;
use crate::path::segment::StructuredType;
use crate::path::ODataPath;
use crate::path::ODataPathKind;
use crate::path::RenderedPath;
use crate::path::Segment;
use crate::settings::Settings;
use crate::vocabulary::capabilities::CountRestrictions;
use crate::vocabulary::capabilities::CustomParameter;
use crate::vocabulary::capabilities::DeleteRestrictions;
use crate::vocabulary::capabilities::ExpandRestrictions;
use crate::vocabulary::capabilities::FilterRestrictions;
use crate::vocabulary::capabilities::InsertRestrictions;
use crate::vocabulary::capabilities::NavigationPropertyRestriction;
use crate::vocabulary::capabilities::NavigationRestrictions;
use crate::vocabulary::capabilities::OperationRestrictions;
use crate::vocabulary::capabilities::ReadRestrictions;
use crate::vocabulary::capabilities::SearchRestrictions;
use crate::vocabulary::capabilities::SortRestrictions;
use crate::vocabulary::capabilities::UpdateRestrictions;
use crate::vocabulary::capabilities::SKIP_SUPPORTED;
use crate::vocabulary::capabilities::TOP_SUPPORTED;
use crate::vocabulary::core::description;
use crate::vocabulary::core::long_description;
use crate::vocabulary::resolve;
use crate::vocabulary::tag;
use crate::vocabulary::term;
use crate::vocabulary::Merge as _;
use crate::vocabulary::CAPABILITIES;
use crate::Error;
use indexmap::IndexMap;
use openapiv3::Operation;
use openapiv3::Parameter;
use openapiv3::PathItem;
use openapiv3::ReferenceOr;
use openapiv3::Schema;
use openapiv3::Tag;
use std::collections::HashMap;

/// Restrictions of the resource addressed by a path.
#[derive(Debug, Default)]
struct Restrictions {
    read: Option<ReadRestrictions>,
    insert: Option<InsertRestrictions>,
    update: Option<UpdateRestrictions>,
    delete: Option<DeleteRestrictions>,
    count: Option<CountRestrictions>,
    filter: Option<FilterRestrictions>,
    sort: Option<SortRestrictions>,
    search: Option<SearchRestrictions>,
    expand: Option<ExpandRestrictions>,
    top_supported: Option<bool>,
    skip_supported: Option<bool>,
}

impl Restrictions {
    fn resolve<'a>(
        model: &Model<'a>,
        specific: &Target<'a>,
        general: &Target<'a>,
        entry: Option<&NavigationPropertyRestriction>,
    ) -> Self {
        let supported = |name: &str| {
            tag(model, specific, CAPABILITIES, name)
                .or_else(|| tag(model, general, CAPABILITIES, name))
        };
        Self {
            read: entry
                .and_then(|e| e.read_restrictions.clone())
                .merge(resolve(model, specific, general)),
            insert: entry
                .and_then(|e| e.insert_restrictions.clone())
                .merge(resolve(model, specific, general)),
            update: entry
                .and_then(|e| e.update_restrictions.clone())
                .merge(resolve(model, specific, general)),
            delete: entry
                .and_then(|e| e.delete_restrictions.clone())
                .merge(resolve(model, specific, general)),
            count: entry
                .and_then(|e| e.count_restrictions.clone())
                .merge(resolve(model, specific, general)),
            filter: entry
                .and_then(|e| e.filter_restrictions.clone())
                .merge(resolve(model, specific, general)),
            sort: entry
                .and_then(|e| e.sort_restrictions.clone())
                .merge(resolve(model, specific, general)),
            search: entry
                .and_then(|e| e.search_restrictions.clone())
                .merge(resolve(model, specific, general)),
            expand: resolve(model, specific, general),
            top_supported: entry
                .and_then(|e| e.top_supported)
                .or_else(|| supported(TOP_SUPPORTED)),
            skip_supported: entry
                .and_then(|e| e.skip_supported)
                .or_else(|| supported(SKIP_SUPPORTED)),
        }
    }

    fn is_readable(&self) -> bool {
        self.read.as_ref().is_none_or(ReadRestrictions::is_readable)
    }

    fn is_readable_by_key(&self) -> bool {
        self.read.as_ref().is_none_or(|r| r.by_key().is_readable())
    }

    fn is_insertable(&self) -> bool {
        self.insert.as_ref().is_none_or(InsertRestrictions::is_insertable)
    }

    fn is_updatable(&self) -> bool {
        self.update.as_ref().is_none_or(UpdateRestrictions::is_updatable)
    }

    fn is_deletable(&self) -> bool {
        self.delete.as_ref().is_none_or(DeleteRestrictions::is_deletable)
    }
}

/// Tag and restrictions of the path being generated.
struct Context {
    tag: String,
    restrictions: Restrictions,
}

fn custom(
    headers: &[CustomParameter],
    query_options: &[CustomParameter],
) -> Vec<ReferenceOr<Parameter>> {
    headers
        .iter()
        .map(|p| parameters::custom(p, true))
        .chain(query_options.iter().map(|p| parameters::custom(p, false)))
        .map(ReferenceOr::Item)
        .collect()
}

/// Override generated summary with descriptions of the restriction.
fn describe(operation: &mut Operation, summary: Option<&String>, description: Option<&String>) {
    if let Some(summary) = summary {
        operation.summary = Some(summary.clone());
    }
    if let Some(description) = description {
        operation.description = Some(description.clone());
    }
}

fn last_navigation<'a>(path: &ODataPath<'a>) -> Option<NavigationPropertySegment<'a>> {
    path.segments().iter().rev().find_map(|s| match s {
        Segment::NavigationProperty(v) => Some(*v),
        _ => None,
    })
}

pub struct OperationGenerator<'m, 'a> {
    model: &'m Model<'a>,
    settings: &'m Settings,
    schemas: SchemaGenerator<'m, 'a>,
    operation_ids: HashMap<String, usize>,
    tags: IndexMap<String, Tag>,
    /// Collection response schemas: name to item type name.
    collections: IndexMap<String, String>,
}

impl<'m, 'a> OperationGenerator<'m, 'a> {
    #[must_use]
    pub fn new(model: &'m Model<'a>, settings: &'m Settings) -> Self {
        Self {
            model,
            settings,
            schemas: SchemaGenerator::new(model, settings),
            operation_ids: HashMap::new(),
            tags: IndexMap::new(),
            collections: IndexMap::new(),
        }
    }

    /// Tags of all generated operations.
    #[must_use]
    pub fn tags(&self) -> Vec<Tag> {
        self.tags.values().cloned().collect()
    }

    /// Collection response schemas referenced by the generated
    /// operations.
    #[must_use]
    pub fn collection_schemas(&self) -> IndexMap<String, ReferenceOr<Schema>> {
        self.collections
            .iter()
            .map(|(name, item)| {
                let schema = self.schemas.collection(schema_ref(item));
                (name.clone(), ReferenceOr::Item(schema))
            })
            .collect()
    }

    /// Path item with all operations legal for the path.
    ///
    /// # Errors
    ///
    /// Returns error if a schema of a parameter, request or response
    /// cannot be built.
    pub fn path_item(
        &mut self,
        path: &ODataPath<'a>,
        rendered: &RenderedPath<'a>,
    ) -> Result<PathItem, Error> {
        let context = Context {
            tag: self.tag(path),
            restrictions: self.restrictions(path),
        };
        self.tags
            .entry(context.tag.clone())
            .or_insert_with(|| Tag {
                name: context.tag.clone(),
                ..Tag::default()
            });
        let mut item = PathItem::default();
        let source = path.first().map_or("", Segment::identifier);
        match path.kind() {
            ODataPathKind::EntitySet => self.collection(&mut item, path, &context, source, true),
            ODataPathKind::Entity => {
                self.entity(&mut item, path, &context, source, (true, true))?;
            }
            ODataPathKind::Singleton => {
                self.entity(&mut item, path, &context, source, (true, false))?;
            }
            ODataPathKind::NavigationProperty => self.navigation(&mut item, path, &context)?,
            ODataPathKind::Ref => self.reference(&mut item, path, &context),
            ODataPathKind::DollarCount => self.count(&mut item, path, &context),
            ODataPathKind::MediaEntity => self.media(&mut item, path, &context),
            ODataPathKind::ComplexProperty => self.complex_property(&mut item, path, &context)?,
            ODataPathKind::TypeCast => self.type_cast(&mut item, path, &context),
            ODataPathKind::Operation | ODataPathKind::OperationImport => {
                self.invoke(&mut item, path, &context)?;
            }
            ODataPathKind::Unknown => {}
        }
        item.parameters = rendered
            .parameters
            .iter()
            .map(|p| self.path_parameter(p))
            .collect::<Result<_, _>>()?;
        Ok(item)
    }

    fn target(&self, path: &ODataPath<'a>) -> Result<EntityTypeRef<'a>, Error> {
        path.target_entity_type().ok_or_else(|| {
            Error::Unsupported(format!(
                "path {} without entity type",
                path.name(self.settings)
            ))
        })
    }

    /// Tag of the path: names of the navigation source and navigation
    /// properties limited by `tag_depth`.
    fn tag(&self, path: &ODataPath<'a>) -> String {
        let mut names = path
            .segments()
            .iter()
            .filter(|s| {
                matches!(
                    s,
                    Segment::NavigationSource(_)
                        | Segment::NavigationProperty(_)
                        | Segment::OperationImport(_)
                )
            })
            .map(Segment::identifier)
            .collect::<Vec<_>>();
        if let (1, Some(Segment::NavigationSource(source))) = (names.len(), path.first()) {
            names.push(source.entity_type.name());
        }
        names.truncate(self.settings.tag_depth.max(1));
        names.join(".")
    }

    fn restrictions(&self, path: &ODataPath<'a>) -> Restrictions {
        let model = self.model;
        let Some(Segment::NavigationSource(source)) = path.first() else {
            return Restrictions::default();
        };
        let source_target = Target::NavigationSource(*source);
        let source_type = Target::EntityType(source.entity_type);
        let Some(nav) = last_navigation(path) else {
            return Restrictions::resolve(model, &source_target, &source_type, None);
        };
        let navigation = resolve::<NavigationRestrictions>(model, &source_target, &source_type);
        let entry = path
            .navigation_property_path(self.settings)
            .and_then(|p| navigation.as_ref()?.restricted_property(&p).cloned());
        Restrictions::resolve(
            model,
            &Target::NavigationProperty(nav.property),
            &Target::EntityType(nav.target),
            entry.as_ref(),
        )
    }

    fn operation(
        &mut self,
        context: &Context,
        verb: &str,
        subject: &str,
        summary: String,
    ) -> Operation {
        let operation_id = self
            .settings
            .enable_operation_id
            .then(|| self.operation_id(&format!("{}.{verb}{subject}", context.tag)));
        Operation {
            tags: vec![context.tag.clone()],
            summary: Some(summary),
            operation_id,
            ..Operation::default()
        }
    }

    /// Unique operation id. Repeated ids get numeric suffix.
    fn operation_id(&mut self, base: &str) -> String {
        let n = self.operation_ids.entry(base.to_string()).or_insert(0);
        let id = if *n == 0 {
            base.to_string()
        } else {
            format!("{base}-{n}")
        };
        *n += 1;
        id
    }

    fn collection_ref(&mut self, et: EntityTypeRef<'a>) -> ReferenceOr<Schema> {
        let name = format!("{}CollectionResponse", et.full_name());
        self.collections
            .entry(name.clone())
            .or_insert_with(|| et.full_name());
        schema_ref(&name)
    }

    /// `GET` and `POST` of a collection of entities.
    fn collection(
        &mut self,
        item: &mut PathItem,
        path: &ODataPath<'a>,
        context: &Context,
        subject: &str,
        insert: bool,
    ) {
        let Some(et) = path.target_entity_type() else {
            return;
        };
        let r = &context.restrictions;
        if r.is_readable() {
            let summary = format!("Get entities from {subject}");
            let mut op = self.operation(context, "List", subject, summary);
            op.parameters = self.collection_query(et, r);
            if let Some(read) = &r.read {
                let base = &read.base;
                op.parameters
                    .extend(custom(&base.custom_headers, &base.custom_query_options));
                describe(&mut op, base.description.as_ref(), base.long_description.as_ref());
            }
            op.responses = ok("Retrieved entities", JSON, self.collection_ref(et));
            item.get = Some(op);
        }
        if insert && r.is_insertable() {
            let summary = format!("Add new entity to {subject}");
            let mut op = self.operation(context, "Create", subject, summary);
            op.request_body = Some(request_body(
                "New entity",
                JSON,
                schema_ref(&et.full_name()),
            ));
            op.responses = created("Created entity", schema_ref(&et.full_name()));
            if let Some(insert) = &r.insert {
                op.parameters = custom(&insert.custom_headers, &insert.custom_query_options);
                describe(&mut op, insert.description.as_ref(), insert.long_description.as_ref());
            }
            item.post = Some(op);
        }
    }

    /// `GET`, `PATCH` (or `PUT`) and `DELETE` of a single entity.
    fn entity(
        &mut self,
        item: &mut PathItem,
        path: &ODataPath<'a>,
        context: &Context,
        subject: &str,
        (update, delete): (bool, bool),
    ) -> Result<(), Error> {
        let et = self.target(path)?;
        let schema = || schema_ref(&et.full_name());
        let r = &context.restrictions;
        if r.is_readable_by_key() {
            let summary = format!("Get entity from {subject}");
            let mut op = self.operation(context, "Get", subject, summary);
            op.parameters = self.entity_query(et, r);
            if let Some(read) = r.read.as_ref().map(ReadRestrictions::by_key) {
                op.parameters
                    .extend(custom(&read.custom_headers, &read.custom_query_options));
                describe(&mut op, read.description.as_ref(), read.long_description.as_ref());
            }
            op.responses = ok("Retrieved entity", JSON, schema());
            item.get = Some(op);
        }
        if update && r.is_updatable() {
            let summary = format!("Update entity in {subject}");
            let mut op = self.operation(context, "Update", subject, summary);
            op.request_body = Some(request_body("New property values", JSON, schema()));
            op.responses = no_content();
            let put = match &r.update {
                Some(restrictions) => {
                    op.parameters = custom(
                        &restrictions.custom_headers,
                        &restrictions.custom_query_options,
                    );
                    describe(
                        &mut op,
                        restrictions.description.as_ref(),
                        restrictions.long_description.as_ref(),
                    );
                    restrictions.is_update_method_put()
                }
                None => false,
            };
            if put {
                item.put = Some(op);
            } else {
                item.patch = Some(op);
            }
        }
        if delete && r.is_deletable() {
            let summary = format!("Delete entity from {subject}");
            let mut op = self.operation(context, "Delete", subject, summary);
            op.responses = no_content();
            if let Some(restrictions) = &r.delete {
                op.parameters = custom(
                    &restrictions.custom_headers,
                    &restrictions.custom_query_options,
                );
                describe(
                    &mut op,
                    restrictions.description.as_ref(),
                    restrictions.long_description.as_ref(),
                );
            }
            item.delete = Some(op);
        }
        Ok(())
    }

    /// Navigation property. Only contained entities can be created,
    /// updated and deleted through the navigation property, and only
    /// if the navigation source does not list the property as
    /// non-insertable, non-updatable or non-deletable.
    fn navigation(
        &mut self,
        item: &mut PathItem,
        path: &ODataPath<'a>,
        context: &Context,
    ) -> Result<(), Error> {
        let Some(nav) = last_navigation(path) else {
            return Ok(());
        };
        let model = self.model;
        let subject = nav.property.name();
        let contained = nav.is_contained();
        let property_path = path
            .navigation_property_path(self.settings)
            .unwrap_or_default();
        let (insert, update, delete) = match path.first() {
            Some(Segment::NavigationSource(source)) => {
                let specific = Target::NavigationSource(*source);
                let general = Target::EntityType(source.entity_type);
                (
                    resolve::<InsertRestrictions>(model, &specific, &general)
                        .is_none_or(|r| !r.is_non_insertable_navigation_property(&property_path)),
                    resolve::<UpdateRestrictions>(model, &specific, &general)
                        .is_none_or(|r| !r.is_non_updatable_navigation_property(&property_path)),
                    resolve::<DeleteRestrictions>(model, &specific, &general)
                        .is_none_or(|r| !r.is_non_deletable_navigation_property(&property_path)),
                )
            }
            _ => (true, true, true),
        };
        if path.is_collection() {
            self.collection(item, path, context, subject, contained && insert);
            Ok(())
        } else {
            self.entity(
                item,
                path,
                context,
                subject,
                (contained && update, contained && delete),
            )
        }
    }

    /// `$ref` of a navigation property.
    fn reference(&mut self, item: &mut PathItem, path: &ODataPath<'a>, context: &Context) {
        let Some(nav) = last_navigation(path) else {
            return;
        };
        let name = nav.property.name();
        let subject = format!("Ref{name}");
        let segments = path.segments();
        let keyed = segments.len() > 1 && matches!(segments[segments.len() - 2], Segment::Key(_));

        let summary = format!("Delete ref of {name}");
        let mut delete = self.operation(context, "Delete", &subject, summary);
        delete.responses = no_content();
        if keyed {
            item.delete = Some(delete);
            return;
        }

        let reference = || {
            object(IndexMap::from([(
                "@odata.id".to_string(),
                ReferenceOr::Item(string()),
            )]))
        };
        if path.is_collection() {
            let mut get = self.operation(context, "List", &subject, format!("Get ref of {name}"));
            get.parameters = vec![
                query_ref(TOP),
                query_ref(SKIP),
                query_ref(FILTER),
                query_ref(COUNT),
            ];
            let links = self.schemas.collection(ReferenceOr::Item(reference()));
            get.responses = ok(
                "Retrieved navigation property links",
                JSON,
                ReferenceOr::Item(links),
            );
            item.get = Some(get);

            let summary = format!("Create new navigation property ref to {name}");
            let mut post = self.operation(context, "Create", &subject, summary);
            post.request_body = Some(request_body_ref(REF_POST_BODY));
            post.responses = no_content();
            item.post = Some(post);

            delete.parameters.push(ReferenceOr::Item(parameters::reference_id()));
        } else {
            let mut get = self.operation(context, "Get", &subject, format!("Get ref of {name}"));
            get.responses = ok(
                "Retrieved navigation property link",
                JSON,
                ReferenceOr::Item(reference()),
            );
            item.get = Some(get);

            let summary = format!("Update the ref of navigation property {name}");
            let mut put = self.operation(context, "Update", &subject, summary);
            put.request_body = Some(request_body_ref(REF_PUT_BODY));
            put.responses = no_content();
            item.put = Some(put);
        }
        item.delete = Some(delete);
    }

    /// `$count` of a collection.
    fn count(&mut self, item: &mut PathItem, path: &ODataPath<'a>, context: &Context) {
        let segments = path.segments();
        let subject = segments
            .len()
            .checked_sub(2)
            .map_or("", |n| segments[n].identifier());
        let summary = "Get the number of the resource".to_string();
        let mut op = self.operation(context, "GetCount", subject, summary);
        let r = &context.restrictions;
        if r.search.as_ref().is_none_or(SearchRestrictions::is_searchable) {
            op.parameters.push(query_ref(SEARCH));
        }
        if r.filter.as_ref().is_none_or(FilterRestrictions::is_filterable) {
            op.parameters.push(query_ref(FILTER));
        }
        op.responses = ok("The count of the resource", TEXT_PLAIN, ReferenceOr::Item(count()));
        item.get = Some(op);
    }

    /// `$value` of a media entity or a stream property.
    fn media(&mut self, item: &mut PathItem, path: &ODataPath<'a>, context: &Context) {
        let subject = path.last().map_or("Content", Segment::identifier);
        let summary = format!("Get media content for {subject}");
        let mut get = self.operation(context, "Get", subject, summary);
        get.responses = ok("Retrieved media content", OCTET_STREAM, ReferenceOr::Item(binary()));
        item.get = Some(get);
        let summary = format!("Update media content for {subject}");
        let mut put = self.operation(context, "Update", subject, summary);
        put.request_body = Some(request_body(
            "New media content",
            OCTET_STREAM,
            ReferenceOr::Item(binary()),
        ));
        put.responses = no_content();
        item.put = Some(put);
    }

    /// Complex property. Restrictions of the property itself override
    /// the restrictions of the entity.
    fn complex_property(
        &mut self,
        item: &mut PathItem,
        path: &ODataPath<'a>,
        context: &Context,
    ) -> Result<(), Error> {
        let model = self.model;
        let Some(Segment::ComplexProperty(segment)) = path.last() else {
            return Ok(());
        };
        let property = segment.property;
        let subject = property.name();
        let target = Target::StructuralProperty(property);
        let r = &context.restrictions;
        let read = term::<ReadRestrictions>(model, &target).merge(r.read.clone());
        let update = term::<UpdateRestrictions>(model, &target).merge(r.update.clone());
        let insert = term::<InsertRestrictions>(model, &target).merge(r.insert.clone());
        let complex = schema_ref(&segment.complex_type.full_name());
        let collection = segment.is_collection();

        if read.as_ref().is_none_or(ReadRestrictions::is_readable) {
            let summary = format!("Get {subject} property value");
            let mut op = self.operation(context, "Get", subject, summary);
            let schema = if collection {
                ReferenceOr::Item(self.schemas.collection(complex.clone()))
            } else {
                complex.clone()
            };
            op.responses = ok("Result entities", JSON, schema);
            item.get = Some(op);
        }
        if update.as_ref().is_none_or(UpdateRestrictions::is_updatable) {
            let summary = format!("Update property {subject} value");
            let mut op = self.operation(context, "Update", subject, summary);
            let schema = self.schemas.type_schema(&property.ptype)?;
            op.request_body = Some(request_body("New property values", JSON, schema));
            op.responses = no_content();
            if update.as_ref().is_some_and(UpdateRestrictions::is_update_method_put) {
                item.put = Some(op);
            } else {
                item.patch = Some(op);
            }
        }
        if collection && insert.as_ref().is_none_or(InsertRestrictions::is_insertable) {
            let summary = format!("Add new item to {subject}");
            let mut op = self.operation(context, "Create", subject, summary);
            op.request_body = Some(request_body("New property value", JSON, complex));
            op.responses = no_content();
            item.post = Some(op);
        }
        Ok(())
    }

    /// Cast to a derived type.
    fn type_cast(&mut self, item: &mut PathItem, path: &ODataPath<'a>, context: &Context) {
        let Some(Segment::TypeCast(cast)) = path.last() else {
            return;
        };
        let subject = format!("As{}", cast.name());
        let summary = format!("Get the items of type {}", cast.full_name());
        match cast {
            StructuredType::Entity(et) if path.is_collection() => {
                let mut op = self.operation(context, "List", &subject, summary);
                op.parameters = self.collection_query(*et, &context.restrictions);
                op.responses = ok("Result entities", JSON, self.collection_ref(*et));
                item.get = Some(op);
            }
            StructuredType::Entity(et) => {
                let mut op = self.operation(context, "Get", &subject, summary);
                op.parameters = self.entity_query(*et, &context.restrictions);
                op.responses = ok("Result entity", JSON, schema_ref(&et.full_name()));
                item.get = Some(op);
            }
            StructuredType::Complex(ct) => {
                let mut op = self.operation(context, "Get", &subject, summary);
                op.responses = ok("Result value", JSON, schema_ref(&ct.full_name()));
                item.get = Some(op);
            }
        }
    }

    /// Bound operation or operation import: actions are invoked by
    /// `POST`, functions by `GET`.
    fn invoke(
        &mut self,
        item: &mut PathItem,
        path: &ODataPath<'a>,
        context: &Context,
    ) -> Result<(), Error> {
        let model = self.model;
        let (operation, name, import) = match path.last() {
            Some(Segment::Operation(v)) => (v.operation, v.operation.name(), None),
            Some(Segment::OperationImport(v)) => {
                (v.operation, v.name(), Some(Target::OperationImport(*v)))
            }
            _ => return Ok(()),
        };
        let target = Target::Operation(operation);
        let kind = if operation.is_action() { "action" } else { "function" };
        let summary = import
            .and_then(|t| description(model, &t))
            .or_else(|| description(model, &target))
            .map_or_else(|| format!("Invoke {kind} {name}"), Into::into);
        let mut op = self.operation(context, "", name, summary);
        op.description = import
            .and_then(|t| long_description(model, &t))
            .or_else(|| long_description(model, &target))
            .map(Into::into);
        if let Some(restrictions) = term::<OperationRestrictions>(model, &target) {
            op.parameters = custom(
                &restrictions.custom_headers,
                &restrictions.custom_query_options,
            );
        }
        op.responses = match &operation.return_type {
            Some(rtype) => ok("Success", JSON, self.return_schema(&rtype.rtype)?),
            None => no_content(),
        };
        if operation.is_function() {
            item.get = Some(op);
            return Ok(());
        }
        let parameters = operation.non_binding_parameters();
        if !parameters.is_empty() {
            let mut properties = IndexMap::new();
            for p in parameters {
                properties.insert(p.name.to_string(), self.schemas.type_schema(&p.ptype)?);
            }
            let schema = ReferenceOr::Item(object(properties));
            op.request_body = Some(request_body("Action parameters", JSON, schema));
        }
        item.post = Some(op);
        Ok(())
    }

    fn return_schema(&self, rtype: &TypeName) -> Result<ReferenceOr<Schema>, Error> {
        let item = self
            .schemas
            .type_schema(&TypeName::One(rtype.qualified_type_name().clone()))?;
        if rtype.is_collection() {
            Ok(ReferenceOr::Item(self.schemas.collection(item)))
        } else {
            Ok(item)
        }
    }

    fn path_parameter(
        &self,
        parameter: &PathParameter<'a>,
    ) -> Result<ReferenceOr<Parameter>, Error> {
        let description = match parameter.source {
            ParameterSource::Key {
                entity_type,
                property,
            } => format!("Key: {} of {}", property.name, entity_type.name()),
            ParameterSource::Function(p) => format!("Usage: {}={{{}}}", p.name, parameter.name),
        };
        let schema = self.schemas.type_schema(parameter.source.type_name())?;
        Ok(ReferenceOr::Item(parameters::path(
            &parameter.name,
            Some(description),
            schema,
        )))
    }

    /// Query options of a collection.
    fn collection_query(
        &self,
        et: EntityTypeRef<'a>,
        r: &Restrictions,
    ) -> Vec<ReferenceOr<Parameter>> {
        let mut params = Vec::new();
        if r.top_supported != Some(false) {
            params.push(query_ref(TOP));
        }
        if r.skip_supported != Some(false) {
            params.push(query_ref(SKIP));
        }
        if r.search.as_ref().is_none_or(SearchRestrictions::is_searchable) {
            params.push(query_ref(SEARCH));
        }
        if r.filter.as_ref().is_none_or(FilterRestrictions::is_filterable) {
            params.push(query_ref(FILTER));
        }
        if r.count.as_ref().is_none_or(CountRestrictions::is_countable) {
            params.push(query_ref(COUNT));
        }
        if r.sort.as_ref().is_none_or(SortRestrictions::is_sortable) {
            let values = self.orderby(et, r.sort.as_ref());
            if !values.is_empty() {
                params.push(ReferenceOr::Item(parameters::values(
                    "$orderby",
                    "Order items by property values",
                    values,
                )));
            }
        }
        params.extend(self.entity_query(et, r));
        params
    }

    fn orderby(&self, et: EntityTypeRef<'a>, sort: Option<&SortRestrictions>) -> Vec<String> {
        let mut values = Vec::new();
        for p in self.model.structural_properties(et) {
            let name = p.name();
            if sort.is_some_and(|s| s.is_non_sortable_property(name)) {
                continue;
            }
            if !sort.is_some_and(|s| s.is_descending_only_property(name)) {
                values.push(name.to_string());
            }
            if !sort.is_some_and(|s| s.is_ascending_only_property(name)) {
                values.push(format!("{name} desc"));
            }
        }
        values
    }

    /// `$select` and `$expand`.
    fn entity_query(
        &self,
        et: EntityTypeRef<'a>,
        r: &Restrictions,
    ) -> Vec<ReferenceOr<Parameter>> {
        let model = self.model;
        let navigation = model.navigation_properties(et);
        let mut params = Vec::new();
        let select = model
            .structural_properties(et)
            .iter()
            .map(|p| p.name().to_string())
            .chain(navigation.iter().map(|p| p.name().to_string()))
            .collect::<Vec<_>>();
        if !select.is_empty() {
            params.push(ReferenceOr::Item(parameters::values(
                "$select",
                "Select properties to be returned",
                select,
            )));
        }
        if r.expand.as_ref().is_none_or(ExpandRestrictions::is_expandable) {
            let expand = navigation
                .iter()
                .map(|p| p.name())
                .filter(|name| {
                    !r.expand
                        .as_ref()
                        .is_some_and(|e| e.is_non_expandable_property(name))
                })
                .map(ToString::to_string)
                .collect::<Vec<_>>();
            if !expand.is_empty() {
                params.push(ReferenceOr::Item(parameters::values(
                    "$expand",
                    "Expand related entities",
                    ["*".to_string()].into_iter().chain(expand).collect(),
                )));
            }
        }
        params
    }
}
