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

//! Restriction records of the capabilities vocabulary.
//!
//! Every flag is optional: `None` means the service did not state
//! the capability and it is considered supported.

use crate::edm::edmx::Record;
use crate::vocabulary::Merge;
use crate::vocabulary::TermRecord;
use crate::vocabulary::CAPABILITIES;
use std::str::FromStr;
use tracing::trace;

pub const TOP_SUPPORTED: &str = "TopSupported";
pub const SKIP_SUPPORTED: &str = "SkipSupported";
pub const INDEXABLE_BY_KEY: &str = "IndexableByKey";

fn paths(record: &Record, name: &str) -> Option<Vec<String>> {
    record.strings_property(name)
}

fn contains(list: Option<&Vec<String>>, path: &str) -> bool {
    list.is_some_and(|list| list.iter().any(|v| v == path))
}

/// `Capabilities.CountRestrictions`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountRestrictions {
    pub countable: Option<bool>,
    pub non_countable_properties: Option<Vec<String>>,
    pub non_countable_navigation_properties: Option<Vec<String>>,
}

impl CountRestrictions {
    #[must_use]
    pub fn is_countable(&self) -> bool {
        self.countable != Some(false)
    }

    #[must_use]
    pub fn is_non_countable_navigation_property(&self, path: &str) -> bool {
        contains(self.non_countable_navigation_properties.as_ref(), path)
    }

    #[must_use]
    pub fn is_non_countable_property(&self, path: &str) -> bool {
        contains(self.non_countable_properties.as_ref(), path)
    }
}

impl TermRecord for CountRestrictions {
    const NAMESPACE: &'static str = CAPABILITIES;
    const NAME: &'static str = "CountRestrictions";

    fn from_record(record: &Record) -> Self {
        Self {
            countable: record.bool_property("Countable"),
            non_countable_properties: paths(record, "NonCountableProperties"),
            non_countable_navigation_properties: paths(record, "NonCountableNavigationProperties"),
        }
    }
}

impl Merge for CountRestrictions {
    fn merge(self, general: Self) -> Self {
        Self {
            countable: self.countable.or(general.countable),
            non_countable_properties: self
                .non_countable_properties
                .or(general.non_countable_properties),
            non_countable_navigation_properties: self
                .non_countable_navigation_properties
                .or(general.non_countable_navigation_properties),
        }
    }
}

/// `Capabilities.NavigationType`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationType {
    /// Navigation properties can be recursively navigated.
    Recursive,
    /// Navigation properties can be navigated to a single level.
    Single,
    /// Navigation properties are not navigable.
    None,
}

impl FromStr for NavigationType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Recursive" => Ok(Self::Recursive),
            "Single" => Ok(Self::Single),
            "None" => Ok(Self::None),
            _ => Err(s.into()),
        }
    }
}

fn navigation_type(record: &Record) -> Option<NavigationType> {
    record
        .enum_members_property("Navigability")
        .and_then(|members| members.first().and_then(|m| m.parse().ok()))
}

/// `Capabilities.NavigationRestrictions`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationRestrictions {
    pub navigability: Option<NavigationType>,
    pub referenceable: Option<bool>,
    pub restricted_properties: Vec<NavigationPropertyRestriction>,
}

impl NavigationRestrictions {
    /// Restrictions of the navigation property with the path
    /// relative to the annotated navigation source.
    #[must_use]
    pub fn restricted_property(&self, path: &str) -> Option<&NavigationPropertyRestriction> {
        self.restricted_properties
            .iter()
            .find(|r| r.navigation_property.as_deref() == Some(path))
    }
}

impl TermRecord for NavigationRestrictions {
    const NAMESPACE: &'static str = CAPABILITIES;
    const NAME: &'static str = "NavigationRestrictions";

    fn from_record(record: &Record) -> Self {
        Self {
            navigability: navigation_type(record),
            referenceable: record.bool_property("Referenceable"),
            restricted_properties: record
                .records_property("RestrictedProperties")
                .unwrap_or_default()
                .into_iter()
                .map(NavigationPropertyRestriction::from_record)
                .collect(),
        }
    }
}

impl Merge for NavigationRestrictions {
    fn merge(self, general: Self) -> Self {
        Self {
            navigability: self.navigability.or(general.navigability),
            referenceable: self.referenceable.or(general.referenceable),
            restricted_properties: if self.restricted_properties.is_empty() {
                general.restricted_properties
            } else {
                self.restricted_properties
            },
        }
    }
}

/// `Capabilities.NavigationPropertyRestriction`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationPropertyRestriction {
    pub navigation_property: Option<String>,
    pub navigability: Option<NavigationType>,
    pub referenceable: Option<bool>,
    pub top_supported: Option<bool>,
    pub skip_supported: Option<bool>,
    pub indexable_by_key: Option<bool>,
    pub count_restrictions: Option<CountRestrictions>,
    pub filter_restrictions: Option<FilterRestrictions>,
    pub search_restrictions: Option<SearchRestrictions>,
    pub sort_restrictions: Option<SortRestrictions>,
    pub read_restrictions: Option<ReadRestrictions>,
    pub insert_restrictions: Option<InsertRestrictions>,
    pub update_restrictions: Option<UpdateRestrictions>,
    pub delete_restrictions: Option<DeleteRestrictions>,
}

impl NavigationPropertyRestriction {
    fn from_record(record: &Record) -> Self {
        Self {
            navigation_property: record.str_property("NavigationProperty").map(Into::into),
            navigability: navigation_type(record),
            referenceable: record.bool_property("Referenceable"),
            top_supported: record.bool_property(TOP_SUPPORTED),
            skip_supported: record.bool_property(SKIP_SUPPORTED),
            indexable_by_key: record.bool_property(INDEXABLE_BY_KEY),
            count_restrictions: record
                .record_property("CountRestrictions")
                .map(CountRestrictions::from_record),
            filter_restrictions: record
                .record_property("FilterRestrictions")
                .map(FilterRestrictions::from_record),
            search_restrictions: record
                .record_property("SearchRestrictions")
                .map(SearchRestrictions::from_record),
            sort_restrictions: record
                .record_property("SortRestrictions")
                .map(SortRestrictions::from_record),
            read_restrictions: record
                .record_property("ReadRestrictions")
                .map(ReadRestrictions::from_record),
            insert_restrictions: record
                .record_property("InsertRestrictions")
                .map(InsertRestrictions::from_record),
            update_restrictions: record
                .record_property("UpdateRestrictions")
                .map(UpdateRestrictions::from_record),
            delete_restrictions: record
                .record_property("DeleteRestrictions")
                .map(DeleteRestrictions::from_record),
        }
    }
}

/// `Capabilities.CustomParameter`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomParameter {
    pub name: String,
    pub description: Option<String>,
    pub documentation_url: Option<String>,
    pub required: bool,
    pub example_values: Vec<String>,
}

impl CustomParameter {
    fn from_record(record: &Record) -> Option<Self> {
        Some(Self {
            name: record.str_property("Name")?.into(),
            description: record.str_property("Description").map(Into::into),
            documentation_url: record.str_property("DocumentationURL").map(Into::into),
            required: record.bool_property("Required").unwrap_or(false),
            example_values: record
                .records_property("ExampleValues")
                .unwrap_or_default()
                .into_iter()
                .filter_map(|v| v.str_property("Value").map(Into::into))
                .collect(),
        })
    }

    fn list(record: &Record, name: &str) -> Vec<Self> {
        record
            .records_property(name)
            .unwrap_or_default()
            .into_iter()
            .filter_map(Self::from_record)
            .collect()
    }
}

fn merge_list<T>(specific: Vec<T>, general: Vec<T>) -> Vec<T> {
    if specific.is_empty() {
        general
    } else {
        specific
    }
}

/// Properties shared by `ReadRestrictions` and
/// `ReadByKeyRestrictions`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadRestrictionsBase {
    pub readable: Option<bool>,
    pub custom_headers: Vec<CustomParameter>,
    pub custom_query_options: Vec<CustomParameter>,
    pub description: Option<String>,
    pub long_description: Option<String>,
}

impl ReadRestrictionsBase {
    #[must_use]
    pub fn is_readable(&self) -> bool {
        self.readable != Some(false)
    }

    fn from_record(record: &Record) -> Self {
        Self {
            readable: record.bool_property("Readable"),
            custom_headers: CustomParameter::list(record, "CustomHeaders"),
            custom_query_options: CustomParameter::list(record, "CustomQueryOptions"),
            description: record.str_property("Description").map(Into::into),
            long_description: record.str_property("LongDescription").map(Into::into),
        }
    }
}

impl Merge for ReadRestrictionsBase {
    fn merge(self, general: Self) -> Self {
        Self {
            readable: self.readable.or(general.readable),
            custom_headers: merge_list(self.custom_headers, general.custom_headers),
            custom_query_options: merge_list(
                self.custom_query_options,
                general.custom_query_options,
            ),
            description: self.description.or(general.description),
            long_description: self.long_description.or(general.long_description),
        }
    }
}

/// `Capabilities.ReadRestrictions`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadRestrictions {
    pub base: ReadRestrictionsBase,
    pub read_by_key: Option<ReadRestrictionsBase>,
}

impl ReadRestrictions {
    #[must_use]
    pub fn is_readable(&self) -> bool {
        self.base.is_readable()
    }

    /// Restrictions of reading a single entity by key. Fields not set
    /// by `ReadByKeyRestrictions` fall back to the collection
    /// restrictions.
    #[must_use]
    pub fn by_key(&self) -> ReadRestrictionsBase {
        match &self.read_by_key {
            Some(by_key) => by_key.clone().merge(self.base.clone()),
            None => self.base.clone(),
        }
    }
}

impl TermRecord for ReadRestrictions {
    const NAMESPACE: &'static str = CAPABILITIES;
    const NAME: &'static str = "ReadRestrictions";

    fn from_record(record: &Record) -> Self {
        Self {
            base: ReadRestrictionsBase::from_record(record),
            read_by_key: record
                .record_property("ReadByKeyRestrictions")
                .map(ReadRestrictionsBase::from_record),
        }
    }
}

impl Merge for ReadRestrictions {
    fn merge(self, general: Self) -> Self {
        Self {
            base: self.base.merge(general.base),
            read_by_key: self.read_by_key.merge(general.read_by_key),
        }
    }
}

/// `Capabilities.InsertRestrictions`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsertRestrictions {
    pub insertable: Option<bool>,
    pub non_insertable_properties: Option<Vec<String>>,
    pub non_insertable_navigation_properties: Option<Vec<String>>,
    pub max_levels: Option<i64>,
    pub custom_headers: Vec<CustomParameter>,
    pub custom_query_options: Vec<CustomParameter>,
    pub description: Option<String>,
    pub long_description: Option<String>,
}

impl InsertRestrictions {
    #[must_use]
    pub fn is_insertable(&self) -> bool {
        self.insertable != Some(false)
    }

    #[must_use]
    pub fn is_non_insertable_navigation_property(&self, path: &str) -> bool {
        contains(self.non_insertable_navigation_properties.as_ref(), path)
    }
}

impl TermRecord for InsertRestrictions {
    const NAMESPACE: &'static str = CAPABILITIES;
    const NAME: &'static str = "InsertRestrictions";

    fn from_record(record: &Record) -> Self {
        Self {
            insertable: record.bool_property("Insertable"),
            non_insertable_properties: paths(record, "NonInsertableProperties"),
            non_insertable_navigation_properties: paths(
                record,
                "NonInsertableNavigationProperties",
            ),
            max_levels: record.int_property("MaxLevels"),
            custom_headers: CustomParameter::list(record, "CustomHeaders"),
            custom_query_options: CustomParameter::list(record, "CustomQueryOptions"),
            description: record.str_property("Description").map(Into::into),
            long_description: record.str_property("LongDescription").map(Into::into),
        }
    }
}

impl Merge for InsertRestrictions {
    fn merge(self, general: Self) -> Self {
        Self {
            insertable: self.insertable.or(general.insertable),
            non_insertable_properties: self
                .non_insertable_properties
                .or(general.non_insertable_properties),
            non_insertable_navigation_properties: self
                .non_insertable_navigation_properties
                .or(general.non_insertable_navigation_properties),
            max_levels: self.max_levels.or(general.max_levels),
            custom_headers: merge_list(self.custom_headers, general.custom_headers),
            custom_query_options: merge_list(
                self.custom_query_options,
                general.custom_query_options,
            ),
            description: self.description.or(general.description),
            long_description: self.long_description.or(general.long_description),
        }
    }
}

/// `Capabilities.HttpMethod` used for updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Patch,
    Put,
}

/// `Capabilities.UpdateRestrictions`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateRestrictions {
    pub updatable: Option<bool>,
    pub update_method: Option<HttpMethod>,
    pub non_updatable_navigation_properties: Option<Vec<String>>,
    pub max_levels: Option<i64>,
    pub custom_headers: Vec<CustomParameter>,
    pub custom_query_options: Vec<CustomParameter>,
    pub description: Option<String>,
    pub long_description: Option<String>,
}

impl UpdateRestrictions {
    #[must_use]
    pub fn is_updatable(&self) -> bool {
        self.updatable != Some(false)
    }

    /// Update is done with `PUT` instead of `PATCH`.
    #[must_use]
    pub fn is_update_method_put(&self) -> bool {
        self.update_method == Some(HttpMethod::Put)
    }

    #[must_use]
    pub fn is_non_updatable_navigation_property(&self, path: &str) -> bool {
        contains(self.non_updatable_navigation_properties.as_ref(), path)
    }
}

impl TermRecord for UpdateRestrictions {
    const NAMESPACE: &'static str = CAPABILITIES;
    const NAME: &'static str = "UpdateRestrictions";

    fn from_record(record: &Record) -> Self {
        let update_method = record
            .enum_members_property("UpdateMethod")
            .and_then(|members| {
                members.first().and_then(|m| match *m {
                    "PATCH" => Some(HttpMethod::Patch),
                    "PUT" => Some(HttpMethod::Put),
                    _ => None,
                })
            });
        Self {
            updatable: record.bool_property("Updatable"),
            update_method,
            non_updatable_navigation_properties: paths(record, "NonUpdatableNavigationProperties"),
            max_levels: record.int_property("MaxLevels"),
            custom_headers: CustomParameter::list(record, "CustomHeaders"),
            custom_query_options: CustomParameter::list(record, "CustomQueryOptions"),
            description: record.str_property("Description").map(Into::into),
            long_description: record.str_property("LongDescription").map(Into::into),
        }
    }
}

impl Merge for UpdateRestrictions {
    fn merge(self, general: Self) -> Self {
        Self {
            updatable: self.updatable.or(general.updatable),
            update_method: self.update_method.or(general.update_method),
            non_updatable_navigation_properties: self
                .non_updatable_navigation_properties
                .or(general.non_updatable_navigation_properties),
            max_levels: self.max_levels.or(general.max_levels),
            custom_headers: merge_list(self.custom_headers, general.custom_headers),
            custom_query_options: merge_list(
                self.custom_query_options,
                general.custom_query_options,
            ),
            description: self.description.or(general.description),
            long_description: self.long_description.or(general.long_description),
        }
    }
}

/// `Capabilities.DeleteRestrictions`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteRestrictions {
    pub deletable: Option<bool>,
    pub non_deletable_navigation_properties: Option<Vec<String>>,
    pub max_levels: Option<i64>,
    pub custom_headers: Vec<CustomParameter>,
    pub custom_query_options: Vec<CustomParameter>,
    pub description: Option<String>,
    pub long_description: Option<String>,
}

impl DeleteRestrictions {
    #[must_use]
    pub fn is_deletable(&self) -> bool {
        self.deletable != Some(false)
    }

    #[must_use]
    pub fn is_non_deletable_navigation_property(&self, path: &str) -> bool {
        contains(self.non_deletable_navigation_properties.as_ref(), path)
    }
}

impl TermRecord for DeleteRestrictions {
    const NAMESPACE: &'static str = CAPABILITIES;
    const NAME: &'static str = "DeleteRestrictions";

    fn from_record(record: &Record) -> Self {
        Self {
            deletable: record.bool_property("Deletable"),
            non_deletable_navigation_properties: paths(record, "NonDeletableNavigationProperties"),
            max_levels: record.int_property("MaxLevels"),
            custom_headers: CustomParameter::list(record, "CustomHeaders"),
            custom_query_options: CustomParameter::list(record, "CustomQueryOptions"),
            description: record.str_property("Description").map(Into::into),
            long_description: record.str_property("LongDescription").map(Into::into),
        }
    }
}

impl Merge for DeleteRestrictions {
    fn merge(self, general: Self) -> Self {
        Self {
            deletable: self.deletable.or(general.deletable),
            non_deletable_navigation_properties: self
                .non_deletable_navigation_properties
                .or(general.non_deletable_navigation_properties),
            max_levels: self.max_levels.or(general.max_levels),
            custom_headers: merge_list(self.custom_headers, general.custom_headers),
            custom_query_options: merge_list(
                self.custom_query_options,
                general.custom_query_options,
            ),
            description: self.description.or(general.description),
            long_description: self.long_description.or(general.long_description),
        }
    }
}

/// `Capabilities.FilterRestrictions`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterRestrictions {
    pub filterable: Option<bool>,
    pub requires_filter: Option<bool>,
    pub required_properties: Option<Vec<String>>,
    pub non_filterable_properties: Option<Vec<String>>,
}

impl FilterRestrictions {
    #[must_use]
    pub fn is_filterable(&self) -> bool {
        self.filterable != Some(false)
    }
}

impl TermRecord for FilterRestrictions {
    const NAMESPACE: &'static str = CAPABILITIES;
    const NAME: &'static str = "FilterRestrictions";

    fn from_record(record: &Record) -> Self {
        Self {
            filterable: record.bool_property("Filterable"),
            requires_filter: record.bool_property("RequiresFilter"),
            required_properties: paths(record, "RequiredProperties"),
            non_filterable_properties: paths(record, "NonFilterableProperties"),
        }
    }
}

impl Merge for FilterRestrictions {
    fn merge(self, general: Self) -> Self {
        Self {
            filterable: self.filterable.or(general.filterable),
            requires_filter: self.requires_filter.or(general.requires_filter),
            required_properties: self.required_properties.or(general.required_properties),
            non_filterable_properties: self
                .non_filterable_properties
                .or(general.non_filterable_properties),
        }
    }
}

/// `Capabilities.SortRestrictions`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortRestrictions {
    pub sortable: Option<bool>,
    pub ascending_only_properties: Option<Vec<String>>,
    pub descending_only_properties: Option<Vec<String>>,
    pub non_sortable_properties: Option<Vec<String>>,
}

impl SortRestrictions {
    #[must_use]
    pub fn is_sortable(&self) -> bool {
        self.sortable != Some(false)
    }

    #[must_use]
    pub fn is_non_sortable_property(&self, path: &str) -> bool {
        contains(self.non_sortable_properties.as_ref(), path)
    }

    #[must_use]
    pub fn is_ascending_only_property(&self, path: &str) -> bool {
        contains(self.ascending_only_properties.as_ref(), path)
    }

    #[must_use]
    pub fn is_descending_only_property(&self, path: &str) -> bool {
        contains(self.descending_only_properties.as_ref(), path)
    }
}

impl TermRecord for SortRestrictions {
    const NAMESPACE: &'static str = CAPABILITIES;
    const NAME: &'static str = "SortRestrictions";

    fn from_record(record: &Record) -> Self {
        Self {
            sortable: record.bool_property("Sortable"),
            ascending_only_properties: paths(record, "AscendingOnlyProperties"),
            descending_only_properties: paths(record, "DescendingOnlyProperties"),
            non_sortable_properties: paths(record, "NonSortableProperties"),
        }
    }
}

impl Merge for SortRestrictions {
    fn merge(self, general: Self) -> Self {
        Self {
            sortable: self.sortable.or(general.sortable),
            ascending_only_properties: self
                .ascending_only_properties
                .or(general.ascending_only_properties),
            descending_only_properties: self
                .descending_only_properties
                .or(general.descending_only_properties),
            non_sortable_properties: self
                .non_sortable_properties
                .or(general.non_sortable_properties),
        }
    }
}

/// Member of `Capabilities.SearchExpressions` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchExpression {
    None,
    And,
    Or,
    Not,
    Phrase,
    Group,
}

impl FromStr for SearchExpression {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "AND" => Ok(Self::And),
            "OR" => Ok(Self::Or),
            "NOT" => Ok(Self::Not),
            "phrase" => Ok(Self::Phrase),
            "group" => Ok(Self::Group),
            _ => Err(s.into()),
        }
    }
}

/// `Capabilities.SearchRestrictions`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRestrictions {
    pub searchable: Option<bool>,
    pub unsupported_expressions: Option<Vec<SearchExpression>>,
}

impl SearchRestrictions {
    #[must_use]
    pub fn is_searchable(&self) -> bool {
        self.searchable != Some(false)
    }
}

impl TermRecord for SearchRestrictions {
    const NAMESPACE: &'static str = CAPABILITIES;
    const NAME: &'static str = "SearchRestrictions";

    fn from_record(record: &Record) -> Self {
        let unsupported_expressions = record
            .enum_members_property("UnsupportedExpressions")
            .map(|members| {
                members
                    .into_iter()
                    .filter_map(|m| {
                        m.parse()
                            .inspect_err(|name| {
                                trace!(name = %name, "unknown search expression skipped");
                            })
                            .ok()
                    })
                    .collect()
            });
        Self {
            searchable: record.bool_property("Searchable"),
            unsupported_expressions,
        }
    }
}

impl Merge for SearchRestrictions {
    fn merge(self, general: Self) -> Self {
        Self {
            searchable: self.searchable.or(general.searchable),
            unsupported_expressions: self
                .unsupported_expressions
                .or(general.unsupported_expressions),
        }
    }
}

/// `Capabilities.ExpandRestrictions`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandRestrictions {
    pub expandable: Option<bool>,
    pub stream_expandable: Option<bool>,
    pub non_expandable_properties: Option<Vec<String>>,
    pub non_expandable_stream_properties: Option<Vec<String>>,
    /// `-1` means unlimited.
    pub max_levels: Option<i64>,
}

impl ExpandRestrictions {
    #[must_use]
    pub fn is_expandable(&self) -> bool {
        self.expandable != Some(false)
    }

    #[must_use]
    pub fn is_non_expandable_property(&self, path: &str) -> bool {
        contains(self.non_expandable_properties.as_ref(), path)
    }

    /// Nesting limit if the annotation sets one.
    #[must_use]
    pub fn levels_limit(&self) -> Option<usize> {
        self.max_levels.and_then(|v| usize::try_from(v).ok())
    }
}

impl TermRecord for ExpandRestrictions {
    const NAMESPACE: &'static str = CAPABILITIES;
    const NAME: &'static str = "ExpandRestrictions";

    fn from_record(record: &Record) -> Self {
        Self {
            expandable: record.bool_property("Expandable"),
            stream_expandable: record.bool_property("StreamExpandable"),
            non_expandable_properties: paths(record, "NonExpandableProperties"),
            non_expandable_stream_properties: paths(record, "NonExpandableStreamProperties"),
            max_levels: record.int_property("MaxLevels"),
        }
    }
}

impl Merge for ExpandRestrictions {
    fn merge(self, general: Self) -> Self {
        Self {
            expandable: self.expandable.or(general.expandable),
            stream_expandable: self.stream_expandable.or(general.stream_expandable),
            non_expandable_properties: self
                .non_expandable_properties
                .or(general.non_expandable_properties),
            non_expandable_stream_properties: self
                .non_expandable_stream_properties
                .or(general.non_expandable_stream_properties),
            max_levels: self.max_levels.or(general.max_levels),
        }
    }
}

/// `Capabilities.OperationRestrictions`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationRestrictions {
    pub filter_segment_supported: Option<bool>,
    pub custom_headers: Vec<CustomParameter>,
    pub custom_query_options: Vec<CustomParameter>,
}

impl TermRecord for OperationRestrictions {
    const NAMESPACE: &'static str = CAPABILITIES;
    const NAME: &'static str = "OperationRestrictions";

    fn from_record(record: &Record) -> Self {
        Self {
            filter_segment_supported: record.bool_property("FilterSegmentSupported"),
            custom_headers: CustomParameter::list(record, "CustomHeaders"),
            custom_query_options: CustomParameter::list(record, "CustomQueryOptions"),
        }
    }
}
