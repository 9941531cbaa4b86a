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

//! Typed access to vocabulary annotations.
//!
//! A missing annotation is never an error: lookups return `None` and
//! callers treat it as "everything is permitted".

/// `Org.OData.Capabilities.V1` terms.
pub mod capabilities;

/// `Org.OData.Core.V1` terms.
pub mod core;

/// `Org.OData.Validation.V1` terms.
pub mod validation;

use crate::edm::edmx::Expression;
use crate::edm::edmx::Record;
use crate::edm::model::Target;
use crate::edm::Model;

pub const CAPABILITIES: &str = "Org.OData.Capabilities.V1";
pub const CORE: &str = "Org.OData.Core.V1";
pub const VALIDATION: &str = "Org.OData.Validation.V1";

/// Record-typed term.
pub trait TermRecord: Sized {
    const NAMESPACE: &'static str;
    const NAME: &'static str;

    fn from_record(record: &Record) -> Self;

    /// Decode the term value. Values that are not records are
    /// ignored.
    fn from_expression(expr: &Expression) -> Option<Self> {
        expr.as_record().map(Self::from_record)
    }
}

/// Field-wise merge of a specific record with a general one: fields
/// that are not set in the specific record are taken from the
/// general one.
pub trait Merge {
    #[must_use]
    fn merge(self, general: Self) -> Self;
}

impl<T> Merge for Option<T>
where
    T: Merge,
{
    fn merge(self, general: Self) -> Self {
        match (self, general) {
            (Some(specific), Some(general)) => Some(specific.merge(general)),
            (specific, general) => specific.or(general),
        }
    }
}

/// Value of the record term applied to the target.
#[must_use]
pub fn term<'a, R: TermRecord>(model: &Model<'a>, target: &Target<'a>) -> Option<R> {
    model
        .find_annotation(target, R::NAMESPACE, R::NAME)
        .and_then(|a| a.value.as_ref())
        .and_then(R::from_expression)
}

/// Value of the record term where the annotation of the `specific`
/// target overrides the annotation of the `general` target field by
/// field.
#[must_use]
pub fn resolve<'a, R>(model: &Model<'a>, specific: &Target<'a>, general: &Target<'a>) -> Option<R>
where
    R: TermRecord + Merge,
{
    term::<R>(model, specific).merge(term::<R>(model, general))
}

/// Value of a tag term (`Core.Tag` typed). Annotation without a value
/// means `true`.
#[must_use]
pub fn tag<'a>(
    model: &Model<'a>,
    target: &Target<'a>,
    namespace: &str,
    name: &str,
) -> Option<bool> {
    model
        .find_annotation(target, namespace, name)
        .map(|a| a.value.as_ref().and_then(Expression::as_bool).unwrap_or(true))
}

/// Value of a string term.
#[must_use]
pub fn string<'a>(
    model: &Model<'a>,
    target: &Target<'a>,
    namespace: &str,
    name: &str,
) -> Option<&'a str> {
    model
        .find_annotation(target, namespace, name)
        .and_then(|a| a.value.as_ref())
        .and_then(Expression::as_str)
}

/// Value of a term that is a collection of strings or paths.
#[must_use]
pub fn strings<'a>(
    model: &Model<'a>,
    target: &Target<'a>,
    namespace: &str,
    name: &str,
) -> Option<Vec<String>> {
    model
        .find_annotation(target, namespace, name)
        .and_then(|a| a.value.as_ref())
        .and_then(Expression::as_collection)
        .map(|items| {
            items
                .iter()
                .filter_map(Expression::as_str)
                .map(ToString::to_string)
                .collect()
        })
}
