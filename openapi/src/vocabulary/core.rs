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

//! Terms of the core vocabulary.

use crate::edm::edmx::Expression;
use crate::edm::model::Target;
use crate::edm::Model;
use crate::vocabulary::string;
use crate::vocabulary::strings;
use crate::vocabulary::tag;
use crate::vocabulary::CORE;

/// `Core.Description`
#[must_use]
pub fn description<'a>(model: &Model<'a>, target: &Target<'a>) -> Option<&'a str> {
    string(model, target, CORE, "Description")
}

/// `Core.LongDescription`
#[must_use]
pub fn long_description<'a>(model: &Model<'a>, target: &Target<'a>) -> Option<&'a str> {
    string(model, target, CORE, "LongDescription")
}

/// `Core.Computed`
#[must_use]
pub fn is_computed<'a>(model: &Model<'a>, target: &Target<'a>) -> bool {
    tag(model, target, CORE, "Computed").unwrap_or(false)
}

/// `Core.IsURLEscapeFunction`
#[must_use]
pub fn is_url_escape_function<'a>(model: &Model<'a>, target: &Target<'a>) -> bool {
    tag(model, target, CORE, "IsURLEscapeFunction").unwrap_or(false)
}

/// `Core.ExplicitOperationBindings`: qualified names of operations
/// allowed to bind to the annotated type.
#[must_use]
pub fn explicit_operation_bindings<'a>(
    model: &Model<'a>,
    target: &Target<'a>,
) -> Option<Vec<String>> {
    strings(model, target, CORE, "ExplicitOperationBindings")
}

/// Property of an alternate key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternateKeyPart {
    /// Name of the key in URLs.
    pub alias: String,
    /// Path to the key property.
    pub path: String,
}

/// `Core.AlternateKey`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternateKey {
    pub parts: Vec<AlternateKeyPart>,
}

/// `Core.AlternateKeys`
#[must_use]
pub fn alternate_keys<'a>(model: &Model<'a>, target: &Target<'a>) -> Vec<AlternateKey> {
    model
        .find_annotation(target, CORE, "AlternateKeys")
        .and_then(|a| a.value.as_ref())
        .and_then(Expression::as_collection)
        .unwrap_or_default()
        .iter()
        .filter_map(Expression::as_record)
        .filter_map(|key| {
            let parts = key
                .records_property("Key")?
                .into_iter()
                .filter_map(|part| {
                    let path = part.str_property("Name")?;
                    Some(AlternateKeyPart {
                        alias: part.str_property("Alias").unwrap_or(path).into(),
                        path: path.into(),
                    })
                })
                .collect::<Vec<_>>();
            (!parts.is_empty()).then_some(AlternateKey { parts })
        })
        .collect()
}
