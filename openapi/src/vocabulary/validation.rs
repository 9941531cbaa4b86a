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

//! Terms of the validation vocabulary.

use crate::edm::model::Target;
use crate::edm::Model;
use crate::vocabulary::strings;
use crate::vocabulary::VALIDATION;

/// `Validation.DerivedTypeConstraint`: qualified names of the derived
/// types allowed in place of the declared type.
#[must_use]
pub fn derived_type_constraint<'a>(model: &Model<'a>, target: &Target<'a>) -> Option<Vec<String>> {
    strings(model, target, VALIDATION, "DerivedTypeConstraint").map(|types| {
        types
            .iter()
            .map(|name| model.normalize_target(name))
            .collect()
    })
}
