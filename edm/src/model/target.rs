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

//! Annotatable model elements.

use crate::edmx::Annotation;
use crate::model::ComplexTypeRef;
use crate::model::EntityTypeRef;
use crate::model::Model;
use crate::model::NavigationPropertyRef;
use crate::model::NavigationSource;
use crate::model::OperationImport;
use crate::model::OperationRef;
use crate::model::StructuralPropertyRef;

/// Element of the model that can be annotated.
#[derive(Clone, Copy, Debug)]
pub enum Target<'a> {
    EntityType(EntityTypeRef<'a>),
    ComplexType(ComplexTypeRef<'a>),
    NavigationSource(NavigationSource<'a>),
    StructuralProperty(StructuralPropertyRef<'a>),
    NavigationProperty(NavigationPropertyRef<'a>),
    Operation(OperationRef<'a>),
    OperationImport(OperationImport<'a>),
}

impl<'a> Target<'a> {
    /// Annotations defined inside of the element.
    #[must_use]
    pub fn inline_annotations(&self) -> &'a [Annotation] {
        match self {
            Self::EntityType(v) => &v.element.annotations,
            Self::ComplexType(v) => &v.element.annotations,
            Self::NavigationSource(v) => v.annotations(),
            Self::StructuralProperty(v) => &v.property.annotations,
            Self::NavigationProperty(v) => &v.property.annotations,
            Self::Operation(v) => &v.element.annotations,
            Self::OperationImport(v) => v.annotations(),
        }
    }

    /// Namespace-qualified target paths of the element that may be
    /// used in `edm:Annotations`.
    #[must_use]
    pub fn target_paths(&self, model: &Model<'a>) -> Vec<String> {
        match self {
            Self::EntityType(v) => vec![v.full_name()],
            Self::ComplexType(v) => vec![v.full_name()],
            Self::NavigationSource(v) => vec![v.target_path()],
            Self::StructuralProperty(v) => vec![v.target_path()],
            Self::NavigationProperty(v) => vec![v.target_path()],
            Self::Operation(v) => {
                let name = v.full_name();
                let overload = v.binding_parameter().map(|p| {
                    format!("{name}({})", model.normalize_target(&p.ptype.to_string()))
                });
                overload.into_iter().chain([name]).collect()
            }
            Self::OperationImport(v) => vec![v.target_path()],
        }
    }
}
