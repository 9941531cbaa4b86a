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

use crate::edmx::Namespace;
use crate::edmx::SimpleIdentifier;
use serde::Deserialize;

/// 3.3 Element edmx:Reference
#[derive(Debug, Deserialize)]
pub struct DeReference {
    /// 3.3.1 Attribute Uri
    #[serde(rename = "@Uri")]
    pub uri: String,
    /// Child elements of Reference.
    #[serde(rename = "$value", default)]
    pub items: Vec<DeReferenceItem>,
}

#[derive(Debug, Deserialize)]
pub enum DeReferenceItem {
    Include(Include),
    IncludeAnnotations(IncludeAnnotations),
    /// Annotations on references are accepted but not used.
    Annotation(serde::de::IgnoredAny),
}

/// 3.4 Element edmx:Include
#[derive(Debug, Deserialize)]
pub struct Include {
    /// 3.4.1 Attribute `Namespace`
    #[serde(rename = "@Namespace")]
    pub namespace: Namespace,
    /// 3.4.2 Attribute `Alias`
    #[serde(rename = "@Alias")]
    pub alias: Option<SimpleIdentifier>,
}

/// 3.5 Element edmx:IncludeAnnotations
#[derive(Debug, Deserialize)]
pub struct IncludeAnnotations {
    /// 3.5.1 Attribute `TermNamespace`
    #[serde(rename = "@TermNamespace")]
    pub term_namespace: Namespace,
    /// 3.5.2 Attribute `Qualifier`
    #[serde(rename = "@Qualifier")]
    pub qualifier: Option<SimpleIdentifier>,
    /// 3.5.3 Attribute `TargetNamespace`
    #[serde(rename = "@TargetNamespace")]
    pub target_namespace: Option<Namespace>,
}

/// Validated edmx:Reference.
#[derive(Debug)]
pub struct Reference {
    pub uri: String,
    pub includes: Vec<Include>,
    pub include_annotations: Vec<IncludeAnnotations>,
}

impl DeReference {
    #[must_use]
    pub fn validate(self) -> Reference {
        let (includes, include_annotations) = self.items.into_iter().fold(
            (Vec::new(), Vec::new()),
            |(mut incs, mut inc_anns), v| {
                match v {
                    DeReferenceItem::Include(v) => incs.push(v),
                    DeReferenceItem::IncludeAnnotations(v) => inc_anns.push(v),
                    DeReferenceItem::Annotation(_) => {}
                }
                (incs, inc_anns)
            },
        );
        Reference {
            uri: self.uri,
            includes,
            include_annotations,
        }
    }
}
