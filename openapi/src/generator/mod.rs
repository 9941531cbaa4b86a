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

/// Assembly of the OpenAPI document.
pub mod document;

/// Operations of path items.
pub mod operations;

/// Parameter components and builders.
pub mod parameters;

/// Response and request body components and builders.
pub mod responses;

/// Schemas of the model types.
pub mod schema;

#[doc(inline)]
pub use document::Document;
#[doc(inline)]
pub use operations::OperationGenerator;
#[doc(inline)]
pub use schema::SchemaGenerator;

/// Reference to a component of the document.
#[must_use]
pub fn reference(kind: &str, name: &str) -> String {
    format!("#/components/{kind}/{name}")
}
