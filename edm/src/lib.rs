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

//! Reader of OData CSDL documents and a read-only index over the
//! Entity Data Model they describe.
//!
//! `edmx` holds the deserialized and validated CSDL documents. `model`
//! builds a borrowing index over a set of documents and answers the
//! graph queries needed by consumers: navigation sources, inherited
//! keys and properties, derived types, bound operations and vocabulary
//! annotations of any annotatable element.

/// CSDL (EDMX) parser and validator.
pub mod edmx;

/// Read-only index over validated EDMX documents.
pub mod model;

#[doc(inline)]
pub use edmx::Edmx;
#[doc(inline)]
pub use edmx::ValidateError;
#[doc(inline)]
pub use model::Model;
