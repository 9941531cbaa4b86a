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

/// Segments of resource paths.
pub mod segment;

/// Resource path.
pub mod odata_path;

/// Generation of all resource paths of a model.
pub mod provider;

#[doc(inline)]
pub use odata_path::ODataPath;
#[doc(inline)]
pub use odata_path::ODataPathKind;
#[doc(inline)]
pub use odata_path::RenderedPath;
#[doc(inline)]
pub use provider::PathProvider;
#[doc(inline)]
pub use segment::Error as SegmentError;
#[doc(inline)]
pub use segment::Segment;
