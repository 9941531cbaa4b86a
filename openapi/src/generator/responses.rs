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

//! Responses and request bodies shared by the operations.

use crate::generator::reference;
use crate::generator::schema::object;
use crate::generator::schema::schema_ref;
use crate::generator::schema::string;
use crate::generator::schema::ERROR_SCHEMA;
use indexmap::IndexMap;
use openapiv3::MediaType;
use openapiv3::ReferenceOr;
use openapiv3::RequestBody;
use openapiv3::Response;
use openapiv3::Responses;
use openapiv3::Schema;
use openapiv3::StatusCode;
use std::sync::LazyLock;

pub const JSON: &str = "application/json";
pub const OCTET_STREAM: &str = "application/octet-stream";
pub const TEXT_PLAIN: &str = "text/plain";

/// Name of the error response component.
pub const ERROR: &str = "error";
/// Name of the response component without content.
pub const NO_CONTENT: &str = "204";
/// Request body of `POST` to a collection of references.
pub const REF_POST_BODY: &str = "refPostBody";
/// Request body of `PUT` to a single reference.
pub const REF_PUT_BODY: &str = "refPutBody";

/// Responses every document refers to.
static KNOWN_RESPONSES: LazyLock<IndexMap<&'static str, Response>> = LazyLock::new(|| {
    IndexMap::from([
        (
            ERROR,
            Response {
                description: "error".into(),
                content: content(JSON, schema_ref(ERROR_SCHEMA)),
                ..Response::default()
            },
        ),
        (
            NO_CONTENT,
            Response {
                description: "Success".into(),
                ..Response::default()
            },
        ),
    ])
});

#[must_use]
pub fn content(media_type: &str, schema: ReferenceOr<Schema>) -> IndexMap<String, MediaType> {
    IndexMap::from([(
        media_type.to_string(),
        MediaType {
            schema: Some(schema),
            ..MediaType::default()
        },
    )])
}

/// Response components.
#[must_use]
pub fn components() -> IndexMap<String, ReferenceOr<Response>> {
    KNOWN_RESPONSES
        .iter()
        .map(|(name, response)| ((*name).to_string(), ReferenceOr::Item(response.clone())))
        .collect()
}

/// Request body components.
#[must_use]
pub fn request_body_components() -> IndexMap<String, ReferenceOr<RequestBody>> {
    let reference = || {
        object(IndexMap::from([(
            "@odata.id".to_string(),
            ReferenceOr::Item(string()),
        )]))
    };
    IndexMap::from([
        (
            REF_POST_BODY.to_string(),
            ReferenceOr::Item(RequestBody {
                description: Some("New navigation property ref value".into()),
                content: content(JSON, ReferenceOr::Item(reference())),
                required: true,
                ..RequestBody::default()
            }),
        ),
        (
            REF_PUT_BODY.to_string(),
            ReferenceOr::Item(RequestBody {
                description: Some("New navigation property ref values".into()),
                content: content(JSON, ReferenceOr::Item(reference())),
                required: true,
                ..RequestBody::default()
            }),
        ),
    ])
}

#[must_use]
pub fn request_body_ref(name: &str) -> ReferenceOr<RequestBody> {
    ReferenceOr::ref_(&reference("requestBodies", name))
}

/// Required request body.
#[must_use]
pub fn request_body(
    description: &str,
    media_type: &str,
    schema: ReferenceOr<Schema>,
) -> ReferenceOr<RequestBody> {
    ReferenceOr::Item(RequestBody {
        description: Some(description.into()),
        content: content(media_type, schema),
        required: true,
        ..RequestBody::default()
    })
}

/// Responses with one success status and the error response as the
/// default.
#[must_use]
pub fn responses(status: u16, response: ReferenceOr<Response>) -> Responses {
    Responses {
        default: Some(ReferenceOr::ref_(&reference("responses", ERROR))),
        responses: IndexMap::from([(StatusCode::Code(status), response)]),
        ..Responses::default()
    }
}

/// `200` with the content.
#[must_use]
pub fn ok(description: &str, media_type: &str, schema: ReferenceOr<Schema>) -> Responses {
    responses(
        200,
        ReferenceOr::Item(Response {
            description: description.into(),
            content: content(media_type, schema),
            ..Response::default()
        }),
    )
}

/// `201` with the created entity.
#[must_use]
pub fn created(description: &str, schema: ReferenceOr<Schema>) -> Responses {
    responses(
        201,
        ReferenceOr::Item(Response {
            description: description.into(),
            content: content(JSON, schema),
            ..Response::default()
        }),
    )
}

/// `204` without content.
#[must_use]
pub fn no_content() -> Responses {
    responses(204, ReferenceOr::ref_(&reference("responses", NO_CONTENT)))
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;
    use serde_json::to_value;

    #[test]
    fn test_no_content() {
        assert_eq!(
            to_value(no_content()).unwrap(),
            json!({
                "default": {"$ref": "#/components/responses/error"},
                "204": {"$ref": "#/components/responses/204"},
            })
        );
    }

    #[test]
    fn test_components() {
        let names = components().into_keys().collect::<Vec<_>>();
        assert_eq!(names, vec![ERROR, NO_CONTENT]);
        assert_eq!(request_body_components().len(), 2);
    }
}
