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

//! Path, query and header parameters.

use crate::generator::reference;
use crate::generator::schema::array;
use crate::generator::schema::count;
use crate::generator::schema::string;
use crate::vocabulary::capabilities::CustomParameter;
use indexmap::IndexMap;
use openapiv3::ArrayType;
use openapiv3::BooleanType;
use openapiv3::HeaderStyle;
use openapiv3::Parameter;
use openapiv3::ParameterData;
use openapiv3::ParameterSchemaOrContent;
use openapiv3::PathStyle;
use openapiv3::QueryStyle;
use openapiv3::ReferenceOr;
use openapiv3::Schema;
use openapiv3::SchemaData;
use openapiv3::SchemaKind;
use openapiv3::StringType;
use openapiv3::Type;
use serde_json::Value;

pub const TOP: &str = "top";
pub const SKIP: &str = "skip";
pub const SEARCH: &str = "search";
pub const FILTER: &str = "filter";
pub const COUNT: &str = "count";

fn data(
    name: &str,
    description: Option<String>,
    required: bool,
    schema: ReferenceOr<Schema>,
) -> ParameterData {
    ParameterData {
        name: name.into(),
        description,
        required,
        deprecated: None,
        format: ParameterSchemaOrContent::Schema(schema),
        example: None,
        examples: IndexMap::new(),
        explode: None,
        extensions: IndexMap::new(),
    }
}

fn query(parameter_data: ParameterData) -> Parameter {
    Parameter::Query {
        parameter_data,
        allow_reserved: false,
        style: QueryStyle::Form,
        allow_empty_value: None,
    }
}

/// Query options shared by all collections.
#[must_use]
pub fn components() -> IndexMap<String, ReferenceOr<Parameter>> {
    let mut top = count();
    top.schema_data.example = Some(Value::from(50));
    let boolean = Schema {
        schema_data: SchemaData::default(),
        schema_kind: SchemaKind::Type(Type::Boolean(BooleanType::default())),
    };
    [
        (TOP, "Show only the first n items", ReferenceOr::Item(top)),
        (SKIP, "Skip the first n items", ReferenceOr::Item(count())),
        (SEARCH, "Search items by search phrases", ReferenceOr::Item(string())),
        (FILTER, "Filter items by property values", ReferenceOr::Item(string())),
        (COUNT, "Include count of items", ReferenceOr::Item(boolean)),
    ]
    .into_iter()
    .map(|(name, description, schema)| {
        let description = Some(description.into());
        let parameter = query(data(&format!("${name}"), description, false, schema));
        (name.to_string(), ReferenceOr::Item(parameter))
    })
    .collect()
}

#[must_use]
pub fn query_ref(name: &str) -> ReferenceOr<Parameter> {
    ReferenceOr::ref_(&reference("parameters", name))
}

/// Required path parameter.
#[must_use]
pub fn path(name: &str, description: Option<String>, schema: ReferenceOr<Schema>) -> Parameter {
    Parameter::Path {
        parameter_data: data(name, description, true, schema),
        style: PathStyle::Simple,
    }
}

/// `@id` of the reference to delete from a collection valued
/// navigation property.
#[must_use]
pub fn reference_id() -> Parameter {
    query(data(
        "@id",
        Some("The delete Uri".into()),
        true,
        ReferenceOr::Item(string()),
    ))
}

/// Comma separated list of values of the system query option
/// (`$select`, `$expand`, `$orderby`).
#[must_use]
pub fn values(name: &str, description: &str, values: Vec<String>) -> Parameter {
    let items = Schema {
        schema_data: SchemaData::default(),
        schema_kind: SchemaKind::Type(Type::String(StringType {
            enumeration: values.into_iter().map(Some).collect(),
            ..StringType::default()
        })),
    };
    let mut schema = array(ReferenceOr::Item(items));
    if let SchemaKind::Type(Type::Array(ArrayType { unique_items, .. })) = &mut schema.schema_kind {
        *unique_items = true;
    }
    let schema = ReferenceOr::Item(schema);
    let mut parameter_data = data(name, Some(description.into()), false, schema);
    parameter_data.explode = Some(false);
    query(parameter_data)
}

/// Header or query option declared by `CustomHeaders` or
/// `CustomQueryOptions`.
#[must_use]
pub fn custom(parameter: &CustomParameter, header: bool) -> Parameter {
    let mut parameter_data = data(
        &parameter.name,
        parameter.description.clone(),
        parameter.required,
        ReferenceOr::Item(string()),
    );
    parameter_data.example = parameter.example_values.first().cloned().map(Value::from);
    if let Some(url) = &parameter.documentation_url {
        parameter_data
            .extensions
            .insert("x-documentation-url".into(), Value::from(url.clone()));
    }
    if header {
        Parameter::Header {
            parameter_data,
            style: HeaderStyle::Simple,
        }
    } else {
        query(parameter_data)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;
    use serde_json::to_value;

    #[test]
    fn test_components() {
        let components = components();
        assert_eq!(
            components.keys().collect::<Vec<_>>(),
            vec![TOP, SKIP, SEARCH, FILTER, COUNT]
        );
        let top = to_value(&components[TOP]).unwrap();
        assert_eq!(top["name"], json!("$top"));
        assert_eq!(top["in"], json!("query"));
    }

    #[test]
    fn test_custom() {
        let parameter = CustomParameter {
            name: "x-tenant".into(),
            required: true,
            example_values: vec!["contoso".into()],
            ..CustomParameter::default()
        };
        let value = to_value(custom(&parameter, true)).unwrap();
        assert_eq!(value["in"], json!("header"));
        assert_eq!(value["required"], json!(true));
        assert_eq!(value["example"], json!("contoso"));
    }
}
