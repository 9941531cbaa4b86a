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

use odata_openapi::edm::Edmx;
use odata_openapi::edm::Model;
use odata_openapi::writer::to_json;
use odata_openapi::Settings;
use openapiv3::OpenAPI;
use openapiv3::PathItem;
use openapiv3::ReferenceOr;
use pretty_assertions::assert_eq;
use serde_json::Value;

const CSDL: &str = r#"
  <edmx:Edmx Version="4.0">
    <edmx:DataServices>
      <Schema Namespace="NS">
        <EntityType Name="Customer">
          <Key><PropertyRef Name="ID"/></Key>
          <Property Name="ID" Type="Edm.Int32" Nullable="false"/>
          <Property Name="Name" Type="Edm.String"/>
          <NavigationProperty Name="Orders" Type="Collection(NS.Order)"
                              ContainsTarget="true"/>
        </EntityType>
        <EntityType Name="Order">
          <Key><PropertyRef Name="OrderID"/></Key>
          <Property Name="OrderID" Type="Edm.Int64" Nullable="false"/>
        </EntityType>
        <Action Name="Promote" IsBound="true">
          <Parameter Name="customer" Type="NS.Customer"/>
          <Parameter Name="level" Type="Edm.Int32"/>
        </Action>
        <Function Name="Best" IsBound="true">
          <Parameter Name="customers" Type="Collection(NS.Customer)"/>
          <ReturnType Type="NS.Customer"/>
        </Function>
        <EntityContainer Name="Container">
          <EntitySet Name="Customers" EntityType="NS.Customer"/>
          <EntitySet Name="Archive" EntityType="NS.Customer">
            <Annotation Term="Org.OData.Capabilities.V1.InsertRestrictions">
              <Record>
                <PropertyValue Property="Insertable" Bool="false"/>
                <PropertyValue Property="NonInsertableNavigationProperties">
                  <Collection>
                    <NavigationPropertyPath>Orders</NavigationPropertyPath>
                  </Collection>
                </PropertyValue>
              </Record>
            </Annotation>
            <Annotation Term="Org.OData.Capabilities.V1.DeleteRestrictions">
              <Record>
                <PropertyValue Property="Deletable" Bool="false"/>
              </Record>
            </Annotation>
          </EntitySet>
        </EntityContainer>
      </Schema>
    </edmx:DataServices>
  </edmx:Edmx>"#;

fn convert(settings: &Settings) -> OpenAPI {
    let docs = vec![Edmx::parse(CSDL).unwrap()];
    let model = Model::build(&docs).unwrap();
    odata_openapi::convert(&model, settings).unwrap()
}

fn item<'d>(document: &'d OpenAPI, path: &str) -> &'d PathItem {
    match document.paths.paths.get(path) {
        Some(ReferenceOr::Item(item)) => item,
        _ => panic!("path {path} is not generated"),
    }
}

fn verbs(item: &PathItem) -> Vec<&'static str> {
    [
        ("get", item.get.is_some()),
        ("put", item.put.is_some()),
        ("post", item.post.is_some()),
        ("delete", item.delete.is_some()),
        ("patch", item.patch.is_some()),
    ]
    .into_iter()
    .filter_map(|(verb, present)| present.then_some(verb))
    .collect()
}

#[test]
fn verbs_of_path_kinds() {
    let document = convert(&Settings::default());
    assert_eq!(verbs(item(&document, "/Customers")), vec!["get", "post"]);
    assert_eq!(
        verbs(item(&document, "/Customers({ID})")),
        vec!["get", "delete", "patch"]
    );
    assert_eq!(verbs(item(&document, "/Customers/$count")), vec!["get"]);
    assert_eq!(
        verbs(item(&document, "/Customers({ID})/Orders")),
        vec!["get", "post"]
    );
    assert_eq!(
        verbs(item(&document, "/Customers({ID})/NS.Promote")),
        vec!["post"]
    );
    assert_eq!(verbs(item(&document, "/Customers/NS.Best()")), vec!["get"]);
}

#[test]
fn restrictions_remove_verbs() {
    let document = convert(&Settings::default());
    assert_eq!(verbs(item(&document, "/Archive")), vec!["get"]);
    assert_eq!(verbs(item(&document, "/Archive({ID})")), vec!["get", "patch"]);
    assert_eq!(verbs(item(&document, "/Archive({ID})/Orders")), vec!["get"]);
    assert_eq!(
        verbs(item(&document, "/Archive({ID})/Orders({OrderID})")),
        vec!["get", "delete", "patch"]
    );
}

#[test]
fn path_parameters() {
    let document = convert(&Settings::default());
    let item = item(&document, "/Customers({ID})/Orders({OrderID})");
    let names = item
        .parameters
        .iter()
        .filter_map(|p| match p {
            ReferenceOr::Item(p) => Some(p.parameter_data_ref().name.as_str()),
            ReferenceOr::Reference { .. } => None,
        })
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["ID", "OrderID"]);
}

#[test]
fn json_document() {
    let settings = Settings {
        service_root: "https://example.com/odata".into(),
        ..Settings::default()
    };
    let json: Value = serde_json::from_str(&to_json(&convert(&settings)).unwrap()).unwrap();
    assert_eq!(json["openapi"], "3.0.1");
    assert_eq!(json["info"]["title"], "OData Service for namespace NS");
    assert_eq!(json["servers"][0]["url"], "https://example.com/odata");
    assert_eq!(
        json["paths"]["/Customers"]["get"]["responses"]["200"]["content"]["application/json"]
            ["schema"]["$ref"],
        "#/components/schemas/NS.CustomerCollectionResponse"
    );
    assert_eq!(
        json["paths"]["/Customers/$count"]["get"]["responses"]["200"]["content"]["text/plain"]
            ["schema"]["type"],
        "integer"
    );
    assert_eq!(
        json["components"]["schemas"]["NS.Order"]["properties"]["OrderID"]["format"],
        "int64"
    );
}
