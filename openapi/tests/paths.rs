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
use odata_openapi::PathProvider;
use odata_openapi::Settings;
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;

fn csdl(types: &str, container: &str) -> String {
    format!(
        r#"<edmx:Edmx Version="4.0">
             <edmx:DataServices>
               <Schema Namespace="NS">
                 {types}
                 <EntityContainer Name="Container">
                   {container}
                 </EntityContainer>
               </Schema>
             </edmx:DataServices>
           </edmx:Edmx>"#
    )
}

fn paths(csdl: &str, settings: &Settings) -> Vec<String> {
    let docs = vec![Edmx::parse(csdl).unwrap()];
    let model = Model::build(&docs).unwrap();
    PathProvider::new(&model, settings)
        .paths()
        .unwrap()
        .iter()
        .map(|path| path.name(settings))
        .collect()
}

fn path_set(csdl: &str, settings: &Settings) -> BTreeSet<String> {
    paths(csdl, settings).into_iter().collect()
}

fn set(paths: &[&str]) -> BTreeSet<String> {
    paths.iter().map(ToString::to_string).collect()
}

const CUSTOMER: &str = r#"
    <EntityType Name="Customer">
      <Key><PropertyRef Name="ID"/></Key>
      <Property Name="ID" Type="Edm.Int32" Nullable="false"/>
    </EntityType>"#;

const ORDER: &str = r#"
    <EntityType Name="Order">
      <Key><PropertyRef Name="id"/></Key>
      <Property Name="id" Type="Edm.Int32" Nullable="false"/>
      <NavigationProperty Name="SingleCustomer" Type="NS.Customer"/>
      <NavigationProperty Name="Customers" Type="Collection(NS.Customer)"/>
    </EntityType>"#;

#[test]
fn single_entity_set() {
    let csdl = csdl(CUSTOMER, r#"<EntitySet Name="Customers" EntityType="NS.Customer"/>"#);
    assert_eq!(
        path_set(&csdl, &Settings::default()),
        set(&["/Customers", "/Customers({ID})", "/Customers/$count"])
    );
}

#[test]
fn singleton_adds_one_path() {
    let csdl = csdl(
        CUSTOMER,
        r#"<EntitySet Name="Customers" EntityType="NS.Customer"/>
           <Singleton Name="Me" Type="NS.Customer"/>"#,
    );
    assert_eq!(
        path_set(&csdl, &Settings::default()),
        set(&["/Customers", "/Customers({ID})", "/Customers/$count", "/Me"])
    );
}

#[test]
fn dollar_count_settings_and_restrictions() {
    let container = r#"<EntitySet Name="Customers" EntityType="NS.Customer"/>"#;
    let settings = Settings {
        enable_dollar_count_path: false,
        ..Settings::default()
    };
    assert_eq!(
        path_set(&csdl(CUSTOMER, container), &settings),
        set(&["/Customers", "/Customers({ID})"])
    );

    let not_countable = r#"
        <EntityType Name="Customer">
          <Key><PropertyRef Name="ID"/></Key>
          <Property Name="ID" Type="Edm.Int32" Nullable="false"/>
          <Annotation Term="Org.OData.Capabilities.V1.CountRestrictions">
            <Record>
              <PropertyValue Property="Countable" Bool="false"/>
            </Record>
          </Annotation>
        </EntityType>"#;
    assert_eq!(
        path_set(&csdl(not_countable, container), &Settings::default()),
        set(&["/Customers", "/Customers({ID})"])
    );
}

#[test]
fn key_as_segment() {
    let csdl = csdl(CUSTOMER, r#"<EntitySet Name="Customers" EntityType="NS.Customer"/>"#);
    let settings = Settings {
        enable_key_as_segment: true,
        ..Settings::default()
    };
    assert!(path_set(&csdl, &settings).contains("/Customers/{ID}"));
}

#[test]
fn composite_key() {
    let person = r#"
        <EntityType Name="Person">
          <Key>
            <PropertyRef Name="FirstName"/>
            <PropertyRef Name="LastName"/>
          </Key>
          <Property Name="FirstName" Type="Edm.String" Nullable="false"/>
          <Property Name="LastName" Type="Edm.String" Nullable="false"/>
        </EntityType>"#;
    let csdl = csdl(person, r#"<EntitySet Name="People" EntityType="NS.Person"/>"#);
    for enable_key_as_segment in [false, true] {
        let settings = Settings {
            enable_key_as_segment,
            ..Settings::default()
        };
        assert!(path_set(&csdl, &settings)
            .contains("/People(FirstName={FirstName},LastName={LastName})"));
    }
}

fn navigation_csdl(restricted: &str) -> String {
    navigation_csdl_with(restricted, "")
}

/// Orders with navigation restrictions and extra annotations of the set.
fn navigation_csdl_with(restricted: &str, annotations: &str) -> String {
    let container = format!(
        r#"<EntitySet Name="Orders" EntityType="NS.Order">
             <NavigationPropertyBinding Path="SingleCustomer" Target="Customers"/>
             <NavigationPropertyBinding Path="Customers" Target="Customers"/>
             <Annotation Term="Org.OData.Capabilities.V1.NavigationRestrictions">
               <Record>
                 <PropertyValue Property="Referenceable" Bool="true"/>
                 {restricted}
               </Record>
             </Annotation>
             {annotations}
           </EntitySet>
           <EntitySet Name="Customers" EntityType="NS.Customer"/>"#
    );
    csdl(&format!("{CUSTOMER}{ORDER}"), &container)
}

#[test]
fn navigation_properties() {
    assert_eq!(
        path_set(&navigation_csdl(""), &Settings::default()),
        set(&[
            "/Customers",
            "/Customers({ID})",
            "/Customers/$count",
            "/Orders",
            "/Orders({id})",
            "/Orders({id})/Customers",
            "/Orders({id})/Customers({ID})",
            "/Orders({id})/Customers({ID})/$ref",
            "/Orders({id})/Customers/$count",
            "/Orders({id})/Customers/$ref",
            "/Orders({id})/SingleCustomer",
            "/Orders({id})/SingleCustomer/$ref",
            "/Orders/$count",
        ])
    );

    let settings = Settings {
        enable_navigation_property_path: false,
        ..Settings::default()
    };
    assert!(!path_set(&navigation_csdl(""), &settings)
        .iter()
        .any(|path| path.contains("Customers") && path.starts_with("/Orders")));
}

#[test]
fn navigability_none_removes_only_its_paths() {
    let all = path_set(&navigation_csdl(""), &Settings::default());
    let restricted = path_set(
        &navigation_csdl(
            r#"<PropertyValue Property="RestrictedProperties">
                 <Collection>
                   <Record>
                     <PropertyValue Property="NavigationProperty"
                                    NavigationPropertyPath="SingleCustomer"/>
                     <PropertyValue Property="Navigability"
                                    EnumMember="Org.OData.Capabilities.V1.NavigationType/None"/>
                   </Record>
                 </Collection>
               </PropertyValue>"#,
        ),
        &Settings::default(),
    );
    let removed = set(&[
        "/Orders({id})/SingleCustomer",
        "/Orders({id})/SingleCustomer/$ref",
    ]);
    assert_eq!(
        all.difference(&restricted).cloned().collect::<BTreeSet<_>>(),
        removed
    );
    assert!(restricted.is_subset(&all));
}

#[test]
fn containment() {
    let types = r#"
        <EntityType Name="Customer">
          <Key><PropertyRef Name="ID"/></Key>
          <Property Name="ID" Type="Edm.Int32" Nullable="false"/>
          <NavigationProperty Name="Addresses" Type="Collection(NS.Address)"
                              ContainsTarget="true"/>
        </EntityType>
        <EntityType Name="Address">
          <Key><PropertyRef Name="ID"/></Key>
          <Property Name="ID" Type="Edm.Int32" Nullable="false"/>
        </EntityType>"#;
    let csdl = csdl(types, r#"<EntitySet Name="Customers" EntityType="NS.Customer"/>"#);
    assert_eq!(
        path_set(&csdl, &Settings::default()),
        set(&[
            "/Customers",
            "/Customers({ID})",
            "/Customers({ID})/Addresses",
            "/Customers({ID})/Addresses({ID1})",
            "/Customers({ID})/Addresses/$count",
            "/Customers/$count",
        ])
    );
}

#[test]
fn operations() {
    let types = format!(
        r#"{CUSTOMER}
           <Action Name="Promote" IsBound="true">
             <Parameter Name="customer" Type="NS.Customer"/>
           </Action>
           <Function Name="Top" IsBound="true">
             <Parameter Name="customers" Type="Collection(NS.Customer)"/>
             <Parameter Name="n" Type="Edm.Int32"/>
             <ReturnType Type="Collection(NS.Customer)"/>
           </Function>
           <Action Name="Reset"/>"#
    );
    let csdl = csdl(
        &types,
        r#"<EntitySet Name="Customers" EntityType="NS.Customer"/>
           <ActionImport Name="Reset" Action="NS.Reset"/>"#,
    );
    let paths = path_set(&csdl, &Settings::default());
    for expected in [
        "/Customers({ID})/NS.Promote",
        "/Customers/NS.Top(n={n})",
        "/Customers/NS.Top(n={n})/$count",
        "/Reset",
    ] {
        assert!(paths.contains(expected), "{expected} in {paths:?}");
    }
    assert!(!paths.contains("/Customers/NS.Promote"));

    let settings = Settings {
        enable_unqualified_call: true,
        enable_operation_import_path: false,
        ..Settings::default()
    };
    let paths = path_set(&csdl, &settings);
    assert!(paths.contains("/Customers({ID})/Promote"));
    assert!(!paths.contains("/Reset"));
}

#[test]
fn path_prefix() {
    let csdl = csdl(CUSTOMER, r#"<EntitySet Name="Customers" EntityType="NS.Customer"/>"#);
    let settings = Settings {
        path_prefix: Some("/api/v1/".into()),
        ..Settings::default()
    };
    assert!(path_set(&csdl, &settings).contains("/api/v1/Customers({ID})"));
}

#[test]
fn idempotent_and_unique() {
    let csdl = navigation_csdl("");
    let settings = Settings::default();
    let first = paths(&csdl, &settings);
    let second = paths(&csdl, &settings);
    assert_eq!(first, second);
    assert_eq!(first.len(), first.iter().collect::<BTreeSet<_>>().len());
}

fn removed(all: &BTreeSet<String>, restricted: &BTreeSet<String>) -> BTreeSet<String> {
    assert!(restricted.is_subset(all));
    all.difference(restricted).cloned().collect()
}

#[test]
fn media_entity_and_stream_properties() {
    let photo = r#"
        <EntityType Name="Photo" HasStream="true">
          <Key><PropertyRef Name="ID"/></Key>
          <Property Name="ID" Type="Edm.Int32" Nullable="false"/>
          <Property Name="Thumbnail" Type="Edm.Stream"/>
        </EntityType>"#;
    let csdl = csdl(photo, r#"<EntitySet Name="Photos" EntityType="NS.Photo"/>"#);
    assert_eq!(
        path_set(&csdl, &Settings::default()),
        set(&[
            "/Photos",
            "/Photos({ID})",
            "/Photos({ID})/$value",
            "/Photos({ID})/Thumbnail",
            "/Photos/$count",
        ])
    );
}

#[test]
fn complex_properties() {
    let types = r#"
        <ComplexType Name="Address">
          <Property Name="Street" Type="Edm.String"/>
        </ComplexType>
        <EntityType Name="Customer">
          <Key><PropertyRef Name="ID"/></Key>
          <Property Name="ID" Type="Edm.Int32" Nullable="false"/>
          <Property Name="Home" Type="NS.Address">
            <Annotation Term="Org.OData.Capabilities.V1.ReadRestrictions">
              <Record>
                <PropertyValue Property="Readable" Bool="true"/>
              </Record>
            </Annotation>
          </Property>
          <Property Name="Addresses" Type="Collection(NS.Address)"/>
        </EntityType>"#;
    let csdl = csdl(types, r#"<EntitySet Name="Customers" EntityType="NS.Customer"/>"#);
    assert_eq!(
        path_set(&csdl, &Settings::default()),
        set(&[
            "/Customers",
            "/Customers({ID})",
            "/Customers({ID})/Home",
            "/Customers/$count",
        ])
    );

    let settings = Settings {
        require_restriction_annotations_to_generate_complex_property_paths: false,
        ..Settings::default()
    };
    assert_eq!(
        path_set(&csdl, &settings),
        set(&[
            "/Customers",
            "/Customers({ID})",
            "/Customers({ID})/Addresses",
            "/Customers({ID})/Addresses/$count",
            "/Customers({ID})/Home",
            "/Customers/$count",
        ])
    );
}

#[test]
fn alternate_keys() {
    let types = r#"
        <EntityType Name="Customer">
          <Key><PropertyRef Name="ID"/></Key>
          <Property Name="ID" Type="Edm.Int32" Nullable="false"/>
          <Property Name="Email" Type="Edm.String" Nullable="false"/>
          <Annotation Term="Org.OData.Core.V1.AlternateKeys">
            <Collection>
              <Record>
                <PropertyValue Property="Key">
                  <Collection>
                    <Record>
                      <PropertyValue Property="Alias" String="Mail"/>
                      <PropertyValue Property="Name" PropertyPath="Email"/>
                    </Record>
                  </Collection>
                </PropertyValue>
              </Record>
            </Collection>
          </Annotation>
        </EntityType>"#;
    let csdl = csdl(types, r#"<EntitySet Name="Customers" EntityType="NS.Customer"/>"#);
    let default = path_set(&csdl, &Settings::default());
    assert!(!default.contains("/Customers(Mail={Mail})"));

    let settings = Settings {
        add_alternate_key_paths: true,
        ..Settings::default()
    };
    assert_eq!(
        removed(&path_set(&csdl, &settings), &default),
        set(&["/Customers(Mail={Mail})"])
    );
}

#[test]
fn entity_set_not_indexable_by_key() {
    let container = r#"
        <EntitySet Name="Customers" EntityType="NS.Customer">
          <Annotation Term="Org.OData.Capabilities.V1.IndexableByKey" Bool="false"/>
        </EntitySet>"#;
    assert_eq!(
        path_set(&csdl(CUSTOMER, container), &Settings::default()),
        set(&["/Customers", "/Customers/$count"])
    );
}

#[test]
fn navigation_property_not_indexable_by_key() {
    let all = path_set(&navigation_csdl(""), &Settings::default());
    let restricted = path_set(
        &navigation_csdl(
            r#"<PropertyValue Property="RestrictedProperties">
                 <Collection>
                   <Record>
                     <PropertyValue Property="NavigationProperty"
                                    NavigationPropertyPath="Customers"/>
                     <PropertyValue Property="IndexableByKey" Bool="false"/>
                   </Record>
                 </Collection>
               </PropertyValue>"#,
        ),
        &Settings::default(),
    );
    assert_eq!(
        removed(&all, &restricted),
        set(&[
            "/Orders({id})/Customers({ID})",
            "/Orders({id})/Customers({ID})/$ref",
        ])
    );
}

#[test]
fn non_countable_navigation_properties() {
    let all = path_set(&navigation_csdl(""), &Settings::default());
    let restricted = path_set(
        &navigation_csdl_with(
            "",
            r#"<Annotation Term="Org.OData.Capabilities.V1.CountRestrictions">
                 <Record>
                   <PropertyValue Property="NonCountableNavigationProperties">
                     <Collection>
                       <NavigationPropertyPath>Customers</NavigationPropertyPath>
                     </Collection>
                   </PropertyValue>
                 </Record>
               </Annotation>"#,
        ),
        &Settings::default(),
    );
    assert_eq!(
        removed(&all, &restricted),
        set(&["/Orders({id})/Customers/$count"])
    );
}

#[test]
fn explicit_operation_bindings() {
    let types = r#"
        <EntityType Name="Customer">
          <Key><PropertyRef Name="ID"/></Key>
          <Property Name="ID" Type="Edm.Int32" Nullable="false"/>
          <Annotation Term="Org.OData.Core.V1.ExplicitOperationBindings">
            <Collection><String>NS.Promote</String></Collection>
          </Annotation>
        </EntityType>
        <Action Name="Promote" IsBound="true">
          <Parameter Name="customer" Type="NS.Customer"/>
        </Action>
        <Action Name="Demote" IsBound="true">
          <Parameter Name="customer" Type="NS.Customer"/>
        </Action>"#;
    let csdl = csdl(types, r#"<EntitySet Name="Customers" EntityType="NS.Customer"/>"#);
    assert_eq!(
        path_set(&csdl, &Settings::default()),
        set(&[
            "/Customers",
            "/Customers({ID})",
            "/Customers({ID})/NS.Promote",
            "/Customers/$count",
        ])
    );
}

#[test]
fn url_escape_functions() {
    let types = format!(
        r#"{CUSTOMER}
           <Function Name="Lookup" IsBound="true">
             <Parameter Name="customer" Type="NS.Customer"/>
             <Parameter Name="path" Type="Edm.String"/>
             <ReturnType Type="Edm.String"/>
             <Annotation Term="Org.OData.Core.V1.IsURLEscapeFunction" Bool="true"/>
           </Function>
           <Function Name="Search" IsBound="true">
             <Parameter Name="customer" Type="NS.Customer"/>
             <Parameter Name="path" Type="Edm.String"/>
             <Parameter Name="depth" Type="Edm.Int32"/>
             <ReturnType Type="Edm.String"/>
             <Annotation Term="Org.OData.Core.V1.IsURLEscapeFunction" Bool="true"/>
           </Function>"#
    );
    let csdl = csdl(&types, r#"<EntitySet Name="Customers" EntityType="NS.Customer"/>"#);
    let operations = |settings: &Settings| {
        path_set(&csdl, settings)
            .into_iter()
            .filter(|path| path.starts_with("/Customers({ID})") && path != "/Customers({ID})")
            .collect::<BTreeSet<_>>()
    };
    assert_eq!(
        operations(&Settings::default()),
        set(&[
            "/Customers({ID})/NS.Lookup(path={path})",
            "/Customers({ID})/NS.Search(path={path},depth={depth})",
        ])
    );

    let settings = Settings {
        enable_uri_escape_function_call: true,
        ..Settings::default()
    };
    assert_eq!(
        operations(&settings),
        set(&[
            "/Customers({ID}):/{path}",
            "/Customers({ID})/NS.Search(path={path},depth={depth})",
        ])
    );
}

#[test]
fn bound_operations_on_type_casts() {
    let types = format!(
        r#"{CUSTOMER}
           <EntityType Name="VipCustomer" BaseType="NS.Customer"/>
           <EntityType Name="GoldCustomer" BaseType="NS.Customer"/>
           <Function Name="Top" IsBound="true">
             <Parameter Name="customers" Type="Collection(NS.Customer)"/>
             <ReturnType Type="Collection(NS.Customer)"/>
           </Function>"#
    );
    let container = r#"
        <EntitySet Name="Customers" EntityType="NS.Customer">
          <Annotation Term="Org.OData.Validation.V1.DerivedTypeConstraint">
            <Collection><String>NS.VipCustomer</String></Collection>
          </Annotation>
        </EntitySet>"#;
    let csdl = csdl(&types, container);
    let casts = |settings: &Settings| {
        path_set(&csdl, settings)
            .into_iter()
            .filter(|path| path.contains("Customer/"))
            .collect::<BTreeSet<_>>()
    };
    assert_eq!(
        casts(&Settings::default()),
        set(&["/Customers/NS.VipCustomer/$count"])
    );

    let settings = Settings {
        append_bound_operations_on_derived_type_cast_segments: true,
        ..Settings::default()
    };
    assert_eq!(
        casts(&settings),
        set(&[
            "/Customers/NS.GoldCustomer/NS.Top()",
            "/Customers/NS.GoldCustomer/NS.Top()/$count",
            "/Customers/NS.VipCustomer/$count",
            "/Customers/NS.VipCustomer/NS.Top()",
            "/Customers/NS.VipCustomer/NS.Top()/$count",
        ])
    );

    let settings = Settings {
        append_bound_operations_on_derived_type_cast_segments: true,
        require_derived_types_constraint_for_bound_operations: true,
        ..Settings::default()
    };
    assert_eq!(
        casts(&settings),
        set(&[
            "/Customers/NS.VipCustomer/$count",
            "/Customers/NS.VipCustomer/NS.Top()",
            "/Customers/NS.VipCustomer/NS.Top()/$count",
        ])
    );
}
