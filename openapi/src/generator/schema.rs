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

//! Schemas of the model types.

use crate::edm::edmx::TypeName;
use crate::edm::model::ComplexTypeRef;
use crate::edm::model::EntityTypeRef;
use crate::edm::model::EnumTypeRef;
use crate::edm::model::NavigationPropertyRef;
use crate::edm::model::PrimitiveKind;
use crate::edm::model::SchemaType;
use crate::edm::model::StructuralPropertyRef;
use crate::edm::model::Target;
use crate::edm::model::TypeDefinitionRef;
use crate::edm::Model;
use crate::generator::reference;
use crate::settings::Settings;
use crate::vocabulary::core::description;
use crate::vocabulary::core::is_computed;
use crate::Error;
use indexmap::IndexMap;
use openapiv3::AnySchema;
use openapiv3::ArrayType;
use openapiv3::BooleanType;
use openapiv3::IntegerFormat;
use openapiv3::IntegerType;
use openapiv3::NumberFormat;
use openapiv3::NumberType;
use openapiv3::ObjectType;
use openapiv3::ReferenceOr;
use openapiv3::Schema;
use openapiv3::SchemaData;
use openapiv3::SchemaKind;
use openapiv3::StringFormat;
use openapiv3::StringType;
use openapiv3::Type;
use openapiv3::VariantOrUnknownOrEmpty;

/// Name of the OData error schema component.
pub const ERROR_SCHEMA: &str = "odata.error";

#[must_use]
pub fn schema_ref(name: &str) -> ReferenceOr<Schema> {
    ReferenceOr::ref_(&reference("schemas", name))
}

fn of_type(schema_type: Type) -> Schema {
    Schema {
        schema_data: SchemaData::default(),
        schema_kind: SchemaKind::Type(schema_type),
    }
}

fn formatted_string(format: VariantOrUnknownOrEmpty<StringFormat>) -> Schema {
    of_type(Type::String(StringType {
        format,
        ..StringType::default()
    }))
}

/// Plain `string` schema.
#[must_use]
pub fn string() -> Schema {
    of_type(Type::String(StringType::default()))
}

fn integer(format: VariantOrUnknownOrEmpty<IntegerFormat>, minimum: i64, maximum: i64) -> Schema {
    of_type(Type::Integer(IntegerType {
        format,
        minimum: Some(minimum),
        maximum: Some(maximum),
        ..IntegerType::default()
    }))
}

fn number(format: VariantOrUnknownOrEmpty<NumberFormat>) -> Schema {
    of_type(Type::Number(NumberType {
        format,
        ..NumberType::default()
    }))
}

fn any_of(schemas: Vec<Schema>) -> Schema {
    Schema {
        schema_data: SchemaData::default(),
        schema_kind: SchemaKind::AnyOf {
            any_of: schemas.into_iter().map(ReferenceOr::Item).collect(),
        },
    }
}

/// Array of the items.
#[must_use]
pub fn array(items: ReferenceOr<Schema>) -> Schema {
    of_type(Type::Array(ArrayType {
        items: Some(boxed(items)),
        min_items: None,
        max_items: None,
        unique_items: false,
    }))
}

/// Object with the properties.
#[must_use]
pub fn object(properties: IndexMap<String, ReferenceOr<Schema>>) -> Schema {
    of_type(Type::Object(ObjectType {
        properties: properties
            .into_iter()
            .map(|(name, schema)| (name, boxed(schema)))
            .collect(),
        ..ObjectType::default()
    }))
}

fn boxed(schema: ReferenceOr<Schema>) -> ReferenceOr<Box<Schema>> {
    match schema {
        ReferenceOr::Item(v) => ReferenceOr::Item(Box::new(v)),
        ReferenceOr::Reference { reference } => ReferenceOr::Reference { reference },
    }
}

/// `integer` schema for `$count` responses.
#[must_use]
pub fn count() -> Schema {
    of_type(Type::Integer(IntegerType {
        format: VariantOrUnknownOrEmpty::Item(IntegerFormat::Int64),
        minimum: Some(0),
        ..IntegerType::default()
    }))
}

/// Binary content of media resources.
#[must_use]
pub fn binary() -> Schema {
    formatted_string(VariantOrUnknownOrEmpty::Item(StringFormat::Binary))
}

fn unknown<T>(format: &str) -> VariantOrUnknownOrEmpty<T> {
    VariantOrUnknownOrEmpty::Unknown(format.into())
}

/// Schema of an `Edm` primitive type.
#[must_use]
pub fn primitive(kind: PrimitiveKind, ieee754_compatible: bool) -> Schema {
    let mut schema = match kind {
        PrimitiveKind::Binary => formatted_string(unknown("base64url")),
        PrimitiveKind::Boolean => of_type(Type::Boolean(BooleanType::default())),
        PrimitiveKind::Byte => integer(unknown("uint8"), 0, i64::from(u8::MAX)),
        PrimitiveKind::SByte => integer(unknown("int8"), i64::from(i8::MIN), i64::from(i8::MAX)),
        PrimitiveKind::Int16 => integer(unknown("int16"), i64::from(i16::MIN), i64::from(i16::MAX)),
        PrimitiveKind::Int32 => integer(
            VariantOrUnknownOrEmpty::Item(IntegerFormat::Int32),
            i64::from(i32::MIN),
            i64::from(i32::MAX),
        ),
        PrimitiveKind::Int64 => {
            let int64 = of_type(Type::Integer(IntegerType {
                format: VariantOrUnknownOrEmpty::Item(IntegerFormat::Int64),
                ..IntegerType::default()
            }));
            if ieee754_compatible {
                any_of(vec![int64, string()])
            } else {
                int64
            }
        }
        PrimitiveKind::Decimal => {
            let decimal = number(unknown("decimal"));
            if ieee754_compatible {
                any_of(vec![decimal, string()])
            } else {
                decimal
            }
        }
        PrimitiveKind::Single => number(VariantOrUnknownOrEmpty::Item(NumberFormat::Float)),
        PrimitiveKind::Double => number(VariantOrUnknownOrEmpty::Item(NumberFormat::Double)),
        PrimitiveKind::Date => formatted_string(VariantOrUnknownOrEmpty::Item(StringFormat::Date)),
        PrimitiveKind::DateTimeOffset => {
            formatted_string(VariantOrUnknownOrEmpty::Item(StringFormat::DateTime))
        }
        PrimitiveKind::Duration => formatted_string(unknown("duration")),
        PrimitiveKind::TimeOfDay => formatted_string(unknown("time")),
        PrimitiveKind::Guid => formatted_string(unknown("uuid")),
        PrimitiveKind::String => string(),
        PrimitiveKind::Stream => binary(),
        PrimitiveKind::PrimitiveType | PrimitiveKind::Untyped => Schema {
            schema_data: SchemaData::default(),
            schema_kind: SchemaKind::Any(AnySchema::default()),
        },
        // Geography and geometry types.
        _ => object(IndexMap::new()),
    };
    schema.schema_data.title = kind.is_spatial().then(|| kind.to_string());
    schema
}

fn nullable(schema: ReferenceOr<Schema>, is_nullable: bool) -> ReferenceOr<Schema> {
    match schema {
        ReferenceOr::Item(mut schema) => {
            schema.schema_data.nullable = is_nullable;
            ReferenceOr::Item(schema)
        }
        reference if is_nullable => ReferenceOr::Item(Schema {
            schema_data: SchemaData {
                nullable: true,
                ..SchemaData::default()
            },
            schema_kind: SchemaKind::AnyOf {
                any_of: vec![reference],
            },
        }),
        reference => reference,
    }
}

/// Generator of type schemas.
pub struct SchemaGenerator<'m, 'a> {
    model: &'m Model<'a>,
    settings: &'m Settings,
}

impl<'m, 'a> SchemaGenerator<'m, 'a> {
    #[must_use]
    pub const fn new(model: &'m Model<'a>, settings: &'m Settings) -> Self {
        Self { model, settings }
    }

    /// Schemas of all types of the model keyed by the qualified type
    /// name.
    ///
    /// # Errors
    ///
    /// Returns error if a type cannot be represented.
    pub fn components(&self) -> Result<IndexMap<String, ReferenceOr<Schema>>, Error> {
        let model = self.model;
        let mut schemas = IndexMap::new();
        for et in model.entity_types() {
            let name = et.full_name();
            let schema = self
                .entity_type(et)
                .map_err(|e| Error::Schema(name.clone(), Box::new(e)))?;
            schemas.insert(name, ReferenceOr::Item(schema));
        }
        for ct in model.complex_types() {
            let name = ct.full_name();
            let schema = self
                .complex_type(ct)
                .map_err(|e| Error::Schema(name.clone(), Box::new(e)))?;
            schemas.insert(name, ReferenceOr::Item(schema));
        }
        for et in model.enum_types() {
            schemas.insert(et.full_name(), ReferenceOr::Item(enum_type(et)));
        }
        for td in model.type_definitions() {
            let name = td.full_name();
            let schema = self
                .type_definition(td)
                .map_err(|e| Error::Schema(name.clone(), Box::new(e)))?;
            schemas.insert(name, ReferenceOr::Item(schema));
        }
        schemas.insert(ERROR_SCHEMA.into(), ReferenceOr::Item(error()));
        Ok(schemas)
    }

    fn entity_type(&self, et: EntityTypeRef<'a>) -> Result<Schema, Error> {
        let model = self.model;
        let mut properties = IndexMap::new();
        for p in &et.element.properties {
            let property = StructuralPropertyRef::new(et.schema, &et.element.name, p);
            properties.insert(property.name().to_string(), self.structural_property(property)?);
        }
        for p in &et.element.navigation_properties {
            let property = NavigationPropertyRef::new(et.schema, &et.element.name, p);
            properties.insert(property.name().to_string(), self.navigation_property(property)?);
        }
        let base = model.base_type(et).map(|base| base.full_name());
        Ok(structured(
            object(properties),
            base.as_deref(),
            description(model, &Target::EntityType(et)),
        ))
    }

    fn complex_type(&self, ct: ComplexTypeRef<'a>) -> Result<Schema, Error> {
        let model = self.model;
        let mut properties = IndexMap::new();
        for p in &ct.element.properties {
            let property = StructuralPropertyRef::new(ct.schema, &ct.element.name, p);
            properties.insert(property.name().to_string(), self.structural_property(property)?);
        }
        for p in &ct.element.navigation_properties {
            let property = NavigationPropertyRef::new(ct.schema, &ct.element.name, p);
            properties.insert(property.name().to_string(), self.navigation_property(property)?);
        }
        let base = model.complex_base_type(ct).map(|base| base.full_name());
        Ok(structured(
            object(properties),
            base.as_deref(),
            description(model, &Target::ComplexType(ct)),
        ))
    }

    fn type_definition(&self, td: TypeDefinitionRef<'a>) -> Result<Schema, Error> {
        match self.model.resolve_type(&td.underlying_type)? {
            SchemaType::Primitive(kind) => Ok(primitive(kind, self.settings.ieee754_compatible)),
            other => Err(Error::Unsupported(format!(
                "underlying type {} of type definition",
                other.full_name()
            ))),
        }
    }

    fn structural_property(
        &self,
        property: StructuralPropertyRef<'a>,
    ) -> Result<ReferenceOr<Schema>, Error> {
        let model = self.model;
        if let SchemaType::Entity(et) = model.resolve_type_name(&property.ptype)? {
            return Err(Error::Unsupported(format!(
                "entity type {} as type of structural property {}",
                et.full_name(),
                property.target_path()
            )));
        }
        let target = Target::StructuralProperty(property);
        let schema = self.type_schema(&property.ptype)?;
        let mut schema = nullable(schema, property.is_nullable());
        if let ReferenceOr::Item(schema) = &mut schema {
            schema.schema_data.read_only = is_computed(model, &target);
            schema.schema_data.description = description(model, &target).map(Into::into);
        }
        Ok(schema)
    }

    fn navigation_property(
        &self,
        property: NavigationPropertyRef<'a>,
    ) -> Result<ReferenceOr<Schema>, Error> {
        let target = self.model.navigation_target(property)?;
        let item = schema_ref(&target.full_name());
        if property.ptype.is_collection() {
            Ok(ReferenceOr::Item(array(item)))
        } else {
            Ok(nullable(item, property.nullable.unwrap_or(true)))
        }
    }

    /// Schema of the property, parameter or return type.
    ///
    /// # Errors
    ///
    /// Returns error if the type is not found or is not supported.
    pub fn type_schema(&self, tname: &TypeName) -> Result<ReferenceOr<Schema>, Error> {
        let item = match self.model.resolve_type_name(tname)? {
            SchemaType::Primitive(kind) => {
                ReferenceOr::Item(primitive(kind, self.settings.ieee754_compatible))
            }
            other => schema_ref(&other.full_name()),
        };
        if tname.is_collection() {
            Ok(ReferenceOr::Item(array(item)))
        } else {
            Ok(item)
        }
    }

    /// Response of a collection of entities: `value` array with
    /// optional count and next link.
    #[must_use]
    pub fn collection(&self, items: ReferenceOr<Schema>) -> Schema {
        let mut properties = IndexMap::new();
        properties.insert("value".to_string(), ReferenceOr::Item(array(items)));
        if self.settings.enable_count {
            properties.insert("@odata.count".to_string(), ReferenceOr::Item(count()));
        }
        if self.settings.enable_pagination {
            properties.insert(
                "@odata.nextLink".to_string(),
                ReferenceOr::Item(string()),
            );
        }
        let mut schema = object(properties);
        schema.schema_data.title = Some("Collection of entities".into());
        schema
    }
}

/// Object schema extending the base type schema.
fn structured(schema: Schema, base: Option<&str>, description: Option<&str>) -> Schema {
    let mut schema = match base {
        Some(base) => Schema {
            schema_data: SchemaData::default(),
            schema_kind: SchemaKind::AllOf {
                all_of: vec![schema_ref(base), ReferenceOr::Item(schema)],
            },
        },
        None => schema,
    };
    schema.schema_data.description = description.map(Into::into);
    schema
}

fn enum_type(et: EnumTypeRef<'_>) -> Schema {
    let mut schema = of_type(Type::String(StringType {
        enumeration: et
            .members
            .iter()
            .map(|m| Some(m.name.to_string()))
            .collect(),
        ..StringType::default()
    }));
    schema.schema_data.title = Some(et.name().into());
    schema
}

fn error() -> Schema {
    let text = || ReferenceOr::Item(string());
    let mut main = IndexMap::new();
    main.insert("code".to_string(), text());
    main.insert("message".to_string(), text());
    main.insert("target".to_string(), text());
    let mut details = IndexMap::new();
    details.insert("code".to_string(), text());
    details.insert("message".to_string(), text());
    details.insert("target".to_string(), text());
    main.insert(
        "details".to_string(),
        ReferenceOr::Item(array(ReferenceOr::Item(object(details)))),
    );
    let mut error = object(main);
    if let SchemaKind::Type(Type::Object(v)) = &mut error.schema_kind {
        v.required = vec!["code".into(), "message".into()];
    }
    let mut properties = IndexMap::new();
    properties.insert("error".to_string(), ReferenceOr::Item(error));
    let mut schema = object(properties);
    if let SchemaKind::Type(Type::Object(v)) = &mut schema.schema_kind {
        v.required = vec!["error".into()];
    }
    schema
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::edm::Edmx;
    use serde_json::json;
    use serde_json::to_value;

    const MODEL: &str = r#"
      <edmx:Edmx Version="4.0">
        <edmx:DataServices>
          <Schema Namespace="Shop">
            <EntityType Name="Item">
              <Key><PropertyRef Name="ID"/></Key>
              <Property Name="ID" Type="Edm.Int64" Nullable="false">
                <Annotation Term="Org.OData.Core.V1.Computed"/>
              </Property>
              <Property Name="Price" Type="Edm.Decimal"/>
              <Property Name="Color" Type="Shop.Color"/>
            </EntityType>
            <EntityType Name="Book" BaseType="Shop.Item">
              <Property Name="Pages" Type="Collection(Edm.Int32)"/>
            </EntityType>
            <EntityType Name="Broken">
              <Key><PropertyRef Name="ID"/></Key>
              <Property Name="ID" Type="Edm.Int32" Nullable="false"/>
              <Property Name="Item" Type="Shop.Item"/>
            </EntityType>
            <EnumType Name="Color">
              <Member Name="Red"/>
              <Member Name="Green"/>
            </EnumType>
          </Schema>
        </edmx:DataServices>
      </edmx:Edmx>"#;

    #[test]
    fn test_primitive() {
        let value = to_value(primitive(PrimitiveKind::Int64, true)).unwrap();
        assert_eq!(
            value,
            json!({"anyOf": [{"type": "integer", "format": "int64"}, {"type": "string"}]})
        );
        let value = to_value(primitive(PrimitiveKind::Guid, false)).unwrap();
        assert_eq!(value, json!({"type": "string", "format": "uuid"}));
        let value = to_value(primitive(PrimitiveKind::Byte, false)).unwrap();
        assert_eq!(value["type"], json!("integer"));
        assert_eq!(value["format"], json!("uint8"));
        assert_eq!(value["maximum"], json!(255));
        let value = to_value(primitive(PrimitiveKind::Decimal, false)).unwrap();
        assert_eq!(value, json!({"type": "number", "format": "decimal"}));
        let value = to_value(primitive(PrimitiveKind::GeographyPoint, false)).unwrap();
        assert_eq!(value["title"], json!("Edm.GeographyPoint"));
    }

    #[test]
    fn test_entity_types() {
        let docs = vec![Edmx::parse(MODEL).unwrap()];
        let model = Model::build(&docs).unwrap();
        let settings = Settings::default();
        let schemas = SchemaGenerator::new(&model, &settings);

        let item = model.entity_type_by_name("Shop.Item").unwrap();
        let value = to_value(schemas.entity_type(item).unwrap()).unwrap();
        assert_eq!(value["properties"]["ID"]["readOnly"], json!(true));
        assert_eq!(
            value["properties"]["Color"],
            json!({"nullable": true, "anyOf": [{"$ref": "#/components/schemas/Shop.Color"}]})
        );

        let book = model.entity_type_by_name("Shop.Book").unwrap();
        let value = to_value(schemas.entity_type(book).unwrap()).unwrap();
        assert_eq!(value["allOf"][0], json!({"$ref": "#/components/schemas/Shop.Item"}));
        assert_eq!(value["allOf"][1]["properties"]["Pages"]["type"], json!("array"));

        let broken = model.entity_type_by_name("Shop.Broken").unwrap();
        assert!(matches!(
            schemas.entity_type(broken),
            Err(Error::Unsupported(_))
        ));
        assert!(matches!(
            schemas.components(),
            Err(Error::Schema(name, _)) if name == "Shop.Broken"
        ));
    }
}
