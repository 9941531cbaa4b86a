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

use crate::edmx::QualifiedTypeName;
use crate::edmx::SimpleIdentifier;
use serde::Deserialize;
use std::error::Error as StdError;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

/// 14.2 Element edm:Annotations
#[derive(Debug, Deserialize)]
pub struct Annotations {
    /// 14.2.1 Attribute `Target`
    #[serde(rename = "@Target")]
    pub target: String,
    /// 14.2.2 Attribute `Qualifier`
    #[serde(rename = "@Qualifier")]
    pub qualifier: Option<SimpleIdentifier>,
    #[serde(rename = "Annotation", default)]
    pub annotations: Vec<Annotation>,
}

/// 14.3 Element edm:Annotation
#[derive(Debug, Deserialize)]
pub struct DeAnnotation {
    /// 14.3.1 Attribute `Term`
    #[serde(rename = "@Term")]
    pub term: QualifiedTypeName,
    /// 14.3.2 Attribute `Qualifier`
    #[serde(rename = "@Qualifier")]
    pub qualifier: Option<SimpleIdentifier>,
    #[serde(rename = "@String")]
    pub string: Option<String>,
    #[serde(rename = "@Bool")]
    pub bool_value: Option<bool>,
    #[serde(rename = "@Int")]
    pub int_value: Option<i64>,
    #[serde(rename = "@Float")]
    pub float_value: Option<f64>,
    #[serde(rename = "@Decimal")]
    pub decimal_value: Option<String>,
    #[serde(rename = "@EnumMember")]
    pub enum_member: Option<String>,
    #[serde(rename = "@Path")]
    pub path: Option<String>,
    #[serde(rename = "@PropertyPath")]
    pub property_path: Option<String>,
    #[serde(rename = "@NavigationPropertyPath")]
    pub navigation_property_path: Option<String>,
    #[serde(rename = "@AnnotationPath")]
    pub annotation_path: Option<String>,
    /// Element expressions and nested annotations.
    #[serde(rename = "$value", default)]
    pub items: Vec<DeExpression>,
}

/// 14.4 Constant and 14.5 Dynamic expressions in element notation.
#[derive(Debug, Deserialize)]
pub enum DeExpression {
    String(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    Decimal(String),
    EnumMember(String),
    Path(String),
    PropertyPath(String),
    NavigationPropertyPath(String),
    AnnotationPath(String),
    Record(DeRecord),
    Collection(DeCollection),
    Null,
    Annotation(Annotation),
}

/// 14.5.6 Expression edm:Collection
#[derive(Debug, Deserialize)]
pub struct DeCollection {
    #[serde(rename = "$value", default)]
    pub items: Vec<DeExpression>,
}

/// 14.5.14 Expression edm:Record
#[derive(Debug, Deserialize)]
pub struct DeRecord {
    /// 14.5.14.1 Attribute `Type`
    #[serde(rename = "@Type")]
    pub rtype: Option<String>,
    #[serde(rename = "$value", default)]
    pub items: Vec<DeRecordItem>,
}

#[derive(Debug, Deserialize)]
pub enum DeRecordItem {
    PropertyValue(DePropertyValue),
    Annotation(Annotation),
}

/// 14.5.14.2 Element edm:PropertyValue
#[derive(Debug, Deserialize)]
pub struct DePropertyValue {
    /// 14.5.14.2.1 Attribute `Property`
    #[serde(rename = "@Property")]
    pub property: String,
    #[serde(rename = "@String")]
    pub string: Option<String>,
    #[serde(rename = "@Bool")]
    pub bool_value: Option<bool>,
    #[serde(rename = "@Int")]
    pub int_value: Option<i64>,
    #[serde(rename = "@Float")]
    pub float_value: Option<f64>,
    #[serde(rename = "@Decimal")]
    pub decimal_value: Option<String>,
    #[serde(rename = "@EnumMember")]
    pub enum_member: Option<String>,
    #[serde(rename = "@Path")]
    pub path: Option<String>,
    #[serde(rename = "@PropertyPath")]
    pub property_path: Option<String>,
    #[serde(rename = "@NavigationPropertyPath")]
    pub navigation_property_path: Option<String>,
    #[serde(rename = "@AnnotationPath")]
    pub annotation_path: Option<String>,
    #[serde(rename = "$value", default)]
    pub items: Vec<DeExpression>,
}

#[derive(Debug)]
pub enum Error {
    /// Annotation or property value has more than one expression.
    TooManyExpressions(String),
    /// Invalid record property value.
    PropertyValue(String, Box<Error>),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::TooManyExpressions(name) => write!(f, "too many expressions in {name}"),
            Self::PropertyValue(name, err) => write!(f, "property value {name}: {err}"),
        }
    }
}

impl StdError for Error {}

/// Validated edm:Annotation.
#[derive(Debug, Deserialize)]
#[serde(try_from = "DeAnnotation")]
pub struct Annotation {
    pub term: QualifiedTypeName,
    pub qualifier: Option<SimpleIdentifier>,
    /// Annotation value. `None` if the annotation has no expression
    /// (i.e. default value of the term is applied).
    pub value: Option<Expression>,
    /// Annotations of the annotation.
    pub annotations: Vec<Annotation>,
}

/// Validated annotation expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    String(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    Decimal(String),
    /// Space separated list of qualified enum members
    /// (`NS.Type/Member`).
    EnumMember(String),
    Path(String),
    PropertyPath(String),
    NavigationPropertyPath(String),
    AnnotationPath(String),
    Record(Record),
    Collection(Vec<Expression>),
    Null,
}

/// Validated edm:Record expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub rtype: Option<String>,
    pub properties: Vec<PropertyValue>,
}

/// Validated edm:PropertyValue.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyValue {
    pub property: String,
    pub value: Option<Expression>,
}

struct Constants {
    string: Option<String>,
    bool_value: Option<bool>,
    int_value: Option<i64>,
    float_value: Option<f64>,
    decimal_value: Option<String>,
    enum_member: Option<String>,
    path: Option<String>,
    property_path: Option<String>,
    navigation_property_path: Option<String>,
    annotation_path: Option<String>,
}

impl Constants {
    fn into_expressions(self) -> impl Iterator<Item = Expression> {
        [
            self.string.map(Expression::String),
            self.bool_value.map(Expression::Bool),
            self.int_value.map(Expression::Int),
            self.float_value.map(Expression::Float),
            self.decimal_value.map(Expression::Decimal),
            self.enum_member.map(Expression::EnumMember),
            self.path.map(Expression::Path),
            self.property_path.map(Expression::PropertyPath),
            self.navigation_property_path
                .map(Expression::NavigationPropertyPath),
            self.annotation_path.map(Expression::AnnotationPath),
        ]
        .into_iter()
        .flatten()
    }
}

/// Single expression from attribute and element notations. Nested
/// annotations are returned separately.
fn single_expression(
    owner: &str,
    constants: Constants,
    items: Vec<DeExpression>,
) -> Result<(Option<Expression>, Vec<Annotation>), Error> {
    let mut annotations = Vec::new();
    let mut expressions = constants.into_expressions().collect::<Vec<_>>();
    for item in items {
        match item {
            DeExpression::Annotation(v) => annotations.push(v),
            v => expressions.push(v.validate(owner)?),
        }
    }
    if expressions.len() > 1 {
        return Err(Error::TooManyExpressions(owner.into()));
    }
    Ok((expressions.pop(), annotations))
}

impl DeExpression {
    fn validate(self, owner: &str) -> Result<Expression, Error> {
        Ok(match self {
            Self::String(v) => Expression::String(v),
            Self::Bool(v) => Expression::Bool(v),
            Self::Int(v) => Expression::Int(v),
            Self::Float(v) => Expression::Float(v),
            Self::Decimal(v) => Expression::Decimal(v),
            Self::EnumMember(v) => Expression::EnumMember(v),
            Self::Path(v) => Expression::Path(v),
            Self::PropertyPath(v) => Expression::PropertyPath(v),
            Self::NavigationPropertyPath(v) => Expression::NavigationPropertyPath(v),
            Self::AnnotationPath(v) => Expression::AnnotationPath(v),
            Self::Null => Expression::Null,
            Self::Record(v) => Expression::Record(v.validate()?),
            Self::Collection(v) => Expression::Collection(
                v.items
                    .into_iter()
                    // Annotations inside of collections are not
                    // collection items.
                    .filter(|v| !matches!(v, Self::Annotation(_)))
                    .map(|v| v.validate(owner))
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            Self::Annotation(_) => return Err(Error::TooManyExpressions(owner.into())),
        })
    }
}

impl DeRecord {
    fn validate(self) -> Result<Record, Error> {
        let properties = self
            .items
            .into_iter()
            .filter_map(|v| match v {
                DeRecordItem::PropertyValue(v) => Some(v.validate()),
                DeRecordItem::Annotation(_) => None,
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Record {
            rtype: self.rtype,
            properties,
        })
    }
}

impl DePropertyValue {
    fn validate(self) -> Result<PropertyValue, Error> {
        let constants = Constants {
            string: self.string,
            bool_value: self.bool_value,
            int_value: self.int_value,
            float_value: self.float_value,
            decimal_value: self.decimal_value,
            enum_member: self.enum_member,
            path: self.path,
            property_path: self.property_path,
            navigation_property_path: self.navigation_property_path,
            annotation_path: self.annotation_path,
        };
        let property = self.property;
        let (value, _) = single_expression(&property, constants, self.items)
            .map_err(|e| Error::PropertyValue(property.clone(), Box::new(e)))?;
        Ok(PropertyValue { property, value })
    }
}

impl TryFrom<DeAnnotation> for Annotation {
    type Error = Error;

    fn try_from(v: DeAnnotation) -> Result<Self, Self::Error> {
        let constants = Constants {
            string: v.string,
            bool_value: v.bool_value,
            int_value: v.int_value,
            float_value: v.float_value,
            decimal_value: v.decimal_value,
            enum_member: v.enum_member,
            path: v.path,
            property_path: v.property_path,
            navigation_property_path: v.navigation_property_path,
            annotation_path: v.annotation_path,
        };
        let (value, annotations) = single_expression(&v.term.to_string(), constants, v.items)?;
        Ok(Self {
            term: v.term,
            qualifier: v.qualifier,
            value,
            annotations,
        })
    }
}

impl Expression {
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        if let Self::Bool(v) = self {
            Some(*v)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        if let Self::Int(v) = self {
            Some(*v)
        } else {
            None
        }
    }

    /// String value of string constants and all kinds of paths.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v)
            | Self::Path(v)
            | Self::PropertyPath(v)
            | Self::NavigationPropertyPath(v)
            | Self::AnnotationPath(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_record(&self) -> Option<&Record> {
        if let Self::Record(v) = self {
            Some(v)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_collection(&self) -> Option<&[Expression]> {
        if let Self::Collection(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// Names of enum members without type qualification. Flags enum
    /// values may contain several space separated members.
    #[must_use]
    pub fn enum_members(&self) -> Vec<&str> {
        match self {
            Self::EnumMember(v) => v
                .split_whitespace()
                .map(|m| m.rsplit_once('/').map_or(m, |(_, name)| name))
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl Record {
    /// Find value of the record property.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Expression> {
        self.properties
            .iter()
            .find(|p| p.property == name)
            .and_then(|p| p.value.as_ref())
    }

    #[must_use]
    pub fn bool_property(&self, name: &str) -> Option<bool> {
        self.property(name).and_then(Expression::as_bool)
    }

    #[must_use]
    pub fn int_property(&self, name: &str) -> Option<i64> {
        self.property(name).and_then(Expression::as_int)
    }

    #[must_use]
    pub fn str_property(&self, name: &str) -> Option<&str> {
        self.property(name).and_then(Expression::as_str)
    }

    #[must_use]
    pub fn record_property(&self, name: &str) -> Option<&Record> {
        self.property(name).and_then(Expression::as_record)
    }

    /// Collection of strings or paths.
    #[must_use]
    pub fn strings_property(&self, name: &str) -> Option<Vec<String>> {
        self.property(name)
            .and_then(Expression::as_collection)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Expression::as_str)
                    .map(ToString::to_string)
                    .collect()
            })
    }

    /// Collection of records.
    #[must_use]
    pub fn records_property(&self, name: &str) -> Option<Vec<&Record>> {
        self.property(name)
            .and_then(Expression::as_collection)
            .map(|items| items.iter().filter_map(Expression::as_record).collect())
    }

    #[must_use]
    pub fn enum_members_property(&self, name: &str) -> Option<Vec<&str>> {
        self.property(name).map(Expression::enum_members)
    }
}

#[cfg(test)]
mod test {
    use super::Expression;
    use crate::edmx::Edmx;
    use crate::edmx::ValidateError;

    #[test]
    fn test_annotation_expressions() -> Result<(), ValidateError> {
        let data = r#"
           <edmx:Edmx Version="4.0">
             <edmx:DataServices>
               <Schema Namespace="NS">
                 <Annotations Target="NS.Container/Customers">
                   <Annotation Term="Org.OData.Capabilities.V1.CountRestrictions">
                     <Record>
                       <PropertyValue Property="Countable" Bool="false"/>
                       <PropertyValue Property="NonCountableProperties">
                         <Collection>
                           <PropertyPath>Emails</PropertyPath>
                           <PropertyPath>Addresses</PropertyPath>
                         </Collection>
                       </PropertyValue>
                     </Record>
                   </Annotation>
                   <Annotation Term="Org.OData.Capabilities.V1.NavigationRestrictions">
                     <Record>
                       <PropertyValue Property="Navigability" EnumMember="Org.OData.Capabilities.V1.NavigationType/None"/>
                     </Record>
                   </Annotation>
                   <Annotation Term="Org.OData.Core.V1.Description">
                     <String>Customers of the company</String>
                   </Annotation>
                   <Annotation Term="Org.OData.Capabilities.V1.TopSupported"/>
                 </Annotations>
               </Schema>
             </edmx:DataServices>
           </edmx:Edmx>"#;
        let edmx = Edmx::parse(data)?;
        let anns = &edmx.data_services.schemas[0].out_of_line_annotations;
        assert_eq!(anns.len(), 1);
        assert_eq!(anns[0].target, "NS.Container/Customers");
        let annotations = &anns[0].annotations;
        assert_eq!(annotations.len(), 4);

        let count = annotations[0]
            .value
            .as_ref()
            .and_then(Expression::as_record)
            .expect("record");
        assert_eq!(count.bool_property("Countable"), Some(false));
        assert_eq!(
            count.strings_property("NonCountableProperties"),
            Some(vec!["Emails".to_string(), "Addresses".to_string()])
        );

        let nav = annotations[1]
            .value
            .as_ref()
            .and_then(Expression::as_record)
            .expect("record");
        assert_eq!(nav.enum_members_property("Navigability"), Some(vec!["None"]));

        assert_eq!(
            annotations[2].value,
            Some(Expression::String("Customers of the company".into()))
        );
        assert!(annotations[3].value.is_none());
        Ok(())
    }

    #[test]
    fn test_too_many_expressions() {
        let data = r#"
           <edmx:Edmx Version="4.0">
             <edmx:DataServices>
               <Schema Namespace="NS">
                 <Term Name="T" Type="Edm.String">
                   <Annotation Term="Core.Description" String="a">
                     <String>b</String>
                   </Annotation>
                 </Term>
               </Schema>
             </edmx:DataServices>
           </edmx:Edmx>"#;
        assert!(Edmx::parse(data).is_err());
    }

    #[test]
    fn test_flags_enum_members() {
        let v = Expression::EnumMember(
            "Capabilities.SearchExpressions/AND Capabilities.SearchExpressions/OR".into(),
        );
        assert_eq!(v.enum_members(), vec!["AND", "OR"]);
    }
}
