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

//! 17 Attribute Values

use crate::edmx::QualifiedTypeName;
use serde::de::Error as DeError;
use serde::de::Visitor;
use serde::Deserialize;
use serde::Deserializer;
use std::error::Error as StdError;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::marker::PhantomData;
use std::str::FromStr;

#[derive(Debug)]
pub enum Error {
    InvalidSimpleIdentifier(String),
    InvalidQualifiedIdentifier(String),
    InvalidTypeName(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::InvalidSimpleIdentifier(id) => write!(f, "invalid simple identifier {id}"),
            Self::InvalidQualifiedIdentifier(id) => write!(f, "invalid qualified identifier {id}"),
            Self::InvalidTypeName(id) => write!(f, "invalid type name {id}"),
        }
    }
}

impl StdError for Error {}

/// Deserializes any attribute value through its `FromStr`
/// implementation.
struct FromStrVisitor<T> {
    expecting: &'static str,
    _marker: PhantomData<T>,
}

impl<T> FromStrVisitor<T> {
    const fn new(expecting: &'static str) -> Self {
        Self {
            expecting,
            _marker: PhantomData,
        }
    }
}

impl<T> Visitor<'_> for FromStrVisitor<T>
where
    T: FromStr<Err = Error>,
{
    type Value = T;

    fn expecting(&self, formatter: &mut Formatter) -> FmtResult {
        formatter.write_str(self.expecting)
    }

    fn visit_str<E: DeError>(self, value: &str) -> Result<Self::Value, E> {
        value.parse().map_err(DeError::custom)
    }
}

/// 17.1 Namespace
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Namespace {
    pub ids: Vec<SimpleIdentifier>,
}

impl Namespace {
    #[must_use]
    pub fn is_edm(&self) -> bool {
        self.ids.len() == 1 && self.ids[0].inner() == "Edm"
    }
}

impl FromStr for Namespace {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            ids: s
                .split('.')
                .map(SimpleIdentifier::from_str)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

impl Display for Namespace {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut iter = self.ids.iter();
        if let Some(v) = iter.next() {
            v.fmt(f)?;
        }
        iter.try_for_each(|v| write!(f, ".{v}"))
    }
}

impl<'de> Deserialize<'de> for Namespace {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        de.deserialize_string(FromStrVisitor::new("Namespace string"))
    }
}

/// 17.2 `SimpleIdentifier`
#[derive(Clone, Debug, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct SimpleIdentifier(String);

impl SimpleIdentifier {
    #[must_use]
    pub const fn inner(&self) -> &String {
        &self.0
    }
}

impl Display for SimpleIdentifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.fmt(f)
    }
}

impl AsRef<str> for SimpleIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for SimpleIdentifier {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();

        // Normative: starts with a letter or underscore, followed by
        // at most 127 letters, underscores or digits.
        //
        // Implementation: we don't check max length.
        let valid_first = chars
            .next()
            .is_some_and(|first| first.is_alphabetic() || first == '_');
        if !valid_first || chars.any(|c| !c.is_alphanumeric() && c != '_') {
            Err(Error::InvalidSimpleIdentifier(s.into()))
        } else {
            Ok(Self(s.into()))
        }
    }
}

impl<'de> Deserialize<'de> for SimpleIdentifier {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        de.deserialize_string(FromStrVisitor::new("SimpleIdentifier string"))
    }
}

/// 17.3 `QualifiedName`
///
/// Namespace part may be either a full namespace or an alias of the
/// namespace. Aliases are resolved by the model index.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    pub namespace: Namespace,
    pub name: SimpleIdentifier,
}

impl FromStr for QualifiedName {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut ids = s
            .split('.')
            .map(SimpleIdentifier::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| Error::InvalidQualifiedIdentifier(s.into()))?;
        let name = ids
            .pop()
            .ok_or_else(|| Error::InvalidQualifiedIdentifier(s.into()))?;
        if ids.is_empty() {
            return Err(Error::InvalidQualifiedIdentifier(s.into()));
        }
        Ok(Self {
            namespace: Namespace { ids },
            name,
        })
    }
}

impl Display for QualifiedName {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}.{}", self.namespace, self.name)
    }
}

impl<'de> Deserialize<'de> for QualifiedName {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        de.deserialize_string(FromStrVisitor::new("QualifiedName string"))
    }
}

/// 17.4 `TypeName`
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeName {
    One(QualifiedTypeName),
    CollectionOf(QualifiedTypeName),
}

impl TypeName {
    #[must_use]
    pub const fn qualified_type_name(&self) -> &QualifiedTypeName {
        match self {
            Self::One(v) | Self::CollectionOf(v) => v,
        }
    }

    #[must_use]
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::CollectionOf(_))
    }
}

impl FromStr for TypeName {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const COLLECTION_PREFIX: &str = "Collection(";
        const COLLECTION_SUFFIX: &str = ")";
        if let Some(inner) = s
            .strip_prefix(COLLECTION_PREFIX)
            .and_then(|v| v.strip_suffix(COLLECTION_SUFFIX))
        {
            let qtype = inner
                .parse()
                .map_err(|_| Error::InvalidTypeName(s.into()))?;
            Ok(Self::CollectionOf(QualifiedTypeName::new(qtype)))
        } else {
            let qtype = s.parse().map_err(|_| Error::InvalidTypeName(s.into()))?;
            Ok(Self::One(QualifiedTypeName::new(qtype)))
        }
    }
}

impl Display for TypeName {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::One(v) => v.fmt(f),
            Self::CollectionOf(v) => write!(f, "Collection({v})"),
        }
    }
}

impl<'de> Deserialize<'de> for TypeName {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        de.deserialize_string(FromStrVisitor::new("property type string"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::from_str as json_from_str;

    #[test]
    fn test_namespace_valid() {
        for case in ["Namespace", "My.Namespace", "Org.OData.Core.V1"] {
            let ns = Namespace::from_str(case).expect("valid namespace");
            let expected_count = case.chars().filter(|c| *c == '.').count() + 1;
            assert_eq!(ns.ids.len(), expected_count);
            assert_eq!(ns.to_string(), case);
        }
    }

    #[test]
    fn test_namespace_invalid() {
        for case in ["Invalid.123Name", "Namespace.", ".Namespace", "A..B", ""] {
            assert!(
                Namespace::from_str(case).is_err(),
                "Should reject invalid Namespace: {case}"
            );
        }
    }

    #[test]
    fn test_namespace_is_edm() {
        assert!(Namespace::from_str("Edm").unwrap().is_edm());
        assert!(!Namespace::from_str("Edm.Something").unwrap().is_edm());
    }

    #[test]
    fn test_simple_identifier() {
        for case in ["Name", "_name", "Name123", "a"] {
            assert!(SimpleIdentifier::from_str(case).is_ok(), "{case}");
        }
        for case in ["123Name", "Name-x", "Name.x", "Name x", "", "$Name"] {
            assert!(SimpleIdentifier::from_str(case).is_err(), "{case}");
        }
    }

    #[test]
    fn test_qualified_name() {
        let qn = QualifiedName::from_str("Microsoft.OData.Service.Customer").unwrap();
        assert_eq!(qn.name.inner(), "Customer");
        assert_eq!(qn.namespace.to_string(), "Microsoft.OData.Service");
        assert_eq!(qn.to_string(), "Microsoft.OData.Service.Customer");

        // A qualified name needs a namespace part.
        assert!(QualifiedName::from_str("Customer").is_err());
        assert!(QualifiedName::from_str("NS..Customer").is_err());
    }

    #[test]
    fn test_type_name() {
        let one = TypeName::from_str("Edm.String").unwrap();
        assert!(!one.is_collection());
        assert_eq!(one.to_string(), "Edm.String");

        let many = TypeName::from_str("Collection(NS.Order)").unwrap();
        assert!(many.is_collection());
        assert_eq!(many.qualified_type_name().inner().name.inner(), "Order");
        assert_eq!(many.to_string(), "Collection(NS.Order)");

        for case in ["Collection()", "Collection(Edm/Invalid)", "Collection(Edm.String"] {
            assert!(TypeName::from_str(case).is_err(), "{case}");
        }
    }

    #[test]
    fn test_deserialize() {
        let tn: TypeName = json_from_str(r#""Collection(Edm.Int32)""#).unwrap();
        assert!(tn.is_collection());
        let result: Result<QualifiedName, _> = json_from_str(r#""Invalid..Name""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::InvalidSimpleIdentifier("1a".into()).to_string(),
            "invalid simple identifier 1a"
        );
        assert_eq!(
            Error::InvalidTypeName("Collection(".into()).to_string(),
            "invalid type name Collection("
        );
    }
}
