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

//! Primitive types of the `Edm` namespace.

use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::str::FromStr;

/// 4.4 Primitive Types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Binary,
    Boolean,
    Byte,
    Date,
    DateTimeOffset,
    Decimal,
    Double,
    Duration,
    Guid,
    Int16,
    Int32,
    Int64,
    SByte,
    Single,
    Stream,
    String,
    TimeOfDay,
    Geography,
    GeographyPoint,
    GeographyLineString,
    GeographyPolygon,
    GeographyMultiPoint,
    GeographyMultiLineString,
    GeographyMultiPolygon,
    GeographyCollection,
    Geometry,
    GeometryPoint,
    GeometryLineString,
    GeometryPolygon,
    GeometryMultiPoint,
    GeometryMultiLineString,
    GeometryMultiPolygon,
    GeometryCollection,
    /// Abstract `Edm.PrimitiveType`.
    PrimitiveType,
    /// `Edm.Untyped`.
    Untyped,
}

const NAMES: &[(&str, PrimitiveKind)] = &[
    ("Binary", PrimitiveKind::Binary),
    ("Boolean", PrimitiveKind::Boolean),
    ("Byte", PrimitiveKind::Byte),
    ("Date", PrimitiveKind::Date),
    ("DateTimeOffset", PrimitiveKind::DateTimeOffset),
    ("Decimal", PrimitiveKind::Decimal),
    ("Double", PrimitiveKind::Double),
    ("Duration", PrimitiveKind::Duration),
    ("Guid", PrimitiveKind::Guid),
    ("Int16", PrimitiveKind::Int16),
    ("Int32", PrimitiveKind::Int32),
    ("Int64", PrimitiveKind::Int64),
    ("SByte", PrimitiveKind::SByte),
    ("Single", PrimitiveKind::Single),
    ("Stream", PrimitiveKind::Stream),
    ("String", PrimitiveKind::String),
    ("TimeOfDay", PrimitiveKind::TimeOfDay),
    ("Geography", PrimitiveKind::Geography),
    ("GeographyPoint", PrimitiveKind::GeographyPoint),
    ("GeographyLineString", PrimitiveKind::GeographyLineString),
    ("GeographyPolygon", PrimitiveKind::GeographyPolygon),
    ("GeographyMultiPoint", PrimitiveKind::GeographyMultiPoint),
    ("GeographyMultiLineString", PrimitiveKind::GeographyMultiLineString),
    ("GeographyMultiPolygon", PrimitiveKind::GeographyMultiPolygon),
    ("GeographyCollection", PrimitiveKind::GeographyCollection),
    ("Geometry", PrimitiveKind::Geometry),
    ("GeometryPoint", PrimitiveKind::GeometryPoint),
    ("GeometryLineString", PrimitiveKind::GeometryLineString),
    ("GeometryPolygon", PrimitiveKind::GeometryPolygon),
    ("GeometryMultiPoint", PrimitiveKind::GeometryMultiPoint),
    ("GeometryMultiLineString", PrimitiveKind::GeometryMultiLineString),
    ("GeometryMultiPolygon", PrimitiveKind::GeometryMultiPolygon),
    ("GeometryCollection", PrimitiveKind::GeometryCollection),
    ("PrimitiveType", PrimitiveKind::PrimitiveType),
    ("Untyped", PrimitiveKind::Untyped),
];

impl PrimitiveKind {
    /// Name of the type without `Edm.` prefix.
    #[must_use]
    pub fn name(self) -> &'static str {
        NAMES
            .iter()
            .find(|(_, kind)| *kind == self)
            .map_or("PrimitiveType", |(name, _)| name)
    }

    #[must_use]
    pub const fn is_spatial(self) -> bool {
        matches!(
            self,
            Self::Geography
                | Self::GeographyPoint
                | Self::GeographyLineString
                | Self::GeographyPolygon
                | Self::GeographyMultiPoint
                | Self::GeographyMultiLineString
                | Self::GeographyMultiPolygon
                | Self::GeographyCollection
                | Self::Geometry
                | Self::GeometryPoint
                | Self::GeometryLineString
                | Self::GeometryPolygon
                | Self::GeometryMultiPoint
                | Self::GeometryMultiLineString
                | Self::GeometryMultiPolygon
                | Self::GeometryCollection
        )
    }
}

/// Name is not a primitive type of `Edm` namespace.
#[derive(Debug)]
pub struct UnknownPrimitive(pub String);

impl FromStr for PrimitiveKind {
    type Err = UnknownPrimitive;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NAMES
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(_, kind)| *kind)
            .ok_or_else(|| UnknownPrimitive(s.into()))
    }
}

impl Display for PrimitiveKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Edm.{}", self.name())
    }
}

#[cfg(test)]
mod test {
    use super::PrimitiveKind;

    #[test]
    fn test_primitive_names() {
        assert_eq!("Int32".parse::<PrimitiveKind>().ok(), Some(PrimitiveKind::Int32));
        assert_eq!(PrimitiveKind::GeographyPoint.to_string(), "Edm.GeographyPoint");
        assert!(PrimitiveKind::GeometryCollection.is_spatial());
        assert!("Int128".parse::<PrimitiveKind>().is_err());
    }
}
