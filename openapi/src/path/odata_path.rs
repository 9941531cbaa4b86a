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

use crate::edm::edmx::ReturnType;
use crate::edm::model::EntityTypeRef;
use crate::path::segment::PathParameter;
use crate::path::segment::PathParameters;
use crate::path::segment::Segment;
use crate::path::segment::StructuredType;
use crate::settings::Settings;
use crate::Error;

/// Kind of the resource addressed by a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ODataPathKind {
    EntitySet,
    Singleton,
    Entity,
    NavigationProperty,
    Operation,
    OperationImport,
    DollarCount,
    MediaEntity,
    ComplexProperty,
    TypeCast,
    Ref,
    Unknown,
}

/// Path template with its placeholders.
#[derive(Debug, Clone)]
pub struct RenderedPath<'a> {
    pub name: String,
    pub parameters: Vec<PathParameter<'a>>,
}

/// Sequence of segments that addresses one resource.
///
/// The first segment is a navigation source or an operation import.
#[derive(Debug, Clone)]
pub struct ODataPath<'a> {
    segments: Vec<Segment<'a>>,
}

impl<'a> ODataPath<'a> {
    #[must_use]
    pub fn new(root: Segment<'a>) -> Self {
        Self {
            segments: vec![root],
        }
    }

    pub fn push(&mut self, segment: Segment<'a>) {
        self.segments.push(segment);
    }

    /// Remove the last segment.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyPath` if path has no segments.
    pub fn pop(&mut self) -> Result<Segment<'a>, Error> {
        self.segments.pop().ok_or(Error::EmptyPath)
    }

    /// Copy of the path with one more segment.
    #[must_use]
    pub fn with(&self, segment: Segment<'a>) -> Self {
        let mut path = self.clone();
        path.push(segment);
        path
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    #[must_use]
    pub fn first(&self) -> Option<&Segment<'a>> {
        self.segments.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Segment<'a>> {
        self.segments.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Kind of the addressed resource.
    #[must_use]
    pub fn kind(&self) -> ODataPathKind {
        let has_navigation = self
            .segments
            .iter()
            .any(|s| matches!(s, Segment::NavigationProperty(_)));
        match (self.segments.as_slice(), self.segments.last()) {
            (_, None) => ODataPathKind::Unknown,
            (_, Some(Segment::DollarCount)) => ODataPathKind::DollarCount,
            (_, Some(Segment::StreamContent | Segment::StreamProperty(_))) => {
                ODataPathKind::MediaEntity
            }
            (_, Some(Segment::Ref)) => ODataPathKind::Ref,
            (_, Some(Segment::OperationImport(_))) => ODataPathKind::OperationImport,
            (_, Some(Segment::Operation(_))) => ODataPathKind::Operation,
            (_, Some(Segment::TypeCast(_))) => ODataPathKind::TypeCast,
            (_, Some(Segment::ComplexProperty(_))) => ODataPathKind::ComplexProperty,
            _ if has_navigation => ODataPathKind::NavigationProperty,
            ([Segment::NavigationSource(source)], _) => {
                if source.is_entity_set() {
                    ODataPathKind::EntitySet
                } else {
                    ODataPathKind::Singleton
                }
            }
            ([Segment::NavigationSource(_), Segment::Key(_)], _) => ODataPathKind::Entity,
            _ => ODataPathKind::Unknown,
        }
    }

    /// The addressed resource is a collection.
    #[must_use]
    pub fn is_collection(&self) -> bool {
        self.segments
            .iter()
            .fold(false, |collection, segment| match segment {
                Segment::NavigationSource(v) => v.is_entity_set(),
                Segment::NavigationProperty(v) => v.is_collection(),
                Segment::Operation(v) => returns_collection(v.operation.return_type.as_ref()),
                Segment::OperationImport(v) => {
                    returns_collection(v.operation.return_type.as_ref())
                }
                Segment::ComplexProperty(v) => v.is_collection(),
                Segment::TypeCast(_) | Segment::Ref => collection,
                Segment::Key(_)
                | Segment::StreamProperty(_)
                | Segment::StreamContent
                | Segment::DollarCount => false,
            })
    }

    /// Entity type addressed by the last segment that addresses
    /// entities.
    #[must_use]
    pub fn target_entity_type(&self) -> Option<EntityTypeRef<'a>> {
        self.segments.iter().rev().find_map(Segment::entity_type)
    }

    /// Path contains a type cast to the type.
    #[must_use]
    pub fn has_type_cast(&self, cast: &StructuredType<'a>) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::TypeCast(v) if v == cast))
    }

    /// Number of navigation property segments.
    #[must_use]
    pub fn navigation_depth(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::NavigationProperty(_)))
            .count()
    }

    /// Path of the properties relative to the navigation source
    /// (`Orders/Customer`). Keys and system segments are skipped.
    #[must_use]
    pub fn property_path(&self, settings: &Settings) -> String {
        property_path(&self.segments, settings)
    }

    /// Property path up to the last navigation property segment.
    #[must_use]
    pub fn navigation_property_path(&self, settings: &Settings) -> Option<String> {
        let end = self
            .segments
            .iter()
            .rposition(|s| matches!(s, Segment::NavigationProperty(_)))?;
        Some(property_path(&self.segments[..=end], settings))
    }

    /// Render the path template.
    #[must_use]
    pub fn render(&self, settings: &Settings) -> RenderedPath<'a> {
        let mut parameters = PathParameters::default();
        let mut name = settings
            .path_prefix
            .as_deref()
            .map(|prefix| prefix.trim_matches('/'))
            .filter(|prefix| !prefix.is_empty())
            .map_or_else(String::new, |prefix| format!("/{prefix}"));
        for segment in &self.segments {
            name.push_str(segment.separator(settings));
            name.push_str(&segment.path_item_name(settings, &mut parameters));
        }
        RenderedPath {
            name,
            parameters: parameters.into_inner(),
        }
    }

    /// Rendered path template.
    #[must_use]
    pub fn name(&self, settings: &Settings) -> String {
        self.render(settings).name
    }
}

fn property_path(segments: &[Segment<'_>], settings: &Settings) -> String {
    segments
        .iter()
        .skip(1)
        .filter_map(|s| match s {
            Segment::NavigationProperty(v) => Some(v.property.name().to_string()),
            Segment::ComplexProperty(v) => Some(v.property.name().to_string()),
            Segment::StreamProperty(v) => Some(v.name().to_string()),
            Segment::TypeCast(v) => Some(v.qualified_name(settings.use_namespace_alias)),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn returns_collection(rtype: Option<&ReturnType>) -> bool {
    rtype.is_some_and(|r| r.rtype.is_collection())
}

#[cfg(test)]
mod test {
    use super::ODataPath;
    use super::ODataPathKind;
    use crate::edm::Edmx;
    use crate::edm::Model;
    use crate::path::segment::KeySegment;
    use crate::path::segment::NavigationPropertySegment;
    use crate::path::segment::Segment;
    use crate::settings::Settings;
    use crate::Error;

    const MODEL: &str = r#"
      <edmx:Edmx Version="4.0">
        <edmx:DataServices>
          <Schema Namespace="NS">
            <EntityType Name="Customer">
              <Key><PropertyRef Name="ID"/></Key>
              <Property Name="ID" Type="Edm.Int32" Nullable="false"/>
              <NavigationProperty Name="Orders" Type="Collection(NS.Order)" ContainsTarget="true"/>
            </EntityType>
            <EntityType Name="Order">
              <Key><PropertyRef Name="ID"/></Key>
              <Property Name="ID" Type="Edm.Int32" Nullable="false"/>
            </EntityType>
            <EntityContainer Name="Container">
              <EntitySet Name="Customers" EntityType="NS.Customer"/>
              <Singleton Name="Me" Type="NS.Customer"/>
            </EntityContainer>
          </Schema>
        </edmx:DataServices>
      </edmx:Edmx>"#;

    #[test]
    fn test_kinds_and_rendering() -> Result<(), Error> {
        let docs = vec![Edmx::parse(MODEL).map_err(|e| Error::Edmx("inline".into(), e))?];
        let model = Model::build(&docs)?;
        let settings = Settings::default();
        let customers = model.navigation_sources()[0];
        let customer = customers.entity_type;
        let orders = model.navigation_properties(customer)[0];

        let mut path = ODataPath::new(Segment::NavigationSource(customers));
        assert_eq!(path.kind(), ODataPathKind::EntitySet);
        assert!(path.is_collection());

        path.push(Segment::Key(KeySegment::new(&model, customer)?));
        assert_eq!(path.kind(), ODataPathKind::Entity);
        assert!(!path.is_collection());

        path.push(Segment::NavigationProperty(NavigationPropertySegment::new(
            &model, orders,
        )?));
        assert_eq!(path.kind(), ODataPathKind::NavigationProperty);
        assert!(path.is_collection());
        assert_eq!(path.property_path(&settings), "Orders");

        let order = model.navigation_target(orders)?;
        path.push(Segment::Key(KeySegment::new(&model, order)?));
        assert_eq!(path.kind(), ODataPathKind::NavigationProperty);

        let rendered = path.render(&settings);
        assert_eq!(rendered.name, "/Customers({ID})/Orders({ID1})");
        assert_eq!(rendered.parameters.len(), 2);
        assert_eq!(path.navigation_property_path(&settings).as_deref(), Some("Orders"));

        let count = path.with(Segment::DollarCount);
        assert_eq!(count.kind(), ODataPathKind::DollarCount);
        assert_eq!(count.name(&settings), "/Customers({ID})/Orders({ID1})/$count");

        let settings = Settings {
            enable_key_as_segment: true,
            path_prefix: Some("/api/v1/".into()),
            ..Settings::default()
        };
        assert_eq!(path.name(&settings), "/api/v1/Customers/{ID}/Orders/{ID1}");

        let me = ODataPath::new(Segment::NavigationSource(model.navigation_sources()[1]));
        assert_eq!(me.kind(), ODataPathKind::Singleton);
        assert!(!me.is_collection());
        Ok(())
    }

    #[test]
    fn test_pop() -> Result<(), Error> {
        let docs = vec![Edmx::parse(MODEL).map_err(|e| Error::Edmx("inline".into(), e))?];
        let model = Model::build(&docs)?;
        let mut path = ODataPath::new(Segment::NavigationSource(model.navigation_sources()[0]));
        path.push(Segment::DollarCount);
        assert!(matches!(path.pop()?, Segment::DollarCount));
        assert!(matches!(path.pop()?, Segment::NavigationSource(_)));
        assert!(path.is_empty());
        assert!(matches!(path.pop(), Err(Error::EmptyPath)));
        Ok(())
    }
}
