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

use crate::edmx::Annotation;
use crate::edmx::LocalTypeName;
use crate::edmx::ParameterName;
use crate::edmx::TypeName;
use crate::edmx::ValidateError;
use serde::Deserialize;

/// 12.1 Element edm:Action
#[derive(Debug, Deserialize)]
pub struct DeAction {
    /// 12.1.1 Attribute `Name`
    #[serde(rename = "@Name")]
    pub name: LocalTypeName,
    /// 12.1.2 Attribute `IsBound`
    #[serde(rename = "@IsBound")]
    pub is_bound: Option<bool>,
    /// 12.1.3 Attribute `EntitySetPath`
    #[serde(rename = "@EntitySetPath")]
    pub entity_set_path: Option<String>,
    /// Items of edm:Action
    #[serde(rename = "$value", default)]
    pub items: Vec<DeOperationItem>,
}

/// 12.2 Element edm:Function
#[derive(Debug, Deserialize)]
pub struct DeFunction {
    /// 12.2.1 Attribute `Name`
    #[serde(rename = "@Name")]
    pub name: LocalTypeName,
    /// 12.2.2 Attribute `IsBound`
    #[serde(rename = "@IsBound")]
    pub is_bound: Option<bool>,
    /// 12.2.3 Attribute `IsComposable`
    #[serde(rename = "@IsComposable")]
    pub is_composable: Option<bool>,
    /// 12.2.4 Attribute `EntitySetPath`
    #[serde(rename = "@EntitySetPath")]
    pub entity_set_path: Option<String>,
    /// Items of edm:Function
    #[serde(rename = "$value", default)]
    pub items: Vec<DeOperationItem>,
}

/// Items of edm:Action and edm:Function
#[derive(Debug, Deserialize)]
pub enum DeOperationItem {
    Parameter(Parameter),
    ReturnType(ReturnType),
    Annotation(Annotation),
}

/// 12.3 Element edm:ReturnType
#[derive(Debug, Deserialize)]
pub struct ReturnType {
    /// 12.3.1 Attribute `Type`
    #[serde(rename = "@Type")]
    pub rtype: TypeName,
    /// 12.3.2 Attribute `Nullable`
    #[serde(rename = "@Nullable")]
    pub nullable: Option<bool>,
    #[serde(rename = "Annotation", default)]
    pub annotations: Vec<Annotation>,
}

/// 12.4 Element edm:Parameter
#[derive(Debug, Deserialize)]
pub struct Parameter {
    /// 12.4.1 Attribute `Name`
    #[serde(rename = "@Name")]
    pub name: ParameterName,
    /// 12.4.2 Attribute `Type`
    #[serde(rename = "@Type")]
    pub ptype: TypeName,
    /// 12.4.3 Attribute `Nullable`
    #[serde(rename = "@Nullable")]
    pub nullable: Option<bool>,
    #[serde(rename = "Annotation", default)]
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Action,
    Function,
}

/// Validated edm:Action or edm:Function.
#[derive(Debug)]
pub struct Operation {
    pub kind: OperationKind,
    pub name: LocalTypeName,
    pub is_bound: bool,
    /// Always `false` for actions.
    pub is_composable: bool,
    pub entity_set_path: Option<String>,
    /// All parameters. For bound operations the first one is the
    /// binding parameter.
    pub parameters: Vec<Parameter>,
    pub return_type: Option<ReturnType>,
    pub annotations: Vec<Annotation>,
}

impl Operation {
    #[must_use]
    pub fn is_function(&self) -> bool {
        self.kind == OperationKind::Function
    }

    #[must_use]
    pub fn is_action(&self) -> bool {
        self.kind == OperationKind::Action
    }

    /// Binding parameter of the bound operation.
    #[must_use]
    pub fn binding_parameter(&self) -> Option<&Parameter> {
        if self.is_bound {
            self.parameters.first()
        } else {
            None
        }
    }

    /// Parameters that are passed in URL or request body, i.e. all
    /// parameters except the binding one.
    #[must_use]
    pub fn non_binding_parameters(&self) -> &[Parameter] {
        if self.is_bound && !self.parameters.is_empty() {
            &self.parameters[1..]
        } else {
            &self.parameters
        }
    }
}

fn validate_items(
    kind: OperationKind,
    name: &LocalTypeName,
    is_bound: bool,
    items: Vec<DeOperationItem>,
) -> Result<(Vec<Parameter>, Option<ReturnType>, Vec<Annotation>), ValidateError> {
    let (parameters, mut return_types, annotations) = items.into_iter().fold(
        (Vec::new(), Vec::new(), Vec::new()),
        |(mut ps, mut rts, mut anns), v| {
            match v {
                DeOperationItem::Parameter(v) => ps.push(v),
                DeOperationItem::ReturnType(v) => rts.push(v),
                DeOperationItem::Annotation(v) => anns.push(v),
            }
            (ps, rts, anns)
        },
    );
    let error = |e| ValidateError::Operation(name.clone(), Box::new(e));
    if return_types.len() > 1 {
        return Err(error(ValidateError::TooManyReturnTypes));
    }
    if kind == OperationKind::Function && return_types.is_empty() {
        return Err(error(ValidateError::NoReturnType));
    }
    if is_bound && parameters.is_empty() {
        return Err(error(ValidateError::NoBindingParameter));
    }
    Ok((parameters, return_types.pop(), annotations))
}

impl DeAction {
    /// # Errors
    ///
    /// `ValidateError::Operation` if action has more than one return
    /// type or bound action doesn't have binding parameter.
    pub fn validate(self) -> Result<Operation, ValidateError> {
        let is_bound = self.is_bound.unwrap_or(false);
        let (parameters, return_type, annotations) =
            validate_items(OperationKind::Action, &self.name, is_bound, self.items)?;
        Ok(Operation {
            kind: OperationKind::Action,
            name: self.name,
            is_bound,
            is_composable: false,
            entity_set_path: self.entity_set_path,
            parameters,
            return_type,
            annotations,
        })
    }
}

impl DeFunction {
    /// # Errors
    ///
    /// `ValidateError::Operation` if function doesn't have exactly
    /// one return type or bound function doesn't have binding
    /// parameter.
    pub fn validate(self) -> Result<Operation, ValidateError> {
        let is_bound = self.is_bound.unwrap_or(false);
        let (parameters, return_type, annotations) =
            validate_items(OperationKind::Function, &self.name, is_bound, self.items)?;
        Ok(Operation {
            kind: OperationKind::Function,
            name: self.name,
            is_bound,
            is_composable: self.is_composable.unwrap_or(false),
            entity_set_path: self.entity_set_path,
            parameters,
            return_type,
            annotations,
        })
    }
}

#[cfg(test)]
mod test {
    use crate::edmx::Edmx;
    use crate::edmx::OperationKind;
    use crate::edmx::ValidateError;

    #[test]
    fn test_operations() -> Result<(), ValidateError> {
        let data = r#"
           <edmx:Edmx Version="4.0">
             <edmx:DataServices>
               <Schema Namespace="NS">
                 <Action Name="Reset" IsBound="true">
                   <Parameter Name="bindingParameter" Type="NS.Customer"/>
                   <Parameter Name="Force" Type="Edm.Boolean"/>
                 </Action>
                 <Function Name="Top" IsComposable="true">
                   <Parameter Name="Count" Type="Edm.Int32" Nullable="false"/>
                   <ReturnType Type="Collection(NS.Customer)"/>
                 </Function>
               </Schema>
             </edmx:DataServices>
           </edmx:Edmx>"#;
        let edmx = Edmx::parse(data)?;
        let ops = &edmx.data_services.schemas[0].operations;
        assert_eq!(ops[0].kind, OperationKind::Action);
        assert!(ops[0].is_bound);
        assert_eq!(ops[0].non_binding_parameters().len(), 1);
        assert!(ops[0].binding_parameter().is_some());
        assert!(ops[0].return_type.is_none());
        assert!(ops[1].is_function());
        assert!(ops[1].is_composable);
        assert!(ops[1].binding_parameter().is_none());
        assert_eq!(ops[1].non_binding_parameters().len(), 1);
        Ok(())
    }

    #[test]
    fn test_function_without_return_type() {
        let data = r#"
           <edmx:Edmx Version="4.0">
             <edmx:DataServices>
               <Schema Namespace="NS">
                 <Function Name="Broken"/>
               </Schema>
             </edmx:DataServices>
           </edmx:Edmx>"#;
        assert!(Edmx::parse(data).is_err());
    }
}
