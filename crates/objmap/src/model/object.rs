// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Object container for runtime model instances.

use crate::error::ConstructError;
use crate::model::{ModelType, Value};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
enum ObjectState {
    /// Instance attributes in declaration order, assigned extras last.
    Attributes(Vec<(String, Value)>),
    /// Index into the enum type's variants.
    Variant(usize),
}

/// An instance of a [`ModelType`].
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    model_type: Arc<ModelType>,
    state: ObjectState,
}

impl Object {
    pub(crate) fn from_attributes(model_type: Arc<ModelType>, attrs: Vec<(String, Value)>) -> Self {
        Self {
            model_type,
            state: ObjectState::Attributes(attrs),
        }
    }

    pub(crate) fn from_variant(model_type: Arc<ModelType>, index: usize) -> Self {
        Self {
            model_type,
            state: ObjectState::Variant(index),
        }
    }

    /// Runtime type of this object.
    pub fn model_type(&self) -> &Arc<ModelType> {
        &self.model_type
    }

    /// Get the type name.
    pub fn type_name(&self) -> &str {
        self.model_type.name()
    }

    /// True when the object's type is `ty` or derives from it.
    pub fn is_instance_of(&self, ty: &ModelType) -> bool {
        self.model_type.is_subtype_of(ty)
    }

    /// Borrow a stored instance attribute (records only).
    pub fn get(&self, name: &str) -> Option<&Value> {
        match &self.state {
            ObjectState::Attributes(attrs) => {
                attrs.iter().find(|(n, _)| n == name).map(|(_, v)| v)
            }
            ObjectState::Variant(_) => None,
        }
    }

    /// Read an attribute by name.
    ///
    /// Enum instances expose `name` and `value`.
    pub fn attr(&self, name: &str) -> Option<Value> {
        match &self.state {
            ObjectState::Attributes(_) => self.get(name).cloned(),
            ObjectState::Variant(index) => {
                let variant = self.model_type.variants().get(*index)?;
                match name {
                    "name" => Some(Value::Str(variant.name.clone())),
                    "value" => Some(variant.value.clone()),
                    _ => None,
                }
            }
        }
    }

    /// Check whether an attribute can be read.
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Assign an instance attribute; unknown names are appended.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), ConstructError> {
        match &mut self.state {
            ObjectState::Attributes(attrs) => {
                let value = value.into();
                match attrs.iter_mut().find(|(n, _)| n == name) {
                    Some((_, slot)) => *slot = value,
                    None => attrs.push((name.to_string(), value)),
                }
                Ok(())
            }
            ObjectState::Variant(_) => Err(ConstructError::Immutable {
                type_name: self.model_type.name().to_string(),
            }),
        }
    }

    /// Instance attribute names in declaration order.
    pub fn attribute_names(&self) -> Vec<&str> {
        match &self.state {
            ObjectState::Attributes(attrs) => attrs.iter().map(|(n, _)| n.as_str()).collect(),
            ObjectState::Variant(_) => vec!["name", "value"],
        }
    }

    /// Iterate over stored attributes (records only).
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &Value)> {
        let attrs: &[(String, Value)] = match &self.state {
            ObjectState::Attributes(attrs) => attrs,
            ObjectState::Variant(_) => &[],
        };
        attrs.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Variant name for enum instances.
    pub fn variant_name(&self) -> Option<&str> {
        match self.state {
            ObjectState::Variant(index) => self
                .model_type
                .variants()
                .get(index)
                .map(|v| v.name.as_str()),
            ObjectState::Attributes(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelTypeBuilder;

    #[test]
    fn test_set_existing_and_extra() {
        let user = ModelTypeBuilder::new("User")
            .attribute_with_default("name", "anon")
            .build();
        let mut obj = user.instantiate(Vec::new()).expect("instantiate");

        obj.set("name", "ada").unwrap();
        obj.set("nickname", "countess").unwrap();

        assert_eq!(obj.attr("name"), Some(Value::from("ada")));
        assert_eq!(obj.attribute_names(), vec!["name", "nickname"]);
    }

    #[test]
    fn test_enum_attributes() {
        let level = ModelType::enumeration("Level", [("LOW", 1i64), ("HIGH", 9)]);
        let mut high = level.variant("HIGH").unwrap();

        assert_eq!(high.attr("name"), Some(Value::from("HIGH")));
        assert_eq!(high.attr("value"), Some(Value::Int(9)));
        assert_eq!(high.attr("other"), None);
        assert!(high.get("name").is_none());
        assert!(matches!(
            high.set("name", "LOW"),
            Err(ConstructError::Immutable { .. })
        ));
    }

    #[test]
    fn test_instance_of_base() {
        let named = ModelType::interface("Named");
        let pet = ModelTypeBuilder::new("Pet")
            .extends(&named)
            .attribute_with_default("name", "rex")
            .build();
        let obj = pet.instantiate(Vec::new()).unwrap();

        assert!(obj.is_instance_of(&pet));
        assert!(obj.is_instance_of(&named));
        assert_eq!(obj.type_name(), "Pet");
    }
}
