// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fluent builder API for record types.

use crate::model::{AttributeDescriptor, Callable, ModelType, TypeKind, Value};
use std::sync::Arc;

/// Builder for creating record [`ModelType`] instances.
#[derive(Debug)]
pub struct ModelTypeBuilder {
    name: String,
    attributes: Vec<AttributeDescriptor>,
    bases: Vec<Arc<ModelType>>,
}

impl ModelTypeBuilder {
    /// Create a new builder for a record type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            bases: Vec::new(),
        }
    }

    /// Add a required attribute.
    pub fn attribute(mut self, name: impl Into<String>) -> Self {
        self.attributes.push(AttributeDescriptor::new(name));
        self
    }

    /// Add an attribute with a default value.
    pub fn attribute_with_default(mut self, name: impl Into<String>, default: impl Into<Value>) -> Self {
        self.attributes
            .push(AttributeDescriptor::new(name).with_default(default));
        self
    }

    /// Add a method: an attribute whose default is a function.
    pub fn method<F>(self, name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        let name = name.into();
        let callable = Callable::new(name.as_str(), func);
        self.attribute_with_default(name, callable)
    }

    /// Derive from a base type (record, enum or interface).
    pub fn extends(mut self, base: &Arc<ModelType>) -> Self {
        self.bases.push(base.clone());
        self
    }

    /// Build the type descriptor.
    pub fn build(self) -> Arc<ModelType> {
        Arc::new(ModelType::new(
            self.name,
            TypeKind::Record(self.attributes),
            self.bases,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_record() {
        let ty = ModelTypeBuilder::new("Sensor")
            .attribute("id")
            .attribute_with_default("unit", "C")
            .method("describe", |_| Value::from("sensor"))
            .build();

        assert!(ty.is_record());
        assert_eq!(ty.attributes().len(), 3);
        assert!(ty.attribute("id").is_some_and(|a| a.is_required()));
        assert!(ty.attribute("describe").is_some_and(|a| a.is_method()));
        assert!(ty.attribute("missing").is_none());
    }

    #[test]
    fn test_builder_bases() {
        let tagged = ModelType::interface("Tagged");
        let ty = ModelTypeBuilder::new("Item").extends(&tagged).build();
        assert_eq!(ty.bases().len(), 1);
        assert!(ty.is_subtype_of(&tagged));
    }
}
