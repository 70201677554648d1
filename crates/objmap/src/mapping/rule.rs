// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Mapping rules and per-field overrides.

use crate::error::Result;
use crate::model::{Object, Value};
use std::fmt;
use std::sync::Arc;

/// One-argument field transform applied to the source object.
pub type TransformFn = Arc<dyn Fn(&Object) -> Value + Send + Sync>;

/// Zero-argument field value supplier.
pub type SupplyFn = Arc<dyn Fn() -> Value + Send + Sync>;

/// Custom construction replacing field-by-field copy.
pub type ModelFactory = Arc<dyn Fn(&Object) -> Result<Object> + Send + Sync>;

/// Where a target field takes its value from.
#[derive(Clone)]
pub enum FieldSource {
    /// Fixed value.
    Literal(Value),
    /// Function of the source object.
    Transform(TransformFn),
    /// Function of nothing (timestamps, counters, ...).
    Supply(SupplyFn),
    /// Same-named source attribute.
    CopySameName,
    /// Differently-named source attribute.
    CopyFrom(String),
}

impl FieldSource {
    /// Produce the value for `field`, or `None` when the source attribute
    /// it reads is absent.
    pub fn resolve(&self, field: &str, source: &Object) -> Option<Value> {
        match self {
            Self::Literal(value) => Some(value.clone()),
            Self::Transform(func) => Some(func(source)),
            Self::Supply(func) => Some(func()),
            Self::CopySameName => source.attr(field),
            Self::CopyFrom(attribute) => source.attr(attribute),
        }
    }

    /// Source attribute read by this entry, if it reads one.
    pub fn source_attribute<'a>(&'a self, field: &'a str) -> Option<&'a str> {
        match self {
            Self::CopySameName => Some(field),
            Self::CopyFrom(attribute) => Some(attribute.as_str()),
            _ => None,
        }
    }
}

impl fmt::Debug for FieldSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(v) => f.debug_tuple("Literal").field(v).finish(),
            Self::Transform(_) => f.write_str("Transform(<fn>)"),
            Self::Supply(_) => f.write_str("Supply(<fn>)"),
            Self::CopySameName => f.write_str("CopySameName"),
            Self::CopyFrom(a) => f.debug_tuple("CopyFrom").field(a).finish(),
        }
    }
}

/// Ordered per-field override table, keyed by target field name.
#[derive(Debug, Clone, Default)]
pub struct FieldsMapping {
    entries: Vec<(String, FieldSource)>,
}

impl FieldsMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or replace) the source of `field`.
    pub fn insert(&mut self, field: impl Into<String>, source: FieldSource) {
        let field = field.into();
        match self.entries.iter_mut().find(|(name, _)| *name == field) {
            Some((_, slot)) => *slot = source,
            None => self.entries.push((field, source)),
        }
    }

    /// Map `field` to a fixed value.
    pub fn literal(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, FieldSource::Literal(value.into()));
        self
    }

    /// Map `field` to a function of the source object.
    pub fn transform<F>(mut self, field: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Object) -> Value + Send + Sync + 'static,
    {
        self.insert(field, FieldSource::Transform(Arc::new(func)));
        self
    }

    /// Map `field` to a zero-argument function.
    pub fn supply<F>(mut self, field: impl Into<String>, func: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        self.insert(field, FieldSource::Supply(Arc::new(func)));
        self
    }

    /// Copy `field` from the same-named source attribute.
    pub fn copy(mut self, field: impl Into<String>) -> Self {
        self.insert(field, FieldSource::CopySameName);
        self
    }

    /// Copy `field` from source attribute `from`.
    pub fn rename(mut self, field: impl Into<String>, from: impl Into<String>) -> Self {
        self.insert(field, FieldSource::CopyFrom(from.into()));
        self
    }

    /// Get the source of `field`.
    pub fn get(&self, field: &str) -> Option<&FieldSource> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, source)| source)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldSource)> {
        self.entries.iter().map(|(name, source)| (name.as_str(), source))
    }
}

/// Policy for one (source type, target type) pair, also used for call-time
/// overrides.
///
/// The default rule has neither a factory nor field overrides: plain field
/// copy.
#[derive(Clone, Default)]
pub struct MappingRule {
    model_factory: Option<ModelFactory>,
    fields_mapping: Option<FieldsMapping>,
}

impl MappingRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the model factory.
    pub fn model_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn(&Object) -> Result<Object> + Send + Sync + 'static,
    {
        self.model_factory = Some(Arc::new(factory));
        self
    }

    /// Set the per-field override table.
    pub fn fields_mapping(mut self, fields: FieldsMapping) -> Self {
        self.fields_mapping = Some(fields);
        self
    }

    /// The model factory, if any.
    pub fn factory(&self) -> Option<&ModelFactory> {
        self.model_factory.as_ref()
    }

    /// The override table, if any (possibly empty).
    pub fn fields(&self) -> Option<&FieldsMapping> {
        self.fields_mapping.as_ref()
    }

    pub fn has_factory(&self) -> bool {
        self.model_factory.is_some()
    }

    /// True when a non-empty override table is set.
    pub fn has_fields(&self) -> bool {
        self.fields_mapping.as_ref().is_some_and(|f| !f.is_empty())
    }

    /// Both a factory and field overrides are set.
    pub fn is_conflicting(&self) -> bool {
        self.has_factory() && self.has_fields()
    }

    pub fn is_default(&self) -> bool {
        !self.has_factory() && !self.has_fields()
    }

    /// Overlay these call-time overrides on a registered rule, argument by
    /// argument. An empty override table counts as absent. The result may be
    /// conflicting.
    pub fn merged_over(&self, registered: &MappingRule) -> MappingRule {
        MappingRule {
            model_factory: self
                .model_factory
                .clone()
                .or_else(|| registered.model_factory.clone()),
            fields_mapping: self
                .fields_mapping
                .clone()
                .filter(|f| !f.is_empty())
                .or_else(|| registered.fields_mapping.clone()),
        }
    }
}

impl fmt::Debug for MappingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappingRule")
            .field("model_factory", &self.model_factory.as_ref().map(|_| "<fn>"))
            .field("fields_mapping", &self.fields_mapping)
            .finish()
    }
}
