// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type descriptors for runtime model types.

use crate::error::ConstructError;
use crate::model::{Object, Value};
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_TOKEN: AtomicU64 = AtomicU64::new(1);

/// Identity of a [`ModelType`].
///
/// Allocated once per descriptor, so two types sharing a name are still
/// distinct keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeToken(u64);

impl TypeToken {
    fn next() -> Self {
        Self(NEXT_TOKEN.fetch_add(1, Ordering::Relaxed))
    }
}

/// Declared attribute of a record type.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeDescriptor {
    /// Attribute name.
    pub name: String,
    /// Default value (None = required at construction).
    pub default: Option<Value>,
}

impl AttributeDescriptor {
    /// Create a required attribute.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
        }
    }

    /// Set default value.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Underscore-prefixed names are private.
    pub fn is_private(&self) -> bool {
        self.name.starts_with('_')
    }

    /// Attribute whose default is a function.
    pub fn is_method(&self) -> bool {
        self.default.as_ref().is_some_and(Value::is_callable)
    }

    /// Must be supplied at construction.
    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

/// Enum variant.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumVariant {
    /// Variant name.
    pub name: String,
    /// Variant payload.
    pub value: Value,
}

impl EnumVariant {
    /// Create enum variant.
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Type kind enumeration.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind {
    /// Record with named attributes (own declarations only).
    Record(Vec<AttributeDescriptor>),
    /// Enumeration with a closed set of variants.
    Enum(Vec<EnumVariant>),
    /// Capability tag, never instantiated.
    Interface,
}

/// A runtime model type.
pub struct ModelType {
    token: TypeToken,
    name: String,
    kind: TypeKind,
    bases: Vec<Arc<ModelType>>,
}

impl ModelType {
    /// Create a new type descriptor with a fresh identity.
    pub fn new(name: impl Into<String>, kind: TypeKind, bases: Vec<Arc<ModelType>>) -> Self {
        Self {
            token: TypeToken::next(),
            name: name.into(),
            kind,
            bases,
        }
    }

    /// Create an enumeration type.
    pub fn enumeration<I, N, V>(name: impl Into<String>, variants: I) -> Arc<Self>
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<Value>,
    {
        let variants = variants
            .into_iter()
            .map(|(n, v)| EnumVariant::new(n, v))
            .collect();
        Arc::new(Self::new(name, TypeKind::Enum(variants), Vec::new()))
    }

    /// Create an interface (capability) type.
    pub fn interface(name: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::new(name, TypeKind::Interface, Vec::new()))
    }

    /// Identity token.
    pub fn token(&self) -> TypeToken {
        self.token
    }

    /// Type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Direct bases.
    pub fn bases(&self) -> &[Arc<ModelType>] {
        &self.bases
    }

    pub fn is_record(&self) -> bool {
        matches!(self.kind, TypeKind::Record(_))
    }

    pub fn is_enum(&self) -> bool {
        matches!(self.kind, TypeKind::Enum(_))
    }

    /// True when `self` is `other` or derives from it through any base.
    pub fn is_subtype_of(&self, other: &ModelType) -> bool {
        self.token == other.token || self.bases.iter().any(|b| b.is_subtype_of(other))
    }

    /// All attributes including inherited ones, in declaration order.
    ///
    /// Base attributes come first; a redeclaration in a subtype replaces
    /// the inherited descriptor at its original position.
    pub fn attributes(&self) -> Vec<AttributeDescriptor> {
        let mut merged: Vec<AttributeDescriptor> = Vec::new();
        for base in &self.bases {
            for attr in base.attributes() {
                upsert(&mut merged, attr);
            }
        }
        if let TypeKind::Record(own) = &self.kind {
            for attr in own {
                upsert(&mut merged, attr.clone());
            }
        }
        merged
    }

    /// Get attribute by name.
    pub fn attribute(&self, name: &str) -> Option<AttributeDescriptor> {
        self.attributes().into_iter().find(|a| a.name == name)
    }

    /// Enum variants (empty for other kinds).
    pub fn variants(&self) -> &[EnumVariant] {
        match &self.kind {
            TypeKind::Enum(variants) => variants,
            _ => &[],
        }
    }

    /// Construct an instance from keyword-style field values.
    ///
    /// Unknown keywords are rejected, absent attributes take their default
    /// and absent required attributes are an error.
    pub fn instantiate<I>(self: &Arc<Self>, fields: I) -> Result<Object, ConstructError>
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        if !self.is_record() {
            return Err(ConstructError::NotInstantiable {
                type_name: self.name.clone(),
            });
        }

        let declared = self.attributes();
        let mut supplied: HashMap<String, Value> = HashMap::new();
        for (name, value) in fields {
            if !declared.iter().any(|a| a.name == name) {
                return Err(ConstructError::UnexpectedAttribute {
                    type_name: self.name.clone(),
                    attribute: name,
                });
            }
            supplied.insert(name, value);
        }

        let mut state = Vec::with_capacity(declared.len());
        for attr in declared {
            let value = match supplied.remove(&attr.name) {
                Some(v) => v,
                None => attr.default.ok_or_else(|| ConstructError::MissingAttribute {
                    type_name: self.name.clone(),
                    attribute: attr.name.clone(),
                })?,
            };
            state.push((attr.name, value));
        }

        Ok(Object::from_attributes(self.clone(), state))
    }

    /// Get enum instance by variant name.
    pub fn variant(self: &Arc<Self>, name: &str) -> Result<Object, ConstructError> {
        self.variants()
            .iter()
            .position(|v| v.name == name)
            .map(|index| Object::from_variant(self.clone(), index))
            .ok_or_else(|| self.unknown_variant(name.to_string()))
    }

    /// Get enum instance by variant payload.
    pub fn variant_by_value(self: &Arc<Self>, value: &Value) -> Result<Object, ConstructError> {
        self.variants()
            .iter()
            .position(|v| &v.value == value)
            .map(|index| Object::from_variant(self.clone(), index))
            .ok_or_else(|| self.unknown_variant(value.to_string()))
    }

    fn unknown_variant(&self, variant: String) -> ConstructError {
        if self.is_enum() {
            ConstructError::UnknownVariant {
                type_name: self.name.clone(),
                variant,
            }
        } else {
            ConstructError::NotInstantiable {
                type_name: self.name.clone(),
            }
        }
    }
}

fn upsert(attrs: &mut Vec<AttributeDescriptor>, attr: AttributeDescriptor) {
    match attrs.iter_mut().find(|a| a.name == attr.name) {
        Some(slot) => *slot = attr,
        None => attrs.push(attr),
    }
}

impl PartialEq for ModelType {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

impl Eq for ModelType {}

impl Hash for ModelType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.token.hash(state);
    }
}

impl fmt::Debug for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelType")
            .field("name", &self.name)
            .field("token", &self.token.0)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
