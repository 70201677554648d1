// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Declarative model family.
//!
//! Types built with [`model`] derive from the [`base`] interface and declare
//! their fields up front, usually without defaults. Such types cannot be
//! introspected through a representative instance, so [`extend`] registers
//! [`spec_function`], which reads the declaration instead.
//!
//! ```rust
//! use objmap::extensions::declarative;
//! use objmap::Mapper;
//!
//! let order = declarative::model("Order").attribute("id").attribute("total").build();
//!
//! let mapper = Mapper::new();
//! declarative::extend(&mapper);
//! assert_eq!(mapper.resolve_spec(&order).unwrap(), vec!["id", "total"]);
//! ```

use crate::mapper::Mapper;
use crate::model::{ModelType, ModelTypeBuilder};
use std::sync::{Arc, OnceLock};

static BASE: OnceLock<Arc<ModelType>> = OnceLock::new();

/// Process-wide `DeclarativeModel` interface.
pub fn base() -> &'static Arc<ModelType> {
    BASE.get_or_init(|| ModelType::interface("DeclarativeModel"))
}

/// Start a declarative model type.
pub fn model(name: impl Into<String>) -> ModelTypeBuilder {
    ModelTypeBuilder::new(name).extends(base())
}

/// Declared field names in declaration order, inherited fields first.
/// Private names and methods are not fields.
pub fn spec_function(target: &ModelType) -> Vec<String> {
    target
        .attributes()
        .into_iter()
        .filter(|a| !a.is_private() && !a.is_method())
        .map(|a| a.name)
        .collect()
}

/// Register the declarative spec function on `mapper`.
pub fn extend(mapper: &Mapper) {
    mapper.add_spec(base(), spec_function);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MapError;
    use crate::model::Value;

    #[test]
    fn test_declared_order_and_filtering() {
        let ty = model("Invoice")
            .attribute("number")
            .attribute_with_default("_draft", true)
            .attribute("amount")
            .method("total", |_| Value::Null)
            .build();

        assert_eq!(spec_function(&ty), vec!["number", "amount"]);
    }

    #[test]
    fn test_inherited_fields() {
        let entity = model("Entity").attribute("id").build();
        let customer = ModelTypeBuilder::new("Customer")
            .extends(&entity)
            .attribute("name")
            .build();

        let mapper = Mapper::new();
        extend(&mapper);
        assert_eq!(mapper.resolve_spec(&customer).unwrap(), vec!["id", "name"]);
    }

    #[test]
    fn test_without_extension_resolution_fails() {
        let ty = model("Order").attribute("id").build();
        let mapper = Mapper::new();
        assert!(matches!(
            mapper.resolve_spec(&ty),
            Err(MapError::Resolution { .. })
        ));
    }

    #[test]
    fn test_map_into_declarative_model() {
        let row = ModelTypeBuilder::new("OrderRow")
            .attribute("id")
            .attribute("total")
            .attribute("internal_note")
            .build();
        let order = model("Order").attribute("id").attribute("total").build();

        let mapper = crate::create_mapper();
        let src = row
            .instantiate(vec![
                ("id".to_string(), Value::from(10i64)),
                ("total".to_string(), Value::from(99.5f64)),
                ("internal_note".to_string(), Value::from("rush")),
            ])
            .unwrap();

        let out = mapper.map(&src, &order).unwrap();
        assert_eq!(out.attr("id"), Some(Value::Int(10)));
        assert_eq!(out.attr("total"), Some(Value::Float(99.5)));
        assert!(out.is_instance_of(base()));
    }
}
