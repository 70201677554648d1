// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::float_cmp)] // Test assertions with constants
#![allow(clippy::redundant_closure_for_method_calls)] // Test code clarity

//! Model factory integration tests
//!
//! Enum-to-enum and value-object construction through registered and
//! call-time factories.

use objmap::{
    create_mapper, FieldsMapping, MapError, Mapper, MappingRule, ModelType, ModelTypeBuilder,
    Object, Value,
};
use std::sync::Arc;

struct Enums {
    source: Arc<ModelType>,
    name: Arc<ModelType>,
    value: Arc<ModelType>,
}

fn enums() -> Enums {
    Enums {
        source: ModelType::enumeration(
            "SourceEnum",
            [("VALUE1", "value1"), ("VALUE2", "value2"), ("VALUE3", "value3")],
        ),
        name: ModelType::enumeration("NameEnum", [("VALUE1", 1i64), ("VALUE2", 2), ("VALUE3", 3)]),
        value: ModelType::enumeration("ValueEnum", [("A", "value1"), ("B", "value2"), ("C", "value3")]),
    }
}

/// Factory selecting the target variant with the source variant's name.
fn by_name(target: &Arc<ModelType>) -> MappingRule {
    let target = target.clone();
    MappingRule::new().model_factory(move |src| {
        let name = src.variant_name().unwrap_or_default();
        Ok(target.variant(name)?)
    })
}

/// Factory selecting the target variant with the source variant's value.
fn by_value(target: &Arc<ModelType>) -> MappingRule {
    let target = target.clone();
    MappingRule::new().model_factory(move |src| {
        let value = src.attr("value").unwrap_or(Value::Null);
        Ok(target.variant_by_value(&value)?)
    })
}

fn value_object() -> Arc<ModelType> {
    ModelTypeBuilder::new("ValueObject")
        .attribute("value")
        .build()
}

/// Constructor-style factory: `ValueObject(number)` stores the number as text.
fn value_object_factory(target: &Arc<ModelType>) -> MappingRule {
    let target = target.clone();
    MappingRule::new().model_factory(move |src| {
        let text = match src.attr("amount") {
            Some(Value::Int(v)) => v.to_string(),
            Some(Value::Float(v)) => v.to_string(),
            Some(Value::Str(s)) => s,
            other => return Err(MapError::Factory(format!("not a number: {:?}", other))),
        };
        Ok(target.instantiate(vec![("value".to_string(), Value::from(text))])?)
    })
}

fn decimal(amount: i64) -> Object {
    ModelTypeBuilder::new("Decimal")
        .attribute("amount")
        .build()
        .instantiate(vec![("amount".to_string(), Value::from(amount))])
        .unwrap()
}

#[test]
fn test_map_with_registered_name_factory() {
    let e = enums();
    let mapper = create_mapper();
    mapper.add(&e.source, &e.name, by_name(&e.name)).unwrap();
    mapper.add(&e.value, &e.source, by_value(&e.source)).unwrap();

    let v3 = e.source.variant("VALUE3").unwrap();
    let b = e.value.variant("B").unwrap();

    assert_eq!(mapper.map(&v3, &e.name).unwrap(), e.name.variant("VALUE3").unwrap());
    assert_eq!(mapper.map(&b, &e.source).unwrap(), e.source.variant("VALUE2").unwrap());

    // Source-only form: the single registered target is used.
    assert_eq!(mapper.map_registered(&v3).unwrap(), e.name.variant("VALUE3").unwrap());
}

#[test]
fn test_map_with_call_time_factory() {
    let e = enums();
    let mapper = create_mapper();

    let name_enum = mapper
        .to(&e.name)
        .map_with(&e.source.variant("VALUE3").unwrap(), &by_name(&e.name))
        .unwrap();
    let source_enum = mapper
        .to(&e.source)
        .map_with(&e.value.variant("B").unwrap(), &by_value(&e.source))
        .unwrap();

    assert_eq!(name_enum.variant_name(), Some("VALUE3"));
    assert!(name_enum.is_instance_of(&e.name));
    assert_eq!(source_enum, e.source.variant("VALUE2").unwrap());
    assert_eq!(mapper.rule_count(), 0);
}

#[test]
fn test_registered_and_bound_styles_agree() {
    let e = enums();
    let src = e.source.variant("VALUE1").unwrap();

    let bound = Mapper::new();
    let via_binder = bound.to(&e.name).map_with(&src, &by_name(&e.name)).unwrap();

    let registered = Mapper::new();
    registered.add(src.model_type(), &e.name, by_name(&e.name)).unwrap();
    let via_registry = registered.map(&src, &e.name).unwrap();

    assert_eq!(via_binder, via_registry);
}

#[test]
fn test_map_with_registered_constructor_factory() {
    let target = value_object();
    let src = decimal(42);
    let mapper = create_mapper();
    mapper
        .add(src.model_type(), &target, value_object_factory(&target))
        .unwrap();

    let out = mapper.map(&src, &target).unwrap();
    assert_eq!(out.attr("value"), Some(Value::from("42")));
}

#[test]
fn test_map_with_constructor_factory() {
    let target = value_object();
    let mapper = create_mapper();

    let out = mapper
        .to(&target)
        .map_with(&decimal(42), &value_object_factory(&target))
        .unwrap();
    assert_eq!(out.attr("value"), Some(Value::from("42")));
}

#[test]
fn test_factory_error_propagates() {
    let e = enums();
    let mapper = Mapper::new();
    // ValueEnum has no VALUE1 variant name.
    let err = mapper
        .to(&e.value)
        .map_with(&e.source.variant("VALUE1").unwrap(), &by_name(&e.value))
        .unwrap_err();
    assert!(matches!(err, MapError::Construction { ref target_type, .. } if target_type == "ValueEnum"));
}

#[test]
fn test_factory_and_fields_mapping_registration_rejected() {
    let e = enums();
    let target = value_object();
    let mapper = create_mapper();

    let rule = value_object_factory(&target)
        .fields_mapping(FieldsMapping::new().transform("value", |x| x.attr("value").unwrap_or(Value::Null)));
    let err = mapper.add(&e.value, &target, rule).unwrap_err();

    assert!(matches!(err, MapError::Configuration { .. }));
    assert!(!mapper.has_rule(&e.value, &target));
}

#[test]
fn test_enum_without_factory_cannot_be_resolved() {
    let e = enums();
    let mapper = create_mapper();
    let err = mapper
        .map(&e.source.variant("VALUE1").unwrap(), &e.name)
        .unwrap_err();
    assert!(matches!(err, MapError::Resolution { ref target_type, .. } if target_type == "NameEnum"));
}
