// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # objmap - Object-to-object mapping
//!
//! Produces an instance of a target type from an instance of a source type
//! by copying same-named fields, optionally applying per-field overrides or
//! a custom construction function. Used to keep domain objects and their
//! API/persistence representations apart without hand-written conversions.
//!
//! ## Quick Start
//!
//! ```rust
//! use objmap::{create_mapper, FieldsMapping, MappingRule, ModelTypeBuilder, Value};
//!
//! # fn main() -> objmap::Result<()> {
//! let user = ModelTypeBuilder::new("User")
//!     .attribute("name")
//!     .attribute("password")
//!     .build();
//! let public = ModelTypeBuilder::new("PublicUser")
//!     .attribute_with_default("name", Value::Null)
//!     .attribute_with_default("source", Value::Null)
//!     .build();
//!
//! let mapper = create_mapper();
//! mapper.add(
//!     &user,
//!     &public,
//!     MappingRule::new().fields_mapping(FieldsMapping::new().literal("source", "db")),
//! )?;
//!
//! let ada = user
//!     .instantiate(vec![
//!         ("name".to_string(), Value::from("ada")),
//!         ("password".to_string(), Value::from("secret")),
//!     ])?;
//!
//! let out = mapper.map(&ada, &public)?;
//! assert_eq!(out.attr("name"), Some(Value::from("ada")));
//! assert_eq!(out.attr("source"), Some(Value::from("db")));
//! assert!(!out.has_attr("password"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +--------------------------------------------------------------+
//! |  Mapper: map / map_with / to(T).map / map_registered         |
//! +------------------------------+-------------------------------+
//! |  MappingRegistry             |  SpecResolver                 |
//! |  (source, target) -> rule    |  capability -> spec function  |
//! +------------------------------+-------------------------------+
//! |  Object model: ModelType, Object, Value                      |
//! +--------------------------------------------------------------+
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Mapper`] | Owns rules and spec functions, performs map operations |
//! | [`MappingRule`] | Model factory or per-field overrides for a type pair |
//! | [`FieldsMapping`] | Ordered per-field override table |
//! | [`ModelType`] | Runtime type: record, enum or interface |
//! | [`Object`] | Instance of a [`ModelType`] |
//!
//! ## Modules Overview
//!
//! - [`model`] - Runtime object model
//! - [`mapping`] - Rules and the pair registry
//! - [`spec`] - Field spec resolution strategies
//! - [`extensions`] - Spec functions for other type families
//! - [`config`] - Mapper configuration

pub mod config;
pub mod error;
pub mod extensions;
pub mod mapper;
pub mod mapping;
pub mod model;
pub mod spec;

pub use config::{ConfigError, MapperConfig};
pub use error::{ConstructError, MapError, Result};
pub use mapper::{create_mapper, default_mapper, Mapper, TargetBinder};
pub use mapping::{FieldSource, FieldsMapping, MappingRegistry, MappingRule};
pub use model::{Callable, ModelType, ModelTypeBuilder, Object, Value};
pub use spec::{SpecFunction, SpecResolver};
