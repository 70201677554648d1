// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Runtime object model.
//!
//! Types are first-class values: they can be registered, compared by
//! identity, related through bases and introspected. Objects carry their
//! type and a set of attributes (or an enum variant).
//!
//! # Features
//!
//! - **ModelType**: Runtime type description (records, enums, interfaces)
//! - **Object**: Type-tagged instance with attribute access
//! - **Builder API**: Fluent interface for building record types
//! - **Value**: Attribute values, including functions stored as methods
//!
//! # Example
//!
//! ```rust
//! use objmap::model::{ModelTypeBuilder, Value};
//!
//! let reading = ModelTypeBuilder::new("SensorReading")
//!     .attribute("sensor_id")
//!     .attribute_with_default("unit", "celsius")
//!     .build();
//!
//! let obj = reading
//!     .instantiate(vec![("sensor_id".to_string(), Value::from(42i64))])
//!     .unwrap();
//!
//! assert_eq!(obj.attr("sensor_id"), Some(Value::Int(42)));
//! assert_eq!(obj.attr("unit"), Some(Value::from("celsius")));
//! ```

mod builder;
mod model_type;
mod object;
mod value;

pub use builder::ModelTypeBuilder;
pub use model_type::{AttributeDescriptor, EnumVariant, ModelType, TypeKind, TypeToken};
pub use object::Object;
pub use value::{Callable, NativeFn, Value};
