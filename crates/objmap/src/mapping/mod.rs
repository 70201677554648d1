// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Mapping rules and the pair registry.

mod registry;
mod rule;

pub use registry::{MappingRegistry, TypePair};
pub use rule::{FieldSource, FieldsMapping, MappingRule, ModelFactory, SupplyFn, TransformFn};
