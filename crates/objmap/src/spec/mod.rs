// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Field spec resolution.
//!
//! A field spec is the ordered list of field names a map operation populates
//! on its target. Strategies are registered per capability type; extensions
//! for other type families plug in through [`SpecFunction`].

mod resolver;

pub use resolver::{introspect, resolve, SpecFunction, SpecResolver};
