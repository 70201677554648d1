// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Spec functions for type families the default introspection cannot
//! handle. Each extension exposes an `extend(&Mapper)` entry point.

#[cfg(feature = "declarative")]
pub mod declarative;
