// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use crate::error::{MapError, Result};
use crate::model::ModelType;
use std::fmt;
use std::sync::Arc;

/// Strategy returning the field names to populate on a target type.
pub type SpecFunction = Arc<dyn Fn(&ModelType) -> Vec<String> + Send + Sync>;

struct SpecEntry {
    capability: Arc<ModelType>,
    func: SpecFunction,
}

/// Strategy table consulted to resolve field specs.
///
/// Entries are keyed by capability type. An entry registered for the exact
/// target type wins; otherwise the first entry (in registration order) whose
/// capability the target derives from is used; otherwise the default
/// introspection strategy applies.
#[derive(Default)]
pub struct SpecResolver {
    entries: Vec<SpecEntry>,
}

impl SpecResolver {
    /// Create a resolver with no registered strategies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `func` for `capability` and every type deriving from it.
    ///
    /// Re-registering a capability replaces its function in place.
    pub fn add_spec(&mut self, capability: &Arc<ModelType>, func: SpecFunction) {
        match self
            .entries
            .iter_mut()
            .find(|e| e.capability.token() == capability.token())
        {
            Some(entry) => {
                log::debug!("[SpecResolver] replacing spec function for {}", capability);
                entry.func = func;
            }
            None => {
                log::debug!("[SpecResolver] registered spec function for {}", capability);
                self.entries.push(SpecEntry {
                    capability: capability.clone(),
                    func,
                });
            }
        }
    }

    /// Check if a strategy is registered for exactly this capability.
    pub fn has_spec(&self, capability: &ModelType) -> bool {
        self.entries
            .iter()
            .any(|e| e.capability.token() == capability.token())
    }

    /// Number of registered strategies.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pick the strategy for `target`, if any was registered.
    pub fn select(&self, target: &ModelType) -> Option<SpecFunction> {
        let exact = self
            .entries
            .iter()
            .find(|e| e.capability.token() == target.token());
        exact
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|e| target.is_subtype_of(&e.capability))
            })
            .map(|e| {
                log::trace!(
                    "[SpecResolver::select] {} resolved via {}",
                    target,
                    e.capability
                );
                e.func.clone()
            })
    }
}

impl fmt::Debug for SpecResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|e| e.capability.name()))
            .finish()
    }
}

/// Resolve the field spec of `target` with the strategy picked by
/// [`SpecResolver::select`], falling back to [`introspect`].
pub fn resolve(
    selected: Option<SpecFunction>,
    target: &Arc<ModelType>,
) -> Result<Vec<String>> {
    match selected {
        Some(func) => Ok(func(target.as_ref())),
        None => introspect(target),
    }
}

/// Default strategy: introspect a representative instance.
///
/// The instance is built with no keywords, so every attribute must have a
/// default. Private (`_`-prefixed) names and methods are excluded.
pub fn introspect(target: &Arc<ModelType>) -> Result<Vec<String>> {
    let probe = target
        .instantiate(Vec::new())
        .map_err(|err| MapError::Resolution {
            target_type: target.name().to_string(),
            reason: err.to_string(),
        })?;

    Ok(probe
        .attributes()
        .filter(|(name, value)| !name.starts_with('_') && !value.is_callable())
        .map(|(name, _)| name.to_string())
        .collect())
}
