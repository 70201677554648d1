// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use crate::error::{MapError, Result};
use crate::mapping::MappingRule;
use crate::model::{ModelType, TypeToken};
use std::collections::HashMap;
use std::sync::Arc;

/// Registry key: exact (source type, target type) identity pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypePair {
    pub source: TypeToken,
    pub target: TypeToken,
}

impl TypePair {
    pub fn new(source: &ModelType, target: &ModelType) -> Self {
        Self {
            source: source.token(),
            target: target.token(),
        }
    }
}

#[derive(Debug)]
struct RegisteredRule {
    target: Arc<ModelType>,
    rule: MappingRule,
}

/// In-memory store of mapping rules keyed by type pair.
///
/// At most one rule per exact pair; re-registration replaces the previous
/// rule (last write wins).
#[derive(Debug, Default)]
pub struct MappingRegistry {
    rules: HashMap<TypePair, RegisteredRule>,
}

impl MappingRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `rule` for `source -> target`.
    ///
    /// Returns the replaced rule, if any. A rule combining a model factory
    /// with field overrides is rejected and never stored.
    pub fn add(
        &mut self,
        source: &Arc<ModelType>,
        target: &Arc<ModelType>,
        rule: MappingRule,
    ) -> Result<Option<MappingRule>> {
        if rule.is_conflicting() {
            return Err(MapError::Configuration {
                source_type: source.name().to_string(),
                target_type: target.name().to_string(),
            });
        }

        let previous = self.rules.insert(
            TypePair::new(source, target),
            RegisteredRule {
                target: target.clone(),
                rule,
            },
        );
        match &previous {
            Some(_) => log::debug!("[MappingRegistry] replaced rule {} -> {}", source, target),
            None => log::debug!("[MappingRegistry] registered rule {} -> {}", source, target),
        }
        Ok(previous.map(|r| r.rule))
    }

    /// Exact-pair lookup.
    pub fn lookup(&self, source: &ModelType, target: &ModelType) -> Option<&MappingRule> {
        self.rules
            .get(&TypePair::new(source, target))
            .map(|r| &r.rule)
    }

    /// Exact-pair lookup falling back to the default rule.
    pub fn get(&self, source: &ModelType, target: &ModelType) -> MappingRule {
        self.lookup(source, target).cloned().unwrap_or_default()
    }

    pub fn contains(&self, source: &ModelType, target: &ModelType) -> bool {
        self.rules.contains_key(&TypePair::new(source, target))
    }

    /// Targets registered for `source`, sorted by name for determinism.
    pub fn targets_for(&self, source: &ModelType) -> Vec<Arc<ModelType>> {
        let mut targets: Vec<Arc<ModelType>> = self
            .rules
            .iter()
            .filter(|(pair, _)| pair.source == source.token())
            .map(|(_, r)| r.target.clone())
            .collect();
        targets.sort_by(|a, b| a.name().cmp(b.name()).then(a.token().cmp(&b.token())));
        targets
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::FieldsMapping;
    use crate::model::ModelTypeBuilder;

    fn types() -> (Arc<ModelType>, Arc<ModelType>, Arc<ModelType>) {
        (
            ModelTypeBuilder::new("Src").build(),
            ModelTypeBuilder::new("DtoA").build(),
            ModelTypeBuilder::new("DtoB").build(),
        )
    }

    #[test]
    fn register_and_lookup() {
        let (src, a, b) = types();
        let mut reg = MappingRegistry::new();

        reg.add(&src, &a, MappingRule::new().fields_mapping(FieldsMapping::new().copy("x")))
            .unwrap();

        assert!(reg.contains(&src, &a));
        assert!(!reg.contains(&src, &b));
        assert!(!reg.contains(&a, &src), "pairs are directional");
        assert!(reg.get(&src, &a).has_fields());
    }

    #[test]
    fn unregistered_pair_gets_default_rule() {
        let (src, a, _) = types();
        let reg = MappingRegistry::new();
        assert!(reg.lookup(&src, &a).is_none());
        assert!(reg.get(&src, &a).is_default());
    }

    #[test]
    fn same_source_many_targets() {
        let (src, a, b) = types();
        let mut reg = MappingRegistry::new();
        reg.add(&src, &b, MappingRule::new()).unwrap();
        reg.add(&src, &a, MappingRule::new()).unwrap();

        let names: Vec<String> = reg
            .targets_for(&src)
            .iter()
            .map(|t| t.name().to_string())
            .collect();
        assert_eq!(names, vec!["DtoA", "DtoB"]);
        assert!(reg.targets_for(&a).is_empty());
    }

    #[test]
    fn reregistration_replaces() {
        let (src, a, _) = types();
        let mut reg = MappingRegistry::new();

        let first = reg
            .add(&src, &a, MappingRule::new().model_factory(|s| Ok(s.clone())))
            .unwrap();
        assert!(first.is_none());

        let replaced = reg
            .add(&src, &a, MappingRule::new().fields_mapping(FieldsMapping::new().copy("x")))
            .unwrap();
        assert!(replaced.is_some_and(|r| r.has_factory()));
        assert_eq!(reg.len(), 1);
        assert!(!reg.get(&src, &a).has_factory());
    }

    #[test]
    fn conflicting_rule_rejected() {
        let (src, a, _) = types();
        let mut reg = MappingRegistry::new();

        let rule = MappingRule::new()
            .model_factory(|s| Ok(s.clone()))
            .fields_mapping(FieldsMapping::new().literal("x", 1i64));
        let err = reg.add(&src, &a, rule).unwrap_err();

        assert!(matches!(err, MapError::Configuration { .. }));
        assert!(reg.is_empty());
    }
}
