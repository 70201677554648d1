// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! The mapping engine.
//!
//! A [`Mapper`] owns its rule registry and its spec resolver; independent
//! mappers share nothing. Registration and mapping may interleave across
//! threads: both tables sit behind read-mostly locks, and no lock is held
//! while user functions (factories, transforms, spec functions) run.

use crate::config::MapperConfig;
use crate::error::{MapError, Result};
use crate::mapping::{MappingRegistry, MappingRule};
use crate::model::{ModelType, Object, Value};
use crate::spec::{self, SpecFunction, SpecResolver};
use parking_lot::RwLock;
use std::sync::{Arc, OnceLock};

static DEFAULT_MAPPER: OnceLock<Mapper> = OnceLock::new();

/// Create a mapper with default configuration and the bundled extensions.
pub fn create_mapper() -> Mapper {
    let mapper = Mapper::new();
    #[cfg(feature = "declarative")]
    crate::extensions::declarative::extend(&mapper);
    mapper
}

/// Process-wide convenience mapper, created on first use by [`create_mapper`].
pub fn default_mapper() -> &'static Mapper {
    DEFAULT_MAPPER.get_or_init(create_mapper)
}

/// Object-to-object mapper.
#[derive(Debug)]
pub struct Mapper {
    config: MapperConfig,
    rules: RwLock<MappingRegistry>,
    specs: RwLock<SpecResolver>,
}

impl Default for Mapper {
    fn default() -> Self {
        Self::new()
    }
}

impl Mapper {
    /// Create a mapper with no rules and no spec functions.
    pub fn new() -> Self {
        Self::with_config(MapperConfig::default())
    }

    pub fn with_config(config: MapperConfig) -> Self {
        Self {
            config,
            rules: RwLock::new(MappingRegistry::new()),
            specs: RwLock::new(SpecResolver::new()),
        }
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Register a rule for `source -> target`; returns the replaced rule.
    pub fn add(
        &self,
        source: &Arc<ModelType>,
        target: &Arc<ModelType>,
        rule: MappingRule,
    ) -> Result<Option<MappingRule>> {
        self.rules.write().add(source, target, rule)
    }

    /// Check if a rule is registered for the exact pair.
    pub fn has_rule(&self, source: &ModelType, target: &ModelType) -> bool {
        self.rules.read().contains(source, target)
    }

    /// Number of registered rules.
    pub fn rule_count(&self) -> usize {
        self.rules.read().len()
    }

    /// Register a spec function for `capability` and its subtypes.
    pub fn add_spec<F>(&self, capability: &Arc<ModelType>, func: F)
    where
        F: Fn(&ModelType) -> Vec<String> + Send + Sync + 'static,
    {
        let func: SpecFunction = Arc::new(func);
        self.specs.write().add_spec(capability, func);
    }

    /// Resolve the field spec of `target`.
    pub fn resolve_spec(&self, target: &Arc<ModelType>) -> Result<Vec<String>> {
        // Released before the spec function runs.
        let selected = self.specs.read().select(target);
        spec::resolve(selected, target)
    }

    /// Map `source` to an instance of `target`.
    pub fn map(&self, source: &Object, target: &Arc<ModelType>) -> Result<Object> {
        self.map_with(source, target, &MappingRule::default())
    }

    /// Map with call-time overrides.
    ///
    /// Each override argument takes precedence over the registered rule for
    /// this call only; the registry is not modified.
    pub fn map_with(
        &self,
        source: &Object,
        target: &Arc<ModelType>,
        overrides: &MappingRule,
    ) -> Result<Object> {
        let source_type = source.model_type();
        let registered = self.rules.read().get(source_type, target);
        let effective = overrides.merged_over(&registered);

        if effective.is_conflicting() {
            log::debug!(
                "[Mapper::map] {}: {} -> {} rejected, factory and fields_mapping both set",
                self.config.name,
                source_type,
                target
            );
            return Err(MapError::MutualExclusion {
                source_type: source_type.name().to_string(),
                target_type: target.name().to_string(),
            });
        }

        if let Some(factory) = effective.factory() {
            log::trace!(
                "[Mapper::map] {}: {} -> {} via model factory",
                self.config.name,
                source_type,
                target
            );
            return factory(source);
        }

        let fields = self.resolve_spec(target)?;
        log::trace!(
            "[Mapper::map] {}: {} -> {} copying {} fields",
            self.config.name,
            source_type,
            target,
            fields.len()
        );

        let overrides = effective.fields();
        let mut values: Vec<(String, Value)> = Vec::with_capacity(fields.len());
        for field in fields {
            let entry = overrides.and_then(|o| o.get(&field));
            let value = match entry {
                Some(entry) => entry.resolve(&field, source),
                None => source.attr(&field),
            };

            let Some(value) = value else {
                if self.config.strict_fields {
                    let attribute = entry
                        .and_then(|e| e.source_attribute(&field))
                        .unwrap_or(field.as_str())
                        .to_string();
                    return Err(MapError::MissingSourceAttribute {
                        attribute,
                        source_type: source_type.name().to_string(),
                    });
                }
                log::trace!(
                    "[Mapper::map] {}: {} has no '{}', skipped",
                    self.config.name,
                    source_type,
                    field
                );
                continue;
            };

            if self.config.skip_none_values && value.is_null() {
                continue;
            }
            values.push((field, value));
        }

        target
            .instantiate(values)
            .map_err(|err| MapError::construction(target.name(), err))
    }

    /// Bind the target type; the source type is taken from each source
    /// object at call time.
    pub fn to(&self, target: &Arc<ModelType>) -> TargetBinder<'_> {
        TargetBinder {
            mapper: self,
            target: target.clone(),
        }
    }

    /// Map `source` to the single target registered for its type.
    pub fn map_registered(&self, source: &Object) -> Result<Object> {
        let source_type = source.model_type();
        let mut targets = self.rules.read().targets_for(source_type);
        match targets.len() {
            0 => Err(MapError::NoRegisteredTarget {
                source_type: source_type.name().to_string(),
            }),
            1 => {
                let target = targets.remove(0);
                self.map(source, &target)
            }
            _ => Err(MapError::AmbiguousTarget {
                source_type: source_type.name().to_string(),
                targets: targets.iter().map(|t| t.name().to_string()).collect(),
            }),
        }
    }
}

/// Mapper bound to a target type, see [`Mapper::to`].
#[derive(Debug, Clone)]
pub struct TargetBinder<'a> {
    mapper: &'a Mapper,
    target: Arc<ModelType>,
}

impl TargetBinder<'_> {
    pub fn target(&self) -> &Arc<ModelType> {
        &self.target
    }

    pub fn map(&self, source: &Object) -> Result<Object> {
        self.mapper.map(source, &self.target)
    }

    pub fn map_with(&self, source: &Object, overrides: &MappingRule) -> Result<Object> {
        self.mapper.map_with(source, &self.target, overrides)
    }
}
