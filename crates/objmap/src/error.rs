// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MapError>;

/// Errors raised by keyword-style construction of model objects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructError {
    #[error("{type_name} cannot be constructed from attributes")]
    NotInstantiable { type_name: String },

    #[error("{type_name} has no attribute '{attribute}'")]
    UnexpectedAttribute { type_name: String, attribute: String },

    #[error("{type_name} requires attribute '{attribute}'")]
    MissingAttribute { type_name: String, attribute: String },

    #[error("{type_name} has no variant {variant}")]
    UnknownVariant { type_name: String, variant: String },

    #[error("{type_name} instances are immutable")]
    Immutable { type_name: String },
}

/// Errors raised by mapper registration and map operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// A rule declares both a model factory and field overrides.
    #[error(
        "invalid rule {source_type} -> {target_type}: model_factory and fields_mapping are mutually exclusive"
    )]
    Configuration {
        source_type: String,
        target_type: String,
    },

    /// The effective factory and field overrides of a map call conflict.
    #[error("cannot combine model_factory with fields_mapping ({source_type} -> {target_type})")]
    MutualExclusion {
        source_type: String,
        target_type: String,
    },

    /// No field spec could be determined for the target type.
    #[error("cannot resolve fields of {target_type}: {reason}")]
    Resolution { target_type: String, reason: String },

    /// The target type rejected the collected field values.
    #[error("cannot construct {target_type}: {source}")]
    Construction {
        target_type: String,
        #[source]
        source: ConstructError,
    },

    /// Strict mode: a spec field has no counterpart on the source.
    #[error("{source_type} has no attribute '{attribute}'")]
    MissingSourceAttribute {
        attribute: String,
        source_type: String,
    },

    #[error("no target registered for {source_type}")]
    NoRegisteredTarget { source_type: String },

    #[error("{source_type} is registered for several targets: {targets:?}")]
    AmbiguousTarget {
        source_type: String,
        targets: Vec<String>,
    },

    /// Failure reported by a user-supplied model factory.
    #[error("model factory failed: {0}")]
    Factory(String),
}

impl MapError {
    /// Wrap a construction failure for `target_type`.
    pub fn construction(target_type: &str, source: ConstructError) -> Self {
        Self::Construction {
            target_type: target_type.to_string(),
            source,
        }
    }
}

impl From<ConstructError> for MapError {
    fn from(err: ConstructError) -> Self {
        let target_type = match &err {
            ConstructError::NotInstantiable { type_name }
            | ConstructError::UnexpectedAttribute { type_name, .. }
            | ConstructError::MissingAttribute { type_name, .. }
            | ConstructError::UnknownVariant { type_name, .. }
            | ConstructError::Immutable { type_name } => type_name.clone(),
        };
        Self::Construction {
            target_type,
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutual_exclusion_message() {
        let err = MapError::MutualExclusion {
            source_type: "A".into(),
            target_type: "B".into(),
        };
        assert!(err
            .to_string()
            .starts_with("cannot combine model_factory with fields_mapping"));
    }

    #[test]
    fn test_construct_error_conversion() {
        let err: MapError = ConstructError::UnknownVariant {
            type_name: "Color".into(),
            variant: "PINK".into(),
        }
        .into();
        assert!(matches!(
            err,
            MapError::Construction { ref target_type, .. } if target_type == "Color"
        ));
        assert_eq!(err.to_string(), "cannot construct Color: Color has no variant PINK");
    }
}
