//! Operation result envelope.
//!
//! Every JSON response wraps its payload as `{meta, data}`; `meta` reports how
//! many items the operation touched plus any warnings worth surfacing.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

/// Outcome summary attached to every response body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct OperationMeta {
    /// Number of successfully processed items.
    pub success_count: usize,

    /// Error messages; empty on success.
    pub errors: Vec<String>,

    /// Non-fatal warnings.
    pub warnings: Vec<String>,
}

impl OperationMeta {
    /// Meta for an operation that processed `count` items without errors.
    #[must_use]
    pub(crate) fn succeeded(count: usize) -> Self {
        Self {
            success_count: count,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    #[must_use]
    pub(crate) fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub(crate) fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn succeeded_meta_has_no_errors() {
        let meta = OperationMeta::succeeded(3);

        assert_eq!(meta.success_count, 3);
        assert!(meta.is_success());
        assert!(!meta.has_errors());
    }

    #[test]
    fn errors_flip_success() {
        let meta = OperationMeta {
            success_count: 0,
            errors: vec!["boom".to_string()],
            warnings: Vec::new(),
        };

        assert!(meta.has_errors());
        assert!(!meta.is_success());
    }
}
