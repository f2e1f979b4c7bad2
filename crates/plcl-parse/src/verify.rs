//! Checking a config against its template.

use std::fmt;

use plcl_tree::{ConfigRoot, TemplateRoot};
use tracing::debug;

/// Why a config failed verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// Verification is not implemented yet; every call reports this.
    Unimplemented,
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifyError::Unimplemented => f.write_str("config verification is not implemented"),
        }
    }
}

impl std::error::Error for VerifyError {}

/// Check `config` against `template`. With `strict`, undeclared attributes
/// would also be rejected.
///
/// Always returns [`VerifyError::Unimplemented`] for now.
pub fn verify(config: &ConfigRoot, template: &TemplateRoot, strict: bool) -> Result<(), VerifyError> {
    debug!(config = %config.name, template = %template.name, strict, "verify");
    Err(VerifyError::Unimplemented)
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_testhelpers::test;

    #[test]
    fn test_verify_is_unimplemented() {
        let config = ConfigRoot::new("c");
        let template = TemplateRoot::new("t");
        for strict in [false, true] {
            assert_eq!(
                verify(&config, &template, strict),
                Err(VerifyError::Unimplemented)
            );
        }
        assert_eq!(
            VerifyError::Unimplemented.to_string(),
            "config verification is not implemented"
        );
    }
}
