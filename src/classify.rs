//! Classification of test runs: an advisory runtime-duration category and
//! an advisory risk level. Neither affects execution; setters store any
//! string verbatim.

use crate::harness::Harness;

/// Duration Short: at most one minute.
pub const RUNTIME_CATEGORY_SHORT: &str = "Duration Short";
/// Duration Medium: over one and at most ten minutes.
pub const RUNTIME_CATEGORY_MEDIUM: &str = "Duration Medium";
/// Duration Long: over ten and at most sixty minutes.
pub const RUNTIME_CATEGORY_LONG: &str = "Duration Long";

/// Harmless: no influence on system settings or application data.
pub const RISK_LEVEL_HARMLESS: &str = "Risk level harmless";
/// Dangerous: changes persistent application data.
pub const RISK_LEVEL_DANGEROUS: &str = "Risk level dangerous";
/// Critical: changes system settings or customizing.
pub const RISK_LEVEL_CRITICAL: &str = "Risk level critical";

impl Harness {
    pub fn runtime_category(&self) -> &str {
        &self.runtime_category
    }

    pub fn set_runtime_category(&mut self, runtime_category: impl Into<String>) {
        self.runtime_category = runtime_category.into();
    }

    pub fn risk_level(&self) -> &str {
        &self.risk_level
    }

    pub fn set_risk_level(&mut self, risk_level: impl Into<String>) {
        self.risk_level = risk_level.into();
    }

    pub fn runtime_category_short(&self) -> &'static str {
        RUNTIME_CATEGORY_SHORT
    }

    pub fn runtime_category_medium(&self) -> &'static str {
        RUNTIME_CATEGORY_MEDIUM
    }

    pub fn runtime_category_long(&self) -> &'static str {
        RUNTIME_CATEGORY_LONG
    }

    pub fn risk_level_harmless(&self) -> &'static str {
        RISK_LEVEL_HARMLESS
    }

    pub fn risk_level_dangerous(&self) -> &'static str {
        RISK_LEVEL_DANGEROUS
    }

    pub fn risk_level_critical(&self) -> &'static str {
        RISK_LEVEL_CRITICAL
    }
}
