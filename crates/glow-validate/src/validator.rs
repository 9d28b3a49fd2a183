// ABOUTME: Runs the individual checks and folds their findings into one report
// ABOUTME: Checks are independent; a failing check never prevents the others from running

use std::path::Path;
use std::time::Instant;

use glow_css::Markers;
use glow_logging::{debug, info};
use glow_tokens::DesignSystem;

use crate::audit::{AuditRules, audit_sources};
use crate::completeness::check_completeness;
use crate::contrast::check_contrast;
use crate::error::Result;
use crate::report::{ValidationMetadata, ValidationReport, Violation};
use crate::rules::ValidationRules;
use crate::schema::check_schema;

/// Validation entry point holding the rule set.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    rules: ValidationRules,
}

impl Validator {
    pub fn new(rules: ValidationRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    /// Adjust the rule set in place.
    pub fn configure_rules<F>(&mut self, configurator: F)
    where
        F: FnOnce(&mut ValidationRules),
    {
        configurator(&mut self.rules);
    }

    fn finish(
        check: &str,
        checks_run: usize,
        started: Instant,
        violations: Vec<Violation>,
    ) -> ValidationReport {
        let report = ValidationReport {
            violations,
            metadata: ValidationMetadata {
                checks_run,
                duration: started.elapsed(),
            },
        };
        info!(
            check,
            violations = report.violations.len(),
            duration_ms = report.metadata.duration.as_secs_f64() * 1000.0,
            "Validation completed"
        );
        report
    }

    /// Schema and contrast checks over the token tree.
    pub fn validate_tokens(&self, system: &DesignSystem) -> ValidationReport {
        let started = Instant::now();
        debug!(variants = system.colors.len(), "Starting token validation");

        let mut violations = check_schema(system, &self.rules);
        violations.extend(check_contrast(system, &self.rules.contrast_pairs));

        // parity, scales, format, empty, styles, contrast
        Self::finish("tokens", 6, started, violations)
    }

    /// Completeness of the generated stylesheet against the consumer configuration.
    pub fn validate_stylesheet(
        &self,
        stylesheet: &str,
        consumer_config: &str,
        markers: &Markers,
    ) -> ValidationReport {
        let started = Instant::now();
        let violations = check_completeness(stylesheet, consumer_config, markers, &self.rules);
        Self::finish("stylesheet", 1, started, violations)
    }

    /// Audit a source tree for undefined variables, hex literals and forbidden utilities.
    pub fn audit(
        &self,
        source_dir: &Path,
        stylesheet_path: &Path,
        audit_rules: &AuditRules,
    ) -> Result<ValidationReport> {
        let started = Instant::now();
        let violations =
            audit_sources(source_dir, stylesheet_path, audit_rules, &self.rules.namespaces)?;
        Ok(Self::finish("audit", 1, started, violations))
    }
}
