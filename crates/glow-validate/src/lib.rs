// ABOUTME: Validation engine for glow token trees and generated stylesheets
// ABOUTME: Schema, contrast, completeness and source audit checks with an aggregated report

pub mod audit;
pub mod completeness;
pub mod contrast;
pub mod error;
pub mod report;
pub mod rules;
pub mod schema;
pub mod validator;

pub use audit::{AuditRules, SourceAudit, audit_sources};
pub use completeness::check_completeness;
pub use contrast::{ContrastPair, check_contrast, default_pairs};
pub use error::ValidateError;
pub use report::{CheckKind, ValidationMetadata, ValidationReport, Violation};
pub use rules::ValidationRules;
pub use schema::{
    check_schema, no_empty_values, scale_completeness, style_parity, variant_parity,
    well_formedness,
};
pub use validator::Validator;
