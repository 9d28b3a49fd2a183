// ABOUTME: Violation types and the aggregated validation report
// ABOUTME: Every check reports independently; a report is valid when it holds no violations

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use glow_color::format_significant;

/// The check that produced a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CheckKind {
    VariantParity,
    ScaleCompleteness,
    WellFormedness,
    NoEmptyValues,
    StyleParity,
    Contrast,
    Completeness,
    Audit,
}

impl CheckKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::VariantParity => "parity",
            Self::ScaleCompleteness => "scales",
            Self::WellFormedness => "format",
            Self::NoEmptyValues => "empty",
            Self::StyleParity => "styles",
            Self::Contrast => "contrast",
            Self::Completeness => "completeness",
            Self::Audit => "audit",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single finding.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    ParityMismatch {
        group: String,
        left: String,
        right: String,
        only_left: Vec<String>,
        only_right: Vec<String>,
    },
    NotAScale {
        variant: String,
        scale: String,
    },
    MissingStep {
        variant: String,
        scale: String,
        step: u32,
    },
    UnexpectedStep {
        variant: String,
        scale: String,
        key: String,
    },
    EmptyStep {
        variant: String,
        scale: String,
        step: String,
    },
    MalformedColor {
        tree: String,
        path: String,
        value: String,
        hex_only: bool,
    },
    EmptyValue {
        tree: String,
        path: String,
    },
    StyleKeyMissing {
        family: String,
        key: String,
    },
    ContrastTooLow {
        variant: String,
        fg: String,
        bg: String,
        fg_hex: String,
        bg_hex: String,
        ratio: f64,
        min_ratio: f64,
        label: String,
    },
    MissingRegion {
        variant: String,
        start_marker: String,
    },
    MissingVariable {
        variant: String,
        name: String,
    },
    UndefinedVariable {
        file: PathBuf,
        line: usize,
        name: String,
    },
    HardcodedHex {
        file: PathBuf,
        line: usize,
        literal: String,
    },
    ForbiddenPattern {
        file: PathBuf,
        line: usize,
        pattern: String,
    },
    ManualCardHover {
        file: PathBuf,
        line: usize,
        utility: String,
    },
}

impl Violation {
    pub fn check(&self) -> CheckKind {
        match self {
            Self::ParityMismatch { .. } => CheckKind::VariantParity,
            Self::NotAScale { .. }
            | Self::MissingStep { .. }
            | Self::UnexpectedStep { .. }
            | Self::EmptyStep { .. } => CheckKind::ScaleCompleteness,
            Self::MalformedColor { .. } => CheckKind::WellFormedness,
            Self::EmptyValue { .. } => CheckKind::NoEmptyValues,
            Self::StyleKeyMissing { .. } => CheckKind::StyleParity,
            Self::ContrastTooLow { .. } => CheckKind::Contrast,
            Self::MissingRegion { .. } | Self::MissingVariable { .. } => CheckKind::Completeness,
            Self::UndefinedVariable { .. }
            | Self::HardcodedHex { .. }
            | Self::ForbiddenPattern { .. }
            | Self::ManualCardHover { .. } => CheckKind::Audit,
        }
    }

    /// Rewrite a source location relative to `base` for display.
    pub fn relative_to(mut self, base: &Path) -> Self {
        if let Self::UndefinedVariable { file, .. }
        | Self::HardcodedHex { file, .. }
        | Self::ForbiddenPattern { file, .. }
        | Self::ManualCardHover { file, .. } = &mut self
        {
            *file = crate::audit::relative_to(file, base);
        }
        self
    }
}

fn list(paths: &[String]) -> String {
    if paths.is_empty() {
        "(none)".to_string()
    } else {
        paths.join(", ")
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParityMismatch {
                group,
                left,
                right,
                only_left,
                only_right,
            } => write!(
                f,
                "{group}: {left} and {right} differ; only in {left}: {}; only in {right}: {}",
                list(only_left),
                list(only_right)
            ),
            Self::NotAScale { variant, scale } => write!(
                f,
                "scales.{variant}.{scale}: expected a 12-step scale, found a single value"
            ),
            Self::MissingStep {
                variant,
                scale,
                step,
            } => write!(f, "scales.{variant}.{scale}: missing step {step}"),
            Self::UnexpectedStep {
                variant,
                scale,
                key,
            } => write!(f, "scales.{variant}.{scale}: unexpected step key {key:?}"),
            Self::EmptyStep {
                variant,
                scale,
                step,
            } => write!(f, "scales.{variant}.{scale}: step {step} is empty"),
            Self::MalformedColor {
                tree,
                path,
                value,
                hex_only,
            } => {
                let expected = if *hex_only { "#RRGGBB" } else { "#RRGGBB or rgba()" };
                write!(f, "{tree}.{path}: {value} is not a valid {expected} color")
            }
            Self::EmptyValue { tree, path } => {
                write!(f, "{tree}.{path}: value is null or empty")
            }
            Self::StyleKeyMissing { family, key } => {
                write!(f, "styles.{family}: missing {key}")
            }
            Self::ContrastTooLow {
                variant,
                fg,
                bg,
                fg_hex,
                bg_hex,
                ratio,
                min_ratio,
                label,
            } => write!(
                f,
                "WCAG FAIL ({variant}): {fg} ({fg_hex}) on {bg} ({bg_hex}) = {}:1 < {min_ratio}:1 ({label})",
                format_significant(*ratio, 4)
            ),
            Self::MissingRegion {
                variant,
                start_marker,
            } => write!(
                f,
                "{variant}: theme region not found (start marker {start_marker:?})"
            ),
            Self::MissingVariable { variant, name } => write!(
                f,
                "{variant}: {name} is referenced by the consumer configuration but not declared"
            ),
            Self::UndefinedVariable { file, line, name } => write!(
                f,
                "{}:{line}: {name} is used but not defined in the stylesheet",
                file.display()
            ),
            Self::HardcodedHex {
                file,
                line,
                literal,
            } => write!(
                f,
                "{}:{line}: {literal} found. Should use a design token.",
                file.display()
            ),
            Self::ForbiddenPattern {
                file,
                line,
                pattern,
            } => write!(
                f,
                "{}:{line}: found forbidden pattern '{pattern}'",
                file.display()
            ),
            Self::ManualCardHover {
                file,
                line,
                utility,
            } => write!(
                f,
                "{}:{line}: manual {utility} on <Card>, use the 'interactive' prop",
                file.display()
            ),
        }
    }
}

/// Bookkeeping about a validation run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationMetadata {
    pub checks_run: usize,
    pub duration: Duration,
}

/// All findings of one or more validation runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
    pub metadata: ValidationMetadata,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn by_check(&self, check: CheckKind) -> Vec<&Violation> {
        self.violations
            .iter()
            .filter(|v| v.check() == check)
            .collect()
    }

    /// Fold another report into this one.
    pub fn merge(&mut self, other: ValidationReport) {
        self.violations.extend(other.violations);
        self.metadata.checks_run += other.metadata.checks_run;
        self.metadata.duration += other.metadata.duration;
    }

    pub fn summary(&self) -> String {
        format!(
            "Validation Result: {} | {} violations | Checked {} rules in {:.2}ms",
            if self.is_valid() { "PASS" } else { "FAIL" },
            self.violations.len(),
            self.metadata.checks_run,
            self.metadata.duration.as_secs_f64() * 1000.0
        )
    }
}
