// ABOUTME: Source audit: undefined design variables, hardcoded hex colors and forbidden utilities
// ABOUTME: Walks the source tree honoring ignore files and scans each file line by line

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use glow_css::declared_variables;
use glow_logging::{debug, warn};
use ignore::WalkBuilder;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidateError};
use crate::report::Violation;

static VAR_USAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"var\((--[a-zA-Z0-9-]+)\)").expect("var() pattern is valid"));

static HEX_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"#(?:[0-9a-fA-F]{3}){1,2}\b").expect("hex literal pattern is valid")
});

/// Black and white literals are tolerated everywhere.
const NEUTRAL_HEX: [&str; 4] = ["#fff", "#ffffff", "#000", "#000000"];

/// Audit configuration, the `[audit]` table of glow.toml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditRules {
    /// File extensions to scan, without the dot.
    pub extensions: Vec<String>,
    /// Path fragments whose files may contain hex literals.
    pub ignore_hex_in: Vec<String>,
    /// Regexes for utilities that bypass the semantic tokens.
    pub forbidden_patterns: Vec<String>,
    /// Hover utilities that may not be written by hand on a `<Card`.
    pub card_hover: Vec<String>,
}

impl Default for AuditRules {
    fn default() -> Self {
        let strings =
            |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };
        Self {
            extensions: strings(&["ts", "tsx", "css"]),
            ignore_hex_in: strings(&[
                "src/index.css",
                "src/App.tsx",
                "src/components/ui/CheckoutFormDemo.tsx",
                "src/tokens.test.ts",
                "src/components/ui/Chart.tsx",
                "src/components/ui/BrandIcons.tsx",
                "src/components/logos/",
                "src/components/sign-up.tsx",
            ]),
            forbidden_patterns: strings(&[
                r"bg-(?:zinc|gray|slate|neutral|stone|red|blue|green)-[0-9]+",
                r"text-(?:zinc|gray|slate|neutral|stone|red|blue|green)-[0-9]+",
                r"bg-(?:white|black)(?:[^/]|$)",
                // retired glass materials
                r#"variant=["']glass["']"#,
                r#"variant=["']glass-atmospheric["']"#,
                r"class.*glass-card",
                r"class.*glass-atmospheric",
            ]),
            card_hover: strings(&["hover:scale", "hover:translate", "hover:border"]),
        }
    }
}

/// Scans a source tree against the variables a stylesheet declares.
#[derive(Debug)]
pub struct SourceAudit<'a> {
    rules: &'a AuditRules,
    namespaces: &'a [String],
    declared: BTreeSet<String>,
    forbidden: Vec<(String, Regex)>,
}

impl<'a> SourceAudit<'a> {
    /// Compile the forbidden patterns and collect every variable declared in `stylesheet`.
    pub fn new(rules: &'a AuditRules, namespaces: &'a [String], stylesheet: &str) -> Result<Self> {
        let forbidden = rules
            .forbidden_patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern)
                    .map(|re| (pattern.clone(), re))
                    .map_err(|e| ValidateError::invalid_pattern(pattern.as_str(), e))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            rules,
            namespaces,
            declared: declared_variables(stylesheet),
            forbidden,
        })
    }

    fn in_namespace(&self, name: &str) -> bool {
        self.namespaces.iter().any(|prefix| name.starts_with(prefix.as_str()))
    }

    fn hex_allowed(&self, path: &Path) -> bool {
        let normalized = path.to_string_lossy().replace('\\', "/");
        self.rules
            .ignore_hex_in
            .iter()
            .any(|fragment| normalized.contains(fragment.as_str()))
    }

    fn wants(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.rules.extensions.iter().any(|e| e == ext))
    }

    /// Scan one file's contents.
    pub fn scan_text(&self, file: &Path, text: &str) -> Vec<Violation> {
        let hex_allowed = self.hex_allowed(file);
        let mut violations = Vec::new();

        for (index, line) in text.lines().enumerate() {
            let line_no = index + 1;

            for caps in VAR_USAGE.captures_iter(line) {
                let name = &caps[1];
                if self.in_namespace(name) && !self.declared.contains(name) {
                    violations.push(Violation::UndefinedVariable {
                        file: file.to_path_buf(),
                        line: line_no,
                        name: name.to_string(),
                    });
                }
            }

            if !hex_allowed {
                for literal in HEX_LITERAL.find_iter(line).map(|m| m.as_str()) {
                    if !NEUTRAL_HEX.contains(&literal.to_ascii_lowercase().as_str()) {
                        violations.push(Violation::HardcodedHex {
                            file: file.to_path_buf(),
                            line: line_no,
                            literal: literal.to_string(),
                        });
                    }
                }
            }

            for (pattern, re) in &self.forbidden {
                if re.is_match(line) {
                    violations.push(Violation::ForbiddenPattern {
                        file: file.to_path_buf(),
                        line: line_no,
                        pattern: pattern.clone(),
                    });
                }
            }

            if line.contains("<Card") {
                let manual = self.rules.card_hover.iter().find(|u| line.contains(u.as_str()));
                if let Some(utility) = manual {
                    violations.push(Violation::ManualCardHover {
                        file: file.to_path_buf(),
                        line: line_no,
                        utility: utility.clone(),
                    });
                }
            }
        }

        violations
    }

    /// Walk `root` and scan every file with a configured extension.
    ///
    /// Files are visited in name order; unreadable or non-UTF-8 files are skipped.
    pub fn scan_dir(&self, root: &Path) -> Result<Vec<Violation>> {
        if !root.is_dir() {
            return Err(ValidateError::MissingSourceDir {
                path: root.to_path_buf(),
            });
        }

        let walker = WalkBuilder::new(root)
            .require_git(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let mut violations = Vec::new();
        let mut scanned = 0usize;
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable directory entry");
                    continue;
                }
            };
            let path = entry.path();
            if !entry.file_type().is_some_and(|t| t.is_file()) || !self.wants(path) {
                continue;
            }

            match std::fs::read_to_string(path) {
                Ok(text) => {
                    scanned += 1;
                    violations.extend(self.scan_text(path, &text));
                }
                Err(e) => debug!(path = %path.display(), error = %e, "Skipping file"),
            }
        }

        debug!(root = %root.display(), files = scanned, "Source audit scanned files");
        Ok(violations)
    }
}

/// Audit `source_dir` against the variables declared in the stylesheet at `stylesheet_path`.
pub fn audit_sources(
    source_dir: &Path,
    stylesheet_path: &Path,
    rules: &AuditRules,
    namespaces: &[String],
) -> Result<Vec<Violation>> {
    let stylesheet = std::fs::read_to_string(stylesheet_path)
        .map_err(|e| ValidateError::io(stylesheet_path, e))?;
    SourceAudit::new(rules, namespaces, &stylesheet)?.scan_dir(source_dir)
}

/// Display path relative to `base` when possible.
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    path.strip_prefix(base).map(Path::to_path_buf).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn namespaces() -> Vec<String> {
        vec!["--color-".into(), "--sidebar-".into(), "--chart-".into()]
    }

    #[test]
    fn test_scan_text_finds_each_kind() {
        let rules = AuditRules::default();
        let ns = namespaces();
        let audit = SourceAudit::new(&rules, &ns, "--color-surface: 1 2 3;").unwrap();

        let text = "const a = 'var(--color-surface)';\n\
                    const b = 'var(--color-ghost) var(--font-satoshi)';\n\
                    const c = '#38BDB8 #fff #000000';\n\
                    <div className=\"bg-zinc-950\" />";
        let violations = audit.scan_text(Path::new("src/components/Card.tsx"), text);

        assert_eq!(
            violations,
            [
                Violation::UndefinedVariable {
                    file: "src/components/Card.tsx".into(),
                    line: 2,
                    name: "--color-ghost".into(),
                },
                Violation::HardcodedHex {
                    file: "src/components/Card.tsx".into(),
                    line: 3,
                    literal: "#38BDB8".into(),
                },
                Violation::ForbiddenPattern {
                    file: "src/components/Card.tsx".into(),
                    line: 4,
                    pattern: rules.forbidden_patterns[0].clone(),
                },
            ]
        );
    }

    #[test]
    fn test_allow_listed_paths_may_use_hex() {
        let rules = AuditRules::default();
        let ns = namespaces();
        let audit = SourceAudit::new(&rules, &ns, "").unwrap();

        for path in ["src/App.tsx", "/work/app/src/components/logos/Acme.tsx"] {
            assert!(audit.scan_text(Path::new(path), "fill=\"#E8573A\"").is_empty(), "{path}");
        }
    }

    #[test]
    fn test_bare_white_background_is_forbidden_but_alpha_is_not() {
        let rules = AuditRules::default();
        let ns = namespaces();
        let audit = SourceAudit::new(&rules, &ns, "").unwrap();

        assert_eq!(audit.scan_text(Path::new("a.tsx"), "className=\"bg-white p-2\"").len(), 1);
        assert!(audit.scan_text(Path::new("a.tsx"), "className=\"bg-white/10\"").is_empty());
    }

    #[test]
    fn test_retired_glass_materials_are_forbidden() {
        let rules = AuditRules::default();
        let ns = namespaces();
        let audit = SourceAudit::new(&rules, &ns, "").unwrap();

        for line in [
            "<Surface variant=\"glass\" />",
            "<Surface variant='glass-atmospheric' />",
            "<div className=\"glass-card p-4\" />",
            "<div className=\"glass-atmospheric\" />",
        ] {
            let violations = audit.scan_text(Path::new("a.tsx"), line);
            assert_eq!(violations.len(), 1, "{line}");
            assert_eq!(violations[0].check(), crate::report::CheckKind::Audit);
        }
        let current = "<div className=\"glass-panel\" />";
        assert!(audit.scan_text(Path::new("a.tsx"), current).is_empty());
    }

    #[test]
    fn test_manual_hover_on_card() {
        let rules = AuditRules::default();
        let ns = namespaces();
        let audit = SourceAudit::new(&rules, &ns, "").unwrap();

        let text = "<Card className=\"hover:scale-105 hover:border-accent\">\n\
                    <Card interactive>\n\
                    <div className=\"hover:scale-105\" />";
        assert_eq!(
            audit.scan_text(Path::new("src/Plans.tsx"), text),
            [Violation::ManualCardHover {
                file: "src/Plans.tsx".into(),
                line: 1,
                utility: "hover:scale".into(),
            }]
        );
        assert_eq!(
            Violation::ManualCardHover {
                file: "src/Plans.tsx".into(),
                line: 1,
                utility: "hover:scale".into(),
            }
            .to_string(),
            "src/Plans.tsx:1: manual hover:scale on <Card>, use the 'interactive' prop"
        );

        let off = AuditRules {
            card_hover: Vec::new(),
            ..AuditRules::default()
        };
        let audit = SourceAudit::new(&off, &ns, "").unwrap();
        assert!(audit.scan_text(Path::new("src/Plans.tsx"), text).is_empty());
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let rules = AuditRules {
            forbidden_patterns: vec!["bg-(".into()],
            ..AuditRules::default()
        };
        let ns = namespaces();
        let err = SourceAudit::new(&rules, &ns, "").unwrap_err();
        assert!(matches!(err, ValidateError::InvalidPattern { .. }));
    }

    #[test]
    fn test_relative_to() {
        assert_eq!(relative_to(Path::new("/a/b/c.ts"), Path::new("/a")), PathBuf::from("b/c.ts"));
        assert_eq!(relative_to(Path::new("c.ts"), Path::new("/a")), PathBuf::from("c.ts"));
    }
}
