// ABOUTME: Checks that each theme block declares every variable the consumer configuration uses
// ABOUTME: Reads the stylesheet and consumer text only, never the token tree

use glow_css::{Markers, declared_variables, theme_block, var_references};

use crate::report::Violation;
use crate::rules::ValidationRules;

/// Report each referenced variable missing from each configured theme block.
///
/// A region whose start marker is absent yields a single violation rather
/// than one per variable.
pub fn check_completeness(
    stylesheet: &str,
    consumer_config: &str,
    markers: &Markers,
    rules: &ValidationRules,
) -> Vec<Violation> {
    let referenced: Vec<String> = var_references(consumer_config)
        .into_iter()
        .filter(|name| rules.in_namespace(name))
        .collect();

    let mut violations = Vec::new();
    for region in &markers.regions {
        let Some(block) = theme_block(stylesheet, &region.start) else {
            violations.push(Violation::MissingRegion {
                variant: region.variant.clone(),
                start_marker: region.start.clone(),
            });
            continue;
        };

        let declared = declared_variables(block);
        violations.extend(
            referenced
                .iter()
                .filter(|name| !declared.contains(name.as_str()))
                .map(|name| Violation::MissingVariable {
                    variant: region.variant.clone(),
                    name: name.clone(),
                }),
        );
    }

    violations
}
