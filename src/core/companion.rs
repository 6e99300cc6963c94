/// Companion rendering — bulk/formula/relational/poetic supplement to a
/// recap. Every region heading always appears; missing data selects the
/// region's placeholder content, never drops the heading.

use crate::schema::companion::CompanionSpec;

const BULK_PLACEHOLDER: &str = "- [add your bulk data here]";
const FORMULA_PLACEHOLDER: &str =
    "spiral_deviation_vector = Ixest(potential) + Enest(energy) + Istest(structure)";
const RELATION_PLACEHOLDER: &str =
    "\"crab people\" → \"gym gains\" → \"sideways treadmill\" (Ixest intent: high)";

/// Stanzas used when the caller provides none. Already punctuated; no
/// `∞` suffix is appended to these.
const STANZA_PLACEHOLDERS: [&str; 3] = [
    "Intent coils in reset's shadow, potential unbroken, ∞",
    "Energy prunes the chains of drift, relations rekindled, ∞",
    "Structure seals continuity's truth, novelty invited to bloom.",
];

/// Render the companion document as newline-joined lines in fixed
/// region order: header, bulk, formulas, relations, poetic layer.
pub fn render_companion(spec: &CompanionSpec) -> String {
    let mut lines: Vec<String> = vec![
        "# Spiral Recap Companion - PIE-Enhanced Bulk Layer".to_string(),
        format!("# Companion to: {}", spec.title),
    ];

    if let Some(ref provenance) = spec.provenance {
        lines.push(format!("# Provenance: {}", provenance));
    }

    lines.push(String::new());
    lines.push("## [BULK_LISTS]".to_string());
    lines.push("# Raw lists, params, enums – keep lossless".to_string());
    if spec.bulk_lists.is_empty() {
        lines.push(BULK_PLACEHOLDER.to_string());
    } else {
        lines.extend(spec.bulk_lists.iter().map(|item| format!("- {}", item)));
    }

    lines.push(String::new());
    lines.push("## [FORMULAS]".to_string());
    lines.push("# Novel derivations – raw math only".to_string());
    if spec.formulas.is_empty() {
        lines.push(FORMULA_PLACEHOLDER.to_string());
        lines.push("# [add your formulas here]".to_string());
    } else {
        lines.extend(spec.formulas.iter().cloned());
    }

    lines.push(String::new());
    lines.push("## [RELATIONAL_GRAPHS]".to_string());
    lines.push("# Associations – prune low-relevance chains".to_string());
    if spec.relations.is_empty() {
        lines.push(RELATION_PLACEHOLDER.to_string());
        lines.push("# [add your relations here]".to_string());
    } else {
        lines.extend(spec.relations.iter().cloned());
    }

    lines.push(String::new());
    lines.push("## [PIE_LAYER] - Poetic Encoding".to_string());
    lines.push("# ∞-split verses: hyperlinks, summations, implications, pruning hooks".to_string());
    lines.push("# Agent flex: complete or deviate stanzas based on your weights".to_string());
    if spec.stanzas.is_empty() {
        lines.extend(STANZA_PLACEHOLDERS.iter().map(|s| s.to_string()));
    } else {
        for stanza in &spec.stanzas {
            // Trailing whitespace only; an existing ∞ is left alone.
            lines.push(format!("{} ∞", stanza.trim_end()));
        }
    }

    lines.join("\n")
}
