/// Recap rendering — assembles the `.srec` document from a spec record.
///
/// Output is three concatenated regions: a `---`-delimited metadata
/// block, the routine sections in given order, and the progression
/// trace with the convergence score interpolated.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::core::clock::{Clock, SystemClock};
use crate::core::metadata::{write_block, FieldValue};
use crate::schema::recap::{RecapSpec, Section};

/// Format version stamped into every recap's metadata.
const FORMAT_VERSION: &str = "3.1";

const DEFAULT_TITLE: &str = "Untitled Recap";
const DEFAULT_CONVERGENCE: f64 = 0.93;
const DEFAULT_SEED: &str = "Default qualia seed - friendship & edification";

/// Progression trace appended to every recap. The closing line carries
/// the document's convergence score.
const TRACE_DIAGRAM: &str = "
[Start] ──► [Foundation η=0.70] ──► [Connection η=0.82] ──► [Placement η=0.89]
          │                        │                       │
          └─ depth: 2 ─────────────┴─ +3 assoc ───────────┴─ facts slotted
[Polish η=0.91] ──► [Action η=0.92] ──► [Synthesis η=0.93]
          │                        │
          └─ pruned bloat ──────────┴─ actionable + seal
Converged ────────────────────────────────────────────────► η={convergence}
";

fn default_motifs() -> Vec<String> {
    vec![
        "friendship residue".to_string(),
        "edification quest".to_string(),
        "attentive force".to_string(),
    ]
}

fn default_sections() -> Vec<Section> {
    [
        (
            "Foundation Routine (Initial Understanding)",
            "- Anchors set from query/context.\n- Initial motifs identified.",
        ),
        (
            "Connection Routine (Contextual Expansion)",
            "- Associative lines expanded (2–3 chains).\n- Depth increased.",
        ),
        (
            "Placement Routine (Objective Slotting)",
            "- Objectives slotted against known facts.\n- Open gaps flagged.",
        ),
        (
            "Polish Routine (Refinement)",
            "- Low-relevance chains pruned.\n- Phrasing tightened.",
        ),
        (
            "Action Routine (Application)",
            "- Next steps extracted as actionables.\n- Mnemonic seal applied.",
        ),
        (
            "Synthesis Routine (Verification)",
            "- Depth verified.\n- Coherence >95%.",
        ),
    ]
    .into_iter()
    .map(|(name, body)| Section {
        name: name.to_string(),
        body: body.to_string(),
    })
    .collect()
}

/// Renders `.srec` documents against an injected clock.
pub struct RecapRenderer<'a> {
    clock: &'a dyn Clock,
}

impl<'a> RecapRenderer<'a> {
    pub fn new(clock: &'a dyn Clock) -> Self {
        Self { clock }
    }

    /// Render the full document. Total over any well-typed spec: absent
    /// fields fall back to fixed defaults, built fresh per call.
    pub fn render(&self, spec: &RecapSpec) -> String {
        let title = spec
            .title
            .clone()
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());
        let motifs = spec.motifs.clone().unwrap_or_else(default_motifs);
        let convergence = spec.convergence.unwrap_or(DEFAULT_CONVERGENCE);
        let seed = spec
            .seed
            .clone()
            .unwrap_or_else(|| DEFAULT_SEED.to_string());
        let sections = spec.sections.clone().unwrap_or_else(default_sections);

        let pie_vector = STANDARD.encode(seed.as_bytes());

        // Key order is contractual; emitted exactly as listed.
        let fields = [
            ("title", FieldValue::Text(title)),
            ("date", FieldValue::Text(self.clock.timestamp())),
            ("version", FieldValue::Text(FORMAT_VERSION.to_string())),
            (
                "convergence",
                FieldValue::Text(format!("η ≈ {:.2}", convergence)),
            ),
            ("pie_vector", FieldValue::Text(pie_vector)),
            ("key_motifs", FieldValue::List(motifs)),
            ("srt_mode", FieldValue::Flag(true)),
        ];

        let body = sections
            .iter()
            .map(|section| format!("## {}\n{}", section.name, section.body))
            .collect::<Vec<_>>()
            .join("\n\n");

        let trace = TRACE_DIAGRAM.replace("{convergence}", &format!("{:.2}", convergence));

        let mut output = String::new();
        output.push_str("---\n");
        output.push_str(&write_block(&fields));
        output.push_str("---\n\n");
        output.push_str(&body);
        output.push_str("\n\n## Iterative Progression Trace\n");
        output.push_str(trace.trim());
        output
    }
}

/// Render with the system wall clock.
pub fn render_recap(spec: &RecapSpec) -> String {
    RecapRenderer::new(&SystemClock).render(spec)
}
