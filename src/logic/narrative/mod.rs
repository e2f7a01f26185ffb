//! Narrative Module - Generated Narrative Normalizer
//!
//! Chuyển narrative từ generative service thành markup an toàn để hiển thị.
//!
//! Pipeline = fixed ordered list of pure rewrite rules. Order is the
//! correctness contract:
//! - header canonicalization runs before generic bold conversion
//! - bullets become items before runs of items are merged into a list
//! - paragraph wrapping runs last so it never wraps produced markup
//!
//! Output vocabulary: `<p>`, `<strong>`, `<ul>`, `<li>`, and
//! `<p><strong>...</strong></p>` for section headers.

pub mod rules;

#[cfg(test)]
mod tests;

/// One named step of the rewrite chain
#[derive(Clone, Copy)]
pub struct NarrativeRule {
    pub name: &'static str,
    pub apply: fn(&str) -> String,
}

impl std::fmt::Debug for NarrativeRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NarrativeRule").field("name", &self.name).finish()
    }
}

pub static NARRATIVE_RULES: [NarrativeRule; 13] = [
    NarrativeRule { name: "prepare", apply: rules::prepare },
    NarrativeRule { name: "strip_greeting", apply: rules::strip_greeting },
    NarrativeRule { name: "strip_preamble", apply: rules::strip_preamble },
    NarrativeRule { name: "strip_walkthrough", apply: rules::strip_walkthrough },
    NarrativeRule { name: "strip_understanding", apply: rules::strip_understanding },
    NarrativeRule { name: "strip_rules", apply: rules::strip_rules },
    NarrativeRule { name: "canonicalize_headers", apply: rules::canonicalize_headers },
    NarrativeRule { name: "convert_bold", apply: rules::convert_bold },
    NarrativeRule { name: "convert_bullets", apply: rules::convert_bullets },
    NarrativeRule { name: "merge_lists", apply: rules::merge_lists },
    NarrativeRule { name: "collapse_blank_lines", apply: rules::collapse_blank_lines },
    NarrativeRule { name: "wrap_paragraphs", apply: rules::wrap_paragraphs },
    NarrativeRule { name: "trim", apply: rules::trim },
];

/// Normalize an untrusted narrative into structured markup.
///
/// Total over all inputs: empty input yields empty output.
pub fn normalize(narrative: &str) -> String {
    NARRATIVE_RULES
        .iter()
        .fold(narrative.to_string(), |text, rule| {
            let out = (rule.apply)(&text);
            if out != text {
                log::trace!("narrative rule '{}' rewrote {} -> {} bytes", rule.name, text.len(), out.len());
            }
            out
        })
}
