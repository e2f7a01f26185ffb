//! Narrative Rewrite Rules
//!
//! Each rule is a pure `&str -> String` transform. They are only correct
//! when applied in the order of `NARRATIVE_RULES` (see mod.rs).

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// ============================================================================
// OUTPUT VOCABULARY
// ============================================================================

pub const FEATURE_IMPORTANCE_HEADER: &str = "Feature Importance Analysis";
pub const FRAUD_DRIVERS_HEADER: &str = "What Drives Fraud Detection";

/// Block-level markup a line may already start with
const BLOCK_PREFIXES: [&str; 3] = ["<p>", "<ul>", "<li>"];

pub fn section_header(text: &str) -> String {
    format!("<p><strong>{}</strong></p>", text)
}

// ============================================================================
// PATTERNS
// ============================================================================

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("narrative rule pattern must compile")
}

// Salutation through the word "team". The span may wrap a line but never
// crosses a blank line, and "team" must close the salutation.
static GREETING: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"(?i)\A\s*(?:good[ \t]+(?:morning|afternoon|evening|day)|hello|hi|hey|greetings|dear)\b(?:[^\n]|\n[ \t]*[^\s]){0,120}?(?:\n[ \t]*)?\bteam[ \t]*(?:[,!.:;]|\n|\z)\s*",
    )
});

static PREAMBLE: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)\A\s*here(?:'|’)?s an explanation[^\n]*:[ \t]*(?:\n|\z)"));

static WALKTHROUGH_LINE: Lazy<Regex> =
    Lazy::new(|| compile(r"(?im)^[ \t]*I(?:'|’)m here to walk you through[^\n]*(?:\n|\z)"));

static UNDERSTANDING_LINE: Lazy<Regex> =
    Lazy::new(|| compile(r"(?im)^[ \t]*Understanding these features[^\n]*(?:\n|\z)"));

static RULE_LINE: Lazy<Regex> =
    Lazy::new(|| compile(r"(?m)^[ \t]*(?:-{3,}|\*{3,}|_{3,})[ \t]*(?:\n|\z)"));

const KNOWN_HEADERS: &str =
    r"(feature[ \t]+importance[ \t]+analysis|what[ \t]+drives[ \t]+fraud[ \t]+detection)";

// `## Feature Importance Analysis ...` -> whole line replaced
static KNOWN_HEADING: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"(?im)^[ \t]*#{{1,6}}[ \t]*(?:\*\*)?[ \t]*{}[^\n]*$",
        KNOWN_HEADERS
    ))
});

// `**What drives fraud detection?**: rest` -> header, rest kept on next line
static KNOWN_BOLD_HEADER: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"(?im)^[ \t]*\*\*[ \t]*{}(?:[^*\n]|\*[^*\n])*\*\*[:.?!]*[ \t]*([^\n]*)$",
        KNOWN_HEADERS
    ))
});

static OTHER_HEADING: Lazy<Regex> =
    Lazy::new(|| compile(r"(?m)^[ \t]*#{1,6}(?:[ \t]+([^\n]*?))?[ \t#]*$"));

static BOLD_SPAN: Lazy<Regex> = Lazy::new(|| compile(r"\*\*([^\n]+?)\*\*"));

static BULLET_LINE: Lazy<Regex> =
    Lazy::new(|| compile(r"(?m)^[ \t]*(?:[-•][ \t]*|\*[ \t]+)([^\n]*?)[ \t]*$"));

static LIST_RUN: Lazy<Regex> =
    Lazy::new(|| compile(r"<li>[^\n]*?</li>(?:\s*<li>[^\n]*?</li>)*"));

static LIST_ITEM: Lazy<Regex> = Lazy::new(|| compile(r"<li>[^\n]*?</li>"));

static BLANK_RUN: Lazy<Regex> = Lazy::new(|| compile(r"\n(?:[ \t]*\n)+"));

// ============================================================================
// RULES
// ============================================================================

/// Unify line endings, escape raw markup characters
pub fn prepare(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn strip_greeting(text: &str) -> String {
    GREETING.replace(text, "").into_owned()
}

pub fn strip_preamble(text: &str) -> String {
    PREAMBLE.replace(text, "").into_owned()
}

pub fn strip_walkthrough(text: &str) -> String {
    WALKTHROUGH_LINE.replace_all(text, "").into_owned()
}

pub fn strip_understanding(text: &str) -> String {
    UNDERSTANDING_LINE.replace_all(text, "").into_owned()
}

pub fn strip_rules(text: &str) -> String {
    RULE_LINE.replace_all(text, "").into_owned()
}

fn canonical_header(matched: &str) -> &'static str {
    if matched.to_lowercase().starts_with("feature") {
        FEATURE_IMPORTANCE_HEADER
    } else {
        FRAUD_DRIVERS_HEADER
    }
}

pub fn canonicalize_headers(text: &str) -> String {
    let text = KNOWN_HEADING.replace_all(text, |caps: &Captures| {
        section_header(canonical_header(&caps[1]))
    });

    let text = KNOWN_BOLD_HEADER.replace_all(&text, |caps: &Captures| {
        let header = section_header(canonical_header(&caps[1]));
        let rest = caps[2].trim();
        if rest.is_empty() {
            header
        } else {
            format!("{}\n{}", header, rest)
        }
    });

    // Any other heading keeps its own text
    OTHER_HEADING
        .replace_all(&text, |caps: &Captures| {
            let title = caps
                .get(1)
                .map(|m| m.as_str().replace("**", ""))
                .unwrap_or_default();
            let title = title.trim();
            if title.is_empty() {
                String::new()
            } else {
                section_header(title)
            }
        })
        .into_owned()
}

pub fn convert_bold(text: &str) -> String {
    BOLD_SPAN
        .replace_all(text, "<strong>$1</strong>")
        .replace("**", "")
}

pub fn convert_bullets(text: &str) -> String {
    BULLET_LINE
        .replace_all(text, |caps: &Captures| {
            let item = caps[1].trim();
            if item.is_empty() {
                String::new()
            } else {
                format!("<li>{}</li>", item)
            }
        })
        .into_owned()
}

pub fn merge_lists(text: &str) -> String {
    LIST_RUN
        .replace_all(text, |caps: &Captures| {
            let items: String = LIST_ITEM
                .find_iter(&caps[0])
                .map(|m| m.as_str())
                .collect();
            format!("<ul>{}</ul>", items)
        })
        .into_owned()
}

pub fn collapse_blank_lines(text: &str) -> String {
    BLANK_RUN.replace_all(text, "\n\n").into_owned()
}

pub fn wrap_paragraphs(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            let line = line.trim();
            if line.is_empty() || BLOCK_PREFIXES.iter().any(|p| line.starts_with(p)) {
                line.to_string()
            } else {
                format!("<p>{}</p>", line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn trim(text: &str) -> String {
    text.trim().to_string()
}
