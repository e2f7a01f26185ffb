use super::rules;
use super::{normalize, NARRATIVE_RULES};

const GEMINI_SAMPLE: &str = "Good morning, Risk Operations team,\n\n\
Here's an explanation of how our fraud model works:\n\n\
I'm here to walk you through the key drivers.\n\n\
---\n\n\
## Feature Importance Analysis\n\n\
* **Transaction Amount** (24.5%): Large transfers dominate.\n\
* **Account Age**: New accounts are riskier.\n\n\
**What drives fraud detection?**\n\n\
The model weighs **amount** and **timing**.\n\n\n\n\
Understanding these features helps analysts prioritize.\n";

fn assert_clean(markup: &str) {
    assert!(!markup.contains("**"), "bold delimiter left in: {}", markup);
    for line in markup.lines() {
        let line = line.trim_start();
        assert!(!line.starts_with('#'), "heading marker left in: {}", line);
        assert!(!line.starts_with('-'), "dash left in: {}", line);
        assert!(!line.starts_with('•'), "bullet left in: {}", line);
        assert!(!line.starts_with("* "), "bullet left in: {}", line);
    }
}

#[test]
fn test_greeting_removed() {
    assert_eq!(normalize("Hello team,\n\nBody text."), "<p>Body text.</p>");
}

#[test]
fn test_header_then_list() {
    let out = normalize("**Feature Importance Analysis**\n- point one\n- point two");
    assert_eq!(
        out,
        "<p><strong>Feature Importance Analysis</strong></p>\n\
         <ul><li>point one</li><li>point two</li></ul>"
    );
    assert_eq!(out.matches("<ul>").count(), 1);
    assert_eq!(out.matches("<li>").count(), 2);
}

#[test]
fn test_empty_input() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("   \n\n  "), "");
}

#[test]
fn test_full_sample() {
    let expected = "<p><strong>Feature Importance Analysis</strong></p>\n\n\
<ul><li><strong>Transaction Amount</strong> (24.5%): Large transfers dominate.</li>\
<li><strong>Account Age</strong>: New accounts are riskier.</li></ul>\n\n\
<p><strong>What Drives Fraud Detection</strong></p>\n\n\
<p>The model weighs <strong>amount</strong> and <strong>timing</strong>.</p>";

    let out = normalize(GEMINI_SAMPLE);
    assert_eq!(out, expected);
    assert_clean(&out);
}

#[test]
fn test_normalize_is_deterministic() {
    assert_eq!(normalize(GEMINI_SAMPLE), normalize(GEMINI_SAMPLE));
}

#[test]
fn test_greeting_spanning_lines() {
    let out = normalize("Good morning,\nFraud Analytics Team!\nHere's an explanation of the model:\nThe model works.");
    assert_eq!(out, "<p>The model works.</p>");
}

#[test]
fn test_greeting_without_team_kept() {
    assert_eq!(normalize("Hi there, everyone"), "<p>Hi there, everyone</p>");
}

#[test]
fn test_preamble_only_at_start() {
    let text = "Intro.\nHere's an explanation of the model:\nMore.";
    assert_eq!(rules::strip_preamble(text), text);
}

#[test]
fn test_boilerplate_lines_removed() {
    let out = normalize(
        "Intro.\nI'm here to walk you through the model.\nUnderstanding these features helps.\nEnd.",
    );
    assert_eq!(out, "<p>Intro.</p>\n<p>End.</p>");
}

#[test]
fn test_horizontal_rule_removed() {
    assert_eq!(normalize("A\n---\nB\n-----"), "<p>A</p>\n<p>B</p>");
}

#[test]
fn test_heading_marker_canonicalized() {
    assert_eq!(
        normalize("## what drives fraud detection?\nText"),
        "<p><strong>What Drives Fraud Detection</strong></p>\n<p>Text</p>"
    );
}

#[test]
fn test_bold_header_with_trailing_text() {
    assert_eq!(
        normalize("**What Drives Fraud Detection:** The amount matters."),
        "<p><strong>What Drives Fraud Detection</strong></p>\n<p>The amount matters.</p>"
    );
}

#[test]
fn test_header_rule_must_precede_bold_rule() {
    let text = "**Feature importance analysis of the model:**";

    let in_order = rules::convert_bold(&rules::canonicalize_headers(text));
    assert_eq!(in_order, "<p><strong>Feature Importance Analysis</strong></p>");

    // Reversed order loses the canonical header
    let reversed = rules::canonicalize_headers(&rules::convert_bold(text));
    assert_eq!(reversed, "<strong>Feature importance analysis of the model:</strong>");
}

#[test]
fn test_other_heading_keeps_text() {
    assert_eq!(
        normalize("### **Key Drivers** ###\nText\n##"),
        "<p><strong>Key Drivers</strong></p>\n<p>Text</p>"
    );
}

#[test]
fn test_inline_bold_and_stray_delimiters() {
    assert_eq!(normalize("The **amount** is key."), "<p>The <strong>amount</strong> is key.</p>");
    assert_eq!(normalize("Total **risk"), "<p>Total risk</p>");
}

#[test]
fn test_bullet_runs_merged_across_blank_lines() {
    assert_eq!(
        normalize("• one\n\n• two\nText\n- three\n-\n"),
        "<ul><li>one</li><li>two</li></ul>\n<p>Text</p>\n<ul><li>three</li></ul>"
    );
}

#[test]
fn test_blank_lines_collapsed() {
    assert_eq!(normalize("A\n\n\n\nB"), "<p>A</p>\n\n<p>B</p>");
    assert_eq!(normalize("A\r\n \r\n\r\nB"), "<p>A</p>\n\n<p>B</p>");
}

#[test]
fn test_raw_markup_escaped() {
    assert_eq!(
        normalize("<script>alert(1)</script> & co"),
        "<p>&lt;script&gt;alert(1)&lt;/script&gt; &amp; co</p>"
    );
}

#[test]
fn test_rules_order_fixed() {
    let names: Vec<&str> = NARRATIVE_RULES.iter().map(|r| r.name).collect();
    assert_eq!(
        names,
        vec![
            "prepare",
            "strip_greeting",
            "strip_preamble",
            "strip_walkthrough",
            "strip_understanding",
            "strip_rules",
            "canonicalize_headers",
            "convert_bold",
            "convert_bullets",
            "merge_lists",
            "collapse_blank_lines",
            "wrap_paragraphs",
            "trim",
        ]
    );
}

#[test]
fn test_every_rule_total_on_edge_inputs() {
    let inputs = ["", "\n", "**", "-", "•", "#", "team", "<li>", "***\n___", "Hello"];
    for input in inputs {
        for rule in NARRATIVE_RULES.iter() {
            let _ = (rule.apply)(input);
        }
        assert_clean(&normalize(input));
    }
}

#[test]
fn test_greeting_never_crosses_blank_line() {
    assert_eq!(
        normalize("Hi,\n\nThe team model relies on amount."),
        "<p>Hi,</p>\n\n<p>The team model relies on amount.</p>"
    );
    assert_eq!(normalize("Hello,\nteam!\nBody."), "<p>Body.</p>");
}

#[test]
fn test_greeting_team_must_end_salutation() {
    assert_eq!(normalize("Hello Team Lead, here is stuff."), "<p>Hello Team Lead, here is stuff.</p>");
    assert_eq!(normalize("Hey team\nBody."), "<p>Body.</p>");
}

#[test]
fn test_bold_header_with_inner_emphasis() {
    assert_eq!(
        normalize("**Feature Importance Analysis (*model*)**\n- amount"),
        "<p><strong>Feature Importance Analysis</strong></p>\n<ul><li>amount</li></ul>"
    );
}
