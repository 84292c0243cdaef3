//! Treeviz: one line per node
//!
//! Nesting is drawn with box connectors, two columns per level:
//!
//!   ⧉ document: Report
//!   └─ ¶ paragraph
//!     ├─ ↵ sentence: The dog barks.
//!     └─ ☰ list (2 items)
//!
//! Icons
//!     Document nodes:
//!         Document: ⧉
//!         Section: §
//!         Paragraph: ¶
//!         Sentence: ↵
//!         List: ☰
//!         EnumeratedList: №
//!         ListItem: •
//!     Syntactic nodes:
//!         List: ▤
//!         Coordinated: ⊕
//!         Word: ◦
//!         StringLiteral: "
//!
//! Elided nodes are marked with a trailing `∅`.

use crate::element::{snapshot_from_element, Element, ElementSnapshot};

const MAX_LABEL: usize = 40;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push('…');
        truncated
    } else {
        s.to_string()
    }
}

fn icon(snapshot: &ElementSnapshot) -> &'static str {
    let category = snapshot
        .attributes
        .get("category")
        .map(String::as_str)
        .unwrap_or_default();
    match (snapshot.node_type.as_str(), category) {
        (_, "document") => "⧉",
        (_, "section") => "§",
        (_, "paragraph") => "¶",
        (_, "sentence") => "↵",
        (_, "list") => "☰",
        (_, "enumerated_list") => "№",
        (_, "list_item") => "•",
        ("List", _) => "▤",
        ("Coordinated", _) => "⊕",
        ("Word", _) => "◦",
        ("StringLiteral", _) => "\"",
        _ => "○",
    }
}

fn line(snapshot: &ElementSnapshot) -> String {
    let elided = snapshot
        .attributes
        .get("elided")
        .is_some_and(|v| v == "true");
    format!(
        "{} {}{}",
        icon(snapshot),
        truncate(&snapshot.label, MAX_LABEL),
        if elided { " ∅" } else { "" }
    )
}

fn format_children(snapshot: &ElementSnapshot, prefix: &str, output: &mut String) {
    let count = snapshot.children.len();
    for (index, child) in snapshot.children.iter().enumerate() {
        let is_last = index + 1 == count;
        let connector = if is_last { "└─" } else { "├─" };
        output.push_str(&format!("{}{} {}\n", prefix, connector, line(child)));

        let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
        format_children(child, &child_prefix, output);
    }
}

/// Renders an element tree
pub fn to_treeviz_str(element: &Element) -> String {
    let snapshot = snapshot_from_element(element);
    let mut output = format!("{}\n", line(&snapshot));
    format_children(&snapshot, "", &mut output);
    output
}
