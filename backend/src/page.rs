use std::path::Path;

use include_dir::{include_dir, Dir, File};
use shared::PollState;

static STATIC_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static");
const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

pub fn asset(path: &Path) -> Option<&'static File<'static>> {
    STATIC_DIR.get_file(path)
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

fn placeholder(name: &str, state: &PollState, notice: Option<&str>) -> Option<String> {
    let value = match name {
        "question" => escape_html(&state.question),
        "option1" => escape_html(&state.option1),
        "option2" => escape_html(&state.option2),
        "option1_votes" => state.tally.option1_votes.to_string(),
        "option2_votes" => state.tally.option2_votes.to_string(),
        "total_votes" => state.tally.total().to_string(),
        "notice" => notice
            .map(|n| format!("<p class=\"notice\">{}</p>", escape_html(n)))
            .unwrap_or_default(),
        _ => return None,
    };
    Some(value)
}

/// Fills the embedded index page in a single pass, so substituted text is
/// never scanned for placeholders. Every substituted string is escaped.
pub fn render(state: &PollState, notice: Option<&str>) -> String {
    let mut out = String::with_capacity(INDEX_TEMPLATE.len() + 256);
    let mut rest = INDEX_TEMPLATE;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        match after.find("}}") {
            Some(end) => {
                let name = &after[..end];
                match placeholder(name, state, notice) {
                    Some(value) => out.push_str(&value),
                    None => out.push_str(&rest[start..start + 2 + end + 2]),
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}
