//! Log previews of what the player typed.
//!
//! Commands and accusations arrive as raw lines. Log records only need the
//! part that matters, on one line and without the line terminator.

/// Longest accusation preview kept in a log record, in characters.
pub const NAME_PREVIEW: usize = 40;

fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        out.extend(ch.escape_debug());
    }
}

/// Accusation text as it will be matched: terminator stripped, control
/// characters escaped, long names cut with an ellipsis.
pub fn player_input(raw: &str) -> String {
    let text = raw.trim_end_matches(&['\n', '\r'][..]);
    let mut out = String::new();
    match text.char_indices().nth(NAME_PREVIEW) {
        Some((cut, _)) => {
            push_escaped(&mut out, &text[..cut]);
            out.push('…');
        }
        None => push_escaped(&mut out, text),
    }
    out
}

/// The command token of an exploration line, with a note when the rest of
/// the line was dropped.
pub fn command_preview(raw: &str) -> String {
    let mut words = raw.split_whitespace();
    let Some(token) = words.next() else {
        return "<blank>".to_string();
    };
    let mut out = String::new();
    push_escaped(&mut out, token);
    let dropped = words.count();
    if dropped > 0 {
        out.push_str(&format!(" (+{} ignored)", dropped));
    }
    out
}
