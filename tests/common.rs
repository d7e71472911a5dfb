//! Test utilities: scripted sessions against the built-in case.

use detective_quest::case::{CaseFile, Session, SessionOptions, SessionReport};
use std::io::Cursor;

/// Play the built-in mansion with `lines` as the player's input, one per line.
/// Returns the report and the full transcript.
pub fn play_mansion(lines: &[&str]) -> (SessionReport, String) {
    let (map, index) = CaseFile::mansion().into_parts().expect("built-in case");
    let session = Session::new(&map, &index, SessionOptions::default());
    let mut script = lines.join("\n");
    if !lines.is_empty() {
        script.push('\n');
    }
    let mut input = Cursor::new(script.into_bytes());
    let mut out = Vec::new();
    let report = session.run(&mut input, &mut out).expect("session run");
    (report, String::from_utf8(out).expect("utf-8 transcript"))
}
