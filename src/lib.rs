//! # Detective Quest - a text exploration mystery
//!
//! The player walks a fixed binary map of rooms, picks up the clue hidden in
//! each room, and finally accuses a suspect. The accusation holds only when at
//! least two distinct collected clues point at that suspect.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use detective_quest::case::{CaseFile, Session, SessionOptions};
//!
//! fn main() -> anyhow::Result<()> {
//!     let (map, index) = CaseFile::mansion().into_parts()?;
//!     let session = Session::new(&map, &index, SessionOptions::default());
//!     let stdin = std::io::stdin();
//!     let report = session.run(&mut stdin.lock(), &mut std::io::stdout())?;
//!     println!("{} clue(s) collected", report.clues.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`case`] - room map, clue set, suspect index, explorer, verdict and session
//! - [`config`] - TOML configuration for the binary
//! - [`logutil`] - single-line escaping for logged player input
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │    Session      │ ← text protocol over BufRead/Write
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │ Explorer/Verdict│ ← walk the map, judge the accusation
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │ RoomMap, ClueSet│ ← data built at start-up
//! │ SuspectIndex    │
//! └─────────────────┘
//! ```

pub mod case;
pub mod config;
pub mod logutil;
