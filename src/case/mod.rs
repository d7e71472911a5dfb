//! Detective case engine.
//!
//! Leaf-first:
//! - [`suspect_index`] maps clue text to a suspect name
//! - [`clue_set`] keeps the collected clues, unique and alphabetical
//! - [`room_map`] is the fixed binary tree of rooms
//! - [`explorer`] walks the map and fills the clue set
//! - [`verdict`] counts clues against an accused name
//!
//! [`seed_loader`] supplies the map and the associations at start-up and
//! [`session`] runs the whole text protocol over a reader/writer pair.

pub mod clue_set;
pub mod errors;
pub mod explorer;
pub mod room_map;
pub mod seed_loader;
pub mod session;
pub mod suspect_index;
pub mod verdict;

pub use clue_set::ClueSet;
pub use errors::CaseError;
pub use explorer::{Command, Explorer, ExplorerState, RoomVisit, Step};
pub use room_map::{Room, RoomId, RoomMap, RoomMapBuilder, Side};
pub use seed_loader::{load_case_from_json, load_case_or_default, CaseFile, RoomSeed, SuspectSeed};
pub use session::{read_accusation, AccusationResult, Session, SessionOptions, SessionReport};
pub use suspect_index::{SuspectIndex, SUSPECT_BUCKETS};
pub use verdict::{evaluate, Accusation, Outcome, Verdict, GUILTY_THRESHOLD};
