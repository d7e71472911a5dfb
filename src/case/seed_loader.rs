//! Case data: the built-in mansion and loading alternatives from JSON.
//!
//! A case file lists the rooms (the first one is the entrance), the paths
//! between them and the clue -> suspect associations. Nothing here edits a
//! map at runtime; a case is read once before the session starts.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::case::room_map::{RoomMap, RoomMapBuilder, Side};
use crate::case::suspect_index::SuspectIndex;
use crate::case::CaseError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSeed {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clue: Option<String>,
    /// Name of the room reached with `e`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    /// Name of the room reached with `d`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuspectSeed {
    pub clue: String,
    pub suspect: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseFile {
    #[serde(default = "default_title")]
    pub title: String,
    pub rooms: Vec<RoomSeed>,
    #[serde(default)]
    pub suspects: Vec<SuspectSeed>,
}

fn default_title() -> String {
    "Detective Quest".to_string()
}

fn room(name: &str, clue: &str, left: Option<&str>, right: Option<&str>) -> RoomSeed {
    RoomSeed {
        name: name.to_string(),
        clue: Some(clue.to_string()),
        left: left.map(str::to_string),
        right: right.map(str::to_string),
    }
}

fn suspect(clue: &str, suspect: &str) -> SuspectSeed {
    SuspectSeed {
        clue: clue.to_string(),
        suspect: suspect.to_string(),
    }
}

impl CaseFile {
    /// The built-in case.
    pub fn mansion() -> Self {
        CaseFile {
            title: default_title(),
            rooms: vec![
                room("Hall de Entrada", "Pegada suja", Some("Sala de Estar"), Some("Biblioteca")),
                room("Sala de Estar", "Perfume feminino caro", Some("Cozinha"), Some("Jardim")),
                room("Biblioteca", "Livro rasgado", None, Some("Porão")),
                room("Cozinha", "Copo com fragmento de esmalte", None, None),
                room("Jardim", "Filtro de cigarro", None, None),
                room("Porão", "Luva encharcada", None, None),
            ],
            suspects: vec![
                suspect("Pegada suja", "Carlos"),
                suspect("Perfume feminino caro", "Dona Beatriz"),
                suspect("Livro rasgado", "Professor Otávio"),
                suspect("Copo com fragmento de esmalte", "Dona Beatriz"),
                suspect("Filtro de cigarro", "Carlos"),
                suspect("Luva encharcada", "Professor Otávio"),
            ],
        }
    }

    /// Wire the rooms into a [`RoomMap`] rooted at the first room.
    pub fn build_map(&self) -> Result<RoomMap, CaseError> {
        let mut builder = RoomMapBuilder::new();
        let mut ids = Vec::with_capacity(self.rooms.len());
        for seed in &self.rooms {
            ids.push(builder.add_room(&seed.name, seed.clue.as_deref())?);
        }
        for (seed, &parent) in self.rooms.iter().zip(&ids) {
            for (side, target) in [(Side::Left, &seed.left), (Side::Right, &seed.right)] {
                if let Some(target) = target {
                    let child = builder
                        .find(target)
                        .ok_or_else(|| CaseError::UnknownRoom(target.clone()))?;
                    builder.link(parent, side, child)?;
                }
            }
        }
        let root = *ids.first().ok_or(CaseError::EmptyMap)?;
        builder.build(root)
    }

    pub fn build_index(&self) -> SuspectIndex {
        SuspectIndex::from_pairs(self.suspects.iter().map(|s| (&s.clue, &s.suspect)))
    }

    /// Validate and split the case into the structures a session needs.
    pub fn into_parts(self) -> Result<(RoomMap, SuspectIndex), CaseError> {
        let map = self.build_map()?;
        let index = self.build_index();
        debug!(
            "Case '{}' ready: {} rooms, {} clue associations",
            self.title,
            map.len(),
            index.len()
        );
        Ok((map, index))
    }
}

/// Load a case from a JSON file.
pub fn load_case_from_json<P: AsRef<Path>>(path: P) -> Result<CaseFile, CaseError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let case: CaseFile = serde_json::from_str(&contents)?;
    info!(
        "Loaded case '{}' from {} ({} rooms)",
        case.title,
        path.display(),
        case.rooms.len()
    );
    Ok(case)
}

/// Load the case at `path`, or the built-in mansion when no path is given.
pub fn load_case_or_default(path: Option<&str>) -> Result<CaseFile, CaseError> {
    match path {
        Some(p) => load_case_from_json(p),
        None => Ok(CaseFile::mansion()),
    }
}
