//! Fixed binary map of rooms.
//!
//! Rooms live in an arena and are addressed by [`RoomId`]. Each room has at
//! most one left and one right child and at most one parent, so the links
//! always form a tree rooted at the entrance. The map is assembled once with
//! [`RoomMapBuilder`] and is read-only afterwards.

use log::debug;
use std::collections::HashMap;
use std::fmt::Write as _;

use crate::case::CaseError;

/// Stable index of a room inside its [`RoomMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(usize);

impl RoomId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Which way a path leaves a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn label(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Room {
    name: String,
    clue: Option<String>,
    left: Option<RoomId>,
    right: Option<RoomId>,
}

impl Room {
    fn new(name: &str, clue: Option<&str>) -> Self {
        Room {
            name: name.to_string(),
            clue: clue.filter(|c| !c.is_empty()).map(str::to_string),
            left: None,
            right: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The clue hidden in this room, if any.
    pub fn clue(&self) -> Option<&str> {
        self.clue.as_deref()
    }

    pub fn child(&self, side: Side) -> Option<RoomId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Collects rooms and links before freezing them into a [`RoomMap`].
#[derive(Debug, Default)]
pub struct RoomMapBuilder {
    rooms: Vec<Room>,
    parents: Vec<Option<RoomId>>,
    by_name: HashMap<String, RoomId>,
}

impl RoomMapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room. `None` or an empty string means the room holds no clue.
    pub fn add_room(&mut self, name: &str, clue: Option<&str>) -> Result<RoomId, CaseError> {
        if self.by_name.contains_key(name) {
            return Err(CaseError::DuplicateRoom(name.to_string()));
        }
        let id = RoomId(self.rooms.len());
        self.rooms.push(Room::new(name, clue));
        self.parents.push(None);
        self.by_name.insert(name.to_string(), id);
        Ok(id)
    }

    pub fn find(&self, name: &str) -> Option<RoomId> {
        self.by_name.get(name).copied()
    }

    pub fn link_left(&mut self, parent: RoomId, child: RoomId) -> Result<(), CaseError> {
        self.link(parent, Side::Left, child)
    }

    pub fn link_right(&mut self, parent: RoomId, child: RoomId) -> Result<(), CaseError> {
        self.link(parent, Side::Right, child)
    }

    pub fn link(&mut self, parent: RoomId, side: Side, child: RoomId) -> Result<(), CaseError> {
        self.check(parent)?;
        self.check(child)?;
        if self.rooms[parent.0].child(side).is_some() {
            return Err(CaseError::SideTaken {
                parent: self.rooms[parent.0].name.clone(),
                side: side.label(),
            });
        }
        if self.parents[child.0].is_some() {
            return Err(CaseError::AlreadyLinked(self.rooms[child.0].name.clone()));
        }
        // Walking up from the parent must never reach the child.
        let mut cur = Some(parent);
        while let Some(id) = cur {
            if id == child {
                return Err(CaseError::Cycle {
                    parent: self.rooms[parent.0].name.clone(),
                    child: self.rooms[child.0].name.clone(),
                });
            }
            cur = self.parents[id.0];
        }
        let room = &mut self.rooms[parent.0];
        match side {
            Side::Left => room.left = Some(child),
            Side::Right => room.right = Some(child),
        }
        self.parents[child.0] = Some(parent);
        debug!(
            "Linked {} -{}-> {}",
            self.rooms[parent.0].name,
            side.label(),
            self.rooms[child.0].name
        );
        Ok(())
    }

    fn check(&self, id: RoomId) -> Result<(), CaseError> {
        if id.0 < self.rooms.len() {
            Ok(())
        } else {
            Err(CaseError::UnknownRoom(format!("#{}", id.0)))
        }
    }

    /// Freeze the map with `root` as the entrance. Every room must hang from it.
    pub fn build(self, root: RoomId) -> Result<RoomMap, CaseError> {
        if self.rooms.is_empty() {
            return Err(CaseError::EmptyMap);
        }
        self.check(root)?;
        if let Some(parent) = self.parents[root.0] {
            return Err(CaseError::Cycle {
                parent: self.rooms[parent.0].name.clone(),
                child: self.rooms[root.0].name.clone(),
            });
        }
        for (i, parent) in self.parents.iter().enumerate() {
            if i != root.0 && parent.is_none() {
                return Err(CaseError::Unreachable(self.rooms[i].name.clone()));
            }
        }
        Ok(RoomMap {
            rooms: self.rooms,
            root,
            by_name: self.by_name,
        })
    }
}

/// Immutable room tree.
#[derive(Debug, Clone)]
pub struct RoomMap {
    rooms: Vec<Room>,
    root: RoomId,
    by_name: HashMap<String, RoomId>,
}

impl RoomMap {
    /// The built-in mansion: the entrance hall branches to the living room
    /// (kitchen, garden) and the library (cellar).
    pub fn mansion() -> Self {
        crate::case::seed_loader::CaseFile::mansion()
            .build_map()
            .expect("built-in mansion is well formed")
    }

    pub fn root(&self) -> RoomId {
        self.root
    }

    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    pub fn child(&self, id: RoomId, side: Side) -> Option<RoomId> {
        self.rooms[id.0].child(side)
    }

    pub fn left(&self, id: RoomId) -> Option<RoomId> {
        self.child(id, Side::Left)
    }

    pub fn right(&self, id: RoomId) -> Option<RoomId> {
        self.child(id, Side::Right)
    }

    pub fn find(&self, name: &str) -> Option<RoomId> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Rooms in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms.iter().enumerate().map(|(i, r)| (RoomId(i), r))
    }

    /// Indented pre-order outline of the tree, one room per line.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![(self.root, 0usize, None::<Side>)];
        while let Some((id, depth, side)) = stack.pop() {
            let room = self.room(id);
            let marker = match side {
                None => "",
                Some(Side::Left) => "(e) ",
                Some(Side::Right) => "(d) ",
            };
            let _ = write!(out, "{}{}{}", "  ".repeat(depth), marker, room.name);
            if let Some(clue) = room.clue() {
                let _ = write!(out, " [{}]", clue);
            }
            out.push('\n');
            // Right first so left is printed first.
            if let Some(r) = room.right {
                stack.push((r, depth + 1, Some(Side::Right)));
            }
            if let Some(l) = room.left {
                stack.push((l, depth + 1, Some(Side::Left)));
            }
        }
        out
    }
}
