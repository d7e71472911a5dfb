//! Exploration engine: walks the room map and collects clues.
//!
//! The engine is a two-state machine, `AtRoom(room)` and `Ended`. Entering a
//! room surfaces its clue into the [`ClueSet`]; each command then either moves
//! to a child room, is rejected (no path / unknown command) or ends the walk.
//! Rendering is left to the caller so the engine can be driven by tests
//! without any terminal.

use log::debug;

use crate::case::clue_set::ClueSet;
use crate::case::room_map::{RoomId, RoomMap, Side};

/// Navigation command entered by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Go(Side),
    Quit,
}

impl Command {
    pub const LEFT: Command = Command::Go(Side::Left);
    pub const RIGHT: Command = Command::Go(Side::Right);

    /// Parse one input line. Only the first token counts; the rest of the
    /// line is ignored. Returns `None` for anything unrecognized.
    pub fn parse(line: &str) -> Option<Command> {
        let token = line.split_whitespace().next()?.to_lowercase();
        match token.as_str() {
            "e" | "esquerda" | "left" => Some(Command::LEFT),
            "d" | "direita" | "right" => Some(Command::RIGHT),
            "s" | "sair" | "quit" => Some(Command::Quit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerState {
    AtRoom(RoomId),
    Ended,
}

/// What entering a room revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomVisit<'m> {
    pub room: RoomId,
    pub name: &'m str,
    pub clue: Option<&'m str>,
    /// False when the clue was already in the set from an earlier visit.
    pub newly_collected: bool,
}

/// Result of applying one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<'m> {
    Moved(RoomVisit<'m>),
    NoPath(Side),
    Invalid,
    Quit,
    /// The command stream closed; treated as an implicit quit.
    InputClosed,
    /// A command arrived after the walk had already ended.
    AlreadyEnded,
}

pub struct Explorer<'m, 'c> {
    map: &'m RoomMap,
    clues: &'c mut ClueSet,
    state: ExplorerState,
    moves: usize,
    visits: usize,
}

impl<'m, 'c> Explorer<'m, 'c> {
    pub fn new(map: &'m RoomMap, clues: &'c mut ClueSet) -> Self {
        Self {
            map,
            clues,
            state: ExplorerState::AtRoom(map.root()),
            moves: 0,
            visits: 0,
        }
    }

    pub fn state(&self) -> ExplorerState {
        self.state
    }

    pub fn is_ended(&self) -> bool {
        self.state == ExplorerState::Ended
    }

    pub fn current(&self) -> Option<RoomId> {
        match self.state {
            ExplorerState::AtRoom(id) => Some(id),
            ExplorerState::Ended => None,
        }
    }

    pub fn clues(&self) -> &ClueSet {
        &*self.clues
    }

    /// Successful moves between rooms.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Room entries, including the entrance and revisits.
    pub fn visits(&self) -> usize {
        self.visits
    }

    /// Enter the current room and collect its clue. Call once at the start
    /// of the walk; [`apply`](Self::apply) enters rooms it moves into.
    pub fn enter(&mut self) -> Option<RoomVisit<'m>> {
        let id = self.current()?;
        Some(self.visit(id))
    }

    fn visit(&mut self, id: RoomId) -> RoomVisit<'m> {
        let map = self.map;
        let room = map.room(id);
        let newly_collected = room.clue().map(|c| self.clues.insert(c)).unwrap_or(false);
        self.visits += 1;
        debug!(
            "Entered {} (clue: {:?}, new: {})",
            room.name(),
            room.clue(),
            newly_collected
        );
        RoomVisit {
            room: id,
            name: room.name(),
            clue: room.clue(),
            newly_collected,
        }
    }

    /// Apply a parsed command (`None` = unrecognized input).
    pub fn apply(&mut self, command: Option<Command>) -> Step<'m> {
        let Some(current) = self.current() else {
            return Step::AlreadyEnded;
        };
        match command {
            None => Step::Invalid,
            Some(Command::Quit) => {
                self.state = ExplorerState::Ended;
                debug!("Exploration ended by player after {} moves", self.moves);
                Step::Quit
            }
            Some(Command::Go(side)) => match self.map.child(current, side) {
                Some(next) => {
                    self.state = ExplorerState::AtRoom(next);
                    self.moves += 1;
                    Step::Moved(self.visit(next))
                }
                None => {
                    debug!(
                        "No {} path from {}",
                        side.label(),
                        self.map.room(current).name()
                    );
                    Step::NoPath(side)
                }
            },
        }
    }

    /// The command stream closed or could not be read.
    pub fn end_of_input(&mut self) -> Step<'m> {
        if self.is_ended() {
            return Step::AlreadyEnded;
        }
        self.state = ExplorerState::Ended;
        debug!("Command input closed; ending exploration");
        Step::InputClosed
    }
}
