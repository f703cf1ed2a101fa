//! In-memory world: holds units and flags in plain vectors and records every command issued.
//!
//! Nothing is simulated beyond what the caller does between ticks; movement and combat outcomes are
//! up to the test or host driving it.

use crate::world::*;
use pathfinding::prelude::bfs;
use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    MoveTo { unit: UnitId, target: Position },
    Move { unit: UnitId, direction: Direction },
    Attack { unit: UnitId, target: UnitId },
    RangedAttack { unit: UnitId, target: UnitId },
    Heal { unit: UnitId, target: UnitId },
    RangedHeal { unit: UnitId, target: UnitId },
}

impl Command {
    pub fn unit(&self) -> UnitId {
        match self {
            Command::MoveTo { unit, .. }
            | Command::Move { unit, .. }
            | Command::Attack { unit, .. }
            | Command::RangedAttack { unit, .. }
            | Command::Heal { unit, .. }
            | Command::RangedHeal { unit, .. } => *unit,
        }
    }

    pub fn is_movement(&self) -> bool {
        matches!(self, Command::MoveTo { .. } | Command::Move { .. })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnnotationRecord {
    pub x: f32,
    pub y: f32,
    pub text: String,
}

#[derive(Clone, Debug, Default)]
pub struct SimWorld {
    pub width: i32,
    pub height: i32,
    pub units: Vec<Unit>,
    pub flags: Vec<Flag>,
    walls: HashSet<Position>,
    commands: Vec<Command>,
    annotations: Vec<AnnotationRecord>,
}

impl SimWorld {
    pub fn new(width: i32, height: i32) -> SimWorld {
        SimWorld {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_unit(mut self, unit: Unit) -> SimWorld {
        self.units.push(unit);
        self
    }

    pub fn with_flag(mut self, flag: Flag) -> SimWorld {
        self.flags.push(flag);
        self
    }

    pub fn add_wall(&mut self, pos: Position) {
        self.walls.insert(pos);
    }

    pub fn is_walkable(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height && !self.walls.contains(&pos)
    }

    pub fn unit_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.units.iter_mut().find(|u| u.id == id)
    }

    pub fn remove_unit(&mut self, id: UnitId) {
        self.units.retain(|u| u.id != id);
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn commands_for(&self, unit: UnitId) -> Vec<&Command> {
        self.commands.iter().filter(|c| c.unit() == unit).collect()
    }

    /// The movement the arena would act on: the last one issued.
    pub fn last_movement(&self, unit: UnitId) -> Option<&Command> {
        self.commands.iter().rev().find(|c| c.unit() == unit && c.is_movement())
    }

    pub fn annotations(&self) -> &[AnnotationRecord] {
        &self.annotations
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
        self.annotations.clear();
    }

    fn is_safe(pos: Position, targets: &[FleeTarget]) -> bool {
        targets.iter().all(|t| pos.get_range_to(t.pos) >= t.range)
    }
}

impl SpatialQuery for SimWorld {
    /// Breadth-first search to the closest walkable tile outside every target's range.
    fn plan_flee(&self, from: Position, targets: &[FleeTarget]) -> Option<Direction> {
        if SimWorld::is_safe(from, targets) {
            return None;
        }

        let path = bfs(
            &from,
            |pos| {
                let pos = *pos;
                Direction::ALL
                    .iter()
                    .map(move |d| pos.offset(*d))
                    .filter(|next| self.is_walkable(*next))
                    .collect::<Vec<_>>()
            },
            |pos| SimWorld::is_safe(*pos, targets),
        )?;

        path.get(1).and_then(|next| Direction::between(from, *next))
    }
}

impl World for SimWorld {
    fn snapshot(&self) -> Snapshot {
        Snapshot::from_objects(&self.units, &self.flags)
    }

    fn move_to(&mut self, unit: UnitId, target: Position) {
        self.commands.push(Command::MoveTo { unit, target });
    }

    fn move_direction(&mut self, unit: UnitId, direction: Direction) {
        self.commands.push(Command::Move { unit, direction });
    }

    fn attack(&mut self, unit: UnitId, target: UnitId) {
        self.commands.push(Command::Attack { unit, target });
    }

    fn ranged_attack(&mut self, unit: UnitId, target: UnitId) {
        self.commands.push(Command::RangedAttack { unit, target });
    }

    fn heal(&mut self, unit: UnitId, target: UnitId) {
        self.commands.push(Command::Heal { unit, target });
    }

    fn ranged_heal(&mut self, unit: UnitId, target: UnitId) {
        self.commands.push(Command::RangedHeal { unit, target });
    }

    fn annotate(&mut self, x: f32, y: f32, text: &str, _style: &TextStyle) {
        self.annotations.push(AnnotationRecord { x, y, text: text.to_string() });
    }
}
