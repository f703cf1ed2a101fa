use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }

    /// Chebyshev distance, the same metric the arena's `getRange` uses.
    pub fn get_range_to(self, other: Position) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    pub fn offset(self, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();

        Position::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

pub trait HasPosition {
    fn pos(&self) -> Position;
}

impl HasPosition for Position {
    fn pos(&self) -> Position {
        *self
    }
}

impl<T: HasPosition + ?Sized> HasPosition for &T {
    fn pos(&self) -> Position {
        (**self).pos()
    }
}

/// Movement directions, numbered clockwise from the top like the game constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Top = 1,
    TopRight = 2,
    Right = 3,
    BottomRight = 4,
    Bottom = 5,
    BottomLeft = 6,
    Left = 7,
    TopLeft = 8,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Top,
        Direction::TopRight,
        Direction::Right,
        Direction::BottomRight,
        Direction::Bottom,
        Direction::BottomLeft,
        Direction::Left,
        Direction::TopLeft,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Top => (0, -1),
            Direction::TopRight => (1, -1),
            Direction::Right => (1, 0),
            Direction::BottomRight => (1, 1),
            Direction::Bottom => (0, 1),
            Direction::BottomLeft => (-1, 1),
            Direction::Left => (-1, 0),
            Direction::TopLeft => (-1, -1),
        }
    }

    /// Direction of a single step, `None` for a zero or multi-tile delta.
    pub fn from_delta(dx: i32, dy: i32) -> Option<Direction> {
        Direction::ALL.iter().copied().find(|d| d.delta() == (dx, dy))
    }

    pub fn between(from: Position, to: Position) -> Option<Direction> {
        Direction::from_delta(to.x - from.x, to.y - from.y)
    }
}

bitflags! {
    /// Combat-relevant body parts a unit carries.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Capabilities: u8 {
        const ATTACK = 1;
        const RANGED_ATTACK = 1 << 1;
        const HEAL = 1 << 2;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId(pub u32);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Mine,
    Enemy,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Mine => write!(f, "own"),
            Side::Enemy => write!(f, "enemy"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub pos: Position,
    pub my: bool,
    pub hits: u32,
    pub hits_max: u32,
    pub body: Capabilities,
}

impl Unit {
    pub fn is_damaged(&self) -> bool {
        self.hits < self.hits_max
    }
}

impl HasPosition for Unit {
    fn pos(&self) -> Position {
        self.pos
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flag {
    pub pos: Position,
    pub my: bool,
}

impl HasPosition for Flag {
    fn pos(&self) -> Position {
        self.pos
    }
}

/// Everything the engine reads from the world for one tick.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub my_units: Vec<Unit>,
    #[serde(default)]
    pub enemy_units: Vec<Unit>,
    #[serde(default)]
    pub my_flag: Option<Flag>,
    #[serde(default)]
    pub enemy_flag: Option<Flag>,
}

impl Snapshot {
    /// Splits a flat object listing by ownership. Only the first flag of each side is kept.
    pub fn from_objects<'a>(units: impl IntoIterator<Item = &'a Unit>, flags: impl IntoIterator<Item = &'a Flag>) -> Snapshot {
        let (my_units, enemy_units): (Vec<Unit>, Vec<Unit>) = units.into_iter().cloned().partition(|u| u.my);

        let mut snapshot = Snapshot {
            my_units,
            enemy_units,
            my_flag: None,
            enemy_flag: None,
        };

        for flag in flags {
            let slot = if flag.my { &mut snapshot.my_flag } else { &mut snapshot.enemy_flag };

            if slot.is_none() {
                *slot = Some(*flag);
            }
        }

        snapshot
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleeTarget {
    pub pos: Position,
    pub range: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font: f32,
    pub opacity: f32,
    pub background_color: String,
    pub background_padding: f32,
}

impl Default for TextStyle {
    fn default() -> TextStyle {
        TextStyle {
            font: 0.5,
            opacity: 0.7,
            background_color: "#808080".to_string(),
            background_padding: 0.03,
        }
    }
}

/// Read-only spatial queries. Must stay deterministic for the length of a tick.
pub trait SpatialQuery {
    fn range(&self, a: Position, b: Position) -> u32 {
        a.get_range_to(b)
    }

    /// First step of a path leading out of every target's range, `None` when no step improves on standing still.
    fn plan_flee(&self, from: Position, targets: &[FleeTarget]) -> Option<Direction>;
}

/// The game-world provider. Actions are fire-and-forget; outcomes are never reported back.
pub trait World: SpatialQuery {
    fn snapshot(&self) -> Snapshot;

    fn move_to(&mut self, unit: UnitId, target: Position);

    fn move_direction(&mut self, unit: UnitId, direction: Direction);

    fn attack(&mut self, unit: UnitId, target: UnitId);

    fn ranged_attack(&mut self, unit: UnitId, target: UnitId);

    fn heal(&mut self, unit: UnitId, target: UnitId);

    fn ranged_heal(&mut self, unit: UnitId, target: UnitId);

    fn annotate(&mut self, _x: f32, _y: f32, _text: &str, _style: &TextStyle) {}
}
