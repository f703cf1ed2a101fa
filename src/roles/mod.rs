pub mod actions;
pub mod archer;
pub mod factory;
pub mod flee;
pub mod priest;
pub mod soldier;

use self::actions::UnitCommands;
use crate::config::EngineConfig;
use crate::error::TacticsError;
use crate::posture::Posture;
use crate::world::*;
use log::*;
use serde::{Deserialize, Serialize};

/// Everything a role may look at while deciding one unit's commands for a tick.
pub struct RoleContext<'a> {
    pub unit: &'a Unit,
    /// Where the unit was first seen this match.
    pub home: Position,
    /// `None` when posture control is disabled.
    pub posture: Option<Posture>,
    pub snapshot: &'a Snapshot,
    pub spatial: &'a dyn SpatialQuery,
    pub config: &'a EngineConfig,
}

impl<'a> RoleContext<'a> {
    pub fn range(&self, a: Position, b: Position) -> u32 {
        self.spatial.range(a, b)
    }

    pub fn range_from_unit(&self, other: Position) -> u32 {
        self.range(self.unit.pos, other)
    }

    pub fn enemy_flag(&self) -> Result<Position, TacticsError> {
        self.snapshot
            .enemy_flag
            .map(|flag| flag.pos)
            .ok_or(TacticsError::MissingFlagReference(Side::Enemy))
    }

    /// Moves toward the enemy flag, or leaves movement untouched when there is none.
    pub fn move_to_enemy_flag(&self, commands: &mut UnitCommands) {
        match self.enemy_flag() {
            Ok(pos) => commands.move_to(pos),
            Err(err) => debug!("Unit {}: {}, not pushing", self.unit.id, err),
        }
    }
}

pub trait Role {
    fn can_play(body: Capabilities) -> bool
    where
        Self: Sized;

    fn act(&self, ctx: &RoleContext) -> UnitCommands;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleKind {
    /// Melee, anchored to its home position.
    Soldier,
    /// Ranged, keeps its distance.
    Archer,
    /// Support.
    Priest,
}

impl RoleKind {
    pub fn as_role(&self) -> &'static dyn Role {
        match self {
            RoleKind::Soldier => &soldier::Soldier,
            RoleKind::Archer => &archer::Archer,
            RoleKind::Priest => &priest::Priest,
        }
    }
}
