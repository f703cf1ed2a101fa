use super::archer::Archer;
use super::priest::Priest;
use super::soldier::Soldier;
use super::*;

/// First matching role in priority order: melee, ranged, support.
pub fn classify(body: Capabilities) -> Option<RoleKind> {
    if Soldier::can_play(body) {
        Some(RoleKind::Soldier)
    } else if Archer::can_play(body) {
        Some(RoleKind::Archer)
    } else if Priest::can_play(body) {
        Some(RoleKind::Priest)
    } else {
        None
    }
}

pub struct RoleFactory;

impl RoleFactory {
    pub fn create_role(unit: &Unit) -> Result<RoleKind, TacticsError> {
        classify(unit.body).ok_or(TacticsError::UnrecognizedUnitConfiguration {
            unit: unit.id,
            body: unit.body,
        })
    }
}
