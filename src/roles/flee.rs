use super::actions::UnitCommands;
use super::*;
use crate::findnearest::*;

/// Enemies strictly closer than `radius` to the acting unit, in snapshot order.
pub fn threats_within<'a>(ctx: &RoleContext<'a>, radius: u32) -> Vec<&'a Unit> {
    ctx.snapshot
        .enemy_units
        .iter()
        .within_range(ctx.unit.pos, radius, |a, b| ctx.range(a, b))
        .collect()
}

/// Steps away from `threats`, each treated as dangerous inside `radius`.
///
/// Issues at most one directional move. When the world has no step to offer the unit's
/// movement is left as it was. Returns whether a step was issued.
pub fn flee(ctx: &RoleContext, threats: &[&Unit], radius: u32, commands: &mut UnitCommands) -> bool {
    if threats.is_empty() {
        return false;
    }

    let flee_targets: Vec<FleeTarget> = threats.iter().map(|c| FleeTarget { pos: c.pos, range: radius }).collect();

    match ctx.spatial.plan_flee(ctx.unit.pos, &flee_targets) {
        Some(direction) => {
            commands.move_direction(direction);

            true
        }
        None => {
            debug!("Unit {} has nowhere to flee from {} threats", ctx.unit.id, threats.len());

            false
        }
    }
}
