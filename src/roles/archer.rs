use super::actions::UnitCommands;
use super::flee::*;
use super::*;
use crate::findnearest::*;

/// Ranged unit. Shoots the closest enemy, follows the posture, and backs off from anything too close.
pub struct Archer;

impl Role for Archer {
    fn can_play(body: Capabilities) -> bool {
        body.contains(Capabilities::RANGED_ATTACK)
    }

    fn act(&self, ctx: &RoleContext) -> UnitCommands {
        let creep = ctx.unit;
        let mut commands = UnitCommands::new(creep.id);

        let target = ctx
            .snapshot
            .enemy_units
            .iter()
            .find_nearest_by(creep.pos, |a, b| ctx.range(a, b));

        if let Some(target) = target {
            commands.ranged_attack(target.id);
        }

        if ctx.posture == Some(Posture::Defensive) {
            commands.move_to(ctx.home);
        } else {
            ctx.move_to_enemy_flag(&mut commands);
        }

        let range = ctx.config.archer_danger_radius;
        let enemies_in_range = threats_within(ctx, range);

        flee(ctx, &enemies_in_range, range, &mut commands);

        commands
    }
}
