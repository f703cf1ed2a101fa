use super::actions::UnitCommands;
use super::*;
use crate::findnearest::*;

/// Melee unit. Only engages enemies near where it started the match, and drifts back there when idle.
pub struct Soldier;

impl Role for Soldier {
    fn can_play(body: Capabilities) -> bool {
        body.contains(Capabilities::ATTACK)
    }

    fn act(&self, ctx: &RoleContext) -> UnitCommands {
        let creep = ctx.unit;
        let mut commands = UnitCommands::new(creep.id);

        if ctx.config.annotate_health {
            // Above the creep.
            commands.annotate(
                creep.pos.x as f32,
                creep.pos.y as f32 - 0.5,
                creep.hits.to_string(),
                &ctx.config.health_text_style,
            );
        }

        // The leash is measured from home, the pick from where the creep stands now.
        let target = ctx
            .snapshot
            .enemy_units
            .iter()
            .within_range(ctx.home, ctx.config.melee_leash_radius, |a, b| ctx.range(a, b))
            .find_nearest_by(creep.pos, |a, b| ctx.range(a, b));

        if let Some(target) = target {
            commands.move_to(target.pos);
            commands.attack(target.id);
        } else if ctx.posture == Some(Posture::Aggressive) {
            ctx.move_to_enemy_flag(&mut commands);
        } else {
            commands.move_to(ctx.home);
        }

        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::actions::Movement;
    use crate::roles::testing::*;

    fn soldier_at(x: i32, y: i32) -> Unit {
        unit(1, x, y, true, Capabilities::ATTACK)
    }

    #[test]
    fn leash_is_measured_from_home() {
        // Nine from home, twenty from where the soldier currently stands.
        let snapshot = Snapshot {
            my_units: vec![soldier_at(29, 0)],
            enemy_units: vec![unit(2, 9, 0, false, Capabilities::ATTACK)],
            ..Default::default()
        };

        let commands = act_as(RoleKind::Soldier, &snapshot, Position::new(0, 0), Some(Posture::Defensive), &EngineConfig::default());

        assert_eq!(commands.movement, Some(Movement::To(Position::new(9, 0))));
        assert_eq!(commands.attack, Some(UnitId(2)));
    }

    #[test]
    fn enemy_outside_leash_is_ignored() {
        let snapshot = Snapshot {
            my_units: vec![soldier_at(12, 0)],
            enemy_units: vec![unit(2, 13, 0, false, Capabilities::ATTACK)],
            ..Default::default()
        };

        let commands = act_as(RoleKind::Soldier, &snapshot, Position::new(0, 0), Some(Posture::Defensive), &EngineConfig::default());

        assert_eq!(commands.attack, None);
        assert_eq!(commands.movement, Some(Movement::To(Position::new(0, 0))));
    }

    #[test]
    fn picks_nearest_to_current_position() {
        let snapshot = Snapshot {
            my_units: vec![soldier_at(5, 5)],
            enemy_units: vec![
                unit(2, 0, 0, false, Capabilities::ATTACK),
                unit(3, 6, 6, false, Capabilities::RANGED_ATTACK),
                unit(4, 4, 4, false, Capabilities::HEAL),
            ],
            ..Default::default()
        };

        let commands = act_as(RoleKind::Soldier, &snapshot, Position::new(0, 0), None, &EngineConfig::default());

        // 3 and 4 are both one tile away; the first in snapshot order wins.
        assert_eq!(commands.attack, Some(UnitId(3)));
    }

    #[test]
    fn idle_aggressive_soldier_pushes_flag() {
        let snapshot = Snapshot {
            my_units: vec![soldier_at(3, 3)],
            enemy_flag: Some(flag(40, 40, false)),
            ..Default::default()
        };

        let commands = act_as(RoleKind::Soldier, &snapshot, Position::new(0, 0), Some(Posture::Aggressive), &EngineConfig::default());

        assert_eq!(commands.movement, Some(Movement::To(Position::new(40, 40))));
        assert_eq!(commands.attack, None);
    }

    #[test]
    fn idle_aggressive_soldier_without_enemy_flag_stays_put() {
        let snapshot = Snapshot {
            my_units: vec![soldier_at(3, 3)],
            ..Default::default()
        };

        let commands = act_as(RoleKind::Soldier, &snapshot, Position::new(0, 0), Some(Posture::Aggressive), &EngineConfig::default());

        assert_eq!(commands.movement, None);
    }

    #[test]
    fn idle_soldier_without_posture_returns_home() {
        let snapshot = Snapshot {
            my_units: vec![soldier_at(3, 3)],
            enemy_flag: Some(flag(40, 40, false)),
            ..Default::default()
        };

        let commands = act_as(RoleKind::Soldier, &snapshot, Position::new(1, 2), None, &EngineConfig::default());

        assert_eq!(commands.movement, Some(Movement::To(Position::new(1, 2))));
    }

    #[test]
    fn annotates_health_above_the_unit() {
        let snapshot = Snapshot {
            my_units: vec![wounded(soldier_at(3, 3), 42)],
            ..Default::default()
        };

        let commands = act_as(RoleKind::Soldier, &snapshot, Position::new(3, 3), None, &EngineConfig::default());
        let annotation = commands.annotation.expect("annotation");

        assert_eq!(annotation.text, "42");
        assert_eq!(annotation.y, 2.5);

        let quiet = EngineConfig {
            annotate_health: false,
            ..Default::default()
        };
        assert!(act_as(RoleKind::Soldier, &snapshot, Position::new(3, 3), None, &quiet).annotation.is_none());
    }
}
