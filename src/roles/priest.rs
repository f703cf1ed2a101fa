use super::actions::UnitCommands;
use super::flee::*;
use super::*;

/// Support unit. Follows the most wounded ally, heals whoever is weakest in reach and keeps
/// well away from enemies. Ignores the team posture.
pub struct Priest;

impl Role for Priest {
    fn can_play(body: Capabilities) -> bool {
        body.contains(Capabilities::HEAL)
    }

    fn act(&self, ctx: &RoleContext) -> UnitCommands {
        let creep = ctx.unit;
        let mut commands = UnitCommands::new(creep.id);
        let friendlies = &ctx.snapshot.my_units;

        if let Some(follow) = most_wounded(friendlies, creep.id) {
            commands.move_to(follow.pos);
        } else {
            ctx.move_to_enemy_flag(&mut commands);
        }

        // Inclusive reach, and the priest itself is a candidate.
        let heal_target = friendlies
            .iter()
            .filter(|c| ctx.range_from_unit(c.pos) <= ctx.config.heal_range)
            .min_by_key(|c| c.hits);

        if let Some(heal_target) = heal_target {
            if ctx.range_from_unit(heal_target.pos) == 1 {
                commands.heal(heal_target.id);
            } else {
                commands.ranged_heal(heal_target.id);
            }
        }

        let range = ctx.config.priest_danger_radius;
        let enemies_in_range = threats_within(ctx, range);

        flee(ctx, &enemies_in_range, range, &mut commands);

        if ctx.config.priest_final_push {
            ctx.move_to_enemy_flag(&mut commands);
        }

        commands
    }
}

/// Damaged ally with the fewest hits, other than `except`. Ties go to snapshot order.
pub fn most_wounded(friendlies: &[Unit], except: UnitId) -> Option<&Unit> {
    friendlies
        .iter()
        .filter(|c| c.id != except && c.is_damaged())
        .min_by_key(|c| c.hits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::actions::{Movement, RangedAction};
    use crate::roles::testing::*;

    fn priest_at(x: i32, y: i32) -> Unit {
        unit(1, x, y, true, Capabilities::HEAL)
    }

    fn soldier(id: u32, x: i32, y: i32, hits: u32) -> Unit {
        wounded(unit(id, x, y, true, Capabilities::ATTACK), hits)
    }

    fn no_final_push() -> EngineConfig {
        EngineConfig {
            priest_final_push: false,
            ..Default::default()
        }
    }

    #[test]
    fn follows_strictly_most_wounded() {
        let friendlies = vec![priest_at(0, 0), soldier(2, 20, 20, 70), soldier(3, 30, 30, 40), soldier(4, 40, 40, 55)];

        assert_eq!(most_wounded(&friendlies, UnitId(1)).map(|u| u.id), Some(UnitId(3)));
    }

    #[test]
    fn wounded_ties_resolve_in_snapshot_order() {
        let friendlies = vec![priest_at(0, 0), soldier(2, 20, 20, 40), soldier(3, 30, 30, 40)];

        assert_eq!(most_wounded(&friendlies, UnitId(1)).map(|u| u.id), Some(UnitId(2)));
    }

    #[test]
    fn ignores_itself_when_following() {
        let friendlies = vec![wounded(priest_at(0, 0), 10), unit(2, 5, 5, true, Capabilities::ATTACK)];

        assert_eq!(most_wounded(&friendlies, UnitId(1)), None);
    }

    #[test]
    fn moves_toward_wounded_and_heals_adjacent() {
        let snapshot = Snapshot {
            my_units: vec![priest_at(10, 10), soldier(2, 11, 10, 30), soldier(3, 12, 12, 60)],
            enemy_flag: Some(flag(90, 90, false)),
            ..Default::default()
        };

        let commands = act_as(RoleKind::Priest, &snapshot, Position::new(10, 10), None, &no_final_push());

        assert_eq!(commands.movement, Some(Movement::To(Position::new(11, 10))));
        assert_eq!(commands.heal, Some(UnitId(2)));
        assert_eq!(commands.ranged, None);
    }

    #[test]
    fn ranged_heal_beyond_contact() {
        let snapshot = Snapshot {
            my_units: vec![priest_at(10, 10), soldier(2, 13, 10, 30)],
            ..Default::default()
        };

        let commands = act_as(RoleKind::Priest, &snapshot, Position::new(10, 10), None, &no_final_push());

        assert_eq!(commands.ranged, Some(RangedAction::Heal(UnitId(2))));
        assert_eq!(commands.heal, None);
    }

    #[test]
    fn heal_ties_go_to_first_in_snapshot() {
        let snapshot = Snapshot {
            my_units: vec![priest_at(10, 10), soldier(2, 12, 10, 40), soldier(3, 10, 12, 40)],
            ..Default::default()
        };

        let commands = act_as(RoleKind::Priest, &snapshot, Position::new(10, 10), None, &no_final_push());

        assert_eq!(commands.ranged, Some(RangedAction::Heal(UnitId(2))));
        assert_eq!(commands.heal, None);
    }

    #[test]
    fn nobody_wounded_pushes_flag() {
        let snapshot = Snapshot {
            my_units: vec![priest_at(10, 10), unit(2, 40, 40, true, Capabilities::ATTACK)],
            enemy_flag: Some(flag(90, 90, false)),
            ..Default::default()
        };

        let commands = act_as(RoleKind::Priest, &snapshot, Position::new(10, 10), Some(Posture::Defensive), &no_final_push());

        assert_eq!(commands.movement, Some(Movement::To(Position::new(90, 90))));
        // Only the priest itself is in reach, at range zero.
        assert_eq!(commands.ranged, Some(RangedAction::Heal(UnitId(1))));
    }

    #[test]
    fn flees_from_enemies_inside_wide_radius() {
        let snapshot = Snapshot {
            my_units: vec![priest_at(10, 10)],
            enemy_units: vec![unit(5, 16, 10, false, Capabilities::ATTACK)],
            enemy_flag: Some(flag(90, 10, false)),
            ..Default::default()
        };

        let commands = act_as(RoleKind::Priest, &snapshot, Position::new(10, 10), None, &no_final_push());

        match commands.movement {
            Some(Movement::Step(direction)) => {
                assert!(Position::new(10, 10).offset(direction).get_range_to(Position::new(16, 10)) >= 6);
            }
            other => panic!("expected a flee step, got {:?}", other),
        }
    }

    #[test]
    fn final_push_supersedes_flee() {
        let snapshot = Snapshot {
            my_units: vec![priest_at(10, 10)],
            enemy_units: vec![unit(5, 16, 10, false, Capabilities::ATTACK)],
            enemy_flag: Some(flag(90, 10, false)),
            ..Default::default()
        };

        let commands = act_as(RoleKind::Priest, &snapshot, Position::new(10, 10), None, &EngineConfig::default());

        assert_eq!(commands.movement, Some(Movement::To(Position::new(90, 10))));
    }

    #[test]
    fn final_push_without_enemy_flag_keeps_flee() {
        let snapshot = Snapshot {
            my_units: vec![priest_at(10, 10)],
            enemy_units: vec![unit(5, 16, 10, false, Capabilities::ATTACK)],
            ..Default::default()
        };

        let commands = act_as(RoleKind::Priest, &snapshot, Position::new(10, 10), None, &EngineConfig::default());

        assert!(matches!(commands.movement, Some(Movement::Step(_))));
    }
}
