use crate::config::EngineConfig;
use crate::error::TacticsError;
use crate::findnearest::*;
use crate::world::*;
use log::*;
use serde::{Deserialize, Serialize};

/// Team-wide strategic mode, shared by every role for a whole tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Posture {
    /// Push toward the enemy flag.
    Aggressive,
    /// Hold or return to home positions.
    #[default]
    Defensive,
}

/// Decides the posture from the live enemy count and the threat around our flag.
///
/// Defensive while more than `retreat_ratio` of the initial enemy force is alive, or while any
/// enemy is strictly inside `flag_threat_radius` of our flag. Without a flag of our own only the
/// count rule applies.
pub fn evaluate_posture<S>(enemies: &[Unit], enemy_max_count: usize, my_flag: Option<&Flag>, spatial: &S, config: &EngineConfig) -> Posture
where
    S: SpatialQuery + ?Sized,
{
    let enemy_count = enemies.len();

    if enemy_count as f64 > enemy_max_count as f64 * config.retreat_ratio {
        debug!("Holding: enemy max count = {}, alive = {}", enemy_max_count, enemy_count);

        return Posture::Defensive;
    }

    let my_flag = match my_flag {
        Some(flag) => flag,
        None => {
            debug!("{}, skipping flag threat check", TacticsError::MissingFlagReference(Side::Mine));

            return Posture::Aggressive;
        }
    };

    let near_flag = enemies
        .iter()
        .within_range(my_flag.pos, config.flag_threat_radius, |a, b| spatial.range(a, b))
        .count();

    debug!("Enemies near own flag = {}", near_flag);

    if near_flag > 0 {
        Posture::Defensive
    } else {
        Posture::Aggressive
    }
}

/// Per-match posture state. The enemy force size is latched on the first update.
#[derive(Clone, Debug, Default)]
pub struct PostureController {
    enemy_max_count: Option<usize>,
    current: Posture,
}

impl PostureController {
    pub fn new() -> PostureController {
        PostureController::default()
    }

    pub fn enemy_max_count(&self) -> Option<usize> {
        self.enemy_max_count
    }

    pub fn current(&self) -> Posture {
        self.current
    }

    pub fn update<S>(&mut self, snapshot: &Snapshot, spatial: &S, config: &EngineConfig) -> Posture
    where
        S: SpatialQuery + ?Sized,
    {
        let enemy_max_count = *self.enemy_max_count.get_or_insert(snapshot.enemy_units.len());

        let posture = evaluate_posture(&snapshot.enemy_units, enemy_max_count, snapshot.my_flag.as_ref(), spatial, config);

        if posture != self.current {
            info!("Posture changed: {:?} -> {:?}", self.current, posture);
        }

        self.current = posture;

        posture
    }
}
