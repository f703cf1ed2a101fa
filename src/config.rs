use crate::error::TacticsError;
use crate::world::TextStyle;
use serde::{Deserialize, Serialize};

/// What the tick driver does with a unit whose body matches no role.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownUnitPolicy {
    /// Log a warning and leave the unit idle for the tick.
    #[default]
    Skip,
    /// Fail the whole tick before any command is issued.
    Abort,
}

/// Tunables for one match. Every field has a default so partial documents load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// When off, no posture is computed and roles fall back to their posture-less behavior.
    pub enable_posture: bool,
    /// Stay defensive while more than this share of the initial enemy force is alive.
    pub retreat_ratio: f64,
    /// Enemies strictly closer than this to our flag force a defensive posture.
    pub flag_threat_radius: u32,
    /// Soldiers only engage enemies strictly closer than this to their home position.
    pub melee_leash_radius: u32,
    pub archer_danger_radius: u32,
    pub priest_danger_radius: u32,
    pub heal_range: u32,
    /// Priests finish every tick with a move toward the enemy flag, superseding any flee.
    pub priest_final_push: bool,
    pub annotate_health: bool,
    pub health_text_style: TextStyle,
    /// Log the squad size every this many ticks. Zero disables the report.
    pub report_interval: u32,
    pub unknown_unit_policy: UnknownUnitPolicy,
}

impl Default for EngineConfig {
    fn default() -> EngineConfig {
        EngineConfig {
            enable_posture: true,
            retreat_ratio: 0.6,
            flag_threat_radius: 10,
            melee_leash_radius: 10,
            archer_danger_radius: 3,
            priest_danger_radius: 7,
            heal_range: 3,
            priest_final_push: true,
            annotate_health: true,
            health_text_style: TextStyle::default(),
            report_interval: 10,
            unknown_unit_policy: UnknownUnitPolicy::Skip,
        }
    }
}

impl EngineConfig {
    pub fn from_json(data: &str) -> Result<EngineConfig, TacticsError> {
        Ok(serde_json::from_str(data)?)
    }
}
