use crate::world::{Capabilities, Side, UnitId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TacticsError {
    #[error("unit {unit} has no recognized combat parts (body: {body:?})")]
    UnrecognizedUnitConfiguration { unit: UnitId, body: Capabilities },

    /// Never fatal. Flag-directed behavior is skipped when this is produced.
    #[error("no {0} flag in the current snapshot")]
    MissingFlagReference(Side),

    #[error("invalid engine configuration: {0}")]
    Config(#[from] serde_json::Error),
}
