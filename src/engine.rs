use crate::config::*;
use crate::error::TacticsError;
use crate::posture::*;
use crate::roles::actions::UnitCommands;
use crate::roles::factory::RoleFactory;
use crate::roles::*;
use crate::world::*;
use itertools::Itertools;
use log::*;
use std::collections::HashMap;

/// Where each friendly unit was first seen. Entries are written once and never moved.
#[derive(Clone, Debug, Default)]
pub struct HomePositions {
    homes: HashMap<UnitId, Position>,
}

impl HomePositions {
    pub fn remember(&mut self, unit: &Unit) -> Position {
        *self.homes.entry(unit.id).or_insert(unit.pos)
    }

    pub fn get(&self, id: UnitId) -> Option<Position> {
        self.homes.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.homes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.homes.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    pub tick: u32,
    pub posture: Option<Posture>,
    pub dispatched: HashMap<RoleKind, usize>,
    pub skipped: Vec<UnitId>,
}

impl TickReport {
    pub fn dispatched(&self, kind: RoleKind) -> usize {
        self.dispatched.get(&kind).copied().unwrap_or(0)
    }
}

/// All state that lives for one match: configuration, posture, home positions and the tick count.
pub struct Engine {
    config: EngineConfig,
    posture: PostureController,
    homes: HomePositions,
    tick: u32,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Engine {
        Engine {
            config,
            posture: PostureController::new(),
            homes: HomePositions::default(),
            tick: 0,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn posture(&self) -> &PostureController {
        &self.posture
    }

    pub fn homes(&self) -> &HomePositions {
        &self.homes
    }

    /// Runs one full decision cycle against `world`.
    ///
    /// Posture is settled before any unit acts, and every unit decides from the same snapshot.
    /// Commands are only flushed once all units have decided, so an aborted tick issues nothing.
    pub fn tick<W: World>(&mut self, world: &mut W) -> Result<TickReport, TacticsError> {
        self.tick += 1;

        let snapshot = world.snapshot();

        if self.config.report_interval > 0 && self.tick % self.config.report_interval == 0 {
            info!("Tick {}: {} units in the squad", self.tick, snapshot.my_units.len());
        }

        let posture = if self.config.enable_posture {
            Some(self.posture.update(&snapshot, &*world, &self.config))
        } else {
            None
        };

        let mut pending: Vec<(RoleKind, UnitCommands)> = Vec::with_capacity(snapshot.my_units.len());
        let mut skipped = Vec::new();

        for unit in &snapshot.my_units {
            let home = self.homes.remember(unit);

            let kind = match RoleFactory::create_role(unit) {
                Ok(kind) => kind,
                Err(err) => match self.config.unknown_unit_policy {
                    UnknownUnitPolicy::Skip => {
                        warn!("Skipping unit: {}", err);
                        skipped.push(unit.id);
                        continue;
                    }
                    UnknownUnitPolicy::Abort => {
                        error!("Aborting tick {}: {}", self.tick, err);
                        return Err(err);
                    }
                },
            };

            let ctx = RoleContext {
                unit,
                home,
                posture,
                snapshot: &snapshot,
                spatial: &*world,
                config: &self.config,
            };

            pending.push((kind, kind.as_role().act(&ctx)));
        }

        let dispatched = pending.iter().counts_by(|(kind, _)| *kind);

        if !skipped.is_empty() {
            debug!("Tick {}: skipped units {}", self.tick, skipped.iter().join(", "));
        }

        for (_, commands) in pending {
            commands.flush(&mut *world);
        }

        Ok(TickReport {
            tick: self.tick,
            posture,
            dispatched,
            skipped,
        })
    }
}

impl Default for Engine {
    fn default() -> Engine {
        Engine::new(EngineConfig::default())
    }
}
