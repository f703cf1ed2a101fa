#![warn(clippy::all)]

//! Tactical squad engine for capture-the-flag skirmishes.
//!
//! Each tick the [`engine::Engine`] reads a [`world::Snapshot`], settles the team
//! [`posture::Posture`], classifies every friendly unit into a [`roles::RoleKind`] and issues
//! that role's commands through the [`world::World`] provider.

pub mod config;
pub mod engine;
pub mod error;
pub mod findnearest;
pub mod logging;
pub mod posture;
pub mod roles;
pub mod sim;
pub mod world;

pub use config::{EngineConfig, UnknownUnitPolicy};
pub use engine::{Engine, TickReport};
pub use error::TacticsError;
pub use posture::Posture;
pub use roles::RoleKind;
