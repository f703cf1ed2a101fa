use crate::world::*;
use bitflags::bitflags;
use log::*;

// Arena simultaneous action pipelines:
//
// Pipeline A (melee):  attack
// Pipeline B (ranged): rangedAttack, rangedHeal
// Pipeline C (heal):   heal
//
// Actions within the same pipeline are mutually exclusive (share the same bit).
// Movement is its own slot and is replaced, not rejected, by a later command.

bitflags! {
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct SimultaneousActionFlags: u8 {
        const UNSET = 0;

        const MOVE = 1;

        // Pipeline A
        const ATTACK = 1 << 1;

        // Pipeline B
        const RANGED_ATTACK = 1 << 2;
        const RANGED_HEAL   = 1 << 2;

        // Pipeline C
        const HEAL = 1 << 3;

        const ANNOTATE = 1 << 4;
    }
}

impl SimultaneousActionFlags {
    pub fn consume(&mut self, flags: SimultaneousActionFlags) -> bool {
        if !self.intersects(flags) {
            self.insert(flags);

            true
        } else {
            false
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Movement {
    To(Position),
    Step(Direction),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangedAction {
    Attack(UnitId),
    Heal(UnitId),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub style: TextStyle,
}

/// Commands one unit issues in one tick, buffered until the driver flushes them.
#[derive(Clone, Debug, PartialEq)]
pub struct UnitCommands {
    pub unit: UnitId,
    pub movement: Option<Movement>,
    pub attack: Option<UnitId>,
    pub ranged: Option<RangedAction>,
    pub heal: Option<UnitId>,
    pub annotation: Option<Annotation>,
    pub issued: SimultaneousActionFlags,
}

impl UnitCommands {
    pub fn new(unit: UnitId) -> UnitCommands {
        UnitCommands {
            unit,
            movement: None,
            attack: None,
            ranged: None,
            heal: None,
            annotation: None,
            issued: SimultaneousActionFlags::UNSET,
        }
    }

    /// The most recent movement wins.
    fn set_movement(&mut self, movement: Movement) {
        if let Some(previous) = self.movement.replace(movement) {
            trace!("Unit {} movement {:?} superseded by {:?}", self.unit, previous, movement);
        }

        self.issued.insert(SimultaneousActionFlags::MOVE);
    }

    pub fn move_to(&mut self, target: Position) {
        self.set_movement(Movement::To(target));
    }

    pub fn move_direction(&mut self, direction: Direction) {
        self.set_movement(Movement::Step(direction));
    }

    pub fn attack(&mut self, target: UnitId) -> bool {
        if self.issued.consume(SimultaneousActionFlags::ATTACK) {
            self.attack = Some(target);

            true
        } else {
            false
        }
    }

    pub fn ranged_attack(&mut self, target: UnitId) -> bool {
        if self.issued.consume(SimultaneousActionFlags::RANGED_ATTACK) {
            self.ranged = Some(RangedAction::Attack(target));

            true
        } else {
            false
        }
    }

    pub fn ranged_heal(&mut self, target: UnitId) -> bool {
        if self.issued.consume(SimultaneousActionFlags::RANGED_HEAL) {
            self.ranged = Some(RangedAction::Heal(target));

            true
        } else {
            false
        }
    }

    pub fn heal(&mut self, target: UnitId) -> bool {
        if self.issued.consume(SimultaneousActionFlags::HEAL) {
            self.heal = Some(target);

            true
        } else {
            false
        }
    }

    pub fn annotate(&mut self, x: f32, y: f32, text: String, style: &TextStyle) {
        self.issued.insert(SimultaneousActionFlags::ANNOTATE);
        self.annotation = Some(Annotation {
            x,
            y,
            text,
            style: style.clone(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }

    /// Issues the buffered commands: annotation, movement, then the action pipelines.
    pub fn flush<W: World + ?Sized>(self, world: &mut W) {
        if let Some(annotation) = &self.annotation {
            world.annotate(annotation.x, annotation.y, &annotation.text, &annotation.style);
        }

        match self.movement {
            Some(Movement::To(target)) => world.move_to(self.unit, target),
            Some(Movement::Step(direction)) => world.move_direction(self.unit, direction),
            None => {}
        }

        if let Some(target) = self.attack {
            world.attack(self.unit, target);
        }

        match self.ranged {
            Some(RangedAction::Attack(target)) => world.ranged_attack(self.unit, target),
            Some(RangedAction::Heal(target)) => world.ranged_heal(self.unit, target),
            None => {}
        }

        if let Some(target) = self.heal {
            world.heal(self.unit, target);
        }
    }
}
