//! All simulation types. Only `Direction` carries a few bit operations here.
//!
//! Behaviour lives in `actor` (state machine), `roster` (arena access),
//! `combat` and `compute`.

use std::ops::{BitOr, BitOrAssign};

pub use glam::Vec2;

// ── Input ────────────────────────────────────────────────────────────────────

/// Direction bitmask sampled from input, also used for boundary nudges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Direction(u32);

impl Direction {
    pub const NONE: Direction = Direction(0);
    /// Up the field (toward decreasing y).
    pub const FORWARD: Direction = Direction(1);
    /// Down the field (toward increasing y).
    pub const BACKWARD: Direction = Direction(2);
    pub const LEFT: Direction = Direction(4);
    pub const RIGHT: Direction = Direction(8);

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Build from raw bits, dropping anything outside the four cardinal flags.
    pub const fn from_bits_truncate(bits: u32) -> Direction {
        Direction(bits & 0b1111)
    }

    pub const fn contains(self, other: Direction) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Direction {
    type Output = Direction;

    fn bitor(self, rhs: Direction) -> Direction {
        Direction(self.0 | rhs.0)
    }
}

impl BitOrAssign for Direction {
    fn bitor_assign(&mut self, rhs: Direction) {
        self.0 |= rhs.0;
    }
}

/// Everything the core reads from input polling for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInput {
    pub direction: Direction,
    /// Fire key held this frame.
    pub fire: bool,
    /// False while the host is minimised or unfocused; the frame is skipped.
    pub active: bool,
}

impl Default for FrameInput {
    fn default() -> Self {
        FrameInput {
            direction: Direction::NONE,
            fire: false,
            active: true,
        }
    }
}

/// Targets of the host's explosion key events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExplosionTarget {
    /// The player-controlled avatar.
    Avatar,
    /// The first enemy of the roster.
    Secondary,
}

// ── Actors ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActorKind {
    Avatar,
    Enemy,
    Projectile,
}

/// Explicit lifecycle tag.
///
/// For projectiles `Active` means "at rest" and `InFlight` means the vertical
/// velocity is nonzero. Avatars and enemies are never `InFlight`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActorState {
    Active,
    InFlight,
    Exploding,
    /// Parked off the field with zero velocity. Never deallocated.
    Retired,
}

/// One simulated entity. Avatar, enemies and projectiles share this shape.
///
/// Fields are private so the projectile in-flight invariant can't be broken
/// from outside; see `actor.rs` for the operations.
#[derive(Clone, Debug, PartialEq)]
pub struct Actor {
    pub(crate) kind: ActorKind,
    pub(crate) position: Vec2,
    pub(crate) velocity: Vec2,
    pub(crate) state: ActorState,
    pub(crate) explosion_frame: u32,
}

/// Stable index of an actor inside its `Roster`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(pub usize);

/// An enemy and the projectile it keeps relaunching. Neither owns the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Squad {
    pub enemy: ActorId,
    pub projectile: ActorId,
}

/// The fixed set of actors for one match.
#[derive(Clone, Debug, PartialEq)]
pub struct Roster {
    pub(crate) actors: Vec<Actor>,
    pub(crate) avatar: ActorId,
    pub(crate) avatar_shot: ActorId,
    pub(crate) squads: Vec<Squad>,
}

// ── Field & output ───────────────────────────────────────────────────────────

/// Visible play field in world units; origin at the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayField {
    pub(crate) width: f32,
    pub(crate) height: f32,
}

/// One entry of a frame's draw list, replayed in order by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    /// Reset the back buffer.
    Clear,
    /// Paint the background.
    Background,
    /// Submit one actor's current sprite at its position.
    Actor {
        id: ActorId,
        kind: ActorKind,
        position: Vec2,
        state: ActorState,
        explosion_frame: u32,
    },
    /// Flip the back buffer to the visible surface.
    Present,
}

// ── Master game state ────────────────────────────────────────────────────────

/// The entire simulation state. Cloneable so compute functions can return
/// a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub roster: Roster,
    pub field: PlayField,
    /// Frames advanced so far (inactive frames don't count).
    pub frame: u64,
    /// The host should call `explosion_tick` periodically while this is set.
    pub explosion_timer: bool,
}
