//! Pure simulation functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` and returns a brand-new `GameState`. The frame entry point
//! also returns the frame's draw list; nothing here draws or reads input.

use log::{debug, trace};

use crate::consts::{
    AVATAR_SHOT, ENEMY_DRIFT, ENEMY_RECYCLE, ENEMY_SHOT, MARGIN_X, MARGIN_Y,
};
use crate::entities::{
    ActorId, ActorState, Direction, DrawCommand, ExplosionTarget, FrameInput, GameState,
    PlayField, Roster,
};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the match state: full roster at its starting positions.
pub fn init_state(field: PlayField) -> GameState {
    GameState {
        roster: Roster::new(),
        field,
        frame: 0,
        explosion_timer: false,
    }
}

// ── Host key events & explosion timer ────────────────────────────────────────

/// Explode the avatar or the secondary actor in place and arm the
/// explosion timer. Retired targets stay parked.
pub fn trigger_explosion(state: &GameState, target: ExplosionTarget) -> GameState {
    let mut next = state.clone();
    let id = match target {
        ExplosionTarget::Avatar => Some(next.roster.avatar()),
        ExplosionTarget::Secondary => next.roster.enemies().next(),
    };
    let id = id.filter(|&id| next.roster[id].state() != ActorState::Retired);
    if let Some(id) = id {
        next.roster[id].explode();
        next.explosion_timer = true;
        debug!("{:?} ({:?}) exploding", target, id);
    }
    next
}

/// One periodic timer tick: advance every exploding actor by one frame.
/// The timer disarms once nothing is exploding any more.
pub fn explosion_tick(state: &GameState) -> GameState {
    let mut next = state.clone();
    if !next.explosion_timer {
        return next;
    }
    for actor in next.roster.iter_mut() {
        actor.advance_explosion();
    }
    next.explosion_timer = next
        .roster
        .iter()
        .any(|(_, a)| a.state() == ActorState::Exploding);
    if !next.explosion_timer {
        debug!("explosion timer disarmed");
    }
    next
}

// ── Frame steps ──────────────────────────────────────────────────────────────

/// Recycle projectiles that ran off their end of the field while in flight.
///
/// The avatar's shot ends at the top edge, enemy projectiles at the bottom
/// edge. A recycled projectile is stopped and re-attacked from its owner, or
/// retired when the owner has been retired.
pub fn recycle_projectiles(state: &GameState) -> GameState {
    let mut next = state.clone();
    recycle(&mut next);
    next
}

/// Avatar movement with the per-axis boundary gates.
pub fn steer_avatar(state: &GameState, direction: Direction) -> GameState {
    let mut next = state.clone();
    steer(&mut next, direction);
    next
}

/// Integrate every actor, retired ones included.
pub fn integrate(state: &GameState, elapsed: f32) -> GameState {
    let mut next = state.clone();
    for actor in next.roster.iter_mut() {
        actor.update(elapsed);
    }
    next
}

/// Enemies and their projectiles against the avatar, then the avatar's shot
/// against every enemy.
pub fn collision_pass(state: &GameState) -> GameState {
    let mut next = state.clone();
    collide_all(&mut next.roster);
    next
}

/// AI pass: reset enemy drift, draw enemies, then draw and relaunch each
/// enemy's projectile. Draws are appended to `draws`.
pub fn run_ai(state: &GameState, draws: &mut Vec<DrawCommand>) -> GameState {
    let mut next = state.clone();
    ai(&mut next.roster, draws);
    next
}

// ── Per-frame entry point ────────────────────────────────────────────────────

/// Advance the simulation by one frame.
///
/// Order: projectile recycling, avatar steering, integration, collisions,
/// then the draw pass (background, avatar, AI, optional avatar shot,
/// present). An inactive frame changes nothing and draws nothing.
pub fn advance_frame(
    state: &GameState,
    elapsed: f32,
    input: &FrameInput,
) -> (GameState, Vec<DrawCommand>) {
    if !input.active {
        return (state.clone(), Vec::new());
    }

    let mut next = state.clone();
    next.frame += 1;
    trace!("frame {} dt={elapsed:.4} {:?}", next.frame, input);

    recycle(&mut next);
    steer(&mut next, input.direction);
    for actor in next.roster.iter_mut() {
        actor.update(elapsed);
    }
    collide_all(&mut next.roster);

    let roster = &mut next.roster;
    let avatar = roster.avatar();
    let mut draws = Vec::with_capacity(roster.len() + 4);
    draws.push(DrawCommand::Clear);
    draws.push(DrawCommand::Background);
    draws.push(draw(roster, avatar));

    ai(roster, &mut draws);

    if input.fire && roster[avatar].state() != ActorState::Retired {
        let shot = roster.avatar_shot();
        draws.push(draw(roster, shot));
        roster.attack(avatar, shot, AVATAR_SHOT);
    }

    draws.push(DrawCommand::Present);
    (next, draws)
}

// ── Internals (in place) ─────────────────────────────────────────────────────

fn recycle(state: &mut GameState) {
    let bottom = state.field.height();
    let roster = &mut state.roster;

    let avatar = roster.avatar();
    let shot = roster.avatar_shot();
    if roster[shot].is_in_flight() && roster[shot].position().y <= 0.0 {
        relaunch(roster, avatar, shot, AVATAR_SHOT);
    }

    for squad in roster.squads().to_vec() {
        let p = &roster[squad.projectile];
        if p.is_in_flight() && p.position().y >= bottom {
            relaunch(roster, squad.enemy, squad.projectile, ENEMY_RECYCLE);
        }
    }
}

fn relaunch(roster: &mut Roster, owner: ActorId, projectile: ActorId, magnitude: f32) {
    roster[projectile].stop();
    if roster[owner].state() != ActorState::Retired {
        roster.attack(owner, projectile, magnitude);
        debug!("{:?} recycled by {:?}", projectile, owner);
    } else {
        roster[projectile].retire();
    }
}

/// Four independent gates on the position captured before any move. Each
/// gate either applies the sampled direction or stops the avatar and nudges
/// it back inward; in the interior the direction is applied four times.
fn steer(state: &mut GameState, direction: Direction) {
    let field = state.field;
    let id = state.roster.avatar();
    let avatar = &mut state.roster[id];
    let pos = avatar.position();

    let gates = [
        (pos.x <= field.width() - MARGIN_X, Direction::LEFT),
        (pos.x >= MARGIN_X, Direction::RIGHT),
        (pos.y <= field.height() - MARGIN_Y, Direction::FORWARD),
        (pos.y >= MARGIN_Y, Direction::BACKWARD),
    ];
    for (inside, nudge) in gates {
        if inside {
            avatar.move_in(direction);
        } else {
            avatar.stop();
            avatar.move_in(nudge);
        }
    }
}

fn collide_all(roster: &mut Roster) {
    let avatar = roster.avatar();
    let shot = roster.avatar_shot();
    let squads = roster.squads().to_vec();

    for squad in &squads {
        roster.collide(squad.enemy, avatar);
    }
    for squad in &squads {
        roster.collide(squad.projectile, avatar);
    }
    for squad in &squads {
        roster.collide(shot, squad.enemy);
    }
}

fn ai(roster: &mut Roster, draws: &mut Vec<DrawCommand>) {
    let squads = roster.squads().to_vec();

    for squad in &squads {
        let enemy = &mut roster[squad.enemy];
        if enemy.state() != ActorState::Retired {
            enemy.set_velocity(ENEMY_DRIFT);
        }
    }
    for squad in &squads {
        draws.push(draw(roster, squad.enemy));
    }
    for squad in &squads {
        draws.push(draw(roster, squad.projectile));
        if roster[squad.enemy].state() != ActorState::Retired {
            roster.attack(squad.enemy, squad.projectile, ENEMY_SHOT);
        }
    }
}

fn draw(roster: &Roster, id: ActorId) -> DrawCommand {
    let actor = &roster[id];
    DrawCommand::Actor {
        id,
        kind: actor.kind(),
        position: actor.position(),
        state: actor.state(),
        explosion_frame: actor.explosion_frame(),
    }
}
