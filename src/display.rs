//! Rendering layer — all terminal output lives here.
//!
//! The simulation hands over a draw list per frame; this module replays it
//! onto the terminal, scaling world coordinates down to character cells.
//! No game logic is performed here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use star_raid::entities::{ActorId, ActorKind, ActorState, DrawCommand, GameState, PlayField, Vec2};
use star_raid::SetupError;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD: Color = Color::Yellow;
const C_AVATAR: Color = Color::White;
const C_ENEMY: Color = Color::Green;
const C_SHOT: Color = Color::Cyan;
const C_MISSILE: Color = Color::Magenta;
const C_EXPLOSION: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;

/// Explosion sprite strip, one glyph per animation frame.
const EXPLOSION_GLYPHS: [&str; 8] = ["*", "✶", "✸", "✹", "✺", "✻", "✼", "·"];

/// Smallest terminal the field can be squeezed into.
pub const MIN_COLS: u16 = 40;
pub const MIN_ROWS: u16 = 12;

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Maps the world field onto the bordered play area of the terminal.
///
/// Row 0 is the HUD, row 1 the top border, the last row the controls hint
/// and the one above it the bottom border.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    cols: u16,
    rows: u16,
    field: PlayField,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, field: PlayField) -> Result<Viewport, SetupError> {
        if cols < MIN_COLS || rows < MIN_ROWS {
            return Err(SetupError::TerminalTooSmall { cols, rows });
        }
        Ok(Viewport { cols, rows, field })
    }

    /// Cell for a world position, or `None` if it falls outside the field.
    pub fn cell(&self, pos: Vec2) -> Option<(u16, u16)> {
        if !self.field.contains(pos) {
            return None;
        }
        let inner_w = f32::from(self.cols - 2);
        let inner_h = f32::from(self.rows - 4);
        let col = (pos.x / self.field.width() * (inner_w - 1.0)).round() as u16 + 1;
        let row = (pos.y / self.field.height() * (inner_h - 1.0)).round() as u16 + 2;
        Some((col, row))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Replay one frame's draw list.
pub fn render<W: Write>(
    out: &mut W,
    view: &Viewport,
    state: &GameState,
    fps: u32,
    commands: &[DrawCommand],
) -> std::io::Result<()> {
    let shot = state.roster.avatar_shot();
    for command in commands {
        match *command {
            DrawCommand::Clear => {
                out.queue(terminal::Clear(terminal::ClearType::All))?;
            }
            DrawCommand::Background => {
                draw_border(out, view)?;
                draw_hud(out, view, state, fps)?;
                draw_controls_hint(out, view)?;
            }
            DrawCommand::Actor {
                id,
                kind,
                position,
                state: actor_state,
                explosion_frame,
            } => draw_actor(out, view, shot, id, kind, position, actor_state, explosion_frame)?,
            DrawCommand::Present => {
                out.queue(style::ResetColor)?;
                out.queue(cursor::MoveTo(0, view.rows.saturating_sub(1)))?;
                out.flush()?;
            }
        }
    }
    Ok(())
}

/// Shown instead of the game while the terminal has lost focus.
pub fn render_paused<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let msg = "── paused ──";
    let col = (view.cols / 2).saturating_sub(msg.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, view.rows / 2))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(msg))?;
    out.queue(style::ResetColor)?;
    out.flush()
}

// ── Border & HUD ──────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let w = view.cols as usize;
    let bottom = view.rows.saturating_sub(2);

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, bottom))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..bottom {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }
    Ok(())
}

fn draw_hud<W: Write>(
    out: &mut W,
    view: &Viewport,
    state: &GameState,
    fps: u32,
) -> std::io::Result<()> {
    let avatar = &state.roster[state.roster.avatar()];
    let status = match avatar.state() {
        ActorState::Active | ActorState::InFlight => "READY",
        ActorState::Exploding => "HIT!",
        ActorState::Retired => "DOWN",
    };
    let alive = state
        .roster
        .enemies()
        .filter(|&id| state.roster[id].state() != ActorState::Retired)
        .count();

    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!("Star Raid : {fps:>3} fps")))?;

    let right = format!("Enemies:{alive}  Ship:{status}");
    let rx = view.cols.saturating_sub(right.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(Print(right))?;
    Ok(())
}

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(
        "←↑↓→ / WASD : Move   SPACE : Fire   ENTER/TAB : Boom   Q : Quit",
    ))?;
    Ok(())
}

// ── Actors ────────────────────────────────────────────────────────────────────

#[allow(clippy::too_many_arguments)]
fn draw_actor<W: Write>(
    out: &mut W,
    view: &Viewport,
    shot: ActorId,
    id: ActorId,
    kind: ActorKind,
    position: Vec2,
    state: ActorState,
    explosion_frame: u32,
) -> std::io::Result<()> {
    // Parked actors fall outside the field and are clipped here.
    let Some((col, row)) = view.cell(position) else {
        return Ok(());
    };

    if state == ActorState::Exploding {
        let glyph = EXPLOSION_GLYPHS[explosion_frame as usize % EXPLOSION_GLYPHS.len()];
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(C_EXPLOSION))?;
        out.queue(Print(glyph))?;
        return Ok(());
    }

    match kind {
        ActorKind::Avatar => {
            //   ▲
            //  /█\
            out.queue(style::SetForegroundColor(C_AVATAR))?;
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(Print("▲"))?;
            if row + 1 < view.rows.saturating_sub(2) {
                out.queue(cursor::MoveTo(col.saturating_sub(1).max(1), row + 1))?;
                out.queue(Print("/█\\"))?;
            }
        }
        ActorKind::Enemy => {
            out.queue(style::SetForegroundColor(C_ENEMY))?;
            out.queue(cursor::MoveTo(col.saturating_sub(1).max(1), row))?;
            out.queue(Print("«▼»"))?;
        }
        ActorKind::Projectile if id == shot => {
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(style::SetForegroundColor(C_SHOT))?;
            out.queue(Print("║"))?;
        }
        ActorKind::Projectile => {
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(style::SetForegroundColor(C_MISSILE))?;
            out.queue(Print("↓"))?;
        }
    }
    Ok(())
}
