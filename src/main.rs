mod config;
mod display;
mod input;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::{
    cursor,
    event::{
        self, DisableFocusChange, EnableFocusChange, Event, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::{info, warn};

use star_raid::compute::{advance_frame, explosion_tick, init_state, trigger_explosion};
use star_raid::consts::{EXPLOSION_TICK_MS, FIELD_HEIGHT, FIELD_WIDTH};
use star_raid::entities::{FrameInput, GameState, PlayField};
use star_raid::SetupError;

use config::HostConfig;
use display::Viewport;
use input::{InputTracker, KeyAction};

const EXPLOSION_TICK: Duration = Duration::from_millis(EXPLOSION_TICK_MS);

// ── Logging ───────────────────────────────────────────────────────────────────

fn init_logging(config: &HostConfig) -> anyhow::Result<()> {
    let file = File::create(&config.log_file)
        .with_context(|| format!("creating log file {}", config.log_file.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    for w in &config.warnings {
        warn!("{w}");
    }
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until a quit key or the input thread goes away.
///
/// Each pass: measure elapsed time, drain input events, fire the explosion
/// timer if it is due, advance the simulation one frame and replay its draw
/// list.
fn game_loop<W: Write>(
    out: &mut W,
    config: &HostConfig,
    mut view: Viewport,
    field: PlayField,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<GameState> {
    let mut state = init_state(field);
    let mut tracker = InputTracker::default();
    let mut active = true;
    let mut frame: u64 = 0;
    let mut last = Instant::now();
    let mut last_explosion_tick = Instant::now();

    loop {
        let frame_start = Instant::now();
        frame += 1;
        let elapsed = frame_start.duration_since(last).as_secs_f32();
        last = frame_start;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        loop {
            let ev = match rx.try_recv() {
                Ok(ev) => ev,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return Ok(state),
            };
            match ev {
                Event::Key(key) => match tracker.record(key, frame) {
                    Some(KeyAction::Quit) => return Ok(state),
                    Some(KeyAction::Explode(target)) => {
                        state = trigger_explosion(&state, target);
                        last_explosion_tick = Instant::now();
                    }
                    None => {}
                },
                Event::FocusLost => {
                    active = false;
                    display::render_paused(out, &view)?;
                }
                Event::FocusGained => active = true,
                Event::Resize(cols, rows) => match Viewport::new(cols, rows, field) {
                    Ok(v) => view = v,
                    Err(err) => warn!("keeping previous layout: {err}"),
                },
                _ => {}
            }
        }

        // ── Periodic explosion timer ──────────────────────────────────────────
        if state.explosion_timer && last_explosion_tick.elapsed() >= EXPLOSION_TICK {
            state = explosion_tick(&state);
            last_explosion_tick = Instant::now();
        }

        let (direction, fire) = tracker.sample(frame);
        let input = FrameInput {
            direction,
            fire,
            active,
        };
        let (next, draws) = advance_frame(&state, elapsed, &input);
        state = next;

        let fps = if elapsed > 0.0 {
            (1.0 / elapsed).round() as u32
        } else {
            0
        };
        display::render(out, &view, &state, fps, &draws)?;

        let spent = frame_start.elapsed();
        if spent < config.frame() {
            thread::sleep(config.frame() - spent);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Everything that can fail before the first frame. Runs before the
/// terminal is switched to raw mode so the error prints normally.
fn setup() -> Result<(PlayField, Viewport), SetupError> {
    let field = PlayField::new(FIELD_WIDTH, FIELD_HEIGHT)?;
    let (cols, rows) = terminal::size()?;
    let view = Viewport::new(cols, rows, field)?;
    Ok((field, view))
}

fn main() -> anyhow::Result<()> {
    let config = HostConfig::from_env();
    init_logging(&config)?;

    let (field, view) = setup().context("failed to initialize properly")?;
    info!("starting: {:?} at {} fps", field, config.fps);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()
        .map_err(SetupError::from)
        .context("failed to initialize properly")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    let focus_events = out.execute(EnableFocusChange).is_ok();

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back to HOLD_WINDOW.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = game_loop(&mut out, &config, view, field, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    if focus_events {
        let _ = out.execute(DisableFocusChange);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    let state = result.context("terminal I/O failed")?;
    info!("quit after {} frames", state.frame);
    Ok(())
}
