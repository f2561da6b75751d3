//! Terminal runner (default binary).
//!
//! Loads the session config, starts a tokio runtime for the game timers and
//! drives a crossterm input/render loop on the main thread.

use std::fs::File;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::info;
use tokio::runtime::Runtime;

use quantum_blocks::input::{should_quit, InputHandler};
use quantum_blocks::session::{GameSession, SessionConfig};
use quantum_blocks::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Redraw period of the render loop
const FRAME_MS: u64 = 16;

fn main() -> Result<()> {
    let config = SessionConfig::from_env()?;
    init_logging(config.log_path.as_deref())?;

    let runtime = Runtime::new().context("failed to create tokio runtime")?;
    let _guard = runtime.enter();

    let mut session = GameSession::new(&config)?;
    session.start_new_game();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    session.shutdown();
    info!(
        "final snapshot: {}",
        serde_json::to_string(&session.snapshot()).context("failed to encode snapshot")?
    );
    result
}

/// Log to the given file; without one no logger is installed.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("failed to install logger")?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, session: &mut GameSession) -> Result<()> {
    let view = GameView::default();
    let mut input = InputHandler::new();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_millis(FRAME_MS);
    let mut last_update = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&session.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        if event::poll(frame)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        return Ok(());
                    }
                    for action in input.handle_key(key) {
                        session.handle_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = last_update.elapsed();
        last_update = Instant::now();
        if let Some(action) = input.update(elapsed.as_millis() as u32) {
            session.handle_action(action);
        }
    }
}
