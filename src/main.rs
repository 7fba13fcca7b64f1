//! Terminal block game runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from
//! `block_game::term`. There is no tick: the loop blocks on the next terminal
//! event, applies it, and redraws.

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info, warn};

use block_game::config::Args;
use block_game::core::{GameSnapshot, GameState};
use block_game::input::{handle_key_event, should_quit};
use block_game::logging;
use block_game::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.log_file.as_deref())?;

    let seed = args.resolved_seed();
    info!(seed, cell_width = args.cell_width, "starting block game");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed, GameView::new(args.cell_width, 1));

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        warn!(error = %err, "failed to restore terminal");
    }
    result
}

fn run(term: &mut TerminalRenderer, seed: u32, view: GameView) -> Result<()> {
    let mut game = GameState::new(seed);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!(score = game.score(), rows = game.rows_cleared(), "quit");
                    return Ok(());
                }

                let Some(action) = handle_key_event(key) else {
                    continue;
                };
                game.handle_input(action);

                if let Some(event) = game.take_last_event() {
                    debug!(?event, score = game.score(), "lock");
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
