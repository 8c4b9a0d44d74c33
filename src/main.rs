//! Terminal dino runner (default binary).
//!
//! Plays the game against an emulated LCD: the frame scheduler paces the
//! loop, crossterm supplies the button and dial, swapped pages land in an
//! `LcdPanel`, and the panel is drawn with half-block characters.

use std::fs::File;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use dino_runner::config::RunnerConfig;
use dino_runner::core::Simulation;
use dino_runner::input::{should_quit, AnalogDial, InputSampler, TriggerHandler};
use dino_runner::render::Renderer;
use dino_runner::scheduler::FrameScheduler;
use dino_runner::term::{FrameBuffer, LcdPanel, PanelView, StatusLine, TerminalRenderer, Viewport};
use dino_runner::types::Phase;

fn main() -> Result<()> {
    let config = RunnerConfig::from_env();
    init_logging(&config)?;
    for (key, raw) in &config.rejected {
        log::warn!("ignoring {}={:?}, using the default", key, raw);
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("building tokio runtime")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = runtime.block_on(run(&mut term, &config));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

async fn run(term: &mut TerminalRenderer, config: &RunnerConfig) -> Result<()> {
    let mut sim = Simulation::new(config.game);
    let mut renderer = Renderer::new();
    let mut panel = LcdPanel::new();
    let mut input = InputSampler::new(
        TriggerHandler::new().with_key_release_timeout_ms(config.key_release_ms),
        AnalogDial::default(),
    );
    if !term.release_events() {
        log::info!(
            "terminal reports no key releases, holding keys for {}ms",
            config.key_release_ms
        );
    }

    let view = PanelView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut message = String::new();
    let mut redraw = true;

    let scheduler = FrameScheduler::new(sim.tick_period_ms(), sim.config().min_tick_period_ms);
    let signal = scheduler.signal();
    let producer = scheduler.spawn();

    loop {
        signal.wait().await;

        // Drain pending terminal events without blocking the tick.
        let mut quit = false;
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release && should_quit(key) => {
                    quit = true;
                }
                Event::Key(key) => {
                    input.handle_key(key);
                }
                Event::Resize(..) => {
                    term.invalidate();
                    redraw = true;
                }
                _ => {}
            }
        }
        if quit {
            break;
        }

        let phase = sim.phase();
        sim.step(input.sample(), &mut renderer);
        if sim.phase() != phase {
            // A confirm key still counted as held must not carry into the new phase.
            input.reset();
        }
        if let Some(event) = sim.events().last() {
            message = event.to_string();
            redraw = true;
        }
        renderer
            .swap(&mut panel)
            .unwrap_or_else(|never| match never {});
        scheduler.set_period_ms(sim.tick_period_ms());

        // Selection LEDs follow the dial even when no page changed.
        redraw |= !panel.take_touched().is_empty() || sim.phase() == Phase::Selecting;
        if redraw {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let status = StatusLine {
                phase: sim.phase(),
                score: sim.state().score(),
                tick_period_ms: sim.tick_period_ms(),
                message: &message,
            };
            view.render_into(&panel, sim.life_indicators(), &status, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            redraw = false;
        }
    }

    producer.abort();
    log::info!(
        "exiting after {} panel page writes, {} terminal bytes",
        panel.page_writes(),
        term.bytes_written()
    );
    Ok(())
}

/// Route `log` records to `DINO_LOG_PATH`; the terminal itself is busy.
fn init_logging(config: &RunnerConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(config.log_level)
        .init();
    log::info!("logging at {} to {}", config.log_level, path.display());
    Ok(())
}
