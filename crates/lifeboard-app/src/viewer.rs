//! Interactive viewer for the Lifeboard simulation

use std::sync::Arc;

use anyhow::Result;
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

use lifeboard_core::{layout, Board, GenerationStats, LifeConfig, RenderError, Renderer};

use crate::pacing::FramePacer;
use crate::renderer::WgpuRenderer;

/// How often to log generation statistics, in generations
const STATS_EVERY: u64 = 50;

/// Run the interactive viewer until the window is closed or rendering fails
pub async fn run_viewer(config: LifeConfig) -> Result<()> {
    let event_loop = EventLoop::new()?;

    let canvas = config.display.canvas_size;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(format!(
                "{} | v{}",
                config.display.title,
                env!("CARGO_PKG_VERSION")
            ))
            .with_inner_size(LogicalSize::new(canvas, canvas))
            .with_resizable(false)
            .build(&event_loop)?,
    );

    let renderer = WgpuRenderer::new(window.clone(), &config.display).await?;
    layout::log_layout();

    let mut board = Board::seeded(
        config.world.dimension as usize,
        renderer,
        config.world.threshold,
        config.world.seed,
    )?;
    log::info!("Board ready, {} cells alive", board.population());

    let mut pacer = FramePacer::new(config.display.fps);

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            ref event,
            window_id,
        } if window_id == window.id() => match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                log::info!("Exiting after {} generations", board.generation());
                elwt.exit();
            }
            WindowEvent::Resized(physical_size) => {
                board.renderer_mut().resize(*physical_size);
            }
            _ => {}
        },
        Event::AboutToWait => {
            if pacer.tick() {
                let stats = match show_and_advance(&mut board) {
                    Ok(stats) => stats,
                    Err(e) => {
                        log::error!("Render error: {}", e);
                        elwt.exit();
                        return;
                    }
                };
                log::debug!(
                    "Generation {}: population {}, +{} -{}",
                    stats.generation,
                    stats.population,
                    stats.births,
                    stats.deaths
                );
                if stats.generation % STATS_EVERY == 0 {
                    log::info!(
                        "Generation {}: population {} ({:.1} gen/s)",
                        stats.generation,
                        stats.population,
                        pacer.fps()
                    );
                }
            }
            elwt.set_control_flow(ControlFlow::WaitUntil(pacer.deadline()));
        }
        _ => {}
    })?;

    Ok(())
}

/// Draw the current generation, then step the board to the next one
fn show_and_advance<R: Renderer>(board: &mut Board<R>) -> Result<GenerationStats, RenderError> {
    board.render()?;
    board.advance_generation();
    Ok(board.last_stats())
}
