//! Game loop task
//!
//! Runs on a 1 ms ticker. Every iteration the scheduler decides whether
//! the snake moves, the game restarts, or nothing happens. Each move is
//! one engine tick followed by one full frame.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use viper_core::config::{GameConfig, INITIAL_DIRECTION};
use viper_core::game::{Engine, TickOutcome};
use viper_core::scheduler::{LoopAction, Scheduler};
use viper_core::traits::PageDisplay;
use viper_display::Renderer;

use crate::channels::{BUTTON_PRESS, DIRECTION};
use crate::display::Panel;

/// Loop period in milliseconds
pub const TICK_INTERVAL_MS: u32 = 1;

/// Spacing between redraw attempts after a display failure
const REDRAW_RETRY_MS: u32 = 500;

/// Fresh food RNG; the seed depends on when the game starts
fn seeded_rng(salt: u64) -> SmallRng {
    SmallRng::seed_from_u64(Instant::now().as_ticks() ^ salt)
}

/// Game task - owns the engine, scheduler and renderer
#[embassy_executor::task]
pub async fn game_task(mut panel: Panel, config: GameConfig) {
    info!("Game task started");

    if let Err(e) = panel.init() {
        error!("Display init failed: {}", e);
    } else if let Err(e) = panel.set_contrast(config.contrast) {
        warn!("Setting contrast failed: {}", e);
    }

    let mut renderer = Renderer::new(panel);
    let mut engine = Engine::new(seeded_rng(config.seed_salt));
    let mut scheduler = Scheduler::new(config.move_delay_ms);

    DIRECTION.force(INITIAL_DIRECTION);
    let mut needs_redraw = renderer.draw_initial(engine.state()).is_err();
    let mut since_failure_ms: u32 = 0;

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS as u64));

    loop {
        ticker.next().await;

        let over = engine.is_over();
        let restart = over && BUTTON_PRESS.try_take().is_some_and(|s| s.any());

        match scheduler.poll(TICK_INTERVAL_MS, over, restart) {
            LoopAction::Wait => {
                if !needs_redraw {
                    continue;
                }
                since_failure_ms += TICK_INTERVAL_MS;
                if since_failure_ms < REDRAW_RETRY_MS {
                    continue;
                }
                since_failure_ms = 0;

                match renderer.recover(engine.state()) {
                    Ok(reinitialized) => {
                        needs_redraw = false;
                        if reinitialized {
                            info!("Display recovered");
                            if let Err(e) = renderer.display_mut().set_contrast(config.contrast) {
                                warn!("Setting contrast failed: {}", e);
                            }
                        }
                    }
                    Err(e) => warn!("Redraw failed: {}", e),
                }
            }
            LoopAction::Advance => {
                match engine.advance(DIRECTION.load()) {
                    TickOutcome::Ate { score } => info!("Food eaten, score {}", score),
                    TickOutcome::Collided => {
                        info!("Game over, score {}", engine.state().score());
                        // Only presses after the collision restart the game
                        BUTTON_PRESS.reset();
                    }
                    TickOutcome::Moved | TickOutcome::Halted => {}
                }

                if let Err(e) = renderer.draw_frame(engine.state()) {
                    warn!("Frame draw failed: {}", e);
                    needs_redraw = true;
                }
            }
            LoopAction::Reset => {
                engine.reseed(seeded_rng(config.seed_salt));
                engine.reset();
                DIRECTION.force(INITIAL_DIRECTION);
                info!("New game");

                if let Err(e) = renderer.draw_initial(engine.state()) {
                    warn!("Initial draw failed: {}", e);
                    needs_redraw = true;
                }
            }
        }
    }
}
