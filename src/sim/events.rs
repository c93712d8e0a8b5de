//! Post-tick notifications
//!
//! The tick only records what happened. Hosts drain the queue after the tick
//! returns, or let [`Listeners`] receive it through `Engine::dispatch_events`.

use serde::{Deserialize, Serialize};

/// Something the presentation layer may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Flyer cleared an obstacle
    ObstaclePassed { id: u64, precise: bool },
    /// Flyer picked up a collectible
    CollectibleTaken { id: u64 },
    /// Run ended by a collision
    GameOver { final_score: u64 },
}

type GameOverFn = Box<dyn FnMut(u64)>;
type PickupFn = Box<dyn FnMut()>;

/// Optional callbacks for game-over and pickup events
#[derive(Default)]
pub struct Listeners {
    on_game_over: Option<GameOverFn>,
    on_pickup: Option<PickupFn>,
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("on_game_over", &self.on_game_over.is_some())
            .field("on_pickup", &self.on_pickup.is_some())
            .finish()
    }
}

impl Listeners {
    pub fn set_game_over(&mut self, f: impl FnMut(u64) + 'static) {
        self.on_game_over = Some(Box::new(f));
    }

    pub fn set_pickup(&mut self, f: impl FnMut() + 'static) {
        self.on_pickup = Some(Box::new(f));
    }

    /// Deliver one event to whichever callback wants it
    pub fn notify(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::GameOver { final_score } => {
                if let Some(f) = self.on_game_over.as_mut() {
                    f(final_score);
                }
            }
            GameEvent::CollectibleTaken { .. } => {
                if let Some(f) = self.on_pickup.as_mut() {
                    f();
                }
            }
            GameEvent::ObstaclePassed { .. } => {}
        }
    }
}
