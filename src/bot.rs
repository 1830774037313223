// Battlesnake bot
//
// Glue between the HTTP endpoints and the decision engine. The bot holds only
// static configuration and the debug logger; every move is computed from the
// request payload alone.

use log::{info, warn};
use serde_json::{json, Value};
use std::time::Instant;

use crate::config::Config;
use crate::debug_logger::DebugLogger;
use crate::engine::{decide, BoardSnapshot, Decision, SnapshotError};
use crate::safety::MoveSafety;
use crate::types::{Battlesnake, Board, Game};

/// Battlesnake Bot with OOP-style API
/// Takes static configuration dependencies and exposes methods corresponding to API endpoints
pub struct Bot {
    config: Config,
    debug_logger: DebugLogger,
}

impl Bot {
    /// Creates a new Bot instance with debug logging disabled
    ///
    /// # Arguments
    /// * `config` - Static configuration that does not change during the bot's lifetime
    pub fn new(config: Config) -> Self {
        Bot {
            config,
            debug_logger: DebugLogger::disabled(),
        }
    }

    /// Attaches a debug logger that records every move
    pub fn with_debug_logger(mut self, debug_logger: DebugLogger) -> Self {
        self.debug_logger = debug_logger;
        self
    }

    /// Returns bot metadata and appearance
    /// Corresponds to GET / endpoint
    pub fn info(&self) -> Value {
        info!("INFO");

        let appearance = &self.config.appearance;
        json!({
            "apiversion": appearance.apiversion,
            "author": appearance.author,
            "color": appearance.color,
            "head": appearance.head,
            "tail": appearance.tail,
        })
    }

    /// Called when a game starts
    /// Corresponds to POST /start endpoint; legacy clients read the appearance from the reply
    pub fn start(&self, game: &Game, _turn: &i32, board: &Board, _you: &Battlesnake) -> Value {
        info!(
            "GAME START {} ({}x{}, timeout {}ms)",
            game.id, board.width, board.height, game.timeout
        );

        let appearance = &self.config.appearance;
        json!({
            "color": appearance.color,
            "headType": appearance.head,
            "tailType": appearance.tail,
        })
    }

    /// Called when a game ends
    /// Corresponds to POST /end endpoint
    pub fn end(&self, game: &Game, turn: &i32, _board: &Board, _you: &Battlesnake) {
        info!("GAME OVER {} after {} turns", game.id, turn);
    }

    /// Runs the decision engine on this turn's board
    pub fn choose_move(&self, board: &Board, you: &Battlesnake) -> Result<Decision, SnapshotError> {
        let snapshot = BoardSnapshot::from_turn(board, you);
        decide(&snapshot)
    }

    /// Computes and returns the next move
    /// Corresponds to POST /move endpoint
    ///
    /// # Returns
    /// * `Value` - JSON response containing the chosen move direction
    pub async fn get_move(&self, game: &Game, turn: &i32, board: &Board, you: &Battlesnake) -> Value {
        let start_time = Instant::now();

        let chosen_move = match self.choose_move(board, you) {
            Ok(decision) => {
                self.log_decision(*turn, &decision);
                decision.chosen
            }
            Err(e) => {
                let fallback = self.config.engine.malformed_fallback;
                warn!(
                    "Turn {}: malformed board ({}), answering {}",
                    turn,
                    e,
                    fallback.as_str()
                );
                fallback
            }
        };

        let elapsed_ms = start_time.elapsed().as_millis() as u64;
        if elapsed_ms > self.config.timing.effective_budget_ms() {
            warn!(
                "Turn {}: decision took {}ms, over the {}ms budget",
                turn,
                elapsed_ms,
                self.config.timing.effective_budget_ms()
            );
        }

        info!("Turn {}: Chose {} (time: {}ms)", turn, chosen_move.as_str(), elapsed_ms);

        self.debug_logger.log_move(&game.id, *turn, board, you, chosen_move);

        json!({ "move": chosen_move.as_str() })
    }

    fn log_decision(&self, turn: i32, decision: &Decision) {
        match decision.target {
            Some(target) => info!(
                "Turn {}: target food ({}, {}) at distance {}, preferred {}",
                turn,
                target.coord.x,
                target.coord.y,
                target.distance,
                decision.preferred.as_str()
            ),
            None => info!(
                "Turn {}: no reachable food, preferred {}",
                turn,
                decision.preferred.as_str()
            ),
        }

        match decision.safety {
            MoveSafety::Preferred => {}
            MoveSafety::Redirected => info!(
                "Turn {}: {} is blocked, redirected to {}",
                turn,
                decision.preferred.as_str(),
                decision.chosen.as_str()
            ),
            MoveSafety::Boxed => info!(
                "Turn {}: no safe direction, keeping {}",
                turn,
                decision.preferred.as_str()
            ),
        }
    }
}
