// Library exports for the greedy Battlesnake
// This allows the replay tool and integration tests to use the decision engine directly

pub mod bot;
pub mod config;
pub mod debug_logger;
pub mod engine;
pub mod occupancy;
pub mod replay;
pub mod resolver;
pub mod safety;
pub mod target;
pub mod types;
