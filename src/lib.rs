//! Rules engine and move-selection AI for a simplified chess variant played
//! against the computer: no check or checkmate, no castling, no en passant.
//! The game ends when a king is captured or the side to move has no legal
//! moves.
//!
//! The rendering layer (scene graph, meshes, camera) lives elsewhere and
//! drives this crate through [`logic::game::GameSession`]: it forwards cell
//! clicks, schedules the AI's "thinking" delay, and reads the session state
//! back to draw the board.

pub mod engine;
pub mod logic;
