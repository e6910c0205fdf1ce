pub mod attacks;
pub mod constants;
pub mod engine;
pub mod error;
pub mod evaluation;
pub mod legality;
pub mod movegen;
pub mod outcome;
pub mod piece;
pub mod player;
pub mod position;
pub mod special;
pub mod square;
pub mod types;

#[cfg(feature = "api")]
pub mod api;
