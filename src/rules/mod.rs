//! Rules of Pig that are independent of turn sequencing:
//! - What a decision is and how it is parsed
//! - The computer player's fixed policy
//! - How a finished game is scored

pub mod decision;
pub mod engine;

pub use decision::{computer_decision, Decision};
pub use engine::GameResult;
