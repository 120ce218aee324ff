//! Playing a game: turn sequencing, the time-boxed variant, and the
//! `Frontend` seam that supplies human decisions and receives events.

mod clock;
mod event;
mod frontend;
mod game;
mod timed;

pub use clock::{Clock, ManualClock, SystemClock};
pub use event::GameEvent;
pub use frontend::{Frontend, Recorder};
pub use game::{Game, TurnOutcome};
pub use timed::TimedGame;
