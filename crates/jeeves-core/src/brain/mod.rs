//! Jeeves' brain: hearing, research, reactions, routines and the motor that
//! ties them together.

mod hearing;
mod motor;
mod reaction;
mod research;
mod routine;

pub use hearing::Hearing;
pub use motor::Motor;
pub use reaction::{Reactions, APOLOGY};
pub use research::Research;
pub use routine::{Routine, RoutineDispatcher};
