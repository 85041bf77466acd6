pub use board::*;
pub use catalog::*;
pub use errors::*;
pub use game::*;
pub use patch::*;
pub use player::*;
pub use protocol::*;
pub use queue::*;
pub use shape::*;
pub use time_track::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod catalog;
mod errors;
mod game;
mod patch;
mod player;
mod protocol;
mod queue;
mod shape;
mod time_track;
mod visualization;
