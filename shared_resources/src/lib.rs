pub mod config;
pub mod elevator_move;
pub mod error;
pub mod index_base;
pub mod selector;
pub mod state;

pub use elevator_move::Move;
pub use error::{ConfigError, MoveError};
pub use index_base::IndexBase;
pub use selector::{compute_next_move, MoveSelector, RandomMoveSelector};
pub use state::{ElevatorState, FloorState};
