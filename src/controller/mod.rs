//! Match control: the turn protocol and the solo manager that wires it.
//!
//! - `turn`: `TurnController`, the roll/move/confirm/undo state machine
//! - `manager`: `SoloGameManager`, match setup and the request surface
//! - `reply`: serializable reply records for the messaging layer

pub mod turn;
pub mod manager;
pub mod reply;

pub use turn::{TurnController, TurnPhase};
pub use manager::SoloGameManager;
pub use reply::{ConfirmEvent, MoveReply, RollReply, TurnEvent, UndoReply};
