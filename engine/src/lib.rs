pub mod circuit;
pub mod components;
pub mod error;
pub mod table;
pub mod types;
pub mod update_ops;
pub mod utils;

pub use circuit::MultiplexerState;
pub use error::{MuxError, Result};
pub use types::{ChannelIndex, LineId, Transition};
