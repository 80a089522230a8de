//! Referee wire protocol
//!
//! Input and output halves of the blocking line protocol. The reader
//! produces typed snapshots, the writer formats commands; neither side
//! makes decisions.

pub mod input;
pub mod output;

pub use input::{GameSetup, MapFeature, ProtocolReader};
pub use output::CommandWriter;
