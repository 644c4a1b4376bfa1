//! Line-protocol front end for the alpha-beta engine.

mod protocol;

pub use protocol::*;
