//! Browser Capabilities
//!
//! Client-local side effects the editor calls into.

mod download;

pub use download::*;
