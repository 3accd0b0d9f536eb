//! Support library for the smiley CLI binary.
//!
//! Re-exports the command and logging modules so doctests and integration
//! tests can exercise the generator without forking a subprocess.

pub mod cli;
pub mod logging;
