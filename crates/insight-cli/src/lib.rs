//! Library components for the `insight` command line tool.

pub mod logging;
pub mod run;
pub mod settings;
pub mod summary;
