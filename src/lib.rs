//! interview-prep: practice mock interview questions in the terminal.

pub mod bank;
pub mod board;
pub mod card;
pub mod error;
pub mod feedback;
pub mod logging;
pub mod report;
pub mod session;
pub mod tui;
pub mod types;
