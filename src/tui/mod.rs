//! TUI module for the interactive terminal interface.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: pure data types (Screen, Action, Transition)
//! - `update`: transitions
//! - `view`: pure rendering
//! - `theme`: style constants
//! - `run`: effects (terminal, event loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
