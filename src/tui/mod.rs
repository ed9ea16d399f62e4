//! TUI module for the interactive terminal interface.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: pure data types (App, UiState, Action, Transition)
//! - `update`: pure transitions
//! - `view` and `backdrop`: pure rendering
//! - `theme`: const style table
//! - `run`: the effects boundary (terminal, threads, event loop)

pub mod backdrop;
pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
