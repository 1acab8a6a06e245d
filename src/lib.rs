//! Single-screen counter and text echo, driven from the terminal.
//!
//! The behavior lives in [`view_model::CounterEcho`]; everything under
//! [`ui`] is the presentation layer that turns key presses into view-model
//! calls and draws the resulting projection.

pub mod cli;
pub mod config;
pub mod logging;
pub mod ui;
pub mod view_model;
