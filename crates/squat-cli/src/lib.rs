//! Squat CLI library.
//!
//! Input resolution, command implementations and log setup for the `squat`
//! binary, which stands in for the interactive front end: it gathers pose
//! inputs, evaluates the model once, and renders the result as text or JSON.

pub mod commands;
pub mod input;
pub mod logging;
