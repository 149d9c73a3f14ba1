//! Weather panel - current-weather lookup for the terminal
//!
//! This library exposes the panel's modules for the binary and for testing.

pub mod action;
pub mod api;
pub mod clock;
pub mod components;
pub mod config;
pub mod effect;
pub mod error;
pub mod icons;
pub mod reducer;
pub mod state;
