//! Core library for the Proof of Value calculator.
//!
//! Holds the fixed expense category dataset, the pure savings calculator,
//! the drill-down problem lists, the access gate, and the per-page state that
//! ties them together. Nothing in this crate performs I/O or keeps state
//! between calls; the server crate owns request handling and rendering.

pub mod calculator;
pub mod category;
pub mod error;
pub mod format;
pub mod gate;
pub mod page;
pub mod problems;
