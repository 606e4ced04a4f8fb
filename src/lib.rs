//! Sokoban puzzle engine with a pure, engine-agnostic core.
//!
//! The [`core`] module is the contract: parse a textual level layout into a
//! [`core::GridState`], resolve moves with [`core::try_move`], check wins,
//! and drive level progression through [`core::GameSession`]. Everything in
//! it is synchronous, deterministic, and free of I/O. The console front-end
//! in [`console_interface`] is one consumer of that contract; any other
//! presentation layer plugs in the same way.

pub mod catalog;
pub mod console_interface;
pub mod core;
pub mod models;

#[cfg(test)]
mod test;
