//! City Drive Library
//!
//! A procedurally generated toy city with looping traffic that can run
//! independently or with a Bevy UI.

pub mod simulation;

#[cfg(feature = "ui")]
pub mod ui;
