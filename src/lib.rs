//! Castle Defender: hold the castle gate against endless enemy waves.
//!
//! The crate is the game itself, independent of any terminal or window.
//! The `castle_defender` binary wires it to a crossterm front end.

pub mod collision;
pub mod config;
pub mod constants;
pub mod context;
pub mod driver;
pub mod entities;
pub mod error;
pub mod input;
pub mod phase;
pub mod score;
pub mod surface;
pub mod wave;
