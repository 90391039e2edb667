//! Test module for determinism, integration and property tests.
//!
//! - `determinism.rs`: same seed, same game
//! - `integration.rs`: full games through [`crate::Game`]
//! - `properties.rs`: `proptest` checks of the combat and mission rules
//! - `helpers.rs`: factories shared by the above

mod helpers;
mod properties;
