//! Linear Analysis
//!
//! Σ0, Σ1, σ0 and σ1 are XORs of rotations and shifts: linear maps over
//! GF(2)^32. This module recovers their matrices, inverts them, and checks
//! the inverses in bulk. It is independent of the block pipeline.

pub mod inverter;
pub mod matrix;
pub mod roundtrip;

pub use inverter::{LinearInverter, WordFn};
pub use matrix::{BitVector32, Matrix32};
pub use roundtrip::{verify_round_trips, RoundTripReport, RoundTripSummary};
