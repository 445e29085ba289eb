//! Simulation.
//!
//! This module contains utilities to evaluate the decoder by injecting bit
//! errors in random codewords.

pub mod ber;
pub mod channel;
