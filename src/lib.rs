//! # Hamming toolbox
//!
//! `hamming_toolbox` builds systematic single error correcting binary linear
//! codes. Given a codeword length `n` and an information length `k`, it checks
//! the existence bounds for the code, builds the generator matrix `G = [I_k |
//! A]` and the parity check matrix `H = [Aᵗ | I_r]`, and encodes and decodes
//! words, correcting single bit errors by syndrome decoding.
//!
//! The construction pipeline is available through [`code::LinearCode`], and
//! each step can also be used on its own (see [`bounds`], [`generator`],
//! [`parity`], [`encoder`] and [`decoder`]).
//!
//! It can be used as a Rust library or as a CLI tool. See [`cli`] for
//! documentation about the usage of the CLI tool.

#![warn(missing_docs)]

pub mod bits;
pub mod bounds;
pub mod cli;
pub mod code;
pub mod decoder;
pub mod encoder;
pub mod generator;
pub mod gf2;
pub mod parity;
pub mod rand;
pub mod simulation;
