//! Ciphertext-only recovery of three-rotor Enigma traffic.
//!
//! Given a ciphertext and one or more probable plaintext fragments
//! (cribs), the crate aligns each crib under the ciphertext, builds the
//! letter-correspondence menu for each placement, and runs a Bombe-style
//! contradiction search over wheel orders, ring settings, and rotor starts.
//! Surviving configurations are ranked by how English-like their decryption
//! is, and the best one wins.

pub mod analysis;
pub mod bombe;
pub mod enigma;
pub mod menu;
