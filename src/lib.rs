//! # Ulysses
//!
//! Payload encoding for Ulysses omnichain execution: Virtual Account derivation, agent calldata
//! builders, action wrapping and multi-hop step planning.

pub mod account;
pub mod action;
pub mod agents;
pub mod chains;
pub mod codec;
pub mod config;
pub mod constants;
pub mod context;
pub mod error;
pub mod planner;
pub mod types;
