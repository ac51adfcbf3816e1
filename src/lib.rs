//! WPT What-If - risk scoring for wireless-power-transfer charging
//!
//! This crate scores a charging operating point (coil misalignment, charge
//! rate, temperature, load) into a GREEN / AMBER / RED band, sweeps that score
//! across coil misalignment, and serves both over HTTP with per-entity
//! baselines drawn from an audience-partitioned entity store.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
