//! Comfort Check - Guided Home-Loan Affordability Self-Assessment
//!
//! This crate implements a conversational, multi-step comfort check for
//! home-loan affordability: financial inputs, a soft eligibility estimate,
//! illustrative loan options, an income-dip stress scenario, and a
//! confidence checkpoint before handing off to a human advisor.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
