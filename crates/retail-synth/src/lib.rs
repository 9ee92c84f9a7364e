//! Weighted, seasonally-adjusted synthetic retail sales generation.

pub mod campaign;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod output;
pub mod record;
pub mod sampler;
pub mod seasonality;
pub mod session;
