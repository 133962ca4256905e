pub mod config;
pub mod config_flow;
pub mod controller;
pub mod error;
pub mod integration;
pub mod protocol;
pub mod setup;
pub mod unit;
