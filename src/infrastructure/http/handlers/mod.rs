//! HTTP Handlers

mod gateway;

pub use gateway::*;
