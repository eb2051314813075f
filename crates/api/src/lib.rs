//! HTTP API: the remote-access facade in front of the rental companies.

pub mod app;
pub mod bootstrap;
pub mod config;
pub mod middleware;
