//! `stockroom` binary internals: environment configuration and the
//! demonstration run, kept in a library so they can be tested.

pub mod config;
pub mod demo;

pub use config::Config;
