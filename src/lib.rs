// src/lib.rs

#[macro_use]
pub mod macros;

pub mod log;

pub mod cli;
pub mod params;

pub mod consolidate;
pub mod data;
pub mod dates;
pub mod fetch;
pub mod names;
pub mod net;
pub mod progress;
pub mod resolve;
pub mod roster;
pub mod runner;
pub mod store;
