//! Persistence bootstrap for the MediSched clinic appointment service.
//!
//! This crate brings the relational schema to the latest version and then
//! populates it with a referentially valid baseline dataset. It runs once at
//! process startup, before the hosting layer begins accepting requests, and
//! is safe to re-run: migrations are applied exactly once and every seed step
//! skips itself when its table already holds rows.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod seed;
pub mod startup;
