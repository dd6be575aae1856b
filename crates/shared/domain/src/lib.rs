//! # Domain Models
//!
//! This crate contains pure domain types with a single dependency (`serde`).
//! Keep it lean: plain data and small helpers, no I/O.
//!
//! * [`config`] holds the process configuration (bind address, probe tuning, logging).
//! * [`site`] holds the read-only site document every section is projected from.
//! * [`team`] holds the roster types, including the closed [`team::Role`] tag.

pub mod config;
pub mod constants;
pub mod site;
pub mod status;
pub mod team;
