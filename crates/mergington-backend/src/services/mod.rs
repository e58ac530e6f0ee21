//! Backend services for the activity roster.
//!
//! This module provides the service layer abstraction and implementation
//! for managing activities and their participants. Currently includes an
//! in-memory implementation; state resets on process restart.

pub mod activities;

pub use activities::*;
