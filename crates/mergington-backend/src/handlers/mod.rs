//! HTTP request handlers for the activities service.

pub mod activities;
pub mod health;
