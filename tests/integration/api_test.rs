//! API endpoint integration tests
//!
//! Drives the composed router over mock services and the in-memory store.

#![allow(dead_code)]

mod artifacts;
mod common;
mod health;
