//! # Base types for quoridor
//!
//! This is an auxiliary crate for `quoridor`, which contains the core value types and board
//! geometry. It was split from the main crate to keep the rules engine free of plain data
//! definitions.
//!
//! Normally you don't want to use this crate directly. Use `quoridor` instead.

pub mod geometry;
pub mod markers;
pub mod types;
