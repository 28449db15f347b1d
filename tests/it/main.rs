//! Single test binary entry point.
//!
//! Structure:
//! - helpers: Scripted pointer sequences and assertions
//! - integration: Multi-component workflow tests
//! - unit: Single-component unit tests

mod helpers;
mod integration;
mod unit;
