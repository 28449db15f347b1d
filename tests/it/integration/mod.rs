//! Integration tests for FloatCam.
//!
//! These drive the pointer tracker (surface plus capture) through complete
//! press/move/release sequences.

mod drag_workflow_tests;
