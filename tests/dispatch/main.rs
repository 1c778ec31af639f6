//! Integration tests for Layer 4: Dispatch
//!
//! Tests for runtime argument resolution and exception routing.

mod execution;
