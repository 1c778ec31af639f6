//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: ArgValue, Sender, exception types, and
//! invocation contexts.

mod senders;
mod values;
