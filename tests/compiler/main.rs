//! Integration tests for Layer 3: Compiler
//!
//! Tests for handler-binding compilation and grammar-tree registration.

mod registration;
