//! Integration tests for Layer 2: Resolver
//!
//! Tests for resolver chains, the built-in resolvers, and configurer
//! loading.

mod chains;
