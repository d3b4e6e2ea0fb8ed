//! Integration tests for Layer 1: Storage
//!
//! Tests for the roster, the identity map, and the selection registry.

mod roster;
