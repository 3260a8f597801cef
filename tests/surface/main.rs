//! Integration tests for Layer 1: Surface
//!
//! Tests for declaration identity and old/new snapshot matching.
