//! Object integration tests
//!
//! Covers key path lookup and assignment, the owned KeyPath type, and mixin.

mod mixin_tests;
