//! Unit tests for the project store, registry and intake gate.

mod domain_tests;
mod registry_tests;
