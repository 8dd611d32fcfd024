//! Integration tests for sample import collection and artifact orchestration

mod config_integration;
mod orchestration;
mod sample_imports;
mod test_utils;
