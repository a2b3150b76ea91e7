//! Scenario tests for CyberFlake generation and decoding


mod core_tests;
mod timestamp_tests;
