//! Integration test modules

mod name_index;
mod tamper_detection;
