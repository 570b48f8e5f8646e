//! Cross-module end-to-end tests.
//!
//! Everything here drives whole expression trees through a fresh
//! evaluator, the way the schema engine does at instance-validation time.

mod scenario_tests;
