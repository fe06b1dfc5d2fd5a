//! Unit test harness for the domain crate.

mod kind_tests;
mod report_tests;
