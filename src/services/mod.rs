pub mod benchmark;
pub mod driver;
pub mod messages;
pub mod reporting;

#[cfg(test)]
mod driver_tests;
