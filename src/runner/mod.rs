mod test_runner;

pub use test_runner::{ResponseBody, SIMULATED_LATENCY, TestResult, TestRunner};
