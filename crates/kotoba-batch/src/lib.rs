pub mod output;
pub mod progress;
pub mod runner;
pub mod tokenize;

pub use progress::{NullReporter, ProgressReporter};
pub use runner::{BatchError, BatchReport, run};
