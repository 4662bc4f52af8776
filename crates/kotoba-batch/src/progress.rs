/// Observer interface for a host UI driving a batch run. All calls happen
/// synchronously on the pipeline's thread, so implementations must not block.
pub trait ProgressReporter: Send + Sync {
    /// Fraction of tokens processed so far, in `[0, 1]`.
    fn progress(&self, fraction: f64);

    /// The word a lookup is about to run for.
    fn set_current_word(&self, word: &str);

    /// Called once when the run finishes.
    fn clear_current_word(&self);
}

/// Reporter that ignores every event.
pub struct NullReporter;

impl ProgressReporter for NullReporter {
    fn progress(&self, _fraction: f64) {}
    fn set_current_word(&self, _word: &str) {}
    fn clear_current_word(&self) {}
}
