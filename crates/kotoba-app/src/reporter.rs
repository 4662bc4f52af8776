use std::io::{self, Write};
use std::sync::Mutex;

use kotoba_batch::ProgressReporter;

/// Draws a single rewriting status line on stderr while the batch runs.
/// Falls back to debug logging when stderr is not a terminal.
pub struct ConsoleReporter {
    interactive: bool,
    current: Mutex<String>,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            interactive: atty::is(atty::Stream::Stderr),
            current: Mutex::new(String::new()),
        }
    }

    fn redraw(&self, fraction: f64) {
        let current = self.current.lock().unwrap();
        eprint!("\r\x1b[2K{} {:>5.1}%", current, fraction * 100.0);
        let _ = io::stderr().flush();
    }
}

impl ProgressReporter for ConsoleReporter {
    fn progress(&self, fraction: f64) {
        if self.interactive {
            self.redraw(fraction);
        }
    }

    fn set_current_word(&self, word: &str) {
        tracing::debug!("checking {word}");
        *self.current.lock().unwrap() = word.to_string();
    }

    fn clear_current_word(&self) {
        if self.interactive {
            eprint!("\r\x1b[2K");
            let _ = io::stderr().flush();
        }
        self.current.lock().unwrap().clear();
    }
}
