use indicatif::{ProgressBar, ProgressStyle};

/// Receives the progress of a run.
///
/// Implementations print to stderr only, so that stdout carries nothing but the generated code.
pub trait Reporter {
    fn stage(&self, message: &str);
    fn finish(&self, message: &str);
    fn fail(&self, message: &str);
}

/// Reporter for quiet runs.
pub struct NoopReporter;

impl Reporter for NoopReporter {
    fn stage(&self, _: &str) {}
    fn finish(&self, _: &str) {}
    fn fail(&self, _: &str) {}
}

/// Shows a spinner on a terminal, or one line per message otherwise.
///
/// The spinner has no ticker of its own: it only advances when a stage begins, never while a
/// stage is running.
pub struct SpinnerReporter {
    bar: ProgressBar,
}

impl SpinnerReporter {
    pub fn new() -> Self {
        Self::with_bar(ProgressBar::new_spinner())
    }

    fn with_bar(bar: ProgressBar) -> Self {
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg:.cyan}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        Self { bar }
    }
}

impl Default for SpinnerReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for SpinnerReporter {
    fn stage(&self, message: &str) {
        if self.bar.is_hidden() {
            eprintln!("{message}");
        } else {
            self.bar.set_message(message.to_owned());
            self.bar.tick();
        }
    }

    fn finish(&self, message: &str) {
        if self.bar.is_hidden() {
            eprintln!("{message}");
        }
        self.bar.finish_with_message(message.to_owned());
    }

    fn fail(&self, message: &str) {
        if self.bar.is_hidden() {
            eprintln!("{message}");
        }
        self.bar.abandon_with_message(message.to_owned());
    }
}
