//! Status spinner that becomes a no-op when the `progress` feature is disabled

#[cfg(feature = "progress")]
pub use self::bar::Spinner;

#[cfg(not(feature = "progress"))]
pub use self::noop::Spinner;

#[cfg(feature = "progress")]
mod bar {
    use indicatif::{ProgressBar, ProgressStyle};
    use std::time::Duration;

    /// Single-line spinner on stderr, hidden when `silent`
    pub struct Spinner {
        bar: Option<ProgressBar>,
    }

    impl Spinner {
        pub fn start(silent: bool, message: String) -> Self {
            let bar = (!silent).then(|| {
                let spinner = ProgressBar::new_spinner();
                spinner.set_style(
                    ProgressStyle::default_spinner()
                        .template("{spinner:.cyan} {msg}")
                        .unwrap_or_else(|_| ProgressStyle::default_spinner()),
                );
                spinner.set_message(message);
                spinner.enable_steady_tick(Duration::from_millis(80));
                spinner
            });
            Self { bar }
        }

        pub fn message(&self, message: String) {
            if let Some(bar) = &self.bar {
                bar.set_message(message);
            }
        }

        pub fn finish(self, message: String) {
            if let Some(bar) = self.bar {
                bar.finish_with_message(message);
            }
        }
    }
}

#[cfg(not(feature = "progress"))]
mod noop {
    /// No-op spinner when `progress` feature is disabled
    pub struct Spinner;

    impl Spinner {
        pub fn start(_silent: bool, _message: String) -> Self {
            Spinner
        }

        pub fn message(&self, _message: String) {}

        pub fn finish(self, _message: String) {}
    }
}
