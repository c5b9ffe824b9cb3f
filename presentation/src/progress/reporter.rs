//! Progress reporting for orchestration runs

use colored::Colorize;
use docquery_application::ports::progress::QueryProgress;
use docquery_domain::ResultSet;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports per-model progress with a progress bar
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryProgress for ProgressReporter {
    fn on_run_start(&self, total_models: usize) {
        let pb = ProgressBar::new(total_models as u64);
        pb.set_style(Self::bar_style());
        pb.set_prefix("Querying models");
        *self.bar.lock().unwrap() = Some(pb);
    }

    fn on_model_start(&self, key: &str) {
        if let Some(pb) = self.bar.lock().unwrap().as_ref() {
            pb.set_message(key.to_string());
        }
    }

    fn on_model_complete(&self, key: &str, success: bool) {
        if let Some(pb) = self.bar.lock().unwrap().as_ref() {
            let status = if success {
                format!("{} {}", "v".green(), key)
            } else {
                format!("{} {}", "x".red(), key)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_run_complete(&self, results: &ResultSet) {
        if let Some(pb) = self.bar.lock().unwrap().take() {
            pb.finish_with_message(format!(
                "{} ({} succeeded, {} failed)",
                "done".green(),
                results.successes().count(),
                results.failures().count()
            ));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl QueryProgress for SimpleProgress {
    fn on_run_start(&self, total_models: usize) {
        println!("{} Querying {} models", "->".cyan(), total_models);
    }

    fn on_model_start(&self, _key: &str) {}

    fn on_model_complete(&self, key: &str, success: bool) {
        if success {
            println!("  {} {}", "v".green(), key);
        } else {
            println!("  {} {} (failed)", "x".red(), key);
        }
    }

    fn on_run_complete(&self, _results: &ResultSet) {
        println!();
    }
}
