//! Console output for a converter run: one line per result, then the summary block.

use kdam::Animation;

use crate::convert::RunEvent;
use crate::engine::progress::{
    ProgressBar, ProgressBarConfig, create_progress_bar, finish_progress_bar, print_line,
    update_progress_bar,
};
use crate::utils::Colors;
use crate::{ConversionResult, RunSummary};

/// Streams results to stdout as they arrive, optionally under a progress bar.
#[derive(Default)]
pub struct ConsoleReporter {
    show_progress: bool,
    bar: Option<ProgressBar>,
}

impl ConsoleReporter {
    pub fn new(show_progress: bool) -> Self {
        Self {
            show_progress,
            bar: None,
        }
    }

    pub fn on_event(&mut self, event: &RunEvent) {
        match event {
            RunEvent::Started { total, .. } => {
                if self.show_progress {
                    self.bar = Some(create_progress_bar(ProgressBarConfig::new(
                        *total,
                        "Converting",
                        Animation::Classic,
                    )));
                }
            }
            RunEvent::Converted(result) => {
                print_line(self.bar.as_ref(), &result_line(result));
                if let Some(bar) = &self.bar {
                    update_progress_bar(bar, 1);
                }
            }
        }
    }

    pub fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            finish_progress_bar(&bar);
        }
    }
}

/// Colored result line.
pub fn result_line(result: &ConversionResult) -> String {
    let color = if result.is_success() {
        Colors::SUCCESS
    } else {
        Colors::FAILURE
    };
    Colors::colorize(color, &result.message()).to_string()
}

/// The four labeled summary lines, plain text.
pub fn summary_lines(summary: &RunSummary) -> [String; 4] {
    [
        format!("Successfully converted: {}", summary.succeeded),
        format!("Failed to convert:     {}", summary.failed),
        format!("Total files processed: {}", summary.total),
        format!(
            "Total time taken:      {:.2} seconds",
            summary.elapsed.as_secs_f64()
        ),
    ]
}

pub fn print_summary(summary: &RunSummary) {
    println!();
    println!(
        "{}",
        Colors::colorize(Colors::HEADING, "--- Conversion Summary ---")
    );
    for line in summary_lines(summary) {
        println!("{}", line);
    }
}
