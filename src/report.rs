use crate::writer::WriteOutcome;
use std::fmt;

/// Counts of a finished write phase. `skipped` is always `total_planned - written`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total_planned: usize,
    pub written: usize,
    pub skipped: usize,
}
impl RunSummary {
    pub fn from_outcomes<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = WriteOutcome>,
    {
        let mut total_planned = 0;
        let mut written = 0;

        for outcome in outcomes {
            total_planned += 1;
            if outcome.is_written() {
                written += 1;
            }
        }

        Self {
            total_planned,
            written,
            skipped: total_planned - written,
        }
    }
    /// Summary line with a caller-chosen label, e.g. `Files written: 2, skipped: 0`.
    pub fn line(&self, label: &str) -> String {
        format!("{} written: {}, skipped: {}", label, self.written, self.skipped)
    }
}
impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.line("Files"))
    }
}

/// Prints the `generate` report.
pub fn print_generation(summary: &RunSummary) {
    println!("Generation complete.");
    println!("{}", summary);
}

/// Prints the `scaffold` report. The templates line only appears when templates were requested.
pub fn print_scaffold(templates: Option<&RunSummary>) {
    println!("Scaffold complete.");
    if let Some(summary) = templates {
        println!("{}", summary.line("Templates"));
    }
}
