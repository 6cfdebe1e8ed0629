//! Per-generation progress hooks.

use std::io::{self, Write};

/// Receives the average fitness of every generation before it is replaced.
pub trait GenerationObserver {
    /// `generation` is 1-based.
    fn on_generation(&mut self, generation: usize, average_fitness: f64);
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl GenerationObserver for NoopObserver {
    fn on_generation(&mut self, _generation: usize, _average_fitness: f64) {}
}

impl<F: FnMut(usize, f64)> GenerationObserver for F {
    fn on_generation(&mut self, generation: usize, average_fitness: f64) {
        self(generation, average_fitness)
    }
}

/// Writes one human-readable line per generation, followed by a separator.
///
/// ```text
/// Generation 1: Average Fitness = 85
/// --------------------------------------------------
/// ```
///
/// After the first failed write the reporter stops writing and stays silent.
pub struct ConsoleReporter<W: Write = io::Stdout> {
    out: W,
    failed: bool,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, failed: false }
    }

    /// Whether a write has failed (later generations are not reported).
    pub fn has_failed(&self) -> bool {
        self.failed
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> GenerationObserver for ConsoleReporter<W> {
    fn on_generation(&mut self, generation: usize, average_fitness: f64) {
        if self.failed {
            return;
        }
        let written = writeln!(
            self.out,
            "Generation {generation}: Average Fitness = {average_fitness}"
        )
        .and_then(|_| writeln!(self.out, "{}", "-".repeat(50)));
        // A closed pipe must not abort the search.
        if let Err(err) = written {
            self.failed = true;
            tracing::warn!(%err, generation, "failed to write progress line, reporting disabled");
        }
    }
}
