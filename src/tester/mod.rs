//! Runs the built-in probes, timing each one and counting the failures.
use std::time::{Duration, Instant};

use log::debug;

use crate::{lexer, workspace};

/// A named check that takes no input and reports whether it held.
#[derive(Clone, Copy)]
pub struct Probe {
    pub name: &'static str,
    pub check: fn() -> bool,
}

/// Passing probes that take longer than this are still reported.
const MAX_DURATION: Duration = Duration::from_millis(5);

/// Every probe of the compiler.
pub fn all_probes() -> Vec<Probe> {
    let mut probes = workspace::probes();
    probes.extend(lexer::probes());
    probes
}

pub struct Tester {
    run_count: usize,
    failed_count: usize,
    started: Instant,
}

impl Default for Tester {
    fn default() -> Self {
        Self::new()
    }
}

impl Tester {
    pub fn new() -> Self {
        Self {
            run_count: 0,
            failed_count: 0,
            started: Instant::now(),
        }
    }

    /// Runs a probe, printing a line if it fails or is too slow. Returns
    /// whether it passed.
    pub fn run(&mut self, probe: &Probe) -> bool {
        self.run_count += 1;

        let started = Instant::now();
        let passed = (probe.check)();
        let duration = started.elapsed();
        debug!("Probe '{}' took {:?}", probe.name, duration);

        if passed && duration < MAX_DURATION {
            return true;
        }
        if !passed {
            self.failed_count += 1;
        }
        println!(
            "[{}] {} ({:.3} ms)",
            if passed { "TOO LONG" } else { "FAILED" },
            probe.name,
            milliseconds(duration)
        );
        passed
    }

    pub fn run_all(&mut self, probes: &[Probe]) {
        for probe in probes {
            self.run(probe);
        }
    }

    pub fn summary(&self) -> String {
        let outcome = if self.run_count == 0 {
            "No probe run!".to_string()
        } else if self.failed_count == 0 {
            "All probes passed.".to_string()
        } else {
            format!(
                "{}/{} of the probes failed!",
                self.failed_count, self.run_count
            )
        };
        format!("{} ({:.3} ms)", outcome, milliseconds(self.started.elapsed()))
    }

    /// Prints the summary and returns whether every probe passed.
    pub fn report(&self) -> bool {
        println!("{}", self.summary());
        self.failed_count == 0
    }
}

fn milliseconds(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_probes_pass() {
        let mut tester = Tester::new();
        tester.run_all(&all_probes());

        assert_eq!(tester.failed_count, 0, "{}", tester.summary());
        assert!(tester.run_count > 0);
    }

    #[test]
    fn failures_are_counted() {
        let mut tester = Tester::new();
        tester.run_all(&[
            Probe {
                name: "passes",
                check: || true,
            },
            Probe {
                name: "fails",
                check: || false,
            },
        ]);

        assert_eq!(tester.run_count, 2);
        assert_eq!(tester.failed_count, 1);
        assert!(tester.summary().starts_with("1/2 of the probes failed!"));
        assert!(!tester.report());
    }

    #[test]
    fn nothing_run_is_reported() {
        assert!(Tester::new().summary().starts_with("No probe run!"));
    }
}
