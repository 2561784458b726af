use crate::config::ScanConfig;
use crate::input::{InputSource, LoadedInput};
use crate::parser::parse_ranges;
use crate::scanner::RangeScanner;
use crate::types::*;
use anyhow::Result;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::debug;

/// Wall-clock time spent in one named pipeline step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepTiming {
    pub name: String,
    pub elapsed: Duration,
}

/// Step timings collected by a [`StepProfiler`]. `Display` renders the
/// table printed by `--profile`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileSummary {
    pub steps: Vec<StepTiming>,
    pub total: Duration,
}

impl ProfileSummary {
    fn from_steps(steps: &[StepTiming]) -> Self {
        Self {
            steps: steps.to_vec(),
            total: steps.iter().map(|step| step.elapsed).sum(),
        }
    }

    /// Percentage of the total spent in `step`, 0 when nothing measurable ran.
    pub fn share(&self, step: &StepTiming) -> f64 {
        if self.total.is_zero() {
            return 0.0;
        }
        step.elapsed.as_secs_f64() * 100.0 / self.total.as_secs_f64()
    }
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1_000.0
}

impl fmt::Display for ProfileSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const TOTAL: &str = "Total";
        let width = self
            .steps
            .iter()
            .map(|step| step.name.len())
            .chain([TOTAL.len()])
            .max()
            .unwrap_or(TOTAL.len());

        writeln!(f, "Performance Summary:")?;
        for step in &self.steps {
            writeln!(
                f,
                "  {:<width$}  {:>10.3} ms  {:>5.1}%",
                step.name,
                millis(step.elapsed),
                self.share(step)
            )?;
        }
        write!(f, "  {:<width$}  {:>10.3} ms", TOTAL, millis(self.total))
    }
}

/// Optional timer around pipeline steps. A disabled profiler just runs the
/// closures.
pub struct StepProfiler {
    steps: Option<Vec<StepTiming>>,
}

impl StepProfiler {
    pub fn new(enabled: bool) -> Self {
        Self {
            steps: enabled.then(Vec::new),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.steps.is_some()
    }

    pub fn time_step<R>(&mut self, name: &str, step: impl FnOnce() -> R) -> R {
        let Some(steps) = self.steps.as_mut() else {
            return step();
        };

        let started = Instant::now();
        let result = step();
        let elapsed = started.elapsed();

        debug!("{name} took {:.3}ms", millis(elapsed));
        steps.push(StepTiming {
            name: name.to_string(),
            elapsed,
        });
        result
    }

    pub fn steps(&self) -> &[StepTiming] {
        self.steps.as_deref().unwrap_or_default()
    }

    /// `None` when profiling is off or no step has run yet.
    pub fn summary(&self) -> Option<ProfileSummary> {
        match self.steps.as_deref() {
            Some(steps) if !steps.is_empty() => Some(ProfileSummary::from_steps(steps)),
            _ => None,
        }
    }
}

/// Load → parse → scan for one configured run.
pub struct IdProcessor {
    config: ScanConfig,
    scanner: RangeScanner,
}

impl IdProcessor {
    pub fn new(config: ScanConfig) -> Self {
        let scanner = RangeScanner::new(config.parallel);
        Self { config, scanner }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan the configured input file, falling back to the configured default text.
    pub fn process(&self) -> Result<ScanReport> {
        self.process_with_profiler(&mut StepProfiler::new(false))
    }

    pub fn process_with_profiler(&self, profiler: &mut StepProfiler) -> Result<ScanReport> {
        let loaded = self.load_input(profiler)?;
        self.process_loaded(loaded, profiler)
    }

    /// Read the configured input (or its fallback) without parsing it.
    pub fn load_input(&self, profiler: &mut StepProfiler) -> Result<LoadedInput> {
        let source = InputSource::from_arg(&self.config.input_file);
        profiler.time_step("Load input", || source.load(&self.config.fallback_input))
    }

    /// Scan text supplied directly by the caller.
    pub fn process_text(&self, text: &str) -> Result<ScanReport> {
        let loaded = LoadedInput {
            text: text.to_string(),
            origin: InputOrigin::Inline,
        };
        self.process_loaded(loaded, &mut StepProfiler::new(false))
    }

    /// Parse and scan input that has already been loaded.
    pub fn process_loaded(
        &self,
        loaded: LoadedInput,
        profiler: &mut StepProfiler,
    ) -> Result<ScanReport> {
        let parsed = profiler.time_step("Parse ranges", || parse_ranges(&loaded.text));
        let tally = profiler.time_step("Scan ranges", || self.scanner.scan(&parsed.ranges))?;

        debug!(
            "Scanned {} IDs across {} ranges",
            tally.stats.ids_scanned, tally.stats.ranges_scanned
        );

        Ok(ScanReport {
            origin: loaded.origin,
            totals: tally.totals,
            stats: tally.stats,
            skipped: parsed.skipped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiler_disabled_records_nothing() {
        let mut profiler = StepProfiler::new(false);
        let value = profiler.time_step("noop", || 42);
        assert_eq!(value, 42);
        assert!(!profiler.is_enabled());
        assert!(profiler.steps().is_empty());
        assert!(profiler.summary().is_none());
    }

    #[test]
    fn test_profiler_summary_lists_steps_in_order() {
        let mut profiler = StepProfiler::new(true);
        assert!(profiler.summary().is_none());
        profiler.time_step("first", || ());
        profiler.time_step("second", || ());

        let summary = profiler.summary().unwrap();
        let names: Vec<&str> = summary.steps.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(
            summary.total,
            summary.steps.iter().map(|s| s.elapsed).sum::<Duration>()
        );

        let rendered = summary.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Performance Summary:");
        assert!(lines[1].trim_start().starts_with("first"));
        assert!(lines[3].trim_start().starts_with("Total"));
    }

    #[test]
    fn test_summary_shares_split_the_total() {
        let summary = ProfileSummary::from_steps(&[
            StepTiming {
                name: "load".to_string(),
                elapsed: Duration::from_millis(30),
            },
            StepTiming {
                name: "scan".to_string(),
                elapsed: Duration::from_millis(90),
            },
        ]);

        assert_eq!(summary.total, Duration::from_millis(120));
        assert!((summary.share(&summary.steps[0]) - 25.0).abs() < 1e-9);
        assert!((summary.share(&summary.steps[1]) - 75.0).abs() < 1e-9);

        let rendered = summary.to_string();
        assert!(rendered.contains("load       30.000 ms   25.0%"));
        assert!(rendered.contains("Total     120.000 ms"));
    }

    #[test]
    fn test_summary_share_of_zero_total_is_zero() {
        let step = StepTiming {
            name: "instant".to_string(),
            elapsed: Duration::ZERO,
        };
        let summary = ProfileSummary::from_steps(std::slice::from_ref(&step));
        assert_eq!(summary.share(&step), 0.0);
    }

    #[test]
    fn test_process_text_reports_skipped_tokens() {
        let processor = IdProcessor::new(ScanConfig::default());
        let report = processor.process_text("11-11, abc-def, 50-hashdahs").unwrap();

        assert_eq!(report.origin, InputOrigin::Inline);
        assert_eq!(report.totals, Totals::new(11, 11));
        assert_eq!(report.stats.ranges_scanned, 1);
        assert_eq!(report.skipped.len(), 2);
    }

    #[test]
    fn test_process_missing_file_uses_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let config = ScanConfig {
            input_file: dir.path().join("input.txt").display().to_string(),
            fallback_input: "12-10".to_string(),
            parallel: false,
        };

        let mut profiler = StepProfiler::new(true);
        let report = IdProcessor::new(config).process_with_profiler(&mut profiler).unwrap();

        assert!(report.origin.used_fallback());
        assert_eq!(report.totals, Totals::new(11, 11));
        assert_eq!(profiler.steps().len(), 3);
    }

    #[test]
    fn test_load_input_reports_origin_before_scanning() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ranges.txt");
        std::fs::write(&path, "11-11, abc-def").unwrap();
        let processor = IdProcessor::new(ScanConfig {
            input_file: path.display().to_string(),
            ..ScanConfig::default()
        });

        let mut profiler = StepProfiler::new(true);
        let loaded = processor.load_input(&mut profiler).unwrap();
        assert_eq!(loaded.origin, InputOrigin::File { path: path.clone() });
        assert_eq!(profiler.steps().len(), 1);

        let report = processor.process_loaded(loaded, &mut profiler).unwrap();
        assert_eq!(report, processor.process().unwrap());
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(profiler.steps().len(), 3);
    }
}
