//! Session state for replaying one plan.
//!
//! The session owns the diagnostic buffer and threads it through the
//! parse pipeline and the scheduler, so every degradation the pipeline
//! recorded stays inspectable from the REPL.

use planreel_foundation::{DiagnosticBuffer, Error, Interner, Result};
use planreel_parser::{ActionLineMatcher, Dialect, LineFilter};
use planreel_replay::{MoverStatus, ReplayConfig, ReplayScheduler, ReplaySnapshot};
use planreel_timeline::{
    DurationEstimator, EntityRegistry, EstimatorConfig, PlanNormalizer, TimelineAssembler,
};

/// A loaded, replayable plan.
pub struct PlanSession {
    /// Replay configuration applied to every load.
    replay_config: ReplayConfig,
    /// Estimator configuration applied to every load.
    estimator_config: EstimatorConfig,
    /// Diagnostics from the most recent load and its replay.
    diagnostics: DiagnosticBuffer,
    /// The live scheduler, once a plan is loaded.
    scheduler: Option<ReplayScheduler>,
    /// Estimator of the most recent load (learned-table introspection).
    estimator: Option<DurationEstimator>,
    /// Label of the loaded source, for display.
    source_label: Option<String>,
}

impl PlanSession {
    /// Creates an empty session.
    #[must_use]
    pub fn new() -> Self {
        let replay_config = ReplayConfig::default();
        Self {
            replay_config,
            estimator_config: EstimatorConfig::default(),
            diagnostics: DiagnosticBuffer::new(replay_config.diagnostics_capacity),
            scheduler: None,
            estimator: None,
            source_label: None,
        }
    }

    /// Builder method to set the replay configuration.
    #[must_use]
    pub fn with_replay_config(mut self, config: ReplayConfig) -> Self {
        self.replay_config = config;
        self.diagnostics = DiagnosticBuffer::new(config.diagnostics_capacity);
        self
    }

    /// Builder method to set the estimator configuration.
    #[must_use]
    pub const fn with_estimator_config(mut self, config: EstimatorConfig) -> Self {
        self.estimator_config = config;
        self
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Parses plan text and builds a fresh replay for it.
    ///
    /// Non-fatal parse problems land in the diagnostic buffer; the replay
    /// is built from whatever survived.
    ///
    /// # Errors
    ///
    /// Returns an error only when the input is not a plan at all
    /// (domain/problem definition).
    pub fn load_text(&mut self, text: &str, dialect: Dialect, label: &str) -> Result<()> {
        self.diagnostics.clear();

        let lines = LineFilter::filter(text, dialect)?;
        let matched =
            ActionLineMatcher::new(dialect).match_lines(&lines, &mut self.diagnostics);

        let mut interner = Interner::new();
        let normalizer = PlanNormalizer::new(dialect).with_config(self.estimator_config);
        let (actions, estimator) =
            normalizer.normalize(&matched, &mut interner, &mut self.diagnostics);
        let timeline = TimelineAssembler::assemble(actions, dialect);
        let registry =
            EntityRegistry::build(&timeline, &interner, normalizer.extractor().lexicon());

        self.scheduler = Some(ReplayScheduler::new(
            timeline,
            registry,
            interner,
            self.replay_config,
            &mut self.diagnostics,
        ));
        self.estimator = Some(estimator);
        self.source_label = Some(label.to_string());
        Ok(())
    }

    /// Reads a plan file and loads it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the content is not
    /// a plan.
    pub fn load_file(&mut self, path: &std::path::Path, dialect: Dialect) -> Result<()> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("failed to read '{}': {e}", path.display())))?;
        self.load_text(&text, dialect, &path.display().to_string())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// True once a plan has been loaded.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.scheduler.is_some()
    }

    /// The live scheduler, if a plan is loaded.
    #[must_use]
    pub const fn scheduler(&self) -> Option<&ReplayScheduler> {
        self.scheduler.as_ref()
    }

    /// The live scheduler, mutably.
    pub fn scheduler_mut(&mut self) -> Option<&mut ReplayScheduler> {
        self.scheduler.as_mut()
    }

    /// Replaces the scheduler (snapshot restore).
    pub fn set_scheduler(&mut self, scheduler: ReplayScheduler, label: &str) {
        self.scheduler = Some(scheduler);
        self.estimator = None;
        self.source_label = Some(label.to_string());
    }

    /// The diagnostics recorded so far.
    #[must_use]
    pub const fn diagnostics(&self) -> &DiagnosticBuffer {
        &self.diagnostics
    }

    /// The estimator of the most recent load, for learned-table
    /// introspection.
    #[must_use]
    pub const fn estimator(&self) -> Option<&DurationEstimator> {
        self.estimator.as_ref()
    }

    /// The label of the loaded source.
    #[must_use]
    pub fn source_label(&self) -> Option<&str> {
        self.source_label.as_deref()
    }

    // =========================================================================
    // Replay control
    // =========================================================================

    /// Applies one step. Returns `false` when the replay has completed
    /// or nothing is loaded.
    pub fn step(&mut self) -> bool {
        let Some(scheduler) = self.scheduler.as_mut() else {
            return false;
        };
        scheduler.step(&mut self.diagnostics)
    }

    /// Engages auto-advance at the given rate.
    pub fn play(&mut self, rate: f64) {
        if let Some(scheduler) = self.scheduler.as_mut() {
            scheduler.play(rate, &mut self.diagnostics);
        }
    }

    /// Halts auto-advance.
    pub fn pause(&mut self) {
        if let Some(scheduler) = self.scheduler.as_mut() {
            scheduler.pause();
        }
    }

    /// Advances the presentation clock.
    pub fn tick(&mut self, dt: f64) {
        if let Some(scheduler) = self.scheduler.as_mut() {
            scheduler.advance(dt, &mut self.diagnostics);
        }
    }

    /// Discards replay state and re-seeds initial placements.
    pub fn reset(&mut self) {
        if let Some(scheduler) = self.scheduler.as_mut() {
            scheduler.reset(&mut self.diagnostics);
        }
    }

    /// A queryable snapshot of the replay.
    #[must_use]
    pub fn snapshot(&self) -> Option<ReplaySnapshot> {
        self.scheduler.as_ref().map(ReplayScheduler::snapshot)
    }

    // =========================================================================
    // Summaries
    // =========================================================================

    /// One-line replay status.
    #[must_use]
    pub fn status_summary(&self) -> String {
        let Some(scheduler) = self.scheduler.as_ref() else {
            return "no plan loaded".to_string();
        };
        let timeline = scheduler.timeline();
        format!(
            "{}: action {}/{} | clock {:.1}s | {} | makespan {:.1} | cost {:.1} | peak concurrency {}",
            self.source_label.as_deref().unwrap_or("<unnamed>"),
            scheduler.next_index(),
            timeline.len(),
            scheduler.clock(),
            if scheduler.is_completed() {
                "completed"
            } else if scheduler.is_playing() {
                "playing"
            } else {
                "paused"
            },
            timeline.makespan(),
            timeline.total_cost(),
            timeline.max_concurrency(),
        )
    }

    /// Formatted action table.
    #[must_use]
    pub fn timeline_summary(&self) -> String {
        let Some(scheduler) = self.scheduler.as_ref() else {
            return "no plan loaded".to_string();
        };
        let mut out = String::new();
        for (index, action) in scheduler.timeline().iter().enumerate() {
            let marker = if index < scheduler.next_index() {
                '*'
            } else {
                ' '
            };
            out.push_str(&format!(
                "{marker} {index:>4}  {:>8.1} -{:>8.1}  {:<11} {} {}\n",
                action.start,
                action.end,
                action.action_type.name(),
                scheduler.resolve(action.name),
                action.parameters.join(" "),
            ));
        }
        out
    }

    /// Formatted per-category entity summary with live state.
    #[must_use]
    pub fn entities_summary(&self) -> String {
        let Some(scheduler) = self.scheduler.as_ref() else {
            return "no plan loaded".to_string();
        };
        let mut out = String::new();

        out.push_str("movers:\n");
        for id in scheduler.registry().movers() {
            let record = scheduler.state().mover(id);
            let status = record.map_or(MoverStatus::Idle, |r| r.status);
            let location = record
                .and_then(|r| r.location)
                .map_or_else(|| "?".to_string(), |l| scheduler.resolve(l).to_string());
            let carrying: Vec<&str> = record
                .map(|r| r.carrying.iter().map(|&c| scheduler.resolve(c)).collect())
                .unwrap_or_default();
            out.push_str(&format!(
                "  {} @ {location} {status:?} carrying [{}]\n",
                scheduler.resolve(id),
                carrying.join(", "),
            ));
        }

        out.push_str("cargo:\n");
        for id in scheduler.registry().cargo_items() {
            let place = scheduler.state().cargo(id).map_or_else(
                || "?".to_string(),
                |r| {
                    r.location().map_or_else(
                        || {
                            format!(
                                "aboard {}",
                                r.carrier().map_or("?", |c| scheduler.resolve(c))
                            )
                        },
                        |l| format!("at {}", scheduler.resolve(l)),
                    )
                },
            );
            out.push_str(&format!("  {} {place}\n", scheduler.resolve(id)));
        }

        out.push_str("locations:\n");
        for id in scheduler.registry().locations() {
            let kind = scheduler
                .registry()
                .location_kind(id)
                .map_or("", |k| match k {
                    planreel_timeline::LocationKind::TransitHub => " (hub)",
                    planreel_timeline::LocationKind::Waypoint => "",
                });
            out.push_str(&format!("  {}{kind}\n", scheduler.resolve(id)));
        }

        out
    }
}

impl Default for PlanSession {
    fn default() -> Self {
        Self::new()
    }
}
