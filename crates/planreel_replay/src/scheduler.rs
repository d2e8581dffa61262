//! The replay scheduler.
//!
//! Drives one logical clock over the assembled timeline:
//!
//! 1. `reset()` seeds every entity's initial placement from timeline
//!    evidence (deterministic fallback to the first registered location).
//! 2. `step()` commits the action at the current index as an immediate,
//!    transactional transition. Violated preconditions are
//!    force-corrected to the action's intent with a diagnostic, never a
//!    failure.
//! 3. `play(rate)` auto-advances: each subsequent `step()` fires after
//!    the just-applied action's duration divided by the rate.
//! 4. `advance(dt)` is the only time input; the external tick source is
//!    out of scope. A paused scheduler ignores ticks, so frozen
//!    in-transit progress is retained.
//!
//! Per-mover ordering: an action for a mover forcibly completes that
//! mover's previous action first, so timeline order per mover is
//! preserved while different movers stay in flight concurrently.
//!
//! Cancellation: `pause()`/`reset()` bump an epoch checked by the
//! pending auto-advance before it fires, so a stale continuation is a
//! no-op.

use planreel_foundation::{
    Diagnostic, DiagnosticBuffer, DiagnosticKind, Interner, NameId,
};
use planreel_parser::ProcessBoundary;
use planreel_timeline::{ActionType, EntityRegistry, NormalizedAction, Timeline};

use crate::easing::ease;
use crate::state::{
    ActiveAction, CargoPlace, CargoRecord, CargoSnapshot, MoverRecord, MoverSnapshot, MoverStatus,
    ReplayState, ReplaySnapshot,
};

// =============================================================================
// Configuration
// =============================================================================

/// Replay configuration.
#[derive(Clone, Copy, Debug)]
pub struct ReplayConfig {
    /// Playback rate used when `play` is given a non-positive rate.
    pub default_rate: f64,
    /// Whether progress queries apply the family easing profile.
    pub easing_enabled: bool,
    /// Capacity of the session diagnostic buffer.
    pub diagnostics_capacity: usize,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            default_rate: 1.0,
            easing_enabled: true,
            diagnostics_capacity: 1000,
        }
    }
}

impl ReplayConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the default playback rate.
    #[must_use]
    pub const fn with_default_rate(mut self, rate: f64) -> Self {
        self.default_rate = rate;
        self
    }

    /// Builder method to enable/disable easing.
    #[must_use]
    pub const fn with_easing(mut self, enabled: bool) -> Self {
        self.easing_enabled = enabled;
        self
    }

    /// Builder method to set the diagnostic buffer capacity.
    #[must_use]
    pub const fn with_diagnostics_capacity(mut self, capacity: usize) -> Self {
        self.diagnostics_capacity = capacity;
        self
    }
}

// =============================================================================
// Progress
// =============================================================================

/// Continuous progress of a mover's in-flight action.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressReport {
    /// Timeline index of the in-flight action.
    pub index: usize,
    /// Raw elapsed fraction in `[0, 1]`.
    pub raw: f64,
    /// Eased fraction in `[0, 1]` (equals `raw` when easing is off).
    pub eased: f64,
}

/// The pending auto-advance continuation.
#[derive(Clone, Copy, Debug)]
struct PendingAdvance {
    /// Clock time the next step fires at.
    due_at: f64,
    /// Epoch the continuation belongs to; stale epochs are no-ops.
    epoch: u64,
}

// =============================================================================
// Scheduler
// =============================================================================

/// Deterministic, resumable, speed-scalable replay of one timeline.
#[derive(Clone, Debug)]
pub struct ReplayScheduler {
    /// Read-only shared state.
    timeline: Timeline,
    /// Read-only shared state.
    registry: EntityRegistry,
    /// Read-only identifier table for messages.
    interner: Interner,
    config: ReplayConfig,
    /// The per-entity arena; the only mutable state.
    state: ReplayState,
    /// Index of the next action to apply.
    next_index: usize,
    /// Set when every action has been applied.
    completed: bool,
    /// Presentation clock, in seconds.
    clock: f64,
    playing: bool,
    rate: f64,
    pending: Option<PendingAdvance>,
    /// Liveness counter for cancellable continuations.
    epoch: u64,
}

impl ReplayScheduler {
    /// Creates a scheduler and seeds the initial replay state.
    #[must_use]
    pub fn new(
        timeline: Timeline,
        registry: EntityRegistry,
        interner: Interner,
        config: ReplayConfig,
        diagnostics: &mut DiagnosticBuffer,
    ) -> Self {
        let mut scheduler = Self {
            timeline,
            registry,
            interner,
            config,
            state: ReplayState::new(),
            next_index: 0,
            completed: false,
            clock: 0.0,
            playing: false,
            rate: config.default_rate,
            pending: None,
            epoch: 0,
        };
        scheduler.reset(diagnostics);
        scheduler
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The timeline being replayed.
    #[must_use]
    pub const fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// The entity registry.
    #[must_use]
    pub const fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    /// The live per-entity state.
    #[must_use]
    pub const fn state(&self) -> &ReplayState {
        &self.state
    }

    /// Resolves an interned identifier for display.
    #[must_use]
    pub fn resolve(&self, id: NameId) -> &str {
        self.interner.resolve(id).unwrap_or("?")
    }

    /// The identifier table the timeline was interned against.
    #[must_use]
    pub const fn interner(&self) -> &Interner {
        &self.interner
    }

    /// The configuration the scheduler runs with.
    #[must_use]
    pub const fn config(&self) -> &ReplayConfig {
        &self.config
    }

    /// Index of the next action to apply.
    #[must_use]
    pub const fn next_index(&self) -> usize {
        self.next_index
    }

    /// True once every action has been applied.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// The presentation clock, in seconds.
    #[must_use]
    pub const fn clock(&self) -> f64 {
        self.clock
    }

    /// True while auto-advance is engaged.
    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.playing
    }

    /// The current playback rate.
    #[must_use]
    pub const fn rate(&self) -> f64 {
        self.rate
    }

    /// Continuous progress of a mover's in-flight action.
    ///
    /// Purely a presentation signal; it never gates or revises the
    /// committed discrete transition.
    #[must_use]
    pub fn progress_of(&self, mover: NameId) -> Option<ProgressReport> {
        let active = self.state.mover(mover)?.active?;
        let raw = if active.duration > 0.0 {
            ((self.clock - active.started_at) / active.duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let eased = if self.config.easing_enabled {
            ease(active.family, raw)
        } else {
            raw
        };
        Some(ProgressReport {
            index: active.index,
            raw,
            eased,
        })
    }

    /// A queryable snapshot of the whole replay, in registry order.
    #[must_use]
    pub fn snapshot(&self) -> ReplaySnapshot {
        let movers = self
            .registry
            .movers()
            .iter()
            .map(|&id| {
                let record = self.state.mover(id).cloned().unwrap_or_default();
                let progress = self.progress_of(id);
                MoverSnapshot {
                    id,
                    status: record.status,
                    location: record.location,
                    carrying: record.carrying.iter().copied().collect(),
                    progress: progress.map(|p| p.raw),
                    eased_progress: progress.map(|p| p.eased),
                }
            })
            .collect();

        let cargo = self
            .registry
            .cargo_items()
            .iter()
            .map(|&id| {
                let record = self.state.cargo(id).copied();
                CargoSnapshot {
                    id,
                    location: record.and_then(|r| r.location()),
                    carrier: record.and_then(|r| r.carrier()),
                    transferring: matches!(
                        record.map(|r| r.place),
                        Some(CargoPlace::Transferring(_))
                    ),
                }
            })
            .collect();

        ReplaySnapshot {
            clock: self.clock,
            next_index: self.next_index,
            completed: self.completed,
            movers,
            cargo,
        }
    }

    // =========================================================================
    // Control
    // =========================================================================

    /// Discards all replay state and re-seeds initial placements.
    ///
    /// Mover placements come from the origin of the mover's first move
    /// action (or the location of its first load action); cargo
    /// placements come from the first load action's location. Entities
    /// with no evidence get the first registered location - a
    /// deterministic choice, never a random one.
    pub fn reset(&mut self, diagnostics: &mut DiagnosticBuffer) {
        self.epoch += 1;
        self.pending = None;
        self.playing = false;
        self.rate = self.config.default_rate;
        self.clock = 0.0;
        self.next_index = 0;
        self.completed = self.timeline.is_empty();
        self.state = self.seed_state(diagnostics);
    }

    /// Applies the action at the current index and advances it.
    ///
    /// Returns `false` once the replay has completed. Applying the last
    /// action sets the terminal `completed` flag; actions still in
    /// flight then drain through `advance()`, or are finalized by the
    /// next (trailing) `step()` call. A manual step while an
    /// auto-advance is pending replaces the pending continuation, so no
    /// index is ever applied twice.
    pub fn step(&mut self, diagnostics: &mut DiagnosticBuffer) -> bool {
        if self.completed {
            self.finish_all_active(diagnostics);
            return false;
        }
        let Some(action) = self.timeline.get(self.next_index).cloned() else {
            self.completed = true;
            return false;
        };

        self.apply_action(&action, diagnostics);
        self.next_index += 1;

        if self.next_index >= self.timeline.len() {
            self.completed = true;
            self.pending = None;
        } else if self.playing {
            let scaled = action.duration / self.rate;
            self.pending = Some(PendingAdvance {
                due_at: self.clock + scaled,
                epoch: self.epoch,
            });
        } else {
            self.pending = None;
        }
        true
    }

    /// Engages variable-interval auto-advance at the given rate.
    ///
    /// A non-positive rate falls back to the configured default. The
    /// first step is applied immediately unless a frozen in-flight
    /// action still has time to serve, in which case playback resumes
    /// behind it.
    pub fn play(&mut self, rate: f64, diagnostics: &mut DiagnosticBuffer) {
        if self.completed {
            return;
        }
        self.rate = if rate > 0.0 {
            rate
        } else {
            self.config.default_rate
        };
        self.playing = true;

        if self.pending.is_some() {
            return;
        }

        let resume_at = self
            .state
            .active_movers()
            .filter_map(|id| self.state.mover(id).and_then(|r| r.active))
            .map(|a| a.started_at + a.duration)
            .fold(f64::NEG_INFINITY, f64::max);

        if resume_at > self.clock {
            self.pending = Some(PendingAdvance {
                due_at: resume_at,
                epoch: self.epoch,
            });
        } else {
            self.step(diagnostics);
        }
    }

    /// Halts auto-advance without resetting state. Idempotent; frozen
    /// in-transit progress is retained because a paused scheduler
    /// ignores ticks.
    pub fn pause(&mut self) {
        self.playing = false;
        self.pending = None;
        self.epoch += 1;
    }

    /// Advances the presentation clock. The only time input; ignored
    /// while paused.
    pub fn advance(&mut self, dt: f64, diagnostics: &mut DiagnosticBuffer) {
        if !self.playing || dt <= 0.0 {
            return;
        }
        self.clock += dt;
        self.finish_expired(diagnostics);

        while let Some(pending) = self.pending {
            if pending.epoch != self.epoch || !self.playing {
                break;
            }
            if pending.due_at > self.clock {
                break;
            }
            self.pending = None;
            self.step(diagnostics);
            self.finish_expired(diagnostics);
        }

        // auto-advance disengages once the tail of the plan has drained
        if self.completed && self.state.active_movers().next().is_none() {
            self.playing = false;
        }
    }

    // =========================================================================
    // Seeding
    // =========================================================================

    fn seed_state(&self, diagnostics: &mut DiagnosticBuffer) -> ReplayState {
        let mut state = ReplayState::new();
        let default_location = self.registry.first_location();

        for id in self.registry.movers() {
            let evidence = self.initial_mover_location(id);
            if evidence.is_none() {
                self.note_default_placement(id, diagnostics);
            }
            state.insert_mover(
                id,
                MoverRecord {
                    status: MoverStatus::Idle,
                    location: evidence.or(default_location),
                    carrying: im::Vector::new(),
                    active: None,
                },
            );
        }

        for id in self.registry.cargo_items() {
            let evidence = self.initial_cargo_location(id);
            if evidence.is_none() {
                self.note_default_placement(id, diagnostics);
            }
            if let Some(location) = evidence.or(default_location) {
                state.insert_cargo(
                    id,
                    CargoRecord {
                        place: CargoPlace::AtLocation(location),
                    },
                );
            }
        }

        state
    }

    /// The origin of the mover's first move action, or the location of
    /// its first load action if it never moves.
    fn initial_mover_location(&self, mover: NameId) -> Option<NameId> {
        let mut first_load_site = None;
        for action in self.timeline.iter() {
            if action.roles.mover != Some(mover) {
                continue;
            }
            match action.action_type {
                ActionType::Move => {
                    if let Some(origin) = action.roles.origin {
                        return Some(origin);
                    }
                }
                ActionType::Load | ActionType::Unload => {
                    if first_load_site.is_none() {
                        first_load_site = action.roles.site();
                    }
                }
                _ => {}
            }
        }
        first_load_site
    }

    /// The location of the cargo item's first load action.
    fn initial_cargo_location(&self, cargo: NameId) -> Option<NameId> {
        self.timeline
            .iter()
            .filter(|a| a.action_type == ActionType::Load && a.roles.cargo == Some(cargo))
            .find_map(|a| a.roles.site())
    }

    fn note_default_placement(&self, id: NameId, diagnostics: &mut DiagnosticBuffer) {
        diagnostics.push(Diagnostic::info(
            DiagnosticKind::DefaultPlacement,
            format!(
                "no placement evidence for '{}'; seeding at first registered location",
                self.resolve(id)
            ),
        ));
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    fn apply_action(&mut self, action: &NormalizedAction, diagnostics: &mut DiagnosticBuffer) {
        // a stop- boundary ends the running process rather than starting
        // a new application of it
        if action.boundary == ProcessBoundary::Stop {
            self.apply_process_stop(action, diagnostics);
            return;
        }
        match action.action_type {
            ActionType::Move => self.apply_move(action, diagnostics),
            ActionType::Load => self.apply_load(action, diagnostics),
            ActionType::Unload => self.apply_unload(action, diagnostics),
            ActionType::Terminal => self.apply_terminal(action, diagnostics),
            ActionType::Maintenance | ActionType::Unknown => {
                self.apply_in_place(action, diagnostics);
            }
            // a wait occupies timeline space and paces play(); no entity
            // is touched
            ActionType::Wait => {}
        }
    }

    fn apply_move(&mut self, action: &NormalizedAction, diagnostics: &mut DiagnosticBuffer) {
        let Some(mover) = action.roles.mover else {
            return;
        };
        if self.state.mover(mover).is_none() {
            return;
        }
        self.finish_active(mover, diagnostics);

        let Some(target) = action.roles.destination else {
            // no destination to animate toward; hold position
            self.begin_active(mover, action, None, None);
            return;
        };

        let declared_origin = action.roles.origin;
        let current = self.state.mover(mover).and_then(|r| r.location);
        if let (Some(origin), Some(at)) = (declared_origin, current) {
            if origin != at {
                diagnostics.push(
                    Diagnostic::warning(
                        DiagnosticKind::InconsistentState,
                        format!(
                            "'{}' departs '{}' but was at '{}'; relocating to match",
                            self.resolve(mover),
                            self.resolve(origin),
                            self.resolve(at)
                        ),
                    )
                    .at_line(action.line),
                );
            }
        }

        let origin = declared_origin.or(current).unwrap_or(target);
        if let Some(record) = self.state.mover_mut(mover) {
            record.location = Some(origin);
            record.status = MoverStatus::Moving { origin, target };
        }
        self.begin_active(mover, action, None, Some(target));
    }

    fn apply_load(&mut self, action: &NormalizedAction, diagnostics: &mut DiagnosticBuffer) {
        let mover = action.roles.mover.filter(|&m| self.state.mover(m).is_some());
        let cargo = action.roles.cargo.filter(|&c| self.state.cargo(c).is_some());
        let site = action.roles.site();

        if let Some(mover) = mover {
            self.finish_active(mover, diagnostics);
            if let Some(record) = self.state.mover_mut(mover) {
                record.status = MoverStatus::Loading;
                if let Some(site) = site {
                    record.location.get_or_insert(site);
                }
            }
            self.begin_active(mover, action, cargo, site);
        }

        // cargo becomes carried at load-begin
        let (Some(mover), Some(cargo)) = (mover, cargo) else {
            return;
        };
        let place = self.state.cargo(cargo).map(|r| r.place);
        match place {
            Some(CargoPlace::Carried(other) | CargoPlace::Transferring(other))
                if other != mover =>
            {
                diagnostics.push(
                    Diagnostic::warning(
                        DiagnosticKind::InconsistentState,
                        format!(
                            "'{}' loads '{}' which '{}' was still carrying; transferring",
                            self.resolve(mover),
                            self.resolve(cargo),
                            self.resolve(other)
                        ),
                    )
                    .at_line(action.line),
                );
                self.remove_from_carrying(other, cargo);
            }
            Some(CargoPlace::AtLocation(at)) => {
                if let Some(site) = site {
                    if site != at {
                        diagnostics.push(
                            Diagnostic::warning(
                                DiagnosticKind::InconsistentState,
                                format!(
                                    "'{}' loaded at '{}' but was at '{}'; relocating to match",
                                    self.resolve(cargo),
                                    self.resolve(site),
                                    self.resolve(at)
                                ),
                            )
                            .at_line(action.line),
                        );
                    }
                }
            }
            _ => {}
        }

        if let Some(record) = self.state.cargo_mut(cargo) {
            record.place = CargoPlace::Carried(mover);
        }
        if let Some(record) = self.state.mover_mut(mover) {
            if !record.carrying.contains(&cargo) {
                record.carrying.push_back(cargo);
            }
        }
    }

    fn apply_unload(&mut self, action: &NormalizedAction, diagnostics: &mut DiagnosticBuffer) {
        let mover = action.roles.mover.filter(|&m| self.state.mover(m).is_some());
        let cargo = action.roles.cargo.filter(|&c| self.state.cargo(c).is_some());
        let site = action.roles.site();

        if let Some(mover) = mover {
            self.finish_active(mover, diagnostics);
            if let Some(record) = self.state.mover_mut(mover) {
                record.status = MoverStatus::Unloading;
            }
            self.begin_active(mover, action, cargo, site);
        }

        let (Some(mover), Some(cargo)) = (mover, cargo) else {
            return;
        };
        let carried_by_mover = self
            .state
            .mover(mover)
            .is_some_and(|r| r.carrying.contains(&cargo));
        if !carried_by_mover {
            diagnostics.push(
                Diagnostic::warning(
                    DiagnosticKind::InconsistentState,
                    format!(
                        "'{}' unloads '{}' it was not recorded as carrying; correcting",
                        self.resolve(mover),
                        self.resolve(cargo)
                    ),
                )
                .at_line(action.line),
            );
            if let Some(CargoPlace::Carried(other) | CargoPlace::Transferring(other)) =
                self.state.cargo(cargo).map(|r| r.place)
            {
                self.remove_from_carrying(other, cargo);
            }
            if let Some(record) = self.state.mover_mut(mover) {
                record.carrying.push_back(cargo);
            }
        }

        // the hand-off resolves to a location at completion
        if let Some(record) = self.state.cargo_mut(cargo) {
            record.place = CargoPlace::Transferring(mover);
        }
    }

    /// Terminal/delivery: with a mover it behaves like a hand-off;
    /// without one the delivery commits immediately.
    fn apply_terminal(&mut self, action: &NormalizedAction, diagnostics: &mut DiagnosticBuffer) {
        if action.roles.mover.is_some_and(|m| self.state.mover(m).is_some()) {
            self.apply_unload(action, diagnostics);
            return;
        }

        let Some(cargo) = action.roles.cargo.filter(|&c| self.state.cargo(c).is_some()) else {
            return;
        };
        let carrier = self.state.cargo(cargo).and_then(|r| r.carrier());
        if let Some(carrier) = carrier {
            self.remove_from_carrying(carrier, cargo);
        }

        let destination = action
            .roles
            .site()
            .or_else(|| carrier.and_then(|m| self.state.mover(m).and_then(|r| r.location)))
            .or_else(|| self.registry.first_location());
        if let (Some(destination), Some(record)) = (destination, self.state.cargo_mut(cargo)) {
            record.place = CargoPlace::AtLocation(destination);
        }
    }

    /// A `stop-` process boundary commits the completion effects of the
    /// running process.
    fn apply_process_stop(&mut self, action: &NormalizedAction, diagnostics: &mut DiagnosticBuffer) {
        let Some(mover) = action.roles.mover.filter(|&m| self.state.mover(m).is_some()) else {
            return;
        };
        self.finish_active(mover, diagnostics);

        if action.action_type == ActionType::Move {
            if let (Some(target), Some(record)) =
                (action.roles.destination, self.state.mover_mut(mover))
            {
                record.location = Some(target);
                record.status = MoverStatus::Idle;
            }
        }
    }

    /// Maintenance and unknown actions hold the mover in place; the
    /// active entry paces the replay and feeds progress queries.
    fn apply_in_place(&mut self, action: &NormalizedAction, diagnostics: &mut DiagnosticBuffer) {
        let Some(mover) = action.roles.mover.filter(|&m| self.state.mover(m).is_some()) else {
            return;
        };
        self.finish_active(mover, diagnostics);
        self.begin_active(mover, action, None, action.roles.site());
    }

    fn begin_active(
        &mut self,
        mover: NameId,
        action: &NormalizedAction,
        cargo: Option<NameId>,
        site: Option<NameId>,
    ) {
        let scaled = action.duration / self.rate;
        if let Some(record) = self.state.mover_mut(mover) {
            record.active = Some(ActiveAction {
                index: self.next_index,
                family: action.action_type,
                started_at: self.clock,
                duration: scaled,
                cargo,
                site,
            });
        }
    }

    // =========================================================================
    // Completion
    // =========================================================================

    /// Commits the completion effects of a mover's in-flight action.
    fn finish_active(&mut self, mover: NameId, _diagnostics: &mut DiagnosticBuffer) {
        let Some(active) = self.state.mover_mut(mover).and_then(|r| r.active.take()) else {
            return;
        };

        match active.family {
            ActionType::Move => {
                if let Some(record) = self.state.mover_mut(mover) {
                    if let MoverStatus::Moving { target, .. } = record.status {
                        record.location = Some(target);
                    } else if let Some(site) = active.site {
                        record.location = Some(site);
                    }
                    record.status = MoverStatus::Idle;
                }
            }
            ActionType::Unload | ActionType::Terminal => {
                // cargo becomes at-location at unload-complete
                if let Some(cargo) = active.cargo {
                    let resolved = active
                        .site
                        .or_else(|| self.state.mover(mover).and_then(|r| r.location))
                        .or_else(|| self.registry.first_location());
                    if let (Some(location), Some(record)) =
                        (resolved, self.state.cargo_mut(cargo))
                    {
                        record.place = CargoPlace::AtLocation(location);
                    }
                    self.remove_from_carrying(mover, cargo);
                }
                if let Some(record) = self.state.mover_mut(mover) {
                    record.status = MoverStatus::Idle;
                }
            }
            _ => {
                // load keeps its cargo aboard; the mover just goes idle
                if let Some(record) = self.state.mover_mut(mover) {
                    record.status = MoverStatus::Idle;
                }
            }
        }
    }

    /// Completes every in-flight action whose scaled duration elapsed.
    fn finish_expired(&mut self, diagnostics: &mut DiagnosticBuffer) {
        let expired: Vec<NameId> = self
            .state
            .active_movers()
            .filter(|&id| {
                self.state
                    .mover(id)
                    .and_then(|r| r.active)
                    .is_some_and(|a| a.started_at + a.duration <= self.clock)
            })
            .collect();
        for mover in expired {
            self.finish_active(mover, diagnostics);
        }
    }

    /// Completes every in-flight action (replay end).
    fn finish_all_active(&mut self, diagnostics: &mut DiagnosticBuffer) {
        let active: Vec<NameId> = self.state.active_movers().collect();
        for mover in active {
            self.finish_active(mover, diagnostics);
        }
    }

    fn remove_from_carrying(&mut self, mover: NameId, cargo: NameId) {
        if let Some(record) = self.state.mover_mut(mover) {
            record.carrying = record
                .carrying
                .iter()
                .copied()
                .filter(|&c| c != cargo)
                .collect();
        }
    }
}
