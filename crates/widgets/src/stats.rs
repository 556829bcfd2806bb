use crate::{extrema::Extrema, kind::PanelKind, panel::StripChart};
use hud_core::Clock;
use hud_renderer::Surface;
use hud_system::{bytes_to_mib, MemoryProbe};
use hud_theme::Theme;
use tracing::{debug, trace};

/// Length of the frame-rate / memory sampling window.
pub const WINDOW_MS: u64 = 1_000;

/// Frame statistics aggregator.
///
/// Call [`Stats::update`] once per host cycle.  The duration panel is fed on
/// every call; the frame-rate panel and the optional memory panel are fed
/// once per elapsed [`WINDOW_MS`].
///
/// Panels are ordered `FPS`, `MS`, then `MB` when memory telemetry was
/// supplied at construction.  Only the panel at [`Stats::mode`] is visible.
#[derive(Debug)]
pub struct Stats<S> {
    clock:             Box<dyn Clock>,
    memory:            Option<Box<dyn MemoryProbe>>,
    start_time:        u64,
    prev_time:         u64,
    prev_window_start: u64,
    frames:            u32,
    mode:              usize,
    panels:            Vec<StripChart<S>>,
    duration:          Extrema,
    rate:              Extrema,
    memory_mb:         Extrema,
}

impl<S: Surface> Stats<S> {
    /// Build the panels and show the first one.
    ///
    /// The memory panel exists iff `memory` is `Some`; that decision is made
    /// here once and never revisited.  `make_surface` is called once per
    /// panel, in panel order.
    pub fn new(
        theme: &Theme,
        pixel_scale: u32,
        clock: Box<dyn Clock>,
        memory: Option<Box<dyn MemoryProbe>>,
        mut make_surface: impl FnMut(PanelKind) -> S,
    ) -> Self {
        let mut kinds = vec![PanelKind::Rate, PanelKind::Duration];
        if memory.is_some() {
            kinds.push(PanelKind::Memory);
        } else {
            debug!("no memory telemetry; MB panel omitted");
        }

        let panels = kinds
            .into_iter()
            .map(|kind| {
                let surface = make_surface(kind);
                StripChart::new(kind, kind.palette(theme), pixel_scale, surface)
            })
            .collect();

        let now = clock.now_ms();
        let mut stats = Self {
            clock,
            memory,
            start_time: now,
            prev_time: now,
            prev_window_start: now,
            frames: 0,
            mode: 0,
            panels,
            duration: Extrema::new(),
            rate: Extrema::new(),
            memory_mb: Extrema::new(),
        };
        stats.show_panel(0);
        stats
    }

    /// Sample one cycle and redraw the panels that are due.
    pub fn update(&mut self) {
        self.frames = self.frames.saturating_add(1);
        let now = self.clock.now_ms();

        let ms = now.saturating_sub(self.prev_time) as f64;
        self.duration.record(ms);
        let label = self.duration.label();
        if let Some(panel) = self.panel_mut(PanelKind::Duration) {
            panel.update(ms, PanelKind::Duration.ceiling(), &format!("{ms} MS"), &label);
        }

        self.prev_time = now;

        if now < self.prev_window_start + WINDOW_MS {
            return;
        }

        let elapsed = (now - self.prev_window_start) as f64;
        let fps = (f64::from(self.frames) * 1000.0 / elapsed).round();
        self.rate.record(fps);
        let label = self.rate.label();
        if let Some(panel) = self.panel_mut(PanelKind::Rate) {
            panel.update(fps, PanelKind::Rate.ceiling(), &format!("{fps} FPS"), &label);
        }
        trace!(fps, frames = self.frames, elapsed, "frame-rate window closed");

        self.prev_window_start = now;
        self.frames = 0;

        if let Some(probe) = self.memory.as_mut() {
            let mb = bytes_to_mib(probe.used_bytes());
            self.memory_mb.record(mb);
            let primary = format!("{} MB", mb.round());
            let label = self.memory_mb.label();
            if let Some(panel) = self.panel_mut(PanelKind::Memory) {
                panel.update(mb, PanelKind::Memory.ceiling(), &primary, &label);
            }
        }
    }

    /// Make the panel at `index mod panel_count` the only visible one.
    pub fn show_panel(&mut self, index: usize) {
        self.mode = index % self.panels.len();
        let mode = self.mode;
        for (i, panel) in self.panels.iter_mut().enumerate() {
            panel.set_visible(i == mode);
        }
        debug!(mode, kind = ?self.panels[mode].kind(), "showing panel");
    }

    /// Advance to the next panel (what a click on the overlay does).
    pub fn cycle_panel(&mut self) {
        self.show_panel(self.mode + 1);
    }

    /// Index of the visible panel.
    pub fn mode(&self) -> usize {
        self.mode
    }

    pub fn panels(&self) -> &[StripChart<S>] {
        &self.panels
    }

    pub fn panel(&self, kind: PanelKind) -> Option<&StripChart<S>> {
        self.panels.iter().find(|p| p.kind() == kind)
    }

    pub fn active_panel(&self) -> &StripChart<S> {
        &self.panels[self.mode]
    }

    pub fn has_memory_panel(&self) -> bool {
        self.memory.is_some()
    }

    /// Extrema of the per-cycle duration in milliseconds.
    pub fn duration(&self) -> Extrema {
        self.duration
    }

    /// Extrema of the per-window frame rate.
    pub fn rate(&self) -> Extrema {
        self.rate
    }

    /// Extrema of the memory samples in MiB.
    pub fn memory(&self) -> Extrema {
        self.memory_mb
    }

    /// Milliseconds since construction.
    pub fn elapsed_ms(&self) -> u64 {
        self.clock.now_ms().saturating_sub(self.start_time)
    }

    fn panel_mut(&mut self, kind: PanelKind) -> Option<&mut StripChart<S>> {
        self.panels.iter_mut().find(|p| p.kind() == kind)
    }
}
