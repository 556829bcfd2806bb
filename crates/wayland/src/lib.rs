//! Wayland layer-shell overlay for `hud`.
//!
//! Owns the Iced application loop and wires together:
//! - the frame timer that calls `Stats::update` once per cycle
//! - pointer presses, which cycle the visible panel
//! - the config file watcher (rebuilds the panels on change)

pub mod surface;

pub use surface::IcedSurface;

use hud_config::{default_path, load as load_config, ConfigWatcher, Corner, HudConfig};
use hud_core::{event::Message as AppMessage, HudError, MonotonicClock, Result};
use hud_renderer::Rgba;
use hud_theme::Theme;
use hud_widgets::Stats;
use futures::channel::mpsc::Sender;
use iced::{
    widget::{column, image, mouse_area, row, text},
    Element, Font, Length, Padding, Subscription, Task,
};
use iced_layershell::{
    build_pattern::application,
    reexport::{Anchor, Layer},
    settings::{LayerShellSettings, Settings},
    to_layer_message,
};
use std::time::Duration;
use tracing::{info, warn};

/// Logical size of the chart area.
const CHART_WIDTH: f32 = 74.0;
const CHART_HEIGHT: f32 = 30.0;
/// Logical size of the whole overlay: label line, chart and padding.
const OVERLAY_SIZE: (u32, u32) = (80, 48);

// ── Entry point ───────────────────────────────────────────────────────────────

/// Start the overlay.  Never returns under normal operation.
pub fn run() -> Result<()> {
    let config = load_config(default_path()).unwrap_or_default();

    application(Overlay::new, Overlay::namespace, Overlay::update, Overlay::view)
        .subscription(Overlay::subscription)
        .style(Overlay::style)
        .settings(Settings {
            layer_settings: LayerShellSettings {
                size: Some(OVERLAY_SIZE),
                exclusive_zone: 0,
                anchor: corner_to_anchor(config.overlay.position),
                layer: Layer::Overlay,
                ..Default::default()
            },
            ..Default::default()
        })
        .run()
        .map_err(|e| HudError::Overlay(e.to_string()))
}

// ── Message ───────────────────────────────────────────────────────────────────

/// Top-level application messages.
///
/// `#[to_layer_message]` injects layer-shell control variants; the backend
/// handles those and they never reach `update()`.
#[to_layer_message]
#[derive(Debug, Clone)]
pub enum Message {
    App(AppMessage),
}

// ── State ─────────────────────────────────────────────────────────────────────

struct Overlay {
    config: HudConfig,
    theme:  Theme,
    stats:  Stats<IcedSurface>,
}

impl Overlay {
    fn new() -> (Self, Task<Message>) {
        let config = match load_config(default_path()) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("{e}; using defaults");
                HudConfig::default()
            }
        };
        (Self::with_config(config), Task::none())
    }

    fn with_config(config: HudConfig) -> Self {
        let theme = Theme::from_config(&config.theme);
        let stats = build_stats(&config, &theme);
        Self { config, theme, stats }
    }

    fn namespace() -> String {
        String::from("hud")
    }

    // ── Update ────────────────────────────────────────────────────────────────

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::App(msg) => self.handle_app(msg),
            _ => Task::none(),
        }
    }

    fn handle_app(&mut self, msg: AppMessage) -> Task<Message> {
        match msg {
            AppMessage::Tick => self.stats.update(),
            AppMessage::CyclePanel => self.stats.cycle_panel(),
            AppMessage::ConfigReloaded => match load_config(default_path()) {
                Ok(cfg) => return self.apply_config(cfg),
                Err(e) => warn!("Config reload failed: {e}"),
            },
        }
        Task::none()
    }

    /// Swap in a reloaded config.  Panels are rebuilt (history restarts) but
    /// the visible index survives; a moved corner re-anchors the surface.
    fn apply_config(&mut self, cfg: HudConfig) -> Task<Message> {
        info!("Config reloaded; panels rebuilt");
        let mode = self.stats.mode();
        let anchor = anchor_change(&self.config, &cfg);

        *self = Self::with_config(cfg);
        self.stats.show_panel(mode);

        match anchor {
            Some(anchor) => Task::done(Message::AnchorChange(anchor)),
            None => Task::none(),
        }
    }

    // ── View ──────────────────────────────────────────────────────────────────

    fn view(&self) -> Element<'_, Message> {
        let panel = self.stats.active_panel();
        let surface = panel.surface();
        let fg = to_iced(panel.foreground(), 1.0);
        let size = self.theme.font_size;

        let bold = Font {
            weight: iced::font::Weight::Bold,
            ..Font::DEFAULT
        };
        let label = row![
            text(surface.primary()).size(size).font(bold).color(fg),
            text(surface.secondary()).size(size).color(fg),
        ]
        .spacing(3.0);

        let chart: Element<'_, Message> = match surface.handle() {
            Some(handle) => image(handle.clone())
                .width(Length::Fixed(CHART_WIDTH))
                .height(Length::Fixed(CHART_HEIGHT))
                .filter_method(image::FilterMethod::Nearest)
                .into(),
            None => text("")
                .width(Length::Fixed(CHART_WIDTH))
                .height(Length::Fixed(CHART_HEIGHT))
                .into(),
        };

        let body = column![label, chart].padding(Padding {
            top:    0.0,
            right:  0.0,
            bottom: 3.0,
            left:   3.0,
        });

        mouse_area(body)
            .on_press(Message::App(AppMessage::CyclePanel))
            .into()
    }

    // ── Subscriptions ─────────────────────────────────────────────────────────

    fn subscription(&self) -> Subscription<Message> {
        let interval = Duration::from_millis(self.config.overlay.interval_ms.max(1));
        let tick = iced::time::every(interval).map(|_| Message::App(AppMessage::Tick));

        Subscription::batch([tick, Subscription::run(config_stream)])
    }

    // ── Style ─────────────────────────────────────────────────────────────────

    fn style(&self, _theme: &iced::Theme) -> iced::theme::Style {
        let panel = self.stats.active_panel();
        iced::theme::Style {
            background_color: to_iced(panel.background(), self.config.overlay.opacity),
            text_color: to_iced(panel.foreground(), 1.0),
        }
    }
}

/// Build the aggregator for `config`, probing memory telemetry once.
fn build_stats(config: &HudConfig, theme: &Theme) -> Stats<IcedSurface> {
    let memory = hud_system::detect_memory(config.overlay.memory);
    let mut stats = Stats::new(
        theme,
        config.overlay.pixel_scale,
        Box::new(MonotonicClock::new()),
        memory,
        |_| IcedSurface::default(),
    );
    stats.show_panel(config.overlay.initial_panel);
    stats
}

// ── Subscription streams ──────────────────────────────────────────────────────

/// Watches `~/.config/hud/hud.toml` for writes and sends `ConfigReloaded`.
fn config_stream() -> impl iced::futures::Stream<Item = Message> {
    iced::stream::channel(1, |mut sender: Sender<Message>| async move {
        let (_watcher, mut rx) = ConfigWatcher::spawn(default_path());

        while rx.recv().await.is_some() {
            let _ = sender.try_send(Message::App(AppMessage::ConfigReloaded));
        }

        // Watcher gave up; keep the subscription alive without reloads.
        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
    })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn corner_to_anchor(corner: Corner) -> Anchor {
    match corner {
        Corner::TopLeft     => Anchor::Top    | Anchor::Left,
        Corner::TopRight    => Anchor::Top    | Anchor::Right,
        Corner::BottomLeft  => Anchor::Bottom | Anchor::Left,
        Corner::BottomRight => Anchor::Bottom | Anchor::Right,
    }
}

/// New anchor when the configured corner moved between two configs.
fn anchor_change(old: &HudConfig, new: &HudConfig) -> Option<Anchor> {
    (old.overlay.position != new.overlay.position)
        .then(|| corner_to_anchor(new.overlay.position))
}

fn to_iced(px: Rgba, alpha: f32) -> iced::Color {
    iced::Color::from_rgba8(px[0], px[1], px[2], alpha.clamp(0.0, 1.0))
}
