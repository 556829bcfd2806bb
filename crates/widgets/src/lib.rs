//! Strip-chart panels and the frame statistics aggregator that drives them.

pub mod extrema;
pub mod kind;
pub mod panel;
pub mod stats;

pub use extrema::Extrema;
pub use kind::PanelKind;
pub use panel::StripChart;
pub use stats::Stats;
