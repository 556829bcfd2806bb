//! Display-surface contract for strip-chart panels.
//!
//! The widgets crate only ever talks to:
//! - [`PixelBuffer`]: a fixed-size, row-major RGBA grid it owns and mutates
//! - [`Surface`]: where a finished buffer and its labels get presented
//!
//! Nothing here knows about a windowing or widget toolkit.

pub mod buffer;
pub mod surface;

pub use buffer::{PixelBuffer, Rgba};
pub use surface::{NullSurface, RecordingSurface, Surface};
