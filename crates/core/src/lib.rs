pub mod clock;
pub mod error;
pub mod event;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use error::{HudError, Result};
pub use event::Message;
