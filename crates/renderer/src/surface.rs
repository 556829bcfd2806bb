use crate::buffer::PixelBuffer;

/// Where a panel sends its finished frame.
///
/// Presentation is fire-and-forget: the panel calls these after every update
/// and never waits for an acknowledgement.
pub trait Surface: Send + Sync + std::fmt::Debug {
    /// Blit the whole buffer to the visible output.
    fn present(&mut self, buffer: &PixelBuffer);

    /// Replace the two-part text label (bold primary, normal secondary).
    fn set_label(&mut self, primary: &str, secondary: &str);

    /// Show or hide the panel.
    fn set_visible(&mut self, visible: bool);
}

/// Surface that discards everything.  Useful for headless aggregation where
/// callers read panel state directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn present(&mut self, _buffer: &PixelBuffer) {}
    fn set_label(&mut self, _primary: &str, _secondary: &str) {}
    fn set_visible(&mut self, _visible: bool) {}
}

/// Surface that keeps the latest presented frame and label.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    /// Number of `present` calls received.
    pub presents:  usize,
    pub frame:     Option<PixelBuffer>,
    pub primary:   String,
    pub secondary: String,
    pub visible:   bool,
}

impl Surface for RecordingSurface {
    fn present(&mut self, buffer: &PixelBuffer) {
        self.presents += 1;
        match &mut self.frame {
            Some(frame) => frame.clone_from(buffer),
            None => self.frame = Some(buffer.clone()),
        }
    }

    fn set_label(&mut self, primary: &str, secondary: &str) {
        self.primary.replace_range(.., primary);
        self.secondary.replace_range(.., secondary);
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
