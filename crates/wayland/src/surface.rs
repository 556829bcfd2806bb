use hud_renderer::{PixelBuffer, Surface};
use iced::widget::image;

/// Surface backed by an iced image handle.
///
/// `present` uploads a copy of the whole buffer; the overlay's `view` then
/// draws whichever surface belongs to the visible panel.
#[derive(Debug, Clone, Default)]
pub struct IcedSurface {
    handle:    Option<image::Handle>,
    primary:   String,
    secondary: String,
    visible:   bool,
}

impl IcedSurface {
    pub fn handle(&self) -> Option<&image::Handle> {
        self.handle.as_ref()
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn secondary(&self) -> &str {
        &self.secondary
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Surface for IcedSurface {
    fn present(&mut self, buffer: &PixelBuffer) {
        self.handle = Some(image::Handle::from_rgba(
            buffer.width() as u32,
            buffer.height() as u32,
            buffer.as_bytes().to_vec(),
        ));
    }

    fn set_label(&mut self, primary: &str, secondary: &str) {
        self.primary.replace_range(.., primary);
        self.secondary.replace_range(.., secondary);
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
