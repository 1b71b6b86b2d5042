//! Label measurement seam.
//!
//! The engine never shapes text. The host implements [`HeaderMeasure`] with
//! its text system; [`EstimatedMeasure`] is a font-free fallback.

use tabstrip_core::geometry::Size;

use crate::tab::Tab;

/// Default font size used by [`EstimatedMeasure`].
pub const DEFAULT_FONT_SIZE: f32 = 11.0;

/// Default close button edge length in pixels.
pub const DEFAULT_CLOSE_BUTTON_SIZE: f32 = 16.0;

/// Character width factor for estimating tab text width.
pub const CHAR_WIDTH_FACTOR: f32 = 0.6;

/// Line height factor for estimating tab text height.
const LINE_HEIGHT_FACTOR: f32 = 1.4;

/// Width of an icon slot next to the label, as a multiple of the font size.
const ICON_WIDTH_FACTOR: f32 = 1.3;

/// Measures the intrinsic size of tab header content.
pub trait HeaderMeasure {
    /// Preferred size of the tab's label, including its icon.
    fn measure_label(&self, tab: &Tab) -> Size<f32>;

    /// Preferred size of the close button.
    fn close_button_size(&self) -> Size<f32> {
        Size::new(DEFAULT_CLOSE_BUTTON_SIZE, DEFAULT_CLOSE_BUTTON_SIZE)
    }
}

/// Estimates label size from its character count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatedMeasure {
    pub font_size: f32,
    pub close_button: Size<f32>,
}

impl EstimatedMeasure {
    pub fn new(font_size: f32) -> Self {
        Self {
            font_size,
            ..Self::default()
        }
    }
}

impl Default for EstimatedMeasure {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            close_button: Size::new(DEFAULT_CLOSE_BUTTON_SIZE, DEFAULT_CLOSE_BUTTON_SIZE),
        }
    }
}

impl HeaderMeasure for EstimatedMeasure {
    fn measure_label(&self, tab: &Tab) -> Size<f32> {
        let chars = tab.label.chars().count() as f32;
        let mut width = chars * self.font_size * CHAR_WIDTH_FACTOR;
        if tab.icon.is_some() {
            width += self.font_size * ICON_WIDTH_FACTOR;
        }
        Size::new(width, self.font_size * LINE_HEIGHT_FACTOR).sanitized()
    }

    fn close_button_size(&self) -> Size<f32> {
        self.close_button.sanitized()
    }
}

impl<M: HeaderMeasure + ?Sized> HeaderMeasure for Box<M> {
    fn measure_label(&self, tab: &Tab) -> Size<f32> {
        (**self).measure_label(tab)
    }

    fn close_button_size(&self) -> Size<f32> {
        (**self).close_button_size()
    }
}
