use egui::Color32;
use qrsmith_states::State;

/// Smallest accepted output dimension, in pixels.
pub const MIN_DIMENSION: u32 = 1;

/// Largest accepted output dimension, in pixels.
pub const MAX_DIMENSION: u32 = 1024;

/// User-entered inputs the QR pipeline regenerates from.
///
/// Width and height are kept positive: the form clamps its numeric inputs to
/// `MIN_DIMENSION..=MAX_DIMENSION` and the pipeline clamps again before
/// rasterizing, so a zero dimension can never reach the encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationParams {
    /// Text payload to encode. Empty text means "no image", not an error.
    pub text: String,
    pub width: u32,
    pub height: u32,
    /// Color of the dark QR modules.
    pub foreground: Color32,
    /// Color of the light modules and the quiet zone.
    pub background: Color32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            text: String::new(),
            width: 128,
            height: 128,
            foreground: Color32::BLACK,
            background: Color32::WHITE,
        }
    }
}

impl State for GenerationParams {}
