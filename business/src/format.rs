use qrsmith_states::State;

/// User-selected label for the downloaded file.
///
/// The format lives independently of [`GenerationParams`]: changing it does
/// not trigger a regeneration, and it is consulted only when naming the
/// exported file. The encoder itself always emits PNG; the export adapter
/// tags the bytes with the MIME type declared inside the data URL, never
/// with this label.
///
/// [`GenerationParams`]: crate::GenerationParams
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Png,
    Jpg,
    Svg,
}

impl ExportFormat {
    pub const ALL: [Self; 3] = [Self::Png, Self::Jpg, Self::Svg];

    /// File extension used for the suggested download name.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpg => "jpg",
            Self::Svg => "svg",
        }
    }

    /// Human-readable label for the format selector.
    pub fn label(self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Jpg => "JPG",
            Self::Svg => "SVG",
        }
    }
}

impl State for ExportFormat {}
