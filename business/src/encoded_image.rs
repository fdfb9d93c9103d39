use qrsmith_states::State;

/// The most recently generated QR image, as a self-contained data URL.
///
/// Replaced wholesale on every regeneration; no history is retained. Absent
/// whenever the input text is empty.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    data_url: Option<String>,
}

impl EncodedImage {
    /// The "no image" state shown before any generation and after the input
    /// text is cleared.
    pub fn absent() -> Self {
        Self::default()
    }

    pub fn from_data_url(data_url: String) -> Self {
        Self {
            data_url: Some(data_url),
        }
    }

    pub fn data_url(&self) -> Option<&str> {
        self.data_url.as_deref()
    }

    pub fn is_absent(&self) -> bool {
        self.data_url.is_none()
    }
}

impl State for EncodedImage {}
