//! Export adapter: turns the in-memory data URL into a saved file.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use qrsmith_states::StateCtx;
use thiserror::Error;

use crate::{EncodedImage, ExportFormat};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("not a data URL")]
    NotADataUrl,
    #[error("data URL payload is not base64-encoded")]
    UnsupportedEncoding,
    #[error("base64 decode failed: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Split a `data:<mime>;base64,<payload>` URL into its declared MIME type
/// and decoded bytes.
///
/// The MIME type comes from the URL header, never from the user-selected
/// export format: the two can disagree, and the declared type is the one
/// that matches the bytes.
pub fn decode_data_url(data_url: &str) -> Result<(String, Vec<u8>), ExportError> {
    let rest = data_url
        .strip_prefix("data:")
        .ok_or(ExportError::NotADataUrl)?;
    let (header, payload) = rest.split_once(',').ok_or(ExportError::NotADataUrl)?;
    let mime = header
        .strip_suffix(";base64")
        .ok_or(ExportError::UnsupportedEncoding)?;
    let bytes = BASE64.decode(payload)?;
    Ok((mime.to_owned(), bytes))
}

/// A file ready to hand to the save collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    /// Suggested name, `qrcode.<extension>` from the selected format.
    pub filename: String,
    /// MIME type declared by the data URL itself.
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Build the downloadable payload for the current image.
///
/// Returns `None` when no image has been generated (deliberate silent no-op)
/// or when the stored data URL is malformed, which is logged.
pub fn export_payload(image: &EncodedImage, format: ExportFormat) -> Option<ExportPayload> {
    let data_url = image.data_url()?;
    match decode_data_url(data_url) {
        Ok((mime, bytes)) => Some(ExportPayload {
            filename: format!("qrcode.{}", format.extension()),
            mime,
            bytes,
        }),
        Err(err) => {
            log::error!("cannot export current image: {err}");
            None
        }
    }
}

/// Save collaborator, abstracted so tests can record saves instead of
/// opening a system dialog.
pub trait FileSaver {
    fn save(&self, payload: &ExportPayload);
}

/// Native saver: asks the user where to write via an `rfd` dialog.
#[derive(Debug, Default)]
pub struct SystemFileSaver;

impl FileSaver for SystemFileSaver {
    fn save(&self, payload: &ExportPayload) {
        let picked = rfd::FileDialog::new()
            .set_title("Save QR code")
            .set_file_name(payload.filename.as_str())
            .save_file();

        let Some(path) = picked else {
            log::info!("save dialog dismissed");
            return;
        };

        match std::fs::write(&path, &payload.bytes) {
            Ok(()) => log::info!(
                "saved {} ({} bytes, {})",
                path.display(),
                payload.bytes.len(),
                payload.mime
            ),
            Err(err) => log::error!("failed to write {}: {err}", path.display()),
        }
    }
}

/// The Download action: reads the current image and format from the store
/// and hands the payload to the saver. No-op while no image is present.
pub fn download_qr(ctx: &StateCtx, saver: &dyn FileSaver) {
    let Some(image) = ctx.state::<EncodedImage>() else {
        return;
    };
    let format = ctx.state::<ExportFormat>().copied().unwrap_or_default();
    if let Some(payload) = export_payload(image, format) {
        saver.save(&payload);
    }
}
