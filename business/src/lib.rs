//! Domain logic for the QR Smith app: generation parameters, the reactive
//! regeneration pipeline and the export adapter.

mod encoded_image;
mod export;
mod format;
mod params;
mod regen;

pub use encoded_image::EncodedImage;
pub use export::{
    ExportError, ExportPayload, FileSaver, SystemFileSaver, decode_data_url, download_qr,
    export_payload,
};
pub use format::ExportFormat;
pub use params::{GenerationParams, MAX_DIMENSION, MIN_DIMENSION};
pub use regen::{EncodeError, QrRegeneration, encode_data_url};
