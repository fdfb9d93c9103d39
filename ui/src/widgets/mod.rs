mod download;
mod params_form;
mod preview;

pub use download::download_button;
pub use params_form::params_form;
pub use preview::{PreviewState, qr_preview};
