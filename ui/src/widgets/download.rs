use egui::{Response, Ui};
use qrsmith_business::{FileSaver, download_qr};
use qrsmith_states::StateCtx;

/// The Download action button.
///
/// Clicking with no generated image is a silent no-op, by design: the
/// precondition failure is soft, not surfaced.
pub fn download_button(ctx: &StateCtx, saver: &dyn FileSaver, ui: &mut Ui) -> Response {
    let response = ui.button("Download");
    if response.clicked() {
        download_qr(ctx, saver);
    }
    response
}
