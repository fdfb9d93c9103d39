//! QR preview widget with a single-entry texture cache.

use egui::{ColorImage, TextureHandle, TextureOptions, Ui};
use qrsmith_business::{EncodedImage, decode_data_url};
use qrsmith_states::StateCtx;

/// Hint shown while no image is present.
const EMPTY_HINT: &str = "Enter data to generate a QR code.";

/// Texture cache for the preview, keyed by the data URL it was built from.
///
/// The image is replaced wholesale on every regeneration, so one cached
/// texture is all there is to manage: a new data URL evicts the old upload.
#[derive(Default)]
pub struct PreviewState {
    cached: Option<(String, TextureHandle)>,
}

/// Shows the current QR image, or a hint while none is present.
pub fn qr_preview(ctx: &StateCtx, ui: &mut Ui, preview: &mut PreviewState) {
    let data_url = ctx.state::<EncodedImage>().and_then(EncodedImage::data_url);
    let Some(data_url) = data_url else {
        preview.cached = None;
        ui.weak(EMPTY_HINT);
        return;
    };

    let stale = preview
        .cached
        .as_ref()
        .is_none_or(|(key, _)| key.as_str() != data_url);
    if stale {
        preview.cached = load_texture(ui, data_url).map(|tex| (data_url.to_owned(), tex));
    }

    match &preview.cached {
        Some((_, texture)) => {
            ui.image(egui::load::SizedTexture::new(
                texture.id(),
                texture.size_vec2(),
            ));
        }
        None => {
            ui.weak(EMPTY_HINT);
        }
    }
}

fn load_texture(ui: &Ui, data_url: &str) -> Option<TextureHandle> {
    let (_, bytes) = match decode_data_url(data_url) {
        Ok(decoded) => decoded,
        Err(err) => {
            log::warn!("preview: malformed data URL: {err}");
            return None;
        }
    };

    let decoded = match image::load_from_memory(&bytes) {
        Ok(img) => img,
        Err(err) => {
            log::warn!("preview: undecodable image payload: {err}");
            return None;
        }
    };

    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let color_image = ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
    // NEAREST keeps the module edges sharp when egui scales the preview.
    Some(
        ui.ctx()
            .load_texture("qr_preview", color_image, TextureOptions::NEAREST),
    )
}
