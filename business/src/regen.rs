//! The regeneration pipeline: parameters in, encoded QR image out.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::codecs::png::PngEncoder;
use image::imageops::FilterType;
use image::{ImageEncoder as _, Rgba, RgbaImage};
use qrcode::QrCode;
use qrsmith_states::{Compute, ComputeStage, StateCtx, Updater};
use thiserror::Error;

use crate::{EncodedImage, GenerationParams, MIN_DIMENSION};

/// Modules of background padding around the QR matrix.
const QUIET_ZONE_MODULES: usize = 4;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("qr encoding failed: {0}")]
    Qr(#[from] qrcode::types::QrError),
    #[error("png encoding failed: {0}")]
    Png(#[from] image::ImageError),
}

/// Recomputes [`EncodedImage`] from the current [`GenerationParams`].
///
/// The encode itself runs on a tokio blocking worker so the UI thread never
/// stalls; the caller must therefore be inside a tokio runtime context. Each
/// run publishes under a fresh sequence number, so when edits arrive faster
/// than encodes complete, only the most recently requested result ever
/// becomes visible.
#[derive(Debug, Default)]
pub struct QrRegeneration;

impl Compute for QrRegeneration {
    type Output = EncodedImage;

    fn compute(&mut self, ctx: &StateCtx, updater: Updater<EncodedImage>) -> ComputeStage {
        let Some(params) = ctx.state::<GenerationParams>() else {
            return ComputeStage::Finished;
        };

        if params.text.is_empty() {
            // Valid empty state, not an error: the preview clears.
            updater.set(EncodedImage::absent());
            return ComputeStage::Finished;
        }

        let params = params.clone();
        tokio::task::spawn_blocking(move || match encode_data_url(&params) {
            Ok(data_url) => updater.set(EncodedImage::from_data_url(data_url)),
            Err(err) => {
                // The previous image stays visible; the UI must not crash.
                log::error!("qr regeneration failed (seq {}): {err}", updater.seq());
            }
        });
        ComputeStage::Pending
    }
}

/// Encode the parameters into a `data:image/png;base64,…` URL.
///
/// The output type is always PNG, whatever export format the user selected;
/// the export adapter reads the real MIME type back out of this URL.
pub fn encode_data_url(params: &GenerationParams) -> Result<String, EncodeError> {
    let png = encode_png(params)?;
    Ok(format!("data:image/png;base64,{}", BASE64.encode(&png)))
}

fn encode_png(params: &GenerationParams) -> Result<Vec<u8>, EncodeError> {
    let width = params.width.max(MIN_DIMENSION);
    let height = params.height.max(MIN_DIMENSION);

    let code = QrCode::new(params.text.as_bytes())?;
    let raster = rasterize(&code, params, width.min(height));
    // Nearest-neighbor keeps the modules crisp and the dimensions exact.
    let resized = image::imageops::resize(&raster, width, height, FilterType::Nearest);

    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(
        resized.as_raw(),
        width,
        height,
        image::ExtendedColorType::Rgba8,
    )?;
    Ok(png)
}

/// Paint the module matrix into a square RGBA raster close to `target`
/// pixels wide, surrounded by a quiet zone in the background color.
fn rasterize(code: &QrCode, params: &GenerationParams, target: u32) -> RgbaImage {
    let qr_width = code.width();
    let total_modules = qr_width + QUIET_ZONE_MODULES * 2;
    let scale = (target as usize / total_modules).max(1);
    let size = (total_modules * scale) as u32;

    let fg = Rgba([
        params.foreground.r(),
        params.foreground.g(),
        params.foreground.b(),
        255,
    ]);
    let bg = Rgba([
        params.background.r(),
        params.background.g(),
        params.background.b(),
        255,
    ]);

    let mut raster = RgbaImage::from_pixel(size, size, bg);
    for (y, row) in code.to_colors().chunks(qr_width).enumerate() {
        for (x, module) in row.iter().enumerate() {
            if *module != qrcode::Color::Dark {
                continue;
            }
            for dy in 0..scale {
                for dx in 0..scale {
                    let px = ((x + QUIET_ZONE_MODULES) * scale + dx) as u32;
                    let py = ((y + QUIET_ZONE_MODULES) * scale + dy) as u32;
                    raster.put_pixel(px, py, fg);
                }
            }
        }
    }
    raster
}
