//! Shared helpers for the UI integration tests.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use egui_kittest::Harness;
use qrsmith_business::{EncodedImage, ExportPayload, FileSaver, GenerationParams};
use qrsmith_ui::QrSmithApp;
use qrsmith_ui::state::State;

/// Records every payload instead of opening a system save dialog.
#[derive(Clone, Default)]
pub struct RecordingSaver {
    pub saved: Rc<RefCell<Vec<ExportPayload>>>,
}

impl FileSaver for RecordingSaver {
    fn save(&self, payload: &ExportPayload) {
        self.saved.borrow_mut().push(payload.clone());
    }
}

#[allow(unused)]
pub fn new_harness<'a>() -> Harness<'a, QrSmithApp> {
    let _ = env_logger::builder().is_test(true).try_init();
    let app = QrSmithApp::new(State::default());
    Harness::new_eframe(|_| app)
}

#[allow(unused)]
pub fn new_harness_with_saver<'a>() -> (Harness<'a, QrSmithApp>, RecordingSaver) {
    let _ = env_logger::builder().is_test(true).try_init();
    let saver = RecordingSaver::default();
    let app = QrSmithApp::new(State::new(Box::new(saver.clone())));
    (Harness::new_eframe(|_| app), saver)
}

/// Commit a parameter change the way the form does: update the store and
/// mark the parameters dirty so the next frame reruns the pipeline.
#[allow(unused)]
pub fn edit_params(harness: &mut Harness<'_, QrSmithApp>, f: impl FnOnce(&mut GenerationParams)) {
    let state = harness.state_mut().state_mut();
    state.ctx.update::<GenerationParams>(f);
    state.ctx.mark_dirty::<GenerationParams>();
}

/// Step frames until the outstanding regeneration (if any) has landed.
#[allow(unused)]
pub async fn settle(harness: &mut Harness<'_, QrSmithApp>) {
    for _ in 0..200 {
        harness.step();
        if !harness.state().state().regen_pending {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("regeneration did not settle");
}

#[allow(unused)]
pub fn current_image(harness: &Harness<'_, QrSmithApp>) -> EncodedImage {
    harness
        .state()
        .state()
        .ctx
        .state::<EncodedImage>()
        .expect("EncodedImage is registered at startup")
        .clone()
}

/// Decode the embedded payload and report its pixel dimensions.
#[allow(unused)]
pub fn decoded_size(encoded: &EncodedImage) -> (u32, u32) {
    let data_url = encoded.data_url().expect("image should be present");
    let (mime, bytes) = qrsmith_business::decode_data_url(data_url).expect("well-formed data URL");
    assert_eq!(mime, "image/png");
    let img = image::load_from_memory(&bytes).expect("valid png payload");
    (img.width(), img.height())
}
