use std::time::Duration;

use qrsmith_business::GenerationParams;

use crate::state::State;
use crate::widgets::{self, PreviewState};

/// Poll interval while a regeneration completion is outstanding.
const REGEN_POLL: Duration = Duration::from_millis(50);

pub struct QrSmithApp {
    state: State,
    preview: PreviewState,
}

impl QrSmithApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self {
            state,
            preview: PreviewState::default(),
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for QrSmithApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Make finished regenerations visible before rendering.
        if self.state.ctx.sync_computes() > 0 {
            self.state.regen_pending = false;
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("QR Code Generator");

            widgets::params_form(&mut self.state.ctx, ui);
            widgets::download_button(&self.state.ctx, self.state.saver.as_ref(), ui);

            ui.separator();
            widgets::qr_preview(&self.state.ctx, ui, &mut self.preview);

            powered_by_egui_and_eframe(ui);
        });

        // The form committed a parameter change this frame: rerun the
        // pipeline. Issuing the run retires every older in-flight result.
        if self.state.ctx.take_dirty::<GenerationParams>() {
            self.state.ctx.run_compute(&mut self.state.regen);
            // Even a synchronous publish still needs one more sync pass.
            self.state.regen_pending = true;
        }

        // Poll for the outstanding completion even without input events. A
        // run that publishes nothing (encode failure) keeps the poll alive
        // until the next edit.
        if self.state.regen_pending {
            ctx.request_repaint_after(REGEN_POLL);
        }
    }
}

fn powered_by_egui_and_eframe(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.label("Powered by ");
        ui.hyperlink_to("egui", "https://github.com/emilk/egui");
        ui.label(" and ");
        ui.hyperlink_to(
            "eframe",
            "https://github.com/emilk/egui/tree/master/crates/eframe",
        );
        ui.label(".");
    });
}
