use egui::{ComboBox, DragValue, Ui};
use qrsmith_business::{ExportFormat, GenerationParams, MAX_DIMENSION, MIN_DIMENSION};
use qrsmith_states::StateCtx;

/// Renders the parameter form.
///
/// Every edit commits immediately; a change to any generation input marks
/// the parameters dirty so the app loop reruns the pipeline. The export
/// format is consulted only at download time and does not trigger
/// regeneration.
pub fn params_form(ctx: &mut StateCtx, ui: &mut Ui) {
    let mut params = ctx.state::<GenerationParams>().cloned().unwrap_or_default();
    let mut changed = false;

    ui.horizontal(|ui| {
        ui.label("Data:");
        changed |= ui.text_edit_singleline(&mut params.text).changed();
    });

    ui.horizontal(|ui| {
        ui.label("Width:");
        changed |= ui
            .add(DragValue::new(&mut params.width).range(MIN_DIMENSION..=MAX_DIMENSION))
            .changed();
        ui.label("Height:");
        changed |= ui
            .add(DragValue::new(&mut params.height).range(MIN_DIMENSION..=MAX_DIMENSION))
            .changed();
    });

    ui.horizontal(|ui| {
        ui.label("QR color:");
        changed |= ui.color_edit_button_srgba(&mut params.foreground).changed();
        ui.label("Background color:");
        changed |= ui.color_edit_button_srgba(&mut params.background).changed();
    });

    if changed {
        ctx.update::<GenerationParams>(|p| *p = params);
        ctx.mark_dirty::<GenerationParams>();
    }

    format_selector(ctx, ui);
}

fn format_selector(ctx: &mut StateCtx, ui: &mut Ui) {
    let mut format = ctx.state::<ExportFormat>().copied().unwrap_or_default();
    let before = format;

    ui.horizontal(|ui| {
        ui.label("Format:");
        ComboBox::from_id_salt("export_format")
            .selected_text(format.label())
            .show_ui(ui, |ui| {
                for candidate in ExportFormat::ALL {
                    ui.selectable_value(&mut format, candidate, candidate.label());
                }
            });
    });

    if format != before {
        ctx.update::<ExportFormat>(|f| *f = format);
    }
}
