use qrsmith_business::{
    EncodedImage, ExportFormat, FileSaver, GenerationParams, QrRegeneration, SystemFileSaver,
};
use qrsmith_states::StateCtx;

/// The main application state.
///
/// The context exclusively owns the generation parameters, export format and
/// current image; widgets and the pipeline only ever go through it.
pub struct State {
    pub ctx: StateCtx,
    /// The regeneration pipeline, rerun whenever the parameters change.
    pub regen: QrRegeneration,
    /// Save collaborator for the Download action; injectable for tests.
    pub saver: Box<dyn FileSaver>,
    /// A regeneration result is outstanding on the completion channel.
    pub regen_pending: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new(Box::new(SystemFileSaver))
    }
}

impl State {
    pub fn new(saver: Box<dyn FileSaver>) -> Self {
        let mut ctx = StateCtx::new();
        ctx.add_state(GenerationParams::default());
        ctx.add_state(ExportFormat::default());
        // Text starts empty, so the first frame renders the valid "no image"
        // state without running the pipeline.
        ctx.add_state(EncodedImage::absent());

        Self {
            ctx,
            regen: QrRegeneration::default(),
            saver,
            regen_pending: false,
        }
    }
}
