#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use qrsmith_ui::QrSmithApp;
use qrsmith_ui::state::State;

mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

fn main() -> eframe::Result {
    // Log to stderr (run with `RUST_LOG=debug` for pipeline tracing).
    env_logger::Builder::from_env(env_logger::Env::default()).init();

    // The pipeline encodes on tokio blocking workers; keep a runtime entered
    // for the lifetime of the UI.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .build()
        .expect("Failed to build tokio runtime");
    let _guard = runtime.enter();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 520.0])
            .with_min_inner_size([320.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "QR Smith",
        native_options,
        Box::new(|_cc| Ok(Box::new(QrSmithApp::new(State::default())))),
    )
}
