use ui_elems_mux_simulator::{
    app::MuxSimulatorUI,
    consts::{APP_TITLE, WINDOW_HEIGHT, WINDOW_WIDTH},
    logging::init_logging,
};

fn main() -> eframe::Result<()> {
    if let Err(e) = init_logging() {
        eprintln!("logging disabled: {}", e);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(MuxSimulatorUI::new()))),
    )
}
