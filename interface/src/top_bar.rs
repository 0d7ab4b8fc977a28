use egui::{Button, Layout, RichText, Ui};
use mux_engine::update_ops::UiEventSource;

use crate::{
    consts::{APP_TITLE, GREEN_COL, RED_COL},
    display_elems::DisplayState,
    update_ops::SyncState,
};

pub fn render_top_bar(
    ui: &mut Ui,
    ds: &mut DisplayState,
    sync: &SyncState,
    events: &mut impl UiEventSource,
) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(APP_TITLE).strong());
        ui.separator();
        if ui.button("Reset").clicked() {
            events.emit_reset();
        }
        ui.toggle_value(&mut ds.show_truth_table, "Truth table");

        ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
            let btn = Button::new(sync.status_text())
                .fill(if sync.is_error() { RED_COL } else { GREEN_COL });
            ui.add(btn);
        });
    });
}
