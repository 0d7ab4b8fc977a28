use std::collections::VecDeque;

use mux_engine::circuit::MultiplexerState;

use crate::{
    component_ui::{paint_schematic, truth_table_ui},
    consts::BACKGROUND_COL,
    display_elems::DisplayState,
    state_handlers::ckt_communicate,
    top_bar::render_top_bar,
    update_ops::{MuxUpdateOps, SyncState},
};

pub struct MuxSimulatorUI {
    mux: MultiplexerState,
    pending: VecDeque<MuxUpdateOps>,
    sync: SyncState,
    display_state: DisplayState,
}

impl MuxSimulatorUI {
    pub fn new() -> Self {
        let mux = MultiplexerState::new();
        let display_state = DisplayState::init_display_state(&mux);
        Self {
            mux,
            pending: VecDeque::new(),
            sync: SyncState::Synced,
            display_state,
        }
    }

    pub fn mux(&self) -> &MultiplexerState {
        &self.mux
    }

    pub fn sync(&self) -> &SyncState {
        &self.sync
    }

    /// The queue user actions land in; drained once per frame.
    pub fn events(&mut self) -> &mut VecDeque<MuxUpdateOps> {
        &mut self.pending
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        // apply what earlier frames queued so this frame paints the current state
        ckt_communicate(&mut self.pending, &mut self.mux, &mut self.sync);

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            render_top_bar(ui, &mut self.display_state, &self.sync, &mut self.pending);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.painter()
                .rect_filled(ui.max_rect(), 0.0, BACKGROUND_COL);
            let origin = ui.max_rect().min.to_vec2();
            paint_schematic(ui, origin, &self.mux, &mut self.pending);
        });

        if self.display_state.show_truth_table {
            let active = self.mux.active_channel_index();
            let table = &self.display_state.truth_table;
            egui::Window::new("Truth table")
                .open(&mut self.display_state.show_truth_table)
                .resizable(false)
                .show(ctx, |ui| truth_table_ui(ui, table, active));
        }

        if !self.pending.is_empty() {
            if !self.sync.is_error() {
                self.sync = SyncState::NotSynced;
            }
            ctx.request_repaint();
        }
    }
}

impl Default for MuxSimulatorUI {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for MuxSimulatorUI {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

#[cfg(test)]
mod tests {
    use egui::{epaint::Shape, Event, Key, RawInput};
    use mux_engine::{update_ops::UiEventSource, LineId};

    use super::*;

    fn run_frame_with(
        app: &mut MuxSimulatorUI,
        ctx: &egui::Context,
        input: RawInput,
    ) -> Vec<String> {
        let out = ctx.run(input, |ctx| app.show(ctx));
        out.shapes
            .iter()
            .filter_map(|clipped| match &clipped.shape {
                Shape::Text(text) => Some(text.galley.text().to_string()),
                _ => None,
            })
            .collect()
    }

    fn run_frame(app: &mut MuxSimulatorUI, ctx: &egui::Context) -> Vec<String> {
        run_frame_with(app, ctx, RawInput::default())
    }

    fn key_event(key: Key, repeat: bool) -> Event {
        Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat,
            modifiers: Default::default(),
        }
    }

    #[test]
    fn first_frame_shows_i0() {
        let ctx = egui::Context::default();
        let mut app = MuxSimulatorUI::new();
        run_frame(&mut app, &ctx);
        assert_eq!(app.mux().active_channel_label(), "I0");
        assert!(app.sync().is_synced());
    }

    #[test]
    fn queued_toggles_apply_before_painting() {
        let ctx = egui::Context::default();
        let mut app = MuxSimulatorUI::new();
        app.events().emit_toggle(LineId::C);
        app.events().emit_toggle(LineId::A);
        let texts = run_frame(&mut app, &ctx);
        assert_eq!(app.mux().active_channel_label(), "I5");
        assert!(app.sync().is_synced());
        assert!(app.events().is_empty());
        // the new channel and a green indicator land on the same frame
        assert!(texts.iter().any(|t| t == "I5"));
        assert!(texts.iter().any(|t| t == "Synced"));
    }

    #[test]
    fn indicator_stays_synced_across_a_toggle() {
        let ctx = egui::Context::default();
        let mut app = MuxSimulatorUI::new();
        run_frame(&mut app, &ctx);
        app.events().emit_toggle(LineId::C);
        for _ in 0..3 {
            let texts = run_frame(&mut app, &ctx);
            assert!(texts.iter().any(|t| t == "Synced"));
        }
        assert_eq!(app.mux().active_channel_label(), "I1");
    }

    #[test]
    fn bad_raw_id_turns_indicator_red() {
        let ctx = egui::Context::default();
        let mut app = MuxSimulatorUI::new();
        app.events().push_back(MuxUpdateOps::ToggleRaw(9));
        let texts = run_frame(&mut app, &ctx);
        assert_eq!(app.sync().error_msg(), "invalid address line: 9");
        assert!(texts.iter().any(|t| t == "invalid address line: 9"));

        // the error sticks until a later op succeeds
        run_frame(&mut app, &ctx);
        assert!(app.sync().is_error());
        app.events().emit_reset();
        run_frame(&mut app, &ctx);
        assert!(app.sync().is_synced());
    }

    #[test]
    fn held_key_toggles_once() {
        let ctx = egui::Context::default();
        let mut app = MuxSimulatorUI::new();
        let input = RawInput {
            events: vec![
                key_event(Key::A, false),
                key_event(Key::A, true),
                key_event(Key::A, true),
            ],
            ..Default::default()
        };
        run_frame_with(&mut app, &ctx, input);
        run_frame(&mut app, &ctx);
        assert!(app.mux().address_line(LineId::A));
        assert_eq!(app.mux().active_channel_label(), "I4");
    }

    #[test]
    fn truth_table_window_renders() {
        let ctx = egui::Context::default();
        let mut app = MuxSimulatorUI::new();
        app.display_state.show_truth_table = true;
        app.events().emit_toggle(LineId::B);
        run_frame(&mut app, &ctx);
        let texts = run_frame(&mut app, &ctx);
        assert!(app.display_state.show_truth_table);
        assert_eq!(app.mux().active_channel_index(), 2);
        assert!(texts.iter().any(|t| t == "Y = I2"));
    }
}
