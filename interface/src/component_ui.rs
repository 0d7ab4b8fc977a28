use egui::{Align2, Button, Color32, Event, FontId, Grid, Key, RichText, Stroke, Ui, Vec2};
use mux_engine::{
    circuit::{MultiplexerState, OUTPUT_COLUMN},
    table::Table,
    update_ops::UiEventSource,
    LineId,
};

use crate::{
    consts::{BODY_COL, CHANNEL_FONT_SIZE, OUTPUT_FONT_SIZE},
    display_elems::{channel_label_rect, mux_body, output_label_rect, port_rect, schematic_wires},
    true_false_color,
    utils::{wire_color, wire_width},
};

/// Paints the multiplexer at `origin` and forwards port clicks to `events`.
pub fn paint_schematic(
    ui: &mut Ui,
    origin: Vec2,
    mux: &MultiplexerState,
    events: &mut impl UiEventSource,
) {
    let painter = ui.painter().clone();

    let body = mux_body().translate(origin);
    painter.rect_filled(body, 6.0, BODY_COL);
    painter.rect_stroke(body, 6.0, Stroke::new(2.0, Color32::LIGHT_GRAY));
    painter.text(
        body.center_top() + Vec2::new(0.0, 12.0),
        Align2::CENTER_TOP,
        "MUX 8:1",
        FontId::monospace(12.0),
        Color32::LIGHT_GRAY,
    );

    for wire in schematic_wires(mux) {
        painter.line(
            wire.pts.iter().map(|p| *p + origin).collect(),
            Stroke::new(wire_width(wire.active), wire_color(wire.active)),
        );
    }

    for ch in mux.channels() {
        painter.text(
            channel_label_rect(ch.index).translate(origin).left_center(),
            Align2::LEFT_CENTER,
            &ch.label,
            FontId::proportional(CHANNEL_FONT_SIZE),
            if ch.is_active() {
                Color32::WHITE
            } else {
                Color32::GRAY
            },
        );
    }

    painter.text(
        output_label_rect().translate(origin).left_center(),
        Align2::LEFT_CENTER,
        mux.active_channel_label(),
        FontId::proportional(OUTPUT_FONT_SIZE),
        Color32::WHITE,
    );

    for line in LineId::ALL {
        let rect = port_rect(line).translate(origin);
        let btn = Button::new(RichText::new(line.name()).strong())
            .fill(true_false_color!(mux.address_line(line)));
        if ui.put(rect, btn).clicked() {
            events.emit_toggle(line);
        }
        painter.text(
            rect.center_bottom() + Vec2::new(0.0, 2.0),
            Align2::CENTER_TOP,
            if mux.address_line(line) { "1" } else { "0" },
            FontId::monospace(11.0),
            Color32::LIGHT_GRAY,
        );
    }

    // keyboard shortcuts mirror the port buttons; held keys toggle once
    let pressed: Vec<LineId> = ui.input(|i| {
        i.events
            .iter()
            .filter_map(|ev| match ev {
                Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    ..
                } => key_line(*key),
                _ => None,
            })
            .collect()
    });
    for line in pressed {
        events.emit_toggle(line);
    }
}

fn key_line(key: Key) -> Option<LineId> {
    match key {
        Key::A => Some(LineId::A),
        Key::B => Some(LineId::B),
        Key::C => Some(LineId::C),
        _ => None,
    }
}

pub fn truth_table_ui(ui: &mut Ui, table: &Table<char>, active: usize) {
    Grid::new("truth_table")
        .striped(true)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            for col in table.columns() {
                ui.label(RichText::new(col).strong());
            }
            ui.end_row();
            for (i, row) in table.rows.iter().enumerate() {
                let lit = i == active;
                for val in row {
                    let text = RichText::new(val.to_string()).monospace();
                    ui.label(if lit { text.color(Color32::GREEN) } else { text });
                }
                ui.end_row();
            }
        });
    if let Some(y) = table.get_val_at(active, OUTPUT_COLUMN) {
        ui.label(format!("Y = I{}", y));
    }
}
