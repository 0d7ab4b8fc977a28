use egui::{pos2, vec2, Pos2, Rect};
use mux_engine::{circuit::MultiplexerState, table::Table, ChannelIndex, LineId};

use crate::consts::{
    ADDRESS_ELBOW_SPACING, ADDRESS_ELBOW_Y, CHANNEL_LABEL_X, CHANNEL_SPACING, CHANNEL_TOP_Y,
    COMPLEMENT_OFFSET, LABEL_SIZE, MUX_BOTTOM, MUX_LEFT, MUX_RIGHT, MUX_SELECT_SPACING,
    MUX_SELECT_X, MUX_TOP, OUTPUT_LABEL_X, PORT_SIZE, PORT_SPACING, PORT_X, PORT_Y,
};

// All geometry here is relative to the top left of the schematic area, in px.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireKind {
    // label -> body
    Channel(ChannelIndex),
    // path through the body from a channel to the output pin
    Route(ChannelIndex),
    Output,
    // `true` is the rail carrying the line itself, `false` its complement
    Address(LineId, bool),
}

#[derive(Debug, Clone)]
pub struct Wire {
    pub kind: WireKind,
    pub pts: Vec<Pos2>,
    pub active: bool,
}

pub fn mux_body() -> Rect {
    Rect::from_min_max(pos2(MUX_LEFT, MUX_TOP), pos2(MUX_RIGHT, MUX_BOTTOM))
}

pub fn channel_label_rect(idx: ChannelIndex) -> Rect {
    Rect::from_min_size(
        pos2(CHANNEL_LABEL_X, CHANNEL_TOP_Y + idx as f32 * CHANNEL_SPACING),
        vec2(LABEL_SIZE, LABEL_SIZE),
    )
}

fn channel_y(idx: ChannelIndex) -> f32 {
    channel_label_rect(idx).center().y
}

pub fn output_y() -> f32 {
    mux_body().center().y
}

pub fn output_label_rect() -> Rect {
    Rect::from_min_size(
        pos2(OUTPUT_LABEL_X, output_y() - LABEL_SIZE / 2.0),
        vec2(LABEL_SIZE, LABEL_SIZE),
    )
}

pub fn port_rect(line: LineId) -> Rect {
    Rect::from_min_size(
        pos2(PORT_X + line.index() as f32 * PORT_SPACING, PORT_Y),
        vec2(PORT_SIZE, PORT_SIZE),
    )
}

fn address_wire(line: LineId, polarity: bool, value: bool) -> Wire {
    let i = line.index() as f32;
    let shift = if polarity { 0.0 } else { COMPLEMENT_OFFSET };
    let x = port_rect(line).center().x + shift;
    let elbow_y = ADDRESS_ELBOW_Y + i * ADDRESS_ELBOW_SPACING + shift;
    let select_x = MUX_SELECT_X + i * MUX_SELECT_SPACING + shift;
    Wire {
        kind: WireKind::Address(line, polarity),
        pts: vec![
            pos2(x, PORT_Y),
            pos2(x, elbow_y),
            pos2(select_x, elbow_y),
            pos2(select_x, MUX_BOTTOM),
        ],
        active: value == polarity,
    }
}

/// Every wire of the schematic with its current activity.
pub fn schematic_wires(mux: &MultiplexerState) -> Vec<Wire> {
    let mut wires = Vec::new();
    let out_y = output_y();
    for ch in mux.channels() {
        let y = channel_y(ch.index);
        wires.push(Wire {
            kind: WireKind::Channel(ch.index),
            pts: vec![pos2(channel_label_rect(ch.index).max.x + 4.0, y), pos2(MUX_LEFT, y)],
            active: ch.is_active(),
        });
        wires.push(Wire {
            kind: WireKind::Route(ch.index),
            pts: vec![
                pos2(MUX_LEFT, y),
                pos2(MUX_LEFT + 20.0, y),
                pos2(MUX_RIGHT - 20.0, out_y),
                pos2(MUX_RIGHT, out_y),
            ],
            active: ch.is_active(),
        });
    }
    wires.push(Wire {
        kind: WireKind::Output,
        pts: vec![pos2(MUX_RIGHT, out_y), pos2(OUTPUT_LABEL_X - 6.0, out_y)],
        active: true,
    });
    for line in LineId::ALL {
        let value = mux.address_line(line);
        wires.push(address_wire(line, true, value));
        wires.push(address_wire(line, false, value));
    }
    // active wires last so they paint over idle ones where they share pixels
    wires.sort_by_key(|w| w.active);
    wires
}

pub struct DisplayState {
    pub show_truth_table: bool,
    pub truth_table: Table<char>,
}

impl DisplayState {
    pub fn init_display_state(mux: &MultiplexerState) -> Self {
        Self {
            show_truth_table: false,
            truth_table: mux.truth_table(),
        }
    }
}
