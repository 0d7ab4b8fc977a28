pub const APP_TITLE: &str = "8-to-1 Multiplexer";

pub const WINDOW_WIDTH: f32 = 860.0;
pub const WINDOW_HEIGHT: f32 = 700.0;

// channel labels I0..I7, stacked down the left of the mux body
pub const CHANNEL_LABEL_X: f32 = 300.0;
pub const CHANNEL_TOP_Y: f32 = 90.0;
pub const CHANNEL_SPACING: f32 = 52.0;
pub const LABEL_SIZE: f32 = 30.0;
pub const CHANNEL_FONT_SIZE: f32 = 20.0;
pub const OUTPUT_FONT_SIZE: f32 = 16.0;

pub const MUX_LEFT: f32 = 560.0;
pub const MUX_RIGHT: f32 = 650.0;
pub const MUX_TOP: f32 = 70.0;
pub const MUX_BOTTOM: f32 = 520.0;

// select inputs enter the bottom of the body at MUX_SELECT_X + i * MUX_SELECT_SPACING
pub const MUX_SELECT_X: f32 = 575.0;
pub const MUX_SELECT_SPACING: f32 = 30.0;

pub const PORT_X: f32 = 347.0;
pub const PORT_Y: f32 = 620.0;
pub const PORT_SPACING: f32 = 62.0;
pub const PORT_SIZE: f32 = 25.0;
// horizontal run of each address wire, nested so the wires never cross
pub const ADDRESS_ELBOW_Y: f32 = 545.0;
pub const ADDRESS_ELBOW_SPACING: f32 = 20.0;
pub const COMPLEMENT_OFFSET: f32 = 8.0;

pub const OUTPUT_LABEL_X: f32 = 760.0;

pub const ACTIVE_WIRE_WIDTH: f32 = 3.0;
pub const IDLE_WIRE_WIDTH: f32 = 1.5;

pub const RED_COL: egui::Color32 = egui::Color32::from_rgb(139, 0, 0);
pub const GREEN_COL: egui::Color32 = egui::Color32::from_rgb(34, 139, 34);
pub const IDLE_COL: egui::Color32 = egui::Color32::from_rgb(90, 90, 90);
pub const BACKGROUND_COL: egui::Color32 = egui::Color32::from_rgb(80, 60, 60);
pub const BODY_COL: egui::Color32 = egui::Color32::from_rgb(60, 45, 45);
