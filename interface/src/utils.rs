#[macro_export]
macro_rules! true_false_color {
    ($a: expr) => {
        if $a {
            $crate::consts::GREEN_COL
        } else {
            $crate::consts::RED_COL
        }
    };
}

pub fn wire_color(active: bool) -> egui::Color32 {
    if active {
        crate::consts::GREEN_COL
    } else {
        crate::consts::IDLE_COL
    }
}

pub fn wire_width(active: bool) -> f32 {
    if active {
        crate::consts::ACTIVE_WIRE_WIDTH
    } else {
        crate::consts::IDLE_WIRE_WIDTH
    }
}
