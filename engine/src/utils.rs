use crate::types::ChannelIndex;

pub fn channel_label(idx: ChannelIndex) -> String {
    format!("I{}", idx)
}

pub fn bit_char(val: bool) -> char {
    (val as u8 + b'0') as char
}

pub fn index_char(idx: ChannelIndex) -> char {
    // only meaningful for single digit indices, which is all a 3 line mux has
    (idx as u8 + b'0') as char
}
