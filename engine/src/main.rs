use std::collections::VecDeque;

use mux_engine::{
    update_ops::{apply_updates, MuxUpdateOps, UiEventSource},
    LineId, MultiplexerState,
};
use tracing_subscriber::EnvFilter;

fn walk_scenario(mux: &mut MultiplexerState) {
    let mut queue = VecDeque::<MuxUpdateOps>::new();
    println!("start -> {}", mux.active_channel_label());
    for line in [LineId::C, LineId::A, LineId::C] {
        queue.emit_toggle(line);
        let report = apply_updates(&mut queue, mux);
        for tr in report.transitions {
            println!("toggle {}: I{} -> I{}", line, tr.from, tr.to);
        }
    }
    for ch in mux.channels() {
        println!("{}", ch);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut mux = MultiplexerState::new();
    println!("{}", mux.truth_table());
    walk_scenario(&mut mux);
    mux.reset();
}
