use std::collections::VecDeque;

use log::info;
use mux_engine::{circuit::MultiplexerState, update_ops::apply_updates};

use crate::update_ops::{MuxUpdateOps, SyncState};

/// Applies every queued op to the multiplexer and returns how many ops were taken.
/// `sync` becomes `Error` if any op in the batch was rejected, even when later ops succeed.
pub fn ckt_communicate(
    receiver: &mut VecDeque<MuxUpdateOps>,
    mux: &mut MultiplexerState,
    sync: &mut SyncState,
) -> usize {
    let taken = receiver.len();
    if taken == 0 {
        return 0;
    }
    let report = apply_updates(receiver, mux);
    for tr in &report.transitions {
        info!("I{} -> I{}", tr.from, tr.to);
    }
    *sync = match report.errors.last() {
        Some(e) => SyncState::Error(e.to_string()),
        None => SyncState::Synced,
    };
    taken
}

#[cfg(test)]
mod tests {
    use mux_engine::{update_ops::UiEventSource, LineId};

    use super::*;

    #[test]
    fn toggles_reach_the_engine() {
        let mut q: VecDeque<MuxUpdateOps> = VecDeque::new();
        let mut mux = MultiplexerState::new();
        let mut sync = SyncState::Synced;
        q.emit_toggle(LineId::A);
        q.emit_toggle(LineId::B);
        assert_eq!(ckt_communicate(&mut q, &mut mux, &mut sync), 2);
        assert_eq!(mux.active_channel_label(), "I6");
        assert_eq!(sync, SyncState::Synced);
    }

    #[test]
    fn bad_id_surfaces_as_error() {
        let mut q = VecDeque::from([MuxUpdateOps::ToggleRaw(5)]);
        let mut mux = MultiplexerState::new();
        let mut sync = SyncState::Synced;
        ckt_communicate(&mut q, &mut mux, &mut sync);
        assert!(sync.is_error());
        assert_eq!(sync.error_msg(), "invalid address line: 5");
        assert_eq!(mux.active_channel_label(), "I0");
    }

    #[test]
    fn later_success_keeps_earlier_error() {
        let mut q = VecDeque::from([MuxUpdateOps::ToggleRaw(9), MuxUpdateOps::Toggle(LineId::A)]);
        let mut mux = MultiplexerState::new();
        let mut sync = SyncState::Synced;
        assert_eq!(ckt_communicate(&mut q, &mut mux, &mut sync), 2);
        assert_eq!(sync.error_msg(), "invalid address line: 9");
        // the good op still went through
        assert_eq!(mux.active_channel_label(), "I4");
    }

    #[test]
    fn clean_batch_clears_old_error() {
        let mut q = VecDeque::from([MuxUpdateOps::Toggle(LineId::C)]);
        let mut mux = MultiplexerState::new();
        let mut sync = SyncState::Error("stale".into());
        ckt_communicate(&mut q, &mut mux, &mut sync);
        assert!(sync.is_synced());
    }

    #[test]
    fn empty_queue_leaves_sync_alone() {
        let mut q: VecDeque<MuxUpdateOps> = VecDeque::new();
        let mut mux = MultiplexerState::new();
        let mut sync = SyncState::Error("stale".into());
        assert_eq!(ckt_communicate(&mut q, &mut mux, &mut sync), 0);
        assert_eq!(sync.error_msg(), "stale");
    }
}
