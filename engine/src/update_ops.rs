use std::collections::VecDeque;

use log::warn;

use crate::{
    circuit::MultiplexerState,
    error::{MuxError, Result},
    types::{LineId, Transition},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MuxUpdateOps {
    Toggle(LineId),
    // ids coming from callers that don't speak LineId
    ToggleRaw(usize),
    Reset,
}

/// Anything the presentation layer uses to hand user actions to the engine.
pub trait UiEventSource {
    fn emit_toggle(&mut self, line: LineId);

    fn emit_reset(&mut self);
}

impl UiEventSource for VecDeque<MuxUpdateOps> {
    fn emit_toggle(&mut self, line: LineId) {
        self.push_back(MuxUpdateOps::Toggle(line));
    }

    fn emit_reset(&mut self) {
        self.push_back(MuxUpdateOps::Reset);
    }
}

pub fn apply_update(op: MuxUpdateOps, mux: &mut MultiplexerState) -> Result<Option<Transition>> {
    match op {
        MuxUpdateOps::Toggle(line) => Ok(Some(mux.toggle_address_line(line))),
        MuxUpdateOps::ToggleRaw(id) => mux.toggle_address_line_by_id(id).map(Some),
        MuxUpdateOps::Reset => Ok(mux.reset()),
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct UpdateReport {
    pub transitions: Vec<Transition>,
    pub errors: Vec<MuxError>,
}

/// Drains `receiver` into `mux`. A rejected op is recorded and the rest still run.
pub fn apply_updates(
    receiver: &mut VecDeque<MuxUpdateOps>,
    mux: &mut MultiplexerState,
) -> UpdateReport {
    let mut report = UpdateReport::default();
    while let Some(op) = receiver.pop_front() {
        match apply_update(op, mux) {
            Ok(Some(tr)) => report.transitions.push(tr),
            Ok(None) => {}
            Err(e) => {
                warn!("dropping {:?}: {}", op, e);
                report.errors.push(e);
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_collects_emitted_events() {
        let mut q: VecDeque<MuxUpdateOps> = VecDeque::new();
        q.emit_toggle(LineId::A);
        q.emit_reset();
        assert_eq!(
            q.into_iter().collect::<Vec<_>>(),
            vec![MuxUpdateOps::Toggle(LineId::A), MuxUpdateOps::Reset]
        );
    }

    #[test]
    fn draining_matches_applying_one_by_one() {
        let ops = [
            MuxUpdateOps::Toggle(LineId::C),
            MuxUpdateOps::Toggle(LineId::A),
            MuxUpdateOps::ToggleRaw(2),
        ];

        let mut one_by_one = MultiplexerState::new();
        for op in ops {
            apply_update(op, &mut one_by_one).unwrap();
        }

        let mut q: VecDeque<MuxUpdateOps> = ops.into_iter().collect();
        let mut drained = MultiplexerState::new();
        let report = apply_updates(&mut q, &mut drained);

        assert!(q.is_empty());
        assert!(report.errors.is_empty());
        assert_eq!(
            report.transitions,
            vec![
                Transition { from: 0, to: 1 },
                Transition { from: 1, to: 5 },
                Transition { from: 5, to: 4 },
            ]
        );
        assert_eq!(drained.active_channel_label(), "I4");
        assert_eq!(
            drained.active_channel_index(),
            one_by_one.active_channel_index()
        );
    }

    #[test]
    fn bad_raw_id_is_reported_and_skipped() {
        let mut q: VecDeque<MuxUpdateOps> = [
            MuxUpdateOps::ToggleRaw(7),
            MuxUpdateOps::Toggle(LineId::B),
        ]
        .into_iter()
        .collect();
        let mut mux = MultiplexerState::new();
        let report = apply_updates(&mut q, &mut mux);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.transitions, vec![Transition { from: 0, to: 2 }]);
        assert_eq!(mux.active_channel_label(), "I2");
    }

    #[test]
    fn reset_on_initial_state_is_not_a_transition() {
        let mut mux = MultiplexerState::new();
        assert_eq!(apply_update(MuxUpdateOps::Reset, &mut mux), Ok(None));
    }
}
