use std::fmt;

use crate::{
    error::{MuxError, Result},
    types::{ChannelIndex, LineId, Transition, NUM_ADDRESS_LINES, NUM_CHANNELS},
    utils::channel_label,
};

/// The three select lines of the multiplexer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddressState {
    lines: [bool; NUM_ADDRESS_LINES],
}

impl AddressState {
    pub fn new() -> AddressState {
        AddressState::default()
    }

    pub fn from_bits(lines: [bool; NUM_ADDRESS_LINES]) -> AddressState {
        AddressState { lines }
    }

    pub fn from_index(idx: ChannelIndex) -> Result<AddressState> {
        if idx >= NUM_CHANNELS {
            return Err(MuxError::InvalidArgument {
                what: "channel index",
                value: idx,
            });
        }
        let mut lines = [false; NUM_ADDRESS_LINES];
        for line in LineId::ALL {
            lines[line.index()] = idx & line.weight() != 0;
        }
        Ok(AddressState { lines })
    }

    pub fn toggle(&mut self, line: LineId) {
        let bit = &mut self.lines[line.index()];
        *bit = !*bit;
    }

    pub fn line(&self, line: LineId) -> bool {
        self.lines[line.index()]
    }

    pub fn bits(&self) -> [bool; NUM_ADDRESS_LINES] {
        self.lines
    }

    /// `a*4 + b*2 + c`
    pub fn current_index(&self) -> ChannelIndex {
        LineId::ALL
            .iter()
            .filter(|line| self.line(**line))
            .map(|line| line.weight())
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputChannel {
    pub index: ChannelIndex,
    pub label: String,
    active: bool,
}

impl OutputChannel {
    fn new(index: ChannelIndex) -> OutputChannel {
        OutputChannel {
            index,
            label: channel_label(index),
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl fmt::Display for OutputChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state_str = if self.active {
            "\x1b[32mACTIVE\x1b[0m"
        } else {
            "\x1b[31midle\x1b[0m"
        };
        write!(f, "{} - {}", self.label, state_str)
    }
}

/// Eight channel state machine. Exactly one channel is active at all times;
/// `select` swaps the active flag between two channels in one call.
#[derive(Debug, Clone)]
pub struct OutputSelector {
    channels: Vec<OutputChannel>,
    active: ChannelIndex,
}

impl OutputSelector {
    pub fn new() -> OutputSelector {
        let mut channels: Vec<OutputChannel> = (0..NUM_CHANNELS).map(OutputChannel::new).collect();
        channels[0].active = true;
        OutputSelector {
            channels,
            active: 0,
        }
    }

    pub fn select(&mut self, new_idx: ChannelIndex) -> Result<Option<Transition>> {
        if new_idx >= NUM_CHANNELS {
            return Err(MuxError::InvalidArgument {
                what: "channel index",
                value: new_idx,
            });
        }
        Ok(self.activate(new_idx))
    }

    /// Moves the active flag to whichever channel `address` selects.
    pub fn follow(&mut self, address: &AddressState) -> Option<Transition> {
        self.activate(address.current_index())
    }

    // caller guarantees new_idx < NUM_CHANNELS
    fn activate(&mut self, new_idx: ChannelIndex) -> Option<Transition> {
        if new_idx == self.active {
            return None;
        }
        let from = self.active;
        self.channels[from].active = false;
        self.channels[new_idx].active = true;
        self.active = new_idx;
        Some(Transition { from, to: new_idx })
    }

    pub fn active_index(&self) -> ChannelIndex {
        self.active
    }

    pub fn active_label(&self) -> &str {
        &self.channels[self.active].label
    }

    pub fn channels(&self) -> &[OutputChannel] {
        &self.channels
    }

    pub fn channel(&self, idx: ChannelIndex) -> Option<&OutputChannel> {
        self.channels.get(idx)
    }

    pub fn active_count(&self) -> usize {
        self.channels.iter().filter(|c| c.active).count()
    }
}

impl Default for OutputSelector {
    fn default() -> Self {
        Self::new()
    }
}
