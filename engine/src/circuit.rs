use log::{debug, info};

use crate::{
    components::{AddressState, OutputChannel, OutputSelector},
    error::Result,
    table::{bitwise_counter, Table},
    types::{ChannelIndex, LineId, Transition, NUM_ADDRESS_LINES},
    utils::{bit_char, index_char},
};

pub const OUTPUT_COLUMN: &str = "Y";

/// The address lines plus the eight output channels they select between.
/// The active channel is always derived from the address, never stored apart from it.
#[derive(Debug, Clone, Default)]
pub struct MultiplexerState {
    address: AddressState,
    selector: OutputSelector,
}

impl MultiplexerState {
    pub fn new() -> MultiplexerState {
        MultiplexerState {
            address: AddressState::new(),
            selector: OutputSelector::new(),
        }
    }

    pub fn toggle_address_line(&mut self, line: LineId) -> Transition {
        let from = self.selector.active_index();
        self.address.toggle(line);
        // flipping one bit always lands on a different channel
        let tr = self.selector.follow(&self.address).unwrap_or(Transition {
            from,
            to: self.selector.active_index(),
        });
        debug!(
            "line {} -> {}: I{} => {}",
            line,
            self.address.line(line),
            tr.from,
            self.selector.active_label()
        );
        tr
    }

    pub fn toggle_address_line_by_id(&mut self, line_id: usize) -> Result<Transition> {
        let line = LineId::from_index(line_id)?;
        Ok(self.toggle_address_line(line))
    }

    pub fn reset(&mut self) -> Option<Transition> {
        self.address = AddressState::new();
        let tr = self.selector.follow(&self.address);
        info!("multiplexer reset, {} active", self.active_channel_label());
        tr
    }

    pub fn active_channel_label(&self) -> &str {
        self.selector.active_label()
    }

    pub fn active_channel_index(&self) -> ChannelIndex {
        self.selector.active_index()
    }

    pub fn address_line(&self, line: LineId) -> bool {
        self.address.line(line)
    }

    pub fn address_bits(&self) -> [bool; NUM_ADDRESS_LINES] {
        self.address.bits()
    }

    pub fn channels(&self) -> &[OutputChannel] {
        self.selector.channels()
    }

    pub fn active_count(&self) -> usize {
        self.selector.active_count()
    }

    /// Every address with the channel it selects. The live state is left alone.
    pub fn truth_table(&self) -> Table<char> {
        let mut t = Table::<char>::new();
        let mut cols: Vec<String> = LineId::ALL.iter().map(|l| l.name().to_string()).collect();
        cols.push(OUTPUT_COLUMN.to_string());
        t.set_columns(cols);

        for bits in bitwise_counter(NUM_ADDRESS_LINES) {
            let mut lines = [false; NUM_ADDRESS_LINES];
            lines.copy_from_slice(&bits);
            let selected = AddressState::from_bits(lines).current_index();

            let mut row: Vec<char> = bits.iter().map(|b| bit_char(*b)).collect();
            row.push(index_char(selected));
            t.push_row(row);
        }
        t
    }
}
