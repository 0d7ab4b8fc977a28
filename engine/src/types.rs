use std::fmt;

use crate::error::{MuxError, Result};

pub type ChannelIndex = usize;

pub const NUM_ADDRESS_LINES: usize = 3;
pub const NUM_CHANNELS: usize = 1 << NUM_ADDRESS_LINES;

/// One of the three select inputs. Listed most significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LineId {
    A,
    B,
    C,
}

impl LineId {
    pub const ALL: [LineId; NUM_ADDRESS_LINES] = [LineId::A, LineId::B, LineId::C];

    pub fn index(self) -> usize {
        self as usize
    }

    // a -> 4, b -> 2, c -> 1
    pub fn weight(self) -> ChannelIndex {
        1 << (NUM_ADDRESS_LINES - 1 - self.index())
    }

    pub fn from_index(idx: usize) -> Result<LineId> {
        Self::ALL
            .get(idx)
            .copied()
            .ok_or(MuxError::InvalidArgument {
                what: "address line",
                value: idx,
            })
    }

    pub fn name(self) -> &'static str {
        match self {
            LineId::A => "A",
            LineId::B => "B",
            LineId::C => "C",
        }
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single deactivate-then-activate step of the output selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: ChannelIndex,
    pub to: ChannelIndex,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_follow_bit_order() {
        let weights: Vec<usize> = LineId::ALL.iter().map(|l| l.weight()).collect();
        assert_eq!(weights, vec![4, 2, 1]);
    }

    #[test]
    fn from_index_rejects_fourth_line() {
        assert_eq!(LineId::from_index(2), Ok(LineId::C));
        assert_eq!(
            LineId::from_index(3),
            Err(MuxError::InvalidArgument {
                what: "address line",
                value: 3
            })
        );
    }
}
