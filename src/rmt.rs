//! RMT capabilities, ESP32-S2

/// Words of RMT RAM owned by each channel.
pub const CHANNEL_MEM_WORDS: usize = 64;
/// Number of RMT channels.
pub const CHANNELS_NUM: usize = 4;
/// RX can wrap around its channel memory in ping-pong mode.
pub const SUPPORT_RX_PINGPONG_MODE: bool = true;
/// RX can demodulate a carrier.
pub const SUPPORT_RX_DEMODULATION: bool = true;

/// Bytes of RMT RAM in total.
pub const MEM_BYTES: usize = CHANNEL_MEM_WORDS * CHANNELS_NUM * 4;

/// RMT channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Channel(u8);

impl Channel {
    pub const fn new(n: u8) -> Option<Self> {
        if (n as usize) < CHANNELS_NUM {
            Some(Self(n))
        } else {
            None
        }
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Word offset of the channel's block in RMT RAM.
    pub const fn mem_offset_words(self) -> usize {
        self.index() * CHANNEL_MEM_WORDS
    }
}
