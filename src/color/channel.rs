const CHANNEL_ID_RED: i32 = 0;
const CHANNEL_ID_GREEN: i32 = 1;
const CHANNEL_ID_BLUE: i32 = 2;

/// Single color channel of a pixel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Channel {
    Red = 0,
    Green = 1,
    Blue = 2,
}

impl Channel {
    /// Channels in storage order
    pub const ALL: [Self; 3] = [Self::Red, Self::Green, Self::Blue];

    /// Position of the channel inside an `[r, g, b]` triple
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Which channels a pixel write touches
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChannelSelector {
    /// Only the given channel
    Single(Channel),
    /// Red, green and blue
    #[default]
    All,
}

impl ChannelSelector {
    /// Decode a raw channel number.
    ///
    /// `0..=2` select red, green or blue. Any other value selects all channels.
    pub const fn from_raw(value: i32) -> Self {
        match value {
            CHANNEL_ID_RED => Self::Single(Channel::Red),
            CHANNEL_ID_GREEN => Self::Single(Channel::Green),
            CHANNEL_ID_BLUE => Self::Single(Channel::Blue),
            _ => Self::All,
        }
    }

    /// Channels covered by this selector
    pub const fn channels(self) -> &'static [Channel] {
        match self {
            Self::Single(Channel::Red) => &[Channel::Red],
            Self::Single(Channel::Green) => &[Channel::Green],
            Self::Single(Channel::Blue) => &[Channel::Blue],
            Self::All => &Channel::ALL,
        }
    }
}
