//! Frame header byte and panel addressing

/// Start-of-frame byte for a single (non-addressed) panel
pub const SOF: u8 = 0x72;

/// Number of addressable panels on one bus
pub const MAX_PANELS: usize = 8;

/// Address of a panel in a chain (0-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelAddress(u8);

/// Returned when an address falls outside 0-7
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidAddress;

impl PanelAddress {
    /// Create an address, returning `None` outside 0-7
    pub const fn new(address: u8) -> Option<Self> {
        if (address as usize) < MAX_PANELS {
            Some(Self(address))
        } else {
            None
        }
    }

    /// Raw address value
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Address as a slot index
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// All addresses in ascending order
    pub fn all() -> impl Iterator<Item = PanelAddress> {
        (0..MAX_PANELS as u8).map(PanelAddress)
    }
}

impl TryFrom<u8> for PanelAddress {
    type Error = InvalidAddress;

    fn try_from(address: u8) -> Result<Self, Self::Error> {
        Self::new(address).ok_or(InvalidAddress)
    }
}

impl TryFrom<i32> for PanelAddress {
    type Error = InvalidAddress;

    fn try_from(address: i32) -> Result<Self, Self::Error> {
        u8::try_from(address)
            .ok()
            .and_then(Self::new)
            .ok_or(InvalidAddress)
    }
}

impl From<PanelAddress> for u8 {
    fn from(address: PanelAddress) -> Self {
        address.0
    }
}

/// Frame header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Header {
    /// Lone panel, non-addressed mode
    Single,
    /// Panel at the given address in a chain
    Addressed(PanelAddress),
}

impl Header {
    /// Encode as the on-wire header byte
    pub const fn to_byte(self) -> u8 {
        match self {
            Header::Single => SOF,
            Header::Addressed(address) => SOF + 1 + address.0,
        }
    }

    /// Decode an on-wire header byte
    pub const fn from_byte(byte: u8) -> Option<Self> {
        if byte == SOF {
            return Some(Header::Single);
        }
        if byte > SOF && byte <= SOF + MAX_PANELS as u8 {
            return Some(Header::Addressed(PanelAddress(byte - SOF - 1)));
        }
        None
    }

    /// Address carried by this header, if any
    pub const fn address(self) -> Option<PanelAddress> {
        match self {
            Header::Single => None,
            Header::Addressed(address) => Some(address),
        }
    }
}
