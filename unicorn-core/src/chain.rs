//! Panel chain
//!
//! Eight panel slots share one bus. Every slot always exists; slots are
//! reconfigured or disabled, never removed.

use unicorn_protocol::{PanelAddress, MAX_PANELS};

use crate::error::Error;
use crate::panel::PanelMapping;

/// Fixed set of eight panel mappings, indexed by address
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelChain {
    panels: [PanelMapping; MAX_PANELS],
}

impl PanelChain {
    /// Create a chain with every slot disabled at the origin
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(address: i32) -> Result<PanelAddress, Error> {
        Ok(PanelAddress::try_from(address)?)
    }

    /// Configure the panel at `address` and enable it
    ///
    /// An address outside 0-7 fails with [`Error::InvalidAddress`] and
    /// leaves the chain unmodified.
    pub fn configure(&mut self, address: i32, x: i32, y: i32, rotation_step: i32) -> Result<(), Error> {
        let address = Self::slot(address)?;
        let panel = &mut self.panels[address.index()];
        panel.configure(x, y, rotation_step);
        panel.enable();
        Ok(())
    }

    /// Enable or disable the panel at `address`
    pub fn enable(&mut self, address: i32, enabled: bool) -> Result<(), Error> {
        let address = Self::slot(address)?;
        self.panels[address.index()].set_enabled(enabled);
        Ok(())
    }

    /// Mapping for a raw address
    pub fn panel(&self, address: i32) -> Result<&PanelMapping, Error> {
        Ok(self.get(Self::slot(address)?))
    }

    /// Mapping for a validated address
    pub fn get(&self, address: PanelAddress) -> &PanelMapping {
        &self.panels[address.index()]
    }

    /// Disable every slot and move it back to the origin
    pub fn reset(&mut self) {
        self.panels = [PanelMapping::default(); MAX_PANELS];
    }

    /// All slots in ascending address order
    pub fn iter(&self) -> impl Iterator<Item = (PanelAddress, &PanelMapping)> {
        PanelAddress::all().zip(self.panels.iter())
    }

    /// Enabled slots in ascending address order
    pub fn iter_enabled(&self) -> impl Iterator<Item = (PanelAddress, &PanelMapping)> {
        self.iter().filter(|(_, panel)| panel.is_enabled())
    }

    /// Number of enabled slots
    pub fn enabled_count(&self) -> usize {
        self.iter_enabled().count()
    }
}
