//! Per-device address table and configuration mirror.

use crate::{error::InvalidDevice, register::ConfigRegister};

/// I2C address selected by strapping the ADDR pin
///
/// | ADDR pin | Address |
/// | :--- | :--- |
/// | GND | `0x48` |
/// | VDD | `0x49` |
/// | SDA | `0x4A` |
/// | SCL | `0x4B` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Address {
    /// ADDR tied to GND
    #[default]
    Gnd,
    /// ADDR tied to VDD
    Vdd,
    /// ADDR tied to SDA
    Sda,
    /// ADDR tied to SCL
    Scl,
}

impl From<Address> for u8 {
    fn from(address: Address) -> u8 {
        match address {
            Address::Gnd => 0x48,
            Address::Vdd => 0x49,
            Address::Sda => 0x4A,
            Address::Scl => 0x4B,
        }
    }
}

/// One physical ADS1x15 on the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceSlot {
    address: Address,
    config: ConfigRegister,
}

impl DeviceSlot {
    /// Slot for a freshly powered device; the mirror starts at zero
    #[must_use]
    pub fn new(address: Address) -> Self {
        Self {
            address,
            config: ConfigRegister::default(),
        }
    }

    #[must_use]
    pub fn address(&self) -> Address {
        self.address
    }

    #[must_use]
    pub fn config(&self) -> ConfigRegister {
        self.config
    }
}

/// Fixed-size table of `N` devices, indexed `0..N`
///
/// Holds no bus handle and performs no I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Registry<const N: usize> {
    slots: [DeviceSlot; N],
}

impl<const N: usize> Registry<N> {
    /// Create a registry with one slot per address, in index order
    #[must_use]
    pub fn new(addresses: [Address; N]) -> Self {
        Self {
            slots: addresses.map(DeviceSlot::new),
        }
    }

    /// Number of device slots
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    fn slot(&self, index: usize) -> Result<&DeviceSlot, InvalidDevice> {
        self.slots.get(index).ok_or(InvalidDevice)
    }

    /// Bus address of device `index`
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDevice`] if `index >= N`
    pub fn address_of(&self, index: usize) -> Result<Address, InvalidDevice> {
        self.slot(index).map(DeviceSlot::address)
    }

    /// Last configuration written to device `index`
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDevice`] if `index >= N`
    pub fn config(&self, index: usize) -> Result<ConfigRegister, InvalidDevice> {
        self.slot(index).map(DeviceSlot::config)
    }

    /// Replace the mirrored configuration of device `index`
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDevice`] if `index >= N`
    pub fn set_config(&mut self, index: usize, config: ConfigRegister) -> Result<(), InvalidDevice> {
        let slot = self.slots.get_mut(index).ok_or(InvalidDevice)?;
        slot.config = config;
        Ok(())
    }
}

impl Default for Registry<4> {
    fn default() -> Self {
        Self::new([Address::Gnd, Address::Vdd, Address::Sda, Address::Scl])
    }
}
