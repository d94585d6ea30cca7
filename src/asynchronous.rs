//! Asynchronous driver for ADS1x15 analog-to-digital converters

use embedded_hal_async::i2c::I2c;

use crate::{
    error::Error,
    register::{Channel, ConfigRegister, Mux, Register},
    registry::{Address, Registry},
    utils,
};

/// ADS1x15 driver for up to `N` devices sharing one I2C bus (asynchronous)
///
/// Same operations and semantics as the blocking [`crate::Ads1x15`], for
/// `embedded-hal-async` buses.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ads1x15<I2C, const N: usize> {
    i2c: I2C,
    registry: Registry<N>,
}

impl<I2C, E, const N: usize> Ads1x15<I2C, N>
where
    I2C: I2c<Error = E>,
{
    /// Create a new driver for the devices at `addresses`
    ///
    /// The bus must already be initialized. No I2C traffic is generated
    /// until the first operation.
    pub fn new(i2c: I2C, addresses: [Address; N]) -> Self {
        Self {
            i2c,
            registry: Registry::new(addresses),
        }
    }

    /// Release the I2C bus, consuming the driver
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Device table with the mirrored configuration of every device
    pub fn registry(&self) -> &Registry<N> {
        &self.registry
    }

    /// Bus address of device `index`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDevice`] if `index` is out of range
    pub fn address_of(&self, index: usize) -> Result<Address, Error<E>> {
        Ok(self.registry.address_of(index)?)
    }

    /// Configuration last written to device `index`
    ///
    /// This is the driver's own copy; the chip is not queried. The OS bit is
    /// always clear.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDevice`] if `index` is out of range
    pub fn config(&self, index: usize) -> Result<ConfigRegister, Error<E>> {
        Ok(self.registry.config(index)?)
    }

    /// Write a 16-bit register on device `index`
    ///
    /// Sent as a single transaction: `[register, value MSB, value LSB]`.
    /// Writing [`Register::Config`] here bypasses the configuration mirror;
    /// use [`Self::configure`] to keep it in sync.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range or the I2C write fails
    pub async fn write_register(
        &mut self,
        index: usize,
        register: Register,
        value: u16,
    ) -> Result<(), Error<E>> {
        let address = u8::from(self.registry.address_of(index)?);
        let frame = utils::write_frame(register, value);

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "Writing 0x{:04X} to register 0x{:02X} at 0x{:02X}",
            value,
            frame[0],
            address
        );

        self.i2c
            .write(address, &frame)
            .await
            .map_err(|e| {
                #[cfg(feature = "defmt")]
                defmt::warn!("I2C write to 0x{:02X} failed", address);
                Error::Bus(e)
            })
    }

    /// Read a 16-bit register from device `index`
    ///
    /// This follows the two-phase protocol:
    /// - Transaction 1: write the register pointer
    /// - Transaction 2: read two bytes, MSB first
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range or either I2C transaction fails
    pub async fn read_register(
        &mut self,
        index: usize,
        register: Register,
    ) -> Result<u16, Error<E>> {
        let address = u8::from(self.registry.address_of(index)?);
        let pointer = u8::from(register);

        #[cfg(feature = "defmt")]
        defmt::trace!("Reading register 0x{:02X} at 0x{:02X}", pointer, address);

        self.i2c
            .write(address, &[pointer])
            .await
            .map_err(|e| {
                #[cfg(feature = "defmt")]
                defmt::warn!("I2C pointer write to 0x{:02X} failed", address);
                Error::Bus(e)
            })?;

        let mut rx = [0u8; 2];
        self.i2c
            .read(address, &mut rx)
            .await
            .map_err(|e| {
                #[cfg(feature = "defmt")]
                defmt::warn!("I2C read from 0x{:02X} failed", address);
                Error::Bus(e)
            })?;

        let value = utils::combine(rx);

        #[cfg(feature = "defmt")]
        defmt::trace!("Register 0x{:02X} value: 0x{:04X}", pointer, value);

        Ok(value)
    }

    /// Write `config` to device `index` and remember it
    ///
    /// If `config` has the OS bit set the write starts a conversion, but the
    /// mirror is stored with OS cleared. The mirror is left untouched if the
    /// write fails.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range or the I2C write fails
    pub async fn configure(
        &mut self,
        index: usize,
        config: ConfigRegister,
    ) -> Result<(), Error<E>> {
        self.write_register(index, Register::Config, config.bits())
            .await?;
        self.registry.set_config(index, utils::at_rest(config))?;

        #[cfg(feature = "defmt")]
        defmt::debug!("Device {} configured: {}", index, config);

        Ok(())
    }

    /// Write the default single-shot configuration to device 0
    ///
    /// See [`ConfigRegister::default_single_shot`]. Calling this again writes
    /// the same value.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry is empty or the I2C write fails
    pub async fn initialize(&mut self) -> Result<(), Error<E>> {
        self.configure(0, ConfigRegister::default_single_shot()).await
    }

    /// Select single-ended input `channel` (0..=3) on device `index`
    ///
    /// Only the multiplexer field changes; gain, mode, data rate and
    /// comparator settings are kept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChannel`] without touching the bus if
    /// `channel > 3`, otherwise as [`Self::set_input`]
    pub async fn set_channel(&mut self, index: usize, channel: u8) -> Result<(), Error<E>> {
        let channel = Channel::try_from(channel)?;
        self.set_input(index, channel.into()).await
    }

    /// Select any multiplexer input, differential or single-ended, on device `index`
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range or the I2C write fails
    pub async fn set_input(&mut self, index: usize, mux: Mux) -> Result<(), Error<E>> {
        let config = self.registry.config(index)?.with_mux(mux);
        self.configure(index, config).await
    }

    /// Start a single-shot conversion on device `index`
    ///
    /// The stored configuration is written with the OS bit set. The driver
    /// does not wait for the conversion to finish; allow at least one sample
    /// period for the selected data rate before [`Self::read_result`].
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range or the I2C write fails
    pub async fn start_conversion(&mut self, index: usize) -> Result<(), Error<E>> {
        let pulse = utils::start_pulse(self.registry.config(index)?);

        #[cfg(feature = "defmt")]
        defmt::debug!("Device {} starting conversion", index);

        self.write_register(index, Register::Config, pulse.bits()).await
    }

    /// Read the raw conversion result of device `index`
    ///
    /// The value is returned exactly as received; reinterpret it as `i16`
    /// for two's-complement results.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range or an I2C transaction fails
    pub async fn read_result(&mut self, index: usize) -> Result<u16, Error<E>> {
        self.read_register(index, Register::Conversion).await
    }
}
