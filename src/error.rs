/// Error type for ADS1x15 operations
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// I2C transport error (e.g. no acknowledge from the addressed device)
    Bus(E),
    /// Device index outside the configured registry
    InvalidDevice,
    /// Channel selector outside `0..=3`
    InvalidChannel,
}

/// A device index did not name a slot in the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidDevice;

/// A channel number did not name a single-ended input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidChannel;

impl<E> From<InvalidDevice> for Error<E> {
    fn from(_: InvalidDevice) -> Self {
        Error::InvalidDevice
    }
}

impl<E> From<InvalidChannel> for Error<E> {
    fn from(_: InvalidChannel) -> Self {
        Error::InvalidChannel
    }
}
