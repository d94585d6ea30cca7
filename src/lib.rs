//! Driver for the ADS1x15 family of I2C analog-to-digital converters
//! (ADS1013/4/5, ADS1113/4/5) built on the [`embedded-hal`] traits.
//!
//! Up to four devices share one bus, each selected by an index into a
//! fixed [`Registry`]. The driver keeps a copy of every device's CONFIG
//! register and runs single-shot conversions: select an input, start the
//! conversion, wait for the data rate's sample period, read the result.
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal
//!
//! ```
//! use ads1x15::{Address, Ads1x15};
//! use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
//!
//! let expectations = [
//!     I2cTransaction::write(0x48, vec![0x01, 0x05, 0x03]),
//!     I2cTransaction::write(0x48, vec![0x01, 0x55, 0x03]),
//!     I2cTransaction::write(0x48, vec![0x01, 0xD5, 0x03]),
//!     I2cTransaction::write(0x48, vec![0x00]),
//!     I2cTransaction::read(0x48, vec![0x12, 0x34]),
//! ];
//!
//! let mut adc = Ads1x15::new(I2cMock::new(&expectations), [Address::Gnd]);
//! adc.initialize().unwrap();
//! adc.set_channel(0, 1).unwrap();
//! adc.start_conversion(0).unwrap();
//! // wait for the conversion here
//! assert_eq!(adc.read_result(0).unwrap(), 0x1234);
//!
//! adc.release().done();
//! ```

#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

pub mod asynchronous;
mod driver;
mod error;
mod register;
mod registry;
mod utils;

pub use driver::Ads1x15;
pub use error::{Error, InvalidChannel, InvalidDevice};
pub use register::{
    Channel, ComparatorLatch, ComparatorMode, ComparatorPolarity, ComparatorQueue,
    ConfigRegister, DataRate, Gain, Mode, Mux, Register,
};
pub use registry::{Address, DeviceSlot, Registry};
