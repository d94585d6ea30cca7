//! Register map and configuration word layout for the ADS1x15 family.

/// Register pointer values for ADS1x15
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// Result of the last conversion (read-only)
    Conversion = 0x00,
    /// Configuration register
    Config = 0x01,
    /// Comparator low threshold
    LowThreshold = 0x02,
    /// Comparator high threshold
    HighThreshold = 0x03,
}

impl From<Register> for u8 {
    fn from(reg: Register) -> u8 {
        reg as u8
    }
}

/// Input multiplexer setting (`MUX[2:0]`)
///
/// The four differential settings measure `AINp - AINn`; the single-ended
/// settings measure `AINx` against GND.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Mux {
    /// AIN0 - AIN1 (power-on default)
    Diff0_1 = 0b000,
    /// AIN0 - AIN3
    Diff0_3 = 0b001,
    /// AIN1 - AIN3
    Diff1_3 = 0b010,
    /// AIN2 - AIN3
    Diff2_3 = 0b011,
    /// AIN0 - GND
    Single0 = 0b100,
    /// AIN1 - GND
    Single1 = 0b101,
    /// AIN2 - GND
    Single2 = 0b110,
    /// AIN3 - GND
    Single3 = 0b111,
}

impl From<u8> for Mux {
    fn from(bits: u8) -> Self {
        match bits & 0b111 {
            0b000 => Self::Diff0_1,
            0b001 => Self::Diff0_3,
            0b010 => Self::Diff1_3,
            0b011 => Self::Diff2_3,
            0b100 => Self::Single0,
            0b101 => Self::Single1,
            0b110 => Self::Single2,
            _ => Self::Single3,
        }
    }
}

impl From<Mux> for u8 {
    fn from(mux: Mux) -> u8 {
        mux as u8
    }
}

/// Single-ended input channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// AIN0
    Ain0,
    /// AIN1
    Ain1,
    /// AIN2
    Ain2,
    /// AIN3
    Ain3,
}

impl TryFrom<u8> for Channel {
    type Error = crate::error::InvalidChannel;

    fn try_from(channel: u8) -> Result<Self, Self::Error> {
        match channel {
            0 => Ok(Self::Ain0),
            1 => Ok(Self::Ain1),
            2 => Ok(Self::Ain2),
            3 => Ok(Self::Ain3),
            _ => Err(crate::error::InvalidChannel),
        }
    }
}

impl From<Channel> for Mux {
    fn from(channel: Channel) -> Self {
        match channel {
            Channel::Ain0 => Mux::Single0,
            Channel::Ain1 => Mux::Single1,
            Channel::Ain2 => Mux::Single2,
            Channel::Ain3 => Mux::Single3,
        }
    }
}

/// Programmable gain amplifier setting (`PGA[2:0]`), named by full-scale range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Gain {
    /// ±6.144 V
    Fsr6_144V = 0b000,
    /// ±4.096 V
    Fsr4_096V = 0b001,
    /// ±2.048 V (power-on default)
    Fsr2_048V = 0b010,
    /// ±1.024 V
    Fsr1_024V = 0b011,
    /// ±0.512 V
    Fsr0_512V = 0b100,
    /// ±0.256 V
    Fsr0_256V = 0b101,
}

impl From<u8> for Gain {
    fn from(bits: u8) -> Self {
        // 110 and 111 also select ±0.256 V
        match bits & 0b111 {
            0b000 => Self::Fsr6_144V,
            0b001 => Self::Fsr4_096V,
            0b010 => Self::Fsr2_048V,
            0b011 => Self::Fsr1_024V,
            0b100 => Self::Fsr0_512V,
            _ => Self::Fsr0_256V,
        }
    }
}

impl From<Gain> for u8 {
    fn from(gain: Gain) -> u8 {
        gain as u8
    }
}

/// Device operating mode (`MODE`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Continuous conversion
    Continuous,
    /// Single-shot conversion, power-down between conversions
    SingleShot,
}

impl From<bool> for Mode {
    fn from(bit: bool) -> Self {
        if bit { Self::SingleShot } else { Self::Continuous }
    }
}

impl From<Mode> for bool {
    fn from(mode: Mode) -> bool {
        matches!(mode, Mode::SingleShot)
    }
}

/// Data rate code (`DR[2:0]`)
///
/// The sample rate selected by each code depends on the part:
///
/// | Code | ADS101x (SPS) | ADS111x (SPS) |
/// | :--: | ---: | ---: |
/// | 0 | 128  | 8   |
/// | 1 | 250  | 16  |
/// | 2 | 490  | 32  |
/// | 3 | 920  | 64  |
/// | 4 | 1600 | 128 |
/// | 5 | 2400 | 250 |
/// | 6 | 3300 | 475 |
/// | 7 | 3300 | 860 |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DataRate {
    /// Slowest rate
    Dr0 = 0,
    Dr1 = 1,
    Dr2 = 2,
    Dr3 = 3,
    /// Power-on default
    Dr4 = 4,
    Dr5 = 5,
    Dr6 = 6,
    /// Fastest rate
    Dr7 = 7,
}

impl From<u8> for DataRate {
    fn from(bits: u8) -> Self {
        match bits & 0b111 {
            0 => Self::Dr0,
            1 => Self::Dr1,
            2 => Self::Dr2,
            3 => Self::Dr3,
            4 => Self::Dr4,
            5 => Self::Dr5,
            6 => Self::Dr6,
            _ => Self::Dr7,
        }
    }
}

impl From<DataRate> for u8 {
    fn from(rate: DataRate) -> u8 {
        rate as u8
    }
}

/// Comparator mode (`COMP_MODE`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ComparatorMode {
    /// Traditional comparator with hysteresis
    Traditional,
    /// Window comparator
    Window,
}

/// ALERT/RDY pin polarity (`COMP_POL`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ComparatorPolarity {
    ActiveLow,
    ActiveHigh,
}

/// Latching comparator (`COMP_LAT`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ComparatorLatch {
    NonLatching,
    Latching,
}

/// Comparator queue and disable (`COMP_QUE[1:0]`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ComparatorQueue {
    /// Assert ALERT after one conversion
    One = 0b00,
    /// Assert ALERT after two conversions
    Two = 0b01,
    /// Assert ALERT after four conversions
    Four = 0b10,
    /// Disable the comparator and put ALERT/RDY in high impedance
    Disabled = 0b11,
}

impl From<u8> for ComparatorQueue {
    fn from(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Self::One,
            0b01 => Self::Two,
            0b10 => Self::Four,
            _ => Self::Disabled,
        }
    }
}

impl From<ComparatorQueue> for u8 {
    fn from(queue: ComparatorQueue) -> u8 {
        queue as u8
    }
}

bitfield::bitfield! {
    /// CONFIG
    ///
    /// The driver keeps a copy of this register per device and never reads
    /// it back from the chip.
    #[derive(Clone, Copy, PartialEq, Eq, Default)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub struct ConfigRegister(u16);
    impl Debug;
    u8;
    /// Operational status
    ///
    /// - write `1` = start a single conversion
    /// - read `0` = conversion in progress, `1` = not busy
    pub os, set_os: 15;
    /// Input multiplexer
    pub mux, set_mux: 14, 12;
    /// Programmable gain amplifier
    pub pga, set_pga: 11, 9;
    /// Operating mode: `0` = continuous, `1` = single-shot
    pub mode, set_mode: 8;
    /// Data rate code
    pub dr, set_dr: 7, 5;
    /// Comparator mode: `0` = traditional, `1` = window
    pub comp_mode, set_comp_mode: 4;
    /// Comparator polarity: `0` = active low, `1` = active high
    pub comp_pol, set_comp_pol: 3;
    /// Latching comparator
    pub comp_lat, set_comp_lat: 2;
    /// Comparator queue and disable
    pub comp_que, set_comp_que: 1, 0;
}

impl ConfigRegister {
    /// Configuration written by [`crate::Ads1x15::initialize`]
    ///
    /// ±2.048 V, single-shot, slowest data rate, traditional active-low
    /// non-latching comparator, comparator disabled (`0x0503`)
    #[must_use]
    pub fn default_single_shot() -> Self {
        Self::default()
            .with_gain(Gain::Fsr2_048V)
            .with_mode(Mode::SingleShot)
            .with_data_rate(DataRate::Dr0)
            .with_comparator_mode(ComparatorMode::Traditional)
            .with_comparator_polarity(ComparatorPolarity::ActiveLow)
            .with_comparator_latch(ComparatorLatch::NonLatching)
            .with_comparator_queue(ComparatorQueue::Disabled)
    }

    /// Raw 16-bit register value
    #[must_use]
    #[inline(always)]
    pub const fn bits(&self) -> u16 {
        self.0
    }

    #[must_use]
    pub fn input(&self) -> Mux {
        Mux::from(self.mux())
    }

    /// Replace the multiplexer subfield, leaving every other field untouched
    #[must_use]
    pub fn with_mux(mut self, mux: Mux) -> Self {
        self.set_mux(mux.into());
        self
    }

    #[must_use]
    pub fn gain(&self) -> Gain {
        Gain::from(self.pga())
    }

    #[must_use]
    pub fn with_gain(mut self, gain: Gain) -> Self {
        self.set_pga(gain.into());
        self
    }

    #[must_use]
    pub fn operating_mode(&self) -> Mode {
        Mode::from(self.mode())
    }

    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.set_mode(mode.into());
        self
    }

    #[must_use]
    pub fn data_rate(&self) -> DataRate {
        DataRate::from(self.dr())
    }

    #[must_use]
    pub fn with_data_rate(mut self, rate: DataRate) -> Self {
        self.set_dr(rate.into());
        self
    }

    #[must_use]
    pub fn comparator_mode(&self) -> ComparatorMode {
        if self.comp_mode() {
            ComparatorMode::Window
        } else {
            ComparatorMode::Traditional
        }
    }

    #[must_use]
    pub fn with_comparator_mode(mut self, mode: ComparatorMode) -> Self {
        self.set_comp_mode(matches!(mode, ComparatorMode::Window));
        self
    }

    #[must_use]
    pub fn comparator_polarity(&self) -> ComparatorPolarity {
        if self.comp_pol() {
            ComparatorPolarity::ActiveHigh
        } else {
            ComparatorPolarity::ActiveLow
        }
    }

    #[must_use]
    pub fn with_comparator_polarity(mut self, polarity: ComparatorPolarity) -> Self {
        self.set_comp_pol(matches!(polarity, ComparatorPolarity::ActiveHigh));
        self
    }

    #[must_use]
    pub fn comparator_latch(&self) -> ComparatorLatch {
        if self.comp_lat() {
            ComparatorLatch::Latching
        } else {
            ComparatorLatch::NonLatching
        }
    }

    #[must_use]
    pub fn with_comparator_latch(mut self, latch: ComparatorLatch) -> Self {
        self.set_comp_lat(matches!(latch, ComparatorLatch::Latching));
        self
    }

    #[must_use]
    pub fn comparator_queue(&self) -> ComparatorQueue {
        ComparatorQueue::from(self.comp_que())
    }

    #[must_use]
    pub fn with_comparator_queue(mut self, queue: ComparatorQueue) -> Self {
        self.set_comp_que(queue.into());
        self
    }
}

impl From<u16> for ConfigRegister {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<ConfigRegister> for u16 {
    fn from(config: ConfigRegister) -> u16 {
        config.0
    }
}
