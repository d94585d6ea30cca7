use crate::register::{ConfigRegister, Register};

/// Build the 3-byte frame for a register write: pointer, then big-endian value
pub fn write_frame(register: Register, value: u16) -> [u8; 3] {
    let [hi, lo] = value.to_be_bytes();
    [u8::from(register), hi, lo]
}

/// Combine the two bytes of a register read, MSB first
pub fn combine(bytes: [u8; 2]) -> u16 {
    u16::from_be_bytes(bytes)
}

/// Config value to put on the wire to trigger a single conversion
///
/// The stored word is never modified; the OS bit only exists in the copy
pub fn start_pulse(config: ConfigRegister) -> ConfigRegister {
    let mut pulse = config;
    pulse.set_os(true);
    pulse
}

/// Config value as it is kept in a device mirror, with the OS bit cleared
pub fn at_rest(config: ConfigRegister) -> ConfigRegister {
    let mut rest = config;
    rest.set_os(false);
    rest
}
