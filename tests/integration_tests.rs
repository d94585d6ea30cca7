//! Integration tests for the blocking ADS1x15 driver using mocked I2C.

use ads1x15::{Address, Ads1x15, ConfigRegister, Error, Gain, Mux, Register};
use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

/// Helper to build the expected CONFIG write frame.
fn config_write(address: u8, value: u16) -> I2cTransaction {
    let [hi, lo] = value.to_be_bytes();
    I2cTransaction::write(address, vec![0x01, hi, lo])
}

/// Helper to build the two transactions of a register read.
fn register_read(address: u8, register: u8, response: [u8; 2]) -> [I2cTransaction; 2] {
    [
        I2cTransaction::write(address, vec![register]),
        I2cTransaction::read(address, response.to_vec()),
    ]
}

#[test]
fn initialize_writes_default_config_to_first_device() {
    let expectations = [config_write(0x48, 0x0503)];

    let i2c = I2cMock::new(&expectations);
    let mut adc = Ads1x15::new(i2c, [Address::Gnd, Address::Vdd]);

    adc.initialize().unwrap();
    assert_eq!(adc.config(0).unwrap().bits(), 0x0503);
    assert_eq!(adc.config(1).unwrap().bits(), 0x0000);

    adc.release().done();
}

#[test]
fn initialize_is_idempotent() {
    let expectations = [config_write(0x48, 0x0503), config_write(0x48, 0x0503)];

    let i2c = I2cMock::new(&expectations);
    let mut adc = Ads1x15::new(i2c, [Address::Gnd]);

    adc.initialize().unwrap();
    adc.initialize().unwrap();
    assert_eq!(adc.config(0).unwrap().bits(), 0x0503);

    adc.release().done();
}

#[test]
fn set_channel_changes_only_mux_field() {
    let mut expectations = vec![config_write(0x48, 0x0503)];
    for channel in 0..4u16 {
        expectations.push(config_write(0x48, 0x0503 | ((4 + channel) << 12)));
    }

    let i2c = I2cMock::new(&expectations);
    let mut adc = Ads1x15::new(i2c, [Address::Gnd]);
    adc.initialize().unwrap();

    for channel in 0..4u8 {
        let before = adc.config(0).unwrap().bits();
        adc.set_channel(0, channel).unwrap();
        let after = adc.config(0).unwrap().bits();

        assert_eq!(before & !0x7000, after & !0x7000);
        assert_eq!(after & 0x7000, u16::from(4 + channel) << 12);
    }

    adc.release().done();
}

#[test]
fn set_channel_rejects_out_of_range_channel() {
    let expectations = [config_write(0x48, 0x0503)];

    let i2c = I2cMock::new(&expectations);
    let mut adc = Ads1x15::new(i2c, [Address::Gnd]);
    adc.initialize().unwrap();

    assert_eq!(adc.set_channel(0, 4), Err(Error::InvalidChannel));
    assert_eq!(adc.set_channel(0, 255), Err(Error::InvalidChannel));
    assert_eq!(adc.config(0).unwrap().bits(), 0x0503);

    adc.release().done();
}

#[test]
fn set_input_accepts_differential_pairs() {
    let expectations = [
        config_write(0x48, 0x0503),
        config_write(0x48, 0x3503),
        config_write(0x48, 0x1503),
    ];

    let i2c = I2cMock::new(&expectations);
    let mut adc = Ads1x15::new(i2c, [Address::Gnd]);
    adc.initialize().unwrap();

    adc.set_input(0, Mux::Diff2_3).unwrap();
    adc.set_input(0, Mux::Diff0_3).unwrap();
    assert_eq!(adc.config(0).unwrap().input(), Mux::Diff0_3);

    adc.release().done();
}

#[test]
fn start_conversion_sets_os_on_wire_only() {
    let expectations = [
        config_write(0x48, 0x0503),
        config_write(0x48, 0x6503),
        config_write(0x48, 0xE503),
        config_write(0x48, 0xE503),
    ];

    let i2c = I2cMock::new(&expectations);
    let mut adc = Ads1x15::new(i2c, [Address::Gnd]);
    adc.initialize().unwrap();
    adc.set_channel(0, 2).unwrap();

    adc.start_conversion(0).unwrap();
    assert_eq!(adc.config(0).unwrap().bits(), 0x6503);
    assert!(!adc.config(0).unwrap().os());

    // A second start sends the same pulse, not a stale one
    adc.start_conversion(0).unwrap();
    assert_eq!(adc.config(0).unwrap().bits(), 0x6503);

    adc.release().done();
}

#[test]
fn configure_with_os_set_stores_it_cleared() {
    let expectations = [config_write(0x48, 0x8583)];

    let i2c = I2cMock::new(&expectations);
    let mut adc = Ads1x15::new(i2c, [Address::Gnd]);

    adc.configure(0, ConfigRegister::from(0x8583)).unwrap();
    assert_eq!(adc.config(0).unwrap().bits(), 0x0583);

    adc.release().done();
}

#[test]
fn read_result_combines_bytes_msb_first() {
    let responses = [[0x12, 0x34], [0xFF, 0xFF], [0x80, 0x00], [0x00, 0x01]];
    let mut expectations = Vec::new();
    for response in responses {
        expectations.extend(register_read(0x48, 0x00, response));
    }

    let i2c = I2cMock::new(&expectations);
    let mut adc = Ads1x15::new(i2c, [Address::Gnd]);

    for [b0, b1] in responses {
        let value = adc.read_result(0).unwrap();
        assert_eq!(value, (u16::from(b0) << 8) | u16::from(b1));
    }
    assert_eq!(adc.config(0).unwrap().bits(), 0x0000);

    adc.release().done();
}

#[test]
fn config_register_round_trips() {
    let mut expectations = vec![I2cTransaction::write(0x4A, vec![0x01, 0xC3, 0xE1])];
    expectations.extend(register_read(0x4A, 0x01, [0xC3, 0xE1]));

    let i2c = I2cMock::new(&expectations);
    let mut adc = Ads1x15::new(i2c, [Address::Sda]);

    adc.write_register(0, Register::Config, 0xC3E1).unwrap();
    assert_eq!(adc.read_register(0, Register::Config).unwrap(), 0xC3E1);

    adc.release().done();
}

#[test]
fn threshold_registers_are_addressable() {
    let expectations = [
        I2cTransaction::write(0x48, vec![0x02, 0x80, 0x00]),
        I2cTransaction::write(0x48, vec![0x03, 0x7F, 0xFF]),
    ];

    let i2c = I2cMock::new(&expectations);
    let mut adc = Ads1x15::new(i2c, [Address::Gnd]);

    adc.write_register(0, Register::LowThreshold, 0x8000).unwrap();
    adc.write_register(0, Register::HighThreshold, 0x7FFF).unwrap();

    adc.release().done();
}

#[test]
fn devices_are_addressed_independently() {
    let mut expectations = vec![config_write(0x48, 0x0503), config_write(0x4B, 0x6000)];
    expectations.extend(register_read(0x4B, 0x00, [0x0A, 0xBC]));

    let i2c = I2cMock::new(&expectations);
    let mut adc = Ads1x15::new(i2c, [Address::Gnd, Address::Scl]);

    adc.initialize().unwrap();
    adc.set_channel(1, 2).unwrap();
    assert_eq!(adc.read_result(1).unwrap(), 0x0ABC);

    assert_eq!(adc.config(0).unwrap().bits(), 0x0503);
    assert_eq!(adc.config(1).unwrap().bits(), 0x6000);
    assert_eq!(adc.address_of(1).unwrap(), Address::Scl);

    adc.release().done();
}

#[test]
fn rejects_unknown_device_without_bus_traffic() {
    let expectations: [I2cTransaction; 0] = [];
    let i2c = I2cMock::new(&expectations);
    let mut adc = Ads1x15::new(i2c, [Address::Gnd, Address::Vdd]);

    assert_eq!(adc.set_channel(2, 0), Err(Error::InvalidDevice));
    assert_eq!(adc.start_conversion(2), Err(Error::InvalidDevice));
    assert_eq!(adc.read_result(2), Err(Error::InvalidDevice));
    assert_eq!(adc.config(2), Err(Error::InvalidDevice));
    assert_eq!(adc.address_of(7), Err(Error::InvalidDevice));

    adc.release().done();
}

#[test]
fn initialize_without_devices_is_invalid() {
    let expectations: [I2cTransaction; 0] = [];
    let i2c = I2cMock::new(&expectations);
    let mut adc = Ads1x15::new(i2c, []);

    assert_eq!(adc.initialize(), Err(Error::InvalidDevice));

    adc.release().done();
}

#[test]
fn failed_write_leaves_mirror_unchanged() {
    let expectations = [
        config_write(0x48, 0x0503),
        config_write(0x48, 0x5503).with_error(ErrorKind::Other),
        config_write(0x48, 0x0103).with_error(ErrorKind::Other),
    ];

    let i2c = I2cMock::new(&expectations);
    let mut adc = Ads1x15::new(i2c, [Address::Gnd]);
    adc.initialize().unwrap();

    assert_eq!(adc.set_channel(0, 1), Err(Error::Bus(ErrorKind::Other)));
    assert_eq!(adc.config(0).unwrap().bits(), 0x0503);

    let lower_gain = adc.config(0).unwrap().with_gain(Gain::Fsr6_144V);
    assert_eq!(
        adc.configure(0, lower_gain),
        Err(Error::Bus(ErrorKind::Other))
    );
    assert_eq!(adc.config(0).unwrap().gain(), Gain::Fsr2_048V);

    adc.release().done();
}

#[test]
fn bus_errors_propagate_from_every_operation() {
    let expectations = [
        config_write(0x48, 0x0503).with_error(ErrorKind::Other),
        config_write(0x48, 0x8000).with_error(ErrorKind::Other),
        I2cTransaction::write(0x48, vec![0x00]).with_error(ErrorKind::Other),
        I2cTransaction::write(0x48, vec![0x00]),
        I2cTransaction::read(0x48, vec![0x00, 0x00]).with_error(ErrorKind::Other),
    ];

    let i2c = I2cMock::new(&expectations);
    let mut adc = Ads1x15::new(i2c, [Address::Gnd]);

    assert_eq!(adc.initialize(), Err(Error::Bus(ErrorKind::Other)));
    assert_eq!(adc.config(0).unwrap().bits(), 0x0000);

    assert_eq!(adc.start_conversion(0), Err(Error::Bus(ErrorKind::Other)));
    assert_eq!(adc.config(0).unwrap().bits(), 0x0000);

    // Pointer write fails
    assert_eq!(adc.read_result(0), Err(Error::Bus(ErrorKind::Other)));
    // Data read fails
    assert_eq!(adc.read_result(0), Err(Error::Bus(ErrorKind::Other)));

    adc.release().done();
}
