//! Driver configuration
//!
//! Settings fixed for the lifetime of a driver instance. The defaults
//! reproduce the stock charge-current sequence: address 0x6B, 4.20 V
//! termination, and 1 A of input headroom below charge code 0x4D.

use crate::limits::TERMINATION_VOLTAGE;
use crate::registers::{
    MAX77976_HEADROOM_THRESHOLD, MAX77976_INPUT_HEADROOM_DEFAULT, MAX77976_SLAVE_ADDRESS,
};

/// MAX77976 driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// 7-bit I2C address
    pub address: u8,
    /// Termination voltage written by the charge-current sequence, in micro-volts
    pub termination_voltage_uv: u32,
    /// Input current added on top of the charge limit, in micro-amps
    pub input_headroom_ua: u32,
    /// Charge codes at or above this value get no input headroom
    pub headroom_threshold: u8,
}

impl Config {
    /// Default configuration: address 0x6B, 4.20 V, 1 A headroom below code 0x4D
    pub const fn new() -> Self {
        Self {
            address: MAX77976_SLAVE_ADDRESS,
            termination_voltage_uv: 4_200_000,
            input_headroom_ua: MAX77976_INPUT_HEADROOM_DEFAULT,
            headroom_threshold: MAX77976_HEADROOM_THRESHOLD,
        }
    }

    /// Use a different 7-bit I2C address
    pub const fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Set the termination voltage, clamped and floored onto the 10 mV grid
    pub const fn with_termination_voltage(mut self, microvolts: u32) -> Self {
        self.termination_voltage_uv =
            TERMINATION_VOLTAGE.decode(TERMINATION_VOLTAGE.encode(microvolts));
        self
    }

    /// Input current added on top of the charge limit, in micro-amps
    ///
    /// The sum is clamped to the 3.2 A input range when the sequence runs.
    pub const fn with_input_headroom(mut self, microamps: u32) -> Self {
        self.input_headroom_ua = microamps;
        self
    }

    /// First charge code that no longer gets input headroom
    pub const fn with_headroom_threshold(mut self, code: u8) -> Self {
        self.headroom_threshold = code;
        self
    }

    /// CHG_CNFG_04 byte for the configured termination voltage
    pub const fn termination_voltage_code(&self) -> u8 {
        TERMINATION_VOLTAGE.encode(self.termination_voltage_uv)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
