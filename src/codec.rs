//! Bit-level field extraction for MAX77976 register bytes
//!
//! Pure functions: they never fail, and bit patterns without a defined meaning
//! pass through as numeric values for the classifier to treat as reserved.

use crate::registers::{CHGIN_OK_BIT, CHG_CV_PRM_MASK, MODE_MASK};
use crate::types::{BatteryState, ChargingState};

/// Charging-state code from a CHG_DETAILS_01 byte (bits 0-3)
#[inline]
pub const fn decode_charging_state(byte: u8) -> ChargingState {
    ChargingState::from_code(byte)
}

/// Battery-state code from a CHG_DETAILS_01 byte (bits 0-2)
#[inline]
pub const fn decode_battery_state(byte: u8) -> BatteryState {
    BatteryState::from_code(byte)
}

/// Input-power-present flag from a CHG_INT_OK byte (bit 6)
#[inline]
pub const fn decode_online_flag(byte: u8) -> bool {
    (byte >> CHGIN_OK_BIT) & 0x01 != 0
}

/// Step count of a limit register, with reserved high bits cleared by `mask`
///
/// Use [`CHGIN_ILIM_MASK`](crate::CHGIN_ILIM_MASK) for CHG_CNFG_09 and
/// [`CHG_CC_MASK`](crate::CHG_CC_MASK) for CHG_CNFG_02.
#[inline]
pub const fn decode_limit_field(byte: u8, mask: u8) -> u8 {
    byte & mask
}

/// Mode nibble from a CHG_CNFG_00 byte
#[inline]
pub const fn decode_mode(byte: u8) -> u8 {
    byte & MODE_MASK
}

/// CHG_CNFG_00 byte with the mode nibble replaced and the upper nibble kept
#[inline]
pub const fn encode_mode(existing: u8, code: u8) -> u8 {
    (existing & !MODE_MASK) | (code & MODE_MASK)
}

/// Termination voltage code from a CHG_CNFG_04 byte (bits 0-5)
#[inline]
pub const fn decode_termination_voltage_field(byte: u8) -> u8 {
    byte & CHG_CV_PRM_MASK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registers::{CHGIN_ILIM_MASK, CHG_CC_MASK};

    #[test]
    fn charging_state_ignores_upper_nibble() {
        assert_eq!(decode_charging_state(0x01), ChargingState::FastConstantCurrent);
        assert_eq!(decode_charging_state(0x71), ChargingState::FastConstantCurrent);
        assert_eq!(decode_charging_state(0x0F), ChargingState::Reserved0F);
    }

    #[test]
    fn battery_state_uses_low_three_bits() {
        assert_eq!(decode_battery_state(0x00), BatteryState::Removal);
        assert_eq!(decode_battery_state(0x05), BatteryState::Overvoltage);
        assert_eq!(decode_battery_state(0x0B), BatteryState::RegularVoltage);
    }

    #[test]
    fn online_flag_is_bit_six() {
        assert!(decode_online_flag(0x40));
        assert!(decode_online_flag(0xFF));
        assert!(!decode_online_flag(0xBF));
        assert!(!decode_online_flag(0x00));
    }

    #[test]
    fn limit_masks_drop_reserved_bits() {
        assert_eq!(decode_limit_field(0x14, CHGIN_ILIM_MASK), 20);
        assert_eq!(decode_limit_field(0xD4, CHGIN_ILIM_MASK), 0x14);
        assert_eq!(decode_limit_field(0xFF, CHGIN_ILIM_MASK), 0x3F);
        assert_eq!(decode_limit_field(0x94, CHG_CC_MASK), 0x14);
        assert_eq!(decode_limit_field(0xFF, CHG_CC_MASK), 0x7F);
    }

    #[test]
    fn mode_keeps_upper_nibble() {
        assert_eq!(decode_mode(0xF4), 0x04);
        assert_eq!(encode_mode(0xF4, 0x05), 0xF5);
        assert_eq!(encode_mode(0xA0, 0x0A), 0xAA);
        assert_eq!(encode_mode(0x3F, 0x00), 0x30);
    }

    #[test]
    fn termination_field_is_six_bits() {
        assert_eq!(decode_termination_voltage_field(0xFC), 0x3C);
    }
}
