//! Register addresses and constants for MAX77976
//!
//! This module defines the register addresses, field masks, current and
//! voltage ranges, and step sizes used by the MAX77976 charger driver.

/// I2C Address
pub const MAX77976_SLAVE_ADDRESS: u8 = 0x6B;

/// Chip identification register
pub const MAX77976_CHIP_ID: u8 = 0x00;

/// Chip silicon revision register
pub const MAX77976_CHIP_REVISION: u8 = 0x01;

/// Charger interrupt status register - bit 6 reports CHGIN_OK (input power present)
pub const MAX77976_CHG_INT_OK: u8 = 0x12;

/// Charger details register 1 - Contains the charging-state (CHG_DTLS) and battery-state (BAT_DTLS) codes
pub const MAX77976_CHG_DETAILS_01: u8 = 0x14;

/// Charger configuration 0 - Operating mode in bits 0-3
pub const MAX77976_CHG_CNFG_00: u8 = 0x16;

/// Charger configuration 2 - Fast-charge current step count (CHG_CC) in bits 0-6
pub const MAX77976_CHG_CNFG_02: u8 = 0x18;

/// Charger configuration 4 - Termination voltage (CHG_CV_PRM) in bits 0-5
pub const MAX77976_CHG_CNFG_04: u8 = 0x1A;

/// Charger configuration 6 - Configuration protection lock (CHGPROT) in bits 2-3
pub const MAX77976_CHG_CNFG_06: u8 = 0x1C;

/// Charger configuration 9 - Input current regulation step count (CHGIN_ILIM) in bits 0-5
pub const MAX77976_CHG_CNFG_09: u8 = 0x1F;

// Field masks
/// CHG_DETAILS_01 charging-state code
pub const CHG_DTLS_MASK: u8 = 0x0F;
/// CHG_DETAILS_01 battery-state code
pub const BAT_DTLS_MASK: u8 = 0x07;
/// CHG_INT_OK bit set while CHGIN has valid power
pub const CHGIN_OK_BIT: u8 = 6;
/// CHG_CNFG_00 operating-mode nibble
pub const MODE_MASK: u8 = 0x0F;
/// CHG_CNFG_02 fast-charge current step count
pub const CHG_CC_MASK: u8 = 0x7F;
/// CHG_CNFG_04 termination voltage step count
pub const CHG_CV_PRM_MASK: u8 = 0x3F;
/// CHG_CNFG_09 input current step count
pub const CHGIN_ILIM_MASK: u8 = 0x3F;

/// Highest operating-mode code accepted by CHG_CNFG_00
pub const MAX77976_MODE_MAX: u8 = 0x0A;

// CHGPROT patterns
/// CHG_CNFG_06 value that unlocks the protected configuration registers
pub const CHGPROT_UNLOCKED: u8 = 0x0C;
/// CHG_CNFG_06 value that locks them again
pub const CHGPROT_LOCKED: u8 = 0x00;

// CHG_CC: fast-charge current limit, 100..5500 mA in 50 mA steps
pub const MAX77976_CHG_CC_MIN: u32 = 100_000;
pub const MAX77976_CHG_CC_MAX: u32 = 5_500_000;
pub const MAX77976_CHG_CC_STEP: u32 = 50_000;

// CHGIN_ILIM: input current limit, 100..3200 mA in 100 mA steps
pub const MAX77976_CHGIN_ILIM_MIN: u32 = 100_000;
pub const MAX77976_CHGIN_ILIM_MAX: u32 = 3_200_000;
pub const MAX77976_CHGIN_ILIM_STEP: u32 = 100_000;

// CHG_CV_PRM: termination voltage, 3.60..4.23 V in 10 mV steps (0x3C = 4.20 V)
pub const MAX77976_CHG_CV_PRM_MIN: u32 = 3_600_000;
pub const MAX77976_CHG_CV_PRM_MAX: u32 = 4_230_000;
pub const MAX77976_CHG_CV_PRM_STEP: u32 = 10_000;

/// Termination voltage byte written by the charge-current sequence when not reconfigured (4.20 V)
pub const MAX77976_CHG_CV_PRM_DEFAULT: u8 = 0x1C | 0x20;

// Charge-current sequence setpoint, in milliamps
pub const MAX77976_SETPOINT_MIN_MA: u16 = 100;
pub const MAX77976_SETPOINT_MAX_MA: u16 = 3500;

/// Charge codes below this value get input headroom added by the charge-current sequence
pub const MAX77976_HEADROOM_THRESHOLD: u8 = 0x4D;

/// Default input headroom above the charge limit (1 A, i.e. 20 charge-current steps)
pub const MAX77976_INPUT_HEADROOM_DEFAULT: u32 = 1_000_000;
