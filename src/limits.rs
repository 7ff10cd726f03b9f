//! Conversion between physical units and MAX77976 register step counts
//!
//! Every public driver API works in physical units: micro-amps for current
//! limits, micro-volts for the termination voltage, and milliamps for the
//! charge-current sequence setpoint. Step counts only appear here, in the
//! field codec, and in the driver's `*_code` accessors.

use crate::registers::*;

/// A register field holding `offset + code * step`, valid between `min` and `max`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitRange {
    min: u32,
    max: u32,
    step: u32,
    offset: u32,
    mask: u8,
}

/// CHG_CNFG_02.CHG_CC, micro-amps
pub const FAST_CHARGE_CURRENT: LimitRange = LimitRange {
    min: MAX77976_CHG_CC_MIN,
    max: MAX77976_CHG_CC_MAX,
    step: MAX77976_CHG_CC_STEP,
    offset: 0,
    mask: CHG_CC_MASK,
};

/// CHG_CNFG_09.CHGIN_ILIM, micro-amps
pub const INPUT_CURRENT: LimitRange = LimitRange {
    min: MAX77976_CHGIN_ILIM_MIN,
    max: MAX77976_CHGIN_ILIM_MAX,
    step: MAX77976_CHGIN_ILIM_STEP,
    offset: 0,
    mask: CHGIN_ILIM_MASK,
};

/// CHG_CNFG_04.CHG_CV_PRM, micro-volts
pub const TERMINATION_VOLTAGE: LimitRange = LimitRange {
    min: MAX77976_CHG_CV_PRM_MIN,
    max: MAX77976_CHG_CV_PRM_MAX,
    step: MAX77976_CHG_CV_PRM_STEP,
    offset: MAX77976_CHG_CV_PRM_MIN,
    mask: CHG_CV_PRM_MASK,
};

impl LimitRange {
    /// Clamp `value` into range, then floor it onto the step grid
    pub const fn encode(&self, value: u32) -> u8 {
        let value = if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        };
        ((value - self.offset) / self.step) as u8
    }

    /// Physical value of a raw register byte
    ///
    /// Reserved high bits are masked off first. Codes outside the valid range
    /// read back as the nearest bound, which is what the device applies.
    pub const fn decode(&self, byte: u8) -> u32 {
        let value = self.offset + (byte & self.mask) as u32 * self.step;
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Highest code the range can produce
    pub const fn max_code(&self) -> u8 {
        self.encode(self.max)
    }

    /// Lowest physical value
    pub const fn min(&self) -> u32 {
        self.min
    }

    /// Highest physical value
    pub const fn max(&self) -> u32 {
        self.max
    }

    /// Physical value of one code step
    pub const fn step(&self) -> u32 {
        self.step
    }
}

/// Clamp a charge-current sequence setpoint to 100..=3500 mA
pub const fn clamp_setpoint_ma(milliamps: u16) -> u16 {
    if milliamps < MAX77976_SETPOINT_MIN_MA {
        MAX77976_SETPOINT_MIN_MA
    } else if milliamps > MAX77976_SETPOINT_MAX_MA {
        MAX77976_SETPOINT_MAX_MA
    } else {
        milliamps
    }
}

/// Input current limit for a given fast-charge code under the headroom policy
///
/// Charge codes below `threshold` get `headroom` micro-amps on top of the
/// charge limit. The result saturates at `u32::MAX` and is not yet clamped
/// to the input range.
pub const fn input_limit_for(charge_code: u8, headroom: u32, threshold: u8) -> u32 {
    let charge = charge_code as u32 * FAST_CHARGE_CURRENT.step;
    if charge_code < threshold {
        charge.saturating_add(headroom)
    } else {
        charge
    }
}
