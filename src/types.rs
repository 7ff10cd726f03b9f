//! Type definitions and enumerations for MAX77976 state and configuration
//!
//! This module provides strongly-typed enumerations for the raw state codes
//! reported by the MAX77976 and the normalized charger model they map onto.

use crate::registers::{BAT_DTLS_MASK, CHGPROT_LOCKED, CHGPROT_UNLOCKED, CHG_DTLS_MASK};

/// Charging state (CHG_DETAILS_01.CHG_DTLS)
///
/// Every 4-bit value has a variant, reserved codes included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ChargingState {
    /// Dead-battery or low-battery prequalification
    Prequalification = 0x0,
    /// Fast-charge, constant current
    FastConstantCurrent = 0x1,
    /// Fast-charge, constant voltage
    FastConstantVoltage = 0x2,
    /// Top-off
    TopOff = 0x3,
    /// Charge done
    Done = 0x4,
    Reserved05 = 0x5,
    /// Safety timer expired
    TimerFault = 0x6,
    /// Suspended because QBATT is disabled
    SuspendedQbattOff = 0x7,
    /// Charger off: input invalid and/or charger disabled
    Off = 0x8,
    Reserved09 = 0x9,
    /// Junction temperature above shutdown threshold
    ThermalShutdown = 0xA,
    /// Watchdog timer expired
    WatchdogExpired = 0xB,
    /// Suspended or reduced by JEITA control
    SuspendedJeita = 0xC,
    /// Suspended because battery removal was detected on THM
    SuspendedThermistorRemoval = 0xD,
    /// Suspended because the SUSPEND pin is high
    SuspendedPin = 0xE,
    Reserved0F = 0xF,
}

impl ChargingState {
    /// Decode the low 4 bits of `code`
    pub const fn from_code(code: u8) -> Self {
        match code & CHG_DTLS_MASK {
            0x0 => Self::Prequalification,
            0x1 => Self::FastConstantCurrent,
            0x2 => Self::FastConstantVoltage,
            0x3 => Self::TopOff,
            0x4 => Self::Done,
            0x5 => Self::Reserved05,
            0x6 => Self::TimerFault,
            0x7 => Self::SuspendedQbattOff,
            0x8 => Self::Off,
            0x9 => Self::Reserved09,
            0xA => Self::ThermalShutdown,
            0xB => Self::WatchdogExpired,
            0xC => Self::SuspendedJeita,
            0xD => Self::SuspendedThermistorRemoval,
            0xE => Self::SuspendedPin,
            _ => Self::Reserved0F,
        }
    }

    /// Raw register code
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Battery state (CHG_DETAILS_01.BAT_DTLS)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum BatteryState {
    /// Adapter present, battery detached
    Removal = 0,
    /// Battery below the trickle threshold
    Prequalification = 1,
    /// Battery took longer than the safety timer to charge
    TimerFault = 2,
    /// Battery between minimum system voltage and overvoltage
    RegularVoltage = 3,
    /// Battery between trickle threshold and minimum system voltage
    LowVoltage = 4,
    /// Battery above the overvoltage threshold
    Overvoltage = 5,
    Reserved = 6,
    /// No valid adapter; battery monitoring unavailable
    BatteryOnly = 7,
}

impl BatteryState {
    /// Decode the low 3 bits of `code`
    pub const fn from_code(code: u8) -> Self {
        match code & BAT_DTLS_MASK {
            0 => Self::Removal,
            1 => Self::Prequalification,
            2 => Self::TimerFault,
            3 => Self::RegularVoltage,
            4 => Self::LowVoltage,
            5 => Self::Overvoltage,
            6 => Self::Reserved,
            _ => Self::BatteryOnly,
        }
    }

    /// Raw register code
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Normalized charger status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Status {
    Charging,
    Full,
    NotCharging,
    Discharging,
    Unknown,
}

/// Normalized charge type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChargeType {
    Trickle,
    Fast,
    Standard,
    None,
    Unknown,
}

/// Normalized battery health
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Health {
    NoBattery,
    Good,
    SafetyTimerExpired,
    Overvoltage,
    Unknown,
}

/// Operating modes (CHG_CNFG_00.MODE)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Mode {
    /// Charger, OTG, buck and boost all off
    Off = 0x0,
    /// Buck on, charger off
    Buck = 0x4,
    /// Buck on, charger on
    Charge = 0x5,
    /// Boost on, OTG off
    Boost = 0x9,
    /// Boost on, OTG on
    Otg = 0xA,
}

impl Mode {
    /// Named mode for a raw nibble, if there is one
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0x0 => Some(Self::Off),
            0x4 => Some(Self::Buck),
            0x5 => Some(Self::Charge),
            0x9 => Some(Self::Boost),
            0xA => Some(Self::Otg),
            _ => None,
        }
    }

    /// Raw register code
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Charger configuration protection (CHG_CNFG_06.CHGPROT)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProtectionLock {
    Locked,
    Unlocked,
}

impl ProtectionLock {
    /// Host-side lock code: 0 unlocks, 1 locks
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Unlocked),
            1 => Some(Self::Locked),
            _ => None,
        }
    }

    /// Byte written to CHG_CNFG_06
    pub const fn register_value(self) -> u8 {
        match self {
            Self::Locked => CHGPROT_LOCKED,
            Self::Unlocked => CHGPROT_UNLOCKED,
        }
    }
}
