//! Mapping from raw MAX77976 state codes to the normalized charger model
//!
//! Each function is an exhaustive match over a closed enumeration, so a new
//! variant cannot be added without deciding how it classifies.

use crate::types::{BatteryState, ChargeType, ChargingState, Health, Status};

/// Charger status for a charging-state code
pub const fn classify_status(state: ChargingState) -> Status {
    use ChargingState::*;
    match state {
        Prequalification | FastConstantCurrent | FastConstantVoltage | TopOff => Status::Charging,
        Done => Status::Full,
        TimerFault | SuspendedQbattOff | SuspendedJeita | SuspendedThermistorRemoval
        | SuspendedPin => Status::NotCharging,
        Off | ThermalShutdown | WatchdogExpired => Status::Discharging,
        Reserved05 | Reserved09 | Reserved0F => Status::Unknown,
    }
}

/// Charge type for a charging-state code
pub const fn classify_charge_type(state: ChargingState) -> ChargeType {
    use ChargingState::*;
    match state {
        Prequalification => ChargeType::Trickle,
        FastConstantCurrent | FastConstantVoltage => ChargeType::Fast,
        TopOff => ChargeType::Standard,
        Done | TimerFault | SuspendedQbattOff | Off | ThermalShutdown | WatchdogExpired
        | SuspendedJeita | SuspendedThermistorRemoval | SuspendedPin => ChargeType::None,
        Reserved05 | Reserved09 | Reserved0F => ChargeType::Unknown,
    }
}

/// Battery health for a battery-state code
pub const fn classify_health(state: BatteryState) -> Health {
    match state {
        BatteryState::Removal => Health::NoBattery,
        BatteryState::LowVoltage | BatteryState::RegularVoltage => Health::Good,
        BatteryState::TimerFault => Health::SafetyTimerExpired,
        BatteryState::Overvoltage => Health::Overvoltage,
        BatteryState::Prequalification | BatteryState::BatteryOnly | BatteryState::Reserved => {
            Health::Unknown
        }
    }
}
