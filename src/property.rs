//! Charger property identifiers and values
//!
//! The property surface mirrors a host power-supply framework: a small set of
//! identifiers, each carrying one kind of value. Both drivers dispatch on
//! these through `get_property` / `set_property`.

use crate::error::Error;
use crate::types::{ChargeType, Health, Status};

/// Charger property identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Property {
    /// [`Status`], read only
    Status,
    /// [`ChargeType`] when read; writing a mode code here sets CHG_CNFG_00
    ChargeType,
    /// [`Health`], read only
    Health,
    /// Input power present, read only
    Online,
    /// Fast-charge current limit in micro-amps
    ConstantChargeCurrent,
    /// Input current regulation limit in micro-amps
    InputRegulationCurrent,
    /// Write-only: run the full charge-current sequence with a milliamp setpoint
    ChargeCurrentSequence,
}

impl Property {
    /// Raw identifier of the vendor-specific charge-current sequence property
    pub const CUSTOM_BEGIN: u32 = 0x1000;

    pub const fn id(self) -> u32 {
        match self {
            Property::Status => 0,
            Property::ChargeType => 1,
            Property::Health => 2,
            Property::Online => 3,
            Property::ConstantChargeCurrent => 4,
            Property::InputRegulationCurrent => 5,
            Property::ChargeCurrentSequence => Self::CUSTOM_BEGIN,
        }
    }

    pub const fn from_id(id: u32) -> Option<Self> {
        match id {
            0 => Some(Property::Status),
            1 => Some(Property::ChargeType),
            2 => Some(Property::Health),
            3 => Some(Property::Online),
            4 => Some(Property::ConstantChargeCurrent),
            5 => Some(Property::InputRegulationCurrent),
            Self::CUSTOM_BEGIN => Some(Property::ChargeCurrentSequence),
            _ => None,
        }
    }
}

/// A property value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PropertyValue {
    Status(Status),
    ChargeType(ChargeType),
    Health(Health),
    Online(bool),
    /// Current in micro-amps
    MicroAmps(u32),
    /// Charge-current sequence setpoint in milliamps
    MilliAmps(u16),
    /// Raw CHG_CNFG_00 mode code
    Mode(u8),
}

/// A validated property write, ready for the driver to execute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SetRequest {
    FastChargeCurrent(u32),
    InputCurrent(u32),
    ChargeCurrentSequence(u16),
    Mode(u8),
}

impl SetRequest {
    /// Pair a property with its value, without touching the bus
    ///
    /// Read-only properties fail with `UnsupportedProperty`; a value of the
    /// wrong kind fails with `InvalidArgument`.
    pub(crate) fn new<E>(property: Property, value: PropertyValue) -> Result<Self, Error<E>> {
        match (property, value) {
            (Property::ConstantChargeCurrent, PropertyValue::MicroAmps(ua)) => {
                Ok(SetRequest::FastChargeCurrent(ua))
            }
            (Property::InputRegulationCurrent, PropertyValue::MicroAmps(ua)) => {
                Ok(SetRequest::InputCurrent(ua))
            }
            (Property::ChargeCurrentSequence, PropertyValue::MilliAmps(ma)) => {
                Ok(SetRequest::ChargeCurrentSequence(ma))
            }
            (Property::ChargeType, PropertyValue::Mode(code)) => Ok(SetRequest::Mode(code)),
            (Property::Status | Property::Health | Property::Online, _) => {
                Err(Error::UnsupportedProperty)
            }
            _ => Err(Error::InvalidArgument),
        }
    }
}
