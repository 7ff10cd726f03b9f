//! Error types for MAX77976 operations
//!
//! This module defines the error types that can occur when using the MAX77976 driver.

use core::fmt;
use embedded_batteries::charger;

/// Error types for MAX77976 operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// I2C communication error
    I2c(E),
    /// Argument outside the accepted set (mode code, lock code, property value kind)
    InvalidArgument,
    /// Property identifier unknown, or not supported in the requested direction
    UnsupportedProperty,
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::I2c(e) => write!(f, "I2C bus error: {:?}", e),
            Error::InvalidArgument => f.write_str("invalid argument"),
            Error::UnsupportedProperty => f.write_str("unsupported property"),
        }
    }
}

impl<E: embedded_hal::i2c::Error> charger::Error for Error<E> {
    fn kind(&self) -> charger::ErrorKind {
        match self {
            Self::I2c(_) => charger::ErrorKind::CommError,
            Self::InvalidArgument | Self::UnsupportedProperty => charger::ErrorKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_batteries::charger::Error as _;
    use embedded_hal::i2c::ErrorKind;

    #[test]
    fn display_names_the_failure() {
        use std::string::ToString;

        let bus: Error<ErrorKind> = Error::I2c(ErrorKind::Other);
        assert_eq!(bus.to_string(), "I2C bus error: Other");
        assert_eq!(
            Error::<ErrorKind>::InvalidArgument.to_string(),
            "invalid argument"
        );
        assert_eq!(
            Error::<ErrorKind>::UnsupportedProperty.to_string(),
            "unsupported property"
        );
    }

    #[test]
    fn charger_error_kinds() {
        let bus: Error<ErrorKind> = Error::I2c(ErrorKind::Bus);
        assert!(matches!(bus.kind(), charger::ErrorKind::CommError));
        assert!(matches!(
            Error::<ErrorKind>::InvalidArgument.kind(),
            charger::ErrorKind::Other
        ));
    }
}
