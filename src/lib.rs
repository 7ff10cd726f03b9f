#![cfg_attr(not(test), no_std)]
//! # MAX77976 Battery Charger Driver
//!
//! This crate provides an embedded driver for the MAX77976 single-cell Li+
//! battery charger, built on the [`embedded-hal`] I2C traits.
//! It supports:
//! - Charger status, charge type and battery health, normalized from the
//!   CHG_DETAILS_01 state codes
//! - Input power detection
//! - Fast-charge current, input current and termination voltage limits
//! - The protected charge-current sequence (unlock, limits, termination
//!   voltage, lock)
//! - Operating mode selection
//! - A property get/set surface for host power-supply frameworks
//! - The [`embedded-batteries`] `Charger` trait (`charging_current`,
//!   `charging_voltage`), blocking and async
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal
//! [`embedded-batteries`]: https://docs.rs/embedded-batteries
//!
//! ## Example
//!
//! ```no_run
//! use max77976::{Max77976, Error, Status};
//! # use embedded_hal::i2c::I2c;
//! # fn example<I: I2c>(i2c: I) -> Result<(), Error<I::Error>> {
//! let mut charger = Max77976::new(i2c);
//!
//! // Charge at 1 A with 4.20 V termination
//! charger.set_charge_current(1000)?;
//!
//! if charger.is_online()? && charger.status()? == Status::Charging {
//!     let limit = charger.fast_charge_current_limit()?;
//!     // ... limit is in micro-amps
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! The charge-current sequence is several independent register writes. Every
//! driver method takes `&mut self`, so one handle cannot interleave with
//! itself; anything else sharing the bus with the charger must be serialized
//! by the caller.
//!
//! ## Async Support
//!
//! When the `async` feature is enabled, the crate provides `AsyncMax77976`
//! with the same API but async/await support. The one exception is the
//! closure scope `with_protection_unlocked`, which only the blocking driver
//! exposes:
//!
//! ```no_run
//! # #[cfg(feature = "async")]
//! # async fn example<I: embedded_hal_async::i2c::I2c>(i2c: I) -> Result<(), max77976::Error<I::Error>> {
//! use max77976::AsyncMax77976;
//!
//! let mut charger = AsyncMax77976::new(i2c);
//! charger.set_charge_current(1000).await?;
//! # Ok(())
//! # }
//! ```

mod classify;
mod codec;
mod config;
mod driver;
#[cfg(feature = "async")]
mod driver_async;
mod error;
mod limits;
mod property;
mod registers;
mod types;

// Re-export main types
pub use classify::*;
pub use codec::*;
pub use config::Config;
pub use driver::Max77976;
#[cfg(feature = "async")]
pub use driver_async::AsyncMax77976;
pub use error::Error;
pub use limits::*;
pub use property::{Property, PropertyValue};
pub use registers::*;
pub use types::*;
