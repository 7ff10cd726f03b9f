//! Async MAX77976 charger driver implementation

use crate::{
    classify::{classify_charge_type, classify_health, classify_status},
    codec::*,
    config::Config,
    error::Error,
    limits::{
        clamp_setpoint_ma, input_limit_for, FAST_CHARGE_CURRENT, INPUT_CURRENT,
        TERMINATION_VOLTAGE,
    },
    property::{Property, PropertyValue, SetRequest},
    registers::*,
    types::*,
};

use embedded_batteries_async::charger;
use embedded_hal_async::i2c::I2c as AsyncI2c;

/// Async MAX77976 charger driver
///
/// This implementation provides async operations for all MAX77976 functionality
/// when the `async` feature is enabled. All methods mirror the synchronous API
/// but return futures that can be awaited. Each bus transaction is awaited
/// before the next one starts.
///
/// There is no public counterpart of the blocking driver's
/// `with_protection_unlocked` scope. The protected setters
/// (`set_fast_charge_current_limit`, `set_termination_voltage`,
/// `set_charge_current`) give the same unlock/relock guarantees.
///
/// # Example
/// ```no_run
/// # async fn example<I: embedded_hal_async::i2c::I2c>(i2c: I) -> Result<(), max77976::Error<I::Error>> {
/// use max77976::{AsyncMax77976, Status};
///
/// let mut charger = AsyncMax77976::new(i2c);
///
/// if charger.status().await? == Status::Full {
///     charger.set_charge_current(500).await?;
/// }
/// # Ok(())
/// # }
/// ```
pub struct AsyncMax77976<I> {
    i2c: I,
    config: Config,
}

impl<I> AsyncMax77976<I>
where
    I: AsyncI2c,
{
    /// Create a new async MAX77976 driver instance with the default configuration
    pub fn new(i2c: I) -> Self {
        Self::with_config(i2c, Config::default())
    }

    /// Create a new async MAX77976 driver instance with custom I2C address
    pub fn with_address(i2c: I, addr: u8) -> Self {
        Self::with_config(i2c, Config::default().with_address(addr))
    }

    /// Create a new async MAX77976 driver instance from a full [`Config`]
    pub fn with_config(i2c: I, config: Config) -> Self {
        Self { i2c, config }
    }

    /// Configuration this driver was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consume the driver and return the I2C bus
    pub fn release(self) -> I {
        self.i2c
    }

    // ========================================
    // Low-level I2C operations
    // ========================================

    async fn read_register(&mut self, reg: u8) -> Result<u8, Error<I::Error>> {
        let mut buf = [0u8];
        self.i2c
            .write_read(self.config.address, &[reg], &mut buf)
            .await
            .map_err(Error::I2c)?;
        Ok(buf[0])
    }

    async fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Error<I::Error>> {
        self.i2c
            .write(self.config.address, &[reg, value])
            .await
            .map_err(Error::I2c)
    }

    /// Write registers in order behind the configuration protection
    ///
    /// Same contract as the blocking driver's `with_protection_unlocked`:
    /// nothing is written if unlocking fails, the lock is always attempted
    /// afterwards, and the first error wins.
    async fn write_protected(&mut self, writes: &[(u8, u8)]) -> Result<(), Error<I::Error>> {
        self.set_protection(ProtectionLock::Unlocked).await?;

        let mut result = Ok(());
        for &(reg, value) in writes {
            result = self.write_register(reg, value).await;
            if result.is_err() {
                break;
            }
        }

        let relock = self.set_protection(ProtectionLock::Locked).await;
        match (result, relock) {
            (Ok(()), relock) => {
                #[cfg(feature = "defmt")]
                if relock.is_err() {
                    defmt::warn!("MAX77976 relock failed");
                }
                relock
            }
            (Err(e), _relock) => {
                #[cfg(feature = "defmt")]
                defmt::warn!(
                    "MAX77976 configuration aborted, relock {}",
                    if _relock.is_ok() { "ok" } else { "failed" }
                );
                Err(e)
            }
        }
    }

    // ========================================
    // Identification
    // ========================================

    /// Read the chip identification register
    pub async fn chip_id(&mut self) -> Result<u8, Error<I::Error>> {
        self.read_register(MAX77976_CHIP_ID).await
    }

    pub async fn chip_revision(&mut self) -> Result<u8, Error<I::Error>> {
        self.read_register(MAX77976_CHIP_REVISION).await
    }

    // ========================================
    // Status functions
    // ========================================

    pub async fn charging_state(&mut self) -> Result<ChargingState, Error<I::Error>> {
        let val = self.read_register(MAX77976_CHG_DETAILS_01).await?;
        Ok(decode_charging_state(val))
    }

    pub async fn battery_state(&mut self) -> Result<BatteryState, Error<I::Error>> {
        let val = self.read_register(MAX77976_CHG_DETAILS_01).await?;
        Ok(decode_battery_state(val))
    }

    /// Normalized charger status
    pub async fn status(&mut self) -> Result<Status, Error<I::Error>> {
        Ok(classify_status(self.charging_state().await?))
    }

    pub async fn charge_type(&mut self) -> Result<ChargeType, Error<I::Error>> {
        Ok(classify_charge_type(self.charging_state().await?))
    }

    /// Normalized battery health
    pub async fn health(&mut self) -> Result<Health, Error<I::Error>> {
        Ok(classify_health(self.battery_state().await?))
    }

    /// Check if the charger input (CHGIN) has valid power
    pub async fn is_online(&mut self) -> Result<bool, Error<I::Error>> {
        let val = self.read_register(MAX77976_CHG_INT_OK).await?;
        Ok(decode_online_flag(val))
    }

    // ========================================
    // Current limits
    // ========================================

    pub async fn fast_charge_current_limit_code(&mut self) -> Result<u8, Error<I::Error>> {
        let val = self.read_register(MAX77976_CHG_CNFG_02).await?;
        Ok(decode_limit_field(val, CHG_CC_MASK))
    }

    pub async fn fast_charge_current_limit(&mut self) -> Result<u32, Error<I::Error>> {
        let val = self.read_register(MAX77976_CHG_CNFG_02).await?;
        Ok(FAST_CHARGE_CURRENT.decode(val))
    }

    pub async fn set_fast_charge_current_limit(
        &mut self,
        microamps: u32,
    ) -> Result<(), Error<I::Error>> {
        let code = FAST_CHARGE_CURRENT.encode(microamps);
        self.write_protected(&[(MAX77976_CHG_CNFG_02, code)]).await
    }

    pub async fn input_current_limit_code(&mut self) -> Result<u8, Error<I::Error>> {
        let val = self.read_register(MAX77976_CHG_CNFG_09).await?;
        Ok(decode_limit_field(val, CHGIN_ILIM_MASK))
    }

    pub async fn input_current_limit(&mut self) -> Result<u32, Error<I::Error>> {
        let val = self.read_register(MAX77976_CHG_CNFG_09).await?;
        Ok(INPUT_CURRENT.decode(val))
    }

    pub async fn set_input_current_limit(&mut self, microamps: u32) -> Result<(), Error<I::Error>> {
        self.write_register(MAX77976_CHG_CNFG_09, INPUT_CURRENT.encode(microamps))
            .await
    }

    // ========================================
    // Termination voltage
    // ========================================

    pub async fn termination_voltage_code(&mut self) -> Result<u8, Error<I::Error>> {
        let val = self.read_register(MAX77976_CHG_CNFG_04).await?;
        Ok(decode_termination_voltage_field(val))
    }

    pub async fn termination_voltage(&mut self) -> Result<u32, Error<I::Error>> {
        let val = self.read_register(MAX77976_CHG_CNFG_04).await?;
        Ok(TERMINATION_VOLTAGE.decode(val))
    }

    pub async fn set_termination_voltage(&mut self, microvolts: u32) -> Result<(), Error<I::Error>> {
        let code = TERMINATION_VOLTAGE.encode(microvolts);
        self.write_protected(&[(MAX77976_CHG_CNFG_04, code)]).await
    }

    // ========================================
    // Configuration protection
    // ========================================

    pub async fn set_protection(&mut self, lock: ProtectionLock) -> Result<(), Error<I::Error>> {
        self.write_register(MAX77976_CHG_CNFG_06, lock.register_value())
            .await
    }

    pub async fn set_protection_code(&mut self, code: u8) -> Result<(), Error<I::Error>> {
        let lock = ProtectionLock::from_code(code).ok_or(Error::InvalidArgument)?;
        self.set_protection(lock).await
    }

    // ========================================
    // Charge current sequence
    // ========================================

    /// Reprogram the charge current, see [`Max77976::set_charge_current`](crate::Max77976::set_charge_current)
    ///
    /// The input limit saturates at 3.2 A, below the fast-charge limit for
    /// setpoints above 3200 mA.
    pub async fn set_charge_current(&mut self, milliamps: u16) -> Result<(), Error<I::Error>> {
        let milliamps = clamp_setpoint_ma(milliamps);
        let charge_code = FAST_CHARGE_CURRENT.encode(milliamps as u32 * 1000);
        let input_code = INPUT_CURRENT.encode(input_limit_for(
            charge_code,
            self.config.input_headroom_ua,
            self.config.headroom_threshold,
        ));
        let cv_code = self.config.termination_voltage_code();

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "MAX77976 charge current {} mA: CHG_CC={:#x} CHGIN_ILIM={:#x} CHG_CV_PRM={:#x}",
            milliamps,
            charge_code,
            input_code,
            cv_code
        );

        self.write_protected(&[
            (MAX77976_CHG_CNFG_02, charge_code),
            (MAX77976_CHG_CNFG_09, input_code),
            (MAX77976_CHG_CNFG_04, cv_code),
        ])
        .await
    }

    // ========================================
    // Operating mode
    // ========================================

    pub async fn mode_code(&mut self) -> Result<u8, Error<I::Error>> {
        Ok(decode_mode(self.read_register(MAX77976_CHG_CNFG_00).await?))
    }

    pub async fn mode(&mut self) -> Result<Option<Mode>, Error<I::Error>> {
        Ok(Mode::from_code(self.mode_code().await?))
    }

    /// Set the mode nibble of CHG_CNFG_00, keeping the upper 4 bits
    pub async fn set_mode(&mut self, code: u8) -> Result<(), Error<I::Error>> {
        if code > MAX77976_MODE_MAX {
            return Err(Error::InvalidArgument);
        }
        let old = self.read_register(MAX77976_CHG_CNFG_00).await?;
        self.write_register(MAX77976_CHG_CNFG_00, encode_mode(old, code))
            .await
    }

    pub async fn set_operating_mode(&mut self, mode: Mode) -> Result<(), Error<I::Error>> {
        self.set_mode(mode.code()).await
    }

    // ========================================
    // Property dispatch
    // ========================================

    pub async fn get_property(
        &mut self,
        property: Property,
    ) -> Result<PropertyValue, Error<I::Error>> {
        Ok(match property {
            Property::Status => PropertyValue::Status(self.status().await?),
            Property::ChargeType => PropertyValue::ChargeType(self.charge_type().await?),
            Property::Health => PropertyValue::Health(self.health().await?),
            Property::Online => PropertyValue::Online(self.is_online().await?),
            Property::ConstantChargeCurrent => {
                PropertyValue::MicroAmps(self.fast_charge_current_limit().await?)
            }
            Property::InputRegulationCurrent => {
                PropertyValue::MicroAmps(self.input_current_limit().await?)
            }
            Property::ChargeCurrentSequence => return Err(Error::UnsupportedProperty),
        })
    }

    pub async fn set_property(
        &mut self,
        property: Property,
        value: PropertyValue,
    ) -> Result<(), Error<I::Error>> {
        match SetRequest::new(property, value)? {
            SetRequest::FastChargeCurrent(ua) => self.set_fast_charge_current_limit(ua).await,
            SetRequest::InputCurrent(ua) => self.set_input_current_limit(ua).await,
            SetRequest::ChargeCurrentSequence(ma) => self.set_charge_current(ma).await,
            SetRequest::Mode(code) => self.set_mode(code).await,
        }
    }

    pub async fn get_property_id(&mut self, id: u32) -> Result<PropertyValue, Error<I::Error>> {
        let property = Property::from_id(id).ok_or(Error::UnsupportedProperty)?;
        self.get_property(property).await
    }

    pub async fn set_property_id(
        &mut self,
        id: u32,
        value: PropertyValue,
    ) -> Result<(), Error<I::Error>> {
        let property = Property::from_id(id).ok_or(Error::UnsupportedProperty)?;
        self.set_property(property, value).await
    }
}

impl<I: AsyncI2c> charger::ErrorType for AsyncMax77976<I> {
    type Error = Error<I::Error>;
}

impl<I: AsyncI2c> charger::Charger for AsyncMax77976<I> {
    async fn charging_current(
        &mut self,
        current: embedded_batteries::MilliAmps,
    ) -> Result<embedded_batteries::MilliAmps, Self::Error> {
        self.set_charge_current(current as u16).await?;
        Ok((self.fast_charge_current_limit().await? / 1000) as embedded_batteries::MilliAmps)
    }

    async fn charging_voltage(
        &mut self,
        voltage: embedded_batteries::MilliVolts,
    ) -> Result<embedded_batteries::MilliVolts, Self::Error> {
        self.set_termination_voltage(voltage as u32 * 1000).await?;
        Ok((self.termination_voltage().await? / 1000) as embedded_batteries::MilliVolts)
    }
}
