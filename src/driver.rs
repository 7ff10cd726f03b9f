//! Synchronous MAX77976 charger driver implementation

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
use embedded_batteries::charger;
use embedded_hal::i2c::I2c;

/// MAX77976 charger driver
pub struct Max77976<I> {
    i2c: I,
    config: Config,
}

impl<I> Max77976<I>
where
    I: I2c,
{
    /// Create a new MAX77976 driver instance with the default configuration
    ///
    /// # Example
    /// ```no_run
    /// # use max77976::Max77976;
    /// # use embedded_hal::i2c::I2c;
    /// # fn example<I: I2c>(i2c: I) {
    /// let charger = Max77976::new(i2c);
    /// # }
    /// ```
    pub fn new(i2c: I) -> Self {
        Self::with_config(i2c, Config::default())
    }

    /// Create a new MAX77976 driver instance with custom I2C address
    pub fn with_address(i2c: I, addr: u8) -> Self {
        Self::with_config(i2c, Config::default().with_address(addr))
    }

    /// Create a new MAX77976 driver instance from a full [`Config`]
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

    /// Read a single register
    fn read_register(&mut self, reg: u8) -> Result<u8, Error<I::Error>> {
        let mut buf = [0u8];
        self.i2c
            .write_read(self.config.address, &[reg], &mut buf)
            .map_err(Error::I2c)?;
        Ok(buf[0])
    }

    /// Write a single register
    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Error<I::Error>> {
        self.i2c
            .write(self.config.address, &[reg, value])
            .map_err(Error::I2c)
    }

    /// Write registers in order behind the configuration protection
    fn write_protected(&mut self, writes: &[(u8, u8)]) -> Result<(), Error<I::Error>> {
        self.with_protection_unlocked(|dev| {
            for &(reg, value) in writes {
                dev.write_register(reg, value)?;
            }
            Ok(())
        })
    }

    // ========================================
    // Identification
    // ========================================

    /// Read the chip identification register
    pub fn chip_id(&mut self) -> Result<u8, Error<I::Error>> {
        self.read_register(MAX77976_CHIP_ID)
    }

    /// Read the silicon revision register
    pub fn chip_revision(&mut self) -> Result<u8, Error<I::Error>> {
        self.read_register(MAX77976_CHIP_REVISION)
    }

    // ========================================
    // Status functions
    // ========================================

    /// Raw charging-state code from CHG_DETAILS_01
    pub fn charging_state(&mut self) -> Result<ChargingState, Error<I::Error>> {
        Ok(decode_charging_state(self.read_register(MAX77976_CHG_DETAILS_01)?))
    }

    /// Raw battery-state code from CHG_DETAILS_01
    pub fn battery_state(&mut self) -> Result<BatteryState, Error<I::Error>> {
        Ok(decode_battery_state(self.read_register(MAX77976_CHG_DETAILS_01)?))
    }

    /// Normalized charger status
    pub fn status(&mut self) -> Result<Status, Error<I::Error>> {
        Ok(classify_status(self.charging_state()?))
    }

    /// Normalized charge type
    pub fn charge_type(&mut self) -> Result<ChargeType, Error<I::Error>> {
        Ok(classify_charge_type(self.charging_state()?))
    }

    /// Normalized battery health
    pub fn health(&mut self) -> Result<Health, Error<I::Error>> {
        Ok(classify_health(self.battery_state()?))
    }

    /// Check if the charger input (CHGIN) has valid power
    pub fn is_online(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(decode_online_flag(self.read_register(MAX77976_CHG_INT_OK)?))
    }

    // ========================================
    // Current limits
    // ========================================

    /// Fast-charge current step count (CHG_CNFG_02, 50 mA steps)
    pub fn fast_charge_current_limit_code(&mut self) -> Result<u8, Error<I::Error>> {
        let val = self.read_register(MAX77976_CHG_CNFG_02)?;
        Ok(decode_limit_field(val, CHG_CC_MASK))
    }

    /// Fast-charge current limit in micro-amps
    pub fn fast_charge_current_limit(&mut self) -> Result<u32, Error<I::Error>> {
        let val = self.read_register(MAX77976_CHG_CNFG_02)?;
        Ok(FAST_CHARGE_CURRENT.decode(val))
    }

    /// Set the fast-charge current limit (100-5500 mA, 50 mA steps, clamped)
    pub fn set_fast_charge_current_limit(&mut self, microamps: u32) -> Result<(), Error<I::Error>> {
        let code = FAST_CHARGE_CURRENT.encode(microamps);
        self.write_protected(&[(MAX77976_CHG_CNFG_02, code)])
    }

    /// Input current regulation step count (CHG_CNFG_09, 100 mA steps)
    pub fn input_current_limit_code(&mut self) -> Result<u8, Error<I::Error>> {
        let val = self.read_register(MAX77976_CHG_CNFG_09)?;
        Ok(decode_limit_field(val, CHGIN_ILIM_MASK))
    }

    /// Input current regulation limit in micro-amps
    pub fn input_current_limit(&mut self) -> Result<u32, Error<I::Error>> {
        let val = self.read_register(MAX77976_CHG_CNFG_09)?;
        Ok(INPUT_CURRENT.decode(val))
    }

    /// Set the input current limit (100-3200 mA, 100 mA steps, clamped)
    pub fn set_input_current_limit(&mut self, microamps: u32) -> Result<(), Error<I::Error>> {
        self.write_register(MAX77976_CHG_CNFG_09, INPUT_CURRENT.encode(microamps))
    }

    // ========================================
    // Termination voltage
    // ========================================

    /// Termination voltage step count (CHG_CNFG_04, 10 mV steps above 3.60 V)
    pub fn termination_voltage_code(&mut self) -> Result<u8, Error<I::Error>> {
        let val = self.read_register(MAX77976_CHG_CNFG_04)?;
        Ok(decode_termination_voltage_field(val))
    }

    /// Termination voltage in micro-volts
    pub fn termination_voltage(&mut self) -> Result<u32, Error<I::Error>> {
        let val = self.read_register(MAX77976_CHG_CNFG_04)?;
        Ok(TERMINATION_VOLTAGE.decode(val))
    }

    /// Set the termination voltage (3.60-4.23 V, 10 mV steps, clamped)
    pub fn set_termination_voltage(&mut self, microvolts: u32) -> Result<(), Error<I::Error>> {
        let code = TERMINATION_VOLTAGE.encode(microvolts);
        self.write_protected(&[(MAX77976_CHG_CNFG_04, code)])
    }

    // ========================================
    // Configuration protection
    // ========================================

    /// Write the CHGPROT pattern for `lock` to CHG_CNFG_06
    pub fn set_protection(&mut self, lock: ProtectionLock) -> Result<(), Error<I::Error>> {
        self.write_register(MAX77976_CHG_CNFG_06, lock.register_value())
    }

    /// Set the protection from a host lock code (0 = unlock, 1 = lock)
    pub fn set_protection_code(&mut self, code: u8) -> Result<(), Error<I::Error>> {
        let lock = ProtectionLock::from_code(code).ok_or(Error::InvalidArgument)?;
        self.set_protection(lock)
    }

    /// Run `f` with the configuration registers unlocked
    ///
    /// If unlocking fails `f` is not run. Otherwise the lock is always
    /// written afterwards, even when `f` fails; the first error wins.
    pub fn with_protection_unlocked<T, F>(&mut self, f: F) -> Result<T, Error<I::Error>>
    where
        F: FnOnce(&mut Self) -> Result<T, Error<I::Error>>,
    {
        self.set_protection(ProtectionLock::Unlocked)?;
        let result = f(self);
        let relock = self.set_protection(ProtectionLock::Locked);
        match (result, relock) {
            (Ok(value), Ok(())) => Ok(value),
            (Err(e), _relock) => {
                #[cfg(feature = "defmt")]
                defmt::warn!(
                    "MAX77976 configuration aborted, relock {}",
                    if _relock.is_ok() { "ok" } else { "failed" }
                );
                Err(e)
            }
            (Ok(_), Err(e)) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("MAX77976 relock failed");
                Err(e)
            }
        }
    }

    // ========================================
    // Charge current sequence
    // ========================================

    /// Reprogram the charge current
    ///
    /// `milliamps` is clamped to 100-3500 mA. Under the configuration
    /// protection this writes the fast-charge limit, the input limit (with
    /// headroom, see [`Config`]), and the configured termination voltage.
    ///
    /// The input limit saturates at 3.2 A. Setpoints above 3200 mA therefore
    /// leave the input limit below the fast-charge limit, and the charger
    /// draws at most 3.2 A from CHGIN.
    pub fn set_charge_current(&mut self, milliamps: u16) -> Result<(), Error<I::Error>> {
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
    }

    // ========================================
    // Operating mode
    // ========================================

    /// Raw mode nibble of CHG_CNFG_00
    pub fn mode_code(&mut self) -> Result<u8, Error<I::Error>> {
        Ok(decode_mode(self.read_register(MAX77976_CHG_CNFG_00)?))
    }

    /// Current operating mode, `None` if the nibble is not a named mode
    pub fn mode(&mut self) -> Result<Option<Mode>, Error<I::Error>> {
        Ok(Mode::from_code(self.mode_code()?))
    }

    /// Set the mode nibble of CHG_CNFG_00, keeping the upper 4 bits
    ///
    /// Returns `Error::InvalidArgument` without touching the bus for codes above 0x0A.
    pub fn set_mode(&mut self, code: u8) -> Result<(), Error<I::Error>> {
        if code > MAX77976_MODE_MAX {
            return Err(Error::InvalidArgument);
        }
        let old = self.read_register(MAX77976_CHG_CNFG_00)?;
        self.write_register(MAX77976_CHG_CNFG_00, encode_mode(old, code))
    }

    /// Set a named operating mode
    pub fn set_operating_mode(&mut self, mode: Mode) -> Result<(), Error<I::Error>> {
        self.set_mode(mode.code())
    }

    // ========================================
    // Property dispatch
    // ========================================

    /// Read a property
    ///
    /// [`Property::ChargeCurrentSequence`] is write-only.
    pub fn get_property(&mut self, property: Property) -> Result<PropertyValue, Error<I::Error>> {
        Ok(match property {
            Property::Status => PropertyValue::Status(self.status()?),
            Property::ChargeType => PropertyValue::ChargeType(self.charge_type()?),
            Property::Health => PropertyValue::Health(self.health()?),
            Property::Online => PropertyValue::Online(self.is_online()?),
            Property::ConstantChargeCurrent => {
                PropertyValue::MicroAmps(self.fast_charge_current_limit()?)
            }
            Property::InputRegulationCurrent => {
                PropertyValue::MicroAmps(self.input_current_limit()?)
            }
            Property::ChargeCurrentSequence => return Err(Error::UnsupportedProperty),
        })
    }

    /// Write a property, checking the value kind before any bus access
    pub fn set_property(
        &mut self,
        property: Property,
        value: PropertyValue,
    ) -> Result<(), Error<I::Error>> {
        match SetRequest::new(property, value)? {
            SetRequest::FastChargeCurrent(ua) => self.set_fast_charge_current_limit(ua),
            SetRequest::InputCurrent(ua) => self.set_input_current_limit(ua),
            SetRequest::ChargeCurrentSequence(ma) => self.set_charge_current(ma),
            SetRequest::Mode(code) => self.set_mode(code),
        }
    }

    /// [`get_property`](Self::get_property) by raw property identifier
    pub fn get_property_id(&mut self, id: u32) -> Result<PropertyValue, Error<I::Error>> {
        let property = Property::from_id(id).ok_or(Error::UnsupportedProperty)?;
        self.get_property(property)
    }

    /// [`set_property`](Self::set_property) by raw property identifier
    pub fn set_property_id(&mut self, id: u32, value: PropertyValue) -> Result<(), Error<I::Error>> {
        let property = Property::from_id(id).ok_or(Error::UnsupportedProperty)?;
        self.set_property(property, value)
    }
}

impl<I: I2c> charger::ErrorType for Max77976<I> {
    type Error = Error<I::Error>;
}

impl<I: I2c> charger::Charger for Max77976<I> {
    /// Run the charge-current sequence and return the programmed fast-charge limit
    fn charging_current(
        &mut self,
        current: embedded_batteries::MilliAmps,
    ) -> Result<embedded_batteries::MilliAmps, Self::Error> {
        self.set_charge_current(current as u16)?;
        Ok((self.fast_charge_current_limit()? / 1000) as embedded_batteries::MilliAmps)
    }

    /// Set the termination voltage and return the programmed value
    fn charging_voltage(
        &mut self,
        voltage: embedded_batteries::MilliVolts,
    ) -> Result<embedded_batteries::MilliVolts, Self::Error> {
        self.set_termination_voltage(voltage as u32 * 1000)?;
        Ok((self.termination_voltage()? / 1000) as embedded_batteries::MilliVolts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_batteries::charger::{Charger, Error as _, ErrorKind as ChargerErrorKind};
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c::{Mock, Transaction};

    const ADDR: u8 = MAX77976_SLAVE_ADDRESS;

    fn read(reg: u8, value: u8) -> Transaction {
        Transaction::write_read(ADDR, vec![reg], vec![value])
    }

    fn write(reg: u8, value: u8) -> Transaction {
        Transaction::write(ADDR, vec![reg, value])
    }

    fn sequence(charge: u8, input: u8, cv: u8) -> Vec<Transaction> {
        vec![
            write(0x1C, 0x0C),
            write(0x18, charge),
            write(0x1F, input),
            write(0x1A, cv),
            write(0x1C, 0x00),
        ]
    }

    #[test]
    fn status_and_charge_type_from_details() {
        let expectations = [
            read(0x14, 0x01),
            read(0x14, 0x01),
            read(0x14, 0x04),
            read(0x14, 0x04),
            read(0x14, 0x08),
            read(0x14, 0x08),
            read(0x14, 0x0F),
        ];
        let mut charger = Max77976::new(Mock::new(&expectations));

        assert_eq!(charger.status().unwrap(), Status::Charging);
        assert_eq!(charger.charge_type().unwrap(), ChargeType::Fast);
        assert_eq!(charger.status().unwrap(), Status::Full);
        assert_eq!(charger.charge_type().unwrap(), ChargeType::None);
        assert_eq!(charger.status().unwrap(), Status::Discharging);
        assert_eq!(charger.charge_type().unwrap(), ChargeType::None);
        assert_eq!(charger.status().unwrap(), Status::Unknown);

        charger.release().done();
    }

    #[test]
    fn health_from_details() {
        let expectations = [read(0x14, 0x00), read(0x14, 0x04), read(0x14, 0x05)];
        let mut charger = Max77976::new(Mock::new(&expectations));

        assert_eq!(charger.health().unwrap(), Health::NoBattery);
        assert_eq!(charger.health().unwrap(), Health::Good);
        assert_eq!(charger.health().unwrap(), Health::Overvoltage);

        charger.release().done();
    }

    #[test]
    fn online_reads_chgin_ok() {
        let expectations = [read(0x12, 0x40), read(0x12, 0xBF)];
        let mut charger = Max77976::new(Mock::new(&expectations));

        assert!(charger.is_online().unwrap());
        assert!(!charger.is_online().unwrap());

        charger.release().done();
    }

    #[test]
    fn read_failure_is_returned_unchanged() {
        let expectations =
            [Transaction::write_read(ADDR, vec![0x14], vec![0x00]).with_error(ErrorKind::Other)];
        let mut charger = Max77976::new(Mock::new(&expectations));

        assert_eq!(charger.status(), Err(Error::I2c(ErrorKind::Other)));

        charger.release().done();
    }

    #[test]
    fn limit_reads_mask_reserved_bits() {
        let expectations = [
            read(0x1F, 0x14),
            read(0x1F, 0xD4),
            read(0x1F, 0x14),
            read(0x18, 0x94),
            read(0x18, 0x94),
        ];
        let mut charger = Max77976::new(Mock::new(&expectations));

        assert_eq!(charger.input_current_limit_code().unwrap(), 20);
        assert_eq!(charger.input_current_limit_code().unwrap(), 20);
        assert_eq!(charger.input_current_limit().unwrap(), 2_000_000);
        assert_eq!(charger.fast_charge_current_limit_code().unwrap(), 0x14);
        assert_eq!(charger.fast_charge_current_limit().unwrap(), 1_000_000);

        charger.release().done();
    }

    #[test]
    fn fast_charge_limit_write_is_protected() {
        let expectations = [write(0x1C, 0x0C), write(0x18, 0x1E), write(0x1C, 0x00)];
        let mut charger = Max77976::new(Mock::new(&expectations));

        charger.set_fast_charge_current_limit(1_500_000).unwrap();

        charger.release().done();
    }

    #[test]
    fn termination_voltage_round_trip() {
        let expectations = [
            write(0x1C, 0x0C),
            write(0x1A, 0x32),
            write(0x1C, 0x00),
            read(0x1A, 0xF2),
        ];
        let mut charger = Max77976::new(Mock::new(&expectations));

        charger.set_termination_voltage(4_100_000).unwrap();
        assert_eq!(charger.termination_voltage().unwrap(), 4_100_000);

        charger.release().done();
    }

    #[test]
    fn charge_current_sequence_order() {
        let mut charger = Max77976::new(Mock::new(&sequence(0x14, 0x14, 0x3C)));

        charger.set_charge_current(1000).unwrap();

        charger.release().done();
    }

    #[test]
    fn charge_current_sequence_clamps_setpoint() {
        let mut expectations = sequence(0x02, 0x0B, 0x3C);
        expectations.extend(sequence(0x46, 0x20, 0x3C));
        let mut charger = Max77976::new(Mock::new(&expectations));

        charger.set_charge_current(50).unwrap();
        charger.set_charge_current(5000).unwrap();

        charger.release().done();
    }

    #[test]
    fn charge_current_sequence_uses_config() {
        let config = Config::new()
            .with_address(0x6A)
            .with_termination_voltage(4_350_000)
            .with_input_headroom(500_000);
        let expectations = [
            Transaction::write(0x6A, vec![0x1C, 0x0C]),
            Transaction::write(0x6A, vec![0x18, 0x14]),
            Transaction::write(0x6A, vec![0x1F, 0x0F]),
            Transaction::write(0x6A, vec![0x1A, 0x3F]),
            Transaction::write(0x6A, vec![0x1C, 0x00]),
        ];
        let mut charger = Max77976::with_config(Mock::new(&expectations), config);

        charger.set_charge_current(1000).unwrap();

        charger.release().done();
    }

    #[test]
    fn oversized_headroom_saturates_input_limit() {
        let config = Config::new().with_input_headroom(u32::MAX);
        let mut charger = Max77976::with_config(Mock::new(&sequence(0x14, 0x20, 0x3C)), config);

        charger.set_charge_current(1000).unwrap();

        charger.release().done();
    }

    #[test]
    fn failed_step_still_relocks() {
        let expectations = [
            write(0x1C, 0x0C),
            write(0x18, 0x14).with_error(ErrorKind::Other),
            write(0x1C, 0x00),
        ];
        let mut charger = Max77976::new(Mock::new(&expectations));

        assert_eq!(
            charger.set_charge_current(1000),
            Err(Error::I2c(ErrorKind::Other))
        );

        charger.release().done();
    }

    #[test]
    fn first_error_wins_when_relock_also_fails() {
        let expectations = [
            write(0x1C, 0x0C),
            write(0x18, 0x14),
            write(0x1F, 0x14).with_error(ErrorKind::Other),
            write(0x1C, 0x00).with_error(ErrorKind::Bus),
        ];
        let mut charger = Max77976::new(Mock::new(&expectations));

        assert_eq!(
            charger.set_charge_current(1000),
            Err(Error::I2c(ErrorKind::Other))
        );

        charger.release().done();
    }

    #[test]
    fn failed_unlock_writes_nothing_else() {
        let expectations = [write(0x1C, 0x0C).with_error(ErrorKind::Other)];
        let mut charger = Max77976::new(Mock::new(&expectations));

        assert_eq!(
            charger.set_charge_current(1000),
            Err(Error::I2c(ErrorKind::Other))
        );

        charger.release().done();
    }

    #[test]
    fn failed_relock_is_reported() {
        let mut expectations = sequence(0x14, 0x14, 0x3C);
        expectations[4] = write(0x1C, 0x00).with_error(ErrorKind::Bus);
        let mut charger = Max77976::new(Mock::new(&expectations));

        assert_eq!(
            charger.set_charge_current(1000),
            Err(Error::I2c(ErrorKind::Bus))
        );

        charger.release().done();
    }

    #[test]
    fn protection_codes() {
        let expectations = [write(0x1C, 0x0C), write(0x1C, 0x00)];
        let mut charger = Max77976::new(Mock::new(&expectations));

        charger.set_protection_code(0).unwrap();
        charger.set_protection_code(1).unwrap();
        assert_eq!(charger.set_protection_code(2), Err(Error::InvalidArgument));

        charger.release().done();
    }

    #[test]
    fn set_mode_preserves_upper_nibble() {
        let expectations = [
            read(0x16, 0xF4),
            write(0x16, 0xF5),
            read(0x16, 0x30),
            write(0x16, 0x3A),
        ];
        let mut charger = Max77976::new(Mock::new(&expectations));

        charger.set_mode(0x05).unwrap();
        charger.set_operating_mode(Mode::Otg).unwrap();

        charger.release().done();
    }

    #[test]
    fn set_mode_rejects_out_of_range_without_io() {
        let mut charger = Max77976::new(Mock::new(&[]));

        assert_eq!(charger.set_mode(0x0B), Err(Error::InvalidArgument));
        assert_eq!(charger.set_mode(0xFF), Err(Error::InvalidArgument));

        charger.release().done();
    }

    #[test]
    fn mode_read_back() {
        let expectations = [read(0x16, 0xA5), read(0x16, 0xA1)];
        let mut charger = Max77976::new(Mock::new(&expectations));

        assert_eq!(charger.mode().unwrap(), Some(Mode::Charge));
        assert_eq!(charger.mode().unwrap(), None);

        charger.release().done();
    }

    #[test]
    fn get_property_dispatch() {
        let expectations = [
            read(0x14, 0x03),
            read(0x14, 0x03),
            read(0x14, 0x02),
            read(0x12, 0x40),
            read(0x18, 0x14),
            read(0x1F, 0x14),
        ];
        let mut charger = Max77976::new(Mock::new(&expectations));

        assert_eq!(
            charger.get_property(Property::Status).unwrap(),
            PropertyValue::Status(Status::Charging)
        );
        assert_eq!(
            charger.get_property(Property::ChargeType).unwrap(),
            PropertyValue::ChargeType(ChargeType::Standard)
        );
        assert_eq!(
            charger.get_property(Property::Health).unwrap(),
            PropertyValue::Health(Health::SafetyTimerExpired)
        );
        assert_eq!(
            charger.get_property(Property::Online).unwrap(),
            PropertyValue::Online(true)
        );
        assert_eq!(
            charger.get_property(Property::ConstantChargeCurrent).unwrap(),
            PropertyValue::MicroAmps(1_000_000)
        );
        assert_eq!(
            charger.get_property_id(5).unwrap(),
            PropertyValue::MicroAmps(2_000_000)
        );

        charger.release().done();
    }

    #[test]
    fn set_property_dispatch() {
        let mut expectations = vec![read(0x16, 0xF4), write(0x16, 0xF5), write(0x1F, 0x0A)];
        expectations.extend(sequence(0x14, 0x14, 0x3C));
        let mut charger = Max77976::new(Mock::new(&expectations));

        charger
            .set_property(Property::ChargeType, PropertyValue::Mode(0x05))
            .unwrap();
        charger
            .set_property(
                Property::InputRegulationCurrent,
                PropertyValue::MicroAmps(1_000_000),
            )
            .unwrap();
        charger
            .set_property_id(Property::CUSTOM_BEGIN, PropertyValue::MilliAmps(1000))
            .unwrap();

        charger.release().done();
    }

    #[test]
    fn unsupported_properties_do_no_io() {
        let mut charger = Max77976::new(Mock::new(&[]));

        assert_eq!(
            charger.get_property(Property::ChargeCurrentSequence),
            Err(Error::UnsupportedProperty)
        );
        assert_eq!(charger.get_property_id(42), Err(Error::UnsupportedProperty));
        assert_eq!(
            charger.set_property(Property::Status, PropertyValue::Status(Status::Full)),
            Err(Error::UnsupportedProperty)
        );
        assert_eq!(
            charger.set_property_id(42, PropertyValue::MicroAmps(0)),
            Err(Error::UnsupportedProperty)
        );
        assert_eq!(
            charger.set_property(Property::ChargeType, PropertyValue::MilliAmps(5)),
            Err(Error::InvalidArgument)
        );
        assert_eq!(
            charger.set_property(Property::ChargeType, PropertyValue::Mode(0x0B)),
            Err(Error::InvalidArgument)
        );

        charger.release().done();
    }

    #[test]
    fn charging_current_trait() {
        let mut expectations = sequence(0x28, 0x1E, 0x3C);
        expectations.push(read(0x18, 0x28));
        let mut charger = Max77976::new(Mock::new(&expectations));

        assert_eq!(charger.charging_current(2000).unwrap(), 2000);

        charger.release().done();
    }

    #[test]
    fn charging_voltage_trait() {
        let expectations = [
            write(0x1C, 0x0C),
            write(0x1A, 0x37),
            write(0x1C, 0x00),
            read(0x1A, 0x37),
        ];
        let mut charger = Max77976::new(Mock::new(&expectations));

        // 4155 mV floors onto the 10 mV grid
        assert_eq!(charger.charging_voltage(4155).unwrap(), 4150);

        charger.release().done();
    }

    #[test]
    fn charging_current_trait_reports_bus_errors() {
        let expectations = [write(0x1C, 0x0C).with_error(ErrorKind::Other)];
        let mut charger = Max77976::new(Mock::new(&expectations));

        let err = charger.charging_current(1000).unwrap_err();
        assert!(matches!(err.kind(), ChargerErrorKind::CommError));

        charger.release().done();
    }
}
