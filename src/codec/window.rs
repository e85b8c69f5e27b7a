//! Validated bit windows over a GPIO array.

use std::ops::Range;

use log::{debug, trace};

use crate::codec::bits::{self, MAX_BITS};
use crate::utils::error::{GpioError, Result};

/// A contiguous run of pins holding one integer.
///
/// Construction checks the width, and every read or write checks the window
/// against the array it is given, so the checked operations never panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitWindow {
    pin_index: usize,
    bits: u32,
}

impl BitWindow {
    /// Creates a window of `bits` pins starting at `pin_index`.
    ///
    /// # Errors
    /// Returns `GpioError::InvalidWidth` unless `1 <= bits <= MAX_BITS`, and
    /// `GpioError::InvalidArg` if the window end does not fit in `usize`.
    pub fn new(pin_index: usize, bits: u32) -> Result<Self> {
        if bits == 0 || bits > MAX_BITS {
            debug!("Rejecting window width {} at pin {}", bits, pin_index);
            return Err(GpioError::InvalidWidth { bits });
        }
        if pin_index.checked_add(bits as usize).is_none() {
            return Err(GpioError::InvalidArg(format!(
                "window of {} bits at pin {} overflows the pin index",
                bits, pin_index
            )));
        }
        Ok(Self { pin_index, bits })
    }

    pub fn pin_index(&self) -> usize {
        self.pin_index
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Index one past the last pin of the window.
    pub fn end(&self) -> usize {
        self.pin_index + self.bits as usize
    }

    pub fn range(&self) -> Range<usize> {
        self.pin_index..self.end()
    }

    /// Largest unsigned value the window holds.
    pub fn unsigned_max(&self) -> u64 {
        u64::MAX >> (MAX_BITS - self.bits)
    }

    /// Smallest signed value the window holds.
    pub fn signed_min(&self) -> i64 {
        i64::MIN >> (MAX_BITS - self.bits)
    }

    /// Largest signed value the window holds.
    pub fn signed_max(&self) -> i64 {
        i64::MAX >> (MAX_BITS - self.bits)
    }

    /// Whether an array of `len` pins contains the whole window.
    pub fn fits(&self, len: usize) -> bool {
        self.end() <= len
    }

    /// Whether the two windows share at least one pin.
    pub fn overlaps(&self, other: &BitWindow) -> bool {
        self.pin_index < other.end() && other.pin_index < self.end()
    }

    fn check_bounds(&self, len: usize) -> Result<()> {
        if self.fits(len) {
            return Ok(());
        }
        debug!(
            "Window {:?} does not fit in a GPIO array of {} pins",
            self.range(),
            len
        );
        Err(GpioError::WindowOutOfBounds {
            pin_index: self.pin_index,
            bits: self.bits,
            len,
        })
    }

    fn check_value(&self, value: i128, min: i128, max: i128) -> Result<()> {
        if (min..=max).contains(&value) {
            return Ok(());
        }
        debug!(
            "Value {} does not fit the {}-bit window at pin {}",
            value, self.bits, self.pin_index
        );
        Err(GpioError::ValueOutOfRange { value, min, max })
    }

    /// Writes an unsigned value into the window.
    ///
    /// # Errors
    /// `GpioError::ValueOutOfRange` if `value > unsigned_max()`, and
    /// `GpioError::WindowOutOfBounds` if `gpio` is too short. The array is
    /// left untouched on error.
    pub fn write_unsigned(&self, gpio: &mut [u8], value: u64) -> Result<()> {
        self.check_value(value as i128, 0, self.unsigned_max() as i128)?;
        self.check_bounds(gpio.len())?;
        bits::encode_unsigned(gpio, value, self.pin_index, self.bits);
        trace!("Wrote {} to pins {:?}", value, self.range());
        Ok(())
    }

    /// Writes a signed value into the window using excess-K storage.
    ///
    /// # Errors
    /// Same as [`write_unsigned`](Self::write_unsigned), against the signed range.
    pub fn write_signed(&self, gpio: &mut [u8], value: i64) -> Result<()> {
        self.check_value(
            value as i128,
            self.signed_min() as i128,
            self.signed_max() as i128,
        )?;
        self.check_bounds(gpio.len())?;
        bits::encode_signed(gpio, value, self.pin_index, self.bits);
        trace!("Wrote {} to pins {:?}", value, self.range());
        Ok(())
    }

    /// Reads the window as an unsigned value.
    pub fn read_unsigned(&self, gpio: &[u8]) -> Result<u64> {
        self.check_bounds(gpio.len())?;
        let value = bits::decode_unsigned(gpio, self.pin_index, self.bits);
        trace!("Read {} from pins {:?}", value, self.range());
        Ok(value)
    }

    /// Reads the window as a signed value.
    pub fn read_signed(&self, gpio: &[u8]) -> Result<i64> {
        self.check_bounds(gpio.len())?;
        let value = bits::decode_signed(gpio, self.pin_index, self.bits);
        trace!("Read {} from pins {:?}", value, self.range());
        Ok(value)
    }
}
