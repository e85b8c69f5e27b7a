//! Primitive encode/decode of integers into windows of a GPIO array.
//!
//! A GPIO array is a plain byte slice with one slot per digital pin. A slot
//! is written as [`PIN_ON`] or [`PIN_OFF`]; when reading, any nonzero byte
//! counts as on. An integer occupies `bits` consecutive slots starting at
//! `pin_index`, most significant bit first, so the last slot of the window
//! holds the least significant bit.
//!
//! Signed values use excess-K storage: the value plus `2^(bits-1)` is stored
//! as an unsigned number.
//!
//! Nothing here validates its input. Values wider than the window lose
//! their high bits, and a window past the end of the slice panics like any
//! other out-of-bounds slice. Use [`BitWindow`](super::window::BitWindow)
//! for checked access.

use bitvec::prelude::*;

/// Slot value of a pin that is off.
pub const PIN_OFF: u8 = 0;
/// Slot value of a pin that is on.
pub const PIN_ON: u8 = 255;
/// Widest window whose value fits the `u64`/`i64` value types.
pub const MAX_BITS: u32 = u64::BITS;

#[inline]
const fn pin_state(on: bool) -> u8 {
    if on { PIN_ON } else { PIN_OFF }
}

/// Offset added to a signed value before it is stored: `2^(bits-1)`.
///
/// Zero for an empty window, and zero (mod 2^64) for windows wider than
/// [`MAX_BITS`].
#[inline]
pub(crate) fn bias(bits: u32) -> u64 {
    bits.checked_sub(1)
        .and_then(|shift| 1u64.checked_shl(shift))
        .unwrap_or(0)
}

/// Writes `value` as a `bits`-wide unsigned integer at `pin_index`.
///
/// Bit `i` of `value` (0 = LSB) lands in slot `pin_index + bits - 1 - i`.
/// Only the slots of the window are written.
#[track_caller]
pub fn encode_unsigned(gpio: &mut [u8], value: u64, pin_index: usize, bits: u32) {
    let window = &mut gpio[pin_index..pin_index + bits as usize];
    let value_bits = value.view_bits::<Lsb0>();

    // Walk the window from its last slot so the enumeration index is the bit position.
    for (i, slot) in window.iter_mut().rev().enumerate() {
        let on = value_bits.get(i).is_some_and(|bit| *bit);
        *slot = pin_state(on);
    }
}

/// Writes `value` as a `bits`-wide signed integer at `pin_index`.
#[track_caller]
pub fn encode_signed(gpio: &mut [u8], value: i64, pin_index: usize, bits: u32) {
    encode_unsigned(gpio, (value as u64).wrapping_add(bias(bits)), pin_index, bits);
}

/// Reads a `bits`-wide unsigned integer from the window at `pin_index`.
#[track_caller]
pub fn decode_unsigned(gpio: &[u8], pin_index: usize, bits: u32) -> u64 {
    let window = &gpio[pin_index..pin_index + bits as usize];
    let mut word = BitArray::<u64, Lsb0>::new(0);

    for (i, slot) in window.iter().rev().enumerate().take(MAX_BITS as usize) {
        word.set(i, *slot != PIN_OFF);
    }

    word.into_inner()
}

/// Reads a `bits`-wide signed integer from the window at `pin_index`.
#[track_caller]
pub fn decode_signed(gpio: &[u8], pin_index: usize, bits: u32) -> i64 {
    decode_unsigned(gpio, pin_index, bits).wrapping_sub(bias(bits)) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsigned_bit_order() {
        let mut gpio = [0u8; 4];
        encode_unsigned(&mut gpio, 5, 0, 4);
        assert_eq!(gpio, [0, 255, 0, 255]);
        assert_eq!(decode_unsigned(&gpio, 0, 4), 5);
    }

    #[test]
    fn test_signed_bias() {
        let mut gpio = [0u8; 3];
        encode_signed(&mut gpio, -1, 0, 3);
        assert_eq!(gpio, [0, 255, 255]);
        assert_eq!(decode_signed(&[0, 255, 255], 0, 3), -1);
    }

    #[test]
    fn test_signed_extremes() {
        let mut gpio = [0u8; 8];

        encode_signed(&mut gpio, -128, 0, 8);
        assert_eq!(gpio, [0; 8]);
        assert_eq!(decode_signed(&gpio, 0, 8), -128);

        encode_signed(&mut gpio, 127, 0, 8);
        assert_eq!(gpio, [255; 8]);
        assert_eq!(decode_signed(&gpio, 0, 8), 127);

        encode_signed(&mut gpio, 0, 0, 8);
        assert_eq!(gpio, [255, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_bias() {
        assert_eq!(bias(0), 0);
        assert_eq!(bias(1), 1);
        assert_eq!(bias(3), 4);
        assert_eq!(bias(64), 1 << 63);
        assert_eq!(bias(65), 0);
    }

    #[test]
    fn test_nonzero_reads_as_on() {
        let gpio = [1u8, 0, 128, 7];
        assert_eq!(decode_unsigned(&gpio, 0, 4), 0b1011);
    }

    #[test]
    fn test_value_wider_than_window_is_truncated() {
        let mut gpio = [0u8; 3];
        // 0b1_0110 keeps only its low three bits.
        encode_unsigned(&mut gpio, 0b1_0110, 0, 3);
        assert_eq!(gpio, [255, 255, 0]);
        assert_eq!(decode_unsigned(&gpio, 0, 3), 0b110);
    }

    #[test]
    fn test_only_window_is_written() {
        let mut gpio = [42u8; 10];
        encode_unsigned(&mut gpio, 0b101, 3, 3);
        assert_eq!(gpio, [42, 42, 42, 255, 0, 255, 42, 42, 42, 42]);
    }

    #[test]
    fn test_full_width_window() {
        let mut gpio = vec![0u8; 64];

        encode_unsigned(&mut gpio, u64::MAX, 0, 64);
        assert!(gpio.iter().all(|&slot| slot == PIN_ON));
        assert_eq!(decode_unsigned(&gpio, 0, 64), u64::MAX);

        for value in [i64::MIN, -1, 0, 1, i64::MAX] {
            encode_signed(&mut gpio, value, 0, 64);
            assert_eq!(decode_signed(&gpio, 0, 64), value);
        }
    }

    #[test]
    fn test_window_wider_than_value() {
        let mut gpio = [255u8; 66];
        encode_unsigned(&mut gpio, 3, 0, 66);
        // The two slots above bit 63 are written off.
        assert_eq!(gpio[0], PIN_OFF);
        assert_eq!(gpio[1], PIN_OFF);
        assert_eq!(&gpio[64..], &[PIN_ON, PIN_ON]);
        assert_eq!(decode_unsigned(&gpio, 0, 66), 3);
    }

    #[test]
    fn test_empty_window() {
        let mut gpio = [9u8; 2];
        encode_unsigned(&mut gpio, 7, 1, 0);
        assert_eq!(gpio, [9, 9]);
        assert_eq!(decode_unsigned(&gpio, 1, 0), 0);
        assert_eq!(decode_signed(&gpio, 1, 0), 0);
    }

    #[test]
    #[should_panic]
    fn test_window_past_end_panics() {
        let mut gpio = [0u8; 4];
        encode_unsigned(&mut gpio, 1, 2, 4);
    }
}
