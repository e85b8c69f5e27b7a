//! # GPIO Bit-Window Codec
//!
//! Encodes fixed-width integers into a byte array of digital pins and reads
//! them back. Each slot of the array is one pin: `0` when off, `255` when on.
//! An integer occupies a contiguous window of pins, most significant bit
//! first.
//!
//! This library is organized into two modules:
//! - `utils`: Error handling
//! - `codec`: The primitive bit-window encoders/decoders and the checked
//!   [`BitWindow`] surface built on them
//!
//! The caller owns the array; nothing here allocates, resizes or transmits it.

// Re-export commonly used types at the crate root
pub use utils::error::{GpioError, Result};

pub mod utils {
    pub mod error;
}

pub mod codec {
    pub mod bits;
    pub mod window;

    pub use self::bits::*;
    pub use self::window::BitWindow;
}

// Public API exports
pub use codec::bits::{
    MAX_BITS, PIN_OFF, PIN_ON, decode_signed, decode_unsigned, encode_signed, encode_unsigned,
};
pub use codec::window::BitWindow;

// Constants
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
