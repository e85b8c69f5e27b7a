use thiserror::Error;

/// Main error type for the GPIO codec.
///
/// Only the checked [`BitWindow`](crate::BitWindow) operations produce these;
/// the primitive encoders and decoders never fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GpioError {
    /// An invalid argument was provided
    #[error("Invalid argument: {0}")]
    InvalidArg(String),
    /// The window width is zero or wider than the value types
    #[error("Invalid window width: {bits} bits")]
    InvalidWidth { bits: u32 },
    /// The value does not fit in the window
    #[error("Value {value} outside range [{min}, {max}]")]
    ValueOutOfRange { value: i128, min: i128, max: i128 },
    /// The window runs past the end of the GPIO array
    #[error("Window of {bits} bits at pin {pin_index} exceeds array of {len} pins")]
    WindowOutOfBounds {
        pin_index: usize,
        bits: u32,
        len: usize,
    },
}

/// A specialized `Result` type for GPIO codec operations.
pub type Result<T> = std::result::Result<T, GpioError>;
