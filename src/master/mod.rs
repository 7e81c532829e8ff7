/*!
    master side of the bus: drive transactions towards other devices.

    transactions are synchronous, each method returns once the bus is released or kept for a repeated start.

    - [TwoWire::begin_transmission](crate::TwoWire::begin_transmission), [TwoWire::end_transmission](crate::TwoWire::end_transmission) and [TwoWire::request_from](crate::TwoWire::request_from) implement the bus sequencing with the literal result codes of the usual wire interface ([ErrorCode], number of bytes read)
    - [TwoWire::read_register](crate::TwoWire::read_register), [TwoWire::write_register](crate::TwoWire::write_register) and the bulk transfers build `Result` returning helpers on top of it, as does the [embedded_hal::i2c::I2c] implementation
*/

/// implementation of the bus exchanges, this is the tricky part of the code
mod transaction;
/// convenient methods to read/write devices on the bus
mod accessing;

use thiserror::Error;


/// outcome of a write transaction, values are the wire interface result codes
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrorCode {
    Success = 0,
    /// data exceeded the transmit buffer, not raised by the transaction engine itself
    DataTooLong = 1,
    /// address not acknowledged
    AddressNack = 2,
    /// data byte not acknowledged
    DataNack = 3,
    /// bus timed out, it has been reset
    Timeout = 4,
    Other = 5,
}
impl ErrorCode {
    pub fn into_result(self) -> Result<(), Error> {
        match self {
            Self::Success => Ok(()),
            Self::DataTooLong => Err(Error::DataTooLong),
            Self::AddressNack => Err(Error::AddressNack),
            Self::DataNack => Err(Error::DataNack),
            Self::Timeout => Err(Error::Timeout),
            Self::Other => Err(Error::Other),
        }
    }
}
impl From<ErrorCode> for u8 {
    fn from(code: ErrorCode) -> u8 {code as u8}
}

/// error regarding a master transaction
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("data does not fit in the transfer buffer")]
    DataTooLong,
    #[error("no device acknowledged the address")]
    AddressNack,
    #[error("device did not acknowledge data")]
    DataNack,
    #[error("bus timed out and has been reset")]
    Timeout,
    #[error("transaction failed")]
    Other,
    #[error("received {received} bytes out of {expected}")]
    Short {received: usize, expected: usize},
}
