/*!
    two-wire (I2C) bus transaction engine

    [TwoWire] owns a bus [peripheral](peripheral::WirePeripheral) and a pair of [transfer buffers](buffer::RingBuffer). It can act as

    - bus master: buffered write transactions and reads, see [master]
    - slave: protocol reactions to a master addressing this device, serviced from the bus interrupt, see [slave]
*/
#![no_std]

pub mod buffer;
pub mod peripheral;
pub mod registers;
pub mod wire;
#[cfg(feature = "master")]
pub mod master;
#[cfg(feature = "slave")]
pub mod slave;

pub use peripheral::{WirePeripheral, Direction, SlaveEvent};
pub use wire::TwoWire;
