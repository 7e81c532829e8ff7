use log::*;

use crate::{
    buffer::RingBuffer,
    peripheral::WirePeripheral,
    };


/// standard mode bus clock (Hz), used by [TwoWire::begin]
pub const STANDARD_MODE: u32 = 100_000;
/// fast mode bus clock (Hz)
pub const FAST_MODE: u32 = 400_000;
/// fast mode plus bus clock (Hz)
pub const FAST_MODE_PLUS: u32 = 1_000_000;

/// default capacity of each transfer buffer
pub const BUFFER_SIZE: usize = 256;

/// called at the end of an inbound write session with the number of bytes received
#[cfg(feature = "slave")]
pub type ReceiveCallback<P, const N: usize> = fn(&mut TwoWire<P, N>, usize);
/// called when a master starts reading from this device, before the first byte is sent
#[cfg(feature = "slave")]
pub type RequestCallback<P, const N: usize> = fn(&mut TwoWire<P, N>);


/**
    two-wire bus interface, owning a peripheral and its transfer buffers

    - as master, transactions are driven synchronously by the methods in [crate::master]
    - as slave, the bus interrupt must call [TwoWire::on_service] which exchanges data with the buffers and the registered callbacks

    there should be one instance per physical bus, owned by whoever dispatches the bus interrupt.
*/
pub struct TwoWire<P, const N: usize = BUFFER_SIZE> {
    pub(crate) peripheral: P,
    /// outgoing data, filled by [Self::write]
    pub(crate) tx: RingBuffer<N>,
    /// incoming data, drained by [Self::read]
    pub(crate) rx: RingBuffer<N>,
    /// device addressed by the next write transaction
    pub(crate) target: u8,
    /// writes are only accepted while a transmission is open
    pub(crate) transmission_open: bool,
    /// last clock configured, restored when recovering from a timeout
    pub(crate) clock: u32,
    #[cfg(feature = "slave")]
    pub(crate) on_receive: Option<ReceiveCallback<P, N>>,
    #[cfg(feature = "slave")]
    pub(crate) on_request: Option<RequestCallback<P, N>>,
}

impl<P: WirePeripheral, const N: usize> TwoWire<P, N> {
    /// wrap a peripheral, nothing is configured until [Self::begin] or [Self::begin_slave]
    pub fn new(peripheral: P) -> Self {
        Self {
            peripheral,
            tx: RingBuffer::new(),
            rx: RingBuffer::new(),
            target: 0,
            transmission_open: false,
            clock: STANDARD_MODE,
            #[cfg(feature = "slave")]
            on_receive: None,
            #[cfg(feature = "slave")]
            on_request: None,
        }
    }

    /// start operating as bus master at standard clock
    pub fn begin(&mut self) {
        self.clock = STANDARD_MODE;
        self.peripheral.configure_master(self.clock);
        self.peripheral.enable();
    }
    /// start operating as slave at the given address
    pub fn begin_slave(&mut self, address: u8, general_call: bool) {
        debug!("slave listening on {:#04x}", address);
        self.peripheral.configure_slave(address, general_call);
        self.peripheral.enable();
    }
    /// reconfigure the bus clock (Hz), it is kept to restart the bus after a timeout
    pub fn set_clock(&mut self, clock: u32) {
        self.clock = clock;
        self.peripheral.disable();
        self.peripheral.configure_master(clock);
        self.peripheral.enable();
    }
    pub fn end(&mut self) {
        self.peripheral.disable();
    }

    /// number of received bytes not read yet
    pub fn available(&self) -> usize {self.rx.available()}
    /// pop the next received byte
    pub fn read(&mut self) -> Option<u8> {self.rx.read()}
    /// next received byte, left in the buffer
    pub fn peek(&self) -> Option<u8> {self.rx.peek()}

    /**
        queue a byte for sending

        return the number of bytes accepted: 0 if no transmission is open or the buffer is full
    */
    pub fn write(&mut self, byte: u8) -> usize {
        if !self.transmission_open || self.tx.is_full()
            {return 0}
        self.tx.store(byte);
        1
    }
    /// queue as many bytes as possible, return how many were accepted
    pub fn write_all(&mut self, data: &[u8]) -> usize {
        for (i, &byte) in data.iter().enumerate() {
            if self.write(byte) == 0
                {return i}
        }
        data.len()
    }

    /// whether [Self::write] currently accepts data
    pub fn is_transmission_open(&self) -> bool {self.transmission_open}
    /// bus clock currently configured (Hz)
    pub fn clock(&self) -> u32 {self.clock}
    /// address of the device targeted by the current write transaction
    pub fn target(&self) -> u8 {self.target}

    pub fn peripheral(&self) -> &P {&self.peripheral}
    pub fn peripheral_mut(&mut self) -> &mut P {&mut self.peripheral}
    /// give back the peripheral
    pub fn release(self) -> P {self.peripheral}
}
