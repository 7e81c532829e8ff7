use log::*;

use crate::{
    peripheral::{WirePeripheral, Direction},
    wire::TwoWire,
    };
use super::ErrorCode;


impl<P: WirePeripheral, const N: usize> TwoWire<P, N> {
    /// open a write transaction to `address`, data is then queued with [Self::write]
    pub fn begin_transmission(&mut self, address: u8) {
        self.target = address;
        self.tx.clear();
        self.transmission_open = true;
    }

    /// send queued data and release the bus
    pub fn end_transmission(&mut self) -> ErrorCode {
        self.end_transmission_with(true)
    }
    /**
        send queued data to the target device

        if `stop` is false, the bus is kept for a repeated start (typically a [Self::request_from] reading a register pointed by the data sent). A stop is emitted anyway on error.
    */
    pub fn end_transmission_with(&mut self, stop: bool) -> ErrorCode {
        let mut code = ErrorCode::Success;
        // the transmission is consumed whatever happens
        self.transmission_open = false;

        if !self.peripheral.start_transaction(self.target, Direction::Write) {
            debug!("address {:#04x} not acknowledged", self.target);
            code = ErrorCode::AddressNack;
        }
        let mut owner = self.peripheral.has_bus_ownership();

        if code == ErrorCode::Success {
            while self.tx.available() != 0 {
                owner = self.peripheral.has_bus_ownership();
                if !owner
                    {break}
                let Some(byte) = self.tx.read()
                    else {break};
                if !self.peripheral.send_byte(byte) {
                    debug!("data not acknowledged by {:#04x}, dropping {} bytes", self.target, self.tx.available());
                    code = ErrorCode::DataNack;
                    self.tx.clear();
                    break
                }
            }
        }

        // stop if we still have control of the bus, or hit an error
        if stop && owner || code != ErrorCode::Success {
            self.peripheral.issue_bus_stop();
        }
        if self.peripheral.has_timed_out() {
            self.recover();
            code = ErrorCode::Timeout;
        }
        code
    }

    /// read `quantity` bytes from `address` and release the bus
    pub fn request_from(&mut self, address: u8, quantity: usize) -> usize {
        self.request_from_with(address, quantity, true)
    }
    /**
        read up to `quantity` bytes from `address` into the receive buffer, available for [Self::read]

        return the number of valid bytes received. It is 0 if the device did not answer or the bus timed out, and less than requested if the bus was lost during transfer (in which case the last byte received is not counted).

        bytes beyond the receive buffer capacity are dropped.
    */
    pub fn request_from_with(&mut self, address: u8, quantity: usize, stop: bool) -> usize {
        if quantity == 0
            {return 0}

        let mut received = 0;
        self.rx.clear();

        let started = self.peripheral.start_transaction(address, Direction::Read);
        let mut owner = self.peripheral.has_bus_ownership();
        if started {
            // first byte is already there once addressed
            self.rx.store(self.peripheral.receive_byte());
            received = 1;
            while received < quantity {
                if self.peripheral.has_timed_out()
                    {break}
                owner = self.peripheral.has_bus_ownership();
                if !owner
                    {break}
                self.peripheral.signal_continue();
                self.peripheral.proceed_read();
                self.rx.store(self.peripheral.receive_byte());
                received += 1;
            }
            self.peripheral.signal_stop();

            // last byte was clocked while losing the bus, it is garbage
            if !owner || self.peripheral.has_timed_out() {
                debug!("bus lost while reading {:#04x} after {} bytes", address, received);
                received -= 1;
            }
        }
        else {
            debug!("address {:#04x} not acknowledged", address);
        }

        // stop if we still have control of the bus, or hit a timeout
        if stop && owner || self.peripheral.has_timed_out() {
            self.peripheral.issue_bus_stop();
        }
        if self.peripheral.has_timed_out() {
            self.recover();
            return 0;
        }
        received
    }

    /// restart the bus after a timeout
    fn recover(&mut self) {
        warn!("bus timeout, restarting at {} Hz", self.clock);
        self.set_clock(self.clock);
        self.transmission_open = false;
    }
}
