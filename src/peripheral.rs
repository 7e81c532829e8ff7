/*!
    capabilities expected from the two-wire hardware peripheral

    the transaction engine never touches registers itself, it only sequences the primitives of [WirePeripheral]. Chip support crates implement this trait over their peripheral (clock generation, electrical signaling and timeout detection are their business).
*/

use bilge::prelude::*;


/// direction of a transaction, as encoded in the lowest bit of the address byte
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// master sends data to the addressed device
    Write = 0,
    /// master receives data from the addressed device
    Read = 1,
}

/**
    snapshot of the slave side signals, taken once per serviced event

    peripherals exposing these as a status register can build it from a single register read by overriding [WirePeripheral::event]
*/
#[bitsize(6)]
#[derive(Copy, Clone, FromBits, DebugBits, PartialEq)]
pub struct SlaveEvent {
    /// peripheral is configured as a slave
    pub slave: bool,
    /// this device has been addressed
    pub address_match: bool,
    /// a stop condition ended the session
    pub stop: bool,
    /// a repeated start has been seen on the bus
    pub restart: bool,
    /// the master wants to read from this device
    pub master_read: bool,
    /// a data byte needs to be sent or has been received
    pub data_ready: bool,
}


/**
    primitive operations of a two-wire bus peripheral

    master primitives are blocking: they return once the peripheral completed the requested bus action (or failed doing so). Slave primitives are called from the bus interrupt and must not block.
*/
pub trait WirePeripheral {
    /// setup the peripheral as bus master running at the given clock (Hz)
    fn configure_master(&mut self, clock: u32);
    /// setup the peripheral as slave answering to `address`, and to the general call address 0 if `general_call` is set
    fn configure_slave(&mut self, address: u8, general_call: bool);
    fn enable(&mut self);
    fn disable(&mut self);

    /// emit a start (or repeated start) and the address byte, return false if no device acknowledged it
    fn start_transaction(&mut self, address: u8, direction: Direction) -> bool;
    /// send one byte as master, return false if the receiver did not acknowledge it
    fn send_byte(&mut self, byte: u8) -> bool;
    /// last byte clocked in
    fn receive_byte(&mut self) -> u8;
    /// prepare an ACK for the next received byte
    fn signal_continue(&mut self);
    /// prepare a NACK for the next received byte
    fn signal_stop(&mut self);
    /// master command: acknowledge the current byte and clock in the next one
    fn proceed_read(&mut self);
    /// emit a stop condition, releasing the bus
    fn issue_bus_stop(&mut self);
    /// whether this controller still holds the bus
    fn has_bus_ownership(&self) -> bool;
    /// whether the peripheral gave up waiting on the bus since last configuration
    fn has_timed_out(&self) -> bool;

    fn is_slave_mode(&self) -> bool;
    fn is_address_matched(&self) -> bool;
    fn is_stop_signaled(&self) -> bool;
    fn is_restart_signaled(&self) -> bool;
    fn is_peer_requesting_read(&self) -> bool;
    fn is_byte_ready(&self) -> bool;
    /// slave command: release the clock and let the transfer continue with the prepared ACK/NACK
    fn acknowledge_event(&mut self);
    /// hand one byte to the master as slave, return false if the master did not acknowledge it
    fn respond_byte(&mut self, byte: u8) -> bool;

    /// capture all slave signals at once
    fn event(&self) -> SlaveEvent {
        SlaveEvent::new(
            self.is_slave_mode(),
            self.is_address_matched(),
            self.is_stop_signaled(),
            self.is_restart_signaled(),
            self.is_peer_requesting_read(),
            self.is_byte_ready(),
            )
    }
}

impl<P: WirePeripheral + ?Sized> WirePeripheral for &mut P {
    fn configure_master(&mut self, clock: u32) {(**self).configure_master(clock)}
    fn configure_slave(&mut self, address: u8, general_call: bool) {(**self).configure_slave(address, general_call)}
    fn enable(&mut self) {(**self).enable()}
    fn disable(&mut self) {(**self).disable()}
    fn start_transaction(&mut self, address: u8, direction: Direction) -> bool {(**self).start_transaction(address, direction)}
    fn send_byte(&mut self, byte: u8) -> bool {(**self).send_byte(byte)}
    fn receive_byte(&mut self) -> u8 {(**self).receive_byte()}
    fn signal_continue(&mut self) {(**self).signal_continue()}
    fn signal_stop(&mut self) {(**self).signal_stop()}
    fn proceed_read(&mut self) {(**self).proceed_read()}
    fn issue_bus_stop(&mut self) {(**self).issue_bus_stop()}
    fn has_bus_ownership(&self) -> bool {(**self).has_bus_ownership()}
    fn has_timed_out(&self) -> bool {(**self).has_timed_out()}
    fn is_slave_mode(&self) -> bool {(**self).is_slave_mode()}
    fn is_address_matched(&self) -> bool {(**self).is_address_matched()}
    fn is_stop_signaled(&self) -> bool {(**self).is_stop_signaled()}
    fn is_restart_signaled(&self) -> bool {(**self).is_restart_signaled()}
    fn is_peer_requesting_read(&self) -> bool {(**self).is_peer_requesting_read()}
    fn is_byte_ready(&self) -> bool {(**self).is_byte_ready()}
    fn acknowledge_event(&mut self) {(**self).acknowledge_event()}
    fn respond_byte(&mut self, byte: u8) -> bool {(**self).respond_byte(byte)}
    fn event(&self) -> SlaveEvent {(**self).event()}
}
