//! scripted peripheral recording every primitive the engine calls
#![allow(dead_code)]

use std::collections::VecDeque;
use twowire::{Direction, SlaveEvent, WirePeripheral};


pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    ConfigureMaster(u32),
    ConfigureSlave(u8, bool),
    Enable,
    Disable,
    Start(u8, Direction),
    Send(u8),
    Receive,
    Continue,
    Nack,
    Proceed,
    Stop,
    AcknowledgeEvent,
    Respond(u8),
}

/// peer behavior and bus conditions simulated by the mock
pub struct MockBus {
    pub calls: Vec<Call>,
    /// peer acknowledges its address
    pub address_ack: bool,
    /// index of the first data byte sent by master that the peer refuses
    pub nack_at: Option<usize>,
    /// bytes the peer sends, 0xff once exhausted
    pub incoming: VecDeque<u8>,
    /// bus ownership is lost once that many bytes have been transfered
    pub ownership_budget: Option<usize>,
    /// timeout is reported once that many bytes have been transfered, until the master is reconfigured
    pub timeout_after: Option<usize>,
    pub transferred: usize,
    pub sent: Vec<u8>,

    /// slave signals currently raised
    pub event: SlaveEvent,
    /// master acknowledges bytes sent by the slave
    pub respond_ack: bool,
    pub responded: Vec<u8>,
}

impl MockBus {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            address_ack: true,
            nack_at: None,
            incoming: VecDeque::new(),
            ownership_budget: None,
            timeout_after: None,
            transferred: 0,
            sent: Vec::new(),
            event: idle(),
            respond_ack: true,
            responded: Vec::new(),
        }
    }
    pub fn with_incoming(data: &[u8]) -> Self {
        let mut bus = Self::new();
        bus.incoming.extend(data);
        bus
    }
    pub fn count(&self, call: &Call) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }
    pub fn starts(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, Call::Start(..))).count()
    }
}

impl WirePeripheral for MockBus {
    fn configure_master(&mut self, clock: u32) {
        self.calls.push(Call::ConfigureMaster(clock));
        self.timeout_after = None;
    }
    fn configure_slave(&mut self, address: u8, general_call: bool) {
        self.calls.push(Call::ConfigureSlave(address, general_call));
    }
    fn enable(&mut self) {self.calls.push(Call::Enable)}
    fn disable(&mut self) {self.calls.push(Call::Disable)}

    fn start_transaction(&mut self, address: u8, direction: Direction) -> bool {
        self.calls.push(Call::Start(address, direction));
        self.address_ack
    }
    fn send_byte(&mut self, byte: u8) -> bool {
        self.calls.push(Call::Send(byte));
        let index = self.sent.len();
        self.sent.push(byte);
        self.transferred += 1;
        self.nack_at != Some(index)
    }
    fn receive_byte(&mut self) -> u8 {
        self.calls.push(Call::Receive);
        self.transferred += 1;
        self.incoming.pop_front().unwrap_or(0xff)
    }
    fn signal_continue(&mut self) {self.calls.push(Call::Continue)}
    fn signal_stop(&mut self) {self.calls.push(Call::Nack)}
    fn proceed_read(&mut self) {self.calls.push(Call::Proceed)}
    fn issue_bus_stop(&mut self) {self.calls.push(Call::Stop)}
    fn has_bus_ownership(&self) -> bool {
        self.ownership_budget.map_or(true, |budget| self.transferred < budget)
    }
    fn has_timed_out(&self) -> bool {
        self.timeout_after.is_some_and(|after| self.transferred >= after)
    }

    fn is_slave_mode(&self) -> bool {self.event.slave()}
    fn is_address_matched(&self) -> bool {self.event.address_match()}
    fn is_stop_signaled(&self) -> bool {self.event.stop()}
    fn is_restart_signaled(&self) -> bool {self.event.restart()}
    fn is_peer_requesting_read(&self) -> bool {self.event.master_read()}
    fn is_byte_ready(&self) -> bool {self.event.data_ready()}
    fn acknowledge_event(&mut self) {self.calls.push(Call::AcknowledgeEvent)}
    fn respond_byte(&mut self, byte: u8) -> bool {
        self.calls.push(Call::Respond(byte));
        self.responded.push(byte);
        self.respond_ack
    }
}


pub fn idle() -> SlaveEvent {
    SlaveEvent::new(true, false, false, false, false, false)
}
/// addressed by a master, reading or writing
pub fn address_match(read: bool) -> SlaveEvent {
    SlaveEvent::new(true, true, false, false, read, false)
}
/// byte slot to service in the current direction
pub fn data_ready(read: bool) -> SlaveEvent {
    SlaveEvent::new(true, false, false, false, read, true)
}
pub fn stop() -> SlaveEvent {
    SlaveEvent::new(true, false, true, false, false, false)
}
/// repeated start addressing this device again
pub fn restart(read: bool) -> SlaveEvent {
    SlaveEvent::new(true, true, false, true, read, false)
}
