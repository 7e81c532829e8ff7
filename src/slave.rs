/*!
    slave side of the bus: react to a master addressing this device.

    the bus interrupt handler must call [TwoWire::on_service] on every peripheral event. Data written by a master is accumulated in the receive buffer and handed to the [TwoWire::on_receive] callback when the session ends, data requested by a master is taken from the transmit buffer, which the [TwoWire::on_request] callback is expected to fill.

    nothing here blocks, and no error is ever reported: a full receive buffer makes the device NACK further bytes, an empty transmit buffer makes it send [NO_DATA].

    the interrupt and the foreground both need `&mut TwoWire`, so the wire usually lives in a critical section mutex that each side locks for the duration of an access:

    ```ignore
    static WIRE: Mutex<RefCell<Option<TwoWire<Peripheral>>>> = Mutex::new(RefCell::new(None));

    #[interrupt]
    fn I2C0() {
        critical_section::with(|cs| {
            if let Some(wire) = WIRE.borrow_ref_mut(cs).as_mut()
                {wire.on_service()}
        });
    }
    ```
*/

use log::*;

use crate::{
    peripheral::WirePeripheral,
    wire::{TwoWire, ReceiveCallback, RequestCallback},
    };


/// byte sent to a master reading beyond the data provided
pub const NO_DATA: u8 = 0xff;


impl<P: WirePeripheral, const N: usize> TwoWire<P, N> {
    /// register the function called after a master finished writing to this device, `None` to unregister
    pub fn on_receive(&mut self, callback: Option<ReceiveCallback<P, N>>) {
        self.on_receive = callback;
    }
    /// register the function called when a master starts reading this device, it should [write](Self::write) the answer
    pub fn on_request(&mut self, callback: Option<RequestCallback<P, N>>) {
        self.on_request = callback;
    }

    /// service one bus event, to be called from the bus interrupt
    pub fn on_service(&mut self) {
        let event = self.peripheral.event();
        if !event.slave()
            {return}
        trace!("slave event {:?}", event);

        // end of a write session: stop, or restart by a master that is not going to read
        if event.stop() || event.address_match() && event.restart() && !event.master_read() {
            self.peripheral.signal_continue();
            self.peripheral.acknowledge_event();

            if let Some(callback) = self.on_receive {
                let received = self.available();
                callback(self, received);
            }
            self.rx.clear();
        }
        else if event.address_match() {
            self.peripheral.signal_continue();
            self.peripheral.acknowledge_event();

            // master is requesting data
            if event.master_read() {
                self.tx.clear();
                self.transmission_open = true;
                if let Some(callback) = self.on_request {
                    callback(self);
                }
            }
        }
        else if event.data_ready() {
            if event.master_read() {
                let byte = self.tx.read().unwrap_or(NO_DATA);
                self.transmission_open = self.peripheral.respond_byte(byte);
            }
            else {
                if self.rx.is_full() {
                    debug!("receive buffer full, refusing data");
                    self.peripheral.signal_stop();
                }
                else {
                    self.rx.store(self.peripheral.receive_byte());
                    self.peripheral.signal_continue();
                }
                self.peripheral.acknowledge_event();
            }
        }
    }
}
