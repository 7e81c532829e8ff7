use packbytes::{FromBytes, ToBytes, ByteArray};
use embedded_hal::i2c::{self, Operation, ErrorKind, NoAcknowledgeSource};

use crate::{
    peripheral::WirePeripheral,
    registers::Register,
    wire::TwoWire,
    };
use super::Error;


impl<P: WirePeripheral, const N: usize> TwoWire<P, N> {
    /// write the given data to a device in one transaction
    pub fn write_bytes(&mut self, device: u8, data: &[u8]) -> Result<(), Error> {
        self.begin_transmission(device);
        if self.write_all(data) != data.len()
            {return Err(self.abort_transmission())}
        self.end_transmission().into_result()
    }
    /// read exactly `quantity` bytes from a device, `M` must be large enough to store them
    pub fn read_bytes<const M: usize>(&mut self, device: u8, quantity: usize) -> Result<heapless::Vec<u8, M>, Error> {
        if quantity > M.min(N)
            {return Err(Error::DataTooLong)}
        let received = self.request_from(device, quantity);
        if received < quantity
            {return Err(Error::Short {received, expected: quantity})}
        let mut data = heapless::Vec::new();
        for _ in 0 .. quantity {
            let byte = self.read().ok_or(Error::Short {received, expected: quantity})?;
            data.push(byte) .map_err(|_| Error::DataTooLong)?;
        }
        Ok(data)
    }

    /// set a register value of a device
    pub fn write_register<T: ToBytes>(&mut self, device: u8, register: Register<T>, value: T) -> Result<(), Error> {
        let value = value.to_be_bytes();
        let value: &[u8] = value.as_ref();
        self.begin_transmission(device);
        let queued = self.write(register.address()) + self.write_all(value);
        if queued != 1 + value.len()
            {return Err(self.abort_transmission())}
        self.end_transmission().into_result()
    }
    /// get a register value of a device: write the register pointer then read with a repeated start
    pub fn read_register<T: FromBytes>(&mut self, device: u8, register: Register<T>) -> Result<T, Error> {
        let mut buffer = T::Bytes::zeroed();
        let size = T::Bytes::SIZE;
        if size > N
            {return Err(Error::DataTooLong)}

        self.begin_transmission(device);
        self.write(register.address());
        self.end_transmission_with(false).into_result()?;

        let received = self.request_from(device, size);
        if received < size
            {return Err(Error::Short {received, expected: size})}
        let bytes: &mut [u8] = buffer.as_mut();
        for dst in bytes {
            *dst = self.read().ok_or(Error::Short {received, expected: size})?;
        }
        Ok(T::from_be_bytes(buffer))
    }

    /// drop a transmission whose payload did not fit, so later writes do not append to it
    fn abort_transmission(&mut self) -> Error {
        self.tx.clear();
        self.transmission_open = false;
        Error::DataTooLong
    }
}


impl i2c::Error for Error {
    fn kind(&self) -> ErrorKind {
        match self {
            Error::AddressNack => ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address),
            Error::DataNack => ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data),
            Error::DataTooLong => ErrorKind::Overrun,
            Error::Short {..} => ErrorKind::ArbitrationLoss,
            Error::Timeout | Error::Other => ErrorKind::Other,
        }
    }
}

impl<P: WirePeripheral, const N: usize> i2c::ErrorType for TwoWire<P, N> {
    type Error = Error;
}

/**
    adjacent operations of the same kind are merged into a single transfer, groups are separated by repeated starts and the bus is released after the last one.
*/
impl<P: WirePeripheral, const N: usize> i2c::I2c for TwoWire<P, N> {
    fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), Error> {
        let mut groups = operations
            .chunk_by_mut(|a, b| matches!(
                (a, b),
                (Operation::Read(_), Operation::Read(_))
                | (Operation::Write(_), Operation::Write(_))
                ))
            .peekable();

        // a previous group kept the bus for a repeated start
        let mut held = false;
        while let Some(group) = groups.next() {
            let stop = groups.peek().is_none();
            let writing = matches!(group.first(), Some(Operation::Write(_)));
            match writing {
                true => {
                    self.begin_transmission(address);
                    for operation in group.iter() {
                        if let Operation::Write(data) = operation {
                            if self.write_all(data) != data.len()
                                {return Err(self.abort_transmission())}
                        }
                    }
                    self.end_transmission_with(stop).into_result()?;
                    held = !stop;
                },
                false => {
                    let expected = group.iter()
                        .map(|operation| match operation {
                            Operation::Read(buffer) => buffer.len(),
                            Operation::Write(_) => 0,
                            })
                        .sum::<usize>();
                    if expected > N
                        {return Err(Error::DataTooLong)}
                    if expected == 0 {
                        // nothing to read, but the bus must still be released after the last group
                        if stop && held
                            {self.peripheral.issue_bus_stop()}
                        held = held && !stop;
                        continue
                    }
                    let received = self.request_from_with(address, expected, stop);
                    if received < expected
                        {return Err(Error::Short {received, expected})}
                    for operation in group.iter_mut() {
                        if let Operation::Read(buffer) = operation {
                            for dst in buffer.iter_mut() {
                                *dst = self.read().ok_or(Error::Short {received, expected})?;
                            }
                        }
                    }
                    held = !stop;
                },
            }
        }
        Ok(())
    }
}
