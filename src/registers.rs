/*!
    typed registers of devices sitting on the bus

    most two-wire devices expose their state as a bank of registers selected by a one-byte pointer written at the start of each transaction. A [Register] pairs that pointer with the type of the value found there, so reading or writing it through [crate::TwoWire] is type checked and endianness handled.
*/

use core::marker::PhantomData;
use packbytes::{FromBytes, ByteArray};


/**
    a register is a typed pointer in a device's register bank.

    it only holds the register address, hence can be created, copied or destroyed at no cost. Values are transfered big-endian, which is the convention of most devices; use a newtype with a custom [packbytes] implementation otherwise.
*/
#[derive(PartialEq, Eq, Hash, Debug)]
pub struct Register<T> {
    addr: u8,
    ty: PhantomData<T>,
}
impl<T> Register<T> {
    /// create a register from its pointer value
    pub const fn new(address: u8) -> Self {
        Self{addr: address, ty: PhantomData}
    }
    /// pointer value to write before accessing the register
    pub const fn address(&self) -> u8 {self.addr}
}
impl<T: FromBytes> Register<T> {
    /// number of bytes transfered when accessing the register
    pub const fn size(&self) -> usize {T::Bytes::SIZE}
}
impl<T> Clone for Register<T> {
    fn clone(&self) -> Self {
        Self::new(self.address())
    }
}
impl<T> Copy for Register<T> {}
