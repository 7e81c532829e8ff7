/*!
    fixed capacity byte FIFO holding the bytes in transit between the application and the bus

    a [RingBuffer] is only accessed through `&mut`. When the bus interrupt and the foreground both use a [crate::TwoWire], the whole wire is placed in a critical section mutex (see [crate::slave]) so every buffer access is exclusive.
*/


/**
    byte ring buffer of capacity `N`

    cursors are counting modulo `2*N`, so that a full buffer (`N` bytes stored) can be distinguished from an empty one without sacrificing a slot.
*/
pub struct RingBuffer<const N: usize> {
    data: [u8; N],
    /// next slot to write
    head: usize,
    /// next slot to read
    tail: usize,
}

impl<const N: usize> RingBuffer<N> {
    const NONZERO: () = assert!(N > 0, "ring buffer capacity must not be zero");

    pub const fn new() -> Self {
        let () = Self::NONZERO;
        Self {
            data: [0; N],
            head: 0,
            tail: 0,
        }
    }
    pub const fn capacity(&self) -> usize {N}

    /// append a byte, return false and drop the byte if the buffer is full
    pub fn store(&mut self, byte: u8) -> bool {
        if self.is_full()
            {return false}
        self.data[self.head % N] = byte;
        self.head = (self.head + 1) % (2*N);
        true
    }
    /// pop the oldest byte
    pub fn read(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.tail = (self.tail + 1) % (2*N);
        Some(byte)
    }
    /// oldest byte, without consuming it
    pub fn peek(&self) -> Option<u8> {
        if self.is_empty()
            {return None}
        Some(self.data[self.tail % N])
    }
    /// number of bytes stored
    pub fn available(&self) -> usize {
        (self.head + 2*N - self.tail) % (2*N)
    }
    pub fn is_full(&self) -> bool {self.available() == N}
    pub fn is_empty(&self) -> bool {self.head == self.tail}
    /// forget all stored bytes, in constant time
    pub fn clear(&mut self) {
        self.tail = self.head;
    }
}
impl<const N: usize> Default for RingBuffer<N> {
    fn default() -> Self {Self::new()}
}
