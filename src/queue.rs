//! Bounded event queue for `no_std` environments.
//!
//! Built on `critical-section` and `heapless::Deque`, so producers may live in
//! interrupt handlers or other threads. The mixer is the single consumer: it
//! drains the queue in FIFO order, which keeps the values reported by one
//! slider in the order they were produced.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

/// Returned by `try_send` when the queue is full; holds the rejected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError<T>(pub T);

/// Returned by `try_receive` when the queue is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// A bounded queue holding at most `SIZE` values.
pub struct Queue<T, const SIZE: usize> {
    inner: Mutex<RefCell<Deque<T, SIZE>>>,
}

impl<T, const SIZE: usize> Queue<T, SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Producer handle. Any number may coexist.
    pub const fn sender(&self) -> QueueSender<'_, T, SIZE> {
        QueueSender { queue: self }
    }

    /// Consumer handle. Hand it to exactly one consumer.
    pub const fn receiver(&self) -> QueueReceiver<'_, T, SIZE> {
        QueueReceiver { queue: self }
    }

    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(value).map_err(TrySendError)
        })
    }

    pub fn try_receive(&self) -> Result<T, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }

    /// Number of queued values
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, const SIZE: usize> Default for Queue<T, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub struct QueueSender<'a, T, const SIZE: usize> {
    queue: &'a Queue<T, SIZE>,
}

impl<T, const SIZE: usize> QueueSender<'_, T, SIZE> {
    /// Returns `Err(TrySendError(value))` if the queue is full.
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        self.queue.try_send(value)
    }
}

#[derive(Clone, Copy)]
pub struct QueueReceiver<'a, T, const SIZE: usize> {
    queue: &'a Queue<T, SIZE>,
}

impl<T, const SIZE: usize> QueueReceiver<'_, T, SIZE> {
    /// Returns `Err(TryReceiveError)` if the queue is empty.
    pub fn try_receive(&self) -> Result<T, TryReceiveError> {
        self.queue.try_receive()
    }

    /// Iterate over the values queued when the call was made
    ///
    /// Values sent while draining are left for the next pass, so a busy
    /// producer cannot keep the consumer looping.
    pub fn drain(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.queue.len()).map_while(|_| self.queue.try_receive().ok())
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
