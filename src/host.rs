use crossbeam::channel::{self, Receiver, Sender, TryRecvError};
use log::{trace, warn};

/// Sends events to a control from any thread.
#[derive(Debug)]
pub struct EventSender<E>(Sender<E>);

impl<E> Clone for EventSender<E> {
    fn clone(&self) -> Self {
        EventSender(self.0.clone())
    }
}

impl<E> EventSender<E> {
    /// Queues an event. Events from one sender are delivered in the order they were sent.
    ///
    /// Returns false if the event was dropped because its [`EventQueue`] no longer exists.
    pub fn send(&self, event: E) -> bool {
        match self.0.send(event) {
            Ok(()) => true,
            Err(_) => {
                warn!("[queue] event queue is gone; dropping event");
                false
            }
        }
    }
}

/// Serializes events for a control onto the thread that owns it.
///
/// Controls are single-threaded state machines. Hosts that receive input on other threads send it
/// through an [`EventSender`], and the owning thread drains the queue with `poll`.
#[derive(Debug)]
pub struct EventQueue<E> {
    sender: Sender<E>,
    recv: Receiver<E>,
}

impl<E> EventQueue<E> {
    pub fn new() -> EventQueue<E> {
        let (sender, recv) = channel::unbounded();
        EventQueue { sender, recv }
    }

    pub fn sender(&self) -> EventSender<E> {
        EventSender(self.sender.clone())
    }

    /// Receives all queued events in arrival order and hands them to `handler`.
    ///
    /// Returns the number of events handled.
    pub fn poll<F: FnMut(E)>(&self, mut handler: F) -> usize {
        let mut count = 0;
        loop {
            match self.recv.try_recv() {
                Ok(event) => {
                    handler(event);
                    count += 1;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        if count > 0 {
            trace!("[queue] handled {} event(s)", count);
        }
        count
    }
}

impl<E> Default for EventQueue<E> {
    fn default() -> Self {
        EventQueue::new()
    }
}
