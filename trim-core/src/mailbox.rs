//! Single-slot command mailbox between the receive and apply tasks.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;
use trim_proto::Command;

/// Hands complete [`Command`] snapshots from the producer to the consumer.
///
/// Backed by an Embassy [`Signal`], which gives "latest value wins"
/// semantics: publishing while a command is still pending replaces it, and
/// each published command is taken at most once. The consumer never sees a
/// half-written command.
///
/// # Example
///
/// ```
/// use embassy_sync::blocking_mutex::raw::NoopRawMutex;
/// use trim_core::CommandMailbox;
/// use trim_proto::Command;
///
/// let mailbox: CommandMailbox<NoopRawMutex> = CommandMailbox::new();
/// mailbox.publish(Command::parse(b"Trim:1\r\n").unwrap());
/// assert!(mailbox.try_take().is_some());
/// assert!(mailbox.try_take().is_none());
/// ```
pub struct CommandMailbox<M: RawMutex> {
    signal: Signal<M, Command>,
}

impl<M: RawMutex> CommandMailbox<M> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            signal: Signal::new(),
        }
    }

    /// Publish a command, replacing any pending one.
    ///
    /// Returns `true` if a command was pending just before publishing. This
    /// is a hint only: the check and the store are separate, so a consumer
    /// taking the pending command in between still yields `true`.
    pub fn publish(&self, cmd: Command) -> bool {
        let replaced = self.signal.signaled();
        self.signal.signal(cmd);
        replaced
    }

    /// Take the pending command, if any, without waiting.
    pub fn try_take(&self) -> Option<Command> {
        self.signal.try_take()
    }

    /// Wait for the next command.
    pub async fn take(&self) -> Command {
        self.signal.wait().await
    }

    /// Check if a command is waiting to be taken.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.signal.signaled()
    }
}

impl<M: RawMutex> Default for CommandMailbox<M> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::future::Future;
    use core::pin::pin;
    use core::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    // Polls once; the mailbox must already hold a command.
    fn block_on<F: Future>(f: F) -> F::Output {
        fn noop_raw_waker() -> RawWaker {
            fn noop(_: *const ()) {}
            fn clone(_: *const ()) -> RawWaker {
                noop_raw_waker()
            }
            static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, noop, noop, noop);
            RawWaker::new(core::ptr::null(), &VTABLE)
        }

        let waker = unsafe { Waker::from_raw(noop_raw_waker()) };
        let mut cx = Context::from_waker(&waker);
        match pin!(f).poll(&mut cx) {
            Poll::Ready(result) => result,
            Poll::Pending => panic!("take() returned Pending with a command pending"),
        }
    }

    fn cmd(line: &[u8]) -> Command {
        Command::parse(line).unwrap()
    }

    #[test]
    fn test_take_once() {
        let mailbox: CommandMailbox<NoopRawMutex> = CommandMailbox::new();
        assert!(!mailbox.publish(cmd(b"Trim:1\r\n")));
        assert!(mailbox.is_pending());
        assert_eq!(mailbox.try_take(), Some(cmd(b"Trim:1\r\n")));
        assert!(!mailbox.is_pending());
        assert_eq!(mailbox.try_take(), None);
    }

    #[test]
    fn test_latest_wins() {
        let mailbox: CommandMailbox<NoopRawMutex> = CommandMailbox::new();
        assert!(!mailbox.publish(cmd(b"Trim:1\r\n")));
        assert!(mailbox.publish(cmd(b"Trim:2\r\n")));
        assert_eq!(mailbox.try_take(), Some(cmd(b"Trim:2\r\n")));
        assert_eq!(mailbox.try_take(), None);
    }

    #[test]
    fn test_take_returns_pending_command() {
        let mailbox: CommandMailbox<NoopRawMutex> = CommandMailbox::new();
        mailbox.publish(cmd(b"Trim:1\r\n"));
        mailbox.publish(cmd(b"Trim:0x2\r\n"));
        assert_eq!(block_on(mailbox.take()), cmd(b"Trim:0x2\r\n"));
        assert!(!mailbox.is_pending());
    }

    #[test]
    fn test_empty_mailbox() {
        let mailbox: CommandMailbox<NoopRawMutex> = CommandMailbox::default();
        assert!(!mailbox.is_pending());
        assert_eq!(mailbox.try_take(), None);
    }
}
