use core::fmt::{self, Write};

/// A single-byte output primitive, e.g. a UART transmit register or a
/// semihosting call.
///
/// Implementations must be callable from any context that logs, including
/// interrupt handlers, so `put_byte` should not block indefinitely.
pub trait CharSink {
    fn put_byte(&self, byte: u8);

    #[inline]
    fn put_bytes(&self, bytes: &[u8]) {
        for &b in bytes {
            self.put_byte(b);
        }
    }
}

impl<S: CharSink + ?Sized> CharSink for &S {
    #[inline]
    fn put_byte(&self, byte: u8) {
        (**self).put_byte(byte);
    }
}

/// [`fmt::Write`] adapter over a [`CharSink`].
pub struct SinkWriter<'a, S: ?Sized>(pub &'a S);

impl<S: CharSink + ?Sized> Write for SinkWriter<'_, S> {
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.put_bytes(s.as_bytes());
        Ok(())
    }

    #[inline]
    fn write_char(&mut self, c: char) -> fmt::Result {
        // UTF-8 encode without allocation.
        let mut buf = [0u8; 4];
        let s = c.encode_utf8(&mut buf);
        self.write_str(s)
    }
}

/// Formats `args` straight into `sink`.
#[cfg(feature = "enabled")]
#[doc(hidden)]
#[inline]
pub fn write_to<S: CharSink + ?Sized>(sink: &S, args: fmt::Arguments) {
    // Ignore errors; this is best-effort debug output.
    fmt::write(&mut SinkWriter(sink), args).ok();
}

#[cfg(not(feature = "enabled"))]
#[doc(hidden)]
#[inline(always)]
#[allow(clippy::inline_always)]
pub fn write_to<S: CharSink + ?Sized>(_: &S, _: fmt::Arguments) {
    // no-op when feature disabled
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Capture(RefCell<Vec<u8>>);

    impl CharSink for Capture {
        fn put_byte(&self, byte: u8) {
            self.0.borrow_mut().push(byte);
        }
    }

    #[test]
    fn writer_encodes_utf8() {
        let sink = Capture::default();
        let mut w = SinkWriter(&sink);
        w.write_str("ok ").unwrap();
        w.write_char('ß').unwrap();
        assert_eq!(sink.0.borrow().as_slice(), "ok ß".as_bytes());
    }

    #[cfg(feature = "enabled")]
    #[test]
    fn write_to_formats_arguments() {
        let sink = Capture::default();
        write_to(&sink, format_args!("{:#06x}|{}", 0x2A, "end"));
        assert_eq!(sink.0.borrow().as_slice(), b"0x002a|end");
    }
}
