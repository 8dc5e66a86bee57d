use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// Cloneable handle to the one writer all demo text goes through.
///
/// The menu, the model, the report and the observers each hold a clone, so
/// their lines land in a single stream in the order they were produced.
#[derive(Clone)]
pub struct Console {
    inner: Rc<RefCell<Box<dyn Write>>>,
}

impl Console {
    pub fn new<W: Write + 'static>(writer: W) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Box::new(writer))),
        }
    }

    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Write for Console {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.borrow_mut().flush()
    }
}

/// In-memory sink whose clones share one buffer; pair with [`Console::new`]
/// to capture a transcript.
#[derive(Clone, Default)]
pub struct SharedBuffer {
    bytes: Rc<RefCell<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.borrow()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_one_stream() {
        let buffer = SharedBuffer::new();
        let mut first = Console::new(buffer.clone());
        let mut second = first.clone();

        writeln!(first, "one").unwrap();
        writeln!(second, "two").unwrap();
        write!(first, "three").unwrap();

        assert_eq!(buffer.contents(), "one\ntwo\nthree");
    }
}
