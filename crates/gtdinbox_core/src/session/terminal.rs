//! Line-oriented terminal boundary used by the session.

/// Blocking line input plus line output and a screen clear.
///
/// Implementations decide how prompts and clearing look; the session only
/// relies on these contracts.
pub trait Terminal {
    /// Reads one line without its line terminator.
    ///
    /// Returns `None` at end of input.
    fn read_line(&mut self) -> Option<String>;

    fn write_line(&mut self, line: &str);

    /// Clears the visible screen.
    fn clear(&mut self);

    /// Shows `text` and reads the answer.
    fn prompt(&mut self, text: &str) -> Option<String> {
        self.write_line(text);
        self.read_line()
    }
}

impl<T: Terminal + ?Sized> Terminal for &mut T {
    fn read_line(&mut self) -> Option<String> {
        (**self).read_line()
    }

    fn write_line(&mut self, line: &str) {
        (**self).write_line(line);
    }

    fn clear(&mut self) {
        (**self).clear();
    }

    fn prompt(&mut self, text: &str) -> Option<String> {
        (**self).prompt(text)
    }
}
