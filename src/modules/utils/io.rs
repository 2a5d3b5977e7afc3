use std::fmt::Display;
use std::io::{self, BufRead, IsTerminal, Write};

/// Line-oriented terminal used by every menu.
///
/// Generic over its input and output so whole sessions can be scripted.
/// End of input surfaces as an `UnexpectedEof` error from the read helpers.
pub struct Console<R, W> {
    input: R,
    output: W,
    hide_secrets: bool,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process stdio.
    /// Passwords are read without echo only when stdin is a terminal;
    /// piped input is read line by line like every other answer.
    pub fn stdio() -> Self {
        let interactive = io::stdin().is_terminal();
        Console::new(io::stdin().lock(), io::stdout()).with_hidden_secrets(interactive)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            hide_secrets: false,
        }
    }

    pub fn with_hidden_secrets(mut self, hide_secrets: bool) -> Self {
        self.hide_secrets = hide_secrets;
        self
    }

    /// Helper function to read a trimmed line
    pub fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }

    /// Print `message` on its own line and read the answer
    pub fn prompt(&mut self, message: &str) -> io::Result<String> {
        self.say(message)?;
        self.read_line()
    }

    /// Like `prompt`, without echoing the answer when attached to a terminal
    pub fn prompt_secret(&mut self, message: &str) -> io::Result<String> {
        self.say(message)?;
        if self.hide_secrets {
            self.output.flush()?;
            return rpassword::read_password().map(|secret| secret.trim().to_string());
        }
        self.read_line()
    }

    /// Ask for confirmation; only `y` (any case) counts as yes
    pub fn confirm(&mut self, message: &str) -> io::Result<bool> {
        let answer = self.prompt(message)?;
        Ok(answer.eq_ignore_ascii_case("y"))
    }

    pub fn say(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// True when an I/O error means the user closed the input stream
pub fn is_input_closed(error: &io::Error) -> bool {
    error.kind() == io::ErrorKind::UnexpectedEof
}
