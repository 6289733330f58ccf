/// Console session: the output and input streams plus the host platform.
///
/// Everything a command-line tool needs to talk to its user goes through a
/// `Console`: writing lines, prompting for answers, and coloring text. Tests
/// swap the streams for in-memory buffers with `set_stdout` and `set_stdin`.
pub mod errors;
pub mod stream;

use std::time::Duration;

use tracing::debug;

pub use errors::ConsoleError;
pub use stream::{Mode, Stream};

use crate::style::{self, ColorError, Platform, SystemPlatform};

/// Written before re-prompting when an answer is not one of the options.
pub const INVALID_OPTION_MSG: &str = "This is not a valid option. Please try again.";

/// Written by [`Console::wait`] when called without a duration.
pub const WAIT_MSG: &str = "Press any key to continue...";

/// Moves to column 0 and clears to end of line.
const REPLACE_LINE: &str = "\r\x1b[K";

/// A command-line session bound to one output and one input stream.
#[derive(Debug)]
pub struct Console<P: Platform = SystemPlatform> {
    stdout: Stream,
    stdin: Stream,
    platform: P,
    /// Length of one countdown step in [`Console::wait`].
    tick: Duration,
}

impl Console {
    /// A console on the process's standard streams and the real host.
    #[must_use]
    pub fn new() -> Self {
        Self::with_platform(SystemPlatform)
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Platform> Console<P> {
    /// A console on the process's standard streams with a custom host.
    #[must_use]
    pub fn with_platform(platform: P) -> Self {
        Self {
            stdout: Stream::stdout(),
            stdin: Stream::stdin(),
            platform,
            tick: Duration::from_secs(1),
        }
    }

    #[must_use]
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// The stream `write` and prompts go to.
    #[must_use]
    pub fn stdout(&self) -> &Stream {
        &self.stdout
    }

    /// The stream `read` takes answers from.
    #[must_use]
    pub fn stdin(&self) -> &Stream {
        &self.stdin
    }

    /// Redirect output to `stream`.
    ///
    /// Returns `false` and keeps the current stream if `stream` is closed or
    /// was not opened for writing.
    pub fn set_stdout(&mut self, stream: &Stream) -> bool {
        if !stream.is_writable() {
            debug!(kind = stream.kind(), mode = ?stream.mode(), "rejected output stream");
            return false;
        }
        debug!(kind = stream.kind(), "output stream replaced");
        self.stdout = stream.clone();
        true
    }

    /// Take input from `stream`.
    ///
    /// Returns `false` and keeps the current stream if `stream` is closed or
    /// was not opened for reading.
    pub fn set_stdin(&mut self, stream: &Stream) -> bool {
        if !stream.is_readable() {
            debug!(kind = stream.kind(), mode = ?stream.mode(), "rejected input stream");
            return false;
        }
        debug!(kind = stream.kind(), "input stream replaced");
        self.stdin = stream.clone();
        true
    }

    /// Write `text` followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Io` if the output stream fails.
    pub fn write(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.emit(&format!("{text}\n"))
    }

    /// Write each line in order.
    ///
    /// # Errors
    ///
    /// Stops at the first failed write.
    pub fn write_lines<I, S>(&mut self, lines: I) -> Result<(), ConsoleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.write(line.as_ref())?;
        }
        Ok(())
    }

    /// Overwrite the current terminal line with `text`.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Io` if the output stream fails.
    pub fn write_replace(&mut self, text: &str, end_line: bool) -> Result<(), ConsoleError> {
        let nl = if end_line { "\n" } else { "" };
        self.emit(&format!("{REPLACE_LINE}{text}{nl}"))
    }

    /// Prompt for one line of input.
    ///
    /// The prompt is followed by ` [a, b]` when `allowed` is non-empty, by
    /// ` [default]` when a default is given, and finally by `: `. An empty
    /// answer becomes `default`. With a non-empty `allowed`, the user is asked
    /// again until the answer is one of them.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::EndOfInput` when input ends and no acceptable
    /// answer can be formed, or `ConsoleError::Io` on stream failure.
    pub fn read(
        &mut self,
        prompt: &str,
        allowed: &[&str],
        default: Option<&str>,
    ) -> Result<String, ConsoleError> {
        let rendered = format_prompt(prompt, allowed, default);
        loop {
            self.emit(&rendered)?;

            let mut line = String::new();
            let eof = self.stdin.read_line(&mut line)? == 0;

            let mut answer = line.trim();
            if answer.is_empty() {
                if let Some(default) = default {
                    answer = default;
                }
            }

            if allowed.is_empty() || allowed.contains(&answer) {
                return Ok(answer.to_owned());
            }
            if eof {
                return Err(ConsoleError::EndOfInput {
                    prompt: prompt.to_owned(),
                });
            }

            debug!(answer, ?allowed, "answer not among options");
            self.write(INVALID_OPTION_MSG)?;
        }
    }

    /// Pause before continuing.
    ///
    /// With `seconds > 0`, sleeps that long, rewriting `"<n> seconds..."` in
    /// place each second when `countdown` is set. With zero seconds, asks the
    /// user to press enter and waits for one line.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Io` if a stream fails.
    pub fn wait(&mut self, seconds: u64, countdown: bool) -> Result<(), ConsoleError> {
        if seconds == 0 {
            self.write(WAIT_MSG)?;
            self.stdin.read_line(&mut String::new())?;
            return Ok(());
        }

        if !countdown {
            let steps = u32::try_from(seconds).unwrap_or(u32::MAX);
            std::thread::sleep(self.tick.saturating_mul(steps));
            return Ok(());
        }

        for remaining in (1..=seconds).rev() {
            self.write_replace(&format!("{remaining} seconds..."), false)?;
            std::thread::sleep(self.tick);
        }
        self.write_replace("", true)
    }

    /// Whether this console's host renders ANSI sequences.
    #[must_use]
    pub fn supports_ansi(&self) -> bool {
        style::supports_ansi(&self.platform)
    }

    /// Color `text` for this console's host.
    ///
    /// # Errors
    ///
    /// Returns `ColorError` for an unrecognized color name.
    pub fn color(
        &self,
        text: &str,
        foreground: Option<&str>,
        background: Option<&str>,
    ) -> Result<String, ColorError> {
        style::paint(text, foreground, background, self.supports_ansi())
    }

    fn emit(&mut self, s: &str) -> Result<(), ConsoleError> {
        self.stdout.write_all(s.as_bytes())?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Render a prompt with its option and default annotations.
#[must_use]
pub fn format_prompt(prompt: &str, allowed: &[&str], default: Option<&str>) -> String {
    let mut out = String::from(prompt);
    if !allowed.is_empty() {
        out.push_str(" [");
        out.push_str(&allowed.join(", "));
        out.push(']');
    }
    if let Some(default) = default {
        out.push_str(" [");
        out.push_str(default);
        out.push(']');
    }
    out.push_str(": ");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::ANSICON_VAR;
    use crate::style::platform::testing::FakePlatform;

    fn console_with_input(input: &str) -> (Console<FakePlatform>, Stream, Stream) {
        let mut console = Console::with_platform(FakePlatform::unix());
        let output = Stream::memory(Mode::ReadWrite);
        let stdin = Stream::memory(Mode::ReadWrite);
        stdin.write_all(input.as_bytes()).unwrap();
        stdin.rewind().unwrap();
        assert!(console.set_stdout(&output));
        assert!(console.set_stdin(&stdin));
        (console, output, stdin)
    }

    #[test]
    fn test_setting_streams() {
        let mut console = Console::new();

        let stream = Stream::memory(Mode::ReadWrite);
        assert!(console.set_stdout(&stream));
        assert!(console.stdout().same_as(&stream));
        stream.close();

        let stream = Stream::memory(Mode::ReadWrite);
        assert!(console.set_stdin(&stream));
        assert!(console.stdin().same_as(&stream));
        stream.close();
    }

    #[test]
    fn test_rejects_stream_without_capability() {
        let mut console = Console::new();
        let original = Stream::memory(Mode::Write);
        assert!(console.set_stdout(&original));

        assert!(!console.set_stdout(&Stream::memory(Mode::Read)));
        assert!(!console.set_stdout(&Stream::stdin()));
        assert!(console.stdout().same_as(&original));

        let input = Stream::memory(Mode::Read);
        assert!(console.set_stdin(&input));
        assert!(!console.set_stdin(&Stream::memory(Mode::Write)));
        assert!(!console.set_stdin(&Stream::stdout()));
        assert!(console.stdin().same_as(&input));
    }

    #[test]
    fn test_rejects_closed_stream() {
        let mut console = Console::new();
        let closed = Stream::memory(Mode::ReadWrite);
        closed.close();
        assert!(!console.set_stdout(&closed));
        assert!(!console.set_stdin(&closed));
        assert_eq!(console.stdout().kind(), "stdout");
        assert_eq!(console.stdin().kind(), "stdin");
    }

    #[test]
    fn test_rejects_read_only_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "y\n").unwrap();

        let mut console = Console::new();
        let file = Stream::open(&path, Mode::Read).unwrap();
        assert!(!console.set_stdout(&file));
        assert!(console.set_stdin(&file));
    }

    #[test]
    fn test_writing_to_and_reading_from_output_stream() {
        let mut console = Console::new();
        let stream = Stream::memory(Mode::ReadWrite);
        console.set_stdout(&stream);

        let msg = "first test message";
        console.write(msg).unwrap();
        stream.rewind().unwrap();
        let mut line = String::new();
        stream.read_line(&mut line).unwrap();
        assert_eq!(line.trim(), msg);
        stream.rewind().unwrap();

        let msg = "second test message";
        console.write(msg).unwrap();
        stream.rewind().unwrap();
        let mut line = String::new();
        stream.read_line(&mut line).unwrap();
        assert_eq!(line.trim(), msg);
        stream.close();
    }

    #[test]
    fn test_write_to_closed_stream_fails() {
        let mut console = Console::new();
        let stream = Stream::memory(Mode::ReadWrite);
        console.set_stdout(&stream);
        stream.close();
        assert!(matches!(console.write("lost"), Err(ConsoleError::Io(_))));
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let file = Stream::open(&path, Mode::Write).unwrap();

        let mut console = Console::new();
        assert!(console.set_stdout(&file));
        console.write_lines(["one", "two"]).unwrap();
        file.close();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn test_writing_to_and_reading_from_input_stream() {
        let (mut console, output, input) = console_with_input("y\nred\n");
        assert!(!output.same_as(&input));

        let read = console.read("Choose", &["y", "n"], None).unwrap();
        assert_eq!(read, "y");

        let read = console.read("Choose", &["red", "blue"], None).unwrap();
        assert_eq!(read, "red");

        assert_eq!(
            output.buffer_contents().unwrap(),
            "Choose [y, n]: Choose [red, blue]: "
        );
    }

    #[test]
    fn test_read_without_options_returns_line() {
        let (mut console, output, _input) = console_with_input("  Alice  \r\n");
        assert_eq!(console.read("Name", &[], None).unwrap(), "Alice");
        assert_eq!(output.buffer_contents().unwrap(), "Name: ");
    }

    #[test]
    fn test_read_reprompts_until_valid() {
        let (mut console, output, _input) = console_with_input("maybe\nYES\nn\n");
        assert_eq!(console.read("Continue", &["y", "n"], None).unwrap(), "n");
        let prompt = "Continue [y, n]: ";
        let expected = format!("{prompt}{INVALID_OPTION_MSG}\n").repeat(2) + prompt;
        assert_eq!(output.buffer_contents().unwrap(), expected);
    }

    #[test]
    fn test_read_uses_default_on_empty_line() {
        let (mut console, output, _input) = console_with_input("\nbob\n");
        assert_eq!(console.read("Name", &[], Some("guest")).unwrap(), "guest");
        assert_eq!(console.read("Name", &[], Some("guest")).unwrap(), "bob");
        assert_eq!(
            output.buffer_contents().unwrap(),
            "Name [guest]: Name [guest]: "
        );
    }

    #[test]
    fn test_read_default_with_options() {
        let (mut console, output, _input) = console_with_input("\n");
        assert_eq!(console.read("Choose", &["y", "n"], Some("n")).unwrap(), "n");
        assert_eq!(output.buffer_contents().unwrap(), "Choose [y, n] [n]: ");
    }

    #[test]
    fn test_read_at_end_of_input() {
        let (mut console, _output, _input) = console_with_input("");
        assert_eq!(console.read("Name", &[], None).unwrap(), "");
        assert_eq!(console.read("Name", &[], Some("guest")).unwrap(), "guest");

        let err = console.read("Choose", &["y", "n"], None).unwrap_err();
        assert!(matches!(err, ConsoleError::EndOfInput { ref prompt } if prompt == "Choose"));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_read_invalid_then_end_of_input() {
        let (mut console, output, _input) = console_with_input("maybe\n");
        assert!(console.read("Choose", &["y", "n"], None).is_err());
        assert_eq!(
            output.buffer_contents().unwrap(),
            format!("Choose [y, n]: {INVALID_OPTION_MSG}\nChoose [y, n]: ")
        );
    }

    #[test]
    fn test_write_replace() {
        let (mut console, output, _input) = console_with_input("");
        console.write_replace("50%", false).unwrap();
        console.write_replace("done", true).unwrap();
        assert_eq!(
            output.buffer_contents().unwrap(),
            "\r\x1b[K50%\r\x1b[Kdone\n"
        );
    }

    #[test]
    fn test_wait_without_duration_reads_a_line() {
        let (mut console, output, input) = console_with_input("\nnext\n");
        console.wait(0, false).unwrap();
        assert_eq!(output.buffer_contents().unwrap(), format!("{WAIT_MSG}\n"));

        let mut rest = String::new();
        input.read_line(&mut rest).unwrap();
        assert_eq!(rest, "next\n");
    }

    #[test]
    fn test_wait_countdown() {
        let (mut console, output, _input) = console_with_input("");
        console.tick = Duration::ZERO;
        console.wait(3, true).unwrap();
        assert_eq!(
            output.buffer_contents().unwrap(),
            "\r\x1b[K3 seconds...\r\x1b[K2 seconds...\r\x1b[K1 seconds...\r\x1b[K\n"
        );
    }

    #[test]
    fn test_wait_without_countdown_is_silent() {
        let (mut console, output, _input) = console_with_input("");
        console.tick = Duration::ZERO;
        console.wait(2, false).unwrap();
        assert_eq!(output.buffer_contents().unwrap(), "");
    }

    #[test]
    fn test_color_output() {
        let console = Console::with_platform(FakePlatform::unix());
        assert_eq!(
            console.color("text", Some("red"), Some("green")).unwrap(),
            "\x1b[0;31m\x1b[42mtext\x1b[0m"
        );
        assert_eq!(
            console.color("text", Some("red"), None).unwrap(),
            "\x1b[0;31mtext\x1b[0m"
        );
        assert_eq!(console.color("text", None, None).unwrap(), "text");
    }

    #[test]
    fn test_invalid_colors() {
        let console = Console::with_platform(FakePlatform::unix());
        for (fg, bg, which) in [
            (Some("puce"), Some("lemon"), "foreground"),
            (Some("red"), Some("lemon"), "background"),
            (Some("puce"), None, "foreground"),
        ] {
            let err = console.color("text", fg, bg).unwrap_err();
            assert!(
                err.to_string()
                    .starts_with(&format!("Invalid CLI {which} color")),
                "{err}"
            );
            assert_eq!(ConsoleError::from(err).exit_code(), 2);
        }
    }

    #[test]
    fn test_color_without_ansi_support() {
        let console = Console::with_platform(FakePlatform::windows());
        assert!(!console.supports_ansi());
        assert_eq!(
            console.color("text", Some("red"), Some("green")).unwrap(),
            "text"
        );
    }

    #[test]
    fn test_ansi_support_on_windows() {
        let console = Console::with_platform(FakePlatform::windows().with_env(ANSICON_VAR, "TRUE"));
        assert!(console.supports_ansi());
        assert_eq!(
            console.color("text", Some("red"), None).unwrap(),
            "\x1b[0;31mtext\x1b[0m"
        );
    }

    #[test]
    fn test_format_prompt() {
        assert_eq!(format_prompt("Go", &[], None), "Go: ");
        assert_eq!(format_prompt("Go", &["a"], None), "Go [a]: ");
        assert_eq!(format_prompt("Go", &["a", "b", "c"], Some("b")), "Go [a, b, c] [b]: ");
    }
}
