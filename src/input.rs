use std::io::{self, BufRead, Write};

pub const PROMPT: &str = "Please specify the file to convert: ";

/// Something that can ask the user a question and hand back one line.
pub trait Prompt {
    fn ask(&mut self, question: &str) -> io::Result<String>;
}

pub struct StdioPrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> StdioPrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        StdioPrompt { reader, writer }
    }
}

impl StdioPrompt<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        StdioPrompt::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt for StdioPrompt<R, W> {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.writer, "{question}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no input given at prompt",
            ));
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

/// Picks the path to convert. The prompt is only used when no argument was
/// given, and nothing here touches the filesystem.
pub fn resolve_input<P: Prompt>(arg: Option<String>, prompt: &mut P) -> io::Result<String> {
    match arg {
        Some(path) => Ok(path),
        None => prompt.ask(PROMPT),
    }
}
