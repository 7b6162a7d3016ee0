//! Where player input comes from.
//!
//! A terminal gets a rustyline editor, so Ctrl+C and Ctrl+D end the session
//! with the interruption notice. Piped input is read as raw lines.

use std::io::BufRead;

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// What reading one line produced.
#[derive(Debug, PartialEq, Eq)]
pub enum Line {
    /// A line of text, possibly with its trailing newline.
    Text(String),
    /// End of input or an interrupt.
    Closed,
}

/// A source of player input lines.
pub trait LineSource {
    /// Read one line. `prompt` is shown only when [`shows_prompt`] is true.
    ///
    /// [`shows_prompt`]: LineSource::shows_prompt
    fn read_line(&mut self, prompt: &str) -> Result<Line, String>;

    /// Whether the source displays the prompt itself.
    fn shows_prompt(&self) -> bool {
        false
    }
}

/// Lines from any [`BufRead`]. Bytes that are not UTF-8 are replaced
/// rather than ending the session.
pub struct ScriptInput<R> {
    reader: R,
}

impl<R: BufRead> ScriptInput<R> {
    /// Wrap a reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ScriptInput<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<Line, String> {
        let mut buf = Vec::new();
        match self.reader.read_until(b'\n', &mut buf) {
            Ok(0) => Ok(Line::Closed),
            Ok(_) => Ok(Line::Text(String::from_utf8_lossy(&buf).into_owned())),
            Err(e) => Err(format!("cannot read input: {e}")),
        }
    }
}

/// Interactive terminal input with line editing and history.
pub struct TerminalInput {
    editor: DefaultEditor,
}

impl TerminalInput {
    /// Open the terminal editor.
    pub fn new() -> Result<Self, String> {
        let editor = DefaultEditor::new().map_err(|e| format!("cannot open terminal: {e}"))?;
        Ok(Self { editor })
    }
}

impl LineSource for TerminalInput {
    fn read_line(&mut self, prompt: &str) -> Result<Line, String> {
        // rustyline redraws a single-line prompt; print leading lines ourselves
        let prompt = match prompt.rsplit_once('\n') {
            Some((lead, last)) => {
                println!("{lead}");
                last
            }
            None => prompt,
        };

        let line = classify(self.editor.readline(prompt))?;
        if let Line::Text(text) = &line {
            if !text.trim().is_empty() {
                let _ = self.editor.add_history_entry(text.as_str());
            }
        }
        Ok(line)
    }

    fn shows_prompt(&self) -> bool {
        true
    }
}

fn classify(result: Result<String, ReadlineError>) -> Result<Line, String> {
    match result {
        Ok(text) => Ok(Line::Text(text)),
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(Line::Closed),
        Err(e) => Err(format!("cannot read input: {e}")),
    }
}
