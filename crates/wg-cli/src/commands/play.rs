//! The interactive session loop.

use std::io::{self, IsTerminal, Write};

use wg_core::{Locale, World};
use wg_play::{GameSession, Narrator, SessionConfig};

use crate::input::{Line, LineSource, ScriptInput, TerminalInput};

/// Play `world` on the terminal.
pub fn run(
    world: World,
    name: Option<&str>,
    lang: Locale,
    history_limit: Option<usize>,
) -> Result<(), String> {
    let mut config = SessionConfig::new().with_locale(lang);
    if let Some(name) = name {
        config = config.with_player_name(name);
    }
    if let Some(limit) = history_limit {
        config = config.with_history_limit(limit);
    }

    let stdout = io::stdout();
    if io::stdin().is_terminal() {
        let mut input = TerminalInput::new()?;
        run_session(world, config, &mut input, &mut stdout.lock())
    } else {
        let mut input = ScriptInput::new(io::stdin().lock());
        run_session(world, config, &mut input, &mut stdout.lock())
    }
}

fn write_out(output: &mut impl Write, text: &str) -> Result<(), String> {
    output
        .write_all(text.as_bytes())
        .and_then(|_| output.flush())
        .map_err(|e| format!("cannot write output: {e}"))
}

fn read_line(
    input: &mut impl LineSource,
    output: &mut impl Write,
    prompt: &str,
) -> Result<Line, String> {
    if !input.shows_prompt() {
        write_out(output, prompt)?;
    }
    input.read_line(prompt)
}

/// Read, dispatch and print until `quit`, end of input or an interrupt.
pub fn run_session(
    world: World,
    mut config: SessionConfig,
    input: &mut impl LineSource,
    output: &mut impl Write,
) -> Result<(), String> {
    let narrator = Narrator::new(config.locale);

    if config.player_name.is_none() {
        match read_line(input, output, narrator.name_prompt())? {
            Line::Text(name) => config.player_name = Some(name),
            Line::Closed => {
                tracing::info!("input closed before a name was given");
                return write_out(output, narrator.interrupted());
            }
        }
    }

    let mut session = GameSession::new(world, config).map_err(|e| e.to_string())?;
    write_out(output, &session.welcome().map_err(|e| e.to_string())?)?;

    while !session.is_finished() {
        let line = match read_line(input, output, narrator.prompt())? {
            Line::Text(text) => text,
            Line::Closed => {
                tracing::info!("input closed, ending session");
                write_out(output, narrator.interrupted())?;
                break;
            }
        };

        let outcome = session.dispatch(&line).map_err(|e| e.to_string())?;
        if let Some(text) = outcome.text() {
            write_out(output, text)?;
        }
    }

    Ok(())
}
