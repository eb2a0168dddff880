// Copyright (C) 2020-2024 Andy Kurnia.

pub const COMMANDS: &[&str] = &[
    "board", "exit", "help", "newrack", "place", "play", "rack", "score", "source", "submit",
];

#[derive(
    rustyline_derive::Helper,
    rustyline_derive::Hinter,
    rustyline_derive::Highlighter,
    rustyline_derive::Validator,
)]
pub struct ShellHelper {
    #[rustyline(Hinter)]
    hinter: rustyline::hint::HistoryHinter,
}

// only the command word is completed.
impl rustyline::completion::Completer for ShellHelper {
    type Candidate = rustyline::completion::Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<rustyline::completion::Pair>)> {
        let prefix = &line[..pos];
        if prefix.contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }
        Ok((
            0,
            COMMANDS
                .iter()
                .filter(|cmd| cmd.starts_with(prefix))
                .map(|&cmd| rustyline::completion::Pair {
                    display: cmd.to_owned(),
                    replacement: format!("{} ", cmd),
                })
                .collect(),
        ))
    }
}

pub fn new_rl_editor()
-> rustyline::Result<rustyline::Editor<ShellHelper, rustyline::history::DefaultHistory>> {
    let mut rl = rustyline::Editor::new()?;
    rl.set_helper(Some(ShellHelper {
        hinter: rustyline::hint::HistoryHinter {},
    }));
    Ok(rl)
}
