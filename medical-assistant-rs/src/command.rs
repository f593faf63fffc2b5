//! Terminal commands understood by `medibot`

/// One line of terminal input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Quit,
    Help,
    History,
    Clear,
    /// `/lang <text>`: show the detection for `text`
    Lang(&'a str),
    /// Anything else is a question for the assistant
    Ask(&'a str),
}

impl<'a> Command<'a> {
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        match line {
            "/quit" => Command::Quit,
            "/help" => Command::Help,
            "/history" => Command::History,
            "/clear" => Command::Clear,
            "/lang" => Command::Lang(""),
            _ => match line.strip_prefix("/lang ") {
                Some(text) => Command::Lang(text.trim()),
                None => Command::Ask(line),
            },
        }
    }
}
