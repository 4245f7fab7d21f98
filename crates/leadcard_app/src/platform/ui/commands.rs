use leadcard_core::Msg;

/// One line of user input, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Vec<Msg>),
    Redraw,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "" => Command::Redraw,
        "n" | "next" => one(Msg::NextClicked),
        "p" | "prev" | "previous" => one(Msg::PreviousClicked),
        "first" | "home" => one(Msg::FirstClicked),
        "last" | "end" => one(Msg::LastClicked),
        "j" | "jump" | "g" | "goto" => jump(rest),
        "f" | "filter" | "industry" => {
            one(Msg::FilterSelected((!rest.is_empty()).then(|| rest.to_string())))
        }
        "]" => one(Msg::NextIndustry),
        "[" => one(Msg::PreviousIndustry),
        "d" | "dismiss" => one(Msg::AdvisoryDismissed),
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        _ if rest.is_empty() && word.chars().all(|c| c.is_ascii_digit()) => jump(word),
        _ => Command::Unknown(line.to_string()),
    }
}

fn one(msg: Msg) -> Command {
    Command::Dispatch(vec![msg])
}

/// Mirrors typing into the position box and pressing Go.
fn jump(input: &str) -> Command {
    Command::Dispatch(vec![
        Msg::JumpInputChanged(input.to_string()),
        Msg::JumpSubmitted,
    ])
}
