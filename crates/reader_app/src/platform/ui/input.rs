use reader_core::{EpisodeNumber, Msg};

/// One line of user input, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Reader(Msg),
    Open(String),
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Input {
    let line = line.trim();
    let (command, argument) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match (command.to_ascii_lowercase().as_str(), argument) {
        ("" | "n" | "next", "") => Input::Reader(Msg::NextPage),
        ("p" | "prev" | "previous", "") => Input::Reader(Msg::PreviousPage),
        ("m" | "mode", "") => Input::Reader(Msg::ToggleReadingMode),
        ("e" | "episode", number) if !number.is_empty() => {
            Input::Reader(Msg::SelectEpisode(EpisodeNumber::new(number)))
        }
        ("o" | "open", location) if !location.is_empty() => Input::Open(location.to_string()),
        ("q" | "quit" | "exit", "") => Input::Quit,
        _ => Input::Help,
    }
}
