use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use sidelens_core::Msg;

use crate::app::AppMsg;

const HELP: &str = "\
Panel commands:
  text <words>    set the text to analyze (empty clears it)
  image <path>    select an image file (no path clears the selection)
  url <address>   set the reference URL
  model <name>    pick the model identifier
  go              submit the current input
  cancel          abandon the in-flight request
  help            show this list
  quit            leave the panel";

enum Parsed {
    Msg(Msg),
    Help,
    Quit,
    Empty,
    Unknown,
}

/// Reads panel commands from stdin and forwards them as messages.
/// EOF closes the panel.
pub fn spawn_reader(msg_tx: mpsc::Sender<AppMsg>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match parse_line(&line) {
                Parsed::Msg(msg) => {
                    if msg_tx.send(AppMsg::Core(msg)).is_err() {
                        return;
                    }
                }
                Parsed::Quit => break,
                Parsed::Help => println!("{HELP}"),
                Parsed::Empty => {}
                Parsed::Unknown => println!("Unknown command (try `help`)."),
            }
        }
        let _ = msg_tx.send(AppMsg::Quit);
    });
}

fn parse_line(line: &str) -> Parsed {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Parsed::Empty;
    }
    let (command, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (trimmed, ""),
    };

    match command {
        "text" => Parsed::Msg(Msg::TextChanged(rest.to_string())),
        "image" if rest.is_empty() => Parsed::Msg(Msg::ImageCleared),
        "image" => Parsed::Msg(Msg::ImageSelected(rest.to_string())),
        "url" => Parsed::Msg(Msg::UrlChanged(rest.to_string())),
        "model" if !rest.is_empty() => Parsed::Msg(Msg::ModelSelected(rest.to_string())),
        "go" | "analyze" => Parsed::Msg(Msg::AnalyzeClicked),
        "cancel" => Parsed::Msg(Msg::CancelRequested),
        "help" | "?" => Parsed::Help,
        "quit" | "exit" => Parsed::Quit,
        _ => Parsed::Unknown,
    }
}
