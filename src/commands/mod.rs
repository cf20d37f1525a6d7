use crate::schedule::Mode;

/// A classified inbound message body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetMode(Mode),
    RequestToday,
    Unrecognized(String),
}

/// Classify an inbound push body.
///
/// Matching is trim + case-insensitive exact match. Anything else, empty
/// text included, is `Unrecognized` — never an error, so a stray push can't
/// stop the poll loop.
pub fn interpret(body: &str) -> Command {
    match body.trim().to_lowercase().as_str() {
        "4" => Command::SetMode(Mode::FourDay),
        "6" => Command::SetMode(Mode::SixDay),
        "workout" => Command::RequestToday,
        _ => Command::Unrecognized(body.to_string()),
    }
}
