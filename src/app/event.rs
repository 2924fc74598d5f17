/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    Guess(String),
    PasteClipboard,
    SelectDate(String),
    Today,
    ListDates,
    Quit,
    Help,
    InvalidCommand(String),
    None,
}
