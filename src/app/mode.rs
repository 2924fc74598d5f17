#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// A round is open and accepts guesses.
    Playing,
    /// The round is over and the response is shown.
    Revealed,
    /// Nothing to play for the selected date.
    NoPrompt,
    Quit,
}
