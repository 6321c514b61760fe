use growmon_common::Reading;

/// Messages for the GrowMon application.
#[derive(Debug, Clone)]
pub enum Message {
    /// The poll timer fired; begin a cycle.
    PollTick,

    /// A device request finished (success or rendered error text).
    PollCompleted(Result<Reading, String>),

    /// User pressed the Start button.
    StartPoller,

    /// User pressed the Stop button.
    StopPoller,

    /// User edited the device address input.
    AddressChanged(String),
}
