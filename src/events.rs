/// Events delivered to the main loop by spawned network tasks. Replies
/// arrive in completion order, which for overlapping sends is not
/// necessarily send order.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    ModelReady,
    BotReply(String),
    ResetOutcome(bool),
}
