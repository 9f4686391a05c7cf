/// Dialogs the pane (or the host) can ask the application to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    /// Confirmation before muting every participant's audio
    MuteEveryone,
    /// Confirmation before stopping every participant's video
    StopEveryoneVideo,
    /// Moderation settings (audio/video moderation switches)
    ModerationSettings,
}

/// Actions sent from the pane and dialogs to the application loop
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// Dismiss the participants pane
    ClosePane,
    /// Toggle the participants pane (keyboard shortcut, toolbar)
    TogglePane,
    /// Ask the dialog subsystem to show a dialog
    OpenDialog(DialogKind),
    /// Mute the audio of every participant except the local one
    MuteEveryone,
    /// Stop the video of every participant except the local one
    StopEveryoneVideo,
    /// When enabled, attendees cannot unmute themselves
    SetAudioModeration(bool),
    /// When enabled, attendees cannot start their video
    SetVideoModeration(bool),
    /// Let a knocking participant into the meeting
    AdmitLobby(u32),
    /// Turn away a knocking participant
    RejectLobby(u32),
    /// Promote a visitor who asked to join the meeting
    AdmitVisitor(u32),
    /// Create another breakout room
    AddBreakoutRoom,
}
