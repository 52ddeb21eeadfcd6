//! Game action definitions

/// All actions the player can trigger
///
/// Key mappings:
/// - Arrow keys = Move
/// - F3 = Debug overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,

    // Debug
    ToggleDebugOverlay,
}
