//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for the copy shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Copy shortcut display
/// Ctrl+Y is accepted on every platform, Cmd+Y additionally on macOS
#[cfg(target_os = "macos")]
pub const COPY_SHORTCUT: &str = "Cmd+Y";

#[cfg(not(target_os = "macos"))]
pub const COPY_SHORTCUT: &str = "Ctrl+Y";

/// Submit shortcut display
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Status bar hint for submitting
pub const SUBMIT_HINT: &str = "^S:submit";

/// Status bar hint for copying the last submission
#[cfg(target_os = "macos")]
pub const COPY_HINT: &str = "⌘Y:copy";

#[cfg(not(target_os = "macos"))]
pub const COPY_HINT: &str = "^Y:copy";
