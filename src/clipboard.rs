//! Clipboard output for generated commands
//!
//! On Linux the clipboard contents are served by the process that set them,
//! so a CLI that exits right after copying takes them along. There the copy
//! blocks until another application (or a clipboard manager) takes
//! ownership of the clipboard.

/// Whether `copy` blocks until the clipboard changes hands
pub const BLOCKS_UNTIL_REPLACED: bool = cfg!(target_os = "linux");

/// Place text on the system clipboard
pub fn copy(text: &str) -> Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;

    #[cfg(target_os = "linux")]
    {
        use arboard::SetExtLinux;
        clipboard.set().wait().text(text)
    }

    #[cfg(not(target_os = "linux"))]
    {
        clipboard.set_text(text)
    }
}
