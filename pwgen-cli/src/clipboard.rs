use arboard::Clipboard;

pub fn copy(text: &str) -> Result<(), arboard::Error> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;

    // X11 and Wayland only serve the selection while the owner is alive
    #[cfg(all(unix, not(target_os = "macos")))]
    log::warn!("clipboard contents may be cleared when pwgen exits");

    Ok(())
}
