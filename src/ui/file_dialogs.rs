use fltk::dialog::{FileDialogType, NativeFileChooser};

/// Native "save as" dialog, seeded with the suggested filename and the last
/// directory the user exported to. Returns the chosen path, or `None` when
/// the user cancels.
pub fn native_save_dialog(start_dir: Option<&str>, preset_name: &str) -> Option<String> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseSaveFile);
    nfc.set_filter("*.pptx");
    if let Some(dir) = start_dir {
        let _ = nfc.set_directory(&dir);
    }
    nfc.set_preset_file(preset_name);
    nfc.show(); // returns (), blocks until close
    let filename = nfc.filename();
    let s = filename.to_string_lossy();
    if s.is_empty() { None } else { Some(s.to_string()) }
}
