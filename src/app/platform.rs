//! OS integration that has no better home: system theme detection.

/// Best-effort check of the desktop's dark-mode preference. Falls back to
/// light when the platform gives no answer.
pub fn detect_system_dark_mode() -> bool {
    #[cfg(target_os = "windows")]
    {
        if let Some(dark) = windows_apps_use_dark_theme() {
            return dark;
        }
    }

    #[cfg(target_os = "linux")]
    {
        if linux_prefers_dark() {
            return true;
        }
    }

    #[cfg(target_os = "macos")]
    {
        if macos_interface_style_is_dark() {
            return true;
        }
    }

    false
}

#[cfg(target_os = "windows")]
fn windows_apps_use_dark_theme() -> Option<bool> {
    use winreg::RegKey;
    use winreg::enums::HKEY_CURRENT_USER;

    let personalize = RegKey::predef(HKEY_CURRENT_USER)
        .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        .ok()?;
    // AppsUseLightTheme: 0 = dark mode, 1 = light mode
    let value: u32 = personalize.get_value("AppsUseLightTheme").ok()?;
    Some(value == 0)
}

#[cfg(target_os = "linux")]
fn linux_prefers_dark() -> bool {
    use std::process::Command;

    // GNOME and most GTK desktops expose the preference through gsettings,
    // either via the gtk theme name or the newer color-scheme key.
    if let Ok(output) = Command::new("gsettings")
        .args(["get", "org.gnome.desktop.interface", "gtk-theme"])
        .output()
    {
        if String::from_utf8_lossy(&output.stdout)
            .to_lowercase()
            .contains("dark")
        {
            return true;
        }
    }

    if let Ok(output) = Command::new("gsettings")
        .args(["get", "org.gnome.desktop.interface", "color-scheme"])
        .output()
    {
        if String::from_utf8_lossy(&output.stdout).contains("prefer-dark") {
            return true;
        }
    }

    false
}

#[cfg(target_os = "macos")]
fn macos_interface_style_is_dark() -> bool {
    use std::process::Command;

    // AppleInterfaceStyle only exists when dark mode is on.
    match Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
    {
        Ok(output) if output.status.success() => String::from_utf8_lossy(&output.stdout)
            .to_lowercase()
            .contains("dark"),
        _ => false,
    }
}
