//! Shell detection utilities

use crate::model::ShellType;
use std::path::Path;

/// Detect the shell dialect of a startup file from its name
pub fn detect_from_file(path: &Path) -> Option<ShellType> {
    // File names first, startup files rarely have extensions
    if let Some(filename) = path.file_name().and_then(|n| n.to_str()) {
        if ["zshrc", "zprofile", "zshenv", "zlogin"]
            .iter()
            .any(|p| filename.contains(p))
        {
            return Some(ShellType::Zsh);
        }
        if ["bashrc", "bash_profile", "bash_aliases"]
            .iter()
            .any(|p| filename.contains(p))
        {
            return Some(ShellType::Bash);
        }
    }

    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .as_deref()
    {
        Some("zsh") => Some(ShellType::Zsh),
        Some("sh") | Some("bash") => Some(ShellType::Bash),
        _ => None,
    }
}

/// Pick the output format name for a file.
///
/// Priority: explicit name > detection from the file name > `None` (registry default).
pub fn resolve_format(specified: Option<&str>, file_path: Option<&Path>) -> Option<String> {
    if let Some(name) = specified {
        return Some(name.to_string());
    }
    file_path
        .and_then(detect_from_file)
        .map(|shell| shell.name().to_string())
}
