/// Backslash-escape spaces and parentheses so the path survives a shell
/// command line unquoted.
#[must_use]
pub fn escape_path(path: &str) -> String {
    path.replace(' ', "\\ ")
        .replace('(', "\\(")
        .replace(')', "\\)")
}

/// Final stdout text for `path`, escaped when requested.
#[must_use]
pub fn render(path: &str, escape: bool) -> String {
    if escape {
        escape_path(path)
    } else {
        path.to_string()
    }
}
