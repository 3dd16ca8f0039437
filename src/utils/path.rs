use std::path::{Component, Path, PathBuf};
use uzers::os::unix::UserExt;

/// Expand a leading tilde in `path`.
///
/// `~` and `~/rest` use `$HOME`; `~name/rest` looks up that user's home
/// directory. Returns `None` when the home directory cannot be determined.
///
/// ```
/// use ag_n8n_skills::utils::path::expand_tilde;
///
/// let path = expand_tilde("/srv/project").unwrap();
/// assert_eq!(path, std::path::PathBuf::from("/srv/project"));
/// ```
pub fn expand_tilde<P: AsRef<Path>>(path: P) -> Option<PathBuf> {
    let path = path.as_ref();
    let path_str = path.to_str()?;

    let Some(after_tilde) = path_str.strip_prefix('~') else {
        return Some(path.to_path_buf());
    };

    if after_tilde.is_empty() || after_tilde.starts_with('/') {
        let home = std::env::var("HOME").ok()?;
        return Some(PathBuf::from(home).join(after_tilde.trim_start_matches('/')));
    }

    let (username, rest) = match after_tilde.split_once('/') {
        Some((name, rest)) => (name, rest),
        None => (after_tilde, ""),
    };

    let user = uzers::get_user_by_name(username)?;
    Some(user.home_dir().join(rest))
}

/// Make `path` absolute against `base` and fold `.`/`..` components
/// lexically. The path does not need to exist.
pub fn absolutize(path: &Path, base: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
