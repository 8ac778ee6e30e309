//! IconLocation value object - a shortcut's icon reference
//!
//! The shell reports a shortcut's icon as a composite `"<path>,<index>"`.
//! Only the path is used; resources holding several icons are always read
//! as a single image.

use std::path::PathBuf;

/// A parsed icon-location string
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconLocation {
    /// Resource path, `None` when the shortcut carries no explicit icon
    pub path: Option<PathBuf>,
    /// Icon index within the resource (not used for rendering)
    pub index: i32,
}

impl IconLocation {
    /// Parse a composite `"<path>,<index>"` string.
    ///
    /// The index is split off the last comma only when it is numeric, so
    /// paths that contain commas survive. A missing index reads as 0.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();

        let (path, index) = match raw.rsplit_once(',') {
            Some((path, index)) => match index.trim().parse::<i32>() {
                Ok(index) => (path.trim(), index),
                Err(_) => (raw, 0),
            },
            None => (raw, 0),
        };

        let path = path.trim_matches('"');
        Self {
            path: (!path.is_empty()).then(|| PathBuf::from(path)),
            index,
        }
    }

    /// Format back into the composite form
    pub fn to_composite(&self) -> String {
        let path = self
            .path
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();
        format!("{},{}", path, self.index)
    }
}
