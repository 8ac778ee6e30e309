//! LnkLinkGateway - shortcut reading with the pure-Rust `lnk` parser
//!
//! Works on every platform, which keeps the registry usable (and testable)
//! away from Windows. The icon location is reported in the shell's
//! composite `"<path>,<index>"` form.

use std::path::{Path, PathBuf};

use crate::domain::errors::DomainError;
use crate::domain::repositories::{LinkMetadata, ShellLinkProvider};
use crate::domain::value_objects::IconLocation;

/// Link provider backed by the `lnk` crate
#[derive(Debug, Default)]
pub struct LnkLinkGateway;

impl LnkLinkGateway {
    /// Create a new gateway
    pub fn new() -> Self {
        Self
    }
}

impl ShellLinkProvider for LnkLinkGateway {
    fn read_link(&self, lnk_path: &Path) -> Result<LinkMetadata, DomainError> {
        let link = lnk::ShellLink::open(lnk_path).map_err(|e| DomainError::LinkUnreadable {
            path: lnk_path.to_path_buf(),
            reason: format!("{:?}", e),
        })?;

        let target_path = link
            .link_info()
            .as_ref()
            .and_then(|info| info.local_base_path().clone())
            .map(PathBuf::from)
            .or_else(|| {
                // Relative targets are stored relative to the shortcut itself
                link.relative_path().as_ref().map(|relative| {
                    lnk_path
                        .parent()
                        .map(|dir| dir.join(relative))
                        .unwrap_or_else(|| PathBuf::from(relative))
                })
            });

        let icon_location = IconLocation {
            path: link
                .icon_location()
                .as_ref()
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
            index: link.header().icon_index(),
        };

        Ok(LinkMetadata::new(target_path, icon_location.to_composite()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::ShortcutLinkResolver;
    use std::sync::Arc;
    use tempfile::TempDir;

    const HAS_ICON_LOCATION: u32 = 0x40;
    const IS_UNICODE: u32 = 0x80;

    /// Minimal shell link: header plus a UTF-16 icon location string
    fn shell_link_bytes(icon_location: &str, icon_index: i32) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&0x4Cu32.to_le_bytes());
        // CLSID 00021401-0000-0000-C000-000000000046
        bytes.extend_from_slice(&[
            0x01, 0x14, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x46,
        ]);
        bytes.extend_from_slice(&(HAS_ICON_LOCATION | IS_UNICODE).to_le_bytes());
        bytes.extend_from_slice(&0u32.to_le_bytes()); // file attributes
        bytes.extend_from_slice(&[0u8; 24]); // creation, access, write times
        bytes.extend_from_slice(&0u32.to_le_bytes()); // file size
        bytes.extend_from_slice(&icon_index.to_le_bytes());
        bytes.extend_from_slice(&1u32.to_le_bytes()); // SW_SHOWNORMAL
        bytes.extend_from_slice(&0u16.to_le_bytes()); // hotkey
        bytes.extend_from_slice(&[0u8; 10]); // reserved
        assert_eq!(bytes.len(), 0x4C);

        let units: Vec<u16> = icon_location.encode_utf16().collect();
        bytes.extend_from_slice(&(units.len() as u16).to_le_bytes());
        for unit in units {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }

        // Terminal extra data block
        bytes.extend_from_slice(&0u32.to_le_bytes());
        bytes
    }

    #[test]
    fn test_reads_icon_location_composite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Chess.lnk");
        std::fs::write(&path, shell_link_bytes("C:/G/chess.ico", 3)).unwrap();

        let metadata = LnkLinkGateway::new().read_link(&path).unwrap();

        assert_eq!(metadata.icon_location, "C:/G/chess.ico,3");
        assert_eq!(metadata.target_path, None);
    }

    #[test]
    fn test_resolver_drops_index_from_parsed_link() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Chess.lnk");
        std::fs::write(&path, shell_link_bytes("C:/G/chess.ico", 3)).unwrap();

        let resolver = ShortcutLinkResolver::new(Arc::new(LnkLinkGateway::new()));
        let resolved = resolver.resolve(&path).unwrap();

        assert_eq!(resolved.icon_source_path, Some(PathBuf::from("C:/G/chess.ico")));
        assert_eq!(resolved.target_path, None);
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Missing.lnk");

        match LnkLinkGateway::new().read_link(&path) {
            Err(DomainError::LinkUnreadable { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("Expected LinkUnreadable, got {:?}", other),
        }
    }

    #[test]
    fn test_corrupt_file_is_unreadable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Corrupt.lnk");
        std::fs::write(&path, b"this is not a shell link").unwrap();

        let result = LnkLinkGateway::new().read_link(&path);
        assert!(matches!(result, Err(DomainError::LinkUnreadable { .. })));
    }
}
