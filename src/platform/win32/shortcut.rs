//! Windows shortcut (.lnk) reader using COM interfaces
//!
//! Uses IShellLinkW and IPersistFile, so icon locations come back with
//! environment variables already expanded by the shell.

use std::path::{Path, PathBuf};

use windows::core::{Interface, GUID, PCWSTR};
use windows::Win32::System::Com::{
    CoCreateInstance, CoInitializeEx, IPersistFile, CLSCTX_INPROC_SERVER, COINIT_APARTMENTTHREADED,
    STGM_READ,
};
use windows::Win32::UI::Shell::IShellLinkW;

use crate::domain::errors::DomainError;
use crate::domain::repositories::{LinkMetadata, ShellLinkProvider};
use crate::domain::value_objects::IconLocation;

/// CLSID for ShellLink COM object
const CLSID_SHELL_LINK: GUID = GUID::from_u128(0x00021401_0000_0000_C000_000000000046);

/// MAX_PATH
const PATH_BUF_LEN: usize = 260;

/// Information extracted from a .lnk shortcut file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcutInfo {
    /// Target path (the executable or file the shortcut points to)
    pub target_path: String,
    /// Icon location (path to icon file or exe)
    pub icon_path: String,
    /// Icon index within the icon file
    pub icon_index: i32,
}

impl ShortcutInfo {
    /// Icon location in "path,index" form
    pub fn icon_location(&self) -> String {
        IconLocation {
            path: (!self.icon_path.is_empty()).then(|| PathBuf::from(&self.icon_path)),
            index: self.icon_index,
        }
        .to_composite()
    }

    /// Target path, if the shortcut has one
    pub fn target(&self) -> Option<PathBuf> {
        if self.target_path.is_empty() {
            None
        } else {
            Some(PathBuf::from(&self.target_path))
        }
    }
}

/// Parse a .lnk shortcut file and extract its properties
pub fn parse_lnk(lnk_path: &Path) -> Result<ShortcutInfo, String> {
    unsafe {
        // Safe to call repeatedly on the same thread
        let _ = CoInitializeEx(None, COINIT_APARTMENTTHREADED);

        let shell_link: IShellLinkW =
            CoCreateInstance(&CLSID_SHELL_LINK, None, CLSCTX_INPROC_SERVER)
                .map_err(|e| format!("Failed to create ShellLink: {:?}", e))?;

        let persist_file: IPersistFile = shell_link
            .cast()
            .map_err(|e| format!("Failed to get IPersistFile: {:?}", e))?;

        let path_wide: Vec<u16> = lnk_path
            .to_string_lossy()
            .encode_utf16()
            .chain(std::iter::once(0))
            .collect();

        persist_file
            .Load(PCWSTR(path_wide.as_ptr()), STGM_READ)
            .map_err(|e| format!("Failed to load .lnk file: {:?}", e))?;

        let mut info = ShortcutInfo::default();

        let mut target_buf = [0u16; PATH_BUF_LEN];
        if shell_link
            .GetPath(&mut target_buf, std::ptr::null_mut(), 0)
            .is_ok()
        {
            info.target_path = wstr_to_string(&target_buf);
        }

        let mut icon_buf = [0u16; PATH_BUF_LEN];
        let mut icon_index: i32 = 0;
        if shell_link
            .GetIconLocation(&mut icon_buf, &mut icon_index)
            .is_ok()
        {
            info.icon_path = wstr_to_string(&icon_buf);
            info.icon_index = icon_index;
        }

        Ok(info)
    }
}

/// Shell link provider backed by the Windows shell
#[derive(Debug, Default)]
pub struct ComLinkProvider;

impl ComLinkProvider {
    pub fn new() -> Self {
        Self
    }
}

impl ShellLinkProvider for ComLinkProvider {
    fn read_link(&self, lnk_path: &Path) -> Result<LinkMetadata, DomainError> {
        let info = parse_lnk(lnk_path).map_err(|reason| DomainError::LinkUnreadable {
            path: lnk_path.to_path_buf(),
            reason,
        })?;

        Ok(LinkMetadata::new(info.target(), info.icon_location()))
    }
}

/// Convert a null-terminated wide string to a Rust String
fn wstr_to_string(wstr: &[u16]) -> String {
    let len = wstr.iter().position(|&c| c == 0).unwrap_or(wstr.len());
    String::from_utf16_lossy(&wstr[..len])
}
