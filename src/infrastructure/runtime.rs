//! Runtime infrastructure - hands files to the OS default handler
//!
//! Windows gets a shell "open" request directly. Elsewhere an opener
//! program (`open` or `xdg-open`) is spawned with the path as a single
//! argument, and a background thread reaps it.

use std::path::Path;

use crate::application::ports::runtime_port::{RuntimeError, RuntimePort};

#[cfg(not(windows))]
use std::ffi::OsString;
#[cfg(not(windows))]
use std::process::{Command, Stdio};

#[cfg(target_os = "macos")]
const DEFAULT_OPENER: &str = "open";

#[cfg(all(not(windows), not(target_os = "macos")))]
const DEFAULT_OPENER: &str = "xdg-open";

/// Opens files the way a double click in the file manager would
#[derive(Debug, Clone)]
pub struct ShellRuntime {
    /// Opener program followed by its leading arguments
    #[cfg(not(windows))]
    opener: Vec<OsString>,
}

impl ShellRuntime {
    /// Create a new shell runtime
    pub fn new() -> Self {
        Self {
            #[cfg(not(windows))]
            opener: vec![OsString::from(DEFAULT_OPENER)],
        }
    }

    /// Use `program` with `args` as the opener; the path is appended last
    #[cfg(not(windows))]
    pub fn with_opener<I, S>(program: impl Into<OsString>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut opener = vec![program.into()];
        opener.extend(args.into_iter().map(Into::into));
        Self { opener }
    }
}

impl Default for ShellRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl RuntimePort for ShellRuntime {
    #[cfg(windows)]
    fn open_file(&self, path: &Path) -> Result<(), RuntimeError> {
        use windows::core::{w, PCWSTR};
        use windows::Win32::Foundation::HWND;
        use windows::Win32::System::Com::{CoInitializeEx, COINIT_APARTMENTTHREADED};
        use windows::Win32::UI::Shell::ShellExecuteW;
        use windows::Win32::UI::WindowsAndMessaging::SW_SHOWNORMAL;

        let file = to_wide(path);
        let result = unsafe {
            // Shell extensions expect COM on the calling thread
            let _ = CoInitializeEx(None, COINIT_APARTMENTTHREADED);
            ShellExecuteW(
                HWND::default(),
                w!("open"),
                PCWSTR(file.as_ptr()),
                PCWSTR::null(),
                PCWSTR::null(),
                SW_SHOWNORMAL,
            )
        };

        // Values above 32 mean success
        let code = result.0 as isize;
        if code > 32 {
            log::info!("Shell opened {:?}", path);
            Ok(())
        } else {
            Err(RuntimeError::ShellError(format!(
                "{}: ShellExecuteW returned {}",
                path.display(),
                code
            )))
        }
    }

    #[cfg(not(windows))]
    fn open_file(&self, path: &Path) -> Result<(), RuntimeError> {
        let (program, args) = self
            .opener
            .split_first()
            .ok_or_else(|| RuntimeError::SpawnError("no opener configured".to_string()))?;

        let mut child = Command::new(program)
            .args(args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| RuntimeError::SpawnError(format!("{}: {}", path.display(), e)))?;

        log::info!("Spawned {:?} for {:?}", program, path);

        let path = path.to_path_buf();
        let reaper = std::thread::Builder::new()
            .name("opener-reaper".to_string())
            .spawn(move || match child.wait() {
                Ok(status) if !status.success() => {
                    log::warn!("Opener for {:?} exited with {}", path, status)
                }
                Ok(_) => {}
                Err(e) => log::warn!("Failed to wait for opener of {:?}: {}", path, e),
            });
        if let Err(e) = reaper {
            log::warn!("Cannot start opener reaper thread: {}", e);
        }

        Ok(())
    }
}

/// Null-terminated UTF-16 form of a path
#[cfg(windows)]
fn to_wide(path: &Path) -> Vec<u16> {
    use std::os::windows::ffi::OsStrExt;

    path.as_os_str()
        .encode_wide()
        .chain(std::iter::once(0))
        .collect()
}
