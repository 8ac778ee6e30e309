//! ShortcutRegistry - the ordered collection of imported shortcuts
//!
//! The registry is the only writer of entry state. Entry order is import
//! order and never changes except through `remove`, so a list view can
//! mirror it row for row.
//!
//! Selection is split in two steps so icon decoding can run elsewhere:
//! `begin_selection` hands out a ticket, `decode` does the slow work
//! without touching the registry, and `complete_selection` applies the
//! result only if no newer selection, rename or removal happened since.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use log::{debug, info, warn};

use crate::application::ports::{FileSystemError, FileSystemPort, RuntimePort};
use crate::application::services::link_resolver::ShortcutLinkResolver;
use crate::domain::entities::ShortcutEntry;
use crate::domain::errors::DomainError;
use crate::domain::repositories::{
    IconData, IconRepository, ShellLinkProvider, DEFAULT_THUMBNAIL_SIZE,
};
use crate::domain::value_objects::ShortcutName;

/// Default shortcut file extension
pub const DEFAULT_SHORTCUT_EXTENSION: &str = "lnk";

/// Tunables taken from configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryOptions {
    /// Edge length of rendered thumbnails
    pub thumbnail_size: u32,
    /// Extension of shortcut files, without the dot
    pub shortcut_extension: String,
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self {
            thumbnail_size: DEFAULT_THUMBNAIL_SIZE,
            shortcut_extension: DEFAULT_SHORTCUT_EXTENSION.to_string(),
        }
    }
}

/// Result of selecting an entry
#[derive(Clone, Debug, PartialEq)]
pub enum RenderedIcon {
    /// Decoded thumbnail
    Thumbnail(IconData),
    /// Shortcut or icon could not be read; carries the reason
    NotFound(DomainError),
}

impl RenderedIcon {
    /// The thumbnail, if one was rendered
    pub fn thumbnail(&self) -> Option<&IconData> {
        match self {
            RenderedIcon::Thumbnail(icon) => Some(icon),
            RenderedIcon::NotFound(_) => None,
        }
    }
}

/// Proof of a selection, redeemed by `complete_selection`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionTicket {
    generation: u64,
    source_path: PathBuf,
}

impl SelectionTicket {
    /// Shortcut file this selection is for
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }
}

/// Output of the decode step
#[derive(Clone, Debug, PartialEq)]
pub struct IconDecode {
    /// Icon path the shortcut resolved to, if resolution got that far
    pub icon_source_path: Option<PathBuf>,
    /// Thumbnail or the reason there is none
    pub result: Result<IconData, DomainError>,
}

/// Whether a decode was applied
#[derive(Clone, Debug, PartialEq)]
pub enum SelectionOutcome {
    /// The ticket was current; the entry now reflects the decode
    Applied(RenderedIcon),
    /// A later selection, rename or removal superseded the ticket
    Stale,
}

/// The shortcut registry
pub struct ShortcutRegistry<L, I, F, R>
where
    L: ShellLinkProvider,
    I: IconRepository,
    F: FileSystemPort,
    R: RuntimePort,
{
    entries: Vec<ShortcutEntry>,
    selected: Option<usize>,
    generation: u64,
    resolver: ShortcutLinkResolver<L>,
    icons: Arc<I>,
    file_system: Arc<F>,
    runtime: Arc<R>,
    options: RegistryOptions,
}

impl<L, I, F, R> ShortcutRegistry<L, I, F, R>
where
    L: ShellLinkProvider,
    I: IconRepository,
    F: FileSystemPort,
    R: RuntimePort,
{
    /// Create an empty registry
    pub fn new(links: Arc<L>, icons: Arc<I>, file_system: Arc<F>, runtime: Arc<R>) -> Self {
        Self {
            entries: Vec::new(),
            selected: None,
            generation: 0,
            resolver: ShortcutLinkResolver::new(links),
            icons,
            file_system,
            runtime,
            options: RegistryOptions::default(),
        }
    }

    /// Builder pattern: set options
    pub fn with_options(mut self, options: RegistryOptions) -> Self {
        self.options = options;
        self
    }

    /// Current options
    pub fn options(&self) -> &RegistryOptions {
        &self.options
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in display order
    pub fn entries(&self) -> &[ShortcutEntry] {
        &self.entries
    }

    /// Entry at `index`
    pub fn get(&self, index: usize) -> Option<&ShortcutEntry> {
        self.entries.get(index)
    }

    /// Position of the entry backed by `path`
    pub fn position(&self, path: &Path) -> Option<usize> {
        self.entries.iter().position(|e| e.source_path == path)
    }

    /// Check if a shortcut path is already imported
    pub fn contains(&self, path: &Path) -> bool {
        self.position(path).is_some()
    }

    /// Index of the selected entry
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The selected entry
    pub fn selected_entry(&self) -> Option<&ShortcutEntry> {
        self.selected.and_then(|i| self.entries.get(i))
    }

    /// Append shortcuts that are not yet present.
    ///
    /// Returns the newly added entries in the order they were appended.
    /// Already-imported paths and files without the shortcut extension are
    /// skipped. No shortcut file is read here; icons resolve on selection.
    pub fn import<P, It>(&mut self, paths: It) -> Vec<ShortcutEntry>
    where
        P: AsRef<Path>,
        It: IntoIterator<Item = P>,
    {
        let mut added = Vec::new();

        for path in paths {
            let path = absolute_path(path.as_ref());

            if !self.has_shortcut_extension(&path) {
                warn!("Skipping {:?}: not a .{} file", path, self.options.shortcut_extension);
                continue;
            }

            if self.contains(&path) {
                debug!("Skipping {:?}: already imported", path);
                continue;
            }

            let entry = ShortcutEntry::new(path);
            info!("Imported {:?} as {:?}", entry.source_path, entry.display_name);
            self.entries.push(entry.clone());
            added.push(entry);
        }

        added
    }

    /// Select `index` and render its icon.
    ///
    /// Unreadable shortcuts and missing or broken icons come back as
    /// `RenderedIcon::NotFound`; only a bad index is an error.
    pub fn select(&mut self, index: usize) -> Result<RenderedIcon, DomainError> {
        let ticket = self.begin_selection(index)?;
        let decode = self.decode(&ticket);
        Ok(self.apply_decode(index, decode))
    }

    /// Mark `index` as selected and issue a ticket for its icon
    pub fn begin_selection(&mut self, index: usize) -> Result<SelectionTicket, DomainError> {
        let source_path = self.entry(index)?.source_path.clone();

        self.selected = Some(index);
        self.generation += 1;
        debug!("Selected {} ({:?}), generation {}", index, source_path, self.generation);

        Ok(SelectionTicket {
            generation: self.generation,
            source_path,
        })
    }

    /// Resolve the ticket's shortcut and thumbnail its icon.
    ///
    /// Reads only the filesystem; the registry is left untouched.
    pub fn decode(&self, ticket: &SelectionTicket) -> IconDecode {
        let resolved = match self.resolver.resolve(&ticket.source_path) {
            Ok(resolved) => resolved,
            Err(e) => {
                return IconDecode {
                    icon_source_path: None,
                    result: Err(e),
                }
            }
        };

        let result = match resolved.icon_source_path {
            Some(ref icon_path) => self.icons.thumbnail(icon_path, self.options.thumbnail_size),
            None => Err(DomainError::IconSourceMissing(None)),
        };

        IconDecode {
            icon_source_path: resolved.icon_source_path,
            result,
        }
    }

    /// Apply a decode if its ticket is still current
    pub fn complete_selection(
        &mut self,
        ticket: &SelectionTicket,
        decode: IconDecode,
    ) -> SelectionOutcome {
        if ticket.generation != self.generation {
            debug!(
                "Discarding stale decode for {:?} (generation {} != {})",
                ticket.source_path, ticket.generation, self.generation
            );
            return SelectionOutcome::Stale;
        }

        match self.position(&ticket.source_path) {
            Some(index) => SelectionOutcome::Applied(self.apply_decode(index, decode)),
            None => SelectionOutcome::Stale,
        }
    }

    fn apply_decode(&mut self, index: usize, decode: IconDecode) -> RenderedIcon {
        let entry = &mut self.entries[index];
        entry.icon_source_path = decode.icon_source_path;

        match decode.result {
            Ok(icon) => {
                entry.thumbnail = Some(icon.clone());
                RenderedIcon::Thumbnail(icon)
            }
            Err(e) => {
                if e.is_icon_fallback() {
                    info!("No icon for {:?}: {}", entry.source_path, e);
                } else {
                    warn!("Unexpected icon failure for {:?}: {}", entry.source_path, e);
                }
                entry.thumbnail = None;
                RenderedIcon::NotFound(e)
            }
        }
    }

    /// Rename the shortcut file at `index` to `<new_name>.<extension>`.
    ///
    /// Validation and conflict checks run before any I/O. The entry only
    /// changes after the filesystem rename succeeded.
    pub fn rename(&mut self, index: usize, new_name: &str) -> Result<(), DomainError> {
        let name = ShortcutName::parse(new_name)?;
        let old_path = self.entry(index)?.source_path.clone();
        let new_path = name.sibling_path(&old_path, &self.options.shortcut_extension);

        if new_path == old_path {
            debug!("Rename of {:?} to its own name ignored", old_path);
            return Ok(());
        }

        if self.contains(&new_path) || self.file_system.exists(&new_path) {
            warn!("Rename conflict: {:?} -> {:?}", old_path, new_path);
            return Err(DomainError::RenameConflict(new_path));
        }

        self.file_system
            .rename(&old_path, &new_path)
            .map_err(|e| match e {
                FileSystemError::AlreadyExists(path) => DomainError::RenameConflict(path),
                other => DomainError::RenameIo {
                    from: old_path.clone(),
                    to: new_path.clone(),
                    reason: other.to_string(),
                },
            })?;

        info!("Renamed {:?} -> {:?} as {}", old_path, new_path, name);
        self.entries[index].apply_rename(new_path);

        if self.selected == Some(index) {
            // In-flight decodes read the old file
            self.generation += 1;
        }

        Ok(())
    }

    /// Remove the entry at `index`, keeping the selection on the same entry
    pub fn remove(&mut self, index: usize) -> Result<ShortcutEntry, DomainError> {
        self.entry(index)?;
        let entry = self.entries.remove(index);

        self.selected = match self.selected {
            Some(selected) if selected == index => {
                self.generation += 1;
                None
            }
            Some(selected) if selected > index => Some(selected - 1),
            other => other,
        };

        info!("Removed {:?}", entry.source_path);
        Ok(entry)
    }

    /// Open the selected shortcut with the OS default handler.
    ///
    /// Launch failures are logged, not returned: the OS reports them.
    pub fn launch_selected(&self) -> Result<(), DomainError> {
        let entry = self.selected_entry().ok_or(DomainError::NothingSelected)?;

        info!("Launching {:?}", entry.source_path);
        if let Err(e) = self.runtime.open_file(&entry.source_path) {
            warn!("Launch of {:?} failed: {}", entry.source_path, e);
        }

        Ok(())
    }

    fn entry(&self, index: usize) -> Result<&ShortcutEntry, DomainError> {
        self.entries.get(index).ok_or(DomainError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    fn has_shortcut_extension(&self, path: &Path) -> bool {
        path.extension()
            .map_or(false, |ext| {
                ext.eq_ignore_ascii_case(self.options.shortcut_extension.as_str())
            })
    }
}

/// Anchor relative paths at the current directory and fold `.` and `..`.
///
/// Folding is lexical: symlinks are not resolved.
fn absolute_path(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                if !normalized.pop() && !normalized.has_root() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::gateways::ImageIconGateway;
    use crate::application::ports::RecordingRuntimePort;
    use crate::domain::repositories::LinkMetadata;
    use crate::infrastructure::filesystem::StdFileSystem;
    use std::fs;
    use tempfile::TempDir;

    /// Link provider whose "shortcut files" hold their icon location as text
    struct TextLinkProvider;

    impl ShellLinkProvider for TextLinkProvider {
        fn read_link(&self, lnk_path: &Path) -> Result<LinkMetadata, DomainError> {
            fs::read_to_string(lnk_path)
                .map(|content| LinkMetadata::new(None, content.trim()))
                .map_err(|e| DomainError::LinkUnreadable {
                    path: lnk_path.to_path_buf(),
                    reason: e.to_string(),
                })
        }
    }

    /// File system whose renames always fail
    struct ReadOnlyFileSystem;

    impl FileSystemPort for ReadOnlyFileSystem {
        fn exists(&self, path: &Path) -> bool {
            path.exists()
        }

        fn rename(&self, from: &Path, _to: &Path) -> Result<(), FileSystemError> {
            Err(FileSystemError::PermissionDenied(from.to_path_buf()))
        }
    }

    type TestRegistry<F> =
        ShortcutRegistry<TextLinkProvider, ImageIconGateway, F, RecordingRuntimePort>;

    fn registry() -> (TestRegistry<StdFileSystem>, Arc<RecordingRuntimePort>) {
        registry_with_fs(StdFileSystem::new())
    }

    fn registry_with_fs<F: FileSystemPort>(fs: F) -> (TestRegistry<F>, Arc<RecordingRuntimePort>) {
        let runtime = Arc::new(RecordingRuntimePort::new());
        let registry = ShortcutRegistry::new(
            Arc::new(TextLinkProvider),
            Arc::new(ImageIconGateway::new()),
            Arc::new(fs),
            runtime.clone(),
        );
        (registry, runtime)
    }

    fn write_icon(dir: &TempDir, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.path().join(name);
        image::RgbaImage::from_pixel(width, height, image::Rgba([200, 40, 40, 255]))
            .save(&path)
            .unwrap();
        path
    }

    fn write_shortcut(dir: &TempDir, name: &str, icon_location: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, icon_location).unwrap();
        path
    }

    #[test]
    fn test_import_dedup() {
        let (mut registry, _) = registry();
        let a = PathBuf::from("/games/a.lnk");

        let added = registry.import([&a, &a]);

        assert_eq!(added.len(), 1);
        assert_eq!(registry.len(), 1);

        let added = registry.import([&a]);
        assert!(added.is_empty());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_import_dedup_after_folding_dot_segments() {
        let (mut registry, _) = registry();

        let added = registry.import(["/g/x/../a.lnk", "/g/./a.lnk", "/g/a.lnk"]);

        assert_eq!(added.len(), 1);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(0).unwrap().file_name(), "a.lnk");
        assert!(registry.get(0).unwrap().source_path.components().all(|c| {
            !matches!(c, Component::CurDir | Component::ParentDir)
        }));
    }

    #[test]
    fn test_absolute_path_stays_at_root() {
        let folded = absolute_path(Path::new("/../../a.lnk"));
        assert_eq!(folded.file_name().unwrap(), "a.lnk");
        assert!(folded.components().all(|c| c != Component::ParentDir));
    }

    #[test]
    fn test_import_preserves_order() {
        let (mut registry, _) = registry();

        registry.import(["/g/a.lnk", "/g/b.lnk", "/g/c.lnk"]);
        let added = registry.import(["/g/d.lnk"]);

        assert_eq!(added.len(), 1);
        let names: Vec<_> = registry
            .entries()
            .iter()
            .map(|e| e.display_name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_import_skips_other_extensions() {
        let (mut registry, _) = registry();

        let added = registry.import(["/g/readme.txt", "/g/Game.LNK", "/g/noext"]);

        assert_eq!(added.len(), 1);
        assert_eq!(added[0].display_name, "Game");
    }

    #[test]
    fn test_import_defers_icon_resolution() {
        let (mut registry, _) = registry();

        // The file does not exist; import must not try to read it
        let added = registry.import(["/nowhere/Ghost.lnk"]);

        assert_eq!(added.len(), 1);
        assert!(added[0].icon_source_path.is_none());
        assert!(added[0].thumbnail.is_none());
    }

    #[test]
    fn test_end_to_end_chess() {
        let dir = TempDir::new().unwrap();
        let icon = write_icon(&dir, "chess.ico", 128, 128);
        let lnk = write_shortcut(&dir, "Chess.lnk", &format!("{},0", icon.display()));
        let (mut registry, _) = registry();

        registry.import([&lnk]);
        assert_eq!(registry.entries()[0].source_path, lnk);
        assert_eq!(registry.entries()[0].display_name, "Chess");

        let rendered = registry.select(0).unwrap();
        let thumb = rendered.thumbnail().expect("thumbnail");
        assert_eq!((thumb.width, thumb.height), (64, 64));
        assert_eq!(registry.entries()[0].icon_source_path, Some(icon.clone()));

        registry.rename(0, "ChessPro").unwrap();

        let renamed = dir.path().join("ChessPro.lnk");
        assert_eq!(registry.entries()[0].source_path, renamed);
        assert_eq!(registry.entries()[0].display_name, "ChessPro");
        assert!(!lnk.exists());
        assert!(renamed.exists());
    }

    #[test]
    fn test_select_missing_icon_falls_back() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.ico");
        let lnk = write_shortcut(&dir, "Lost.lnk", &format!("{},0", missing.display()));
        let (mut registry, _) = registry();
        registry.import([&lnk]);

        let rendered = registry.select(0).unwrap();

        assert_eq!(
            rendered,
            RenderedIcon::NotFound(DomainError::IconSourceMissing(Some(missing)))
        );
        assert!(registry.entries()[0].thumbnail.is_none());
        assert_eq!(registry.selected_index(), Some(0));
    }

    #[test]
    fn test_select_unreadable_link_falls_back() {
        let (mut registry, _) = registry();
        registry.import(["/nowhere/Ghost.lnk"]);

        let rendered = registry.select(0).unwrap();

        assert!(matches!(
            rendered,
            RenderedIcon::NotFound(DomainError::LinkUnreadable { .. })
        ));
    }

    #[test]
    fn test_select_undecodable_icon_falls_back() {
        let dir = TempDir::new().unwrap();
        let bogus = dir.path().join("bogus.ico");
        fs::write(&bogus, b"definitely not an icon").unwrap();
        let lnk = write_shortcut(&dir, "Broken.lnk", &format!("{},0", bogus.display()));
        let (mut registry, _) = registry();
        registry.import([&lnk]);

        let rendered = registry.select(0).unwrap();

        assert!(matches!(
            rendered,
            RenderedIcon::NotFound(DomainError::IconDecodeFailed { .. })
        ));
    }

    #[test]
    fn test_select_out_of_range() {
        let (mut registry, _) = registry();
        registry.import(["/g/a.lnk"]);

        assert_eq!(
            registry.select(1),
            Err(DomainError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(registry.selected_index(), None);
    }

    #[test]
    fn test_reselect_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let icon = write_icon(&dir, "wide.png", 100, 50);
        let lnk = write_shortcut(&dir, "Wide.lnk", &format!("{},0", icon.display()));
        let (mut registry, _) = registry();
        registry.import([&lnk]);

        let first = registry.select(0).unwrap();
        let second = registry.select(0).unwrap();

        assert_eq!(first, second);
        let thumb = first.thumbnail().unwrap();
        assert_eq!((thumb.width, thumb.height), (64, 32));
    }

    #[test]
    fn test_rename_conflict_leaves_entries_untouched() {
        let dir = TempDir::new().unwrap();
        let a = write_shortcut(&dir, "a.lnk", ",0");
        let b = write_shortcut(&dir, "b.lnk", ",0");
        let (mut registry, _) = registry();
        registry.import([&a, &b]);

        assert_eq!(registry.rename(0, "b"), Err(DomainError::RenameConflict(b.clone())));

        assert_eq!(registry.entries()[0].source_path, a);
        assert_eq!(registry.entries()[0].display_name, "a");
        assert_eq!(registry.entries()[1].source_path, b);
        assert!(a.exists());
        assert!(b.exists());
    }

    #[test]
    fn test_rename_conflict_with_file_not_in_registry() {
        let dir = TempDir::new().unwrap();
        let a = write_shortcut(&dir, "a.lnk", ",0");
        let other = write_shortcut(&dir, "other.lnk", ",0");
        let (mut registry, _) = registry();
        registry.import([&a]);

        assert_eq!(registry.rename(0, "other"), Err(DomainError::RenameConflict(other)));
        assert_eq!(registry.entries()[0].source_path, a);
    }

    #[test]
    fn test_rename_io_failure_is_atomic() {
        let dir = TempDir::new().unwrap();
        let a = write_shortcut(&dir, "a.lnk", ",0");
        let (mut registry, _) = registry_with_fs(ReadOnlyFileSystem);
        registry.import([&a]);

        let result = registry.rename(0, "renamed");

        assert!(matches!(result, Err(DomainError::RenameIo { .. })));
        assert_eq!(registry.entries()[0].source_path, a);
        assert_eq!(registry.entries()[0].display_name, "a");
        assert!(a.exists());
    }

    #[test]
    fn test_rename_rejects_empty_name_before_io() {
        let (mut registry, _) = registry_with_fs(ReadOnlyFileSystem);
        registry.import(["/g/a.lnk"]);

        assert_eq!(
            registry.rename(0, "   "),
            Err(DomainError::InvalidName("   ".to_string()))
        );
    }

    #[test]
    fn test_rename_out_of_range() {
        let (mut registry, _) = registry();

        assert_eq!(
            registry.rename(0, "x"),
            Err(DomainError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_rename_to_same_name_is_noop() {
        let dir = TempDir::new().unwrap();
        let a = write_shortcut(&dir, "a.lnk", ",0");
        let (mut registry, _) = registry_with_fs(ReadOnlyFileSystem);
        registry.import([&a]);

        assert_eq!(registry.rename(0, " a "), Ok(()));
        assert_eq!(registry.entries()[0].source_path, a);
    }

    #[test]
    fn test_rename_unselected_resets_icon_and_keeps_order() {
        let dir = TempDir::new().unwrap();
        let icon = write_icon(&dir, "i.png", 16, 16);
        let location = format!("{},0", icon.display());
        let a = write_shortcut(&dir, "a.lnk", &location);
        let b = write_shortcut(&dir, "b.lnk", &location);
        let c = write_shortcut(&dir, "c.lnk", &location);
        let (mut registry, _) = registry();
        registry.import([&a, &b, &c]);

        registry.select(1).unwrap();
        assert!(registry.entries()[1].has_thumbnail());
        registry.select(0).unwrap();

        registry.rename(1, "bee").unwrap();

        let names: Vec<_> = registry
            .entries()
            .iter()
            .map(|e| e.display_name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "bee", "c"]);
        assert!(!registry.entries()[1].has_thumbnail());
        assert_eq!(registry.selected_index(), Some(0));

        // The renamed file still resolves on the next selection
        let rendered = registry.select(1).unwrap();
        assert!(rendered.thumbnail().is_some());
    }

    #[test]
    fn test_launch_requires_selection() {
        let (mut registry, runtime) = registry();
        registry.import(["/g/a.lnk"]);

        assert_eq!(registry.launch_selected(), Err(DomainError::NothingSelected));
        assert!(runtime.opened().is_empty());
    }

    #[test]
    fn test_launch_opens_shortcut_file() {
        let (mut registry, runtime) = registry();
        registry.import(["/g/a.lnk", "/g/b.lnk"]);

        // Selection counts even when the icon cannot be found
        registry.select(1).unwrap();
        registry.launch_selected().unwrap();

        assert_eq!(runtime.opened(), vec![PathBuf::from("/g/b.lnk")]);
    }

    #[test]
    fn test_launch_after_rename_uses_new_path() {
        let dir = TempDir::new().unwrap();
        let a = write_shortcut(&dir, "a.lnk", ",0");
        let (mut registry, runtime) = registry();
        registry.import([&a]);

        registry.select(0).unwrap();
        registry.rename(0, "z").unwrap();
        registry.launch_selected().unwrap();

        assert_eq!(runtime.opened(), vec![dir.path().join("z.lnk")]);
    }

    #[test]
    fn test_remove_adjusts_selection() {
        let (mut registry, _) = registry();
        registry.import(["/g/a.lnk", "/g/b.lnk", "/g/c.lnk"]);
        registry.select(2).unwrap();

        let removed = registry.remove(0).unwrap();

        assert_eq!(removed.display_name, "a");
        assert_eq!(registry.selected_index(), Some(1));
        assert_eq!(registry.selected_entry().unwrap().display_name, "c");

        registry.remove(1).unwrap();
        assert_eq!(registry.selected_index(), None);
        assert_eq!(registry.len(), 1);

        // Removed paths can be imported again
        assert_eq!(registry.import(["/g/a.lnk"]).len(), 1);
    }

    #[test]
    fn test_stale_selection_is_discarded() {
        let dir = TempDir::new().unwrap();
        let icon = write_icon(&dir, "i.png", 32, 32);
        let location = format!("{},0", icon.display());
        let a = write_shortcut(&dir, "a.lnk", &location);
        let b = write_shortcut(&dir, "b.lnk", &location);
        let (mut registry, _) = registry();
        registry.import([&a, &b]);

        let slow = registry.begin_selection(0).unwrap();
        let slow_decode = registry.decode(&slow);

        let fast = registry.begin_selection(1).unwrap();
        let fast_decode = registry.decode(&fast);
        assert!(matches!(
            registry.complete_selection(&fast, fast_decode),
            SelectionOutcome::Applied(RenderedIcon::Thumbnail(_))
        ));

        assert_eq!(
            registry.complete_selection(&slow, slow_decode),
            SelectionOutcome::Stale
        );
        assert!(!registry.entries()[0].has_thumbnail());
        assert!(registry.entries()[1].has_thumbnail());
        assert_eq!(registry.selected_index(), Some(1));
    }

    #[test]
    fn test_selection_survives_unrelated_removal() {
        let dir = TempDir::new().unwrap();
        let icon = write_icon(&dir, "i.png", 32, 32);
        let location = format!("{},0", icon.display());
        let a = write_shortcut(&dir, "a.lnk", &location);
        let b = write_shortcut(&dir, "b.lnk", &location);
        let (mut registry, _) = registry();
        registry.import([&a, &b]);

        let ticket = registry.begin_selection(1).unwrap();
        let decode = registry.decode(&ticket);
        registry.remove(0).unwrap();

        assert!(matches!(
            registry.complete_selection(&ticket, decode),
            SelectionOutcome::Applied(RenderedIcon::Thumbnail(_))
        ));
        assert!(registry.entries()[0].has_thumbnail());
    }

    #[test]
    fn test_rename_invalidates_inflight_selection() {
        let dir = TempDir::new().unwrap();
        let icon = write_icon(&dir, "i.png", 32, 32);
        let a = write_shortcut(&dir, "a.lnk", &format!("{},0", icon.display()));
        let (mut registry, _) = registry();
        registry.import([&a]);

        let ticket = registry.begin_selection(0).unwrap();
        let decode = registry.decode(&ticket);
        registry.rename(0, "b").unwrap();

        assert_eq!(registry.complete_selection(&ticket, decode), SelectionOutcome::Stale);
        assert!(!registry.entries()[0].has_thumbnail());
    }
}
