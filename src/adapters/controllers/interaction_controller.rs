//! InteractionController - Wires shell events to the registry
//!
//! Every event yields the view updates that keep the shell in step with the
//! registry. Registry failures come back as updates too, never as errors.

use std::path::PathBuf;

use log::debug;

use crate::adapters::presenters::{ShortcutPresenter, ViewUpdate};
use crate::adapters::views::ShortcutView;
use crate::application::ports::{FileSystemPort, RuntimePort};
use crate::application::services::ShortcutRegistry;
use crate::domain::errors::DomainError;
use crate::domain::repositories::{IconRepository, ShellLinkProvider};

/// Events raised by the presentation shell
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellEvent {
    /// Paths chosen in the file picker
    Import(Vec<PathBuf>),
    /// A list row was clicked
    Select(usize),
    /// The rename button was pressed with the field's text
    Rename(String),
    /// The icon area was clicked
    Launch,
    /// A row was removed
    Remove(usize),
}

/// Controller between the presentation shell and the registry
pub struct InteractionController<L, I, F, R>
where
    L: ShellLinkProvider,
    I: IconRepository,
    F: FileSystemPort,
    R: RuntimePort,
{
    registry: ShortcutRegistry<L, I, F, R>,
    presenter: ShortcutPresenter,
}

impl<L, I, F, R> InteractionController<L, I, F, R>
where
    L: ShellLinkProvider,
    I: IconRepository,
    F: FileSystemPort,
    R: RuntimePort,
{
    /// Create a controller over a registry
    pub fn new(registry: ShortcutRegistry<L, I, F, R>, presenter: ShortcutPresenter) -> Self {
        Self {
            registry,
            presenter,
        }
    }

    /// Read access to the registry
    pub fn registry(&self) -> &ShortcutRegistry<L, I, F, R> {
        &self.registry
    }

    /// Handle an event and apply the resulting updates to `view`
    pub fn dispatch<V: ShortcutView + ?Sized>(&mut self, event: ShellEvent, view: &mut V) {
        for update in self.handle(event) {
            update.apply_to(view);
        }
    }

    /// Handle an event
    pub fn handle(&mut self, event: ShellEvent) -> Vec<ViewUpdate> {
        debug!("Handling {:?}", event);
        match event {
            ShellEvent::Import(paths) => self.on_import(paths),
            ShellEvent::Select(index) => self.on_select(index),
            ShellEvent::Rename(text) => self.on_rename(&text),
            ShellEvent::Launch => self.on_launch(),
            ShellEvent::Remove(index) => self.on_remove(index),
        }
    }

    /// Import picked shortcut files
    pub fn on_import(&mut self, paths: Vec<PathBuf>) -> Vec<ViewUpdate> {
        let added = self.registry.import(paths);
        self.presenter.present_import(&added)
    }

    /// Show the icon of a clicked row
    pub fn on_select(&mut self, index: usize) -> Vec<ViewUpdate> {
        match self.registry.select(index) {
            Ok(rendered) => self.presenter.present_icon(rendered),
            Err(e) => self.presenter.present_error(&e),
        }
    }

    /// Rename the selected shortcut; ignored when nothing is selected
    pub fn on_rename(&mut self, text: &str) -> Vec<ViewUpdate> {
        let Some(index) = self.registry.selected_index() else {
            debug!("Rename with no selection ignored");
            return Vec::new();
        };

        match self.registry.rename(index, text) {
            Ok(()) => match self.registry.get(index) {
                Some(entry) => self.presenter.present_rename(index, entry),
                None => Vec::new(),
            },
            Err(e) => self.presenter.present_error(&e),
        }
    }

    /// Launch the shortcut whose icon is shown; ignored when none is
    pub fn on_launch(&mut self) -> Vec<ViewUpdate> {
        match self.registry.launch_selected() {
            Ok(()) | Err(DomainError::NothingSelected) => Vec::new(),
            Err(e) => self.presenter.present_error(&e),
        }
    }

    /// Remove a row and its entry together
    pub fn on_remove(&mut self, index: usize) -> Vec<ViewUpdate> {
        let was_selected = self.registry.selected_index() == Some(index);

        match self.registry.remove(index) {
            Ok(_) => self.presenter.present_remove(index, was_selected),
            Err(e) => self.presenter.present_error(&e),
        }
    }
}
