//! Visibility gate: mounts the pane while it is open.

use super::pointer::PointerHub;
use super::shell::PanelShell;

/// Mounts the pane while the external open flag is set.
///
/// While hidden there is no shell at all: no search text, no menu state and
/// no pointer listener. Reopening starts from a fresh shell.
#[derive(Default)]
pub struct ParticipantsPane {
    shell: Option<PanelShell>,
    mounts: u64,
}

impl ParticipantsPane {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconcile with the open flag. Must run before anything that could
    /// observe pointer events for this frame.
    pub fn sync(&mut self, visible: bool, hub: &PointerHub) -> Option<&mut PanelShell> {
        match (visible, self.shell.is_some()) {
            (true, false) => {
                self.mounts += 1;
                tracing::info!(mount = self.mounts, "participants pane mounted");
                self.shell = Some(PanelShell::mount(hub));
            }
            (false, true) => self.unmount(),
            _ => {}
        }
        self.shell.as_mut()
    }

    pub fn unmount(&mut self) {
        if self.shell.take().is_some() {
            tracing::info!("participants pane unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.shell.is_some()
    }

    pub fn shell(&self) -> Option<&PanelShell> {
        self.shell.as_ref()
    }

    pub fn shell_mut(&mut self) -> Option<&mut PanelShell> {
        self.shell.as_mut()
    }

    /// How many times the pane has been mounted.
    pub fn mount_count(&self) -> u64 {
        self.mounts
    }
}
