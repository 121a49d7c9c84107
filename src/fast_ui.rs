//! Temporarily lighter host UI while a finder pipeline runs
//!
//! Icons, version-control decoration and previews make a file manager's
//! redraws slow. [`FastUi`] switches them off when acquired and puts them
//! back when dropped, whichever way the guarded code exits.
//!
//! ```
//! use fzjump::fast_ui::with_fast_ui;
//! use fzjump::ui::TerminalHost;
//!
//! let host = TerminalHost::new();
//! let answer = with_fast_ui(&host, || 42);
//! assert_eq!(answer, 42);
//! ```

use crate::ui::{Host, SettingValue, settings};

/// Linemode used while the scope is active
pub const FAST_LINEMODE: &str = "filename";

/// Host settings captured before entering the fast scope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiSnapshot {
    /// Active linemode, if the host reports one
    pub linemode: Option<String>,
    /// Version-control decoration
    pub vcs_aware: bool,
    /// Image previews
    pub preview_images: bool,
    /// Directory previews; `None` when the host lacks the setting
    pub preview_directories: Option<bool>,
}

impl UiSnapshot {
    /// Read the four settings from `host`
    pub fn capture<H: Host + ?Sized>(host: &H) -> Self {
        let flag = |name: &str| host.get_setting(name).and_then(|v| v.as_bool());

        Self {
            linemode: host
                .get_setting(settings::LINEMODE)
                .and_then(|v| v.as_text().map(ToString::to_string))
                .filter(|mode| !mode.is_empty()),
            vcs_aware: flag(settings::VCS_AWARE).unwrap_or(false),
            preview_images: flag(settings::PREVIEW_IMAGES).unwrap_or(false),
            preview_directories: flag(settings::PREVIEW_DIRECTORIES),
        }
    }
}

/// Guard holding the host in its fast state
///
/// Acquisition order: linemode, image previews, directory previews,
/// version-control decoration last. Release restores in the same order,
/// decoration again last. A decoration restore that fails leaves it off;
/// no failure in here ever reaches the caller.
///
/// A host that reports no linemode is switched to `filename` and left
/// there, since there is nothing to restore.
pub struct FastUi<'a, H: Host + ?Sized> {
    host: &'a H,
    snapshot: UiSnapshot,
}

impl<'a, H: Host + ?Sized> FastUi<'a, H> {
    /// Snapshot the host settings and switch to the fast state
    pub fn acquire(host: &'a H) -> Self {
        let snapshot = UiSnapshot::capture(host);
        tracing::debug!(?snapshot, "entering fast ui");

        let guard = Self { host, snapshot };
        guard.write(settings::LINEMODE, SettingValue::Text(FAST_LINEMODE.to_string()));
        guard.write(settings::PREVIEW_IMAGES, SettingValue::Bool(false));
        if guard.snapshot.preview_directories.is_some() {
            guard.write(settings::PREVIEW_DIRECTORIES, SettingValue::Bool(false));
        }
        guard.write(settings::VCS_AWARE, SettingValue::Bool(false));
        guard
    }

    fn write(&self, name: &str, value: SettingValue) -> bool {
        match self.host.set_setting(name, value) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(setting = name, error = %e, "could not change setting");
                false
            }
        }
    }

    fn release(&self) {
        if let Some(mode) = &self.snapshot.linemode {
            self.write(settings::LINEMODE, SettingValue::Text(mode.clone()));
        }
        self.write(
            settings::PREVIEW_IMAGES,
            SettingValue::Bool(self.snapshot.preview_images),
        );
        if let Some(previews) = self.snapshot.preview_directories {
            self.write(settings::PREVIEW_DIRECTORIES, SettingValue::Bool(previews));
        }

        let vcs = SettingValue::Bool(self.snapshot.vcs_aware);
        if let Err(e) = self.host.set_setting(settings::VCS_AWARE, vcs) {
            tracing::debug!(error = %e, "vcs decoration left disabled");
        }
        tracing::debug!("left fast ui");
    }
}

impl<H: Host + ?Sized> Drop for FastUi<'_, H> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Run `f` with the host in its fast state
pub fn with_fast_ui<H: Host + ?Sized, T>(host: &H, f: impl FnOnce() -> T) -> T {
    let _guard = FastUi::acquire(host);
    f()
}
