//! Per-file viewer settings
//!
//! Preferences remembered per splat file: the saved focus distance,
//! transition overrides, and ambient-motion profile. A `SettingsStore`
//! implementation persists the records; the in-memory store backs tests
//! and hosts that keep their own persistence.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::transition::{TransitionMode, ZoomProfile};

/// Errors from settings persistence
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings record is malformed: {0}")]
    Malformed(String),
    #[error("settings backend unavailable: {0}")]
    Unavailable(String),
}

/// Transition fields a file can override
///
/// Every field is optional; unset fields fall through to the preset or
/// global default during resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<TransitionMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fade_delay: Option<f32>,
}

impl TransitionOverrides {
    pub fn is_empty(&self) -> bool {
        self.mode.is_none()
            && self.duration_ms.is_none()
            && self.amount.is_none()
            && self.fade_delay.is_none()
    }
}

/// Settings remembered for a single file
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSettings {
    /// Saved camera-to-target distance from the last focus pick
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_distance: Option<f32>,
    /// Transition overrides for this file
    #[serde(skip_serializing_if = "TransitionOverrides::is_empty")]
    pub transition: TransitionOverrides,
    /// Preferred ambient zoom travel for this file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom_profile: Option<ZoomProfile>,
    /// Named speed curve for this file's slide transitions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_animation: Option<String>,
}

/// Persistence seam for per-file settings
pub trait SettingsStore {
    /// Load the record for a file key, `None` when nothing is saved
    fn load(&self, key: &str) -> Result<Option<FileSettings>, SettingsError>;

    /// Save (replace) the record for a file key
    fn save(&mut self, key: &str, settings: &FileSettings) -> Result<(), SettingsError>;

    /// Load-modify-save in one step, starting from defaults when no
    /// record exists yet
    fn update(
        &mut self,
        key: &str,
        f: impl FnOnce(&mut FileSettings),
    ) -> Result<(), SettingsError>
    where
        Self: Sized,
    {
        let mut settings = self.load(key)?.unwrap_or_default();
        f(&mut settings);
        self.save(key, &settings)
    }
}

/// In-memory settings store
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    records: FxHashMap<String, FileSettings>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self, key: &str) -> Result<Option<FileSettings>, SettingsError> {
        Ok(self.records.get(key).cloned())
    }

    fn save(&mut self, key: &str, settings: &FileSettings) -> Result<(), SettingsError> {
        self.records.insert(key.to_string(), settings.clone());
        Ok(())
    }
}
