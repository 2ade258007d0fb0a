//! Chart construction options.
//!
//! Options can be built in code or loaded from a JSON file:
//!
//! ```json
//! {
//!   "kind": "line",
//!   "x_min_tracking": "tracked",
//!   "base_rect": { "x": 0.0, "y": 0.0, "width": 1000.0, "height": 100.0 }
//! }
//! ```
//!
//! Every field is optional.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::XMinTracking;
use crate::error::{OptionsError, Result};
use crate::rect::Rect;
use crate::series::SeriesKind;

/// Options controlling how a chart is built.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    /// Forces every series to this kind. `None` picks
    /// [`SeriesKind::default_for`] the measurement count.
    pub kind: Option<SeriesKind>,

    /// How the x minimum of the domain is maintained.
    pub x_min_tracking: XMinTracking,

    /// Base rectangle used when the caller does not pass one explicitly.
    pub base_rect: Rect,
}

impl ChartOptions {
    /// Creates options with a kind override.
    #[must_use]
    pub fn with_kind(mut self, kind: SeriesKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Creates options with the given x-minimum policy.
    #[must_use]
    pub fn with_x_min_tracking(mut self, tracking: XMinTracking) -> Self {
        self.x_min_tracking = tracking;
        self
    }

    /// Loads options from a JSON file and validates them.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError`] if the file cannot be read, is not valid
    /// JSON, or describes an invalid base rectangle.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|e| OptionsError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let options: Self = serde_json::from_str(&data).map_err(|e| OptionsError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        options.validate()?;
        Ok(options)
    }

    /// Validates the options.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::InvalidRect`] if the base rectangle is invalid.
    pub fn validate(&self) -> Result<()> {
        self.base_rect.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FlamechartError;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let options = ChartOptions::default();
        assert_eq!(options.kind, None);
        assert_eq!(options.x_min_tracking, XMinTracking::Legacy);
        assert_eq!(options.base_rect, Rect::default());
    }

    #[test]
    fn test_builder_methods() {
        let options = ChartOptions::default()
            .with_kind(SeriesKind::Area)
            .with_x_min_tracking(XMinTracking::Tracked);
        assert_eq!(options.kind, Some(SeriesKind::Area));
        assert_eq!(options.x_min_tracking, XMinTracking::Tracked);
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("options.json");
        std::fs::write(&path, r#"{"kind": "area"}"#).unwrap();

        let options = ChartOptions::load(&path).unwrap();
        assert_eq!(options.kind, Some(SeriesKind::Area));
        assert_eq!(options.x_min_tracking, XMinTracking::Legacy);
    }

    #[test]
    fn test_load_rejects_invalid_rect() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("options.json");
        std::fs::write(
            &path,
            r#"{"base_rect": {"x": 0, "y": 0, "width": -5, "height": 1}}"#,
        )
        .unwrap();

        assert!(matches!(
            ChartOptions::load(&path),
            Err(FlamechartError::Options(OptionsError::InvalidRect { .. }))
        ));
    }

    #[test]
    fn test_load_errors() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            ChartOptions::load(dir.path().join("missing.json")),
            Err(FlamechartError::Options(OptionsError::Read { .. }))
        ));

        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            ChartOptions::load(&path),
            Err(FlamechartError::Options(OptionsError::Parse { .. }))
        ));
    }
}
