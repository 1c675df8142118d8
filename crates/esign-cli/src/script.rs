//! Recorded pointer strokes

use anyhow::Context;
use esign_signature::{PointerEvent, SignaturePad};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Strokes as client-coordinate polylines: `[[[x, y], ...], ...]`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StrokeScript(Vec<Vec<[f32; 2]>>);

impl StrokeScript {
    /// Build from polylines
    #[must_use]
    pub fn new(strokes: Vec<Vec<[f32; 2]>>) -> Self {
        Self(strokes)
    }

    /// Parse JSON text
    ///
    /// # Errors
    /// Returns an error if the text is not an array of point arrays.
    pub fn from_json_str(text: &str) -> anyhow::Result<Self> {
        serde_json::from_str(text).context("stroke script must be an array of [x, y] arrays")
    }

    /// Load a JSON file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading strokes {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("parsing strokes {}", path.display()))
    }

    /// Number of strokes
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no strokes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Replay every stroke as press, moves and release
    ///
    /// Empty strokes are skipped.
    pub fn replay(&self, pad: &mut SignaturePad) {
        for stroke in &self.0 {
            let Some(([x, y], rest)) = stroke.split_first() else {
                continue;
            };
            pad.begin(&mut PointerEvent::mouse(*x, *y));
            for [x, y] in rest {
                pad.extend(&mut PointerEvent::mouse(*x, *y));
            }
            pad.end();
        }
        tracing::debug!(strokes = self.0.len(), "stroke script replayed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use esign_signature::FixedHost;

    #[test]
    fn parses_nested_points() {
        let script = StrokeScript::from_json_str("[[[1, 2], [3.5, 4]], []]").unwrap();
        assert_eq!(script, StrokeScript::new(vec![vec![[1.0, 2.0], [3.5, 4.0]], vec![]]));
        assert_eq!(script.len(), 2);
    }

    #[test]
    fn rejects_flat_points() {
        assert!(StrokeScript::from_json_str("[[1, 2]]").is_err());
    }

    #[test]
    fn replay_draws_non_empty_strokes() {
        let (mut pad, _feed) = SignaturePad::new();
        pad.mount(FixedHost::new(0.0, 0.0, 100));
        let script = StrokeScript::new(vec![vec![], vec![[10.0, 10.0], [50.0, 50.0]]]);

        script.replay(&mut pad);

        assert_eq!(pad.strokes().len(), 1);
        assert!(pad.has_signature());
        assert!(!pad.is_drawing());
    }

    #[test]
    fn empty_script_leaves_pad_blank() {
        let (mut pad, _feed) = SignaturePad::new();
        pad.mount(FixedHost::new(0.0, 0.0, 100));
        StrokeScript::default().replay(&mut pad);
        assert!(pad.shows_placeholder());
    }
}
