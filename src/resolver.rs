//! Glyph resolution.
//!
//! [`resolve`] walks a [`RuleRegistry`] in priority order and returns the
//! glyph of the first rule that both has an entry in the glyph mapping and
//! matches the window.  Rules without a glyph are skipped before their
//! predicate runs, so an unmapped specialisation (say `youtube`) falls
//! through to the broader rule (`browser`).
//!
//! No match is `Ok(None)`; the caller picks its own fallback glyph.

use crate::registry::{PredicateFailure, RuleRegistry};
use crate::window::WindowDescriptor;
use log::debug;
use std::collections::HashMap;

/// Mapping from app name to glyph, as read from configuration.
pub type GlyphMapping = HashMap<String, String>;

/// A predicate failed while being evaluated against a window.
#[derive(Debug, thiserror::Error)]
#[error("app definition {app_name:?} failed on window {window}: {source}")]
pub struct PredicateEvaluationError {
    pub app_name: String,
    pub window: String,
    #[source]
    pub source: PredicateFailure,
}

/// Pick the glyph for `window`.
///
/// Predicate failures propagate; evaluation stops at the first rule that
/// fails or matches.
pub fn resolve<'g>(
    registry: &RuleRegistry,
    window: &WindowDescriptor,
    glyphs: &'g GlyphMapping,
) -> Result<Option<&'g str>, PredicateEvaluationError> {
    for rule in registry.rules() {
        let Some(glyph) = glyphs.get(rule.app_name()) else {
            continue;
        };
        let matched = rule.evaluate(window).map_err(|source| PredicateEvaluationError {
            app_name: rule.app_name().to_string(),
            window: window.to_string(),
            source,
        })?;
        if matched {
            debug!("{} matched {}", window, rule.app_name());
            return Ok(Some(glyph.as_str()));
        }
    }
    debug!("no app definition matched {}", window);
    Ok(None)
}
