//! Release range resolution
//!
//! `~..REV` stands for "everything since the previous release up to REV".
//! The previous release is looked up among the repository tags that are
//! valid semantic versions (an optional leading `v`/`V` is ignored).

use std::cmp::Ordering;

use semver::Version;
use tracing::{debug, info, instrument};

use crate::types::TagInfo;

/// Prefix marking a range that starts at the previous release
pub const SINCE_LAST_RELEASE: &str = "~..";

/// Outcome of resolving a commit range expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeResolution {
    /// Concrete range to hand to the repository
    pub range: String,
    /// Advisory message for the user, never fatal
    pub warning: Option<String>,
}

impl RangeResolution {
    fn unchanged(range: &str) -> Self {
        Self {
            range: range.to_string(),
            warning: None,
        }
    }

    // The caller shows `warning` to the user, so the event stays below `warn`.
    fn with_warning(range: String, warning: String) -> Self {
        info!(range = %range, "{}", warning);
        Self {
            range,
            warning: Some(warning),
        }
    }

    fn since(tag: &TagInfo, rest: &str, warning: impl FnOnce(&str) -> String) -> Self {
        debug!(tag = %tag.name, commit = %tag.commit_hash, "previous release tag");
        let range = format!("{}..{}", tag.name, rest);
        let warning = warning(&range);
        Self::with_warning(range, warning)
    }
}

/// Parse a tag or title as a semantic version, ignoring one leading `v`/`V`
pub fn parse_version(name: &str) -> Option<Version> {
    let bare = name
        .strip_prefix('v')
        .or_else(|| name.strip_prefix('V'))
        .unwrap_or(name);
    Version::parse(bare).ok()
}

/// Resolve a `~..` range against the given tags.
///
/// Any other expression passes through unchanged. With a semver release
/// title the closest tag strictly below the title is used; otherwise the
/// latest semver tag is used. When no tag qualifies the range starts at the
/// beginning of history (`~..` is dropped).
#[instrument(skip(tags), fields(tag_count = tags.len()))]
pub fn resolve_range(range: &str, release_title: &str, tags: &[TagInfo]) -> RangeResolution {
    let Some(rest) = range.strip_prefix(SINCE_LAST_RELEASE) else {
        return RangeResolution::unchanged(range);
    };

    let versions: Vec<(&TagInfo, Version)> = tags
        .iter()
        .filter_map(|t| parse_version(&t.name).map(|v| (t, v)))
        .collect();
    debug!(valid = versions.len(), "semver tags found");

    match parse_version(release_title) {
        Some(target) => match closest_previous(&target, &versions) {
            Some(tag) => RangeResolution::since(tag, rest, |resolved| {
                format!("Using commit range '{}'", resolved)
            }),
            None => RangeResolution::with_warning(
                rest.to_string(),
                format!(
                    "No valid semver tags found, starting from beginning to commit '{}'",
                    rest
                ),
            ),
        },
        None => match latest(versions.iter()) {
            Some(tag) => RangeResolution::since(tag, rest, |resolved| {
                format!(
                    "Release title is not a valid semver, using latest semver tag '{}'",
                    resolved
                )
            }),
            None => RangeResolution::with_warning(
                rest.to_string(),
                format!(
                    "No valid semver release title or tags found, starting from beginning to commit '{}'",
                    rest
                ),
            ),
        },
    }
}

/// Greatest version strictly below `target`
fn closest_previous<'a>(
    target: &Version,
    versions: &'a [(&'a TagInfo, Version)],
) -> Option<&'a TagInfo> {
    latest(
        versions
            .iter()
            .filter(|(_, v)| v.cmp_precedence(target) == Ordering::Less),
    )
}

/// Greatest version by semver precedence; the first of equal versions wins
fn latest<'a, I>(versions: I) -> Option<&'a TagInfo>
where
    I: Iterator<Item = &'a (&'a TagInfo, Version)>,
{
    let mut best: Option<&'a (&'a TagInfo, Version)> = None;
    for candidate in versions {
        match best {
            Some((_, v)) if candidate.1.cmp_precedence(v) != Ordering::Greater => {}
            _ => best = Some(candidate),
        }
    }
    best.map(|(tag, _)| *tag)
}
