//! Default configuration values

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".clog.yaml";

/// Default trim pattern, one or more whitespace characters
pub const DEFAULT_TRIM: &str = r"\s+";

/// Default label for unclassified commits
pub const DEFAULT_OTHERS_HEADING: &str = "Others";

/// Default label for the breaking changes section
pub const DEFAULT_BREAKING_CHANGES_HEADING: &str = "BREAKING CHANGES";

/// Default release title placeholder
pub const DEFAULT_RELEASE_TITLE: &str = "vX.Y.Z";

pub(crate) fn default_trim() -> String {
    DEFAULT_TRIM.to_string()
}

/// Starter configuration for Conventional Commits
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# clgen configuration

# Ticket prefixes such as "[ABC-123]" or "ABC-123:" are dropped first
pre_captures:
  - '\[[A-Z]+-\d+\]'
  - '[A-Z]+-\d+:'
pre_captures_after_trim: '\s+'

# Group 1 is the type token, group 2 the optional "!" breaking marker
type_captures:
  - '(\w+)(?:\([^)]*\))?(!)?:'
type_captures_after_trim: '\s+'
type_captures_allow_breaking_change_group: true

breaking_change_line_captures:
  - 'BREAKING[ -]CHANGE:'
breaking_change_line_captures_after_trim: '\s+'

title_left_trim: '\s+'
title_right_trim: '\s+'

supported_types:
  feat: feat
  fix: fix
  perf: perf
  docs: docs

headings:
  feat: Features
  fix: Bug Fixes
  perf: Performance
  docs: Documentation

others_heading: Others
breaking_changes_heading: BREAKING CHANGES
capitalize_title_first_char: true
"#;
