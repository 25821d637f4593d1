//! Class-file major-version numbers and their Java release labels.
//!
//! The JVM specification fixes the mapping (release N compiles to major
//! N + 44 since Java 1.2's major 46). The table below is data: config can
//! extend it via `[version_labels]` without code changes.

use std::collections::BTreeMap;

/// Offset between a Java release number and its class-file major version.
pub const MAJOR_OFFSET: u16 = 44;

/// Built-in major -> release label table.
pub const VERSION_LABELS: &[(u16, &str)] = &[
    (45, "1.1"),
    (46, "1.2"),
    (47, "1.3"),
    (48, "1.4"),
    (49, "5"),
    (50, "6"),
    (51, "7"),
    (52, "8"),
    (53, "9"),
    (54, "10"),
    (55, "11"),
    (56, "12"),
    (57, "13"),
    (58, "14"),
    (59, "15"),
    (60, "16"),
    (61, "17"),
    (62, "18"),
    (63, "19"),
    (64, "20"),
    (65, "21"),
    (66, "22"),
    (67, "23"),
    (68, "24"),
];

/// Class-file major version for a Java release (21 -> 65).
pub fn release_to_major(release: u32) -> u16 {
    u16::try_from(release.saturating_add(u32::from(MAJOR_OFFSET))).unwrap_or(u16::MAX)
}

/// Java release for a class-file major version (65 -> 21).
pub fn major_to_release(major: u16) -> u32 {
    u32::from(major.saturating_sub(MAJOR_OFFSET))
}

/// Release label for a major version, consulting `extra` entries first so
/// config-supplied labels can cover releases newer than the built-in table.
pub fn label_for_major(major: u16, extra: &BTreeMap<u16, String>) -> Option<String> {
    if let Some(label) = extra.get(&major) {
        return Some(label.clone());
    }
    VERSION_LABELS
        .iter()
        .find(|(m, _)| *m == major)
        .map(|(_, label)| (*label).to_string())
}
