use std::collections::BTreeSet;

/// Immutable verification policy for one run.
///
/// Constructed once from configuration and passed by parameter through the
/// pipeline; evaluation never consults ambient project state. Vendor
/// fragments are stored lowercased so matching is case-insensitive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Policy {
    allowed_majors: BTreeSet<u16>,
    vendor_fragments: Vec<String>,
}

impl Policy {
    pub fn new<M, F>(allowed_majors: M, vendor_fragments: F) -> Self
    where
        M: IntoIterator<Item = u16>,
        F: IntoIterator<Item = String>,
    {
        Self {
            allowed_majors: allowed_majors.into_iter().collect(),
            vendor_fragments: vendor_fragments
                .into_iter()
                .map(|f| f.to_lowercase())
                .collect(),
        }
    }

    pub fn version_allowed(&self, major: u16) -> bool {
        self.allowed_majors.contains(&major)
    }

    /// True when `vendor` contains at least one policy fragment, compared
    /// case-insensitively. Substring matching is deliberate: vendor
    /// identification strings vary across distributions and may carry
    /// extra qualifiers.
    pub fn vendor_matches(&self, vendor: &str) -> bool {
        let vendor = vendor.to_lowercase();
        self.vendor_fragments.iter().any(|f| vendor.contains(f.as_str()))
    }

    pub fn allowed_majors(&self) -> &BTreeSet<u16> {
        &self.allowed_majors
    }

    pub fn vendor_fragments(&self) -> &[String] {
        &self.vendor_fragments
    }
}
