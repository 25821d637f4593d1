/// Canonical vendor alias table.
///
/// Configured vendor names are expanded into the substring fragments that
/// identify a distribution family, since runtime metadata strings vary
/// ("Eclipse Adoptium", "Temurin-21.0.2+13", "Amazon.com Inc."). Keep the
/// groups small and readable. Translating an alias into an actual
/// provisioning specification is the provisioner's job, not ours; a vendor
/// outside the table matches as its own lowercased literal.
pub fn vendor_fragments(vendor: &str) -> Vec<String> {
    match vendor.to_lowercase().as_str() {
        "amazon" | "amazon corretto" | "corretto" => corretto_family(),
        "adoptium" | "temurin" | "eclipse" | "eclipse temurin" => adoptium_family(),
        other => vec![other.to_string()],
    }
}

fn corretto_family() -> Vec<String> {
    vec!["amazon".to_string(), "corretto".to_string()]
}

fn adoptium_family() -> Vec<String> {
    vec![
        "adoptium".to_string(),
        "temurin".to_string(),
        "eclipse".to_string(),
    ]
}
