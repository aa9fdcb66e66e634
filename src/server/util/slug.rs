/// Builds a URL slug from a display name.
///
/// Lowercases the name and joins runs of alphanumeric characters with single hyphens.
pub fn slugify(name: &str) -> String {
    name.split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
