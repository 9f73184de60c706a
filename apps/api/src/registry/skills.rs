/// Splits a comma-separated skill list, trimming each entry.
/// Entries that are blank after trimming are dropped.
pub fn parse_skills(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
