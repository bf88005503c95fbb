use std::collections::HashSet;

pub fn should_honor(plugin_name: &str, subjects: &HashSet<String>) -> bool {
    subjects.contains(plugin_name)
}

pub fn parse_subject_plugins(raw: &str) -> HashSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
