/// Strip a target name down to ASCII alphanumerics.
///
/// Asset-set names referenced from build settings (`AppIcon...`,
/// `LaunchImage...`) must not contain spaces or punctuation, while target
/// names may.
pub fn stripped(name: &str) -> String {
    name.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}
