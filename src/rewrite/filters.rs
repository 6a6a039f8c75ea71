use regex::Regex;

fn default_script_filter() -> &'static Regex {
    use std::sync::OnceLock;

    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\.(js|ts|jsx|tsx)$").expect("invalid script extension regex")
    })
}

/// Determine whether an output file should be scanned for relative imports.
///
/// When no filter is supplied the default pattern matches the common script
/// extensions, since those are the files whose import clauses the host will
/// actually resolve at load time.
pub fn is_rewrite_target(file_name: &str, file_filter: Option<&Regex>) -> bool {
    file_filter
        .unwrap_or_else(|| default_script_filter())
        .is_match(file_name)
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::is_rewrite_target;

    #[test]
    fn matches_script_extensions_by_default() {
        assert!(is_rewrite_target("chunk.js", None));
        assert!(is_rewrite_target("chunk.ts", None));
        assert!(is_rewrite_target("widget.jsx", None));
        assert!(is_rewrite_target("widget.tsx", None));
    }

    #[test]
    fn skips_non_script_files_by_default() {
        assert!(!is_rewrite_target("styles.css", None));
        assert!(!is_rewrite_target("logo.svg", None));
        assert!(!is_rewrite_target("module.js.map", None));
    }

    #[test]
    fn honours_a_custom_filter() {
        let filter = Regex::new(r"\.css$").unwrap();
        assert!(is_rewrite_target("styles.css", Some(&filter)));
        assert!(!is_rewrite_target("chunk.js", Some(&filter)));
    }
}
