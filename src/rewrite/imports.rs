use std::borrow::Cow;

use regex::{Captures, Regex};

fn import_clause_pattern() -> &'static Regex {
    use std::sync::OnceLock;

    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r#"from\s+['"](\./.+?)['"]|import\s+['"](\./.+?)['"]|import\s*\(\s*['"](\./.+?)['"]\s*\)"#,
        )
        .expect("invalid import clause regex")
    })
}

/// Rewrite every relative import path in `code`, prepending `prefix`.
///
/// A single left-to-right pass matches three import forms, with single or
/// double quotes:
///
/// - `from "./path"` — a static import's source clause,
/// - `import "./path"` — a side-effect-only static import,
/// - `import("./path")` — a dynamic import, tolerating whitespace around the
///   parentheses and the path string.
///
/// Each matched path has exactly one leading `./` stripped before the prefix
/// is prepended; quotes, keywords, parentheses and whitespace are preserved
/// as found. Sources that do not begin with `./` never match, so bare package
/// names and absolute paths pass through untouched. Content without a match is
/// returned borrowed and byte-identical.
pub fn prefix_relative_imports<'a>(code: &'a str, prefix: &str) -> Cow<'a, str> {
    import_clause_pattern().replace_all(code, |caps: &Captures| {
        let clause = &caps[0];
        let Some(path) = caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3)) else {
            return clause.to_string();
        };
        let path = path.as_str();
        let stripped = path.strip_prefix("./").unwrap_or(path);
        clause.replacen(path, &format!("{prefix}{stripped}"), 1)
    })
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::prefix_relative_imports;

    #[test]
    fn prefixes_a_static_import_with_from_clause() {
        let result = prefix_relative_imports("import { x } from './m';", "/p/");
        assert_eq!(result, "import { x } from '/p/m';");
    }

    #[test]
    fn prefixes_a_side_effect_import() {
        let result = prefix_relative_imports("import './m';", "/p/");
        assert_eq!(result, "import '/p/m';");
    }

    #[test]
    fn prefixes_a_dynamic_import() {
        let result = prefix_relative_imports("const m = import('./m');", "/p/");
        assert_eq!(result, "const m = import('/p/m');");
    }

    #[test]
    fn prefixes_a_dynamic_import_with_interior_whitespace() {
        let result = prefix_relative_imports("const m = import( './m' );", "/p/");
        assert_eq!(result, "const m = import( '/p/m' );");
    }

    #[test]
    fn handles_double_quoted_imports() {
        let result = prefix_relative_imports(r#"import { x } from "./m";"#, "/p/");
        assert_eq!(result, r#"import { x } from "/p/m";"#);
    }

    #[test]
    fn keeps_file_extensions_in_rewritten_paths() {
        let code = "import './m.js'; import 'pkg';";
        let result = prefix_relative_imports(code, "/p/");
        assert_eq!(result, "import '/p/m.js'; import 'pkg';");
    }

    #[test]
    fn rewrites_every_import_in_a_chunk() {
        let code = "import { a } from './one';\nimport './two';\nconst three = import('./three');\n";
        let result = prefix_relative_imports(code, "/p/");
        assert_eq!(
            result,
            "import { a } from '/p/one';\nimport '/p/two';\nconst three = import('/p/three');\n"
        );
    }

    #[test]
    fn rewrites_nested_paths() {
        let result = prefix_relative_imports("import { x } from './nested/path/module';", "/p/");
        assert_eq!(result, "import { x } from '/p/nested/path/module';");
    }

    #[test]
    fn strips_exactly_one_leading_dot_slash() {
        let result = prefix_relative_imports("import './././m';", "/p/");
        assert_eq!(result, "import '/p/././m';");
    }

    #[test]
    fn leaves_non_relative_imports_untouched() {
        let code = "import { x } from 'pkg';\nimport 'polyfill';\nconst m = import('/already/abs');\n";
        assert_eq!(prefix_relative_imports(code, "/p/"), code);
    }

    #[test]
    fn returns_borrowed_content_when_nothing_matches() {
        let code = "const greeting = 'hello';\n";
        let result = prefix_relative_imports(code, "/p/");
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, code);
    }
}
