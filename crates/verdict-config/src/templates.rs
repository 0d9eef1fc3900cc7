//! Configuration templates for `verdict init`.
//!
//! Templates are stored as valid TOML and handed out with every setting commented, so a fresh
//! file changes nothing until the user opts in.

/// Local configuration template (valid TOML).
const LOCAL_TEMPLATE: &str = include_str!("../templates/config.toml");

/// Global configuration template (valid TOML).
const GLOBAL_TEMPLATE: &str = include_str!("../templates/config-global.toml");

/// Returns the local configuration template as a commented-out example.
pub fn local_template() -> String {
    comment_out(LOCAL_TEMPLATE)
}

/// Returns the global configuration template as a commented-out example.
pub fn global_template() -> String {
    comment_out(GLOBAL_TEMPLATE)
}

/// Prefixes every non-empty, non-comment line with `# `.
fn comment_out(template: &str) -> String {
    template
        .lines()
        .map(|line| {
            if line.is_empty() || line.starts_with('#') {
                format!("{line}\n")
            } else {
                format!("# {line}\n")
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::parse::parse_config_str;

    #[test]
    fn templates_are_valid_toml() {
        for (name, template) in [("local", LOCAL_TEMPLATE), ("global", GLOBAL_TEMPLATE)] {
            let result = parse_config_str(template, Path::new(name));
            assert!(result.is_ok(), "{name} template failed to parse: {result:?}");
        }
    }

    #[test]
    fn commented_template_parses_as_empty() {
        let config = parse_config_str(&local_template(), Path::new("local")).unwrap();
        assert!(config.clustering.is_none());
        assert!(config.lexicon.is_none());
    }

    #[test]
    fn comment_out_keeps_comments_and_blank_lines() {
        assert_eq!(
            comment_out("# note\n[clustering]\n\nseed = 1\n"),
            "# note\n# [clustering]\n\n# seed = 1\n"
        );
    }
}
