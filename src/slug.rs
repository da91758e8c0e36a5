use regex::Regex;
use std::sync::OnceLock;

static SEPARATOR_REGEX: OnceLock<Regex> = OnceLock::new();

/// Turn a display name into a URL slug.
///
/// Lower-cases the input, collapses every run of non-alphanumeric characters
/// into a single `-`, and trims leading and trailing `-`. Deterministic and
/// total: any input yields a (possibly empty) slug.
pub fn slugify(name: &str) -> String {
    let regex = SEPARATOR_REGEX.get_or_init(|| Regex::new(r"[^\p{L}\p{N}]+").unwrap());

    let lowered = name.to_lowercase();
    regex
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_tool_name() {
        assert_eq!(slugify("Payroll Tax Calculator"), "payroll-tax-calculator");
    }

    #[test]
    fn test_slugify_collapses_punctuation_runs() {
        assert_eq!(slugify("VAT / GST Calculator"), "vat-gst-calculator");
        assert_eq!(slugify("Capital Gains  Tax"), "capital-gains-tax");
    }

    #[test]
    fn test_slugify_trims_edges() {
        assert_eq!(slugify("  (Estimated) Tax! "), "estimated-tax");
    }

    #[test]
    fn test_slugify_keeps_non_ascii_letters() {
        assert_eq!(slugify("Lohnsteuer Rechner Österreich"), "lohnsteuer-rechner-österreich");
    }

    #[test]
    fn test_slugify_digits() {
        assert_eq!(slugify("401(k) Planner"), "401-k-planner");
    }

    #[test]
    fn test_slugify_empty_and_symbols_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("---"), "");
    }
}
