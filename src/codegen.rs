use chrono::{DateTime, Utc};
use icu_properties::{maps, sets, GeneralCategoryGroup};
use url::Url;

use crate::extract::Category;

/// How timestamps appear in the banner and in progress messages, e.g. `2024-05-01 09:30:00 +0000`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Turns a display name into an identifier: whitespace, punctuation and math symbols are
/// dropped, then only the first remaining character is lower-cased.
///
/// `"SF Pro"` becomes `"sFPro"`, not `"sfPro"`.
pub fn identifier(name: &str) -> String {
    let mut chars = name.chars().filter(|&c| !is_stripped(c));
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Whitespace, any `P*` category, or the Unicode `Math` property (`Sm` plus `Other_Math`,
/// so `^`, `ϑ` and the mathematical alphanumerics go too).
fn is_stripped(c: char) -> bool {
    c.is_whitespace()
        || GeneralCategoryGroup::Punctuation.contains(maps::general_category().get(c))
        || sets::math().contains(c)
}

/// Renders one `case` line per name, in the given order, between two identical banners.
///
/// Names are neither deduplicated nor escaped.
pub fn generate<S: AsRef<str>>(
    names: &[S],
    category: Category,
    source: &Url,
    generated_at: DateTime<Utc>,
) -> String {
    let banner = format!(
        "// Generated: For {category} on {}, {} fonts\n// Extracted from {source}\n",
        generated_at.format(TIMESTAMP_FORMAT),
        names.len(),
    );
    let cases = names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            format!("case {} = \"{name}\"\n", identifier(name))
        })
        .collect::<String>();
    format!("{banner}{cases}{banner}")
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use url::Url;

    use crate::extract::Category;

    use super::{generate, identifier};

    #[test]
    fn derive_identifier() {
        assert_eq!(identifier("SF Pro"), "sFPro");
        assert_eq!(identifier("New York"), "newYork");
        assert_eq!(identifier("Menlo"), "menlo");
        assert_eq!(identifier("sf mono"), "sfmono");
        assert_eq!(identifier("Avenir Next Condensed"), "avenirNextCondensed");
        assert_eq!(identifier("Apple SD Gothic Neo"), "appleSDGothicNeo");
        assert_eq!(identifier("Hoefler Text (Ornaments)"), "hoeflerTextOrnaments");
        assert_eq!(identifier("Didot-Italic_Bold"), "didotItalicBold");
        assert_eq!(identifier("A+B=C<D>|~¬±×÷"), "aBCD");
        assert_eq!(identifier("Ärial\u{3000}Unicode"), "ärialUnicode");
        assert_eq!(identifier("  «Baskerville»  "), "baskerville");
        // `^` is a modifier symbol but has the Math property; currency symbols stay
        assert_eq!(identifier("US$ ^"), "uS$");
        assert_eq!(identifier("Aϑ"), "a");
        assert_eq!(identifier("X𝐀"), "x");
        assert_eq!(identifier("𝐀lpha"), "lpha");
        assert_eq!(identifier("2 Columns"), "2Columns");
        assert_eq!(identifier(""), "");
        assert_eq!(identifier(" - . + "), "");
    }

    #[test]
    fn identifier_is_idempotent() {
        for name in ["SF Pro", "New York", "Hiragino Kaku Gothic ProN", "Ärial", "a+b", "Aϑ^", ""] {
            let once = identifier(name);
            assert_eq!(identifier(&once), once);
        }
    }

    fn url() -> Url {
        Url::parse("https://developer.apple.com/fonts/system-fonts/").unwrap()
    }

    #[test]
    fn generate_cases() {
        let generated_at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        let output = generate(&["SF Pro", "New York"], Category::Ios, &url(), generated_at);
        assert_eq!(
            output,
            "\
// Generated: For iOS system font on 2024-05-01 09:30:00 +0000, 2 fonts
// Extracted from https://developer.apple.com/fonts/system-fonts/
case sFPro = \"SF Pro\"
case newYork = \"New York\"
// Generated: For iOS system font on 2024-05-01 09:30:00 +0000, 2 fonts
// Extracted from https://developer.apple.com/fonts/system-fonts/
"
        );
    }

    #[test]
    fn generate_colliding_identifiers() {
        let generated_at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        let output = generate(&["SF-Pro", "SF Pro"], Category::Macos, &url(), generated_at);
        let cases = output
            .lines()
            .filter(|line| line.starts_with("case "))
            .collect::<Vec<_>>();
        assert_eq!(
            cases,
            ["case sFPro = \"SF-Pro\"", "case sFPro = \"SF Pro\""]
        );
        assert!(output.starts_with("// Generated: For macOS system font on "));
    }

    #[test]
    fn generate_nothing() {
        let generated_at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        let output = generate::<String>(&[], Category::Macos, &url(), generated_at);
        let banner = "\
// Generated: For macOS system font on 2024-05-01 09:30:00 +0000, 0 fonts
// Extracted from https://developer.apple.com/fonts/system-fonts/
";
        assert_eq!(output, format!("{banner}{banner}"));
    }
}
