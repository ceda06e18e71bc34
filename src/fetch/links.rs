// src/fetch/links.rs

use anyhow::{Context, Result};
use url::Url;

/// Substring that marks a cell link as pointing at a full license text page.
pub const LICENSE_TEXT_MARKER: &str = "licenseText";

pub fn is_license_text_link(href: &str) -> bool {
    href.contains(LICENSE_TEXT_MARKER)
}

/// Resolve a cell `href` against the listing page URL.
///
/// The base is treated as a directory, so `https://spdx.org/licenses` and
/// `https://spdx.org/licenses/` resolve `./MIT.html` the same way.
/// Absolute hrefs come back unchanged.
pub fn resolve(base: &Url, href: &str) -> Result<Url> {
    let mut dir = base.clone();
    if !dir.path().ends_with('/') {
        let path = format!("{}/", dir.path());
        dir.set_path(&path);
    }
    dir.join(href)
        .with_context(|| format!("resolving link {:?} against {}", href, base))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://spdx.org/licenses").unwrap()
    }

    #[test]
    fn marker_is_a_plain_substring_match() {
        assert!(is_license_text_link("licenseText/MIT.html"));
        assert!(is_license_text_link("./MIT.html#licenseText"));
        assert!(!is_license_text_link("./MIT.html"));
        assert!(!is_license_text_link("licensetext/MIT.html"));
    }

    #[test]
    fn relative_href_lands_under_base() {
        let url = resolve(&base(), "./MIT.html").unwrap();
        assert_eq!(url.as_str(), "https://spdx.org/licenses/MIT.html");

        let url = resolve(&base(), "licenseText/MIT.html").unwrap();
        assert_eq!(url.as_str(), "https://spdx.org/licenses/licenseText/MIT.html");
    }

    #[test]
    fn trailing_slash_on_base_makes_no_difference() {
        let slashed = Url::parse("https://spdx.org/licenses/").unwrap();
        assert_eq!(
            resolve(&slashed, "licenseText/MIT.html").unwrap(),
            resolve(&base(), "licenseText/MIT.html").unwrap()
        );
    }

    #[test]
    fn absolute_and_root_relative_hrefs() {
        let url = resolve(&base(), "https://example.org/licenseText/0BSD").unwrap();
        assert_eq!(url.as_str(), "https://example.org/licenseText/0BSD");

        let url = resolve(&base(), "/licenseText/0BSD").unwrap();
        assert_eq!(url.as_str(), "https://spdx.org/licenseText/0BSD");
    }

    #[test]
    fn malformed_href_is_an_error() {
        let err = resolve(&base(), "http://[::1/licenseText").unwrap_err();
        assert!(err.to_string().contains("resolving link"));
    }
}
