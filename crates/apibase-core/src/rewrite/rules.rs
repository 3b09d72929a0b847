//! Substitution rules for the legacy backend origin.

use regex::{Captures, Regex};

/// The four literal shapes the legacy origin appears in, compiled once per run.
///
/// | shape                      | rewritten to              |
/// |----------------------------|---------------------------|
/// | `'ORIGIN/api/x'`           | `` `${CONST}/api/x` ``    |
/// | `"ORIGIN/api/x"`           | `` `${CONST}/api/x` ``    |
/// | `` `ORIGIN${expr}` ``      | `` `${CONST}${expr}` ``   |
/// | `ORIGIN${expr}` (template) | `${CONST}${expr}`         |
#[derive(Debug, Clone)]
pub struct RewriteRules {
    constant: String,
    single_quoted: Regex,
    double_quoted: Regex,
    template: Regex,
    embedded: Regex,
}

impl RewriteRules {
    pub fn new(legacy_origin: &str, constant: &str) -> Result<Self, regex::Error> {
        let origin = regex::escape(legacy_origin.trim_end_matches('/'));
        Ok(Self {
            constant: constant.to_string(),
            single_quoted: Regex::new(&format!(r"'{origin}(/api/[^']+)'"))?,
            double_quoted: Regex::new(&format!(r#""{origin}(/api/[^"]+)""#))?,
            template: Regex::new(&format!(r"`{origin}\$\{{([^}}]+)\}}`"))?,
            embedded: Regex::new(&format!(r"{origin}\$\{{([^}}]+)\}}"))?,
        })
    }

    /// Applies every rule in order, returning the new text and the number of
    /// replacements made.
    pub fn apply(&self, text: &str) -> (String, usize) {
        let c = &self.constant;
        let mut total = 0;

        let (out, n) = replace_counted(&self.single_quoted, text, |caps| {
            format!("`${{{c}}}{}`", &caps[1])
        });
        total += n;
        let (out, n) = replace_counted(&self.double_quoted, &out, |caps| {
            format!("`${{{c}}}{}`", &caps[1])
        });
        total += n;
        let (out, n) = replace_counted(&self.template, &out, |caps| {
            format!("`${{{c}}}${{{}}}`", &caps[1])
        });
        total += n;
        let (out, n) = replace_counted(&self.embedded, &out, |caps| {
            format!("${{{c}}}${{{}}}", &caps[1])
        });
        total += n;

        (out, total)
    }
}

fn replace_counted<F>(re: &Regex, text: &str, mut render: F) -> (String, usize)
where
    F: FnMut(&Captures<'_>) -> String,
{
    let mut count = 0;
    let out = re
        .replace_all(text, |caps: &Captures<'_>| {
            count += 1;
            render(caps)
        })
        .into_owned();
    if count > 0 {
        tracing::debug!(pattern = re.as_str(), count, "rule matched");
    }
    (out, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> RewriteRules {
        RewriteRules::new("https://caps-em1t.onrender.com", "API_BASE_URL").unwrap()
    }

    #[test]
    fn single_quoted_api_literal() {
        let (out, n) = rules().apply("fetch('https://caps-em1t.onrender.com/api/foo')");
        assert_eq!(out, "fetch(`${API_BASE_URL}/api/foo`)");
        assert_eq!(n, 1);
    }

    #[test]
    fn double_quoted_api_literal() {
        let (out, n) =
            rules().apply(r#"axios.get("https://caps-em1t.onrender.com/api/houses/")"#);
        assert_eq!(out, "axios.get(`${API_BASE_URL}/api/houses/`)");
        assert_eq!(n, 1);
    }

    #[test]
    fn whole_template_with_interpolation() {
        let (out, n) = rules().apply("const u = `https://caps-em1t.onrender.com${path}`;");
        assert_eq!(out, "const u = `${API_BASE_URL}${path}`;");
        assert_eq!(n, 1);
    }

    #[test]
    fn embedded_in_larger_template() {
        let (out, n) =
            rules().apply("<img src={`https://caps-em1t.onrender.com${house.image}?v=2`} />");
        assert_eq!(out, "<img src={`${API_BASE_URL}${house.image}?v=2`} />");
        assert_eq!(n, 1);
    }

    #[test]
    fn counts_across_rules() {
        let src = "a('https://caps-em1t.onrender.com/api/a');\n\
                   b(\"https://caps-em1t.onrender.com/api/b\");\n\
                   c(`https://caps-em1t.onrender.com${x}`);\n";
        let (out, n) = rules().apply(src);
        assert_eq!(n, 3);
        assert!(!out.contains("caps-em1t"));
    }

    #[test]
    fn non_api_literals_untouched() {
        let src = "'https://caps-em1t.onrender.com/media/a.png' 'https://caps-em1t.onrender.com'";
        let (out, n) = rules().apply(src);
        assert_eq!(n, 0);
        assert_eq!(out, src);
    }

    #[test]
    fn origin_dots_are_literal() {
        let (_, n) = rules().apply("'https://caps-em1tXonrenderXcom/api/foo'");
        assert_eq!(n, 0);
    }

    #[test]
    fn rewritten_text_is_stable() {
        let (once, _) = rules().apply("x('https://caps-em1t.onrender.com/api/foo')");
        let (twice, n) = rules().apply(&once);
        assert_eq!(n, 0);
        assert_eq!(once, twice);
    }
}
