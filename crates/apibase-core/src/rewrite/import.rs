//! Import detection and insertion for the resolver constant.

use regex::Regex;
use std::sync::OnceLock;

/// Single-line `import ... from '...'` statement at the start of a line.
fn import_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"^import .+ from ['"].+['"];?\s*$"#).expect("static import regex")
    })
}

/// The import statement the migrated code relies on.
#[derive(Debug, Clone)]
pub struct ImportSpec {
    pub constant: String,
    pub module: String,
    /// Named import list containing the constant: `import { a, CONST } from`.
    named: Regex,
}

impl ImportSpec {
    pub fn new(
        constant: impl Into<String>,
        module: impl Into<String>,
    ) -> Result<Self, regex::Error> {
        let constant = constant.into();
        let named = Regex::new(&format!(
            r"import\s*\{{[^}}]*\b{}\b[^}}]*\}}\s*from",
            regex::escape(&constant)
        ))?;
        Ok(Self {
            constant,
            module: module.into(),
            named,
        })
    }

    pub fn statement(&self) -> String {
        format!("import {{ {} }} from '{}';", self.constant, self.module)
    }

    /// Whether `text` already imports the constant by name. Other names
    /// imported from the same module do not count.
    pub fn is_present(&self, text: &str) -> bool {
        self.named.is_match(text)
    }

    /// Inserts the statement after the last line of the first block of
    /// consecutive import lines. Files without imports get it on line one.
    ///
    /// Returns `None` when the import is already present.
    pub fn insert(&self, text: &str) -> Option<String> {
        if self.is_present(text) {
            return None;
        }
        let stmt = self.statement();

        let Some((end, newline)) = last_leading_import_end(text) else {
            let newline = if text.contains("\r\n") { "\r\n" } else { "\n" };
            return Some(format!("{stmt}{newline}{text}"));
        };

        let mut out = String::with_capacity(text.len() + stmt.len() + 2);
        out.push_str(&text[..end]);
        out.push_str(newline);
        out.push_str(&stmt);
        out.push_str(&text[end..]);
        Some(out)
    }
}

/// Byte offset just past the content of the last line in the first run of
/// import lines (before its line terminator), plus that terminator style.
fn last_leading_import_end(text: &str) -> Option<(usize, &'static str)> {
    let re = import_line();
    let mut offset = 0;
    let mut found: Option<(usize, &'static str)> = None;

    for line in text.split_inclusive('\n') {
        let (content, newline) = match line.strip_suffix("\r\n") {
            Some(c) => (c, "\r\n"),
            None => (line.strip_suffix('\n').unwrap_or(line), "\n"),
        };
        if re.is_match(content) {
            found = Some((offset + content.len(), newline));
        } else if found.is_some() {
            break;
        }
        offset += line.len();
    }

    found
}
