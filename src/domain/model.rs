/// Directory holding one provider-configuration file per interface, relative to the resource root.
pub const SERVICES_DIRECTORY: &str = "META-INF/services";

#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    Appended,
    AlreadyPresent,
}

/// In-memory view of `META-INF/services/<interface>`: one implementation name per line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationFile {
    lines: Vec<String>,
}

impl RegistrationFile {
    /// Splits on `\r\n`, `\n`, lone `\r`, NEL (U+0085) and the Unicode line and paragraph
    /// separators (U+2028, U+2029). A final terminator does not open a new line.
    pub fn parse(content: &str) -> Self {
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut chars = content.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '\r' => {
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    lines.push(std::mem::take(&mut current));
                }
                '\n' | '\u{0085}' | '\u{2028}' | '\u{2029}' => {
                    lines.push(std::mem::take(&mut current))
                }
                other => current.push(other),
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }

        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Exact, case-sensitive whole-line comparison.
    pub fn contains(&self, implementation: &str) -> bool {
        self.lines.iter().any(|line| line == implementation)
    }

    pub fn append(&mut self, implementation: &str) -> AppendOutcome {
        if self.contains(implementation) {
            return AppendOutcome::AlreadyPresent;
        }
        self.lines.push(implementation.to_string());
        AppendOutcome::Appended
    }

    /// Separators only between lines, never after the last one.
    pub fn render(&self) -> String {
        self.lines.join(LINE_SEPARATOR)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationPreview {
    /// Registration file path relative to the resource root.
    pub path: std::path::PathBuf,
    pub file_exists: bool,
    pub contents: String,
}
