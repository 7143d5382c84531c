use thiserror::Error;

use super::file::{ConfigFile, Entry};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {message}")]
pub struct ParseError {
    pub line: usize,
    pub message: String,
}

impl ParseError {
    fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

pub fn parse(input: &str) -> Result<ConfigFile, ParseError> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let mut file = ConfigFile::empty();
    let mut current: Option<String> = None;
    let mut pending_comments = Vec::new();
    let mut in_nested_block = false;

    for (index, raw_line) in input.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();

        if line.is_empty() {
            continue;
        }

        if line.starts_with('#') || line.starts_with(';') {
            pending_comments.push(line.to_string());
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let name = header
                .strip_suffix(']')
                .ok_or_else(|| ParseError::new(line_number, "unterminated section header"))?
                .trim();
            if name.is_empty() {
                return Err(ParseError::new(line_number, "empty section name"));
            }

            file.section_or_insert(name)
                .push_comments(std::mem::take(&mut pending_comments));
            current = Some(name.to_string());
            in_nested_block = false;
            continue;
        }

        let Some(section_name) = current.as_deref() else {
            return Err(ParseError::new(
                line_number,
                "key appears before any section header",
            ));
        };

        let Some(split_at) = line.find(['=', ':']) else {
            return Err(ParseError::new(
                line_number,
                format!("expected `key = value`, found `{line}`"),
            ));
        };

        let key = line[..split_at].trim();
        if key.is_empty() {
            return Err(ParseError::new(line_number, "empty key"));
        }

        // An indented line only nests under a key with no value (e.g. `s3 =`).
        let indent_len = raw_line.len() - raw_line.trim_start().len();
        let nested = indent_len > 0 && in_nested_block;
        let value = line[split_at + 1..].trim().to_string();
        in_nested_block = nested || value.is_empty();

        let entry = Entry {
            indent: if nested {
                raw_line[..indent_len].to_string()
            } else {
                String::new()
            },
            key: key.to_string(),
            value,
            comments: std::mem::take(&mut pending_comments),
        };

        file.section_or_insert(section_name).push_entry(entry);
    }

    file.set_trailing_comments(pending_comments);
    Ok(file)
}

pub fn render(file: &ConfigFile) -> String {
    let mut out = String::new();

    for (index, section) in file.sections().iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }

        for comment in section.comments() {
            out.push_str(comment);
            out.push('\n');
        }
        out.push('[');
        out.push_str(section.name());
        out.push_str("]\n");

        for entry in section.entries() {
            for comment in &entry.comments {
                out.push_str(comment);
                out.push('\n');
            }
            out.push_str(&entry.indent);
            out.push_str(&entry.key);
            if entry.value.is_empty() {
                out.push_str(" =\n");
            } else {
                out.push_str(" = ");
                out.push_str(&entry.value);
                out.push('\n');
            }
        }
    }

    if !file.trailing_comments().is_empty() {
        if !file.sections().is_empty() {
            out.push('\n');
        }
        for comment in file.trailing_comments() {
            out.push_str(comment);
            out.push('\n');
        }
    }

    out
}
