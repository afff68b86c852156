//! Splitter: Repomix dump text → ordered file units.
//!
//! The dump is a sequence of blocks, each introduced by a `File: <path>`
//! header line, followed by verbatim content, followed by a separator line of
//! sixteen `=` characters. Known limitations, kept on purpose:
//! - content before the first header line is silently discarded;
//! - a content line that itself starts with `File: ` opens a new block
//!   (no escaping is defined for the dump format);
//! - the trailing block is only flushed if at least one header was seen.

use tracing::debug;

/// Header prefix introducing a new file block.
const HEADER_PREFIX: &str = "File: ";

/// Separator line terminating a file block. Dropped, never part of content.
const SEPARATOR: &str = "================";

/// One file recovered from the dump: its recorded path and verbatim content.
/// Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUnit {
    pub path: String,
    pub content: String,
}

impl FileUnit {
    /// Base file name without extension; used as the module id.
    pub fn module_name(&self) -> &str {
        let base = self
            .path
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.path.as_str());
        match base.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => base,
        }
    }
}

/// Split `text` into file units, preserving block order and content lines
/// (blank lines included). An input with no header lines yields an empty
/// vector; that is a valid outcome, not an error.
pub fn parse_dump(text: &str) -> Vec<FileUnit> {
    let mut units = Vec::new();
    let mut current_path: Option<String> = None;
    let mut current_lines: Vec<&str> = Vec::new();

    for line in text.lines() {
        if let Some(path) = line.strip_prefix(HEADER_PREFIX) {
            if let Some(prev) = current_path.take() {
                units.push(FileUnit {
                    path: prev,
                    content: current_lines.join("\n"),
                });
            }
            current_path = Some(path.trim().to_string());
            current_lines.clear();
        } else if current_path.is_some() && line != SEPARATOR {
            current_lines.push(line);
        }
        // Lines before the first header, and separator lines, fall through.
    }

    if let Some(path) = current_path {
        units.push(FileUnit {
            path,
            content: current_lines.join("\n"),
        });
    }

    debug!(units = units.len(), "split dump into file units");
    units
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_blocks_in_order() {
        let text = "File: a.py\nimport os\n================\nFile: b.py\nx = 1\n================\n";
        let units = parse_dump(text);

        assert_eq!(units.len(), 2);
        assert_eq!(units[0].path, "a.py");
        assert_eq!(units[0].content, "import os");
        assert_eq!(units[1].path, "b.py");
        assert_eq!(units[1].content, "x = 1");
    }

    #[test]
    fn no_headers_yields_empty_sequence() {
        assert!(parse_dump("just some text\nwith no headers\n").is_empty());
        assert!(parse_dump("").is_empty());
    }

    #[test]
    fn content_before_first_header_is_discarded() {
        let text = "stray preamble\nFile: a.py\nimport os\n================\n";
        let units = parse_dump(text);

        assert_eq!(units.len(), 1);
        assert_eq!(units[0].content, "import os");
    }

    #[test]
    fn consecutive_separators_are_each_ignored() {
        let text = "File: a.py\nimport os\n================\n================\nFile: b.py\n================\n";
        let units = parse_dump(text);

        assert_eq!(units.len(), 2);
        assert_eq!(units[0].content, "import os");
        assert_eq!(units[1].content, "");
    }

    #[test]
    fn blank_lines_are_preserved() {
        let text = "File: a.py\nline1\n\nline3\n================\n";
        let units = parse_dump(text);
        assert_eq!(units[0].content, "line1\n\nline3");
    }

    #[test]
    fn final_block_flushes_without_trailing_separator() {
        let units = parse_dump("File: a.py\nimport os");
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].content, "import os");
    }

    #[test]
    fn header_looking_content_opens_a_new_block() {
        // No escaping is defined for the dump format.
        let text = "File: a.py\nFile: not_really.py\n================\n";
        let units = parse_dump(text);

        assert_eq!(units.len(), 2);
        assert_eq!(units[0].path, "a.py");
        assert_eq!(units[1].path, "not_really.py");
    }

    #[test]
    fn module_name_strips_directories_and_extension() {
        let unit = FileUnit {
            path: "src/pkg/alpha.py".into(),
            content: String::new(),
        };
        assert_eq!(unit.module_name(), "alpha");

        let bare = FileUnit {
            path: "Makefile".into(),
            content: String::new(),
        };
        assert_eq!(bare.module_name(), "Makefile");

        let dotfile = FileUnit {
            path: ".gitignore".into(),
            content: String::new(),
        };
        assert_eq!(dotfile.module_name(), ".gitignore");
    }
}
