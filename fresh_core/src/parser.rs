use std::path::PathBuf;

use regex::Regex;

/// A parsed directive line: the following fenced block's content is sourced
/// from `source`, either whole or restricted to the region tagged `tag`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
	/// Source path, relative to the directory containing the document.
	pub source: PathBuf,
	/// Tag of the snippet region to extract; `None` includes the whole file.
	pub tag: Option<String>,
	/// 1-indexed document line the directive was parsed from.
	pub line: usize,
}

/// Recognizes directive lines of the shape `<!-- [NAME](PATH#TAG) -->` where
/// `#TAG` is optional. The pattern is compiled once per matcher so the
/// directive name stays a configuration value.
#[derive(Debug)]
pub struct DirectiveMatcher {
	pattern: Regex,
}

impl DirectiveMatcher {
	pub fn new(directive_name: &str) -> Self {
		let pattern = format!(
			r"^<!--.*\[{}\]\(([^#]+)#*(.*?)\)",
			regex::escape(directive_name)
		);
		Self {
			// The directive name is escaped, so the pattern is always valid.
			pattern: Regex::new(&pattern).expect("directive pattern compiles"),
		}
	}

	/// Classify a single document line. Returns the parsed directive when the
	/// line carries one, `None` otherwise. Pure; the caller is responsible for
	/// not invoking this inside an open fence.
	pub fn matches(&self, line: &str, line_number: usize) -> Option<Directive> {
		let captures = self.pattern.captures(line)?;
		let source = PathBuf::from(&captures[1]);
		let tag = match &captures[2] {
			"" => None,
			tag => Some(tag.to_string()),
		};

		Some(Directive {
			source,
			tag,
			line: line_number,
		})
	}
}
