use std::path::Path;

use crate::FreshError;
use crate::FreshResult;

/// States for the snippet extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ExtractState {
	/// Still looking for the start marker.
	#[default]
	SearchingStart,
	/// Between the start and end markers; lines are captured.
	Capturing,
	/// The end marker has been seen; any further marker is an error.
	Done,
}

/// Line-by-line extractor for the region delimited by two occurrences of a
/// marker line. The marker lines themselves are never part of the payload:
/// capturing begins on the line after the start marker and stops on the line
/// holding the end marker.
struct SnippetExtractor<'a> {
	marker: &'a str,
	file: &'a Path,
	state: ExtractState,
	line_number: usize,
	payload: String,
}

impl<'a> SnippetExtractor<'a> {
	fn new(marker: &'a str, file: &'a Path) -> Self {
		Self {
			marker,
			file,
			state: ExtractState::default(),
			line_number: 0,
			payload: String::new(),
		}
	}

	fn advance(&mut self, line: &str) -> FreshResult<()> {
		self.line_number += 1;

		// The surrounding comment syntax is source-language-specific, so the
		// marker is matched by containment, not equality.
		if line.contains(self.marker) {
			self.state = match self.state {
				ExtractState::SearchingStart => ExtractState::Capturing,
				ExtractState::Capturing => ExtractState::Done,
				ExtractState::Done => {
					return Err(FreshError::DuplicateMarker {
						marker: self.marker.to_string(),
						file: self.file.display().to_string(),
						line: self.line_number,
					});
				}
			};
			return Ok(());
		}

		if self.state == ExtractState::Capturing {
			self.payload.push_str(line);
			self.payload.push('\n');
		}

		Ok(())
	}

	fn finish(self) -> FreshResult<String> {
		if self.state != ExtractState::Done {
			return Err(FreshError::MissingMarker {
				marker: self.marker.to_string(),
				file: self.file.display().to_string(),
				line: self.line_number,
			});
		}

		Ok(self.payload)
	}
}

/// Extract the lines strictly between the two `marker` lines of `content`.
///
/// The marker must appear exactly twice; a third occurrence or a missing
/// occurrence is a fatal error naming `file` and the offending line.
pub fn extract_snippet(content: &str, file: &Path, marker: &str) -> FreshResult<String> {
	let mut extractor = SnippetExtractor::new(marker, file);
	for line in content.lines() {
		extractor.advance(line)?;
	}

	let payload = extractor.finish()?;
	tracing::trace!(
		marker,
		bytes = payload.len(),
		"extracted snippet from {}",
		file.display()
	);

	Ok(payload)
}

/// The whole-file payload: the content as-is plus one trailing line
/// separator.
pub fn include_file(content: &str) -> String {
	let mut payload = String::with_capacity(content.len() + 1);
	payload.push_str(content);
	payload.push('\n');
	payload
}
