use std::io::Write;
use std::path::Path;

use crate::FreshError;
use crate::FreshResult;
use crate::config::FENCE;
use crate::config::SyncOptions;
use crate::parser::Directive;
use crate::parser::DirectiveMatcher;
use crate::snippet::extract_snippet;
use crate::snippet::include_file;

/// States for the document rewriter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ScanState {
	/// Ordinary document text.
	#[default]
	Normal,
	/// A directive has been parsed; the next fence opens its block.
	DirectivePending,
	/// The opening fence has been seen; the payload is produced before the
	/// next line is considered.
	FencePending,
	/// Between the fences of a directive block; placeholder lines are
	/// dropped.
	InsideFence,
}

/// What the rewriter should do with the current line.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ScanStep {
	/// Splice the payload for this directive into the output before handling
	/// the line itself.
	pub splice: Option<Directive>,
	/// Emit the line verbatim. False for placeholder lines inside a fence.
	pub emit: bool,
}

/// Per-line state machine driving one document rewrite. One scanner lives for
/// exactly one pass; all state is re-derived from content on the next run.
pub(crate) struct DocumentScanner<'a> {
	matcher: DirectiveMatcher,
	file: &'a Path,
	state: ScanState,
	pending: Option<Directive>,
	line_number: usize,
}

impl<'a> DocumentScanner<'a> {
	pub(crate) fn new(file: &'a Path, options: &SyncOptions) -> Self {
		Self {
			matcher: DirectiveMatcher::new(&options.directive_name),
			file,
			state: ScanState::default(),
			pending: None,
			line_number: 0,
		}
	}

	fn error_position(&self) -> (String, usize) {
		(self.file.display().to_string(), self.line_number)
	}

	/// Advance the machine by one line. The checks run in a fixed order:
	/// payload emission, fence marker, directive, emission.
	pub(crate) fn advance(&mut self, line: &str) -> FreshResult<ScanStep> {
		self.line_number += 1;

		// The first line after an opening fence triggers the substitution,
		// whatever that line is. Old placeholder lines are then discarded
		// one-by-one as they are visited.
		let splice = if self.state == ScanState::FencePending {
			self.state = ScanState::InsideFence;
			self.pending.take()
		} else {
			None
		};

		if line.starts_with(FENCE) {
			match self.state {
				ScanState::DirectivePending => self.state = ScanState::FencePending,
				ScanState::InsideFence => self.state = ScanState::Normal,
				// A fence with no directive attached passes through verbatim.
				ScanState::Normal => {}
				ScanState::FencePending => {
					let (file, line) = self.error_position();
					return Err(FreshError::UnexpectedFence { file, line });
				}
			}
		}

		let directive = if self.state == ScanState::InsideFence {
			None
		} else {
			self.matcher.matches(line, self.line_number)
		};
		if let Some(directive) = directive {
			if self.state != ScanState::Normal {
				let (file, line) = self.error_position();
				return Err(FreshError::NestedDirective { file, line });
			}

			self.pending = Some(directive);
			self.state = ScanState::DirectivePending;
		}

		Ok(ScanStep {
			splice,
			emit: self.state != ScanState::InsideFence,
		})
	}

	/// Terminal check: the document must end outside any directive or fence.
	pub(crate) fn finish(&self) -> FreshResult<()> {
		if self.state != ScanState::Normal {
			let (file, line) = self.error_position();
			return Err(FreshError::UnterminatedDocument { file, line });
		}

		Ok(())
	}
}

/// Compute the rewritten form of `content`, resolving directive source paths
/// relative to the directory containing `document`.
///
/// Each payload is produced synchronously when its opening fence is passed,
/// so memory stays bounded to one payload at a time.
pub fn rewrite_content(
	content: &str,
	document: &Path,
	options: &SyncOptions,
) -> FreshResult<String> {
	let base_dir = document_dir(document);
	let mut scanner = DocumentScanner::new(document, options);
	let mut output = String::with_capacity(content.len());

	for line in content.lines() {
		let step = scanner.advance(line)?;

		if let Some(directive) = step.splice {
			tracing::debug!(
				source = %directive.source.display(),
				tag = directive.tag.as_deref(),
				line = directive.line,
				"splicing payload"
			);
			output.push_str(&load_payload(&directive, base_dir, options)?);
		}

		if step.emit {
			output.push_str(line);
			output.push('\n');
		}
	}

	scanner.finish()?;
	Ok(output)
}

/// Produce the replacement payload for one directive: the whole source file,
/// or the tagged snippet when the directive carries a tag.
fn load_payload(directive: &Directive, base_dir: &Path, options: &SyncOptions) -> FreshResult<String> {
	let source_path = base_dir.join(&directive.source);
	let content = std::fs::read_to_string(&source_path).map_err(|source| {
		FreshError::Read {
			path: source_path.display().to_string(),
			source,
		}
	})?;

	match &directive.tag {
		None => Ok(include_file(&content)),
		Some(tag) => extract_snippet(&content, &source_path, &options.marker_for(tag)),
	}
}

/// Result of refreshing a document in place.
#[derive(Debug)]
pub struct RefreshOutcome {
	/// True when the rewrite produced different content and the document was
	/// replaced on disk.
	pub changed: bool,
}

/// Result of checking a document without writing.
#[derive(Debug)]
pub struct CheckOutcome {
	/// The document content currently on disk.
	pub current: String,
	/// The content a refresh would produce.
	pub expected: String,
}

impl CheckOutcome {
	/// Returns true when the document is already in sync.
	pub fn is_ok(&self) -> bool {
		self.current == self.expected
	}
}

/// Rewrite the document at `path` in place.
///
/// The new content is written to a scratch file in the same directory and
/// atomically renamed over the original, so concurrent readers see either the
/// old document or the whole new one. Any error aborts before the rename and
/// removes the scratch file, leaving the original untouched. Nothing is
/// written when the document is already in sync.
pub fn refresh_document(path: &Path, options: &SyncOptions) -> FreshResult<RefreshOutcome> {
	let original = read_document(path)?;
	let updated = rewrite_content(&original, path, options)?;

	let changed = updated != original;
	if changed {
		write_atomic(path, &updated)?;
	}

	tracing::debug!(document = %path.display(), changed, "refresh complete");
	Ok(RefreshOutcome { changed })
}

/// Compute what a refresh of `path` would produce, without touching disk.
pub fn check_document(path: &Path, options: &SyncOptions) -> FreshResult<CheckOutcome> {
	let current = read_document(path)?;
	let expected = rewrite_content(&current, path, options)?;

	Ok(CheckOutcome { current, expected })
}

fn read_document(path: &Path) -> FreshResult<String> {
	std::fs::read_to_string(path).map_err(|source| {
		FreshError::Read {
			path: path.display().to_string(),
			source,
		}
	})
}

/// The directory a document's relative source paths resolve against.
fn document_dir(path: &Path) -> &Path {
	match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent,
		_ => Path::new("."),
	}
}

/// Write through a scratch file in the target's directory, then rename. The
/// scratch file is removed on every error path.
fn write_atomic(path: &Path, content: &str) -> FreshResult<()> {
	let map_err = |source: std::io::Error| {
		FreshError::Write {
			path: path.display().to_string(),
			source,
		}
	};

	let mut scratch = tempfile::NamedTempFile::new_in(document_dir(path)).map_err(map_err)?;
	scratch.write_all(content.as_bytes()).map_err(map_err)?;
	scratch.persist(path).map_err(|e| map_err(e.error))?;

	Ok(())
}
