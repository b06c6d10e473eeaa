use std::path::PathBuf;

use clap::Parser;
use clap::ValueEnum;
use fresh_core::DEFAULT_DIRECTIVE_NAME;
use fresh_core::DEFAULT_SNIPPET_PREFIX;
use fresh_core::SyncOptions;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Keep the fenced code blocks in a markdown document in sync with source files.",
	long_about = "fresh-readme rewrites the fenced code blocks in a markdown document with the \
	              current content of the source files they were copied from.\n\nMark a fenced \
	              block by preceding it with a directive comment:\n  <!-- \
	              [freshReadmeSource](path/to/source#tag) -->\n\nThe whole source file is \
	              included when no `#tag` is given; otherwise the region delimited by two \
	              `freshReadmeSnippet: tag` marker lines is extracted. The document is replaced \
	              atomically and the operation is idempotent."
)]
#[allow(clippy::struct_excessive_bools)]
pub struct FreshCli {
	/// Path to the markdown document to refresh.
	#[arg(default_value = "README.md")]
	pub document: PathBuf,

	/// Verify the document is in sync without rewriting it. Exits with a
	/// non-zero status code when any fenced block is stale.
	///
	/// Ideal for CI pipelines to enforce documentation synchronization.
	#[arg(long, default_value_t = false)]
	pub check: bool,

	/// With --check, show a unified diff between the current document and
	/// the content a refresh would produce.
	#[arg(long, default_value_t = false)]
	pub diff: bool,

	/// Output format for --check results. Use `text` for human-readable
	/// output or `json` for programmatic consumption.
	#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
	pub format: OutputFormat,

	/// Enable verbose output.
	#[arg(long, short, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, default_value_t = false)]
	pub no_color: bool,

	/// Directive name recognized inside HTML comments.
	#[arg(long, default_value = DEFAULT_DIRECTIVE_NAME)]
	pub directive_name: String,

	/// Marker prefix that delimits tagged snippets inside source files.
	#[arg(long, default_value = DEFAULT_SNIPPET_PREFIX)]
	pub snippet_prefix: String,
}

impl FreshCli {
	/// The marker conventions selected by the command line.
	pub fn sync_options(&self) -> SyncOptions {
		SyncOptions {
			directive_name: self.directive_name.clone(),
			snippet_prefix: self.snippet_prefix.clone(),
		}
	}
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output.
	Text,
	/// JSON output for programmatic consumption.
	Json,
}
