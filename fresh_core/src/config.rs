/// Directive name recognized inside HTML comments when no override is given.
pub const DEFAULT_DIRECTIVE_NAME: &str = "freshReadmeSource";

/// Marker prefix that, together with a tag, delimits a snippet region inside
/// a source file.
pub const DEFAULT_SNIPPET_PREFIX: &str = "freshReadmeSnippet: ";

/// Fence delimiter opening and closing a replaceable block in the document.
pub const FENCE: &str = "```";

/// Marker conventions for one rewrite invocation.
///
/// The directive name and snippet prefix are explicit values rather than
/// shared constants so that two invocations with different conventions can
/// coexist in one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOptions {
	/// Name matched inside `<!-- [NAME](path#tag) -->` directive lines.
	pub directive_name: String,
	/// Prefix of the marker line delimiting a tagged snippet. The full marker
	/// is this prefix followed by the tag.
	pub snippet_prefix: String,
}

impl Default for SyncOptions {
	fn default() -> Self {
		Self {
			directive_name: DEFAULT_DIRECTIVE_NAME.to_string(),
			snippet_prefix: DEFAULT_SNIPPET_PREFIX.to_string(),
		}
	}
}

impl SyncOptions {
	/// The full marker text delimiting the snippet for `tag`.
	pub fn marker_for(&self, tag: &str) -> String {
		format!("{}{tag}", self.snippet_prefix)
	}
}
