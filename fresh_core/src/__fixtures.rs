use std::path::Path;
use std::path::PathBuf;

pub(crate) const WHOLE_FILE_SOURCE: &str = "test 1\ntest 2\ntest 3";

/// A document with one directive and a fenced placeholder region.
/// `placeholder` supplies the full placeholder lines including their trailing
/// newlines, or `""` for an empty region.
pub(crate) fn directive_document(target: &str, placeholder: &str) -> String {
	format!(
		"before test\n<!-- [freshReadmeSource]({target}) -->\n```\n{placeholder}```\nafter test\n"
	)
}

/// A source file with a region delimited by `# freshReadmeSnippet: {tag}`
/// marker lines. `body` supplies the region lines including trailing
/// newlines.
pub(crate) fn tagged_source(tag: &str, body: &str) -> String {
	format!(
		"before snippet\n# freshReadmeSnippet: {tag}\n{body}# freshReadmeSnippet: {tag}\nafter \
		 snippet\n"
	)
}

/// Write `content` at `dir/name`, creating intermediate directories.
pub(crate) fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
	let path = dir.join(name);
	if let Some(parent) = path.parent() {
		std::fs::create_dir_all(parent).expect("create fixture directories");
	}
	std::fs::write(&path, content).expect("write fixture file");
	path
}
