use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum FreshError {
	#[error(transparent)]
	#[diagnostic(code(fresh::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to read `{path}`: {source}")]
	#[diagnostic(code(fresh::read_error))]
	Read {
		path: String,
		source: std::io::Error,
	},

	#[error("failed to write `{path}`: {source}")]
	#[diagnostic(code(fresh::write_error))]
	Write {
		path: String,
		source: std::io::Error,
	},

	#[error("snippet marker `{marker}` appears a second time at {file}:{line}")]
	#[diagnostic(
		code(fresh::duplicate_marker),
		help("each tag may delimit only one region; use a distinct tag for every snippet")
	)]
	DuplicateMarker {
		marker: String,
		file: String,
		line: usize,
	},

	#[error("unable to find snippet `{marker}` at {file}:{line}")]
	#[diagnostic(
		code(fresh::missing_marker),
		help("the source file must contain the marker once before and once after the snippet")
	)]
	MissingMarker {
		marker: String,
		file: String,
		line: usize,
	},

	#[error("unable to process an include inside another include at {file}:{line}")]
	#[diagnostic(
		code(fresh::nested_directive),
		help("close the previous directive's fenced block before starting a new one")
	)]
	NestedDirective { file: String, line: usize },

	#[error("unexpected ``` at {file}:{line}")]
	#[diagnostic(code(fresh::unexpected_fence))]
	UnexpectedFence { file: String, line: usize },

	#[error("unexpected end of file at {file}:{line}")]
	#[diagnostic(
		code(fresh::unterminated_document),
		help("every directive must be followed by an opening and a closing ``` fence")
	)]
	UnterminatedDocument { file: String, line: usize },
}

pub type FreshResult<T> = Result<T, FreshError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
