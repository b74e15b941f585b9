//! Path templates for the route catalog.
//!
//! Templates use the `:name` syntax for path parameters, e.g. `/place/:id`.
//! A template is compiled once when the catalog is built; builders fill it
//! with parameter values and the parser uses its literal prefix.

use std::collections::BTreeMap;
use std::fmt;

use crate::DeeplinkResult;
use crate::error::DeeplinkError;

/// Maximum allowed length for a path template in bytes.
const MAX_TEMPLATE_LENGTH: usize = 1024;

/// Maximum allowed number of path segments in a template.
const MAX_TEMPLATE_SEGMENTS: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
	Literal(String),
	Param(String),
}

/// A compiled path template.
///
/// Supports templates like:
/// - `/atlas` - Exact path
/// - `/journey/flights` - Exact nested path
/// - `/place/:id` - One path parameter
/// - `/trails/:trail/stops/:stop` - Several parameters
///
/// Empty segments produced by doubled or trailing slashes are ignored when
/// the template is compiled, but the original text is kept for exact-match
/// comparisons.
#[derive(Debug, Clone)]
pub struct PathTemplate {
	/// The original template string.
	template: String,
	/// Compiled non-empty segments.
	segments: Vec<Segment>,
	/// Parameter names in order.
	param_names: Vec<String>,
}

impl PathTemplate {
	/// Compiles a template string.
	///
	/// # Errors
	///
	/// Returns [`DeeplinkError::InvalidTemplate`] if the template:
	/// - does not start with `/`
	/// - exceeds the maximum length (1024 bytes)
	/// - has too many path segments (>32)
	/// - declares a parameter with an empty name or declares one twice
	/// - contains a `.` or `..` segment
	pub fn new(template: &str) -> DeeplinkResult<Self> {
		let invalid = |reason: String| DeeplinkError::InvalidTemplate {
			template: template.to_string(),
			reason,
		};

		if !template.starts_with('/') {
			return Err(invalid("template must start with '/'".to_string()));
		}

		if template.len() > MAX_TEMPLATE_LENGTH {
			return Err(invalid(format!(
				"template length {} exceeds maximum allowed length of {} bytes",
				template.len(),
				MAX_TEMPLATE_LENGTH
			)));
		}

		let segment_count = template.split('/').count();
		if segment_count > MAX_TEMPLATE_SEGMENTS {
			return Err(invalid(format!(
				"template has {} path segments, exceeding maximum of {}",
				segment_count, MAX_TEMPLATE_SEGMENTS
			)));
		}

		let mut segments = Vec::new();
		let mut param_names: Vec<String> = Vec::new();

		for segment in split_segments(template) {
			match segment.strip_prefix(':') {
				Some("") => {
					return Err(invalid("parameter name must not be empty".to_string()));
				}
				Some(name) => {
					if param_names.iter().any(|existing| existing == name) {
						return Err(invalid(format!("parameter '{}' is declared twice", name)));
					}
					param_names.push(name.to_string());
					segments.push(Segment::Param(name.to_string()));
				}
				None if is_dot_segment(segment) => {
					return Err(invalid(format!("'{}' is not allowed as a path segment", segment)));
				}
				None => segments.push(Segment::Literal(segment.to_string())),
			}
		}

		Ok(Self {
			template: template.to_string(),
			segments,
			param_names,
		})
	}

	/// Returns the original template string.
	pub fn template(&self) -> &str {
		&self.template
	}

	/// Returns the parameter names in template order.
	pub fn param_names(&self) -> &[String] {
		&self.param_names
	}

	/// Returns the parameter name of the last segment, if that segment is a
	/// parameter.
	pub fn trailing_param(&self) -> Option<&str> {
		match self.segments.last() {
			Some(Segment::Param(name)) => Some(name),
			_ => None,
		}
	}

	/// Returns whether this template has no parameters.
	pub fn is_exact(&self) -> bool {
		self.param_names.is_empty()
	}

	/// Returns the literal text before the first parameter, without a
	/// trailing slash.
	///
	/// `/place/:id` gives `/place`, `/atlas` gives `/atlas`, and a template
	/// that starts with a parameter gives `/`.
	pub fn static_prefix(&self) -> &str {
		let literal = match self.template.find("/:") {
			Some(idx) => &self.template[..idx],
			None => &self.template,
		};

		match literal.trim_end_matches('/') {
			"" => "/",
			trimmed => trimmed,
		}
	}

	/// Checks whether `path` is exactly this template.
	///
	/// Only exact templates can match; a template with parameters never
	/// equals a concrete path.
	pub fn is_exact_match(&self, path: &str) -> bool {
		self.is_exact() && self.template == path
	}

	/// Generates the path segments for this template with the given
	/// parameters.
	///
	/// Returns `None` if a parameter is missing. Values are returned raw;
	/// callers that build a URI are responsible for percent-encoding them.
	pub fn fill<'a>(&'a self, params: &'a BTreeMap<String, String>) -> Option<Vec<&'a str>> {
		self.segments
			.iter()
			.map(|segment| match segment {
				Segment::Literal(text) => Some(text.as_str()),
				Segment::Param(name) => params.get(name).map(String::as_str),
			})
			.collect()
	}
}

impl PartialEq for PathTemplate {
	fn eq(&self, other: &Self) -> bool {
		self.template == other.template
	}
}

impl Eq for PathTemplate {}

impl fmt::Display for PathTemplate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.template)
	}
}

/// Returns whether `segment` is `.` or `..`, which URI paths never keep.
pub(crate) fn is_dot_segment(segment: &str) -> bool {
	matches!(segment, "." | "..")
}

/// Splits a path into its non-empty segments.
///
/// Leading, trailing and doubled slashes produce no segments.
pub fn split_segments(path: &str) -> impl Iterator<Item = &str> {
	path.split('/').filter(|segment| !segment.is_empty())
}
