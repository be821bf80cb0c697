//! The header template.
//!
//! Content is wrapped in a C++ raw string literal with the `rawliteral`
//! delimiter and placed in a `const char*` declaration:
//!
//! ```text
//! const char* PAGE_HTML = R"rawliteral(
//! <content>
//! )rawliteral";
//! ```
//!
//! Nothing inside the literal is escaped. Content that itself contains the
//! closing marker produces a header that will not compile; see
//! [`contains_closing_marker`].

pub const OPEN_MARKER: &str = "R\"rawliteral(";
pub const CLOSE_MARKER: &str = ")rawliteral\"";

pub fn render(identifier: &str, content: &str) -> String {
    format!("const char* {identifier} = {OPEN_MARKER}\n{content}\n{CLOSE_MARKER};")
}

/// Recovers the embedded content from a rendered header, dropping the newline
/// inserted after the open marker and before the close marker. Inverse of
/// [`render`] for any content without [`CLOSE_MARKER`], which makes it usable
/// for checking a generated header against its source file.
pub fn extract(rendered: &str) -> Option<&str> {
    let start = rendered.find(OPEN_MARKER)? + OPEN_MARKER.len();
    let end = rendered.rfind(CLOSE_MARKER)?;
    rendered.get(start..end)?.strip_prefix('\n')?.strip_suffix('\n')
}

pub fn contains_closing_marker(content: &str) -> bool {
    content.contains(CLOSE_MARKER)
}
