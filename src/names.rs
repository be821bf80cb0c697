pub const HEADER_SUFFIX: &str = ".h";

/// `page.html` -> `page_html.h`. Every `.` in the path is replaced, including
/// ones in directory components.
pub fn output_name(input: &str) -> String {
    format!("{}{HEADER_SUFFIX}", input.replace('.', "_"))
}

/// `page.html` -> `PAGE_HTML`.
pub fn identifier_name(input: &str) -> String {
    input.split('.').collect::<Vec<_>>().join("_").to_uppercase()
}
