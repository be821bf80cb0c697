use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::EmbedError;
use crate::header;
use crate::names;

/// What a successful run wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Embedded {
    pub output: PathBuf,
    pub identifier: String,
    pub bytes: usize,
}

/// Converts text files into headers. Relative input paths, and the output
/// names derived from them, are resolved against `root`.
#[derive(Debug, Clone)]
pub struct Embedder {
    root: PathBuf,
}

impl Default for Embedder {
    fn default() -> Self {
        Embedder::new(".")
    }
}

impl Embedder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Embedder { root: root.into() }
    }

    pub fn embed_file(&self, input: &str) -> Result<Embedded, EmbedError> {
        let input_path = self.root.join(input);
        if !input_path.is_file() {
            return Err(EmbedError::MissingInputFile { path: input_path });
        }

        let content = fs::read_to_string(&input_path).map_err(|source| EmbedError::Read {
            path: input_path.clone(),
            source,
        })?;
        debug!(path = %input_path.display(), bytes = content.len(), "read input");

        let output = self.root.join(names::output_name(input));
        let identifier = names::identifier_name(input);
        if header::contains_closing_marker(&content) {
            warn!(
                path = %input_path.display(),
                marker = header::CLOSE_MARKER,
                "content contains the closing marker, the generated header will not compile"
            );
        }

        let rendered = header::render(&identifier, &content);
        fs::write(&output, &rendered).map_err(|source| EmbedError::Write {
            path: output.clone(),
            source,
        })?;
        debug!(path = %output.display(), %identifier, "wrote header");

        Ok(Embedded {
            output,
            identifier,
            bytes: rendered.len(),
        })
    }
}

/// Runs an [`Embedder`] rooted at the current directory.
pub fn embed_file(input: &str) -> Result<Embedded, EmbedError> {
    Embedder::default().embed_file(input)
}
