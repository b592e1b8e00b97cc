use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Query text together with the name diagnostics should show for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySource {
    pub text: String,
    /// `None` for inline `-q` text.
    pub path: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("query is required: use a positional argument or -q/--query")]
    Missing,

    #[error("failed to read stdin: {0}")]
    Stdin(io::Error),

    #[error("failed to read '{}': {source}", path.display())]
    File { path: PathBuf, source: io::Error },
}

pub fn load_query_source(
    query_path: Option<&Path>,
    query_text: Option<&str>,
) -> Result<QuerySource, LoadError> {
    if let Some(text) = query_text {
        return Ok(QuerySource {
            text: text.to_owned(),
            path: None,
        });
    }

    match query_path {
        Some(path) if path.as_os_str() == "-" => load_stdin(),
        Some(path) => load_file(path),
        None => Err(LoadError::Missing),
    }
}

fn load_stdin() -> Result<QuerySource, LoadError> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .map_err(LoadError::Stdin)?;
    Ok(QuerySource {
        text,
        path: Some("<stdin>".to_owned()),
    })
}

fn load_file(path: &Path) -> Result<QuerySource, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::File {
        path: path.to_owned(),
        source,
    })?;
    Ok(QuerySource {
        text,
        path: Some(path.to_string_lossy().into_owned()),
    })
}
