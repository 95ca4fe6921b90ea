use std::fs;
use std::io::{self, Read};
use std::path::Path;

use termlex_core::{Grammar, GrammarError};

/// On-disk grammar encodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrammarFormat {
    Json,
    Yaml,
    Xml,
    Binary,
}

impl GrammarFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "xml" => Some(Self::Xml),
            "binary" | "bin" => Some(Self::Binary),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        Self::from_name(&ext.to_ascii_lowercase())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("'{path}' is not valid UTF-8")]
    NotUtf8 { path: String },

    #[error("cannot infer grammar format from '{path}', use --format")]
    UnknownFormat { path: String },

    #[error("{path}: {source}")]
    Grammar {
        path: String,
        #[source]
        source: GrammarError,
    },
}

/// Load a grammar from a file, or from stdin when `path` is `-`.
///
/// Without an explicit format the extension decides; stdin defaults to JSON.
pub fn load_grammar(path: &Path, format: Option<GrammarFormat>) -> Result<Grammar, LoadError> {
    let is_stdin = path.as_os_str() == "-";
    let display = if is_stdin {
        "<stdin>".to_owned()
    } else {
        path.display().to_string()
    };

    let format = match format.or_else(|| GrammarFormat::from_path(path)) {
        Some(format) => format,
        None if is_stdin => GrammarFormat::Json,
        None => return Err(LoadError::UnknownFormat { path: display }),
    };

    let bytes = if is_stdin {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf).map(|_| buf)
    } else {
        fs::read(path)
    }
    .map_err(|source| LoadError::Read {
        path: display.clone(),
        source,
    })?;

    decode(&bytes, format, &display)
}

pub fn decode(bytes: &[u8], format: GrammarFormat, path: &str) -> Result<Grammar, LoadError> {
    let grammar = match format {
        GrammarFormat::Binary => Grammar::from_binary(bytes),
        GrammarFormat::Json | GrammarFormat::Yaml | GrammarFormat::Xml => {
            let text = std::str::from_utf8(bytes).map_err(|_| LoadError::NotUtf8 {
                path: path.to_owned(),
            })?;
            match format {
                GrammarFormat::Json => Grammar::from_json(text),
                GrammarFormat::Yaml => Grammar::from_yaml(text),
                _ => Grammar::from_xml(text),
            }
        }
    };

    let grammar = grammar.map_err(|source| LoadError::Grammar {
        path: path.to_owned(),
        source,
    })?;
    tracing::debug!(path, terms = grammar.len(), ?format, "grammar decoded");
    Ok(grammar)
}
