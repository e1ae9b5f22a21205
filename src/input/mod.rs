use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    Inline(String),
    File(PathBuf),
    Stdin,
}

impl TextSource {
    pub fn describe(&self) -> String {
        match self {
            TextSource::Inline(_) => "inline".to_string(),
            TextSource::File(path) => path.display().to_string(),
            TextSource::Stdin => "stdin".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error reading {origin}: {source}")]
    Io {
        origin: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone)]
pub struct InputText {
    pub text: String,
    pub source: String,
    pub lossy: bool,
}

pub fn load_text(source: &TextSource) -> Result<InputText, InputError> {
    let origin = source.describe();
    let (text, lossy) = match source {
        TextSource::Inline(text) => (text.clone(), false),
        TextSource::File(path) => {
            let reader = open_maybe_gz(path).map_err(|e| io_error(&origin, e))?;
            decode(read_all(reader).map_err(|e| io_error(&origin, e))?)
        }
        TextSource::Stdin => {
            decode(read_all(std::io::stdin().lock()).map_err(|e| io_error(&origin, e))?)
        }
    };

    if lossy {
        tracing::warn!(source = %origin, "input is not valid UTF-8; invalid sequences replaced");
    }
    if text.trim().is_empty() {
        tracing::warn!(source = %origin, "input text is empty");
    }

    Ok(InputText {
        text,
        source: origin,
        lossy,
    })
}

pub fn open_maybe_gz(path: &Path) -> std::io::Result<Box<dyn Read>> {
    let file = BufReader::new(File::open(path)?);
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(MultiGzDecoder::new(file)))
    } else {
        Ok(Box::new(file))
    }
}

fn read_all(mut reader: impl Read) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    Ok(buf)
}

fn decode(bytes: Vec<u8>) -> (String, bool) {
    match String::from_utf8(bytes) {
        Ok(text) => (text, false),
        Err(err) => (String::from_utf8_lossy(err.as_bytes()).into_owned(), true),
    }
}

fn io_error(origin: &str, source: std::io::Error) -> InputError {
    InputError::Io {
        origin: origin.to_string(),
        source,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
