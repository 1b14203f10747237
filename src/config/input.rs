use crate::core::InputSource;
use crate::utils::error::Result;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

/// Input passed directly on the command line.
///
/// Shells make a literal newline awkward to type, so the two-character
/// sequence `\n` is decoded to a newline and `\\` to a single backslash.
#[derive(Debug, Clone)]
pub struct InlineInput {
    raw: String,
}

impl InlineInput {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn decoded(&self) -> String {
        let mut out = String::with_capacity(self.raw.len());
        let mut chars = self.raw.chars().peekable();
        while let Some(c) = chars.next() {
            if c != '\\' {
                out.push(c);
                continue;
            }
            match chars.peek() {
                Some('n') => {
                    out.push('\n');
                    chars.next();
                }
                Some('\\') => {
                    out.push('\\');
                    chars.next();
                }
                _ => out.push('\\'),
            }
        }
        out
    }
}

impl InputSource for InlineInput {
    async fn read_input(&self) -> Result<String> {
        Ok(self.decoded())
    }
}

#[derive(Debug, Clone, Default)]
pub struct StdinInput;

impl InputSource for StdinInput {
    async fn read_input(&self) -> Result<String> {
        let mut buffer = String::new();
        tokio::io::stdin().read_to_string(&mut buffer).await?;
        Ok(buffer)
    }
}

#[derive(Debug, Clone)]
pub struct FileInput {
    path: PathBuf,
}

impl FileInput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl InputSource for FileInput {
    async fn read_input(&self) -> Result<String> {
        tracing::debug!("Reading input from {}", self.path.display());
        let data = tokio::fs::read_to_string(&self.path).await?;
        Ok(data)
    }
}

/// The one input source chosen on the command line.
#[derive(Debug, Clone)]
pub enum SelectedInput {
    Inline(InlineInput),
    Stdin(StdinInput),
    File(FileInput),
}

impl InputSource for SelectedInput {
    async fn read_input(&self) -> Result<String> {
        match self {
            Self::Inline(source) => source.read_input().await,
            Self::Stdin(source) => source.read_input().await,
            Self::File(source) => source.read_input().await,
        }
    }
}
