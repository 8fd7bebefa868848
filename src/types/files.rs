// src/types/files.rs
use anyhow::{Context, Result};
use std::path::Path;

/// A file picked through an upload area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub content: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            size: content.len() as u64,
            content,
        }
    }

    /// Read a file from disk, keeping only its file name
    pub async fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| anyhow::anyhow!("Invalid file name: {}", path.display()))?
            .to_string();

        let content = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(Self::new(name, content))
    }
}

/// Ordered files currently assigned to a file input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSelection {
    files: Vec<SelectedFile>,
}

impl FileSelection {
    pub fn new(files: Vec<SelectedFile>) -> Self {
        Self { files }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectedFile> {
        self.files.iter()
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    /// Text for the name display next to the input
    pub fn summary(&self) -> String {
        match self.files.as_slice() {
            [] => String::new(),
            [single] => single.name.clone(),
            many => format!("{} files selected", many.len()),
        }
    }
}
