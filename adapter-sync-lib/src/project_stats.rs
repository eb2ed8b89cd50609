use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Directory names that are never descended into.
const SKIP_DIRS: [&str; 4] = ["target", ".git", "node_modules", "__pycache__"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCategory {
    Rust,
    Wit,
    Other,
}

impl FileCategory {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "rs" => Some(FileCategory::Rust),
            "wit" => Some(FileCategory::Wit),
            "toml" | "md" => Some(FileCategory::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryStats {
    pub files: usize,
    pub lines: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProjectStats {
    pub rust: CategoryStats,
    pub wit: CategoryStats,
    pub other: CategoryStats,
    pub total_files: usize,
    pub total_lines: usize,
}

impl ProjectStats {
    fn record(&mut self, category: FileCategory, lines: usize) {
        let stats = match category {
            FileCategory::Rust => &mut self.rust,
            FileCategory::Wit => &mut self.wit,
            FileCategory::Other => &mut self.other,
        };
        stats.files += 1;
        stats.lines += lines;
        self.total_files += 1;
        self.total_lines += lines;
    }
}

/// Counts files and lines of Rust, WIT, TOML and Markdown sources under `root`.
pub fn analyze_project(root: &Path) -> Result<ProjectStats> {
    let mut stats = ProjectStats::default();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| !is_skipped(entry));

    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(category) = FileCategory::from_path(entry.path()) else {
            continue;
        };
        stats.record(category, count_lines(entry.path()));
    }

    Ok(stats)
}

fn is_skipped(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIP_DIRS.contains(&name))
}

/// Unreadable and non UTF-8 files count as empty.
fn count_lines(path: &Path) -> usize {
    match fs::read_to_string(path) {
        Ok(content) => content.lines().count(),
        Err(e) => {
            tracing::debug!("Counting {:?} as empty: {}", path, e);
            0
        }
    }
}
