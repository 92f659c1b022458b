//! Batch annotation over a source tree on disk.
//!
//! Scans a directory for JS/TS modules, annotates each file independently
//! and in parallel, and reports per-file outcomes. One broken file is
//! logged and reported, never fatal for the rest of the batch.

#[cfg(feature = "napi")]
use napi_derive::napi;
use lazy_static::lazy_static;
use rayon::prelude::*;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::annotate::{annotate_source, AnnotationSummary};
use crate::attrs::AttrCatalog;
use crate::cache::AnnotateCache;
use crate::parse::{AnnotateError, ERR_IO};
use crate::provenance::LibraryCatalog;

const SOURCE_EXTENSIONS: [&str; 4] = ["js", "jsx", "ts", "tsx"];
const SKIP_DIRS: [&str; 4] = ["node_modules", ".git", "dist", "build"];

lazy_static! {
    /// Cheap pre-screen: a file with no capitalized tag has no component
    /// JSX and cannot gain annotations, so it skips the full parse.
    static ref CANDIDATE_RE: Regex = Regex::new(r"<\s*[A-Z]").unwrap();
}

// ═══════════════════════════════════════════════════════════════════════════════
// FILE DISCOVERY
// ═══════════════════════════════════════════════════════════════════════════════

/// Recursively find annotatable source files under `dir`. Dependency and
/// output directories are pruned without descending.
pub fn find_source_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !is_pruned_dir(e))
    {
        if let Ok(entry) = entry {
            let path = entry.path();
            if path.is_file() {
                if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
                    if SOURCE_EXTENSIONS.contains(&ext) {
                        files.push(path.to_path_buf());
                    }
                }
            }
        }
    }
    files
}

fn is_pruned_dir(entry: &walkdir::DirEntry) -> bool {
    // depth 0 is the walk root, which must never be pruned.
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(|name| SKIP_DIRS.contains(&name) || name.starts_with('.'))
            .unwrap_or(false)
}

// ═══════════════════════════════════════════════════════════════════════════════
// BATCH RESULTS
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "napi", napi(object))]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub file: String,
    pub changed: bool,
    /// Skipped before parsing: no candidate JSX, or an up-to-date cache
    /// entry.
    pub skipped: bool,
    pub summary: AnnotationSummary,
    pub error: Option<AnnotateError>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "napi", napi(object))]
#[serde(rename_all = "camelCase")]
pub struct DirectorySummary {
    pub files_scanned: u32,
    pub files_changed: u32,
    pub files_skipped: u32,
    pub files_failed: u32,
    pub nodes_annotated: u32,
    pub reports: Vec<FileReport>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// BATCH ANNOTATION
// ═══════════════════════════════════════════════════════════════════════════════

fn skipped_report(file: String) -> FileReport {
    FileReport {
        file,
        changed: false,
        skipped: true,
        summary: AnnotationSummary::default(),
        error: None,
    }
}

fn failed_report(file: String, error: AnnotateError) -> FileReport {
    FileReport {
        file,
        changed: false,
        skipped: false,
        summary: AnnotationSummary::default(),
        error: Some(error),
    }
}

fn annotate_file(
    path: &Path,
    write: bool,
    catalog: &AttrCatalog,
    library: &LibraryCatalog,
    cache: Option<&AnnotateCache>,
) -> FileReport {
    let file = path.to_string_lossy().to_string();

    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("[QuillNative] Failed to read {}: {}", file, e);
            let error =
                AnnotateError::new(ERR_IO, &format!("Failed to read file: {}", e), &file, 1, 1);
            return failed_report(file, error);
        }
    };

    if !CANDIDATE_RE.is_match(&source) {
        return skipped_report(file);
    }
    if let Some(cache) = cache {
        if cache.is_current(&file, &source) {
            return skipped_report(file);
        }
    }

    match annotate_source(&source, &file, catalog, library) {
        Ok(out) => {
            if out.changed && write {
                if let Err(e) = fs::write(path, &out.code) {
                    eprintln!("[QuillNative] Failed to write {}: {}", file, e);
                    let error = AnnotateError::new(
                        ERR_IO,
                        &format!("Failed to write file: {}", e),
                        &file,
                        1,
                        1,
                    );
                    return failed_report(file, error);
                }
            }
            if let Some(cache) = cache {
                // Record only content that is actually on disk now.
                if !out.changed {
                    cache.record(&file, &source);
                } else if write {
                    cache.record(&file, &out.code);
                }
            }
            FileReport {
                file,
                changed: out.changed,
                skipped: false,
                summary: out.summary,
                error: None,
            }
        }
        Err(error) => {
            eprintln!("[QuillNative] Failed to annotate {}: {}", file, error.message);
            failed_report(file, error)
        }
    }
}

/// Annotate every source file under `root`. Files are independent, so the
/// batch fans out across the rayon pool. With `write` unset this is a dry
/// run that reports what would change.
pub fn annotate_directory(
    root: &Path,
    write: bool,
    use_cache: bool,
    catalog: &AttrCatalog,
    library: &LibraryCatalog,
) -> DirectorySummary {
    let files = find_source_files(root);
    let cache = if use_cache {
        Some(AnnotateCache::new())
    } else {
        None
    };

    let reports: Vec<FileReport> = files
        .par_iter()
        .map(|path| annotate_file(path, write, catalog, library, cache.as_ref()))
        .collect();

    let mut summary = DirectorySummary::default();
    for report in &reports {
        summary.files_scanned += 1;
        if report.changed {
            summary.files_changed += 1;
        }
        if report.skipped {
            summary.files_skipped += 1;
        }
        if report.error.is_some() {
            summary.files_failed += 1;
        }
        summary.nodes_annotated += report.summary.annotated;
    }
    summary.reports = reports;
    summary
}

// ═══════════════════════════════════════════════════════════════════════════════
// NAPI BINDINGS
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(feature = "napi")]
#[napi]
pub fn annotate_directory_native(root: String, write: bool, use_cache: bool) -> DirectorySummary {
    annotate_directory(
        Path::new(&root),
        write,
        use_cache,
        &AttrCatalog::default(),
        &LibraryCatalog::default(),
    )
}
