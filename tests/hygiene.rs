//! Hygiene: enforces coding standards at test time.
//!
//! Scans the crate's production sources (`src/`, minus `*_test.rs`) for
//! patterns that crash the editor or silently swallow errors. Every budget is
//! zero; raising one requires removing an existing occurrence first.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new(env!("CARGO_MANIFEST_DIR")).join("src").as_path(), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

/// Per-file count of lines containing `pattern`, omitting files with none.
fn occurrences(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|f| (f.path.clone(), f.content.lines().filter(|l| l.contains(pattern)).count()))
        .filter(|(_, n)| *n > 0)
        .collect()
}

fn check_budget(pattern: &str, max: usize) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found to scan");
    let hits = occurrences(&files, pattern);
    let count: usize = hits.iter().map(|(_, n)| n).sum();
    let detail = hits
        .iter()
        .map(|(path, n)| format!("  {path}: {n}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(count <= max, "`{pattern}` budget exceeded: found {count}, max {max}.\n{detail}");
}

macro_rules! budget {
    ($($name:ident => $pattern:expr, $max:expr;)*) => {
        $(
            #[test]
            fn $name() {
                check_budget($pattern, $max);
            }
        )*
    };
}

budget! {
    // Panics: these crash the editor mid-gesture.
    unwrap_budget => ".unwrap()", 0;
    expect_budget => ".expect(", 0;
    panic_budget => "panic!(", 0;
    unreachable_budget => "unreachable!(", 0;
    todo_budget => "todo!(", 0;
    unimplemented_budget => "unimplemented!(", 0;
    // Silent loss: discards errors without inspecting.
    silent_discard_budget => "let _ =", 0;
    dot_ok_budget => ".ok()", 0;
    // Style / structure.
    allow_dead_code_budget => "#[allow(dead_code)]", 0;
}
