use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use viewbind_compiler::SourceMap;

/// Inputs shared by every command.
#[derive(Debug, Default)]
pub struct Inputs {
    pub paths: Vec<PathBuf>,
    pub source_text: Option<String>,
    pub manifests: Vec<PathBuf>,
}

/// Loaded Java sources and manifests of one round.
#[derive(Debug)]
pub struct LoadedInputs {
    pub sources: SourceMap,
    pub manifests: SourceMap,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read directory '{}': {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no .java files found in '{}'", .0.display())]
    NoJavaFiles(PathBuf),

    #[error("stdin can only be used for one input")]
    StdinTwice,

    #[error("nothing to scan: pass Java paths, -s/--source or --manifest")]
    Empty,
}

pub fn load_inputs(inputs: &Inputs) -> Result<LoadedInputs, LoadError> {
    let stdin_uses = inputs
        .paths
        .iter()
        .chain(&inputs.manifests)
        .filter(|p| is_stdin(p))
        .count();
    if stdin_uses > 1 {
        return Err(LoadError::StdinTwice);
    }

    let sources = load_java_sources(&inputs.paths, inputs.source_text.as_deref())?;
    let manifests = load_manifests(&inputs.manifests)?;
    if sources.is_empty() && manifests.is_empty() {
        return Err(LoadError::Empty);
    }

    tracing::debug!(
        sources = sources.len(),
        manifests = manifests.len(),
        "inputs loaded"
    );
    Ok(LoadedInputs { sources, manifests })
}

/// Inline text first, then each path in order. Directories are walked
/// recursively for `*.java` files.
pub fn load_java_sources(
    paths: &[PathBuf],
    source_text: Option<&str>,
) -> Result<SourceMap, LoadError> {
    let mut map = SourceMap::new();
    if let Some(text) = source_text {
        map.add_inline(text);
    }

    for path in paths {
        if is_stdin(path) {
            map.add_stdin(&read_stdin()?);
        } else if path.is_dir() {
            let files = collect_java_files(path)?;
            if files.is_empty() {
                return Err(LoadError::NoJavaFiles(path.clone()));
            }
            for file in &files {
                add_file(&mut map, file)?;
            }
        } else {
            add_file(&mut map, path)?;
        }
    }

    Ok(map)
}

pub fn load_manifests(paths: &[PathBuf]) -> Result<SourceMap, LoadError> {
    let mut map = SourceMap::new();
    for path in paths {
        if is_stdin(path) {
            map.add_stdin(&read_stdin()?);
        } else {
            add_file(&mut map, path)?;
        }
    }
    Ok(map)
}

/// All `*.java` files below `dir`, sorted by path.
///
/// Symlinked directories are not descended into; symlinked files are kept.
pub fn collect_java_files(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let mut files = Vec::new();
    let mut pending = vec![dir.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let read_dir_error = |source: io::Error| LoadError::ReadDir {
            path: dir.clone(),
            source,
        };
        for entry in fs::read_dir(&dir).map_err(read_dir_error)? {
            let entry = entry.map_err(read_dir_error)?;
            let file_type = entry.file_type().map_err(read_dir_error)?;
            let path = entry.path();
            if file_type.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "java")
                && (file_type.is_file() || path.is_file())
            {
                files.push(path);
            }
        }
    }

    // Sort for deterministic ordering
    files.sort();
    Ok(files)
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn read_stdin() -> Result<String, LoadError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(LoadError::Stdin)?;
    Ok(buf)
}

fn add_file(map: &mut SourceMap, path: &Path) -> Result<(), LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    map.add_file(&path.to_string_lossy(), &content);
    Ok(())
}
