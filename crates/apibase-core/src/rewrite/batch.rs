//! Per-file migration and the sequential batch over the target list.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::error::RewriteError;
use super::import::ImportSpec;
use super::rules::RewriteRules;
use crate::config::RewriteConfig;

/// Result of rewriting one file's text in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRewrite {
    pub text: String,
    pub replacements: usize,
    pub import_added: bool,
}

/// What happened to a single target file.
#[derive(Debug)]
pub enum FileOutcome {
    Updated {
        replacements: usize,
        import_added: bool,
    },
    /// No legacy literal found; file left untouched.
    Unchanged,
    NotFound,
    Failed(RewriteError),
}

impl FileOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, FileOutcome::Updated { .. })
    }
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileOutcome::Updated {
                replacements,
                import_added,
            } => {
                write!(f, "updated ({replacements} replacements")?;
                if *import_added {
                    write!(f, ", import added")?;
                }
                write!(f, ")")
            }
            FileOutcome::Unchanged => write!(f, "no changes needed"),
            FileOutcome::NotFound => write!(f, "file not found"),
            FileOutcome::Failed(e) => write!(f, "failed: {e}"),
        }
    }
}

#[derive(Debug)]
pub struct FileReport {
    /// Target path as listed (relative to the source directory).
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

/// Aggregate of a batch run, in target order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
    pub dry_run: bool,
}

impl BatchReport {
    pub fn updated(&self) -> usize {
        self.count(|o| o.is_updated())
    }

    pub fn unchanged(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Unchanged))
    }

    pub fn not_found(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::NotFound))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Failed(_)))
    }

    pub fn total_replacements(&self) -> usize {
        self.files
            .iter()
            .map(|r| match r.outcome {
                FileOutcome::Updated { replacements, .. } => replacements,
                _ => 0,
            })
            .sum()
    }

    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.files.iter().filter(|r| pred(&r.outcome)).count()
    }
}

/// Compiled migration: rules, import, and whether to write results.
#[derive(Debug, Clone)]
pub struct Migration {
    rules: RewriteRules,
    import: ImportSpec,
    dry_run: bool,
}

impl Migration {
    pub fn new(legacy_origin: &str, import: ImportSpec) -> Result<Self, RewriteError> {
        let rules = RewriteRules::new(legacy_origin, &import.constant)?;
        Ok(Self {
            rules,
            import,
            dry_run: false,
        })
    }

    pub fn from_config(cfg: &RewriteConfig) -> Result<Self, RewriteError> {
        Self::new(
            &cfg.legacy_origin,
            ImportSpec::new(&cfg.constant, &cfg.import_module)?,
        )
    }

    /// Compute outcomes without writing anything.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Rewrites `text` in memory. The import is only considered when at least
    /// one replacement happened.
    pub fn rewrite_source(&self, text: &str) -> SourceRewrite {
        let (rewritten, replacements) = self.rules.apply(text);
        if replacements == 0 {
            return SourceRewrite {
                text: rewritten,
                replacements,
                import_added: false,
            };
        }
        match self.import.insert(&rewritten) {
            Some(with_import) => SourceRewrite {
                text: with_import,
                replacements,
                import_added: true,
            },
            None => SourceRewrite {
                text: rewritten,
                replacements,
                import_added: false,
            },
        }
    }

    /// Migrates one file in place. Never returns an error; failures are
    /// captured in the outcome so the batch can continue.
    pub fn migrate_file(&self, path: &Path) -> FileOutcome {
        let text = match fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return FileOutcome::NotFound,
            Err(source) => {
                return FileOutcome::Failed(RewriteError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let result = self.rewrite_source(&text);
        if result.replacements == 0 {
            return FileOutcome::Unchanged;
        }

        if !self.dry_run {
            if let Err(source) = fs::write(path, &result.text) {
                return FileOutcome::Failed(RewriteError::Write {
                    path: path.to_path_buf(),
                    source,
                });
            }
        }

        FileOutcome::Updated {
            replacements: result.replacements,
            import_added: result.import_added,
        }
    }

    /// Migrates each target (relative to `src_dir`) in order, one at a time.
    ///
    /// Only a missing `src_dir` aborts; per-file problems are recorded in the
    /// report. There is no rollback: files already written stay written.
    pub fn run(&self, src_dir: &Path, targets: &[PathBuf]) -> Result<BatchReport, RewriteError> {
        if !src_dir.is_dir() {
            return Err(RewriteError::MissingSrcDir(src_dir.to_path_buf()));
        }

        let mut report = BatchReport {
            files: Vec::with_capacity(targets.len()),
            dry_run: self.dry_run,
        };

        for target in targets {
            let full = src_dir.join(target);
            let outcome = self.migrate_file(&full);
            match &outcome {
                FileOutcome::Updated { replacements, .. } => {
                    tracing::info!(path = %target.display(), replacements, dry_run = self.dry_run, "migrated");
                }
                FileOutcome::Unchanged => {
                    tracing::debug!(path = %target.display(), "no legacy urls");
                }
                FileOutcome::NotFound => {
                    tracing::warn!(path = %full.display(), "target not found");
                }
                FileOutcome::Failed(e) => {
                    tracing::warn!(path = %full.display(), error = %e, "migration failed");
                }
            }
            report.files.push(FileReport {
                path: target.clone(),
                outcome,
            });
        }

        Ok(report)
    }
}
