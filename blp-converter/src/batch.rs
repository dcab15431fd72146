//! Expand command line paths into jobs and run them on a thread pool

use crate::cli::{Cli, OutputFormat};
use crate::convert::{ConvertOptions, convert_file, describe_file};
use crate::utils::{create_progress_bar, format_count};
use anyhow::{Context, Result};
use glob::{MatchOptions, Pattern, glob_with};
use indicatif::ProgressBar;
use log::*;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// One BLP file and where its image goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// A command line path expands to jobs, or is rejected outright
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Job(Job),
    Rejected { path: PathBuf, reason: String },
}

/// Counts for a finished batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub expected: usize,
    pub succeeded: usize,
}

impl Summary {
    pub fn failed(&self) -> usize {
        self.expected.saturating_sub(self.succeeded)
    }
}

/// Turn the paths given on the command line into entries.
///
/// A regular file becomes `<dest>/<file name>.<ext>`. A directory is searched
/// recursively for `*.blp` files, matched case-insensitively, and each one
/// becomes `<dest>/<directory name>/<relative path>.<ext>`.
pub fn plan(files: &[PathBuf], dest: &Path, format: OutputFormat) -> Vec<Entry> {
    let mut entries = Vec::new();

    for path in files {
        if path.is_dir() {
            match plan_directory(path, dest, format) {
                Ok(jobs) => entries.extend(jobs.into_iter().map(Entry::Job)),
                Err(e) => entries.push(Entry::Rejected {
                    path: path.clone(),
                    reason: format!("{e:#}"),
                }),
            }
        } else if path.is_file() {
            let name = path.file_name().map_or_else(PathBuf::new, PathBuf::from);
            entries.push(Entry::Job(Job {
                input: path.clone(),
                output: dest.join(name).with_extension(format.extension()),
            }));
        } else if path.symlink_metadata().is_ok() {
            entries.push(Entry::Rejected {
                path: path.clone(),
                reason: "Not a directory or a regular file".to_string(),
            });
        } else {
            entries.push(Entry::Rejected {
                path: path.clone(),
                reason: "Not found".to_string(),
            });
        }
    }

    entries
}

fn plan_directory(dir: &Path, dest: &Path, format: OutputFormat) -> Result<Vec<Job>> {
    let group = match dir.file_name() {
        Some(name) => PathBuf::from(name),
        None => dir
            .canonicalize()
            .with_context(|| format!("Failed to resolve {}", dir.display()))?
            .file_name()
            .map_or_else(PathBuf::new, PathBuf::from),
    };
    let out_dir = dest.join(group);

    let mut jobs: Vec<Job> = find_blp_files(dir)?
        .into_iter()
        .filter_map(|input| {
            let relative = input.strip_prefix(dir).ok()?.to_path_buf();
            Some(Job {
                output: out_dir.join(relative).with_extension(format.extension()),
                input,
            })
        })
        .collect();
    jobs.sort_by(|a, b| a.input.cmp(&b.input));

    debug!("{}: {}", dir.display(), format_count(jobs.len(), "BLP file"));
    Ok(jobs)
}

fn find_blp_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = format!("{}/**/*.blp", Pattern::escape(&dir.to_string_lossy()));
    let options = MatchOptions {
        case_sensitive: false,
        require_literal_separator: false,
        require_literal_leading_dot: false,
    };

    let files = glob_with(&pattern, options)
        .with_context(|| format!("Invalid search pattern {pattern}"))?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("Skipping unreadable entry: {e}");
                None
            }
        })
        .filter(|path| path.is_file())
        .collect();
    Ok(files)
}

/// Run every entry of the command line and count the outcomes.
///
/// A failing file is reported and counted; it never stops the batch.
pub fn run(cli: &Cli) -> Result<Summary> {
    let entries = plan(&cli.files, &cli.dest, cli.format);
    let options = ConvertOptions {
        format: cli.format,
        miplevel: cli.miplevel,
    };

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(cli.jobs)
        .build()
        .context("Failed to create the thread pool")?;
    info!(
        "Processing {} on {} threads",
        format_count(entries.len(), "entry"),
        pool.current_num_threads()
    );

    let pb = create_progress_bar(entries.len() as u64, "Converting", cli.quiet || cli.infos);
    let succeeded = AtomicUsize::new(0);

    pool.install(|| {
        entries.par_iter().for_each(|entry| {
            if process(entry, cli.infos, options, &pb) {
                succeeded.fetch_add(1, Ordering::Relaxed);
            }
            pb.inc(1);
        });
    });
    pb.finish_and_clear();

    Ok(Summary {
        expected: entries.len(),
        succeeded: succeeded.load(Ordering::Relaxed),
    })
}

fn process(entry: &Entry, infos: bool, options: ConvertOptions, pb: &ProgressBar) -> bool {
    match entry {
        Entry::Rejected { path, reason } => {
            pb.suspend(|| eprintln!("{}: {reason}", path.display()));
            false
        }
        Entry::Job(job) if infos => match describe_file(&job.input) {
            Ok(text) => {
                pb.suspend(|| print!("{text}"));
                true
            }
            Err(e) => {
                pb.suspend(|| eprintln!("{}: {e:#}", job.input.display()));
                false
            }
        },
        Entry::Job(job) => match convert_file(&job.input, &job.output, options) {
            Ok(()) => {
                pb.suspend(|| eprintln!("{}: OK", job.input.display()));
                true
            }
            Err(e) => {
                pb.suspend(|| eprintln!("{}: {e:#}", job.input.display()));
                false
            }
        },
    }
}
