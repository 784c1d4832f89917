use crate::{
    errors::IoError,
    layout::skeleton_for,
    plan::{build_plan, build_template_plan, FilePlan, GenerationFlags, ScaffoldFlags},
    preview::{preview_as_tree, PlannedAction, PreviewEntry},
    report::{self, RunSummary},
    writer,
};

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ScaffoldError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Io(#[from] IoError),
}

/// Writes the basic page files and the optional Tailwind/PostCSS/TypeScript configs, then
/// prints the `Files written` summary.
///
/// With `dry_run` the plan is previewed as a tree instead and nothing is written; the returned
/// summary then reflects what a real run would do.
///
/// # Errors
///
/// Returns a [`ScaffoldError`] if a file or directory cannot be inspected, created or written.
/// Files written before the failure are left in place.
pub fn generate_basics(
    flags: &GenerationFlags,
    dry_run: bool,
) -> Result<RunSummary, ScaffoldError> {
    let plan = build_plan(flags);

    if dry_run {
        let summary = preview_plan(flags.root_path.as_path(), &plan, vec![])?;

        return Ok(summary);
    }

    let summary = write_plan(&plan)?;

    report::print_generation(&summary);

    Ok(summary)
}

/// Creates the project directory skeleton and, when requested, the Tailwind templates.
///
/// The skeleton is created regardless of whether templates are requested. The returned summary
/// is `None` when templates were not requested.
///
/// # Errors
///
/// Returns a [`ScaffoldError`] if a directory or template file cannot be created or written.
pub fn scaffold_project(
    flags: &ScaffoldFlags,
    dry_run: bool,
) -> Result<Option<RunSummary>, ScaffoldError> {
    let root = flags.root_path.as_path();
    let directories = skeleton_for(root, flags.use_src_layout, flags.router_mode);
    let plan = build_template_plan(flags);

    if dry_run {
        let directories = directories
            .into_iter()
            .map(|path| {
                let action = PlannedAction::for_dir(&path)?;

                Ok(PreviewEntry { path, action })
            })
            .collect::<Result<Vec<_>, IoError>>()?;

        let summary = preview_plan(root, &plan, directories)?;

        return Ok(flags.include_templates.then_some(summary));
    }

    for directory in &directories {
        log::debug!("ensuring directory: {}", directory.display());
        writer::ensure_dir(directory)?;
    }

    let templates = if flags.include_templates {
        Some(write_plan(&plan)?)
    } else {
        None
    };

    report::print_scaffold(templates.as_ref());

    Ok(templates)
}

/// Writes every planned file in order, stopping at the first I/O failure.
fn write_plan(plan: &FilePlan) -> Result<RunSummary, IoError> {
    let outcomes = plan
        .entries()
        .map(writer::write)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RunSummary::from_outcomes(outcomes))
}

fn preview_plan(
    root: &std::path::Path,
    plan: &FilePlan,
    mut entries: Vec<PreviewEntry>,
) -> Result<RunSummary, IoError> {
    let mut outcomes = Vec::with_capacity(plan.len());

    for entry in plan.entries() {
        let action = PlannedAction::for_entry(entry)?;

        outcomes.push(match action {
            PlannedAction::Skip => writer::WriteOutcome::Skipped,
            _ => writer::WriteOutcome::Written,
        });
        entries.push(PreviewEntry {
            path: entry.target_path.clone(),
            action,
        });
    }

    preview_as_tree(root, &entries);

    println!("\nDry run: {} files planned, nothing written.", plan.len());

    Ok(RunSummary::from_outcomes(outcomes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::RouterMode;
    use std::{fs, path::Path};
    use tempfile::TempDir;

    fn generation(root: &Path) -> GenerationFlags {
        GenerationFlags {
            root_path: root.to_path_buf(),
            ..Default::default()
        }
    }

    #[test]
    fn second_run_without_force_skips_everything() {
        let temp = TempDir::new().unwrap();
        let flags = GenerationFlags {
            include_style_templates: true,
            include_type_config: true,
            ..generation(temp.path())
        };

        let first = generate_basics(&flags, false).unwrap();
        let second = generate_basics(&flags, false).unwrap();

        assert_eq!(first.written, 6);
        assert_eq!(second.written, 0);
        assert_eq!(second.skipped, second.total_planned);
    }

    #[test]
    fn forced_runs_rewrite_identical_content() {
        let temp = TempDir::new().unwrap();
        let flags = GenerationFlags {
            router_mode: RouterMode::Pages,
            use_src_layout: true,
            include_style_templates: true,
            force_overwrite: true,
            ..generation(temp.path())
        };

        let first = generate_basics(&flags, false).unwrap();
        let app = temp.path().join("src/pages/_app.tsx");
        let before = fs::read_to_string(&app).unwrap();

        let second = generate_basics(&flags, false).unwrap();

        assert_eq!(first.written, first.total_planned);
        assert_eq!(second.written, second.total_planned);
        assert_eq!(fs::read_to_string(&app).unwrap(), before);
    }

    #[test]
    fn written_plus_skipped_is_total_for_every_flag_combination() {
        for bits in 0..32u8 {
            let temp = TempDir::new().unwrap();
            let flags = GenerationFlags {
                root_path: temp.path().to_path_buf(),
                router_mode: if bits & 1 == 0 {
                    RouterMode::App
                } else {
                    RouterMode::Pages
                },
                use_src_layout: bits & 2 != 0,
                include_style_templates: bits & 4 != 0,
                include_type_config: bits & 8 != 0,
                force_overwrite: bits & 16 != 0,
            };

            for _ in 0..2 {
                let summary = generate_basics(&flags, false).unwrap();
                assert_eq!(summary.written + summary.skipped, summary.total_planned);
            }
        }
    }

    #[test]
    fn dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let flags = GenerationFlags {
            include_type_config: true,
            ..generation(temp.path())
        };

        let summary = generate_basics(&flags, true).unwrap();

        assert_eq!(summary.total_planned, 3);
        assert_eq!(summary.written, 3);
        assert!(fs::read_dir(temp.path()).unwrap().next().is_none());
    }

    #[test]
    fn scaffold_creates_skeleton_without_templates() {
        let temp = TempDir::new().unwrap();
        let flags = ScaffoldFlags {
            root_path: temp.path().to_path_buf(),
            ..Default::default()
        };

        let templates = scaffold_project(&flags, false).unwrap();

        assert!(templates.is_none());
        assert!(temp.path().join("src/app").is_dir());
        assert!(temp.path().join("src/components/feature").is_dir());
        assert!(!temp.path().join("src/pages").exists());
        assert!(!temp.path().join("tailwind.config.ts").exists());
    }

    #[test]
    fn scaffold_templates_are_idempotent() {
        let temp = TempDir::new().unwrap();
        let flags = ScaffoldFlags {
            root_path: temp.path().to_path_buf(),
            router_mode: RouterMode::Pages,
            use_src_layout: false,
            include_templates: true,
            force_overwrite: false,
        };

        let first = scaffold_project(&flags, false).unwrap().unwrap();
        let second = scaffold_project(&flags, false).unwrap().unwrap();

        assert_eq!((first.written, first.skipped), (3, 0));
        assert_eq!((second.written, second.skipped), (0, 3));
        assert!(temp.path().join("pages").is_dir());
        assert!(temp.path().join("styles/globals.css").is_file());
    }

    #[test]
    fn io_failure_aborts_the_run() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("app"), "blocks the app directory").unwrap();

        let result = generate_basics(&generation(temp.path()), false);

        assert!(matches!(result, Err(ScaffoldError::Io(_))));
        assert!(!temp.path().join("app").is_dir());
    }

    #[test]
    fn scaffold_dry_run_creates_no_directories() {
        let temp = TempDir::new().unwrap();
        let flags = ScaffoldFlags {
            root_path: temp.path().to_path_buf(),
            include_templates: true,
            ..Default::default()
        };

        let summary = scaffold_project(&flags, true).unwrap().unwrap();

        assert_eq!((summary.total_planned, summary.written), (3, 3));
        assert!(fs::read_dir(temp.path()).unwrap().next().is_none());
    }
}
