use crate::{content, layout::resolve_base, layout::RouterMode};
use indexmap::{map::Entry, IndexMap};
use std::path::{Path, PathBuf};

/// Flags of the `generate` command.
#[derive(Debug, Clone, Default)]
pub struct GenerationFlags {
    pub root_path: PathBuf,
    pub router_mode: RouterMode,
    pub use_src_layout: bool,
    pub include_style_templates: bool,
    pub include_type_config: bool,
    pub force_overwrite: bool,
}

/// Flags of the `scaffold` command.
#[derive(Debug, Clone)]
pub struct ScaffoldFlags {
    pub root_path: PathBuf,
    pub router_mode: RouterMode,
    pub use_src_layout: bool,
    pub include_templates: bool,
    pub force_overwrite: bool,
}
impl Default for ScaffoldFlags {
    fn default() -> Self {
        Self {
            root_path: PathBuf::from("."),
            router_mode: RouterMode::default(),
            use_src_layout: true,
            include_templates: false,
            force_overwrite: false,
        }
    }
}

/// A file staged in memory: its content is fully rendered before anything touches the disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePlanEntry {
    pub target_path: PathBuf,
    pub content: String,
    pub overwrite_requested: bool,
}

/// Ordered set of files to write, keyed by target path.
#[derive(Debug, Clone, Default)]
pub struct FilePlan {
    entries: IndexMap<PathBuf, FilePlanEntry>,
}
impl FilePlan {
    pub fn new() -> Self {
        Self::default()
    }
    /// Stages a file. A second entry for a path that is already planned is dropped, so one run
    /// never writes the same path twice.
    pub fn push(&mut self, target_path: PathBuf, content: String, overwrite_requested: bool) {
        match self.entries.entry(target_path) {
            Entry::Occupied(occupied) => {
                log::debug!(
                    "already planned, ignoring duplicate: {}",
                    occupied.key().display()
                );
            }
            Entry::Vacant(vacant) => {
                let target_path = vacant.key().clone();
                vacant.insert(FilePlanEntry {
                    target_path,
                    content,
                    overwrite_requested,
                });
            }
        }
    }
    pub fn entries(&self) -> impl Iterator<Item = &FilePlanEntry> {
        self.entries.values()
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Maps `generate` flags to the files it writes.
///
/// Page files land under the resolved base (`root` or `root/src`); the Tailwind, PostCSS and
/// TypeScript configs always sit at the project root.
pub fn build_plan(flags: &GenerationFlags) -> FilePlan {
    let root = flags.root_path.as_path();
    let base = resolve_base(root, flags.use_src_layout);
    let force = flags.force_overwrite;

    let mut plan = FilePlan::new();

    match flags.router_mode {
        RouterMode::App => {
            plan.push(
                base.join("app").join("layout.tsx"),
                content::root_layout(flags.include_style_templates),
                force,
            );
            plan.push(base.join("app").join("page.tsx"), content::app_page(), force);
        }
        RouterMode::Pages => {
            plan.push(
                base.join("pages").join("index.tsx"),
                content::pages_index(),
                force,
            );
            if flags.include_style_templates {
                plan.push(
                    base.join("pages").join("_app.tsx"),
                    content::pages_app(),
                    force,
                );
            }
        }
    }

    if flags.include_style_templates {
        push_style_templates(&mut plan, root, flags.use_src_layout, force);

        let globals_path = match flags.router_mode {
            RouterMode::App => base.join("app").join("globals.css"),
            RouterMode::Pages => base.join("styles").join("globals.css"),
        };
        plan.push(globals_path, content::globals_css(), force);
    }

    if flags.include_type_config {
        plan.push(
            root.join("tsconfig.json"),
            content::tsconfig(flags.use_src_layout),
            force,
        );
    }

    log::debug!(
        "planned {} file(s) for {} router under {}",
        plan.len(),
        flags.router_mode,
        base.display()
    );

    plan
}

/// Maps `scaffold` flags to the template files it writes. Empty unless templates are requested.
pub fn build_template_plan(flags: &ScaffoldFlags) -> FilePlan {
    let mut plan = FilePlan::new();

    if !flags.include_templates {
        return plan;
    }

    let root = flags.root_path.as_path();
    let base = resolve_base(root, flags.use_src_layout);

    push_style_templates(&mut plan, root, flags.use_src_layout, flags.force_overwrite);
    plan.push(
        base.join("styles").join("globals.css"),
        content::globals_css(),
        flags.force_overwrite,
    );

    plan
}

fn push_style_templates(plan: &mut FilePlan, root: &Path, use_src: bool, force: bool) {
    plan.push(
        root.join("tailwind.config.ts"),
        content::tailwind_config(use_src),
        force,
    );
    plan.push(
        root.join("postcss.config.js"),
        content::postcss_config(),
        force,
    );
}
