use crate::{
    errors::{FileOperation, IoError},
    plan::FilePlanEntry,
};
use colored::{ColoredString, Colorize};
use indexmap::IndexMap;
use std::path::{Component, Path, PathBuf};

/// What a real run would do with a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlannedAction {
    Create,
    Overwrite,
    Skip,
    Directory,
    Exists,
}
impl PlannedAction {
    /// Mirrors the writer's decision without touching the file.
    pub fn for_entry(entry: &FilePlanEntry) -> Result<Self, IoError> {
        let path = entry.target_path.as_path();

        let exists = path
            .try_exists()
            .map_err(|error| IoError::new(FileOperation::Inspect, path.into(), error))?;

        Ok(match (exists, entry.overwrite_requested) {
            (false, _) => Self::Create,
            (true, true) => Self::Overwrite,
            (true, false) => Self::Skip,
        })
    }
    /// A skeleton directory is created only when it is missing.
    pub fn for_dir(path: &Path) -> Result<Self, IoError> {
        let exists = path
            .try_exists()
            .map_err(|error| IoError::new(FileOperation::Inspect, path.into(), error))?;

        Ok(if exists { Self::Exists } else { Self::Directory })
    }
    fn label(&self) -> ColoredString {
        match self {
            Self::Create => "create".green(),
            Self::Overwrite => "overwrite".blue(),
            Self::Skip => "skip".yellow(),
            Self::Directory => "mkdir".blue(),
            Self::Exists => "exists".yellow(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PreviewEntry {
    pub path: PathBuf,
    pub action: PlannedAction,
}

/// A node in the tree, either a file or a directory.
#[derive(Debug, Default)]
struct TreeNode {
    action: Option<PlannedAction>,
    children: IndexMap<String, TreeNode>,
}
impl TreeNode {
    fn is_file(&self) -> bool {
        !matches!(self.action, None | Some(PlannedAction::Directory | PlannedAction::Exists))
    }
}

/// Links every entry under `root`, creating intermediate directory nodes as needed.
fn build_tree(root: &Path, entries: &[PreviewEntry]) -> TreeNode {
    let mut tree = TreeNode::default();

    for entry in entries {
        let relative = entry.path.strip_prefix(root).unwrap_or(entry.path.as_path());

        let mut node = &mut tree;
        for component in relative.components() {
            // only plain names become nodes
            let Component::Normal(name) = component else {
                continue;
            };
            node = node
                .children
                .entry(name.to_string_lossy().to_string())
                .or_default();
        }

        node.action = Some(entry.action);
    }

    tree
}

fn render_node(name: &str, node: &TreeNode, prefix: &str, is_last: bool, out: &mut String) {
    let connector = if is_last { "└── " } else { "├── " };

    let line = match node.action {
        Some(action) if node.is_file() => format!("{} ({})", name.green(), action.label()),
        Some(action) => format!("{} ({})", name.blue(), action.label()),
        None => name.blue().to_string(),
    };
    out.push_str(&format!("{}{}{}\n", prefix.yellow(), connector.yellow(), line));

    let child_prefix = if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    };

    let len = node.children.len();
    for (i, (child_name, child)) in node.children.iter().enumerate() {
        render_node(child_name, child, &child_prefix, i == len - 1, out);
    }
}

/// Renders the planned entries as an ASCII tree rooted at `root`.
pub fn render_tree(root: &Path, entries: &[PreviewEntry]) -> String {
    let tree = build_tree(root, entries);

    let root_name = root
        .file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| root.display().to_string());

    let mut out = String::new();
    render_node(&root_name, &tree, "", true, &mut out);

    out
}

pub fn preview_as_tree(root: &Path, entries: &[PreviewEntry]) {
    println!(
        "Legend: {} = (directory), {} = (file)",
        "blue".blue(),
        "green".green()
    );

    println!(
        "{} {}\n",
        "┌─".bold().bright_blue(),
        "Preview".bold().bright_blue()
    );

    print!("{}", render_tree(root, entries));
}
