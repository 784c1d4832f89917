use indexmap::IndexMap;
use std::{
    fmt,
    path::{Path, PathBuf},
};

const SRC_DIRECTORY: &str = "src";

/// Page-structure convention of the target Next.js project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RouterMode {
    #[default]
    App,
    Pages,
}
impl RouterMode {
    pub fn as_str(&self) -> &str {
        match self {
            Self::App => "app",
            Self::Pages => "pages",
        }
    }
}
// clap restricts the accepted values, so anything that is not "pages" is the app router.
impl From<&str> for RouterMode {
    fn from(value: &str) -> Self {
        match value {
            "pages" => Self::Pages,
            _ => Self::App,
        }
    }
}
impl fmt::Display for RouterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returns the directory generated source files are placed under: `root` itself, or `root/src`
/// when the src layout is requested. The root is taken verbatim.
pub fn resolve_base(root: &Path, use_src: bool) -> PathBuf {
    if use_src {
        root.join(SRC_DIRECTORY)
    } else {
        root.to_path_buf()
    }
}

/// Logical name to directory mapping of the project skeleton, in creation order.
///
/// The `router` (app) and `pages` entries are both present; callers pick the one matching
/// their [`RouterMode`] with [`router_key`].
pub fn skeleton_dirs(root: &Path, use_src: bool) -> IndexMap<&'static str, PathBuf> {
    let base = resolve_base(root, use_src);

    IndexMap::from([
        ("router", base.join("app")),
        ("pages", base.join("pages")),
        ("components_ui", base.join("components").join("ui")),
        ("components_feature", base.join("components").join("feature")),
        ("components_layout", base.join("components").join("layout")),
        ("hooks", base.join("hooks")),
        ("lib", base.join("lib")),
        ("services", base.join("services")),
        ("store", base.join("store")),
        ("styles", base.join("styles")),
        ("types", base.join("types")),
        ("utils", base.join("utils")),
    ])
}

/// Skeleton key of the page directory used by `mode`.
pub fn router_key(mode: RouterMode) -> &'static str {
    match mode {
        RouterMode::App => "router",
        RouterMode::Pages => "pages",
    }
}

/// Directories of the skeleton that get created for `mode`: the matching router directory
/// followed by every non-router directory.
pub fn skeleton_for(root: &Path, use_src: bool, mode: RouterMode) -> Vec<PathBuf> {
    let mut dirs = skeleton_dirs(root, use_src);
    let selected = router_key(mode);

    let mut ordered = Vec::with_capacity(dirs.len() - 1);

    if let Some(router_dir) = dirs.shift_remove(selected) {
        ordered.push(router_dir);
    }

    ordered.extend(
        dirs.into_iter()
            .filter(|(key, _)| !matches!(*key, "router" | "pages"))
            .map(|(_, path)| path),
    );

    ordered
}
