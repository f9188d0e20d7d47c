//! Material Design icon and symbol descriptors.

use std::fmt;
use std::path::{Path, PathBuf};

/// Output subdirectory for classic Material icons.
pub const ICONS_SUBDIR: &str = "md-icons";

/// Output subdirectory for Material Symbols.
pub const SYMBOLS_SUBDIR: &str = "md-symbols";

/// Which half of the material-design-icons checkout an entry comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IconKind {
    /// Classic icon under `src/<group>/<name>/materialicons/`
    Icon {
        /// Category group in the checkout (e.g., "av")
        group: String,
    },
    /// Variable-weight symbol under `symbols/web/<name>/materialsymbolssharp/`
    Symbol,
}

/// One icon to rasterize.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconSpec {
    /// Source family and location
    pub kind: IconKind,
    /// Icon name (e.g., "play_arrow")
    pub name: String,
}

impl IconSpec {
    /// Creates a classic icon entry.
    #[must_use]
    pub fn icon(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: IconKind::Icon {
                group: group.into(),
            },
            name: name.into(),
        }
    }

    /// Creates a symbol entry.
    #[must_use]
    pub fn symbol(name: impl Into<String>) -> Self {
        Self {
            kind: IconKind::Symbol,
            name: name.into(),
        }
    }

    /// SVG source path inside a material-design-icons checkout.
    ///
    /// ```
    /// use assetprep::models::IconSpec;
    /// use std::path::Path;
    ///
    /// let spec = IconSpec::icon("av", "pause");
    /// assert_eq!(
    ///     spec.source_path(Path::new("/md")),
    ///     Path::new("/md/src/av/pause/materialicons/24px.svg")
    /// );
    /// ```
    #[must_use]
    pub fn source_path(&self, base_dir: &Path) -> PathBuf {
        match &self.kind {
            IconKind::Icon { group } => base_dir
                .join("src")
                .join(group)
                .join(&self.name)
                .join("materialicons")
                .join("24px.svg"),
            IconKind::Symbol => base_dir
                .join("symbols")
                .join("web")
                .join(&self.name)
                .join("materialsymbolssharp")
                .join(format!("{}_wght100_24px.svg", self.name)),
        }
    }

    /// Output subdirectory name for this entry's family.
    #[must_use]
    pub const fn output_subdir(&self) -> &'static str {
        match self.kind {
            IconKind::Icon { .. } => ICONS_SUBDIR,
            IconKind::Symbol => SYMBOLS_SUBDIR,
        }
    }

    /// PNG destination path under the output root.
    #[must_use]
    pub fn output_path(&self, out_root: &Path) -> PathBuf {
        out_root
            .join(self.output_subdir())
            .join(format!("{}.png", self.name))
    }
}

impl fmt::Display for IconSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            IconKind::Icon { group } => write!(f, "icon {group}/{}", self.name),
            IconKind::Symbol => write!(f, "symbol {}", self.name),
        }
    }
}
