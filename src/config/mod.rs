//! Typed project configuration.
//!
//! The configuration is a tagged type per preset rather than a loose
//! key/value map, so invariants like "pytest implies testing" hold by
//! construction.

use clap::ValueEnum;
use serde::Serialize;
use serde_json::json;
use std::fmt::Display;
use std::path::PathBuf;
use url::Url;

pub mod builder;

pub use builder::ConfigBuilder;

/// Supported language presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[value(rename_all = "lowercase")]
pub enum Preset {
    /// C starter project (Makefile, srcs/, includes/).
    C,
    /// Python starter project (modules, optional virtualenv).
    Py,
}

impl Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Preset::C => "c",
            Preset::Py => "py",
        };
        write!(f, "{s}")
    }
}

/// Where a vendored libft comes from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LibftSource {
    /// Existing directory on disk, copied into the project.
    Local(PathBuf),
    /// github.com repository, added as a git submodule.
    Remote(Url),
}

/// Which main source file to generate for a C project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MainFile {
    /// `<name>.c`
    ProjectNamed,
    /// `main.c`
    Main,
}

impl MainFile {
    /// Resolve the concrete filename for a given project name.
    pub fn filename(&self, name: &str) -> String {
        match self {
            MainFile::ProjectNamed => format!("{name}.c"),
            MainFile::Main => "main.c".to_string(),
        }
    }
}

/// Configuration collected for the C preset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CConfig {
    pub name: String,
    pub libft: Option<LibftSource>,
    pub main: Option<MainFile>,
    pub author: Option<String>,
    pub readme: bool,
}

/// Test scaffolding options for the Python preset.
///
/// Living inside `Option<Testing>` on [`PyConfig`] means `pytest` can
/// only be set when testing itself was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Testing {
    pub pytest: bool,
}

/// Configuration collected for the Python preset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PyConfig {
    pub name: String,
    pub venv: bool,
    pub depend: Option<PathBuf>,
    pub testing: Option<Testing>,
    pub author: Option<String>,
    pub readme: bool,
}

/// The full configuration record handed to the generator, immutable from
/// that point on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ProjectConfig {
    C(CConfig),
    Py(PyConfig),
}

impl ProjectConfig {
    pub fn name(&self) -> &str {
        match self {
            ProjectConfig::C(c) => &c.name,
            ProjectConfig::Py(p) => &p.name,
        }
    }

    pub fn preset(&self) -> Preset {
        match self {
            ProjectConfig::C(_) => Preset::C,
            ProjectConfig::Py(_) => Preset::Py,
        }
    }

    /// Flat template context. Rendering is a pure function of this value.
    pub fn render_context(&self) -> serde_json::Value {
        match self {
            ProjectConfig::C(c) => {
                let main = c.main.map(|m| m.filename(&c.name));
                let libft_path = c.libft.as_ref().map(|libft| match libft {
                    LibftSource::Local(path) => path.display().to_string(),
                    LibftSource::Remote(url) => url.to_string(),
                });
                json!({
                    "name": c.name,
                    "main": main,
                    "libft": c.libft.is_some(),
                    "libft_path": libft_path,
                    "author": c.author,
                    "readme": c.readme,
                    "lang": "c",
                })
            }
            ProjectConfig::Py(p) => {
                let depend = p.depend.as_ref().map(|d| d.display().to_string());
                json!({
                    "name": p.name,
                    "venv": p.venv,
                    "depend": depend,
                    "testing": p.testing.is_some(),
                    "pytest": p.testing.map(|t| t.pytest).unwrap_or(false),
                    "author": p.author,
                    "readme": p.readme,
                    "lang": "py",
                })
            }
        }
    }

    /// Key/value pairs for the pre-generation summary, in prompt order.
    pub fn summary_entries(&self) -> Vec<(String, String)> {
        let mut entries = vec![("name".to_string(), self.name().to_string())];
        match self {
            ProjectConfig::C(c) => {
                match &c.libft {
                    Some(LibftSource::Local(path)) => {
                        entries.push(("libft_path".into(), path.display().to_string()));
                    }
                    Some(LibftSource::Remote(url)) => {
                        entries.push(("libft_repo".into(), url.to_string()));
                    }
                    None => {}
                }
                if let Some(main) = c.main {
                    entries.push(("main".into(), main.filename(&c.name)));
                }
                if let Some(author) = &c.author {
                    entries.push(("author".into(), author.clone()));
                }
                if c.readme {
                    entries.push(("readme".into(), "true".into()));
                }
            }
            ProjectConfig::Py(p) => {
                if p.venv {
                    entries.push(("venv".into(), "true".into()));
                }
                if let Some(depend) = &p.depend {
                    entries.push(("depend".into(), depend.display().to_string()));
                }
                if let Some(testing) = p.testing {
                    entries.push(("testing".into(), "true".into()));
                    if testing.pytest {
                        entries.push(("pytest".into(), "true".into()));
                    }
                }
                if let Some(author) = &p.author {
                    entries.push(("author".into(), author.clone()));
                }
                if p.readme {
                    entries.push(("readme".into(), "true".into()));
                }
            }
        }
        entries
    }
}
