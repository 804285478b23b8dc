//! Interactive configuration builder.
//!
//! Conducts the fixed per-preset prompt sequence and accumulates a
//! [`ProjectConfig`]. Pure with respect to the filesystem apart from
//! reading user input and checking that user-supplied paths exist; the
//! generator is never handed a path that does not exist.

use super::{CConfig, LibftSource, MainFile, Preset, ProjectConfig, PyConfig, Testing};
use crate::{
    constants::{ALLOWED_GIT_HOST, DEFAULT_LIBFT_PATH, MAX_PATH_ATTEMPTS},
    error::{Error, Result},
    ioutils::expand_tilde,
    prompt::{ConfirmationConfig, PromptProvider, TextPromptConfig},
};
use console::style;
use log::warn;
use std::path::{Path, PathBuf};
use url::Url;

/// What a path answer must point at.
#[derive(Debug, Clone, Copy)]
enum PathKind {
    Directory,
    File,
}

impl PathKind {
    fn describe(&self) -> &'static str {
        match self {
            PathKind::Directory => "directory",
            PathKind::File => "file",
        }
    }
}

/// The message shown to the user when a path answer is rejected.
fn rejection_message(path: &Path, kind: PathKind) -> String {
    format!("'{}' is not an existing {}", path.display(), kind.describe())
}

pub struct ConfigBuilder<'a, P: PromptProvider + ?Sized> {
    prompts: &'a P,
}

impl<'a, P: PromptProvider + ?Sized> ConfigBuilder<'a, P> {
    pub fn new(prompts: &'a P) -> Self {
        Self { prompts }
    }

    /// Run the prompt sequence for `preset` and return the collected
    /// configuration.
    pub fn build(&self, name: &str, preset: Preset) -> Result<ProjectConfig> {
        if name.trim().is_empty() {
            return Err(Error::ValidationError("project name must not be empty".into()));
        }
        match preset {
            Preset::C => Ok(ProjectConfig::C(self.build_c(name)?)),
            Preset::Py => Ok(ProjectConfig::Py(self.build_py(name)?)),
        }
    }

    fn build_c(&self, name: &str) -> Result<CConfig> {
        let libft = if self.confirm("Do you want to add your libft?")? {
            if self.confirm("From Git repo?")? {
                let answer = self.text("What's the git repo url?", None)?;
                let url = Url::parse(&answer)?;
                let host = url.host_str().unwrap_or_default();
                if host != ALLOWED_GIT_HOST {
                    // Hard failure, not a retry loop.
                    return Err(Error::UnsupportedGitHost { host: host.to_string() });
                }
                Some(LibftSource::Remote(url))
            } else {
                let path = self.existing_path(
                    "Please enter the path to your libft",
                    Some(DEFAULT_LIBFT_PATH),
                    PathKind::Directory,
                )?;
                Some(LibftSource::Local(path))
            }
        } else {
            None
        };

        // At most one of the two main-file prompts sticks.
        let main = if self.confirm(&format!("Do you want a \"{name}.c\" file?"))? {
            Some(MainFile::ProjectNamed)
        } else if self.confirm("Do you want a 'main.c' file?")? {
            Some(MainFile::Main)
        } else {
            None
        };

        let author = self.ask_author()?;
        let readme = self.confirm("Create a README.md?")?;

        Ok(CConfig { name: name.to_string(), libft, main, author, readme })
    }

    fn build_py(&self, name: &str) -> Result<PyConfig> {
        let venv = self.confirm("Do you want a virtualenv?")?;

        let depend = if self.confirm("Install dependencies(requirements.txt)?")? {
            Some(self.existing_path(
                "Please enter the path to your requirements.txt",
                None,
                PathKind::File,
            )?)
        } else {
            None
        };

        let testing = if self.confirm("Do you want to create testing files?")? {
            let pytest =
                self.confirm("Do you want to install pyTest testing framework?")?;
            Some(Testing { pytest })
        } else {
            None
        };

        let author = self.ask_author()?;
        let readme = self.confirm("Create a README.md?")?;

        Ok(PyConfig { name: name.to_string(), venv, depend, testing, author, readme })
    }

    fn ask_author(&self) -> Result<Option<String>> {
        if self.confirm("Create a author file?")? {
            Ok(Some(self.text("Input your username", None)?))
        } else {
            Ok(None)
        }
    }

    fn confirm(&self, prompt: &str) -> Result<bool> {
        self.prompts.prompt_confirmation(&ConfirmationConfig {
            prompt: prompt.to_string(),
            default: false,
        })
    }

    fn text(&self, prompt: &str, default: Option<&str>) -> Result<String> {
        self.prompts.prompt_text(&TextPromptConfig {
            prompt: prompt.to_string(),
            default: default.map(str::to_string),
        })
    }

    /// Ask for a path until the answer exists and has the right kind,
    /// bounded so a scripted run cannot loop forever.
    fn existing_path(
        &self,
        prompt: &str,
        default: Option<&str>,
        kind: PathKind,
    ) -> Result<PathBuf> {
        for _ in 0..MAX_PATH_ATTEMPTS {
            let answer = self.text(prompt, default)?;
            let expanded = expand_tilde(&answer);
            // Rejections go to stderr directly; the default log level
            // would swallow anything below `error`.
            match std::fs::canonicalize(&expanded) {
                Ok(path) => {
                    let ok = match kind {
                        PathKind::Directory => path.is_dir(),
                        PathKind::File => path.is_file(),
                    };
                    if ok {
                        return Ok(path);
                    }
                    eprintln!("{}", style(rejection_message(&path, kind)).red());
                }
                Err(err) => {
                    eprintln!("{}", style(rejection_message(&expanded, kind)).red());
                    warn!("'{}' is not usable: {}", expanded.display(), err);
                }
            }
        }
        Err(Error::ValidationError(format!(
            "no valid path given for '{prompt}' after {MAX_PATH_ATTEMPTS} attempts"
        )))
    }
}
