//! Turns a configuration into an ordered set of filesystem side effects.
//!
//! Steps run strictly in sequence because later ones depend on
//! directories created earlier (the main source file lands in `srcs/`).
//! Any filesystem failure aborts the remaining steps and leaves the
//! partial tree in place; there is no rollback.

use std::path::Path;

use log::debug;

use crate::{
    config::{CConfig, LibftSource, ProjectConfig, PyConfig},
    constants::LIBFT_DIR,
    error::Result,
    exec::CommandRunner,
    ioutils,
    renderer::TemplateRenderer,
    template::TemplateSet,
};

pub struct ProjectGenerator<'a> {
    engine: &'a dyn TemplateRenderer,
    templates: &'a TemplateSet,
    runner: &'a dyn CommandRunner,
}

impl<'a> ProjectGenerator<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        templates: &'a TemplateSet,
        runner: &'a dyn CommandRunner,
    ) -> Self {
        Self { engine, templates, runner }
    }

    /// Creates `output_dir` and materializes the project described by
    /// `config` inside it. Returns the resulting top-level entries for
    /// the creation summary.
    pub fn generate(
        &self,
        output_dir: &Path,
        config: &ProjectConfig,
    ) -> Result<Vec<String>> {
        ioutils::create_fresh_dir(output_dir)?;

        let context = config.render_context();

        let (author, readme) = match config {
            ProjectConfig::C(c) => (c.author.as_deref(), c.readme),
            ProjectConfig::Py(p) => (p.author.as_deref(), p.readme),
        };
        if let Some(author) = author {
            // Verbatim, no trailing newline.
            ioutils::write_file(author, output_dir.join("author"))?;
        }
        if readme {
            let readme = self.engine.render(&self.templates.readme, &context)?;
            ioutils::write_file(&readme, output_dir.join("README.md"))?;
        }

        match config {
            ProjectConfig::C(c) => self.generate_c(output_dir, c, &context)?,
            ProjectConfig::Py(p) => self.generate_py(output_dir, p)?,
        }

        ioutils::list_entries(output_dir)
    }

    fn generate_c(
        &self,
        output_dir: &Path,
        config: &CConfig,
        context: &serde_json::Value,
    ) -> Result<()> {
        ioutils::write_file(&self.templates.c_gitignore, output_dir.join(".gitignore"))?;

        let srcs_dir = output_dir.join("srcs");
        ioutils::create_dir(&srcs_dir)?;
        ioutils::create_dir(output_dir.join("includes"))?;

        let makefile = self.engine.render(&self.templates.c_makefile, context)?;
        ioutils::write_file(&makefile, output_dir.join("Makefile"))?;

        if let Some(main) = config.main {
            let source = self.engine.render(&self.templates.c_main, context)?;
            ioutils::write_file(&source, srcs_dir.join(main.filename(&config.name)))?;
        }

        match &config.libft {
            Some(LibftSource::Local(source)) => {
                let libft_dir = output_dir.join(LIBFT_DIR);
                debug!("vendoring libft from {}", source.display());
                ioutils::copy_dir_all(source, &libft_dir)?;
                // The vendored copy is part of this project now, not a
                // repository of its own.
                ioutils::remove_dir_if_exists(libft_dir.join(".git"))?;
            }
            Some(LibftSource::Remote(url)) => {
                // A submodule needs a repository to attach to, and the
                // output directory was created moments ago.
                self.runner.run("git", &["init"], output_dir)?;
                self.runner.run(
                    "git",
                    &["submodule", "add", url.as_str(), LIBFT_DIR],
                    output_dir,
                )?;
            }
            None => {}
        }

        Ok(())
    }

    fn generate_py(&self, output_dir: &Path, config: &PyConfig) -> Result<()> {
        ioutils::write_file(&self.templates.py_gitignore, output_dir.join(".gitignore"))?;

        ioutils::write_file("", output_dir.join("__init__.py"))?;
        ioutils::write_file("", output_dir.join("main.py"))?;

        if config.venv {
            self.runner.run("virtualenv", &["venv"], output_dir)?;
        }

        if let Some(depend) = &config.depend {
            ioutils::copy_file(depend, output_dir.join("requirements.txt"))?;
            self.pip(config.venv, &["install", "-r", "requirements.txt"], output_dir)?;
        }

        if let Some(testing) = config.testing {
            ioutils::write_file(&self.templates.py_test, output_dir.join("test_project.py"))?;
            if testing.pytest {
                self.pip(config.venv, &["install", "pytest"], output_dir)?;
            }
        }

        Ok(())
    }

    /// Routes through the virtualenv's pip when one was created.
    fn pip(&self, venv: bool, args: &[&str], output_dir: &Path) -> Result<()> {
        let program = if venv { "venv/bin/pip" } else { "pip" };
        self.runner.run(program, args, output_dir)
    }
}
