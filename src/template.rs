//! Compile-time embedded starter templates.
//!
//! The template text lives under `templates/` in the crate root and is
//! embedded with `include_str!`, so the binary has no runtime template
//! directory to locate. The generator receives a [`TemplateSet`] rather
//! than reaching for process-wide path constants, which also lets tests
//! substitute their own template text.

/// The full set of template and static file text the generator needs.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    /// README template, rendered with the config context.
    pub readme: String,
    /// C gitignore, copied verbatim.
    pub c_gitignore: String,
    /// Makefile template, rendered with the config context.
    pub c_makefile: String,
    /// C main-source template, rendered with the config context.
    pub c_main: String,
    /// Python gitignore, copied verbatim.
    pub py_gitignore: String,
    /// pytest scaffold, copied verbatim.
    pub py_test: String,
}

impl TemplateSet {
    /// The templates shipped inside the binary.
    pub fn embedded() -> Self {
        Self {
            readme: include_str!("../templates/readme.md.j2").to_string(),
            c_gitignore: include_str!("../templates/c/gitignore").to_string(),
            c_makefile: include_str!("../templates/c/Makefile.j2").to_string(),
            c_main: include_str!("../templates/c/main.c.j2").to_string(),
            py_gitignore: include_str!("../templates/py/gitignore").to_string(),
            py_test: include_str!("../templates/py/test_project.py").to_string(),
        }
    }
}

/// ASCII art shown after a successful run.
pub const SUCCESS_BANNER: &str = include_str!("../templates/success.txt");
