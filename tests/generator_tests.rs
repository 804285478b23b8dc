//! End-to-end generation tests driven through the library API with a
//! recording command runner, so no real git/virtualenv/pip is needed.

use makeproj::config::{
    CConfig, LibftSource, MainFile, ProjectConfig, PyConfig, Testing,
};
use makeproj::error::Error;
use makeproj::exec::RecordingCommandRunner;
use makeproj::generator::ProjectGenerator;
use makeproj::renderer::{MiniJinjaRenderer, TemplateRenderer};
use makeproj::template::TemplateSet;
use std::path::{Path, PathBuf};
use url::Url;

fn generate(
    output_dir: &Path,
    config: &ProjectConfig,
    runner: &RecordingCommandRunner,
) -> Result<Vec<String>, Error> {
    let engine = MiniJinjaRenderer::new();
    let templates = TemplateSet::embedded();
    ProjectGenerator::new(&engine, &templates, runner).generate(output_dir, config)
}

fn c_config(name: &str) -> CConfig {
    CConfig { name: name.into(), libft: None, main: None, author: None, readme: false }
}

fn py_config(name: &str) -> PyConfig {
    PyConfig {
        name: name.into(),
        venv: false,
        depend: None,
        testing: None,
        author: None,
        readme: false,
    }
}

#[test]
fn c_minimal_tree_is_exact() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("myapp");
    let config = ProjectConfig::C(CConfig {
        main: Some(MainFile::ProjectNamed),
        ..c_config("myapp")
    });

    let runner = RecordingCommandRunner::new();
    let entries = generate(&out, &config, &runner).unwrap();

    assert_eq!(entries, vec![".gitignore", "Makefile", "includes/", "srcs/"]);
    assert!(out.join("srcs/myapp.c").is_file());
    assert!(runner.calls().is_empty());
}

#[test]
fn c_without_main_writes_nothing_into_srcs() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("myapp");
    let config = ProjectConfig::C(c_config("myapp"));

    generate(&out, &config, &RecordingCommandRunner::new()).unwrap();

    let srcs: Vec<_> = std::fs::read_dir(out.join("srcs")).unwrap().collect();
    assert!(srcs.is_empty());
}

#[test]
fn author_file_content_is_verbatim() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("myapp");
    let config = ProjectConfig::C(CConfig {
        author: Some("alice".into()),
        ..c_config("myapp")
    });

    generate(&out, &config, &RecordingCommandRunner::new()).unwrap();

    assert_eq!(std::fs::read_to_string(out.join("author")).unwrap(), "alice");
}

#[test]
fn readme_is_rendered_with_project_name() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("myapp");
    let config = ProjectConfig::C(CConfig { readme: true, ..c_config("myapp") });

    generate(&out, &config, &RecordingCommandRunner::new()).unwrap();

    let readme = std::fs::read_to_string(out.join("README.md")).unwrap();
    assert!(readme.contains("# myapp"));
}

#[test]
fn existing_output_dir_is_refused_untouched() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("myapp");
    std::fs::create_dir(&out).unwrap();
    std::fs::write(out.join("precious.txt"), "keep me").unwrap();

    let config = ProjectConfig::C(c_config("myapp"));
    let err = generate(&out, &config, &RecordingCommandRunner::new()).unwrap_err();

    assert!(matches!(err, Error::OutputDirectoryExistsError { .. }));
    let entries: Vec<_> = std::fs::read_dir(&out)
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec!["precious.txt"]);
    assert_eq!(
        std::fs::read_to_string(out.join("precious.txt")).unwrap(),
        "keep me"
    );
}

#[test]
fn makefile_libft_rule_is_a_pure_function_of_the_config() {
    let engine = MiniJinjaRenderer::new();
    let templates = TemplateSet::embedded();

    let without = ProjectConfig::C(c_config("foo")).render_context();
    let with = ProjectConfig::C(CConfig {
        libft: Some(LibftSource::Local(PathBuf::from("/tmp/libft"))),
        ..c_config("foo")
    })
    .render_context();

    let plain = engine.render(&templates.c_makefile, &without).unwrap();
    let vendored = engine.render(&templates.c_makefile, &with).unwrap();

    assert!(!plain.contains("LIBFT"));
    assert!(vendored.contains("LIBFT_DIR"));
    assert!(vendored.contains("-lft"));

    // Same input, same output.
    assert_eq!(plain, engine.render(&templates.c_makefile, &without).unwrap());
}

#[test]
fn local_libft_is_copied_and_stripped_of_git_metadata() {
    let tmp = tempfile::tempdir().unwrap();
    let libft_src = tmp.path().join("libft");
    std::fs::create_dir_all(libft_src.join(".git")).unwrap();
    std::fs::write(libft_src.join(".git/HEAD"), "ref: refs/heads/main").unwrap();
    std::fs::write(libft_src.join("libft.h"), "#pragma once").unwrap();

    let out = tmp.path().join("myapp");
    let config = ProjectConfig::C(CConfig {
        libft: Some(LibftSource::Local(libft_src)),
        ..c_config("myapp")
    });

    generate(&out, &config, &RecordingCommandRunner::new()).unwrap();

    assert_eq!(
        std::fs::read_to_string(out.join("libft/libft.h")).unwrap(),
        "#pragma once"
    );
    assert!(!out.join("libft/.git").exists());
}

#[test]
fn remote_libft_adds_a_git_submodule() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("myapp");
    let url = Url::parse("https://github.com/user/libft").unwrap();
    let config = ProjectConfig::C(CConfig {
        libft: Some(LibftSource::Remote(url)),
        ..c_config("myapp")
    });

    let runner = RecordingCommandRunner::new();
    generate(&out, &config, &runner).unwrap();

    let calls = runner.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].program, "git");
    assert_eq!(calls[0].args, vec!["init"]);
    assert_eq!(calls[1].program, "git");
    assert_eq!(
        calls[1].args,
        vec!["submodule", "add", "https://github.com/user/libft", "libft"]
    );
    assert!(calls.iter().all(|c| c.cwd == out));
}

#[test]
fn py_minimal_tree_with_testing_is_exact() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("tool");
    let config = ProjectConfig::Py(PyConfig {
        testing: Some(Testing { pytest: false }),
        ..py_config("tool")
    });

    let runner = RecordingCommandRunner::new();
    let entries = generate(&out, &config, &runner).unwrap();

    assert_eq!(
        entries,
        vec![".gitignore", "__init__.py", "main.py", "test_project.py"]
    );
    assert_eq!(std::fs::read_to_string(out.join("__init__.py")).unwrap(), "");
    assert!(runner.calls().is_empty());
}

#[test]
fn py_venv_deps_and_pytest_route_through_the_venv_pip() {
    let tmp = tempfile::tempdir().unwrap();
    let manifest = tmp.path().join("requirements.txt");
    std::fs::write(&manifest, "requests==2.32.0\n").unwrap();

    let out = tmp.path().join("tool");
    let config = ProjectConfig::Py(PyConfig {
        venv: true,
        depend: Some(manifest),
        testing: Some(Testing { pytest: true }),
        ..py_config("tool")
    });

    let runner = RecordingCommandRunner::new();
    generate(&out, &config, &runner).unwrap();

    assert_eq!(
        std::fs::read_to_string(out.join("requirements.txt")).unwrap(),
        "requests==2.32.0\n"
    );
    let calls = runner.calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[0].program, "virtualenv");
    assert_eq!(calls[0].args, vec!["venv"]);
    assert_eq!(calls[1].program, "venv/bin/pip");
    assert_eq!(calls[1].args, vec!["install", "-r", "requirements.txt"]);
    assert_eq!(calls[2].program, "venv/bin/pip");
    assert_eq!(calls[2].args, vec!["install", "pytest"]);
    assert!(calls.iter().all(|c| c.cwd == out));
}

#[test]
fn py_without_venv_uses_the_system_pip() {
    let tmp = tempfile::tempdir().unwrap();
    let manifest = tmp.path().join("requirements.txt");
    std::fs::write(&manifest, "flask\n").unwrap();

    let out = tmp.path().join("tool");
    let config = ProjectConfig::Py(PyConfig {
        depend: Some(manifest),
        ..py_config("tool")
    });

    let runner = RecordingCommandRunner::new();
    generate(&out, &config, &runner).unwrap();

    let calls = runner.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].program, "pip");
}

#[test]
fn failed_external_command_aborts_remaining_steps() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("tool");
    let config = ProjectConfig::Py(PyConfig {
        venv: true,
        testing: Some(Testing { pytest: false }),
        ..py_config("tool")
    });

    let runner = RecordingCommandRunner::failing_for("virtualenv");
    let err = generate(&out, &config, &runner).unwrap_err();

    assert!(matches!(err, Error::CommandFailedError { .. }));
    // Steps before the failure are left in place, later ones never ran.
    assert!(out.join("main.py").is_file());
    assert!(!out.join("test_project.py").exists());
}
