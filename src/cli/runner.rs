use std::path::PathBuf;

use console::style;

use crate::{
    cli::Args,
    config::{ConfigBuilder, Preset, ProjectConfig},
    error::{Error, Result},
    exec::SystemCommandRunner,
    generator::ProjectGenerator,
    ioutils,
    prompt::{
        ConfirmationConfig, ConfirmationPrompter, DialoguerPrompter, PromptProvider,
        SingleChoiceConfig, SingleChoicePrompter, TextPromptConfig, TextPrompter,
    },
    renderer::get_template_engine,
    template::{TemplateSet, SUCCESS_BANNER},
};

/// Main CLI runner that drives the prompt sequence, the confirmation
/// gate and the generation.
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Executes the complete run: resolve name and preset, refuse an
    /// existing output directory before any further prompt, collect the
    /// configuration, confirm, generate, summarize.
    pub fn run(self) -> Result<()> {
        let prompts = DialoguerPrompter;

        println!(
            "{}",
            style("Let's create some starter files for your project!!!\n").white()
        );

        let name = self.resolve_name(&prompts)?;
        let preset = self.resolve_preset(&prompts)?;

        let output_dir = self
            .args
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(&name));
        let output_dir = ioutils::get_output_dir(output_dir)?;

        let config = ConfigBuilder::new(&prompts).build(&name, preset)?;
        match serde_json::to_string(&config) {
            Ok(encoded) => log::debug!("collected configuration: {encoded}"),
            Err(err) => log::debug!("could not encode configuration: {err}"),
        }

        self.print_summary(&config, &output_dir);

        let proceed = prompts.prompt_confirmation(&ConfirmationConfig {
            prompt: style("Do you want to continue?").yellow().to_string(),
            default: false,
        })?;
        if !proceed {
            return Err(Error::Aborted);
        }

        let engine = get_template_engine();
        let templates = TemplateSet::embedded();
        let command_runner = SystemCommandRunner;
        let generator = ProjectGenerator::new(&engine, &templates, &command_runner);
        let entries = generator.generate(&output_dir, &config)?;

        println!("{}", style("\nFiles created:\n").green());
        for entry in entries {
            println!("\t{entry}");
        }
        println!("{}", style(SUCCESS_BANNER).yellow());
        Ok(())
    }

    fn resolve_name(&self, prompts: &impl PromptProvider) -> Result<String> {
        let name = match &self.args.name {
            Some(name) => name.clone(),
            None => prompts.prompt_text(&TextPromptConfig {
                prompt: "What do you want to call your project?".to_string(),
                default: None,
            })?,
        };
        if name.trim().is_empty() {
            return Err(Error::ValidationError("project name must not be empty".into()));
        }
        Ok(name)
    }

    fn resolve_preset(&self, prompts: &impl PromptProvider) -> Result<Preset> {
        match self.args.lang {
            Some(preset) => Ok(preset),
            None => {
                let index = prompts.prompt_single_choice(&SingleChoiceConfig {
                    prompt: "Which language is your project in?".to_string(),
                    choices: vec!["c".to_string(), "py".to_string()],
                    default_index: Some(0),
                })?;
                Ok(if index == 0 { Preset::C } else { Preset::Py })
            }
        }
    }

    fn print_summary(&self, config: &ProjectConfig, output_dir: &std::path::Path) {
        println!();
        for (key, value) in config.summary_entries() {
            println!("\t{} : {}", style(key).green(), value);
        }
        println!(
            "\nYour project {} in {} will be created at {}\n",
            style(config.name()).green(),
            config.preset(),
            style(output_dir.display()).green()
        );
    }
}

/// Run a full interactive session with the given arguments.
pub fn run(args: Args) -> Result<()> {
    Runner::new(args).run()
}
