use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::settings::ProviderKind;

#[derive(Parser, Debug)]
#[command(name = "metaprompt", version, about = "Build prompt templates step by step and generate their instructions")]
pub struct Args {
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Use a remote generation service instead of calling vendors directly.
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[arg(long, global = true, default_value_t = false)]
    pub debug: bool,

    /// Keep history and settings in memory only.
    #[arg(long, global = true, default_value_t = false)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive four-step session (default).
    Wizard,
    /// Generate a prompt without the interactive session.
    Generate {
        #[command(flatten)]
        form: FormArgs,
        /// Start from a library template; explicit flags override its fields.
        #[arg(long)]
        template: Option<u32>,
        #[arg(long, default_value_t = false)]
        export: bool,
    },
    /// Print the assembled preview.
    Preview {
        #[command(flatten)]
        form: FormArgs,
    },
    Templates {
        #[arg(long, short)]
        query: Option<String>,
        #[arg(long, short)]
        category: Option<String>,
    },
    Template {
        id: u32,
        #[arg(long, default_value_t = false)]
        yaml: bool,
    },
    Categories,
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct FormArgs {
    #[arg(long)]
    pub task: Option<String>,
    #[arg(long = "input")]
    pub inputs: Vec<String>,
    #[arg(long)]
    pub structure: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum HistoryAction {
    List,
    Show { id: i64 },
    Delete { id: i64 },
    Clear {
        #[arg(long, short, default_value_t = false)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum SettingsAction {
    Show,
    Set {
        #[arg(long)]
        provider: Option<ProviderKind>,
        #[arg(long)]
        model: Option<String>,
        #[arg(long)]
        custom_model: Option<String>,
        #[arg(long)]
        api_key: Option<String>,
        #[arg(long)]
        dark_mode: Option<bool>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_wizard() {
        let args = Args::try_parse_from(["metaprompt", "--ephemeral"]).unwrap();
        assert!(args.command.is_none());
        assert!(args.ephemeral);
    }

    #[test]
    fn generate_collects_repeated_inputs() {
        let args = Args::try_parse_from([
            "metaprompt", "generate", "--task", "Answer customer questions", "--input", "document",
            "--input", "question", "--export",
        ])
        .unwrap();
        match args.command {
            Some(Command::Generate { form, export, template }) => {
                assert_eq!(form.inputs, vec!["document", "question"]);
                assert!(export);
                assert!(template.is_none());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn settings_set_parses_provider_names() {
        let args = Args::try_parse_from(["metaprompt", "settings", "set", "--provider", "openrouter"]).unwrap();
        match args.command {
            Some(Command::Settings { action: SettingsAction::Set { provider, .. } }) => {
                assert_eq!(provider, Some(ProviderKind::OpenRouter));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unknown_provider_is_rejected() {
        assert!(Args::try_parse_from(["metaprompt", "settings", "set", "--provider", "ollama"]).is_err());
    }
}
