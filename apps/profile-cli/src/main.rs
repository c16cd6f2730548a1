use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use profile_editor::{
    Notice, ProfileDraft, ProfileEditorConfig, ProfileForm, ProfileService, validate,
};
use profile_editor_sdk::{UserId, UserProfile};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Profile CLI - view, edit and validate user profiles
#[derive(Parser)]
#[command(name = "profile-cli")]
#[command(about = "View, edit and validate user profiles")]
#[command(version)]
struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a profile and print it as JSON
    Show {
        #[arg(long)]
        user_id: String,
    },
    /// Load a profile, apply edits and save them
    Edit(EditArgs),
    /// Validate a draft stored as JSON without contacting the backend
    Validate {
        /// Path to a JSON-encoded draft
        draft: PathBuf,
    },
}

#[derive(clap::Args, Default)]
struct EditArgs {
    /// Signed-in user; omit to act as a signed-out session
    #[arg(long)]
    user_id: Option<String>,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    bio: Option<String>,
    /// Avatar image URL
    #[arg(long)]
    avatar: Option<String>,
    /// Background image URL
    #[arg(long)]
    background: Option<String>,
    #[arg(long)]
    border_color: Option<String>,
    /// Link as key=value; an empty value removes the link
    #[arg(long = "link", value_parser = parse_link)]
    links: Vec<(String, String)>,
}

impl EditArgs {
    fn apply(&self, draft: &mut ProfileDraft) {
        if let Some(name) = &self.name {
            draft.name.clone_from(name);
        }
        if let Some(bio) = &self.bio {
            draft.bio = Some(bio.clone());
        }
        if let Some(avatar) = &self.avatar {
            draft.avatar_url.clone_from(avatar);
        }
        if let Some(background) = &self.background {
            draft.background_url.clone_from(background);
        }
        if let Some(color) = &self.border_color {
            draft.border_color = Some(color.clone());
        }
        for (key, value) in &self.links {
            draft.set_link(key.as_str(), value.as_str());
        }
    }
}

fn parse_link(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))?;
    if key.is_empty() {
        return Err(format!("link key is empty in '{raw}'"));
    }
    Ok((key.to_owned(), value.to_owned()))
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "warn".into()),
        1 => "info".into(),
        2 => "debug".into(),
        _ => "trace".into(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Show { user_id } => show(cli.config.as_deref(), &UserId::new(user_id)).await,
        Commands::Edit(args) => edit(cli.config.as_deref(), &args).await,
        Commands::Validate { draft } => validate_file(&draft),
    }
}

fn service_from(config: Option<&Path>) -> Result<ProfileService> {
    let config = ProfileEditorConfig::load(config)?;
    let client = config.build_client()?;
    Ok(ProfileService::new(client))
}

async fn show(config: Option<&Path>, user_id: &UserId) -> Result<ExitCode> {
    let service = service_from(config)?;

    match service.load(Some(user_id)).await {
        Ok(profile) => {
            println!("{}", serde_json::to_string_pretty(&profile)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{err}");
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn edit(config: Option<&Path>, args: &EditArgs) -> Result<ExitCode> {
    let service = service_from(config)?;

    let mut form = if let Some(user_id) = &args.user_id {
        match ProfileForm::load(service, Some(UserId::new(user_id.as_str()))).await {
            Ok(form) => form,
            Err(err) => {
                eprintln!("{err}");
                return Ok(ExitCode::FAILURE);
            }
        }
    } else {
        // Signed out: nothing to load, the save attempt reports it.
        ProfileForm::new(service, None, &UserProfile::default())
    };

    args.apply(form.draft_mut());

    match form.handle_save_changes().await {
        Notice::Success(message) => {
            println!("{message}");
            if let Some(path) = form.public_profile_path() {
                println!("View profile: {path}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Notice::Error(message) => {
            eprintln!("{message}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn validate_file(path: &Path) -> Result<ExitCode> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read draft {}", path.display()))?;
    let draft: ProfileDraft = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse draft {}", path.display()))?;

    match validate(&draft) {
        Ok(valid) => {
            println!("{}", serde_json::to_string_pretty(&*valid)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{}: {err}", err.field);
            Ok(ExitCode::FAILURE)
        }
    }
}
