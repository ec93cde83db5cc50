//! # Quill
//!
//! A small personal blog in the terminal: browse and search posts, log in
//! with the demo account, and write posts from the interactive shell.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod config;
mod error;
mod handlers;
mod render;
mod shell;
mod state;
mod telemetry;

use config::AppConfig;
use handlers::{auth, posts};
use quill_shared::{LoginForm, RegisterForm};
use state::AppState;

#[derive(Parser)]
#[command(name = "quill", version, about = "A small personal blog in the terminal")]
struct Cli {
    #[arg(long, value_name = "DIR", help = "Directory holding the session file")]
    data_dir: Option<PathBuf>,

    #[arg(long, value_name = "MS", help = "Simulated login delay in milliseconds")]
    auth_latency_ms: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List posts, optionally filtered
    List {
        #[arg(long, short)]
        search: Option<String>,
        #[arg(long, short, help = "Category label or slug")]
        category: Option<String>,
        #[arg(long, short)]
        tag: Option<String>,
    },
    /// List the categories in use
    Categories,
    /// Read a post and its comments
    Show { id: String },
    /// Posts grouped by year
    Archive,
    /// Log in and remember the session
    Login { email: String, password: String },
    /// Create an account and log it in
    Register {
        name: String,
        email: String,
        password: String,
        confirm: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the session user
    Whoami,
    /// Your own posts
    Dashboard,
    /// Interactive shell (default)
    Shell,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AppConfig::from_env();
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if let Some(ms) = cli.auth_latency_ms {
        config.auth_latency = Duration::from_millis(ms);
    }

    telemetry::init_telemetry(&config.telemetry);
    tracing::debug!(data_dir = %config.data_dir.display(), "Starting quill");

    let state = AppState::new(&config).await?;

    match cli.command.unwrap_or(Command::Shell) {
        Command::List {
            search,
            category,
            tag,
        } => {
            let filter = posts::ListFilter {
                search,
                category,
                tag,
            };
            render::print_posts(&posts::list(&state, filter).await?);
        }
        Command::Categories => {
            render::print_categories(&posts::categories(&state).await?, None);
        }
        Command::Show { id } => render::print_detail(&posts::show(&state, &id).await?),
        Command::Archive => render::print_archive(&posts::archive(&state).await?),
        Command::Login { email, password } => {
            let user = auth::login(&state, LoginForm { email, password }).await?;
            println!("Logged in as {} <{}>", user.name, user.email);
        }
        Command::Register {
            name,
            email,
            password,
            confirm,
        } => {
            let form = RegisterForm {
                name,
                email,
                password,
                confirm_password: confirm,
            };
            let user = auth::register(&state, form).await?;
            println!("Registered and logged in as {} <{}>", user.name, user.email);
        }
        Command::Logout => {
            auth::logout(&state).await?;
            println!("Logged out");
        }
        Command::Whoami => render::print_session(&auth::whoami(&state)),
        Command::Dashboard => render::print_dashboard(&posts::dashboard(&state).await?),
        Command::Shell => shell::Shell::new(state).await?.run().await?,
    }

    Ok(())
}
