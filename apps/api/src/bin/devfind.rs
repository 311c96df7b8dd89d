//! # devfind
//!
//! Terminal front end for the developer-discovery API.
//!
//! ```bash
//! # Describe the project, pick skills and filters, see ranked cards
//! devfind search "Realtime trading dashboard" --skill React --skill Python --location US
//!
//! # Open the detail view for one result
//! devfind search "Realtime trading dashboard" --details 1
//!
//! # Look a developer up directly
//! devfind get 3
//!
//! # Autocomplete the skill vocabulary
//! devfind skills java
//! ```

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use devfind_api::client::catalog::{
    SelectOption, EXPERIENCE_LEVELS, LOCATIONS, PROJECT_DATE_OPTIONS,
};
use devfind_api::client::render::{render_card, render_details};
use devfind_api::client::{
    ApiClient, ClientConfig, ResultsState, ResultsView, SearchForm, SkillsInput,
};

#[derive(Parser)]
#[command(name = "devfind", version, about = "Find developers for your project")]
struct Cli {
    /// Base URL of the API server (overrides DEVFIND_API_URL).
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Filter-extraction endpoint (overrides DEVFIND_FILTER_URL).
    #[arg(long, global = true)]
    filter_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a search: AI filter extraction, then ranked results.
    Search {
        /// Project description or requirements.
        prompt: String,

        /// Required skill; repeat for several.
        #[arg(long = "skill")]
        skills: Vec<String>,

        /// Location code, e.g. US or DE.
        #[arg(long)]
        location: Option<String>,

        /// junior, mid, or senior.
        #[arg(long)]
        experience: Option<String>,

        /// Project month, e.g. 2024-01.
        #[arg(long)]
        project_date: Option<String>,

        /// Show the full profile of this result.
        #[arg(long)]
        details: Option<i32>,
    },
    /// Show one developer's full profile.
    Get { id: i32 },
    /// Suggest skills from the vocabulary.
    Skills { typed: String },
    /// List the accepted location, experience, and project-date values.
    Options,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = ClientConfig::resolve(cli.api_url, cli.filter_url);

    match cli.command {
        Command::Search {
            prompt,
            skills,
            location,
            experience,
            project_date,
            details,
        } => {
            let mut form = SearchForm::new(prompt);
            for skill in &skills {
                form.skills.add(skill);
            }
            if let Some(v) = location {
                form.set_location(&v)?;
            }
            if let Some(v) = experience {
                form.set_experience(&v)?;
            }
            if let Some(v) = project_date {
                form.set_project_date(&v)?;
            }
            run_search(&ApiClient::new(&config)?, form, details).await
        }
        Command::Get { id } => {
            let dev = ApiClient::new(&config)?.get_developer(id).await?;
            print!("{}", render_details(&dev));
            Ok(())
        }
        Command::Skills { typed } => {
            for skill in SkillsInput::default().suggestions(&typed) {
                println!("{skill}");
            }
            Ok(())
        }
        Command::Options => {
            print_options("Locations", LOCATIONS);
            print_options("Experience levels", EXPERIENCE_LEVELS);
            print_options("Project dates", PROJECT_DATE_OPTIONS);
            Ok(())
        }
    }
}

async fn run_search(api: &ApiClient, form: SearchForm, details: Option<i32>) -> Result<()> {
    eprintln!("Analyzing your search...");
    let query = form.submit(api).await?;

    let mut view = ResultsView::new(Some(query));
    if let ResultsState::Failed(msg) = view.load(api).await {
        bail!("Error: {msg}");
    }

    let developers = view.developers();
    if developers.is_empty() {
        println!("No developers found matching your criteria.");
        return Ok(());
    }

    println!(
        "Found {} developers matching your criteria",
        developers.len()
    );
    if let Some(prompt) = view.prompt() {
        println!("\"{prompt}\"\n");
    }
    for dev in developers {
        println!("{}", render_card(dev));
    }

    if let Some(id) = details {
        match view.select(id) {
            Some(dev) => print!("{}", render_details(dev)),
            None => bail!("developer {id} is not in these results"),
        }
    }
    Ok(())
}

fn print_options(title: &str, options: &[SelectOption]) {
    println!("{title}:");
    for o in options {
        println!("  {:<8} {}", o.value, o.label);
    }
}
