mod config;
mod debounce;
mod render;

use std::time::Duration;

use activa_api::{ApiClient, NewActivity, Session};
use activa_core::{
    CatalogIndex, DateFilter, FilterSpec, MIN_QUERY_CHARS, PreferenceSet, SEARCH_DEBOUNCE_MS,
    SortBy, TimeOfDay, ToggleOutcome, assemble, search,
};
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};

use config::Config;
use debounce::Debouncer;

const DEFAULT_SERVER: &str = "http://127.0.0.1:5000";

#[derive(Parser)]
#[command(
    name = "activa",
    about = "Browse activities, favorites, and personalized recommendations"
)]
struct Cli {
    /// Override the API server base URL
    #[arg(long, global = true)]
    server: Option<String>,

    /// Override the session token
    #[arg(long, global = true)]
    token: Option<String>,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Register a new account
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Register with the admin role
        #[arg(long)]
        admin: bool,
    },

    /// Show the logged-in profile
    Whoami,

    /// Forget the stored session token
    Logout,

    /// List the activity catalog
    Activities {
        /// Only show this category
        #[arg(long)]
        category: Option<String>,
    },

    /// Search activities, categories, and your recommendations
    Search {
        /// Query text, at least 2 characters
        query: Option<String>,

        /// Read queries from stdin, one per line, debounced
        #[arg(long, conflicts_with = "query")]
        interactive: bool,
    },

    /// Show personalized recommendations
    Recommendations {
        /// Only this category
        #[arg(long)]
        category: Option<String>,

        #[arg(long, value_enum, default_value = "all")]
        time_of_day: TimeArg,

        #[arg(long, value_enum, default_value = "all")]
        date: DateArg,

        #[arg(long, value_enum, default_value = "relevance")]
        sort: SortArg,
    },

    /// Manage favorite activities
    Prefs {
        #[command(subcommand)]
        command: PrefsCommands,
    },

    /// Mark a recommended activity as favorite
    Like { name: String },

    /// Withdraw a like
    Unlike { name: String },

    /// Administrative catalog operations
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },
}

#[derive(Subcommand)]
enum PrefsCommands {
    /// List current favorites
    List,

    /// Add or remove one favorite
    Toggle { name: String },

    /// Add several favorites at once
    Set {
        #[arg(required = true)]
        names: Vec<String>,
    },
}

#[derive(Subcommand)]
enum AdminCommands {
    /// Create an activity
    AddActivity {
        #[arg(long)]
        name: String,
        #[arg(long)]
        place: Option<String>,
        /// Display time, dd/mm/yy h:mm(am|pm)
        #[arg(long)]
        time: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },

    /// Delete an activity
    RemoveActivity { name: String },
}

#[derive(Clone, Copy, ValueEnum)]
enum TimeArg {
    All,
    Morning,
    Afternoon,
    Evening,
}

impl From<TimeArg> for TimeOfDay {
    fn from(arg: TimeArg) -> Self {
        match arg {
            TimeArg::All => TimeOfDay::All,
            TimeArg::Morning => TimeOfDay::Morning,
            TimeArg::Afternoon => TimeOfDay::Afternoon,
            TimeArg::Evening => TimeOfDay::Evening,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum DateArg {
    All,
    Today,
    Tomorrow,
    Week,
}

impl From<DateArg> for DateFilter {
    fn from(arg: DateArg) -> Self {
        match arg {
            DateArg::All => DateFilter::All,
            DateArg::Today => DateFilter::Today,
            DateArg::Tomorrow => DateFilter::Tomorrow,
            DateArg::Week => DateFilter::Week,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    Relevance,
    Category,
    Name,
    Time,
}

impl From<SortArg> for SortBy {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Relevance => SortBy::Relevance,
            SortArg::Category => SortBy::Category,
            SortArg::Name => SortBy::Name,
            SortArg::Time => SortBy::Time,
        }
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

/// Resolve the session from flag > environment > config file > default.
fn make_session(cli: &Cli, config: &Config) -> Session {
    let server = cli
        .server
        .clone()
        .or_else(|| config.server.clone())
        .unwrap_or_else(|| DEFAULT_SERVER.to_string());

    let token = cli
        .token
        .clone()
        .or_else(|| std::env::var("ACTIVA_TOKEN").ok())
        .or_else(|| config.token.clone());

    match token {
        Some(token) => Session::authenticated(server, token),
        None => Session::anonymous(server),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load().context("failed to load config")?;
    let client = ApiClient::new(make_session(&cli, &config));

    match &cli.command {
        Commands::Login { email, password } => cmd_login(&client, config, email, password).await,
        Commands::Register {
            name,
            email,
            password,
            admin,
        } => cmd_register(&client, name, email, password, *admin).await,
        Commands::Whoami => cmd_whoami(&client).await,
        Commands::Logout => cmd_logout(config),
        Commands::Activities { category } => cmd_activities(&client, category.as_deref()).await,
        Commands::Search { query, interactive } => match (query, interactive) {
            (Some(query), _) => {
                run_search(&client, query).await;
                Ok(())
            }
            (None, true) => cmd_search_interactive(&client).await,
            (None, false) => bail!("give a query, or --interactive to read queries from stdin"),
        },
        Commands::Recommendations {
            category,
            time_of_day,
            date,
            sort,
        } => {
            let spec = FilterSpec {
                category: category.clone(),
                time_of_day: (*time_of_day).into(),
                date: (*date).into(),
                sort_by: (*sort).into(),
            };
            cmd_recommendations(&client, spec).await
        }
        Commands::Prefs { command } => match command {
            PrefsCommands::List => cmd_prefs_list(&client).await,
            PrefsCommands::Toggle { name } => cmd_prefs_toggle(&client, name).await,
            PrefsCommands::Set { names } => cmd_prefs_set(&client, names).await,
        },
        Commands::Like { name } => cmd_like(&client, name).await,
        Commands::Unlike { name } => cmd_unlike(&client, name).await,
        Commands::Admin { command } => match command {
            AdminCommands::AddActivity {
                name,
                place,
                time,
                category,
            } => cmd_admin_add(&client, name, place, time, category).await,
            AdminCommands::RemoveActivity { name } => cmd_admin_remove(&client, name).await,
        },
    }
}

async fn cmd_login(
    client: &ApiClient,
    mut config: Config,
    email: &str,
    password: &str,
) -> Result<()> {
    let login = client.login(email, password).await.context("login failed")?;

    config.server = Some(client.session().base_url().to_string());
    config.token = Some(login.access_token);
    config.save()?;

    let who = login.user.name.unwrap_or(login.user.email);
    println!("logged in as {who}");
    Ok(())
}

async fn cmd_register(
    client: &ApiClient,
    name: &str,
    email: &str,
    password: &str,
    admin: bool,
) -> Result<()> {
    let role = admin.then_some("admin");
    client
        .register(name, email, password, role)
        .await
        .context("registration failed")?;
    println!("registered {email}; log in with `activa login`");
    Ok(())
}

async fn cmd_whoami(client: &ApiClient) -> Result<()> {
    let profile = client.me().await.context("failed to fetch profile")?;
    match &profile.name {
        Some(name) => println!("{name} <{}>", profile.email),
        None => println!("{}", profile.email),
    }
    println!("favorites: {}", profile.preferences.len());
    for name in &profile.preferences {
        println!("  {name}");
    }
    Ok(())
}

fn cmd_logout(mut config: Config) -> Result<()> {
    config.token = None;
    config.save()?;
    println!("session token cleared");
    Ok(())
}

async fn cmd_activities(client: &ApiClient, category: Option<&str>) -> Result<()> {
    let groups = client
        .activities()
        .await
        .context("failed to fetch activities")?;

    let mut shown = 0;
    for group in &groups {
        if category.is_none_or(|c| group.category == c) {
            render::category_group(group);
            shown += 1;
        }
    }
    if shown == 0 {
        println!("(no activities)");
    }
    Ok(())
}

/// One search pass: fetch, match, render. Failures degrade the affected
/// section instead of aborting; the recommendation section is
/// supplementary and its errors are only logged.
async fn run_search(client: &ApiClient, query: &str) {
    if query.chars().count() < MIN_QUERY_CHARS {
        println!("(no matches; a query needs at least {MIN_QUERY_CHARS} characters)");
        return;
    }

    let (catalog_groups, rec_groups) = tokio::join!(client.activities(), client.recommendations());

    let catalog = match catalog_groups {
        Ok(groups) => CatalogIndex::build(&groups),
        Err(e) => {
            render::section_error(&e.to_string());
            CatalogIndex::default()
        }
    };
    let recommendations = match rec_groups {
        Ok(groups) => groups,
        Err(e) => {
            tracing::debug!("recommendation search skipped: {e}");
            Vec::new()
        }
    };

    render::search_result(&search(&catalog, &recommendations, query));
}

async fn cmd_search_interactive(client: &ApiClient) -> Result<()> {
    use tokio::io::{AsyncBufReadExt, BufReader};

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut debouncer = Debouncer::new(Duration::from_millis(SEARCH_DEBOUNCE_MS));

    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        let query = line.trim().to_string();
        if query.is_empty() {
            continue;
        }
        let client = client.clone();
        debouncer.schedule(move || async move {
            println!("> {query}");
            run_search(&client, &query).await;
        });
    }

    debouncer.flush().await;
    Ok(())
}

async fn cmd_recommendations(client: &ApiClient, spec: FilterSpec) -> Result<()> {
    let snapshot = client.snapshot().await;
    for message in &snapshot.errors {
        render::section_error(message);
    }

    let groups = assemble(
        &snapshot.recommendations,
        &snapshot.catalog,
        &snapshot.preferences,
        &spec,
    );
    if groups.is_empty() {
        println!("(no recommendations)");
    } else {
        render::recommendation_groups(&groups);
    }

    if snapshot.preferences.is_empty() {
        println!();
        println!("tip: mark favorites with `activa prefs toggle <name>` to improve recommendations");
    }
    Ok(())
}

async fn cmd_prefs_list(client: &ApiClient) -> Result<()> {
    let groups = client
        .my_preferences()
        .await
        .context("failed to fetch preferences")?;
    let preferences = PreferenceSet::from_groups(&groups);

    if preferences.is_empty() {
        println!("(no favorites yet)");
        return Ok(());
    }
    for name in preferences.names() {
        println!("{name}");
    }
    Ok(())
}

async fn cmd_prefs_toggle(client: &ApiClient, name: &str) -> Result<()> {
    let groups = client
        .my_preferences()
        .await
        .context("failed to fetch preferences")?;
    let mut preferences = PreferenceSet::from_groups(&groups);

    let outcome = client
        .toggle_preference(&mut preferences, name)
        .await
        .context("failed to update preference")?;
    match outcome {
        ToggleOutcome::Added => println!("added '{name}' to favorites"),
        ToggleOutcome::Removed => println!("removed '{name}' from favorites"),
    }
    Ok(())
}

async fn cmd_prefs_set(client: &ApiClient, names: &[String]) -> Result<()> {
    client
        .add_preferences(names)
        .await
        .context("failed to save preferences")?;
    println!("saved {} favorite(s)", names.len());
    Ok(())
}

async fn cmd_like(client: &ApiClient, name: &str) -> Result<()> {
    let mut preferences = PreferenceSet::new();
    client
        .like_recommended(&mut preferences, name)
        .await
        .context("failed to like activity")?;
    println!("liked '{name}'");
    Ok(())
}

async fn cmd_unlike(client: &ApiClient, name: &str) -> Result<()> {
    client
        .unlike(name)
        .await
        .context("failed to withdraw like")?;
    println!("unliked '{name}'");
    Ok(())
}

async fn cmd_admin_add(
    client: &ApiClient,
    name: &str,
    place: &Option<String>,
    time: &Option<String>,
    category: &Option<String>,
) -> Result<()> {
    let activity = NewActivity {
        name: name.to_string(),
        place: place.clone(),
        time: time.clone(),
        category: category.clone(),
    };
    client
        .create_activity(&activity)
        .await
        .context("failed to create activity")?;
    println!("created '{name}'");
    Ok(())
}

async fn cmd_admin_remove(client: &ApiClient, name: &str) -> Result<()> {
    client
        .delete_activity(name)
        .await
        .context("failed to delete activity")?;
    println!("deleted '{name}'");
    Ok(())
}
