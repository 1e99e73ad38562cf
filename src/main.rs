mod model;
mod server;

use std::{net::SocketAddr, path::PathBuf};

use clap::{Parser, Subcommand};

use crate::{
    model::user::CreateUserDto,
    server::{
        command, config::Config, error::AppError, media::MediaStorage, router, startup,
        state::AppState,
    },
};

#[derive(Parser)]
#[command(name = "foodgram", about = "Foodgram recipe sharing backend")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Apply migrations, then serve the API (default)
    Serve,
    /// Apply pending migrations and exit
    Migrate,
    /// Create an administrator account
    CreateSuperuser {
        #[arg(long, env = "SUPERUSER_EMAIL")]
        email: String,
        #[arg(long, env = "SUPERUSER_USERNAME")]
        username: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long, env = "SUPERUSER_PASSWORD")]
        password: String,
    },
    /// Import ingredients from a JSON file
    LoadIngredients { path: PathBuf },
    /// Create sample users and recipes
    LoadData,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let result = run(cli.command.unwrap_or(Command::Serve), config).await;
    if let Err(e) = &result {
        tracing::error!("{}", e);
    }

    result
}

async fn run(cmd: Command, config: Config) -> Result<(), AppError> {
    let db = startup::connect_to_database(&config).await?;

    match cmd {
        Command::Serve => {
            let media = MediaStorage::new(&config.media_root, &config.app_url);
            let state = AppState::new(db, media, config.app_url.clone());

            let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
            tracing::info!("Listening on {}", config.bind_addr);

            axum::serve(
                listener,
                router::router(state).into_make_service_with_connect_info::<SocketAddr>(),
            )
            .with_graceful_shutdown(startup::shutdown_signal())
            .await?;

            tracing::info!("Server stopped");
        }
        Command::Migrate => {}
        Command::CreateSuperuser {
            email,
            username,
            first_name,
            last_name,
            password,
        } => {
            let user = command::superuser::create_superuser(
                &db,
                CreateUserDto {
                    email: Some(email),
                    username: Some(username),
                    first_name: Some(first_name),
                    last_name: Some(last_name),
                    password: Some(password),
                },
            )
            .await?;

            println!("Superuser {} created", user.username);
        }
        Command::LoadIngredients { path } => {
            let summary = command::ingredients::load_ingredients(&db, &path).await?;

            println!(
                "Ingredients loaded: {} created, {} skipped",
                summary.created, summary.skipped
            );
        }
        Command::LoadData => {
            let media = MediaStorage::new(&config.media_root, &config.app_url);
            let summary = command::sample_data::load_sample_data(&db, &media).await?;

            println!(
                "Sample data loaded: {} users, {} recipes",
                summary.users, summary.recipes
            );
        }
    }

    Ok(())
}
