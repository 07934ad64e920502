/// Flick - command-line shell over the client libraries
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use flick_core::{movie_rating, movie_title, Genre, Movie, User};
use flick_screens::{
    Activate, Bootstrap, HomeScreen, LoginFlow, LoginScreen, MovieDetailsScreen, ProfileScreen,
    RegisterFlow, RegisterScreen, RegistrationForm, SearchScreen, ServerApi, WatchedScreen,
};
use flick_server_client::{FlickServerClient, ServerConfig};
use flick_session::SessionStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "flick")]
#[command(about = "Movie discovery and watchlist client", long_about = None)]
struct Cli {
    /// Backend base URL
    #[arg(long, env = "FLICK_SERVER", default_value = "http://localhost:3000")]
    server: String,

    /// Directory for the persisted session snapshot
    #[arg(long, env = "FLICK_DATA_DIR", default_value = ".flick")]
    data_dir: PathBuf,

    /// Username, for commands that need a session
    #[arg(long, env = "FLICK_USERNAME", global = true)]
    username: Option<String>,

    /// Password, for commands that need a session
    #[arg(long, env = "FLICK_PASSWORD", global = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog, optionally filtered by genre id
    Browse {
        /// Genre id (e.g. 28 for Action)
        #[arg(short, long)]
        genre: Option<String>,
    },
    /// Search movies by title
    Search {
        /// Query text
        query: String,
    },
    /// Show the home screen: banner, my list, genre sections
    Home,
    /// Show details for one movie
    Details {
        /// Movie id
        movie_id: String,
    },
    /// Show my list
    List,
    /// Toggle a movie in/out of my list
    Toggle {
        /// Movie id
        movie_id: String,
    },
    /// Show the watched list
    Watched,
    /// Toggle a movie's watched status
    ToggleWatched {
        /// Movie id
        movie_id: String,
    },
    /// Create a new account
    Register {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        age: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        new_username: String,
        #[arg(long)]
        new_password: String,
    },
    /// Show the profile from the stored session snapshot
    Profile,
    /// End the session
    Logout,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flick=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let client = Arc::new(FlickServerClient::new(ServerConfig::new(&cli.server))?);
    let api: Arc<dyn ServerApi> = client.clone();
    let session = Arc::new(SessionStore::open(&cli.data_dir).await?);

    match cli.command {
        Commands::Browse { genre } => {
            let movies = client.catalog().list_movies(genre.as_deref()).await?;
            print_movies(&movies);
        }
        Commands::Search { query } => {
            let mut search = SearchScreen::new(api);
            search.load().await;
            search.set_query(&query).await;
            report_notice(search.notice.take());
            print_movies(search.visible_movies());
        }
        Commands::Home => {
            sign_in(&api, &session, &cli.username, &cli.password).await?;
            let mut home = HomeScreen::new(api, Genre::default_catalog());
            home.load().await;
            report_notice(home.notice.take());

            println!("Featured:");
            print_movies(&home.banner);
            println!("\nMy list: {} movie(s)", home.mylist.len());
            for section in &home.sections {
                println!("\nTop {} Movies:", section.genre.name);
                print_movies(&section.movies);
            }
        }
        Commands::Details { movie_id } => {
            sign_in(&api, &session, &cli.username, &cli.password).await?;
            let movie = find_movie(&api, &movie_id).await?;
            let mut details = MovieDetailsScreen::new(api, movie);
            details.load().await;
            report_notice(details.notice.take());

            println!("{}  ({})", details.title(), details.rating());
            if let Some(runtime) = details.runtime() {
                println!("Runtime: {runtime}");
            }
            println!("In my list: {}", details.is_in_list);
            println!("Watched:    {}", details.is_watched);
            if !details.similar.is_empty() {
                println!("\nMore like this:");
                print_movies(&details.similar);
            }
        }
        Commands::List => {
            sign_in(&api, &session, &cli.username, &cli.password).await?;
            let movies = api.my_list_movies().await?;
            print_movies(&movies);
        }
        Commands::Toggle { movie_id } => {
            sign_in(&api, &session, &cli.username, &cli.password).await?;
            let movie = find_movie(&api, &movie_id).await?;
            let mut details = MovieDetailsScreen::new(api, movie);
            details.load().await;
            details.toggle_my_list().await;
            report_notice(details.notice.take());
            println!("In my list: {}", details.is_in_list);
        }
        Commands::Watched => {
            sign_in(&api, &session, &cli.username, &cli.password).await?;
            let mut watched = WatchedScreen::new(api);
            watched.on_activate().await;
            print_movies(&watched.movies);
        }
        Commands::ToggleWatched { movie_id } => {
            sign_in(&api, &session, &cli.username, &cli.password).await?;
            let movie = find_movie(&api, &movie_id).await?;
            let mut details = MovieDetailsScreen::new(api, movie);
            details.load().await;
            details.toggle_watched().await;
            report_notice(details.notice.take());
            println!("Watched:    {}", details.is_watched);
            println!("In my list: {}", details.is_in_list);
        }
        Commands::Register {
            first_name,
            last_name,
            age,
            email,
            new_username,
            new_password,
        } => {
            let mut register = RegisterScreen::new(api, session);
            let form = RegistrationForm {
                first_name,
                last_name,
                age,
                gender: None,
                email,
                username: new_username,
                password: new_password,
            };
            match register.register(&form).await {
                RegisterFlow::Registered(user) => {
                    println!("Account created for {}", user.username);
                }
                RegisterFlow::Rejected => {
                    report_notice(register.notice.take());
                    if let Some(validation) = register.validation {
                        anyhow::bail!("registration rejected: {validation}");
                    }
                    anyhow::bail!("registration failed");
                }
            }
        }
        Commands::Profile => {
            sign_in(&api, &session, &cli.username, &cli.password).await?;
            let mut profile = ProfileScreen::new(api, session);
            profile.on_activate().await;
            match profile.user {
                Some(user) => print_profile(&user),
                None => println!("No session snapshot found."),
            }
        }
        Commands::Logout => {
            let mut profile = ProfileScreen::new(api, session);
            if profile.logout().await {
                println!("Logged out.");
            } else {
                report_notice(profile.notice.take());
                anyhow::bail!("logout failed");
            }
        }
    }

    Ok(())
}

/// Establish a session for this invocation: restore via check-auth when
/// the cookie survives, otherwise log in with the provided credentials.
async fn sign_in(
    api: &Arc<dyn ServerApi>,
    session: &Arc<SessionStore>,
    username: &Option<String>,
    password: &Option<String>,
) -> anyhow::Result<User> {
    let mut login = LoginScreen::new(api.clone(), session.clone());

    if let Bootstrap::Authenticated(user) = login.bootstrap().await {
        return Ok(user);
    }

    let (Some(username), Some(password)) = (username, password) else {
        anyhow::bail!("no session; pass --username and --password (or set FLICK_USERNAME/FLICK_PASSWORD)");
    };

    match login.login(username, password).await {
        LoginFlow::SignedIn(user) => Ok(user),
        LoginFlow::Rejected => {
            report_notice(login.notice.take());
            match login.validation {
                Some(validation) => anyhow::bail!("login rejected: {validation}"),
                None => anyhow::bail!("login failed"),
            }
        }
    }
}

/// Resolve a movie id against the catalog.
async fn find_movie(api: &Arc<dyn ServerApi>, movie_id: &str) -> anyhow::Result<Movie> {
    let movies = api.list_movies().await?;
    movies
        .into_iter()
        .find(|movie| movie.id == movie_id)
        .ok_or_else(|| anyhow::anyhow!("no movie with id {movie_id}"))
}

fn print_movies(movies: &[Movie]) {
    if movies.is_empty() {
        println!("  (nothing here)");
        return;
    }
    for movie in movies {
        let release = movie.release_date.as_deref().unwrap_or("unknown");
        println!(
            "  {:40} {:>5}  {}  [{}]",
            movie_title(movie),
            movie_rating(movie),
            release,
            movie.id
        );
    }
}

fn print_profile(user: &User) {
    println!("{} {} (@{})", user.first_name, user.last_name, user.username);
    println!("Email:  {}", user.email);
    println!("Age:    {}", user.age);
    println!("Avatar: {}", user.avatar_or_default());
    println!("My list: {} movie(s)", user.mylist.len());
}

fn report_notice(notice: Option<String>) {
    if let Some(notice) = notice {
        eprintln!("! {notice}");
    }
}
