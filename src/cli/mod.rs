//! Command-line front end for Shadewalk.

pub mod commands;

use clap::{Args, Parser, Subcommand};

use crate::types::{RouteKind, TimeOfDay, Weather};

/// Shade-friendly walking routes from the terminal
#[derive(Parser, Debug)]
#[command(name = "shadewalk", version, about = "Shade-friendly walking routes")]
pub struct Cli {
    /// Print raw JSON instead of a summary
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Account and session management
    Auth(AuthArgs),
    /// Recommended street segments
    Roads(RoadsArgs),
    /// Search fastest and leisurely routes to a destination
    Route(RouteArgs),
    /// Saved segments
    Favorites(FavoritesArgs),
    /// Leave post-walk feedback on a segment
    Feedback(FeedbackArgs),
    /// Get a playlist for a walk
    Music(MusicArgs),
}

#[derive(Args, Debug)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub command: AuthCommands,
}

#[derive(Subcommand, Debug)]
pub enum AuthCommands {
    /// Create an account
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long, env = "SHADEWALK_PASSWORD")]
        password: String,
        #[arg(long)]
        nickname: String,
    },
    /// Log in and store the refresh credential
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "SHADEWALK_PASSWORD")]
        password: String,
    },
    /// Send an email verification code
    SendCode { email: String },
    /// Confirm an email verification code
    Verify { email: String, code: String },
    /// Exchange the stored refresh credential for a new session
    Reissue,
    /// Show whether a refresh credential is stored
    Status,
    /// Forget the stored refresh credential
    Logout,
}

#[derive(Args, Debug)]
pub struct RoadsArgs {
    #[command(subcommand)]
    pub command: RoadsCommands,
}

#[derive(Subcommand, Debug)]
pub enum RoadsCommands {
    /// Segments inside a bounding box
    Nearby {
        #[arg(long, allow_negative_numbers = true)]
        min_lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        min_lng: f64,
        #[arg(long, allow_negative_numbers = true)]
        max_lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        max_lng: f64,
        #[arg(long, default_value_t = 3)]
        zoom: u8,
    },
    /// Detail of one segment
    Show { segment_id: i64 },
}

#[derive(Args, Debug)]
pub struct RouteArgs {
    /// Destination latitude
    #[arg(allow_negative_numbers = true)]
    pub lat: f64,
    /// Destination longitude
    #[arg(allow_negative_numbers = true)]
    pub lng: f64,
    /// Start latitude (defaults to the last known location)
    #[arg(long, allow_negative_numbers = true, requires = "from_lng")]
    pub from_lat: Option<f64>,
    /// Start longitude
    #[arg(long, allow_negative_numbers = true, requires = "from_lat")]
    pub from_lng: Option<f64>,
    /// Extra minutes allowed for the leisurely route
    #[arg(long)]
    pub extra: Option<u32>,
    /// Only show one variant (fastest, leisurely)
    #[arg(long)]
    pub kind: Option<RouteKind>,
}

#[derive(Args, Debug)]
pub struct FavoritesArgs {
    #[command(subcommand)]
    pub command: FavoritesCommands,
}

#[derive(Subcommand, Debug)]
pub enum FavoritesCommands {
    /// List saved segments
    List,
    /// Save a segment
    Add { segment_id: i64, road_name: String },
    /// Remove a saved segment
    Remove { segment_id: i64 },
}

#[derive(Args, Debug)]
pub struct FeedbackArgs {
    pub road_id: i64,
    #[arg(long)]
    pub user_id: i64,
    /// Tag code, e.g. TREE_SHADE
    #[arg(long)]
    pub tag: String,
}

#[derive(Args, Debug)]
pub struct MusicArgs {
    pub road_id: i64,
    /// sunny, cloudy, rainy or snowy
    #[arg(long)]
    pub weather: Weather,
    /// morning, afternoon, evening or night (defaults to the local clock)
    #[arg(long)]
    pub time_of_day: Option<TimeOfDay>,
}
