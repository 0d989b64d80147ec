//! CLI command handlers.

use chrono::Timelike;
use serde::Serialize;

use crate::auth::{LoginRequest, SignupRequest};
use crate::client::ShadewalkClient;
use crate::error::Result;
use crate::stores::DEFAULT_LOCATION;
use crate::types::{
    BoundingBox, EmojiTagRequest, LatLng, MusicRequest, RouteKind, RouteRecommendation,
    RouteSearchRequest, TagCode, TimeOfDay,
};

use super::{
    AuthCommands, Commands, FavoritesCommands, FeedbackArgs, MusicArgs, RoadsCommands, RouteArgs,
};

/// Run one parsed command against `client`.
pub async fn run(client: &ShadewalkClient, command: Commands, json: bool) -> Result<()> {
    match command {
        Commands::Auth(args) => handle_auth(client, args.command).await,
        Commands::Roads(args) => handle_roads(client, args.command, json).await,
        Commands::Route(args) => handle_route(client, args, json).await,
        Commands::Favorites(args) => handle_favorites(client, args.command, json).await,
        Commands::Feedback(args) => handle_feedback(client, args, json).await,
        Commands::Music(args) => handle_music(client, args, json).await,
    }
}

async fn handle_auth(client: &ShadewalkClient, command: AuthCommands) -> Result<()> {
    let auth = client.auth();
    match command {
        AuthCommands::Signup {
            email,
            password,
            nickname,
        } => {
            auth.signup(&SignupRequest {
                email,
                password,
                nickname,
            })
            .await?;
            println!("✅ Account created. Log in with `shadewalk auth login`.");
        }
        AuthCommands::Login { email, password } => {
            auth.login(&LoginRequest { email, password }).await?;
            println!("✅ Logged in");
        }
        AuthCommands::SendCode { email } => {
            auth.send_email_code(&email).await?;
            println!("📧 Verification code sent to {email}");
        }
        AuthCommands::Verify { email, code } => {
            auth.verify_email_code(&email, &code).await?;
            println!("✅ Email verified");
        }
        AuthCommands::Reissue => {
            auth.reissue().await?;
            println!("✅ Session refreshed");
        }
        AuthCommands::Status => {
            if auth.is_logged_in()? {
                println!("Logged in");
            } else {
                println!("Not logged in");
            }
        }
        AuthCommands::Logout => {
            auth.logout()?;
            println!("Logged out");
        }
    }
    Ok(())
}

async fn handle_roads(client: &ShadewalkClient, command: RoadsCommands, json: bool) -> Result<()> {
    match command {
        RoadsCommands::Nearby {
            min_lat,
            min_lng,
            max_lat,
            max_lng,
            zoom,
        } => {
            let bounds = BoundingBox {
                min_lat,
                min_lng,
                max_lat,
                max_lng,
                zoom_level: zoom,
            };
            let mut roads = client.roads().nearby(&bounds).await?;
            if json {
                return print_json(&roads);
            }
            roads.sort_by_key(|r| r.shade_rank);
            if roads.is_empty() {
                println!("No recommended segments in this area");
            }
            for road in roads {
                let trees = if road.has_trees { " 🌳" } else { "" };
                println!(
                    "{:>6}  {} (shade rank {}){trees}",
                    road.segment_id, road.road_name, road.shade_rank
                );
            }
        }
        RoadsCommands::Show { segment_id } => {
            let detail = client.roads().detail(segment_id).await?;
            if json {
                return print_json(&detail);
            }
            let heart = if detail.is_liked { "♥" } else { "♡" };
            println!("{} {heart} {}", detail.road_name, detail.total_like_count);
            let tags: Vec<String> = detail
                .emotions
                .iter()
                .map(|e| format!("{} {}", e.emoji, e.label))
                .collect();
            if !tags.is_empty() {
                println!("   {}", tags.join("  "));
            }
        }
    }
    Ok(())
}

async fn handle_route(client: &ShadewalkClient, args: RouteArgs, json: bool) -> Result<()> {
    let start = match (args.from_lat, args.from_lng) {
        (Some(lat), Some(lng)) => LatLng::new(lat, lng),
        _ => DEFAULT_LOCATION,
    };
    let mut request = RouteSearchRequest::new(start, LatLng::new(args.lat, args.lng));
    if let Some(extra) = args.extra {
        request = request.with_added_time(extra);
    }
    let route = client.routes().search(&request).await?;
    if json {
        return print_json(&route);
    }
    match args.kind {
        Some(kind) => print_variant(&route, kind),
        None => {
            print_variant(&route, RouteKind::Fastest);
            print_variant(&route, RouteKind::Leisurely);
        }
    }
    if !route.avenue.summary.display_msg.is_empty() {
        println!("   {}", route.avenue.summary.display_msg);
    }
    Ok(())
}

fn print_variant(route: &RouteRecommendation, kind: RouteKind) {
    let selected = route.select(kind);
    println!(
        "{:<10} {:>5.0} min  {:>6.0} m  ({} points)",
        selected.kind.to_string(),
        selected.walking_minutes,
        selected.distance_meters,
        selected.path.len()
    );
}

async fn handle_favorites(
    client: &ShadewalkClient,
    command: FavoritesCommands,
    json: bool,
) -> Result<()> {
    let store = client.favorites_store();
    store.try_load().await?;
    match command {
        FavoritesCommands::List => {
            let favorites = store.favorites();
            if json {
                return print_json(&favorites);
            }
            if favorites.is_empty() {
                println!("No favorites yet");
            }
            for favorite in favorites {
                println!("{:>6}  {}", favorite.segment_id, favorite.road_name);
            }
        }
        FavoritesCommands::Add {
            segment_id,
            road_name,
        } => {
            if store.is_favorite(segment_id) {
                println!("Already a favorite");
            } else {
                store.add(segment_id, &road_name).await?;
                println!("♥ Saved {road_name}");
            }
        }
        FavoritesCommands::Remove { segment_id } => {
            if store.favorite_id(segment_id).is_none() {
                println!("Segment {segment_id} is not a favorite");
            } else {
                store.remove_by_segment_id(segment_id).await?;
                println!("Removed segment {segment_id}");
            }
        }
    }
    Ok(())
}

async fn handle_feedback(client: &ShadewalkClient, args: FeedbackArgs, json: bool) -> Result<()> {
    let request = EmojiTagRequest {
        user_id: args.user_id,
        tag_code: TagCode::new(args.tag),
    };
    let stats = client.emoji().add_tag(args.road_id, &request).await?;
    if json {
        return print_json(&stats);
    }
    println!("✅ Feedback recorded");
    if let Some(top) = stats.as_ref().and_then(|s| s.top_tag()) {
        println!("   Most picked: {} {} ({})", top.emoji, top.label, top.count);
    }
    Ok(())
}

async fn handle_music(client: &ShadewalkClient, args: MusicArgs, json: bool) -> Result<()> {
    let time_of_day = args
        .time_of_day
        .unwrap_or_else(|| TimeOfDay::from_hour(chrono::Local::now().hour()));
    let playlist = client
        .music()
        .recommend(&MusicRequest {
            road_id: args.road_id,
            weather: args.weather,
            time_of_day,
        })
        .await?;
    if json {
        return print_json(&playlist);
    }
    println!("🎵 {}", playlist.theme_title);
    if !playlist.recommend_reason.is_empty() {
        println!("   {}", playlist.recommend_reason);
    }
    println!("   {}", playlist.playlist_url);
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
