use anyhow::Result;
use personal_site_admin::api::AdminApi;
use personal_site_admin::config::Config;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("personal_site_admin=info".parse()?),
        )
        .init();

    info!("Starting admin panel status check");

    // Load configuration from environment
    let config = Config::from_env()?;
    let http = config.http_client()?;
    let api = AdminApi::new(http, config.api_base_url.clone());

    // Probe the session first; everything else needs it
    if !api.check_auth().await {
        warn!(
            "Session is not authenticated, log in at {}/admin/login",
            config.api_base_url
        );
        return Ok(());
    }
    info!("Session authenticated");

    let posts = api.list_posts().await?;
    info!(
        "{} posts ({} published)",
        posts.len(),
        posts.iter().filter(|p| p.published).count()
    );

    let skills = api.list_skills().await?;
    info!("{} skills", skills.len());

    match api.personal_info().await? {
        Some(profile) => info!("Profile record present for '{}'", profile.name_en),
        None => warn!("No profile record yet"),
    }

    Ok(())
}
