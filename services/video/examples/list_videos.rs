use anyhow::Result;
use panda_core::{Context, LogObserver, OsEnv};
use panda_http_send_reqwest::ReqwestHttpSend;
use panda_video::{Config, Parameters, ServiceProxy, VideoService};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging for debugging
    let _ = env_logger::builder().is_test(true).try_init();

    // Every failed call is reported through the LogObserver
    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv)
        .with_observer(LogObserver);

    // PANDA_CLOUD_ID, PANDA_ACCESS_KEY and PANDA_SECRET_KEY must be set
    let config = Config::new()
        .with_api_host("api.pandastream.com")
        .from_env(&ctx)?;
    let proxy = ServiceProxy::from_config(ctx, &config)?;

    // Show what a signed request looks like without sending it
    let req = proxy.build_request("GET", "videos.json", &Parameters::new())?;
    println!("Signed url: {}", req.url());

    let service = VideoService::new(proxy);
    let videos = service.get_videos().await?;
    println!("Found {} videos", videos.len());
    for video in videos {
        println!(
            "  {} {} {}",
            video.id,
            video.status.as_deref().unwrap_or("-"),
            video.original_filename.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}
