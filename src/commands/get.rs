use tokio::io::{self, AsyncWriteExt};

use crate::controllers::paste;
use crate::{ApiError, App};

/// Print the text stored under a slug.
pub async fn run(app: App, slug: &str) -> anyhow::Result<()> {
    let data = paste::fetch(&app, slug)
        .await
        .map_err(ApiError::reported)?;

    let mut stdout = io::stdout();
    stdout.write_all(data.as_bytes()).await?;
    stdout.flush().await?;

    Ok(())
}
