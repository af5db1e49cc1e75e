use tokio::io::{self, AsyncReadExt, AsyncWriteExt};

use crate::controllers::paste;
use crate::{ApiError, App};

/// Store standard input as a new paste and print its slug.
pub async fn run(app: App) -> anyhow::Result<()> {
    let mut data = Vec::new();
    io::stdin().read_to_end(&mut data).await?;

    let length = u64::try_from(data.len())?;
    let slug = paste::create(&app, &data, Some(length), Some("text/plain"))
        .await
        .map_err(ApiError::reported)?;

    let mut stdout = io::stdout();
    stdout.write_all(format!("{slug}\n").as_bytes()).await?;
    stdout.flush().await?;

    Ok(())
}
