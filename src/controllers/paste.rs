use tracing::info;

use crate::models::{is_valid_slug, Paste};
use crate::storage::Storage;
use crate::validate::validate_paste;
use crate::words::generate_slug;
use crate::{ApiError, App};

/// Validate a submitted body, store it under a fresh slug and return the slug.
pub async fn create(
    app: &App,
    body: &[u8],
    declared_length: Option<u64>,
    content_type: Option<&str>,
) -> crate::ApiResult<String> {
    let data = validate_paste(
        body,
        declared_length,
        content_type,
        app.config.max_paste_size,
    )?;

    let slug = generate_slug(&app.word_lists);

    info!("new paste: slug='{slug}', size={size}", size = data.len());

    app.storage
        .insert_paste(Paste {
            slug: slug.clone(),
            data,
        })
        .await?;

    Ok(slug)
}

/// Look up the text stored under a slug.
pub async fn fetch(app: &App, slug: &str) -> crate::ApiResult<String> {
    if !is_valid_slug(slug) {
        return Err(ApiError::InvalidSlugFormat);
    }

    let paste = app
        .storage
        .find_paste(slug)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(paste.data)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::Config;
    use crate::storage::{AnyStorage, MemoryStorage};
    use crate::words::WordLists;

    fn app_with(storage: impl Into<AnyStorage>) -> App {
        App {
            config: Config::default(),
            word_lists: Arc::new(WordLists::builtin()),
            storage: storage.into(),
        }
    }

    async fn create_text(app: &App, text: &str) -> crate::ApiResult<String> {
        create(
            app,
            text.as_bytes(),
            Some(text.len() as u64),
            Some("text/plain"),
        )
        .await
    }

    #[tokio::test]
    async fn stored_text_is_verbatim() {
        let storage = MemoryStorage::new();
        let app = app_with(storage.clone());
        let text = "  indented\n\ttabbed 'quoted' \"double\"\n";

        let slug = create_text(&app, text).await.unwrap();

        let paste = storage.find_paste(&slug).await.unwrap().unwrap();
        assert_eq!(paste.data, text);
        assert_eq!(fetch(&app, &slug).await.unwrap(), text);
    }

    #[tokio::test]
    async fn rejected_paste_is_not_stored() {
        let storage = MemoryStorage::new();
        let app = app_with(storage.clone());

        let err = create_text(&app, "<b>hi</b>").await.unwrap_err();
        assert!(matches!(err, ApiError::HtmlNotAllowed));
        assert_eq!(storage.count().await, 0);
    }

    #[tokio::test]
    async fn slug_format_is_checked_before_lookup() {
        let app = app_with(MemoryStorage::unavailable());

        let err = fetch(&app, "not_a_slug").await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidSlugFormat));

        let err = fetch(&app, "calm-otter").await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }
}
