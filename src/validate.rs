//! Checks applied to a submitted paste before it is stored.

use crate::ApiError;

const TEXT_PLAIN: &str = "text/plain";

/// Validate a submitted body and return it as text.
///
/// Checks run in order and stop at the first failure: declared length
/// present and non-zero, declared length within `max_size`, media type is
/// `text/plain`, and the body contains no markup. The returned text is the
/// body exactly as submitted.
pub fn validate_paste(
    body: &[u8],
    declared_length: Option<u64>,
    content_type: Option<&str>,
    max_size: u64,
) -> crate::ApiResult<String> {
    let length = match declared_length {
        None | Some(0) => return Err(ApiError::EmptyPaste),
        Some(length) => length,
    };
    if length > max_size {
        return Err(ApiError::PasteTooLarge);
    }
    if !content_type.map_or(false, is_text_plain) {
        return Err(ApiError::UnsupportedContentType);
    }

    let text = std::str::from_utf8(body).map_err(|_| ApiError::UnsupportedContentType)?;

    // the cleaner only detects markup, the submitted text is what gets stored
    if ammonia::clean(text) != text {
        return Err(ApiError::HtmlNotAllowed);
    }

    Ok(text.to_owned())
}

/// Compare the media type essence, ignoring parameters such as `charset`.
fn is_text_plain(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .map_or(false, |essence| essence.trim().eq_ignore_ascii_case(TEXT_PLAIN))
}
