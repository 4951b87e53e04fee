//! Article create/edit pipeline: validate, upload the thumbnail when a new
//! one was picked, then create or update.

use crate::{
    error::{ApiError, SubmitError},
    forms::{ArticleForm, Field, FieldErrors},
    ArticlePayload,
};

/// What to do with the article thumbnail on save.
#[derive(Debug, Clone, PartialEq)]
pub enum ThumbnailEdit<F> {
    /// Send the URL the article already has (empty on create).
    Keep,
    /// Upload this file first and send the returned URL.
    Replace(F),
    /// Send an empty URL.
    Clear,
}

impl<F> ThumbnailEdit<F> {
    /// File to upload, when replacing.
    pub fn file(&self) -> Option<&F> {
        match self {
            ThumbnailEdit::Replace(file) => Some(file),
            _ => None,
        }
    }
}

/// Whether the form creates a new article or edits one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitMode {
    /// New article; a thumbnail is required.
    Create,
    /// Existing article.
    Edit {
        /// Article id.
        id: String,
        /// Thumbnail URL before editing.
        current_image_url: String,
    },
}

impl SubmitMode {
    /// Whether this is [`SubmitMode::Create`].
    pub fn is_create(&self) -> bool {
        matches!(self, SubmitMode::Create)
    }
}

/// Remote operations the pipeline needs. The browser build implements it
/// over HTTP; tests substitute a recording fake.
#[allow(async_fn_in_trait, reason = "single-threaded wasm callers only")]
pub trait ArticleGateway {
    /// Picked file handle.
    type File;

    /// Returns the public URL of the stored image.
    async fn upload_image(&self, file: &Self::File) -> Result<String, ApiError>;
    /// POST a new article.
    async fn create_article(&self, payload: &ArticlePayload) -> Result<(), ApiError>;
    /// PUT changes to an existing article.
    async fn update_article(&self, id: &str, payload: &ArticlePayload) -> Result<(), ApiError>;
}

/// Form validation plus the create-only thumbnail rule.
pub fn validate_submission<F>(
    mode: &SubmitMode,
    form: &ArticleForm,
    thumbnail: &ThumbnailEdit<F>,
) -> FieldErrors {
    let mut errors = form.validate();
    if mode.is_create() && thumbnail.file().is_none() {
        errors.insert(Field::Image, "Thumbnail image is required.");
    }
    errors
}

/// Run the whole pipeline. Returns the payload that was saved.
pub async fn submit_article<G>(
    gateway: &G,
    mode: &SubmitMode,
    form: &ArticleForm,
    thumbnail: &ThumbnailEdit<G::File>,
) -> Result<ArticlePayload, SubmitError>
where
    G: ArticleGateway,
{
    let errors = validate_submission(mode, form, thumbnail);
    if !errors.is_empty() {
        return Err(SubmitError::Validation(errors));
    }

    let image_url = match thumbnail {
        ThumbnailEdit::Replace(file) => gateway
            .upload_image(file)
            .await
            .map_err(SubmitError::Upload)?,
        ThumbnailEdit::Keep => match mode {
            SubmitMode::Create => String::new(),
            SubmitMode::Edit {
                current_image_url, ..
            } => current_image_url.clone(),
        },
        ThumbnailEdit::Clear => String::new(),
    };

    let payload = form.payload(image_url);
    match mode {
        SubmitMode::Create => gateway.create_article(&payload).await,
        SubmitMode::Edit {
            id, ..
        } => gateway.update_article(id, &payload).await,
    }
    .map_err(SubmitError::Save)?;

    tracing::debug!(create = mode.is_create(), "article saved");
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_a_file() {
        let form = ArticleForm {
            title: "t".into(),
            content: "<p>c</p>".into(),
            category_id: "1".into(),
        };
        let errors = validate_submission(&SubmitMode::Create, &form, &ThumbnailEdit::<()>::Keep);
        assert_eq!(errors.get(Field::Image), Some("Thumbnail image is required."));

        let errors = validate_submission(&SubmitMode::Create, &form, &ThumbnailEdit::Replace(()));
        assert!(errors.is_empty());
    }

    #[test]
    fn edit_may_keep_existing_image() {
        let form = ArticleForm {
            title: "t".into(),
            content: "<p>c</p>".into(),
            category_id: "1".into(),
        };
        let mode = SubmitMode::Edit {
            id: "9".into(),
            current_image_url: "https://img/old.png".into(),
        };
        assert!(validate_submission(&mode, &form, &ThumbnailEdit::<()>::Keep).is_empty());
        assert!(validate_submission(&mode, &form, &ThumbnailEdit::<()>::Clear).is_empty());
    }
}
