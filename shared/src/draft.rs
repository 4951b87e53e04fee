//! Unsaved article shown on the preview screen before publishing.

use crate::{
    forms::ArticleForm,
    submit::{SubmitMode, ThumbnailEdit},
};

/// Form snapshot staged for preview.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft<F> {
    /// Create or edit, and which article.
    pub mode: SubmitMode,
    /// Field values at the time of staging.
    pub form: ArticleForm,
    /// Thumbnail change carried through to publish.
    pub thumbnail: ThumbnailEdit<F>,
    /// Object URL of a picked file, or the current image when editing.
    pub preview_image_url: String,
    /// Client timestamp (ISO 8601) captured when the draft was staged.
    pub created_at: String,
}

impl<F> Draft<F> {
    /// URL the form should return to from the preview.
    pub fn edit_path(&self) -> String {
        match &self.mode {
            SubmitMode::Create => "/admin/articles/add".to_string(),
            SubmitMode::Edit {
                id, ..
            } => format!("/admin/articles/edit/{id}"),
        }
    }

    /// Whether the form opened in `mode` should restore this draft.
    pub fn belongs_to(&self, mode: &SubmitMode) -> bool {
        match (&self.mode, mode) {
            (SubmitMode::Create, SubmitMode::Create) => true,
            (
                SubmitMode::Edit {
                    id: a, ..
                },
                SubmitMode::Edit {
                    id: b, ..
                },
            ) => a == b,
            _ => false,
        }
    }
}

/// Holds at most one draft. Lives only in memory, so a reload drops it.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftSlot<F> {
    current: Option<Draft<F>>,
}

impl<F> Default for DraftSlot<F> {
    fn default() -> Self {
        Self {
            current: None,
        }
    }
}

impl<F> DraftSlot<F> {
    /// Replaces any earlier draft.
    pub fn stage(&mut self, draft: Draft<F>) {
        self.current = Some(draft);
    }

    /// Staged draft, if any.
    pub fn get(&self) -> Option<&Draft<F>> {
        self.current.as_ref()
    }

    /// Remove and return the staged draft.
    pub fn take(&mut self) -> Option<Draft<F>> {
        self.current.take()
    }

    /// Drop the staged draft.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Whether nothing is staged.
    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}

/// How the user left the preview screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftExit {
    /// Any navigation other than the two below (sidebar, header, history).
    #[default]
    Elsewhere,
    /// "Back to edit": the form picks the draft up again.
    BackToEdit,
    /// The draft was published.
    Published,
}

impl DraftExit {
    /// Whether the staged draft must be dropped when the preview unmounts.
    pub fn clears_draft(self) -> bool {
        !matches!(self, DraftExit::BackToEdit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(mode: SubmitMode) -> Draft<()> {
        Draft {
            mode,
            form: ArticleForm::default(),
            thumbnail: ThumbnailEdit::Keep,
            preview_image_url: String::new(),
            created_at: "2025-01-01T00:00:00Z".into(),
        }
    }

    #[test]
    fn stage_replaces_and_clear_empties() {
        let mut slot = DraftSlot::default();
        assert!(slot.is_empty());
        slot.stage(draft(SubmitMode::Create));
        slot.stage(draft(SubmitMode::Edit {
            id: "4".into(),
            current_image_url: String::new(),
        }));
        assert_eq!(slot.get().map(Draft::edit_path).as_deref(), Some("/admin/articles/edit/4"));
        assert!(slot.take().is_some());
        assert!(slot.is_empty());
    }

    #[test]
    fn draft_matches_only_its_own_form() {
        let edit = draft(SubmitMode::Edit {
            id: "4".into(),
            current_image_url: String::new(),
        });
        assert!(edit.belongs_to(&SubmitMode::Edit {
            id: "4".into(),
            current_image_url: "x".into(),
        }));
        assert!(!edit.belongs_to(&SubmitMode::Create));
        assert!(draft(SubmitMode::Create).belongs_to(&SubmitMode::Create));
    }

    #[test]
    fn only_back_to_edit_keeps_the_draft() {
        assert!(DraftExit::default().clears_draft());
        assert!(DraftExit::Published.clears_draft());
        assert!(!DraftExit::BackToEdit.clears_draft());
    }
}
