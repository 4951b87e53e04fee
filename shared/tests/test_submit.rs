//! Integration tests for submit.
use std::cell::RefCell;

use blogdesk_shared::{
    error::{ApiError, SubmitError},
    forms::{ArticleForm, Field},
    submit::{submit_article, ArticleGateway, SubmitMode, ThumbnailEdit},
    ArticlePayload,
};
use futures::executor::block_on;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Upload(&'static str),
    Create(ArticlePayload),
    Update(String, ArticlePayload),
}

#[derive(Default)]
struct RecordingGateway {
    calls: RefCell<Vec<Call>>,
    fail_upload: bool,
    fail_save: bool,
}

impl ArticleGateway for RecordingGateway {
    type File = &'static str;

    async fn upload_image(&self, file: &Self::File) -> Result<String, ApiError> {
        self.calls.borrow_mut().push(Call::Upload(*file));
        if self.fail_upload {
            return Err(ApiError::Network("offline".into()));
        }
        Ok(format!("https://cdn.example/{file}"))
    }

    async fn create_article(&self, payload: &ArticlePayload) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(Call::Create(payload.clone()));
        if self.fail_save {
            return Err(ApiError::from_status(400, r#"{"message":"Title taken"}"#));
        }
        Ok(())
    }

    async fn update_article(&self, id: &str, payload: &ArticlePayload) -> Result<(), ApiError> {
        self.calls
            .borrow_mut()
            .push(Call::Update(id.to_string(), payload.clone()));
        if self.fail_save {
            return Err(ApiError::from_status(500, ""));
        }
        Ok(())
    }
}

fn valid_form() -> ArticleForm {
    ArticleForm {
        title: "Rust on the web".into(),
        content: "<p>Body</p>".into(),
        category_id: "7".into(),
    }
}

fn edit_mode() -> SubmitMode {
    SubmitMode::Edit {
        id: "42".into(),
        current_image_url: "https://cdn.example/old.png".into(),
    }
}

#[test]
fn invalid_form_never_reaches_the_gateway() {
    let gateway = RecordingGateway::default();
    let form = ArticleForm {
        title: "   ".into(),
        ..valid_form()
    };

    let err = block_on(submit_article(
        &gateway,
        &SubmitMode::Create,
        &form,
        &ThumbnailEdit::Replace("new.png"),
    ))
    .expect_err("blank title");

    let errors = err.field_errors().expect("validation error");
    assert_eq!(errors.get(Field::Title), Some("Title is required."));
    assert!(gateway.calls.borrow().is_empty());
}

#[test]
fn create_without_file_is_rejected() {
    let gateway = RecordingGateway::default();
    let err = block_on(submit_article(
        &gateway,
        &SubmitMode::Create,
        &valid_form(),
        &ThumbnailEdit::Keep,
    ))
    .expect_err("missing thumbnail");

    assert!(err
        .field_errors()
        .is_some_and(|errors| errors.contains(Field::Image)));
    assert!(gateway.calls.borrow().is_empty());
}

#[test]
fn create_uploads_then_posts_with_returned_url() {
    let gateway = RecordingGateway::default();
    let saved = block_on(submit_article(
        &gateway,
        &SubmitMode::Create,
        &valid_form(),
        &ThumbnailEdit::Replace("cover.png"),
    ))
    .expect("create");

    assert_eq!(saved.image_url, "https://cdn.example/cover.png");
    let calls = gateway.calls.borrow();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], Call::Upload("cover.png"));
    assert_eq!(calls[1], Call::Create(saved.clone()));
}

#[test]
fn edit_with_replaced_image_sends_new_url() {
    let gateway = RecordingGateway::default();
    let saved = block_on(submit_article(
        &gateway,
        &edit_mode(),
        &valid_form(),
        &ThumbnailEdit::Replace("fresh.png"),
    ))
    .expect("update");

    assert_eq!(saved.image_url, "https://cdn.example/fresh.png");
    assert_eq!(
        gateway.calls.borrow().last(),
        Some(&Call::Update("42".into(), saved.clone()))
    );
}

#[test]
fn edit_keeping_image_skips_upload() {
    let gateway = RecordingGateway::default();
    let saved = block_on(submit_article(&gateway, &edit_mode(), &valid_form(), &ThumbnailEdit::Keep))
        .expect("update");

    assert_eq!(saved.image_url, "https://cdn.example/old.png");
    let calls = gateway.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert!(matches!(calls[0], Call::Update(ref id, _) if id == "42"));
}

#[test]
fn edit_clearing_image_sends_empty_url() {
    let gateway = RecordingGateway::default();
    let saved = block_on(submit_article(&gateway, &edit_mode(), &valid_form(), &ThumbnailEdit::Clear))
        .expect("update");
    assert_eq!(saved.image_url, "");
}

#[test]
fn upload_failure_stops_before_saving() {
    let gateway = RecordingGateway {
        fail_upload: true,
        ..RecordingGateway::default()
    };
    let err = block_on(submit_article(
        &gateway,
        &SubmitMode::Create,
        &valid_form(),
        &ThumbnailEdit::Replace("cover.png"),
    ))
    .expect_err("upload fails");

    assert!(matches!(err, SubmitError::Upload(ApiError::Network(_))));
    assert_eq!(*gateway.calls.borrow(), vec![Call::Upload("cover.png")]);
}

#[test]
fn save_failure_carries_server_message() {
    let gateway = RecordingGateway {
        fail_save: true,
        ..RecordingGateway::default()
    };
    let err = block_on(submit_article(
        &gateway,
        &SubmitMode::Create,
        &valid_form(),
        &ThumbnailEdit::Replace("cover.png"),
    ))
    .expect_err("save fails");

    match err {
        SubmitError::Save(api) => assert_eq!(api.server_message(), Some("Title taken")),
        other => panic!("unexpected error: {other:?}"),
    }
}
