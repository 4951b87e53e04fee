//! Integration tests for guard.
use blogdesk_shared::{
    guard::{evaluate, Destination, GuardDecision},
    session::{sign_out_assignments, Session},
    LoginResponse,
};

fn redirect(to: Destination) -> GuardDecision {
    GuardDecision::Redirect(to)
}

#[test]
fn login_then_navigate_then_sign_out() {
    let session = Session::from_login(LoginResponse {
        token: Some("jwt".into()),
        role: Some("User".into()),
    })
    .expect("complete login reply");

    let header = session
        .to_cookie_assignments(7)
        .iter()
        .map(|assignment| assignment.split(';').next().unwrap_or_default().to_string())
        .collect::<Vec<_>>()
        .join("; ");
    let restored = Session::from_cookie_header(&header);
    assert_eq!(restored, session);

    assert_eq!(evaluate("/login", &restored), redirect(Destination::UserHome));
    assert_eq!(evaluate("/admin/categories", &restored), redirect(Destination::UserHome));
    assert_eq!(evaluate("/user/articles/12", &restored), GuardDecision::Allow);

    assert!(sign_out_assignments().iter().all(|a| a.contains("max-age=0")));
    let signed_out = Session::from_cookie_header("token=; role=");
    assert_eq!(evaluate("/user/articles", &signed_out), redirect(Destination::Login));
}

#[test]
fn admin_is_kept_out_of_reader_pages() {
    let admin = Session::new("jwt", "Admin");
    assert_eq!(evaluate("/", &admin), redirect(Destination::AdminHome));
    assert_eq!(evaluate("/user/profile", &admin), redirect(Destination::AdminHome));
    assert_eq!(evaluate("/admin/articles/preview-draft", &admin), GuardDecision::Allow);
}

#[test]
fn lookalike_prefixes_are_not_protected() {
    let anonymous = Session::anonymous();
    assert_eq!(evaluate("/administrator", &anonymous), GuardDecision::Allow);
    assert_eq!(evaluate("/users", &anonymous), GuardDecision::Allow);
    assert_eq!(evaluate("/admin/", &anonymous), redirect(Destination::Login));
}

#[test]
fn unrecognised_role_passes_through() {
    let odd = Session::new("jwt", "Editor");
    assert_eq!(evaluate("/admin/articles", &odd), GuardDecision::Allow);
    assert_eq!(evaluate("/login", &odd), GuardDecision::Allow);
}
