use chrono::Utc;
use uuid::Uuid;

use crate::{comment, employee, issue, role};

fn sample_comment() -> comment::Model {
    comment::Model {
        id: Uuid::new_v4(),
        text: "Printer on 3rd floor is jammed again".into(),
        time: Utc::now().into(),
        likes: 2,
        parent_id: None,
        issue_id: Uuid::new_v4(),
        employee_id: Uuid::new_v4(),
    }
}

#[test]
fn compose_without_author_leaves_projection_empty() {
    let c = sample_comment();
    let view = comment::CommentWithAuthor::compose(c.clone(), None);
    assert_eq!(view.id, c.id);
    assert_eq!(view.likes, 2);
    assert!(view.author.is_none());
}

#[test]
fn compose_with_author_copies_display_fields() {
    let c = sample_comment();
    let e = employee::Model {
        id: c.employee_id,
        full_name: "Ada Lovelace".into(),
        email: "ada@example.com".into(),
        password: "secret".into(),
        phone_number: None,
        position: Some("Engineer".into()),
        avatar: Some("ada.png".into()),
    };
    let view = comment::CommentWithAuthor::compose(c, Some(&e));
    let author = view.author.expect("author");
    assert_eq!(author.id, e.id);
    assert_eq!(author.full_name.as_deref(), Some("Ada Lovelace"));
    assert_eq!(author.avatar.as_deref(), Some("ada.png"));
}

#[test]
fn employee_password_is_not_serialized() {
    let e = employee::Model {
        id: Uuid::new_v4(),
        full_name: "Grace Hopper".into(),
        email: "grace@example.com".into(),
        password: "hunter2".into(),
        phone_number: Some("+370 600 00000".into()),
        position: None,
        avatar: None,
    };
    let json = serde_json::to_value(&e).unwrap();
    assert!(json.get("password").is_none());
    assert_eq!(json["email"], "grace@example.com");
}

#[test]
fn role_type_serializes_uppercase() {
    assert_eq!(serde_json::to_string(&role::RoleType::Admin).unwrap(), "\"ADMIN\"");
    let parsed: role::RoleType = serde_json::from_str("\"USER\"").unwrap();
    assert_eq!(parsed, role::RoleType::User);
}

#[test]
fn issue_details_from_model_has_no_joined_fields() {
    let m = issue::Model {
        id: Uuid::new_v4(),
        name: "Broken chair".into(),
        description: "Left armrest fell off".into(),
        status: issue::STATUS_OPEN.into(),
        start_time: Utc::now().into(),
        finish_time: None,
        employee_id: Uuid::new_v4(),
        office_id: Uuid::new_v4(),
        rating: 0,
        comment_count: 0,
    };
    let d = issue::IssueDetails::from(m.clone());
    assert_eq!(d.id, m.id);
    assert_eq!(d.status, "open");
    assert!(d.reporter_name.is_none());
    assert!(d.office_name.is_none());
}
