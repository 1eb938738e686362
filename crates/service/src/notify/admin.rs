use std::sync::Arc;

use async_trait::async_trait;
use models::{employee, issue};
use tracing::{info, warn};

use super::{Mailer, NotifyError, ReportNotifier};
use crate::errors::ServiceError;
use crate::user::repository::UserRepository;

/// Mails every admin of the issue's office when an issue is reported.
pub struct AdminMailNotifier<U: UserRepository + ?Sized> {
    users: Arc<U>,
    mailer: Arc<dyn Mailer>,
}

impl<U: UserRepository + ?Sized> AdminMailNotifier<U> {
    pub fn new(users: Arc<U>, mailer: Arc<dyn Mailer>) -> Self { Self { users, mailer } }

    /// Returns how many admins were mailed. Single delivery failures are logged and skipped.
    pub async fn notify_admins(&self, issue: &issue::Model) -> Result<usize, NotifyError> {
        let reporter = self
            .users
            .find_employee(issue.employee_id)
            .await?
            .ok_or_else(|| ServiceError::UserNotFound(issue.employee_id.to_string()))?;
        let admins = self.users.find_admins_by_office(issue.office_id).await?;
        let body = compose_issue_message(&reporter.employee, issue);

        let mut delivered = 0;
        for admin in &admins {
            match self.mailer.send_email(&admin.email, &issue.name, &body).await {
                Ok(()) => delivered += 1,
                Err(e) => warn!(admin = %admin.email, error = %e, "admin notification failed"),
            }
        }
        info!(issue_id = %issue.id, admins = admins.len(), delivered, "admins_notified");
        Ok(delivered)
    }
}

#[async_trait]
impl<U: UserRepository + ?Sized> ReportNotifier for AdminMailNotifier<U> {
    async fn issue_reported(&self, issue: &issue::Model) {
        if let Err(e) = self.notify_admins(issue).await {
            warn!(issue_id = %issue.id, error = %e, "skipping admin notification");
        }
    }
}

pub fn compose_issue_message(reporter: &employee::Model, issue: &issue::Model) -> String {
    format!(
        "New Issue: {}\n\nCreated by {}\n\nEmail: {}\n\nCreated at {}\n\nIssue description: {}",
        issue.name,
        reporter.full_name,
        reporter.email,
        issue.start_time.format("%Y-%m-%d"),
        issue.description,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::mailer::mock::RecordingMailer;
    use crate::user::repository::mock::MockUserRepository;
    use chrono::{FixedOffset, TimeZone};
    use models::role::RoleType;
    use models::{address, country, office};
    use uuid::Uuid;

    fn person(name: &str, email: &str) -> employee::Model {
        employee::Model {
            id: Uuid::new_v4(),
            full_name: name.into(),
            email: email.into(),
            password: "x".into(),
            phone_number: None,
            position: None,
            avatar: None,
        }
    }

    fn live_in(repo: &MockUserRepository, e: &employee::Model, country_id: Uuid) {
        repo.add_address(address::Model {
            id: Uuid::new_v4(),
            employee_id: e.id,
            street: "Main st. 1".into(),
            city: "Kaunas".into(),
            post_code: None,
            country_id,
        });
    }

    struct World {
        users: Arc<MockUserRepository>,
        reporter: employee::Model,
        office: office::Model,
    }

    fn world() -> World {
        let users = Arc::new(MockUserRepository::default());
        let lt = country::Model { id: Uuid::new_v4(), name: "Lithuania".into() };
        let lv = country::Model { id: Uuid::new_v4(), name: "Latvia".into() };
        let office = office::Model { id: Uuid::new_v4(), name: "Kaunas".into(), country_id: lt.id };
        users.add_country(lt.clone());
        users.add_country(lv.clone());
        users.add_office(office.clone());

        let reporter = person("Rita Reporter", "rita@office.test");
        users.add_employee(reporter.clone(), vec![RoleType::User]);
        live_in(&users, &reporter, lt.id);

        let admin_a = person("Ada Admin", "ada@office.test");
        let admin_b = person("Bob Admin", "bob@office.test");
        let foreign_admin = person("Riga Admin", "riga@office.test");
        for (a, c) in [(&admin_a, lt.id), (&admin_b, lt.id), (&foreign_admin, lv.id)] {
            users.add_employee(a.clone(), vec![RoleType::Admin]);
            live_in(&users, a, c);
        }
        World { users, reporter, office }
    }

    fn reported(w: &World) -> issue::Model {
        issue::Model {
            id: Uuid::new_v4(),
            name: "Broken coffee machine".into(),
            description: "Kitchen, 3rd floor".into(),
            status: "open".into(),
            start_time: FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2024, 3, 5, 9, 30, 0).unwrap(),
            finish_time: None,
            employee_id: w.reporter.id,
            office_id: w.office.id,
            rating: 0,
            comment_count: 0,
        }
    }

    #[test]
    fn message_follows_template() {
        let reporter = person("Rita Reporter", "rita@office.test");
        let issue = issue::Model {
            id: Uuid::nil(),
            name: "Leak".into(),
            description: "Under the sink".into(),
            status: "open".into(),
            start_time: FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2024, 1, 2, 8, 0, 0).unwrap(),
            finish_time: None,
            employee_id: reporter.id,
            office_id: Uuid::nil(),
            rating: 0,
            comment_count: 0,
        };
        assert_eq!(
            compose_issue_message(&reporter, &issue),
            "New Issue: Leak\n\nCreated by Rita Reporter\n\nEmail: rita@office.test\n\nCreated at 2024-01-02\n\nIssue description: Under the sink"
        );
    }

    #[tokio::test]
    async fn mails_only_admins_of_the_issue_office() {
        let w = world();
        let mailer = Arc::new(RecordingMailer::default());
        let notifier = AdminMailNotifier::new(w.users.clone(), mailer.clone());
        let issue = reported(&w);

        assert_eq!(notifier.notify_admins(&issue).await.unwrap(), 2);
        let sent = mailer.sent();
        let recipients: Vec<_> = sent.iter().map(|m| m.to.as_str()).collect();
        assert_eq!(recipients, vec!["ada@office.test", "bob@office.test"]);
        assert!(sent.iter().all(|m| m.subject == "Broken coffee machine"));
        assert!(sent[0].body.contains("Created by Rita Reporter"));
        assert!(sent[0].body.contains("Created at 2024-03-05"));
    }

    #[tokio::test]
    async fn second_office_in_a_country_has_no_admins() {
        let w = world();
        let vilnius = office::Model { id: Uuid::from_u128(u128::MAX), name: "Vilnius".into(), country_id: w.office.country_id };
        w.users.add_office(vilnius.clone());
        let mailer = Arc::new(RecordingMailer::default());
        let notifier = AdminMailNotifier::new(w.users.clone(), mailer.clone());

        let mut issue = reported(&w);
        issue.office_id = vilnius.id;
        assert_eq!(notifier.notify_admins(&issue).await.unwrap(), 0);
        assert!(mailer.sent().is_empty());

        // Admins follow their own resolved office, which is still Kaunas.
        assert_eq!(notifier.notify_admins(&reported(&w)).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn single_delivery_failure_does_not_stop_the_rest() {
        let w = world();
        let mailer = Arc::new(RecordingMailer::default());
        mailer.fail_for("ada@office.test");
        let notifier = AdminMailNotifier::new(w.users.clone(), mailer.clone());

        assert_eq!(notifier.notify_admins(&reported(&w)).await.unwrap(), 1);
        assert_eq!(mailer.sent()[0].to, "bob@office.test");
    }

    #[tokio::test]
    async fn unknown_reporter_is_lookup_error_and_sends_nothing() {
        let w = world();
        let mailer = Arc::new(RecordingMailer::default());
        let notifier = AdminMailNotifier::new(w.users.clone(), mailer.clone());
        let mut issue = reported(&w);
        issue.employee_id = Uuid::new_v4();

        let err = notifier.notify_admins(&issue).await.unwrap_err();
        assert!(matches!(err, NotifyError::Lookup(ServiceError::UserNotFound(_))));
        notifier.issue_reported(&issue).await;
        assert!(mailer.sent().is_empty());
    }
}
