use async_trait::async_trait;
use configs::NotificationConfig;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

use super::NotifyError;

/// Plain-text mail delivery
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), NotifyError>;
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// STARTTLS relay on `smtp_host:smtp_port`, authenticated when both credentials are set.
    pub fn from_config(cfg: &NotificationConfig) -> Result<Self, NotifyError> {
        let from: Mailbox = cfg.from_address.parse().map_err(|e: lettre::address::AddressError| NotifyError::Address(e.to_string()))?;
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&cfg.smtp_host)
            .map_err(|e| NotifyError::Transport(e.to_string()))?
            .port(cfg.smtp_port);
        if let (Some(user), Some(pass)) = (&cfg.smtp_username, &cfg.smtp_password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }
        Ok(Self { transport: builder.build(), from })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), NotifyError> {
        let to: Mailbox = to.parse().map_err(|e: lettre::address::AddressError| NotifyError::Address(e.to_string()))?;
        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| NotifyError::Message(e.to_string()))?;
        self.transport.send(message).await.map_err(|e| NotifyError::Transport(e.to_string()))?;
        debug!(subject, "mail sent");
        Ok(())
    }
}

/// Recording mailer for tests
pub mod mock {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SentMail {
        pub to: String,
        pub subject: String,
        pub body: String,
    }

    #[derive(Default)]
    pub struct RecordingMailer {
        sent: Mutex<Vec<SentMail>>,
        failing: Mutex<HashSet<String>>,
    }

    impl RecordingMailer {
        /// Make every send to `to` fail with a transport error.
        pub fn fail_for(&self, to: &str) {
            self.failing.lock().unwrap().insert(to.to_string());
        }

        pub fn sent(&self) -> Vec<SentMail> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), NotifyError> {
            if self.failing.lock().unwrap().contains(to) {
                return Err(NotifyError::Transport(format!("mailbox {to} unavailable")));
            }
            self.sent.lock().unwrap().push(SentMail { to: to.into(), subject: subject.into(), body: body.into() });
            Ok(())
        }
    }
}
