use crate::domain::model::{Notification, ReportEvent};
use crate::domain::ports::{EmailNotifier, ReportSink};
use crate::utils::error::Result;
use crate::utils::validation::validate_email;

pub struct EmailService<R: ReportSink> {
    reporter: R,
}

impl<R: ReportSink> EmailService<R> {
    pub fn new(reporter: R) -> Self {
        Self { reporter }
    }
}

impl<R: ReportSink> EmailNotifier for EmailService<R> {
    fn send_email_notification(&self, email: &str) -> Result<Notification> {
        validate_email("email", email)?;

        tracing::debug!(email, "Sending email notification");
        self.reporter.emit(&ReportEvent::NotificationSent {
            email: email.to_string(),
        })?;

        Ok(Notification {
            email: email.to_string(),
        })
    }
}
