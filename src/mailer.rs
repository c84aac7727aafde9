//! Outbound mail relay for contact submissions.
//!
//! One message per submission, handed to the configured SMTP provider.
//! Success or failure of the submit is all that is reported; delivery
//! beyond the provider is not tracked.

use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

use crate::config::SmtpConfig;
use crate::errors::Result;
use crate::services::contact::ContactMessage;

#[derive(Clone)]
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl Mailer {
    /// Build the relay from configuration. Without credentials there is
    /// nothing to authenticate against, so `None` comes back and contact
    /// submissions get logged instead of sent.
    pub fn from_config(config: &SmtpConfig) -> Result<Option<Self>> {
        let (Some(username), Some(password)) = (config.username.clone(), config.password.clone())
        else {
            return Ok(None);
        };

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
            .port(config.port)
            .credentials(Credentials::new(username, password))
            .build();

        let from = Mailbox::new(
            Some("Portfolio Contact".to_string()),
            config.from_address.parse::<Address>()?,
        );
        let to = Mailbox::new(None, config.contact_email.parse::<Address>()?);

        Ok(Some(Mailer {
            transport,
            from,
            to,
        }))
    }

    /// Submit one contact message to the provider, with the visitor as
    /// Reply-To so answering the notification mail reaches them.
    pub async fn send_contact(&self, form: &ContactMessage) -> Result<()> {
        let reply_to = Mailbox::new(Some(form.name.clone()), form.email.parse::<Address>()?);

        let email = Message::builder()
            .from(self.from.clone())
            .reply_to(reply_to)
            .to(self.to.clone())
            .subject(format!("Portfolio Contact: {}", form.subject))
            .multipart(MultiPart::alternative_plain_html(
                plain_body(form),
                html_body(form),
            ))?;

        self.transport.send(email).await?;
        info!("Contact message relayed to {}", self.to);
        Ok(())
    }
}

fn plain_body(form: &ContactMessage) -> String {
    format!(
        "Name: {}\nEmail: {}\nSubject: {}\n\nMessage:\n{}\n\n---\nThis message was sent from your portfolio contact form.\n",
        form.name, form.email, form.subject, form.message
    )
}

fn html_body(form: &ContactMessage) -> String {
    format!(
        "<h2>New Contact Form Message</h2>\n\
         <p><strong>From:</strong> {} ({})</p>\n\
         <p><strong>Subject:</strong> {}</p>\n\
         <p><strong>Message:</strong></p>\n\
         <p>{}</p>\n\
         <hr>\n\
         <p>This message was sent from your portfolio contact form.</p>",
        html_escape(&form.name),
        html_escape(&form.email),
        html_escape(&form.subject),
        html_escape(&form.message).replace('\n', "<br>")
    )
}

fn html_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
