//! Email service for sending OTP verification codes via SMTP.

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::sync::Arc;

use lectern_core::{AppError, Config};

const DEFAULT_SMTP_PORT: u16 = 587;

/// Email service for OTP delivery. Absent when SMTP is not configured;
/// callers fall back to logging the code.
#[derive(Clone)]
pub struct EmailService {
    mailer: Arc<AsyncSmtpTransport<Tokio1Executor>>,
    from: String,
}

impl EmailService {
    /// Create email service from config. Returns `None` if SMTP is not configured.
    pub fn from_config(config: &Config) -> Option<Self> {
        let host = config.smtp_host()?;
        let from = config.smtp_from().or_else(|| config.smtp_user())?.to_string();
        let port = config.smtp_port().unwrap_or(DEFAULT_SMTP_PORT);

        let builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
            .ok()?
            .port(port);
        let builder = if let (Some(user), Some(password)) =
            (config.smtp_user(), config.smtp_password())
        {
            builder.credentials(Credentials::new(user.to_string(), password.to_string()))
        } else {
            builder
        };

        tracing::info!(host = %host, port = port, "Email service initialized (SMTP with STARTTLS)");

        Some(Self {
            mailer: Arc::new(builder.build()),
            from,
        })
    }

    /// Send the verification code to one recipient.
    pub async fn send_otp(&self, to: &str, otp: &str) -> Result<(), AppError> {
        let from_addr: Mailbox = self
            .from
            .parse()
            .map_err(|e| AppError::EmailDelivery(format!("Invalid SMTP_FROM address: {}", e)))?;
        let to_addr: Mailbox = to
            .parse()
            .map_err(|e| AppError::EmailDelivery(format!("Invalid recipient address: {}", e)))?;

        let email = Message::builder()
            .from(from_addr)
            .to(to_addr)
            .subject("Lectern - Email Verification OTP")
            .header(ContentType::TEXT_HTML)
            .body(otp_email_body(otp))
            .map_err(|e| AppError::EmailDelivery(format!("Failed to build email: {}", e)))?;

        self.mailer
            .send(email)
            .await
            .map_err(|e| AppError::EmailDelivery(format!("Failed to send OTP email: {}", e)))?;

        tracing::info!(to = %to, "OTP email sent");
        Ok(())
    }
}

fn otp_email_body(otp: &str) -> String {
    format!(
        r#"<div style="font-family: Arial, sans-serif; padding: 20px; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #4CAF50;">Lectern</h2>
  <h3>Email Verification</h3>
  <p>Your OTP for email verification is:</p>
  <div style="background-color: #f5f5f5; padding: 15px; text-align: center; font-size: 32px; font-weight: bold; letter-spacing: 5px; margin: 20px 0;">
    {otp}
  </div>
  <p>This OTP is valid for 10 minutes.</p>
  <p>If you didn't request this, please ignore this email.</p>
</div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lectern_core::LecternConfig;
    use std::path::PathBuf;

    fn config(smtp_host: Option<&str>, smtp_user: Option<&str>, smtp_from: Option<&str>) -> Config {
        Config(Box::new(LecternConfig {
            server_port: 5001,
            cors_origins: vec!["*".to_string()],
            environment: "development".to_string(),
            database_url: "sqlite::memory:".to_string(),
            db_max_connections: 1,
            upload_dir: PathBuf::from("./uploads"),
            max_upload_size_bytes: 1024,
            ffmpeg_path: "ffmpeg".to_string(),
            ffmpeg_timeout_secs: 0,
            smtp_host: smtp_host.map(String::from),
            smtp_port: None,
            smtp_user: smtp_user.map(String::from),
            smtp_password: None,
            smtp_from: smtp_from.map(String::from),
        }))
    }

    #[test]
    fn test_from_config_requires_host() {
        assert!(EmailService::from_config(&config(None, None, None)).is_none());
    }

    #[test]
    fn test_from_config_requires_sender_identity() {
        assert!(EmailService::from_config(&config(Some("smtp.example.com"), None, None)).is_none());
    }

    #[test]
    fn test_from_config_falls_back_to_user_as_sender() {
        let service =
            EmailService::from_config(&config(Some("smtp.example.com"), Some("otp@example.com"), None))
                .unwrap();
        assert_eq!(service.from, "otp@example.com");
    }

    #[test]
    fn test_otp_body_contains_code_and_validity() {
        let body = otp_email_body("123456");
        assert!(body.contains("123456"));
        assert!(body.contains("valid for 10 minutes"));
    }
}
