use crate::error::{DomainError, Result};
use std::cell::RefCell;

// ============================================================================
// Abstractions the service depends on
// ============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait NotificationSender {
    fn send(&self, recipient: &str, message: &str) -> Result<()>;
}

#[cfg_attr(test, mockall::automock)]
pub trait AuditLog {
    fn record(&self, message: &str);
}

// ============================================================================
// Concrete senders and logs
// ============================================================================

#[derive(Debug, Default, Clone, Copy)]
pub struct EmailSender;

impl NotificationSender for EmailSender {
    fn send(&self, recipient: &str, message: &str) -> Result<()> {
        if !recipient.contains('@') {
            return Err(DomainError::invalid_argument(
                "recipient",
                format!("'{recipient}' is not an email address"),
            ));
        }
        tracing::info!(channel = "email", recipient, message, "notification sent");
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SmsSender;

impl NotificationSender for SmsSender {
    fn send(&self, recipient: &str, message: &str) -> Result<()> {
        if !recipient.chars().any(|c| c.is_ascii_digit()) {
            return Err(DomainError::invalid_argument(
                "recipient",
                format!("'{recipient}' is not a phone number"),
            ));
        }
        tracing::info!(channel = "sms", recipient, message, "notification sent");
        Ok(())
    }
}

/// Forwards every record to the tracing subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAuditLog;

impl AuditLog for TracingAuditLog {
    fn record(&self, message: &str) {
        tracing::info!(target: "audit", "{message}");
    }
}

/// Keeps records in memory so callers can inspect them afterwards.
#[derive(Debug, Default)]
pub struct MemoryAuditLog {
    entries: RefCell<Vec<String>>,
}

impl MemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }
}

impl AuditLog for MemoryAuditLog {
    fn record(&self, message: &str) {
        self.entries.borrow_mut().push(message.to_string());
    }
}

// ============================================================================
// High-level service
// ============================================================================

/// Registration workflow. It knows nothing about which channel delivers the
/// welcome message or where the audit trail ends up.
pub struct UserService<S: NotificationSender, L: AuditLog> {
    sender: S,
    log: L,
}

impl<S: NotificationSender, L: AuditLog> UserService<S, L> {
    pub fn new(sender: S, log: L) -> Self {
        Self { sender, log }
    }

    pub fn sender(&self) -> &S {
        &self.sender
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    pub fn register(&self, username: &str, contact: &str) -> Result<()> {
        self.log.record(&format!("Validating user: {username}"));

        if username.trim().is_empty() {
            self.log.record("Error: Username cannot be empty");
            return Err(DomainError::invalid_argument(
                "username",
                "Username cannot be empty",
            ));
        }
        if contact.trim().is_empty() {
            self.log.record("Error: Contact cannot be empty");
            return Err(DomainError::invalid_argument(
                "contact",
                "Contact cannot be empty",
            ));
        }

        if let Err(err) = self.sender.send(contact, &format!("Welcome {username}!")) {
            self.log
                .record(&format!("Error: Could not notify {username}: {err}"));
            return Err(err);
        }
        self.log
            .record(&format!("User {username} registered successfully"));
        Ok(())
    }
}
