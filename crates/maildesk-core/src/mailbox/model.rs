//! Mailbox data models.

use maildesk_store::{new_id, now_millis};
use serde::{Deserialize, Serialize};

/// A named mail participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Email address.
    pub email: String,
    /// Display name; falls back to the address when unknown.
    pub name: String,
}

impl Address {
    /// Create an address with an explicit display name.
    #[must_use]
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
        }
    }

    /// Parse a comma-separated recipient list, using each trimmed address
    /// as its own display name.
    #[must_use]
    pub fn parse_list(list: &str) -> Vec<Self> {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| Self::new(s, s))
            .collect()
    }
}

/// Well-known folder roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FolderKind {
    /// Incoming mail.
    Inbox,
    /// Mail the user has sent.
    Sent,
    /// Unsent compositions.
    Drafts,
    /// Suspected junk.
    Spam,
    /// Deleted mail, kept until emptied.
    Trash,
}

impl FolderKind {
    /// Parse from the stored string representation.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "inbox" => Some(Self::Inbox),
            "sent" => Some(Self::Sent),
            "drafts" => Some(Self::Drafts),
            "spam" => Some(Self::Spam),
            "trash" => Some(Self::Trash),
            _ => None,
        }
    }

    /// Convert to the stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inbox => "inbox",
            Self::Sent => "sent",
            Self::Drafts => "drafts",
            Self::Spam => "spam",
            Self::Trash => "trash",
        }
    }

    /// Human-readable display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Inbox => "Inbox",
            Self::Sent => "Sent",
            Self::Drafts => "Drafts",
            Self::Spam => "Spam",
            Self::Trash => "Trash",
        }
    }

    /// Icon name for this folder.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Inbox => "inbox",
            Self::Sent => "send",
            Self::Drafts => "file-text",
            Self::Spam => "alert-octagon",
            Self::Trash => "trash-2",
        }
    }
}

/// A mail folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Folder {
    /// Folder identifier, referenced by [`Email::folder_id`].
    pub id: String,
    /// Display name.
    pub name: String,
    /// Folder role.
    pub kind: FolderKind,
}

/// A message in the mailbox.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Email {
    /// Unique identifier.
    pub id: String,
    /// Sender address.
    pub from_email: String,
    /// Sender display name.
    pub from_name: String,
    /// Primary recipients.
    pub to_emails: Vec<Address>,
    /// Carbon-copy recipients.
    #[serde(default)]
    pub cc_emails: Vec<Address>,
    /// Blind-carbon-copy recipients.
    #[serde(default)]
    pub bcc_emails: Vec<Address>,
    /// Subject line.
    pub subject: String,
    /// Body text.
    pub body: String,
    /// Whether the user has opened it.
    pub is_read: bool,
    /// Whether the user has starred it.
    pub is_starred: bool,
    /// Whether this is an unsent draft.
    pub is_draft: bool,
    /// Whether attachments are present.
    pub has_attachments: bool,
    /// Id of the folder currently holding the message.
    pub folder_id: String,
    /// When the message was sent, milliseconds since epoch.
    pub sent_at: i64,
    /// When the message entered the mailbox, milliseconds since epoch.
    pub created_at: i64,
}

/// A composed message ready to send.
#[derive(Debug, Clone, Default)]
pub struct OutgoingEmail {
    /// Primary recipients.
    pub to: Vec<Address>,
    /// Carbon-copy recipients.
    pub cc: Vec<Address>,
    /// Blind-carbon-copy recipients.
    pub bcc: Vec<Address>,
    /// Subject line.
    pub subject: String,
    /// Body text.
    pub body: String,
}

impl OutgoingEmail {
    /// Materialize this composition as a sent message from `sender`,
    /// already marked read and placed in `folder_id`.
    #[must_use]
    pub fn into_email(self, sender: &Address, folder_id: impl Into<String>) -> Email {
        let now = now_millis();
        Email {
            id: new_id(),
            from_email: sender.email.clone(),
            from_name: sender.name.clone(),
            to_emails: self.to,
            cc_emails: self.cc,
            bcc_emails: self.bcc,
            subject: self.subject,
            body: self.body,
            is_read: true,
            is_starred: false,
            is_draft: false,
            has_attachments: false,
            folder_id: folder_id.into(),
            sent_at: now,
            created_at: now,
        }
    }
}
