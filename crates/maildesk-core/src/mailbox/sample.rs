//! Built-in folders and sample messages.

use maildesk_store::{new_id, now_millis};

use super::model::{Address, Email, Folder, FolderKind};

/// The fixed folder set every mailbox starts with.
#[must_use]
pub fn default_folders() -> Vec<Folder> {
    [
        ("1", FolderKind::Inbox),
        ("2", FolderKind::Sent),
        ("3", FolderKind::Drafts),
        ("4", FolderKind::Spam),
        ("5", FolderKind::Trash),
    ]
    .into_iter()
    .map(|(id, kind)| Folder {
        id: id.to_string(),
        name: kind.display_name().to_string(),
        kind,
    })
    .collect()
}

/// A couple of inbox messages so a fresh mailbox isn't empty.
#[must_use]
pub fn sample_emails() -> Vec<Email> {
    let now = now_millis();
    let me = Address::new("me@example.com", "Me");
    vec![
        Email {
            id: new_id(),
            from_email: "john@example.com".to_string(),
            from_name: "John Doe".to_string(),
            to_emails: vec![me.clone()],
            cc_emails: Vec::new(),
            bcc_emails: Vec::new(),
            subject: "Welcome to MailDesk".to_string(),
            body: "Hello! This is a sample email to help you get started with \
                   your new mail application. Feel free to compose new messages \
                   and organize your inbox."
                .to_string(),
            is_read: false,
            is_starred: false,
            is_draft: false,
            has_attachments: false,
            folder_id: "1".to_string(),
            sent_at: now,
            created_at: now,
        },
        Email {
            id: new_id(),
            from_email: "sarah@example.com".to_string(),
            from_name: "Sarah Smith".to_string(),
            to_emails: vec![me],
            cc_emails: Vec::new(),
            bcc_emails: Vec::new(),
            subject: "Project Update".to_string(),
            body: "Hi there,\n\nI wanted to give you a quick update on the \
                   project. Everything is going well and we are on track to \
                   meet our deadline.\n\nBest regards,\nSarah"
                .to_string(),
            is_read: true,
            is_starred: true,
            is_draft: false,
            has_attachments: false,
            folder_id: "1".to_string(),
            sent_at: now - 86_400_000,
            created_at: now - 86_400_000,
        },
    ]
}
