//! The in-memory mailbox.

use tracing::debug;

use super::model::{Address, Email, Folder, FolderKind, OutgoingEmail};
use super::sample::{default_folders, sample_emails};

/// Folders and messages for one session, held entirely in memory.
///
/// Mutations follow the mailbox conventions rather than the collection
/// store's: deleting moves a message to Trash instead of removing it, and
/// sending places the composed message in Sent already marked read.
/// Operations on an unknown message id return `false` and change nothing.
pub struct Mailbox {
    folders: Vec<Folder>,
    emails: Vec<Email>,
    user: Address,
}

impl Mailbox {
    /// An empty mailbox for `user` with the default folder set.
    #[must_use]
    pub fn new(user: Address) -> Self {
        Self {
            folders: default_folders(),
            emails: Vec::new(),
            user,
        }
    }

    /// A mailbox pre-loaded with the sample messages.
    #[must_use]
    pub fn with_samples(user: Address) -> Self {
        let mut mailbox = Self::new(user);
        mailbox.emails = sample_emails();
        mailbox
    }

    /// The folder list, in display order.
    #[must_use]
    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    /// The folder with the given role, if present.
    #[must_use]
    pub fn folder_of_kind(&self, kind: FolderKind) -> Option<&Folder> {
        self.folders.iter().find(|f| f.kind == kind)
    }

    /// Messages currently in `folder_id`, newest first.
    #[must_use]
    pub fn emails_in(&self, folder_id: &str) -> Vec<&Email> {
        self.emails
            .iter()
            .filter(|e| e.folder_id == folder_id)
            .collect()
    }

    /// Unread message count for `folder_id`.
    #[must_use]
    pub fn unread_count(&self, folder_id: &str) -> usize {
        self.emails
            .iter()
            .filter(|e| e.folder_id == folder_id && !e.is_read)
            .count()
    }

    /// Starred messages across all folders.
    #[must_use]
    pub fn starred(&self) -> Vec<&Email> {
        self.emails.iter().filter(|e| e.is_starred).collect()
    }

    /// Look up a message by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Email> {
        self.emails.iter().find(|e| e.id == id)
    }

    /// Send a composed message: it lands in the Sent folder, marked read,
    /// newest first. Returns the message id.
    pub fn send(&mut self, outgoing: OutgoingEmail) -> String {
        let sent_id = self
            .folder_of_kind(FolderKind::Sent)
            .map_or_else(|| "2".to_string(), |f| f.id.clone());
        let email = outgoing.into_email(&self.user, sent_id);
        let id = email.id.clone();
        debug!("Sent email {id}: {}", email.subject);
        self.emails.insert(0, email);
        id
    }

    /// Move a message to the Trash folder. It is never removed outright.
    ///
    /// Returns `false` if no message matched.
    pub fn delete(&mut self, id: &str) -> bool {
        let trash_id = self
            .folder_of_kind(FolderKind::Trash)
            .map_or_else(|| "5".to_string(), |f| f.id.clone());
        self.move_to(id, &trash_id)
    }

    /// Move a message to another folder; `false` if no message matched.
    pub fn move_to(&mut self, id: &str, folder_id: &str) -> bool {
        match self.emails.iter_mut().find(|e| e.id == id) {
            Some(email) => {
                email.folder_id = folder_id.to_string();
                true
            }
            None => false,
        }
    }

    /// Set the read flag; `false` if no message matched.
    pub fn mark_read(&mut self, id: &str, read: bool) -> bool {
        match self.emails.iter_mut().find(|e| e.id == id) {
            Some(email) => {
                email.is_read = read;
                true
            }
            None => false,
        }
    }

    /// Flip the starred flag; `false` if no message matched.
    pub fn toggle_star(&mut self, id: &str) -> bool {
        match self.emails.iter_mut().find(|e| e.id == id) {
            Some(email) => {
                email.is_starred = !email.is_starred;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn mailbox() -> Mailbox {
        Mailbox::with_samples(Address::new("john.doe@example.com", "John Doe"))
    }

    #[test]
    fn samples_land_in_the_inbox() {
        let mailbox = mailbox();
        let inbox = mailbox.folder_of_kind(FolderKind::Inbox).unwrap().id.clone();
        assert_eq!(mailbox.emails_in(&inbox).len(), 2);
        assert_eq!(mailbox.unread_count(&inbox), 1);
    }

    #[test]
    fn send_places_a_read_message_in_sent() {
        let mut mailbox = mailbox();
        let id = mailbox.send(OutgoingEmail {
            to: Address::parse_list("alice@example.com"),
            subject: "Hello".to_string(),
            body: "Hi Alice".to_string(),
            ..OutgoingEmail::default()
        });

        let sent = mailbox.folder_of_kind(FolderKind::Sent).unwrap().id.clone();
        let in_sent = mailbox.emails_in(&sent);
        assert_eq!(in_sent.len(), 1);
        assert_eq!(in_sent[0].id, id);
        assert!(in_sent[0].is_read);
        assert_eq!(in_sent[0].from_email, "john.doe@example.com");
    }

    #[test]
    fn delete_moves_to_trash_instead_of_removing() {
        let mut mailbox = mailbox();
        let inbox = mailbox.folder_of_kind(FolderKind::Inbox).unwrap().id.clone();
        let trash = mailbox.folder_of_kind(FolderKind::Trash).unwrap().id.clone();
        let id = mailbox.emails_in(&inbox)[0].id.clone();

        assert!(mailbox.delete(&id));
        assert_eq!(mailbox.emails_in(&inbox).len(), 1);
        assert_eq!(mailbox.emails_in(&trash).len(), 1);
        // Still present in the mailbox.
        assert!(mailbox.get(&id).is_some());
    }

    #[test]
    fn operations_on_unknown_ids_are_no_ops() {
        let mut mailbox = mailbox();
        assert!(!mailbox.delete("ghost"));
        assert!(!mailbox.move_to("ghost", "1"));
        assert!(!mailbox.mark_read("ghost", true));
        assert!(!mailbox.toggle_star("ghost"));
    }

    #[test]
    fn mark_read_and_star_flags() {
        let mut mailbox = mailbox();
        let inbox = mailbox.folder_of_kind(FolderKind::Inbox).unwrap().id.clone();
        let unread_id = mailbox
            .emails_in(&inbox)
            .iter()
            .find(|e| !e.is_read)
            .unwrap()
            .id
            .clone();

        assert!(mailbox.mark_read(&unread_id, true));
        assert_eq!(mailbox.unread_count(&inbox), 0);

        assert!(mailbox.toggle_star(&unread_id));
        assert!(mailbox.get(&unread_id).unwrap().is_starred);
        assert_eq!(mailbox.starred().len(), 2);
    }
}
