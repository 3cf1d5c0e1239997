//! File list view state.
//!
//! # Design
//! - Lists are read caches owned by the view that fetched them.
//! - The only local mutation is the admin patch after a translated upload.
//! - Completion is derived from the translated URL, never from the status label.

use std::collections::BTreeMap;
use transdesk_api_models::{FileRecord, STATUS_COMPLETED};

/// Language pair shown in the client table.
pub const SOURCE_LANGUAGE: &str = "English";
/// Language pair shown in the client table.
pub const TARGET_LANGUAGE: &str = "Arabic";
/// Turnaround placeholder until the API reports one.
pub const TAT_PLACEHOLDER: &str = "-";

/// Badge tone for a record's status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    /// Awaiting a translation.
    Pending,
    /// Translation attached.
    Complete,
}

impl StatusTone {
    /// Badge class for the tone.
    #[must_use]
    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Pending => "bg-warning",
            Self::Complete => "bg-success",
        }
    }
}

/// Tone for a record.
#[must_use]
pub const fn status_tone(record: &FileRecord) -> StatusTone {
    if record.is_complete() {
        StatusTone::Complete
    } else {
        StatusTone::Pending
    }
}

/// Records owned by `owner_id`, in fetch order.
#[must_use]
pub fn owned_by(records: &[FileRecord], owner_id: &str) -> Vec<FileRecord> {
    records
        .iter()
        .filter(|record| record.owner_id == owner_id)
        .cloned()
        .collect()
}

/// Mark one record complete after its translation was stored.
///
/// Other records are returned untouched. When the acknowledgement carries no
/// URL the record keeps whatever translated URL it had.
#[must_use]
pub fn attach_translation(
    records: &[FileRecord],
    file_id: &str,
    translated_url: Option<String>,
) -> Vec<FileRecord> {
    records
        .iter()
        .map(|record| {
            if record.id == file_id {
                let mut next = record.clone();
                if translated_url.is_some() {
                    next.translated_file_url.clone_from(&translated_url);
                }
                next.status = STATUS_COMPLETED.to_string();
                next
            } else {
                record.clone()
            }
        })
        .collect()
}

/// Client column text in the admin table: the owner's name, else their id.
#[must_use]
pub fn owner_label(record: &FileRecord) -> &str {
    record
        .owner_name
        .as_deref()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(&record.owner_id)
}

/// Identifier the admin table passes to the download endpoint.
///
/// This is the owner's id, not the record's; the deployed API is addressed
/// this way today.
// TODO: switch to `record.id` once the download endpoint semantics are confirmed server-side.
#[must_use]
pub fn admin_download_id(record: &FileRecord) -> &str {
    &record.owner_id
}

/// Identifier the client table passes to the download endpoint.
#[must_use]
pub fn client_download_id(record: &FileRecord) -> &str {
    &record.id
}

/// Filename offered by the browser save dialog.
#[must_use]
pub fn download_filename(id: &str) -> String {
    format!("file_{id}")
}

/// In-flight work keyed by record id, at most one per record.
///
/// Each start hands back a ticket; finishing with a stale ticket leaves the
/// newer entry in place.
#[derive(Debug)]
pub struct InFlight<H> {
    entries: BTreeMap<String, (u64, H)>,
    next_ticket: u64,
}

impl<H> Default for InFlight<H> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_ticket: 0,
        }
    }
}

impl<H> InFlight<H> {
    /// Track `handle` for `id`, dropping any handle it replaces.
    pub fn start(&mut self, id: &str, handle: H) -> u64 {
        self.next_ticket += 1;
        let ticket = self.next_ticket;
        self.entries.insert(id.to_string(), (ticket, handle));
        ticket
    }

    /// Release the entry for `id` if it still belongs to `ticket`.
    pub fn finish(&mut self, id: &str, ticket: u64) -> Option<H> {
        match self.entries.get(id) {
            Some((current, _)) if *current == ticket => {
                self.entries.remove(id).map(|(_, handle)| handle)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, owner: &str) -> FileRecord {
        FileRecord {
            id: id.to_string(),
            owner_id: owner.to_string(),
            status: "Uploaded".to_string(),
            ..FileRecord::default()
        }
    }

    #[test]
    fn client_sees_only_own_records() {
        let rows = vec![record("1", "me"), record("2", "them"), record("3", "me")];
        let mine = owned_by(&rows, "me");
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|r| r.owner_id == "me"));
        assert!(owned_by(&rows, "").is_empty());
    }

    #[test]
    fn owner_label_prefers_name() {
        let mut row = record("1", "owner-9");
        assert_eq!(owner_label(&row), "owner-9");
        row.owner_name = Some("  ".into());
        assert_eq!(owner_label(&row), "owner-9");
        row.owner_name = Some("Ada".into());
        assert_eq!(owner_label(&row), "Ada");
    }

    #[test]
    fn attach_translation_patches_only_target() {
        let rows = vec![record("1", "a"), record("2", "b")];
        let patched = attach_translation(&rows, "2", Some("https://cdn/t".into()));
        assert_eq!(patched[0], rows[0]);
        assert_eq!(patched[1].status, STATUS_COMPLETED);
        assert_eq!(patched[1].translated_file_url.as_deref(), Some("https://cdn/t"));
        assert_eq!(status_tone(&patched[1]), StatusTone::Complete);
        assert_eq!(status_tone(&patched[0]), StatusTone::Pending);
    }

    #[test]
    fn attach_without_url_keeps_completion_derived_from_url() {
        let rows = vec![record("1", "a")];
        let patched = attach_translation(&rows, "1", None);
        assert_eq!(patched[0].status, STATUS_COMPLETED);
        assert!(!patched[0].is_complete());
        assert_eq!(attach_translation(&rows, "missing", None), rows);
    }

    #[test]
    fn download_targets() {
        let row = record("file-9", "owner-3");
        assert_eq!(admin_download_id(&row), "owner-3");
        assert_eq!(client_download_id(&row), "file-9");
        assert_eq!(download_filename("owner-3"), "file_owner-3");
        assert_eq!(StatusTone::Pending.badge_class(), "bg-warning");
    }

    #[test]
    fn finished_uploads_are_released() {
        let mut uploads = InFlight::default();
        let first = uploads.start("1", "a");
        let second = uploads.start("2", "b");
        assert_eq!(uploads.finish("1", first), Some("a"));
        assert_eq!(uploads.finish("1", first), None);
        assert_eq!(uploads.finish("2", second), Some("b"));
        assert_eq!(uploads.finish("2", second), None);
    }

    #[test]
    fn stale_completion_keeps_the_replacement() {
        let mut uploads = InFlight::default();
        let stale = uploads.start("1", "old");
        let fresh = uploads.start("1", "new");
        assert_eq!(uploads.finish("1", stale), None);
        assert_eq!(uploads.finish("1", fresh), Some("new"));
        assert_eq!(uploads.finish("1", fresh), None);
    }
}
