//! Required documents and upload progress.

/// Names of the documents required before payment, in display order.
pub const REQUIRED_DOCUMENTS: [&str; 5] = ["Resume", "ID", "Previous Certificate", "Transcript", "Work Experience"];

/// One required document and whether it has been uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRequirement {
    pub name: String,
    pub uploaded: bool,
}

/// Fixed checklist of required documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentChecklist {
    documents: Vec<DocumentRequirement>,
}

impl Default for DocumentChecklist {
    /// Seed checklist: the resume is already on file.
    fn default() -> Self {
        let mut checklist = Self::empty();
        checklist.mark_uploaded("Resume");
        checklist
    }
}

impl DocumentChecklist {
    /// Checklist with nothing uploaded.
    pub fn empty() -> Self {
        Self {
            documents: REQUIRED_DOCUMENTS
                .iter()
                .map(|name| DocumentRequirement {
                    name: (*name).to_string(),
                    uploaded: false,
                })
                .collect(),
        }
    }

    /// Documents in display order.
    pub fn documents(&self) -> &[DocumentRequirement] {
        &self.documents
    }

    /// Mark the named document uploaded.
    ///
    /// Returns `true` if the flag changed. Unknown names and repeat uploads are no-ops.
    pub fn mark_uploaded(&mut self, name: &str) -> bool {
        match self.documents.iter_mut().find(|d| d.name == name) {
            Some(doc) if !doc.uploaded => {
                doc.uploaded = true;
                true
            }
            _ => false,
        }
    }

    /// Number of uploaded documents.
    pub fn uploaded_count(&self) -> usize {
        self.documents.iter().filter(|d| d.uploaded).count()
    }

    /// Upload progress as a whole percentage (0-100).
    pub fn completion_percent(&self) -> u8 {
        let total = self.documents.len();
        if total == 0 {
            return 100;
        }
        // Integer half-up rounding of uploaded / total * 100.
        ((self.uploaded_count() * 200 + total) / (total * 2)) as u8
    }

    /// Whether every document is uploaded, which unlocks payment.
    pub fn can_proceed_to_payment(&self) -> bool {
        self.completion_percent() == 100
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_seed_has_resume_uploaded() {
        let checklist = DocumentChecklist::default();
        assert_eq!(checklist.uploaded_count(), 1);
        assert!(checklist.documents()[0].uploaded);
        assert_eq!(checklist.completion_percent(), 20);
        assert!(!checklist.can_proceed_to_payment());
    }

    #[test]
    fn test_unknown_name_is_noop() {
        let mut checklist = DocumentChecklist::default();
        let before = checklist.clone();
        assert!(!checklist.mark_uploaded("Passport"));
        assert!(!checklist.mark_uploaded("resume"));
        assert_eq!(checklist, before);
    }

    #[test]
    fn test_repeat_upload_is_noop() {
        let mut checklist = DocumentChecklist::empty();
        assert!(checklist.mark_uploaded("ID"));
        assert!(!checklist.mark_uploaded("ID"));
        assert_eq!(checklist.uploaded_count(), 1);
    }

    #[test]
    fn test_all_uploaded_unlocks_payment() {
        let mut checklist = DocumentChecklist::default();
        for name in REQUIRED_DOCUMENTS {
            checklist.mark_uploaded(name);
        }
        assert_eq!(checklist.completion_percent(), 100);
        assert!(checklist.can_proceed_to_payment());
    }

    #[test]
    fn test_percent_steps() {
        let mut checklist = DocumentChecklist::empty();
        let mut seen = vec![checklist.completion_percent()];
        for name in REQUIRED_DOCUMENTS {
            checklist.mark_uploaded(name);
            seen.push(checklist.completion_percent());
        }
        assert_eq!(seen, vec![0, 20, 40, 60, 80, 100]);
    }

    proptest! {
        #[test]
        fn prop_percent_is_monotonic_and_exact(picks in proptest::collection::vec(0usize..7, 0..20)) {
            let mut checklist = DocumentChecklist::empty();
            let mut last = checklist.completion_percent();

            for pick in picks {
                // Indices 5 and 6 exercise unknown names.
                let name = REQUIRED_DOCUMENTS.get(pick).copied().unwrap_or("Unknown");
                checklist.mark_uploaded(name);

                let percent = checklist.completion_percent();
                prop_assert!(percent >= last);
                let expected = (100.0 * checklist.uploaded_count() as f64 / 5.0).round() as u8;
                prop_assert_eq!(percent, expected);
                prop_assert_eq!(checklist.can_proceed_to_payment(), percent == 100);
                last = percent;
            }
        }
    }
}
