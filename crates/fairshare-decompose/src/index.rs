//! Inverse preference index: subject -> endorsing citizens.

use fairshare_core::types::Preferences;

/// Citizens endorsing each subject, in ascending citizen order.
///
/// Built once per run so the allocator's per-subject lookup is a slice
/// borrow instead of a scan over every citizen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceIndex {
    by_subject: Vec<Vec<usize>>,
}

impl PreferenceIndex {
    /// Invert `preferences` over `subjects` subjects.
    ///
    /// Preferences must already be validated against `subjects`; an
    /// out-of-range subject is skipped.
    pub fn build(preferences: &Preferences, subjects: usize) -> Self {
        let mut by_subject = vec![Vec::new(); subjects];
        // Citizens are visited in order, so every list comes out ascending.
        for (citizen, set) in preferences.iter().enumerate() {
            for &subject in set {
                debug_assert!(subject < subjects, "unvalidated subject {subject}");
                if let Some(list) = by_subject.get_mut(subject) {
                    list.push(citizen);
                }
            }
        }
        Self { by_subject }
    }

    /// Endorsers of `subject`. Empty for unknown subjects.
    pub fn interested(&self, subject: usize) -> &[usize] {
        self.by_subject
            .get(subject)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Scan every citizen for `subject`. Same output as
/// [`PreferenceIndex::interested`], without the precomputation.
pub fn find_interested_citizens(preferences: &Preferences, subject: usize) -> Vec<usize> {
    preferences
        .iter()
        .enumerate()
        .filter(|(_, set)| set.contains(&subject))
        .map(|(citizen, _)| citizen)
        .collect()
}
