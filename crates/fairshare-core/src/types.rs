//! Core data types: budgets, preferences, shares, and decomposition matrices.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{Infeasibility, InputError};

/// Per-subject funding amounts, indexed `0..len()`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Budget(Vec<f64>);

impl Budget {
    pub fn new(amounts: Vec<f64>) -> Self {
        Self(amounts)
    }

    /// Number of subjects.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn amounts(&self) -> &[f64] {
        &self.0
    }

    /// Budget of a single subject.
    ///
    /// # Panics
    ///
    /// Panics if `subject` is not below [`Budget::len`].
    pub fn amount(&self, subject: usize) -> f64 {
        self.0[subject]
    }

    /// Sum of all subject budgets, accumulated in subject order.
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Reject negative, NaN, and infinite amounts.
    pub fn validate(&self) -> Result<(), InputError> {
        for (subject, &value) in self.0.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(InputError::InvalidBudget { subject, value });
            }
        }
        Ok(())
    }
}

impl From<Vec<f64>> for Budget {
    fn from(amounts: Vec<f64>) -> Self {
        Self(amounts)
    }
}

impl From<&[f64]> for Budget {
    fn from(amounts: &[f64]) -> Self {
        Self(amounts.to_vec())
    }
}

/// The endorsed subject set of every citizen, indexed `0..citizens()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Preferences(Vec<BTreeSet<usize>>);

impl Preferences {
    pub fn new(sets: Vec<BTreeSet<usize>>) -> Self {
        Self(sets)
    }

    /// Number of citizens.
    pub fn citizens(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Subjects endorsed by `citizen`. Panics if `citizen` is out of range.
    pub fn of(&self, citizen: usize) -> &BTreeSet<usize> {
        &self.0[citizen]
    }

    pub fn iter(&self) -> impl Iterator<Item = &BTreeSet<usize>> {
        self.0.iter()
    }

    /// Index of the first citizen with an empty preference set, if any.
    pub fn first_empty(&self) -> Option<usize> {
        self.0.iter().position(BTreeSet::is_empty)
    }

    /// Check that every endorsed subject index is below `subjects`.
    pub fn validate(&self, subjects: usize) -> Result<(), InputError> {
        for (citizen, set) in self.0.iter().enumerate() {
            // BTreeSet iterates ascending, so the last element is the largest.
            if let Some(&subject) = set.last() {
                if subject >= subjects {
                    return Err(InputError::SubjectOutOfRange {
                        citizen,
                        subject,
                        subjects,
                    });
                }
            }
        }
        Ok(())
    }
}

impl From<Vec<BTreeSet<usize>>> for Preferences {
    fn from(sets: Vec<BTreeSet<usize>>) -> Self {
        Self(sets)
    }
}

impl From<&[BTreeSet<usize>]> for Preferences {
    fn from(sets: &[BTreeSet<usize>]) -> Self {
        Self(sets.to_vec())
    }
}

/// Total budget and the equal amount every citizen must receive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Share {
    /// Sum of all subject budgets.
    pub total: f64,
    /// `total / citizens`, or 0 when there are no citizens.
    pub per_citizen: f64,
}

/// Citizen x subject allocation matrix, stored row-major.
///
/// Row `i` is citizen `i`'s allocation across all subjects; column `j`
/// collects the parts of subject `j`'s budget credited to each citizen.
///
/// Serializes as nested rows (`[[f64; subjects]; citizens]`). Deserializing
/// rejects ragged rows. A matrix with no citizens serializes as `[]`, so its
/// subject count does not survive a round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<f64>>", try_from = "Vec<Vec<f64>>")]
pub struct Decomposition {
    citizens: usize,
    subjects: usize,
    cells: Vec<f64>,
}

impl Decomposition {
    /// A zero-filled `citizens x subjects` matrix.
    pub fn zeros(citizens: usize, subjects: usize) -> Self {
        Self {
            citizens,
            subjects,
            cells: vec![0.0; citizens * subjects],
        }
    }

    pub fn citizens(&self) -> usize {
        self.citizens
    }

    pub fn subjects(&self) -> usize {
        self.subjects
    }

    /// Amount of subject `subject` credited to `citizen`.
    pub fn get(&self, citizen: usize, subject: usize) -> f64 {
        self.cells[self.offset(citizen, subject)]
    }

    pub fn set(&mut self, citizen: usize, subject: usize, amount: f64) {
        let at = self.offset(citizen, subject);
        self.cells[at] = amount;
    }

    /// Add `amount` to one cell.
    pub fn credit(&mut self, citizen: usize, subject: usize, amount: f64) {
        let at = self.offset(citizen, subject);
        self.cells[at] += amount;
    }

    pub fn row(&self, citizen: usize) -> &[f64] {
        let start = citizen * self.subjects;
        &self.cells[start..start + self.subjects]
    }

    /// Sum of a citizen's allocation, accumulated in subject order.
    pub fn row_sum(&self, citizen: usize) -> f64 {
        self.row(citizen).iter().sum()
    }

    /// Sum of a subject's column across all citizens.
    pub fn column_sum(&self, subject: usize) -> f64 {
        (0..self.citizens).map(|c| self.get(c, subject)).sum()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        (0..self.citizens).map(move |c| self.row(c))
    }

    /// Copy the matrix out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.citizens).map(|c| self.row(c).to_vec()).collect()
    }

    /// Build a matrix from nested rows, all of the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, InputError> {
        let citizens = rows.len();
        let subjects = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(citizens * subjects);
        for (citizen, row) in rows.into_iter().enumerate() {
            if row.len() != subjects {
                return Err(InputError::RaggedRow {
                    citizen,
                    len: row.len(),
                    subjects,
                });
            }
            cells.extend(row);
        }
        Ok(Self {
            citizens,
            subjects,
            cells,
        })
    }

    fn offset(&self, citizen: usize, subject: usize) -> usize {
        assert!(
            citizen < self.citizens && subject < self.subjects,
            "cell ({citizen}, {subject}) outside {}x{} decomposition",
            self.citizens,
            self.subjects
        );
        citizen * self.subjects + subject
    }
}

impl From<Decomposition> for Vec<Vec<f64>> {
    fn from(decomposition: Decomposition) -> Self {
        decomposition.to_rows()
    }
}

impl TryFrom<Vec<Vec<f64>>> for Decomposition {
    type Error = InputError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

/// Which construction produced a decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolvePath {
    /// Closed form for one-to-one subject claims. Shares may be unequal.
    Basic,
    /// Greedy allocation followed by share verification.
    General,
    /// No citizens and no money: the empty matrix.
    Degenerate,
}

/// Result of a decomposition run on well-formed inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Decomposed {
        decomposition: Decomposition,
        path: SolvePath,
    },
    Infeasible {
        reason: Infeasibility,
    },
}

impl Outcome {
    pub fn is_feasible(&self) -> bool {
        matches!(self, Self::Decomposed { .. })
    }

    /// Drop the path and failure reason, keeping only the matrix if any.
    pub fn into_decomposition(self) -> Option<Decomposition> {
        match self {
            Self::Decomposed { decomposition, .. } => Some(decomposition),
            Self::Infeasible { .. } => None,
        }
    }

    pub fn into_result(self) -> Result<(Decomposition, SolvePath), Infeasibility> {
        match self {
            Self::Decomposed {
                decomposition,
                path,
            } => Ok((decomposition, path)),
            Self::Infeasible { reason } => Err(reason),
        }
    }
}

impl From<Infeasibility> for Outcome {
    fn from(reason: Infeasibility) -> Self {
        Self::Infeasible { reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn prefs(sets: &[&[usize]]) -> Preferences {
        Preferences::new(sets.iter().map(|s| s.iter().copied().collect()).collect())
    }

    // --- Budget ---

    #[test]
    fn budget_total_sums_subjects() {
        let b = Budget::new(vec![400.0, 50.0, 50.0, 0.0]);
        assert_eq!(b.total(), 500.0);
        assert_eq!(b.len(), 4);
        assert_eq!(b.amount(1), 50.0);
    }

    #[test]
    fn empty_budget_totals_zero() {
        assert_eq!(Budget::default().total(), 0.0);
        assert!(Budget::default().is_empty());
    }

    #[test]
    fn budget_rejects_negative_amount() {
        let err = Budget::new(vec![1.0, -0.5]).validate().unwrap_err();
        assert_eq!(err, InputError::InvalidBudget { subject: 1, value: -0.5 });
    }

    #[test]
    fn budget_rejects_non_finite_amounts() {
        assert!(Budget::new(vec![f64::NAN]).validate().is_err());
        assert!(Budget::new(vec![0.0, f64::INFINITY]).validate().is_err());
    }

    #[test]
    fn budget_accepts_zero_amounts() {
        assert!(Budget::new(vec![0.0, 0.0]).validate().is_ok());
    }

    // --- Preferences ---

    #[test]
    fn first_empty_finds_lowest_citizen() {
        let p = prefs(&[&[0], &[], &[1], &[]]);
        assert_eq!(p.first_empty(), Some(1));
        assert_eq!(prefs(&[&[0], &[1]]).first_empty(), None);
    }

    #[test]
    fn preferences_reject_out_of_range_subject() {
        let p = prefs(&[&[0], &[0, 3]]);
        assert_eq!(
            p.validate(3).unwrap_err(),
            InputError::SubjectOutOfRange { citizen: 1, subject: 3, subjects: 3 }
        );
        assert!(p.validate(4).is_ok());
    }

    #[test]
    fn empty_preference_set_is_valid_input() {
        assert!(prefs(&[&[]]).validate(0).is_ok());
    }

    // --- Decomposition ---

    #[test]
    fn zeros_has_requested_shape() {
        let d = Decomposition::zeros(3, 2);
        assert_eq!(d.citizens(), 3);
        assert_eq!(d.subjects(), 2);
        assert!(d.to_rows().iter().flatten().all(|&v| v == 0.0));
    }

    #[test]
    fn credit_accumulates_into_cell() {
        let mut d = Decomposition::zeros(2, 2);
        d.credit(1, 0, 2.5);
        d.credit(1, 0, 2.5);
        d.set(0, 1, 7.0);
        assert_eq!(d.get(1, 0), 5.0);
        assert_eq!(d.row(0), &[0.0, 7.0]);
        assert_eq!(d.row_sum(1), 5.0);
        assert_eq!(d.column_sum(0), 5.0);
        assert_eq!(d.to_rows(), vec![vec![0.0, 7.0], vec![5.0, 0.0]]);
    }

    #[test]
    fn rows_iterates_every_citizen() {
        let mut d = Decomposition::zeros(3, 2);
        d.set(2, 1, 1.0);
        let rows: Vec<&[f64]> = d.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], &[0.0, 1.0]);
    }

    #[test]
    fn zero_subject_rows_are_empty() {
        let d = Decomposition::zeros(2, 0);
        assert_eq!(d.rows().count(), 2);
        assert!(d.rows().all(<[f64]>::is_empty));
        assert_eq!(d.row_sum(1), 0.0);
        assert!(Decomposition::zeros(0, 3).to_rows().is_empty());
    }

    #[test]
    #[should_panic(expected = "outside 2x2 decomposition")]
    fn out_of_range_cell_panics() {
        Decomposition::zeros(2, 2).get(2, 0);
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let err = Decomposition::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(err, InputError::RaggedRow { citizen: 1, len: 1, subjects: 2 });
    }

    #[test]
    fn decomposition_serializes_as_nested_rows() {
        let mut d = Decomposition::zeros(2, 1);
        d.set(0, 0, 2.5);
        d.set(1, 0, 2.5);
        assert_eq!(serde_json::to_string(&d).unwrap(), "[[2.5],[2.5]]");

        let back: Decomposition = serde_json::from_str("[[2.5],[2.5]]").unwrap();
        assert_eq!(back, d);
        assert_eq!(back.row_sum(1), 2.5);
    }

    #[test]
    fn deserialize_rejects_ragged_matrix() {
        let err = serde_json::from_str::<Decomposition>("[[1.0,0.0],[]]").unwrap_err();
        assert!(err.to_string().contains("row 1 has 0 cells, expected 2"));
    }

    #[test]
    fn deserialize_rejects_old_struct_shape() {
        let json = r#"{"citizens":2,"subjects":2,"cells":[]}"#;
        assert!(serde_json::from_str::<Decomposition>(json).is_err());
    }

    // --- Outcome ---

    #[test]
    fn infeasible_outcome_has_no_decomposition() {
        let outcome = Outcome::from(Infeasibility::EmptyPreference { citizen: 0 });
        assert!(!outcome.is_feasible());
        assert_eq!(outcome.into_decomposition(), None);
    }

    #[test]
    fn decomposed_outcome_into_result() {
        let outcome = Outcome::Decomposed {
            decomposition: Decomposition::zeros(1, 1),
            path: SolvePath::General,
        };
        let (d, path) = outcome.into_result().unwrap();
        assert_eq!(path, SolvePath::General);
        assert_eq!(d.citizens(), 1);
    }

    #[test]
    fn preferences_deserialize_from_nested_arrays() {
        let p: Preferences = serde_json::from_str("[[0,1],[2],[]]").unwrap();
        assert_eq!(p.citizens(), 3);
        assert!(p.of(0).contains(&1));
        assert_eq!(p.first_empty(), Some(2));
    }

    #[test]
    fn outcome_json_embeds_matrix_rows() {
        let outcome = Outcome::Decomposed {
            decomposition: Decomposition::from_rows(vec![vec![1.0, 0.0]]).unwrap(),
            path: SolvePath::Basic,
        };
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["decomposition"], serde_json::json!([[1.0, 0.0]]));
        let back: Outcome = serde_json::from_value(value).unwrap();
        assert_eq!(back, outcome);
    }

    // --- proptest ---

    proptest! {
        #[test]
        fn row_sums_add_up_to_column_sums(
            cells in proptest::collection::vec(0.0f64..100.0, 12),
        ) {
            let mut d = Decomposition::zeros(3, 4);
            for (k, v) in cells.iter().enumerate() {
                d.set(k / 4, k % 4, *v);
            }
            let by_rows: f64 = (0..3).map(|c| d.row_sum(c)).sum();
            let by_cols: f64 = (0..4).map(|s| d.column_sum(s)).sum();
            prop_assert!((by_rows - by_cols).abs() < 1e-9);
        }

        #[test]
        fn validate_accepts_indices_below_bound(
            sets in proptest::collection::vec(
                proptest::collection::btree_set(0usize..6, 0..4), 0..8),
        ) {
            prop_assert!(Preferences::new(sets).validate(6).is_ok());
        }
    }
}
