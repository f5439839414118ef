//! The 25-column feature record consumed by the classifier.

use ndarray::Array2;
use thiserror::Error;

/// Number of columns in a feature record.
pub const FEATURE_COUNT: usize = 25;

/// Column names in the order the classifier was trained on.
pub const FEATURE_COLUMNS: [&str; FEATURE_COUNT] = [
    "Application_mode",
    "Course",
    "Previous_qualification_grade",
    "Mothers_qualification",
    "Fathers_qualification",
    "Mothers_occupation",
    "Fathers_occupation",
    "Admission_grade",
    "Displaced",
    "Gender",
    "Scholarship_holder",
    "Age_at_enrollment",
    "Curricular_units_1st_sem_enrolled",
    "Curricular_units_1st_sem_evaluations",
    "Curricular_units_1st_sem_approved",
    "Curricular_units_1st_sem_grade",
    "Curricular_units_2nd_sem_enrolled",
    "Curricular_units_2nd_sem_evaluations",
    "Curricular_units_2nd_sem_approved",
    "Curricular_units_2nd_sem_grade",
    "Unemployment_rate",
    "Inflation_rate",
    "GDP",
    "Ratio_approved_1st_sem",
    "Ratio_approved_2nd_sem",
];

/// Encoded feature values for one student.
///
/// Field order mirrors [`FEATURE_COLUMNS`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureRecord {
    pub application_mode: u32,
    pub course: u32,
    pub previous_qualification_grade: f64,
    pub mothers_qualification: u8,
    pub fathers_qualification: u8,
    pub mothers_occupation: u8,
    pub fathers_occupation: u8,
    pub admission_grade: f64,
    pub displaced: u8,
    pub gender: u8,
    pub scholarship_holder: u8,
    pub age_at_enrollment: u32,
    pub units_1st_sem_enrolled: u32,
    pub units_1st_sem_evaluations: u32,
    pub units_1st_sem_approved: u32,
    pub units_1st_sem_grade: f64,
    pub units_2nd_sem_enrolled: u32,
    pub units_2nd_sem_evaluations: u32,
    pub units_2nd_sem_approved: u32,
    pub units_2nd_sem_grade: f64,
    pub unemployment_rate: f64,
    pub inflation_rate: f64,
    pub gdp: f64,
    pub ratio_approved_1st_sem: f64,
    pub ratio_approved_2nd_sem: f64,
}

impl FeatureRecord {
    /// Values as `f64`, in column order.
    pub fn values(&self) -> [f64; FEATURE_COUNT] {
        [
            f64::from(self.application_mode),
            f64::from(self.course),
            self.previous_qualification_grade,
            f64::from(self.mothers_qualification),
            f64::from(self.fathers_qualification),
            f64::from(self.mothers_occupation),
            f64::from(self.fathers_occupation),
            self.admission_grade,
            f64::from(self.displaced),
            f64::from(self.gender),
            f64::from(self.scholarship_holder),
            f64::from(self.age_at_enrollment),
            f64::from(self.units_1st_sem_enrolled),
            f64::from(self.units_1st_sem_evaluations),
            f64::from(self.units_1st_sem_approved),
            self.units_1st_sem_grade,
            f64::from(self.units_2nd_sem_enrolled),
            f64::from(self.units_2nd_sem_evaluations),
            f64::from(self.units_2nd_sem_approved),
            self.units_2nd_sem_grade,
            self.unemployment_rate,
            self.inflation_rate,
            self.gdp,
            self.ratio_approved_1st_sem,
            self.ratio_approved_2nd_sem,
        ]
    }

    /// `(column, value)` pairs in column order.
    pub fn named_values(&self) -> impl Iterator<Item = (&'static str, f64)> {
        FEATURE_COLUMNS.into_iter().zip(self.values())
    }

    /// Wrap the record into a one-row table.
    pub fn to_frame(&self) -> FeatureFrame {
        let values = self.values();
        let row = Array2::from_shape_fn((1, FEATURE_COUNT), |(_, col)| values[col]);
        FeatureFrame {
            columns: FEATURE_COLUMNS.iter().map(|name| (*name).to_string()).collect(),
            rows: row,
        }
    }
}

/// Column-named tabular input handed to a classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureFrame {
    pub columns: Vec<String>,
    /// Shape `[n_rows, columns.len()]`.
    pub rows: Array2<f64>,
}

/// Column layout of a frame disagrees with what the classifier expects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaMismatch {
    #[error("expected {expected} feature columns, found {found}")]
    ColumnCount { expected: usize, found: usize },
    #[error("feature column {index} is '{found}', expected '{expected}'")]
    ColumnName {
        index: usize,
        expected: String,
        found: String,
    },
    #[error("feature table has {found} values per row for {columns} columns")]
    RowWidth { columns: usize, found: usize },
}

impl FeatureFrame {
    /// Check that column count and names match `expected` exactly, in order.
    pub fn check_schema(&self, expected: &[String]) -> Result<(), SchemaMismatch> {
        if self.rows.ncols() != self.columns.len() {
            return Err(SchemaMismatch::RowWidth {
                columns: self.columns.len(),
                found: self.rows.ncols(),
            });
        }
        if self.columns.len() != expected.len() {
            return Err(SchemaMismatch::ColumnCount {
                expected: expected.len(),
                found: self.columns.len(),
            });
        }
        for (index, (want, have)) in expected.iter().zip(&self.columns).enumerate() {
            if want != have {
                return Err(SchemaMismatch::ColumnName {
                    index,
                    expected: want.clone(),
                    found: have.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::{
        ApplicationMode, Course, FormInput, Gender, SemesterUnits, YesNo, encode,
    };

    fn trained_columns() -> Vec<String> {
        FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn frame_is_one_row_of_twenty_five() {
        let frame = encode(&FormInput::default()).to_frame();
        assert_eq!(frame.rows.dim(), (1, FEATURE_COUNT));
        assert_eq!(frame.columns.len(), FEATURE_COUNT);
        assert_eq!(frame.columns[0], "Application_mode");
        assert_eq!(frame.columns[24], "Ratio_approved_2nd_sem");
    }

    #[test]
    fn values_follow_column_order() {
        let record = encode(&FormInput::default());
        let named: Vec<_> = record.named_values().collect();
        assert_eq!(named[1], ("Course", 33.0));
        assert_eq!(named[11], ("Age_at_enrollment", 19.0));
        assert_eq!(named[22], ("GDP", 0.79));
    }

    fn distinct_form() -> FormInput {
        FormInput {
            application_mode: ApplicationMode::Over23,
            course: Course::Nursing,
            previous_qualification_grade: 133.1,
            mothers_qualification: 2,
            fathers_qualification: 4,
            mothers_occupation: 3,
            fathers_occupation: 1,
            admission_grade: 150.2,
            displaced: YesNo::Yes,
            gender: Gender::Female,
            scholarship_holder: YesNo::No,
            age_at_enrollment: 27,
            first_semester: SemesterUnits {
                enrolled: 7,
                evaluations: 8,
                approved: 5,
                grade: 13.4,
            },
            second_semester: SemesterUnits {
                enrolled: 10,
                evaluations: 12,
                approved: 11,
                grade: 11.8,
            },
            unemployment_rate: 10.8,
            inflation_rate: 1.4,
            gdp: -1.7,
            ratio_approved_first: 0.71,
            ratio_approved_second: 0.44,
        }
    }

    #[test]
    fn every_field_lands_in_its_own_column() {
        let named: Vec<_> = encode(&distinct_form()).named_values().collect();
        assert_eq!(
            named,
            vec![
                ("Application_mode", 39.0),
                ("Course", 9500.0),
                ("Previous_qualification_grade", 133.1),
                ("Mothers_qualification", 2.0),
                ("Fathers_qualification", 4.0),
                ("Mothers_occupation", 3.0),
                ("Fathers_occupation", 1.0),
                ("Admission_grade", 150.2),
                ("Displaced", 1.0),
                ("Gender", 0.0),
                ("Scholarship_holder", 0.0),
                ("Age_at_enrollment", 27.0),
                ("Curricular_units_1st_sem_enrolled", 7.0),
                ("Curricular_units_1st_sem_evaluations", 8.0),
                ("Curricular_units_1st_sem_approved", 5.0),
                ("Curricular_units_1st_sem_grade", 13.4),
                ("Curricular_units_2nd_sem_enrolled", 10.0),
                ("Curricular_units_2nd_sem_evaluations", 12.0),
                ("Curricular_units_2nd_sem_approved", 11.0),
                ("Curricular_units_2nd_sem_grade", 11.8),
                ("Unemployment_rate", 10.8),
                ("Inflation_rate", 1.4),
                ("GDP", -1.7),
                ("Ratio_approved_1st_sem", 0.71),
                ("Ratio_approved_2nd_sem", 0.44),
            ]
        );
    }

    #[test]
    fn binary_columns_do_not_swap() {
        let form = FormInput {
            displaced: YesNo::No,
            gender: Gender::Male,
            scholarship_holder: YesNo::No,
            ..distinct_form()
        };
        let values = encode(&form).values();
        assert_eq!(&values[8..11], &[0.0, 1.0, 0.0]);
    }

    #[test]
    fn frame_row_matches_named_values() {
        let record = encode(&distinct_form());
        let frame = record.to_frame();
        for (col, (name, value)) in record.named_values().enumerate() {
            assert_eq!(frame.columns[col], name);
            assert_eq!(frame.rows[[0, col]], value);
        }
    }

    #[test]
    fn schema_check_accepts_trained_layout() {
        let frame = encode(&FormInput::default()).to_frame();
        frame.check_schema(&trained_columns()).unwrap();
    }

    #[test]
    fn schema_check_rejects_reordered_columns() {
        let frame = encode(&FormInput::default()).to_frame();
        let mut expected = trained_columns();
        expected.swap(0, 1);
        assert_eq!(
            frame.check_schema(&expected),
            Err(SchemaMismatch::ColumnName {
                index: 0,
                expected: "Course".into(),
                found: "Application_mode".into(),
            })
        );
    }

    #[test]
    fn schema_check_rejects_missing_columns() {
        let frame = encode(&FormInput::default()).to_frame();
        let mut expected = trained_columns();
        expected.pop();
        assert_eq!(
            frame.check_schema(&expected),
            Err(SchemaMismatch::ColumnCount {
                expected: 24,
                found: 25
            })
        );
    }
}
