//! Raw form values as collected by the input widgets.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::lookup::{ApplicationMode, Course, Gender, YesNo};

/// Range shared by previous-qualification and admission grades.
pub const ENTRY_GRADE_RANGE: RangeInclusive<f64> = 0.0..=200.0;
/// Accepted ages at enrollment.
pub const AGE_RANGE: RangeInclusive<u32> = 10..=100;
/// Curricular unit counts per semester.
pub const UNIT_COUNT_RANGE: RangeInclusive<u32> = 0..=50;
/// Semester grade average.
pub const SEMESTER_GRADE_RANGE: RangeInclusive<f64> = 0.0..=20.0;
pub const UNEMPLOYMENT_RANGE: RangeInclusive<f64> = 0.0..=100.0;
pub const INFLATION_RANGE: RangeInclusive<f64> = -50.0..=50.0;
pub const GDP_RANGE: RangeInclusive<f64> = -50.0..=50.0;
/// Approved/enrolled ratio per semester.
pub const RATIO_RANGE: RangeInclusive<f64> = 0.0..=1.0;

/// Selectable mother's qualification codes.
pub const MOTHERS_QUALIFICATION_OPTIONS: [u8; 3] = [1, 2, 3];
/// Selectable father's qualification codes.
pub const FATHERS_QUALIFICATION_OPTIONS: [u8; 3] = [3, 4, 5];
/// Selectable occupation codes for either parent.
pub const OCCUPATION_OPTIONS: [u8; 3] = [1, 2, 3];

/// Curricular unit counts and grade for one semester.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SemesterUnits {
    pub enrolled: u32,
    pub evaluations: u32,
    pub approved: u32,
    pub grade: f64,
}

impl Default for SemesterUnits {
    fn default() -> Self {
        Self {
            enrolled: 6,
            evaluations: 6,
            approved: 6,
            grade: 12.0,
        }
    }
}

impl SemesterUnits {
    fn clamped(self) -> Self {
        Self {
            enrolled: clamp_u32(self.enrolled, &UNIT_COUNT_RANGE),
            evaluations: clamp_u32(self.evaluations, &UNIT_COUNT_RANGE),
            approved: clamp_u32(self.approved, &UNIT_COUNT_RANGE),
            grade: clamp_f64(self.grade, &SEMESTER_GRADE_RANGE),
        }
    }
}

/// Every value the enrollment form collects, before encoding.
///
/// Approval ratios are independent inputs; they are not derived from or
/// checked against the unit counts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormInput {
    pub application_mode: ApplicationMode,
    pub course: Course,
    pub previous_qualification_grade: f64,
    pub mothers_qualification: u8,
    pub fathers_qualification: u8,
    pub mothers_occupation: u8,
    pub fathers_occupation: u8,
    pub admission_grade: f64,
    pub displaced: YesNo,
    pub gender: Gender,
    pub scholarship_holder: YesNo,
    pub age_at_enrollment: u32,
    pub first_semester: SemesterUnits,
    pub second_semester: SemesterUnits,
    pub unemployment_rate: f64,
    pub inflation_rate: f64,
    pub gdp: f64,
    pub ratio_approved_first: f64,
    pub ratio_approved_second: f64,
}

impl Default for FormInput {
    fn default() -> Self {
        Self {
            application_mode: ApplicationMode::default(),
            course: Course::default(),
            previous_qualification_grade: 142.0,
            mothers_qualification: MOTHERS_QUALIFICATION_OPTIONS[0],
            fathers_qualification: FATHERS_QUALIFICATION_OPTIONS[0],
            mothers_occupation: OCCUPATION_OPTIONS[0],
            fathers_occupation: OCCUPATION_OPTIONS[0],
            admission_grade: 142.5,
            displaced: YesNo::No,
            gender: Gender::Female,
            scholarship_holder: YesNo::No,
            age_at_enrollment: 19,
            first_semester: SemesterUnits::default(),
            second_semester: SemesterUnits::default(),
            unemployment_rate: 13.9,
            inflation_rate: -0.3,
            gdp: 0.79,
            ratio_approved_first: 1.0,
            ratio_approved_second: 1.0,
        }
    }
}

impl FormInput {
    /// Apply the same clamps the input widgets enforce.
    ///
    /// Used where values arrive without a widget layer (form files). Option
    /// fields outside their choice list fall back to the first choice.
    pub fn clamped(self) -> Self {
        Self {
            previous_qualification_grade: clamp_f64(
                self.previous_qualification_grade,
                &ENTRY_GRADE_RANGE,
            ),
            mothers_qualification: pick_option(
                self.mothers_qualification,
                &MOTHERS_QUALIFICATION_OPTIONS,
            ),
            fathers_qualification: pick_option(
                self.fathers_qualification,
                &FATHERS_QUALIFICATION_OPTIONS,
            ),
            mothers_occupation: pick_option(self.mothers_occupation, &OCCUPATION_OPTIONS),
            fathers_occupation: pick_option(self.fathers_occupation, &OCCUPATION_OPTIONS),
            admission_grade: clamp_f64(self.admission_grade, &ENTRY_GRADE_RANGE),
            age_at_enrollment: clamp_u32(self.age_at_enrollment, &AGE_RANGE),
            first_semester: self.first_semester.clamped(),
            second_semester: self.second_semester.clamped(),
            unemployment_rate: clamp_f64(self.unemployment_rate, &UNEMPLOYMENT_RANGE),
            inflation_rate: clamp_f64(self.inflation_rate, &INFLATION_RANGE),
            gdp: clamp_f64(self.gdp, &GDP_RANGE),
            ratio_approved_first: clamp_f64(self.ratio_approved_first, &RATIO_RANGE),
            ratio_approved_second: clamp_f64(self.ratio_approved_second, &RATIO_RANGE),
            ..self
        }
    }
}

fn clamp_f64(value: f64, range: &RangeInclusive<f64>) -> f64 {
    if value.is_nan() {
        return *range.start();
    }
    value.clamp(*range.start(), *range.end())
}

fn clamp_u32(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}

fn pick_option(value: u8, options: &[u8]) -> u8 {
    if options.contains(&value) {
        value
    } else {
        options[0]
    }
}
