//! Feature encoding for the enrollment form.
//!
//! Maps raw form values into the fixed 25-column [`FeatureRecord`] the
//! classifier was trained on. Encoding is pure: categorical choices go through
//! their closed code tables and numeric values pass through unchanged, relying
//! on the input widgets for range clamps.

mod form;
mod lookup;
mod record;

pub use form::{
    AGE_RANGE, ENTRY_GRADE_RANGE, FATHERS_QUALIFICATION_OPTIONS, FormInput, GDP_RANGE,
    INFLATION_RANGE, MOTHERS_QUALIFICATION_OPTIONS, OCCUPATION_OPTIONS, RATIO_RANGE,
    SEMESTER_GRADE_RANGE, SemesterUnits, UNEMPLOYMENT_RANGE, UNIT_COUNT_RANGE,
};
pub use lookup::{ApplicationMode, Course, Gender, YesNo};
pub use record::{FEATURE_COLUMNS, FEATURE_COUNT, FeatureFrame, FeatureRecord, SchemaMismatch};

/// Encode raw form values into a feature record.
pub fn encode(input: &FormInput) -> FeatureRecord {
    let first = &input.first_semester;
    let second = &input.second_semester;
    FeatureRecord {
        application_mode: input.application_mode.code(),
        course: input.course.code(),
        previous_qualification_grade: input.previous_qualification_grade,
        mothers_qualification: input.mothers_qualification,
        fathers_qualification: input.fathers_qualification,
        mothers_occupation: input.mothers_occupation,
        fathers_occupation: input.fathers_occupation,
        admission_grade: input.admission_grade,
        displaced: input.displaced.code(),
        gender: input.gender.code(),
        scholarship_holder: input.scholarship_holder.code(),
        age_at_enrollment: input.age_at_enrollment,
        units_1st_sem_enrolled: first.enrolled,
        units_1st_sem_evaluations: first.evaluations,
        units_1st_sem_approved: first.approved,
        units_1st_sem_grade: first.grade,
        units_2nd_sem_enrolled: second.enrolled,
        units_2nd_sem_evaluations: second.evaluations,
        units_2nd_sem_approved: second.approved,
        units_2nd_sem_grade: second.grade,
        unemployment_rate: input.unemployment_rate,
        inflation_rate: input.inflation_rate,
        gdp: input.gdp,
        ratio_approved_1st_sem: input.ratio_approved_first,
        ratio_approved_2nd_sem: input.ratio_approved_second,
    }
}
