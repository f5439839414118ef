//! Closed label/code tables for the categorical form fields.
//!
//! Every selectable label is an enum variant, so an unmapped label cannot be
//! constructed. Codes follow the institutional coding scheme the classifier was
//! trained on and are intentionally non-contiguous.

use serde::{Deserialize, Serialize};

/// Admission route the student enrolled through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ApplicationMode {
    #[default]
    FirstPhaseGeneral,
    Ordinance612,
    FirstPhaseAzores,
    OtherHigherCourses,
    Ordinance854B,
    InternationalBachelor,
    FirstPhaseMadeira,
    SecondPhaseGeneral,
    ThirdPhaseGeneral,
    Ordinance533ADifferentPlan,
    Ordinance533AOtherInstitution,
    Over23,
    Transfer,
    ChangeOfCourse,
    TechnologicalSpecialization,
    ChangeOfInstitution,
    ShortCycleDiploma,
    ChangeOfInstitutionInternational,
}

impl ApplicationMode {
    /// All modes in display order.
    pub const ALL: [ApplicationMode; 18] = [
        ApplicationMode::FirstPhaseGeneral,
        ApplicationMode::Ordinance612,
        ApplicationMode::FirstPhaseAzores,
        ApplicationMode::OtherHigherCourses,
        ApplicationMode::Ordinance854B,
        ApplicationMode::InternationalBachelor,
        ApplicationMode::FirstPhaseMadeira,
        ApplicationMode::SecondPhaseGeneral,
        ApplicationMode::ThirdPhaseGeneral,
        ApplicationMode::Ordinance533ADifferentPlan,
        ApplicationMode::Ordinance533AOtherInstitution,
        ApplicationMode::Over23,
        ApplicationMode::Transfer,
        ApplicationMode::ChangeOfCourse,
        ApplicationMode::TechnologicalSpecialization,
        ApplicationMode::ChangeOfInstitution,
        ApplicationMode::ShortCycleDiploma,
        ApplicationMode::ChangeOfInstitutionInternational,
    ];

    /// Label shown in the selection widget.
    pub fn label(self) -> &'static str {
        match self {
            ApplicationMode::FirstPhaseGeneral => "1st phase - general contingent",
            ApplicationMode::Ordinance612 => "Ordinance No. 612/93",
            ApplicationMode::FirstPhaseAzores => "1st phase - special contingent (Azores Island)",
            ApplicationMode::OtherHigherCourses => "Holders of other higher courses",
            ApplicationMode::Ordinance854B => "Ordinance No. 854-B/99",
            ApplicationMode::InternationalBachelor => "International student (bachelor)",
            ApplicationMode::FirstPhaseMadeira => {
                "1st phase - special contingent (Madeira Island)"
            }
            ApplicationMode::SecondPhaseGeneral => "2nd phase - general contingent",
            ApplicationMode::ThirdPhaseGeneral => "3rd phase - general contingent",
            ApplicationMode::Ordinance533ADifferentPlan => {
                "Ordinance No. 533-A/99 (Different Plan)"
            }
            ApplicationMode::Ordinance533AOtherInstitution => {
                "Ordinance No. 533-A/99 (Other Institution)"
            }
            ApplicationMode::Over23 => "Over 23 years old",
            ApplicationMode::Transfer => "Transfer",
            ApplicationMode::ChangeOfCourse => "Change of course",
            ApplicationMode::TechnologicalSpecialization => {
                "Technological specialization diploma holders"
            }
            ApplicationMode::ChangeOfInstitution => "Change of institution/course",
            ApplicationMode::ShortCycleDiploma => "Short cycle diploma holders",
            ApplicationMode::ChangeOfInstitutionInternational => {
                "Change of institution/course (International)"
            }
        }
    }

    /// Numeric code fed to the classifier.
    pub fn code(self) -> u32 {
        match self {
            ApplicationMode::FirstPhaseGeneral => 1,
            ApplicationMode::Ordinance612 => 2,
            ApplicationMode::FirstPhaseAzores => 5,
            ApplicationMode::OtherHigherCourses => 7,
            ApplicationMode::Ordinance854B => 10,
            ApplicationMode::InternationalBachelor => 15,
            ApplicationMode::FirstPhaseMadeira => 16,
            ApplicationMode::SecondPhaseGeneral => 17,
            ApplicationMode::ThirdPhaseGeneral => 18,
            ApplicationMode::Ordinance533ADifferentPlan => 26,
            ApplicationMode::Ordinance533AOtherInstitution => 27,
            ApplicationMode::Over23 => 39,
            ApplicationMode::Transfer => 42,
            ApplicationMode::ChangeOfCourse => 43,
            ApplicationMode::TechnologicalSpecialization => 44,
            ApplicationMode::ChangeOfInstitution => 51,
            ApplicationMode::ShortCycleDiploma => 53,
            ApplicationMode::ChangeOfInstitutionInternational => 57,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.label() == label)
    }
}

/// Degree programme the student enrolled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Course {
    #[default]
    BiofuelProduction,
    AnimationMultimedia,
    SocialServiceEvening,
    Agronomy,
    CommunicationDesign,
    VeterinaryNursing,
    InformaticsEngineering,
    Equinculture,
    Management,
    SocialService,
    Tourism,
    Nursing,
    OralHygiene,
    AdvertisingMarketing,
    JournalismCommunication,
    BasicEducation,
    ManagementEvening,
}

impl Course {
    /// All courses in display order.
    pub const ALL: [Course; 17] = [
        Course::BiofuelProduction,
        Course::AnimationMultimedia,
        Course::SocialServiceEvening,
        Course::Agronomy,
        Course::CommunicationDesign,
        Course::VeterinaryNursing,
        Course::InformaticsEngineering,
        Course::Equinculture,
        Course::Management,
        Course::SocialService,
        Course::Tourism,
        Course::Nursing,
        Course::OralHygiene,
        Course::AdvertisingMarketing,
        Course::JournalismCommunication,
        Course::BasicEducation,
        Course::ManagementEvening,
    ];

    /// Label shown in the selection widget.
    pub fn label(self) -> &'static str {
        match self {
            Course::BiofuelProduction => "Biofuel Production Technologies",
            Course::AnimationMultimedia => "Animation and Multimedia Design",
            Course::SocialServiceEvening => "Social Service (Evening)",
            Course::Agronomy => "Agronomy",
            Course::CommunicationDesign => "Communication Design",
            Course::VeterinaryNursing => "Veterinary Nursing",
            Course::InformaticsEngineering => "Informatics Engineering",
            Course::Equinculture => "Equinculture",
            Course::Management => "Management",
            Course::SocialService => "Social Service",
            Course::Tourism => "Tourism",
            Course::Nursing => "Nursing",
            Course::OralHygiene => "Oral Hygiene",
            Course::AdvertisingMarketing => "Advertising & Marketing Management",
            Course::JournalismCommunication => "Journalism and Communication",
            Course::BasicEducation => "Basic Education",
            Course::ManagementEvening => "Management (Evening)",
        }
    }

    /// Numeric code fed to the classifier.
    pub fn code(self) -> u32 {
        match self {
            Course::BiofuelProduction => 33,
            Course::AnimationMultimedia => 171,
            Course::SocialServiceEvening => 8014,
            Course::Agronomy => 9003,
            Course::CommunicationDesign => 9070,
            Course::VeterinaryNursing => 9085,
            Course::InformaticsEngineering => 9119,
            Course::Equinculture => 9130,
            Course::Management => 9147,
            Course::SocialService => 9238,
            Course::Tourism => 9254,
            Course::Nursing => 9500,
            Course::OralHygiene => 9556,
            Course::AdvertisingMarketing => 9670,
            Course::JournalismCommunication => 9773,
            Course::BasicEducation => 9853,
            Course::ManagementEvening => 9991,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|course| course.label() == label)
    }
}

/// Binary yes/no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum YesNo {
    #[default]
    No,
    Yes,
}

impl YesNo {
    pub const ALL: [YesNo; 2] = [YesNo::No, YesNo::Yes];

    pub fn label(self) -> &'static str {
        match self {
            YesNo::No => "No",
            YesNo::Yes => "Yes",
        }
    }

    /// `No` maps to 0, `Yes` to 1.
    pub fn code(self) -> u8 {
        match self {
            YesNo::No => 0,
            YesNo::Yes => 1,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|value| value.label() == label)
    }
}

/// Gender as recorded at enrollment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Gender {
    #[default]
    Female,
    Male,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Female, Gender::Male];

    pub fn label(self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
        }
    }

    /// `Female` maps to 0, `Male` to 1.
    pub fn code(self) -> u8 {
        match self {
            Gender::Female => 0,
            Gender::Male => 1,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|value| value.label() == label)
    }
}

impl TryFrom<String> for ApplicationMode {
    type Error = String;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        Self::from_label(&label).ok_or_else(|| format!("Unknown application mode '{label}'"))
    }
}

impl From<ApplicationMode> for String {
    fn from(value: ApplicationMode) -> Self {
        value.label().to_string()
    }
}

impl TryFrom<String> for Course {
    type Error = String;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        Self::from_label(&label).ok_or_else(|| format!("Unknown course '{label}'"))
    }
}

impl From<Course> for String {
    fn from(value: Course) -> Self {
        value.label().to_string()
    }
}

impl TryFrom<String> for YesNo {
    type Error = String;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        Self::from_label(&label).ok_or_else(|| format!("Unknown yes/no answer '{label}'"))
    }
}

impl From<YesNo> for String {
    fn from(value: YesNo) -> Self {
        value.label().to_string()
    }
}

impl TryFrom<String> for Gender {
    type Error = String;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        Self::from_label(&label).ok_or_else(|| format!("Unknown gender '{label}'"))
    }
}

impl From<Gender> for String {
    fn from(value: Gender) -> Self {
        value.label().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn application_mode_table_matches_coding_scheme() {
        let codes: Vec<u32> = ApplicationMode::ALL.iter().map(|m| m.code()).collect();
        assert_eq!(
            codes,
            vec![1, 2, 5, 7, 10, 15, 16, 17, 18, 26, 27, 39, 42, 43, 44, 51, 53, 57]
        );
    }

    #[test]
    fn course_table_matches_coding_scheme() {
        let codes: Vec<u32> = Course::ALL.iter().map(|c| c.code()).collect();
        assert_eq!(
            codes,
            vec![
                33, 171, 8014, 9003, 9070, 9085, 9119, 9130, 9147, 9238, 9254, 9500, 9556, 9670,
                9773, 9853, 9991
            ]
        );
    }

    #[test]
    fn labels_and_codes_are_unique() {
        let labels: HashSet<_> = ApplicationMode::ALL.iter().map(|m| m.label()).collect();
        let codes: HashSet<_> = ApplicationMode::ALL.iter().map(|m| m.code()).collect();
        assert_eq!(labels.len(), ApplicationMode::ALL.len());
        assert_eq!(codes.len(), ApplicationMode::ALL.len());

        let labels: HashSet<_> = Course::ALL.iter().map(|c| c.label()).collect();
        let codes: HashSet<_> = Course::ALL.iter().map(|c| c.code()).collect();
        assert_eq!(labels.len(), Course::ALL.len());
        assert_eq!(codes.len(), Course::ALL.len());
    }

    #[test]
    fn label_lookups_invert_label() {
        for mode in ApplicationMode::ALL {
            assert_eq!(ApplicationMode::from_label(mode.label()), Some(mode));
        }
        for course in Course::ALL {
            assert_eq!(Course::from_label(course.label()), Some(course));
        }
        assert_eq!(Course::from_label("Astrology"), None);
        assert_eq!(ApplicationMode::from_label("First phase"), None);
    }

    #[test]
    fn binary_maps_are_two_valued_bijections() {
        assert_eq!(YesNo::from_label("No").map(YesNo::code), Some(0));
        assert_eq!(YesNo::from_label("Yes").map(YesNo::code), Some(1));
        assert_eq!(Gender::from_label("Female").map(Gender::code), Some(0));
        assert_eq!(Gender::from_label("Male").map(Gender::code), Some(1));
        assert_ne!(YesNo::No.code(), YesNo::Yes.code());
        assert_ne!(Gender::Female.code(), Gender::Male.code());
        assert_eq!(YesNo::from_label("maybe"), None);
    }

    #[test]
    fn serializes_as_display_label() {
        let json = serde_json::to_string(&Course::InformaticsEngineering).unwrap();
        assert_eq!(json, "\"Informatics Engineering\"");
        let mode: ApplicationMode = serde_json::from_str("\"Over 23 years old\"").unwrap();
        assert_eq!(mode, ApplicationMode::Over23);
        assert!(serde_json::from_str::<Gender>("\"Other\"").is_err());
    }
}
