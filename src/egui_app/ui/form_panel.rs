//! Input widgets for the enrollment form.

use std::ops::RangeInclusive;

use eframe::egui::{self, ComboBox, DragValue, Grid, RichText, Ui};

use super::style;
use crate::encoding::{
    AGE_RANGE, ApplicationMode, Course, ENTRY_GRADE_RANGE, FATHERS_QUALIFICATION_OPTIONS,
    FormInput, GDP_RANGE, Gender, INFLATION_RANGE, MOTHERS_QUALIFICATION_OPTIONS,
    OCCUPATION_OPTIONS, RATIO_RANGE, SEMESTER_GRADE_RANGE, SemesterUnits, UNEMPLOYMENT_RANGE,
    UNIT_COUNT_RANGE, YesNo,
};

const COMBO_WIDTH: f32 = 320.0;

/// Render every form input, in the order the form has always presented them.
pub(super) fn render_form(ui: &mut Ui, form: &mut FormInput) {
    Grid::new("enrollment_form")
        .num_columns(2)
        .spacing([16.0, 8.0])
        .striped(true)
        .show(ui, |ui| {
            row(ui, "Jalur Masuk", |ui| {
                choice_combo(
                    ui,
                    "application_mode",
                    &mut form.application_mode,
                    &ApplicationMode::ALL,
                    ApplicationMode::label,
                )
            });
            row(ui, "Program Studi", |ui| {
                choice_combo(ui, "course", &mut form.course, &Course::ALL, Course::label)
            });
            row(ui, "Nilai Pendidikan Sebelumnya (0-200)", |ui| {
                decimal(ui, &mut form.previous_qualification_grade, ENTRY_GRADE_RANGE)
            });
            row(ui, "Pendidikan Ibu", |ui| {
                code_combo(
                    ui,
                    "mothers_qualification",
                    &mut form.mothers_qualification,
                    &MOTHERS_QUALIFICATION_OPTIONS,
                )
            });
            row(ui, "Pendidikan Ayah", |ui| {
                code_combo(
                    ui,
                    "fathers_qualification",
                    &mut form.fathers_qualification,
                    &FATHERS_QUALIFICATION_OPTIONS,
                )
            });
            row(ui, "Pekerjaan Ibu", |ui| {
                code_combo(
                    ui,
                    "mothers_occupation",
                    &mut form.mothers_occupation,
                    &OCCUPATION_OPTIONS,
                )
            });
            row(ui, "Pekerjaan Ayah", |ui| {
                code_combo(
                    ui,
                    "fathers_occupation",
                    &mut form.fathers_occupation,
                    &OCCUPATION_OPTIONS,
                )
            });
            row(ui, "Nilai Masuk (0-200)", |ui| {
                decimal(ui, &mut form.admission_grade, ENTRY_GRADE_RANGE)
            });
            row(ui, "Pengungsi / Pindahan?", |ui| {
                choice_combo(ui, "displaced", &mut form.displaced, &YesNo::ALL, YesNo::label)
            });
            row(ui, "Jenis Kelamin", |ui| {
                choice_combo(ui, "gender", &mut form.gender, &Gender::ALL, Gender::label)
            });
            row(ui, "Penerima Beasiswa?", |ui| {
                choice_combo(
                    ui,
                    "scholarship_holder",
                    &mut form.scholarship_holder,
                    &YesNo::ALL,
                    YesNo::label,
                )
            });
            row(ui, "Usia Saat Masuk Kuliah (min 10)", |ui| {
                integer(ui, &mut form.age_at_enrollment, AGE_RANGE)
            });
            semester_rows(ui, "1st", &mut form.first_semester);
            semester_rows(ui, "2nd", &mut form.second_semester);
            row(ui, "Tingkat Pengangguran (%)", |ui| {
                decimal(ui, &mut form.unemployment_rate, UNEMPLOYMENT_RANGE)
            });
            row(ui, "Tingkat Inflasi (%)", |ui| {
                decimal(ui, &mut form.inflation_rate, INFLATION_RANGE)
            });
            row(ui, "Pertumbuhan GDP (%)", |ui| {
                decimal(ui, &mut form.gdp, GDP_RANGE)
            });
            row(ui, "Rasio Kelulusan 1st Sem (0-1)", |ui| {
                ratio(ui, &mut form.ratio_approved_first)
            });
            row(ui, "Rasio Kelulusan 2nd Sem (0-1)", |ui| {
                ratio(ui, &mut form.ratio_approved_second)
            });
        });
}

fn semester_rows(ui: &mut Ui, semester: &str, units: &mut SemesterUnits) {
    row(ui, &format!("Jumlah Mata Kuliah {semester} Sem (Diambil)"), |ui| {
        integer(ui, &mut units.enrolled, UNIT_COUNT_RANGE)
    });
    row(ui, &format!("Jumlah Mata Kuliah {semester} Sem (Dievaluasi)"), |ui| {
        integer(ui, &mut units.evaluations, UNIT_COUNT_RANGE)
    });
    row(ui, &format!("Jumlah Mata Kuliah {semester} Sem (Lulus)"), |ui| {
        integer(ui, &mut units.approved, UNIT_COUNT_RANGE)
    });
    row(ui, &format!("{semester} Sem Grade (0-20)"), |ui| {
        decimal(ui, &mut units.grade, SEMESTER_GRADE_RANGE)
    });
}

fn row(ui: &mut Ui, label: &str, add_input: impl FnOnce(&mut Ui)) {
    ui.label(RichText::new(label).color(style::palette().text_muted));
    add_input(ui);
    ui.end_row();
}

fn choice_combo<T: Copy + PartialEq>(
    ui: &mut Ui,
    id: &str,
    value: &mut T,
    options: &[T],
    label: fn(T) -> &'static str,
) {
    ComboBox::from_id_salt(id)
        .width(COMBO_WIDTH)
        .selected_text(label(*value))
        .show_ui(ui, |ui| {
            for option in options {
                ui.selectable_value(value, *option, label(*option));
            }
        });
}

fn code_combo(ui: &mut Ui, id: &str, value: &mut u8, options: &[u8]) {
    ComboBox::from_id_salt(id)
        .selected_text(value.to_string())
        .show_ui(ui, |ui| {
            for option in options {
                ui.selectable_value(value, *option, option.to_string());
            }
        });
}

fn decimal(ui: &mut Ui, value: &mut f64, range: RangeInclusive<f64>) {
    ui.add(
        DragValue::new(value)
            .range(range)
            .speed(0.1)
            .max_decimals(2),
    );
}

fn ratio(ui: &mut Ui, value: &mut f64) {
    ui.add(
        DragValue::new(value)
            .range(RATIO_RANGE)
            .speed(0.01)
            .max_decimals(2),
    );
}

fn integer(ui: &mut Ui, value: &mut u32, range: RangeInclusive<u32>) {
    ui.add(DragValue::new(value).range(range).speed(0.2));
}

/// Primary action button; returns true when pressed.
pub(super) fn predict_button(ui: &mut Ui) -> bool {
    ui.add_sized(
        [200.0, 32.0],
        egui::Button::new(RichText::new("Predict Dropout").strong()),
    )
    .clicked()
}
