//! Exportable student columns

use std::fmt;
use std::str::FromStr;
use crate::models::StudentProfile;
use crate::utils::errors::ExportError;

/// A student field offered in the column selection modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    StudentId,
    FirstName,
    LastName,
    RollNo,
    PrnNo,
    Dob,
    Gender,
    Phone,
    Email,
    Department,
    Average,
    LiveBacklogs,
    TenthPercentage,
    TenthYear,
    TwelfthPercentage,
    TwelfthYear,
    ProgrammingLanguages,
    AcademicProjects,
    Certificates,
    ResumePath,
}

impl Column {
    /// Every column, in modal order
    pub const ALL: [Column; 20] = [
        Column::StudentId,
        Column::FirstName,
        Column::LastName,
        Column::RollNo,
        Column::PrnNo,
        Column::Dob,
        Column::Gender,
        Column::Phone,
        Column::Email,
        Column::Department,
        Column::Average,
        Column::LiveBacklogs,
        Column::TenthPercentage,
        Column::TenthYear,
        Column::TwelfthPercentage,
        Column::TwelfthYear,
        Column::ProgrammingLanguages,
        Column::AcademicProjects,
        Column::Certificates,
        Column::ResumePath,
    ];

    /// Pre-checked when the modal opens
    pub const DEFAULT: [Column; 6] = [
        Column::StudentId,
        Column::FirstName,
        Column::LastName,
        Column::Department,
        Column::Average,
        Column::Email,
    ];

    /// Record key, also the checkbox value
    pub fn key(&self) -> &'static str {
        match self {
            Column::StudentId => "student_id",
            Column::FirstName => "first_name",
            Column::LastName => "last_name",
            Column::RollNo => "roll_no",
            Column::PrnNo => "prn_no",
            Column::Dob => "dob",
            Column::Gender => "gender",
            Column::Phone => "phone",
            Column::Email => "email",
            Column::Department => "department",
            Column::Average => "average",
            Column::LiveBacklogs => "live_backlogs",
            Column::TenthPercentage => "tenth_percentage",
            Column::TenthYear => "tenth_year",
            Column::TwelfthPercentage => "twelfth_percentage",
            Column::TwelfthYear => "twelfth_year",
            Column::ProgrammingLanguages => "programming_languages",
            Column::AcademicProjects => "academic_projects",
            Column::Certificates => "certificates",
            Column::ResumePath => "resume_path",
        }
    }

    /// Header used in spreadsheets
    pub fn spreadsheet_label(&self) -> &'static str {
        match self {
            Column::StudentId => "Student ID",
            Column::FirstName => "First Name",
            Column::LastName => "Last Name",
            Column::RollNo => "Roll No",
            Column::PrnNo => "PRN No",
            Column::Dob => "Date of Birth",
            Column::Gender => "Gender",
            Column::Phone => "Phone",
            Column::Email => "Email",
            Column::Department => "Department",
            Column::Average => "Average %",
            Column::LiveBacklogs => "Live Backlogs",
            Column::TenthPercentage => "10th %",
            Column::TenthYear => "10th Year",
            Column::TwelfthPercentage => "12th %",
            Column::TwelfthYear => "12th Year",
            Column::ProgrammingLanguages => "Programming Languages",
            Column::AcademicProjects => "Academic Projects",
            Column::Certificates => "Certificates",
            Column::ResumePath => "Resume Available",
        }
    }

    /// Header used in documents; columns without a short label show their key
    pub fn document_label(&self) -> &'static str {
        let short = match self {
            Column::StudentId => Some("ID"),
            Column::FirstName => Some("First Name"),
            Column::LastName => Some("Last Name"),
            Column::RollNo => Some("Roll No"),
            Column::PrnNo => Some("PRN No"),
            Column::Email => Some("Email"),
            Column::Department => Some("Department"),
            Column::Average => Some("Avg %"),
            Column::LiveBacklogs => Some("Backlogs"),
            Column::TenthPercentage => Some("10th %"),
            Column::TwelfthPercentage => Some("12th %"),
            Column::ProgrammingLanguages => Some("Programming"),
            Column::ResumePath => Some("Resume"),
            _ => None,
        };
        short.unwrap_or_else(|| self.key())
    }

    /// Cell text for one student: `Yes`/`No` for the resume, empty when absent
    pub fn cell(&self, student: &StudentProfile) -> String {
        let value = match self {
            Column::StudentId => return student.student_id.map(|id| id.to_string()).unwrap_or_default(),
            Column::ResumePath => return if student.has_resume() { "Yes" } else { "No" }.to_string(),
            Column::FirstName => &student.first_name,
            Column::LastName => &student.last_name,
            Column::RollNo => &student.roll_no,
            Column::PrnNo => &student.prn_no,
            Column::Dob => &student.dob,
            Column::Gender => &student.gender,
            Column::Phone => &student.phone,
            Column::Email => &student.email,
            Column::Department => &student.department,
            Column::Average => &student.average,
            Column::LiveBacklogs => &student.live_backlogs,
            Column::TenthPercentage => &student.tenth_percentage,
            Column::TenthYear => &student.tenth_year,
            Column::TwelfthPercentage => &student.twelfth_percentage,
            Column::TwelfthYear => &student.twelfth_year,
            Column::ProgrammingLanguages => &student.programming_languages,
            Column::AcademicProjects => &student.academic_projects,
            Column::Certificates => &student.certificates,
        };
        value.clone().unwrap_or_default()
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Column {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Column::ALL
            .iter()
            .copied()
            .find(|c| c.key() == s)
            .ok_or_else(|| ExportError::UnknownColumn(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_keys_round_trip() {
        for column in Column::ALL {
            assert_eq!(column.key().parse::<Column>().unwrap(), column);
        }
        assert_matches!("salary".parse::<Column>(), Err(ExportError::UnknownColumn(k)) if k == "salary");
    }

    #[test]
    fn test_document_label_falls_back_to_key() {
        assert_eq!(Column::StudentId.document_label(), "ID");
        assert_eq!(Column::Dob.document_label(), "dob");
        assert_eq!(Column::Certificates.document_label(), "certificates");
    }

    #[test]
    fn test_cells() {
        let student = StudentProfile {
            student_id: Some(7),
            first_name: Some("Asha".to_string()),
            ..Default::default()
        };
        assert_eq!(Column::StudentId.cell(&student), "7");
        assert_eq!(Column::FirstName.cell(&student), "Asha");
        assert_eq!(Column::Email.cell(&student), "");
        assert_eq!(Column::ResumePath.cell(&student), "No");

        let with_resume = StudentProfile {
            resume_path: Some("7_cv.pdf".to_string()),
            ..Default::default()
        };
        assert_eq!(Column::ResumePath.cell(&with_resume), "Yes");
    }
}
