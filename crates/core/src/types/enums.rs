//! Categorical field vocabularies.
//!
//! Every categorical field is stored as a small integer code and surfaced to
//! clients as a string label. The mapping is bidirectional and strict: an
//! unknown label or an out-of-range code is an error, never coerced to a
//! default.
//!
//! Position is the one field with **two** vocabularies. Requests write
//! `employee`/`manager`/`admin`; responses read `Employee`/`Manager`/
//! `Director`. Both label sets map onto the same codes and are kept separate
//! on purpose.
//!
//! Case policy differs per field and direction, matching the live API:
//! request labels are always case-insensitive; on the read side, position
//! labels must match exactly, department and employee-status labels compare
//! case-insensitively, and document-status labels are canonicalized to their
//! capitalized form.

use thiserror::Error;

/// Failure to map a categorical value in either direction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumError {
    /// A string input did not match any accepted label.
    #[error("Invalid {field}. Expected one of: {expected}.")]
    UnknownLabel {
        field: &'static str,
        expected: &'static str,
    },

    /// An integer input was outside the valid code range.
    #[error("Invalid {field} code {code}. Expected one of: {expected}.")]
    UnknownCode {
        field: &'static str,
        code: i16,
        expected: &'static str,
    },
}

// =============================================================================
// Position
// =============================================================================

/// Employee position.
///
/// Stored as 0/1/2. Written as `employee`/`manager`/`admin`, read back as
/// `Employee`/`Manager`/`Director`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Employee,
    Manager,
    Director,
}

impl Position {
    const FIELD: &'static str = "position";
    const REQUEST_VOCABULARY: &'static str = "employee, manager, admin";
    const CODE_VOCABULARY: &'static str = "0 (employee), 1 (manager), 2 (admin)";

    /// The stored integer code.
    #[must_use]
    pub const fn code(self) -> i16 {
        match self {
            Self::Employee => 0,
            Self::Manager => 1,
            Self::Director => 2,
        }
    }

    /// Decode a stored integer code.
    ///
    /// # Errors
    ///
    /// Returns [`EnumError::UnknownCode`] for codes outside 0..=2.
    pub const fn from_code(code: i16) -> Result<Self, EnumError> {
        match code {
            0 => Ok(Self::Employee),
            1 => Ok(Self::Manager),
            2 => Ok(Self::Director),
            _ => Err(EnumError::UnknownCode {
                field: Self::FIELD,
                code,
                expected: Self::CODE_VOCABULARY,
            }),
        }
    }

    /// Parse a request label (`employee`/`manager`/`admin`, case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`EnumError::UnknownLabel`] for anything else.
    pub fn from_request_label(s: &str) -> Result<Self, EnumError> {
        match s.to_lowercase().as_str() {
            "employee" => Ok(Self::Employee),
            "manager" => Ok(Self::Manager),
            "admin" => Ok(Self::Director),
            _ => Err(EnumError::UnknownLabel {
                field: Self::FIELD,
                expected: Self::REQUEST_VOCABULARY,
            }),
        }
    }

    /// Parse request input that may be a label or a bare integer code.
    ///
    /// # Errors
    ///
    /// Returns [`EnumError`] when the input is neither an accepted label nor
    /// an in-range code.
    pub fn parse_request(s: &str) -> Result<Self, EnumError> {
        if let Ok(code) = s.trim().parse::<i16>() {
            return Self::from_code(code);
        }
        Self::from_request_label(s)
    }

    /// The label surfaced in responses.
    #[must_use]
    pub const fn response_label(self) -> &'static str {
        match self {
            Self::Employee => "Employee",
            Self::Manager => "Manager",
            Self::Director => "Director",
        }
    }

    /// Accept a string that is already a response label (exact match).
    ///
    /// # Errors
    ///
    /// Returns [`EnumError::UnknownLabel`] when the string is not exactly one
    /// of `Employee`/`Manager`/`Director`.
    pub fn from_response_label(s: &str) -> Result<Self, EnumError> {
        match s {
            "Employee" => Ok(Self::Employee),
            "Manager" => Ok(Self::Manager),
            "Director" => Ok(Self::Director),
            _ => Err(EnumError::UnknownLabel {
                field: Self::FIELD,
                expected: "Employee, Manager, Director",
            }),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.response_label())
    }
}

// =============================================================================
// Department
// =============================================================================

/// Employee department. Stored as 0/1/2, labelled `hr`/`it`/`sales`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Department {
    Hr,
    It,
    Sales,
}

impl Department {
    const FIELD: &'static str = "department";
    const REQUEST_VOCABULARY: &'static str = "hr, it, sales";
    const CODE_VOCABULARY: &'static str = "0 (hr), 1 (it), 2 (sales)";

    /// The stored integer code.
    #[must_use]
    pub const fn code(self) -> i16 {
        match self {
            Self::Hr => 0,
            Self::It => 1,
            Self::Sales => 2,
        }
    }

    /// Decode a stored integer code.
    ///
    /// # Errors
    ///
    /// Returns [`EnumError::UnknownCode`] for codes outside 0..=2.
    pub const fn from_code(code: i16) -> Result<Self, EnumError> {
        match code {
            0 => Ok(Self::Hr),
            1 => Ok(Self::It),
            2 => Ok(Self::Sales),
            _ => Err(EnumError::UnknownCode {
                field: Self::FIELD,
                code,
                expected: Self::CODE_VOCABULARY,
            }),
        }
    }

    /// Parse a label, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`EnumError::UnknownLabel`] for anything else.
    pub fn from_label(s: &str) -> Result<Self, EnumError> {
        match s.to_lowercase().as_str() {
            "hr" => Ok(Self::Hr),
            "it" => Ok(Self::It),
            "sales" => Ok(Self::Sales),
            _ => Err(EnumError::UnknownLabel {
                field: Self::FIELD,
                expected: Self::REQUEST_VOCABULARY,
            }),
        }
    }

    /// Parse request input that may be a label or a bare integer code.
    ///
    /// # Errors
    ///
    /// Returns [`EnumError`] when the input is neither an accepted label nor
    /// an in-range code.
    pub fn parse_request(s: &str) -> Result<Self, EnumError> {
        if let Ok(code) = s.trim().parse::<i16>() {
            return Self::from_code(code);
        }
        Self::from_label(s)
    }

    /// The label surfaced in responses.
    #[must_use]
    pub const fn response_label(self) -> &'static str {
        match self {
            Self::Hr => "hr",
            Self::It => "it",
            Self::Sales => "sales",
        }
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.response_label())
    }
}

// =============================================================================
// Employee status
// =============================================================================

/// Employee activity status. Stored as 0/1, labelled `inactive`/`active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmployeeStatus {
    Inactive,
    Active,
}

impl EmployeeStatus {
    const FIELD: &'static str = "status";
    const VOCABULARY: &'static str = "inactive, active";
    const CODE_VOCABULARY: &'static str = "0 (inactive), 1 (active)";

    /// The stored integer code.
    #[must_use]
    pub const fn code(self) -> i16 {
        match self {
            Self::Inactive => 0,
            Self::Active => 1,
        }
    }

    /// Decode a stored integer code.
    ///
    /// # Errors
    ///
    /// Returns [`EnumError::UnknownCode`] for codes other than 0 or 1.
    pub const fn from_code(code: i16) -> Result<Self, EnumError> {
        match code {
            0 => Ok(Self::Inactive),
            1 => Ok(Self::Active),
            _ => Err(EnumError::UnknownCode {
                field: Self::FIELD,
                code,
                expected: Self::CODE_VOCABULARY,
            }),
        }
    }

    /// Parse a label, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`EnumError::UnknownLabel`] for anything else.
    pub fn from_label(s: &str) -> Result<Self, EnumError> {
        match s.to_lowercase().as_str() {
            "inactive" => Ok(Self::Inactive),
            "active" => Ok(Self::Active),
            _ => Err(EnumError::UnknownLabel {
                field: Self::FIELD,
                expected: Self::VOCABULARY,
            }),
        }
    }

    /// The label surfaced in responses.
    #[must_use]
    pub const fn response_label(self) -> &'static str {
        match self {
            Self::Inactive => "inactive",
            Self::Active => "active",
        }
    }
}

impl std::fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.response_label())
    }
}

// =============================================================================
// Document status
// =============================================================================

/// Document approval status. Stored as 0/1/2, labelled `Pending`/`Approved`/
/// `Rejected`. Input labels are canonicalized to the capitalized form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentStatus {
    Pending,
    Approved,
    Rejected,
}

impl DocumentStatus {
    const FIELD: &'static str = "document status";
    const VOCABULARY: &'static str = "Pending, Approved, Rejected";
    const CODE_VOCABULARY: &'static str = "0 (Pending), 1 (Approved), 2 (Rejected)";

    /// The stored integer code.
    #[must_use]
    pub const fn code(self) -> i16 {
        match self {
            Self::Pending => 0,
            Self::Approved => 1,
            Self::Rejected => 2,
        }
    }

    /// Decode a stored integer code.
    ///
    /// # Errors
    ///
    /// Returns [`EnumError::UnknownCode`] for codes outside 0..=2.
    pub const fn from_code(code: i16) -> Result<Self, EnumError> {
        match code {
            0 => Ok(Self::Pending),
            1 => Ok(Self::Approved),
            2 => Ok(Self::Rejected),
            _ => Err(EnumError::UnknownCode {
                field: Self::FIELD,
                code,
                expected: Self::CODE_VOCABULARY,
            }),
        }
    }

    /// Parse a label, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`EnumError::UnknownLabel`] for anything else.
    pub fn from_label(s: &str) -> Result<Self, EnumError> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(EnumError::UnknownLabel {
                field: Self::FIELD,
                expected: Self::VOCABULARY,
            }),
        }
    }

    /// The label surfaced in responses.
    #[must_use]
    pub const fn response_label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.response_label())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_position_roundtrip() {
        for (code, request, response) in [
            (0, "employee", "Employee"),
            (1, "manager", "Manager"),
            (2, "admin", "Director"),
        ] {
            let p = Position::from_code(code).unwrap();
            assert_eq!(p.code(), code);
            assert_eq!(Position::from_request_label(request).unwrap(), p);
            assert_eq!(p.response_label(), response);
            assert_eq!(Position::from_response_label(response).unwrap(), p);
        }
    }

    #[test]
    fn test_position_request_label_case_insensitive() {
        assert_eq!(
            Position::from_request_label("ADMIN").unwrap(),
            Position::Director
        );
        assert_eq!(
            Position::from_request_label("Manager").unwrap(),
            Position::Manager
        );
    }

    #[test]
    fn test_position_response_label_is_exact() {
        // The read-side vocabulary does not fold case.
        assert!(Position::from_response_label("employee").is_err());
        assert!(Position::from_response_label("DIRECTOR").is_err());
        assert!(Position::from_response_label("Director").is_ok());
    }

    #[test]
    fn test_position_write_and_read_vocabularies_differ() {
        // "admin" writes code 2; code 2 reads back as "Director".
        let p = Position::from_request_label("admin").unwrap();
        assert_eq!(p.response_label(), "Director");
        assert!(Position::from_request_label("director").is_err());
        assert!(Position::from_response_label("admin").is_err());
    }

    #[test]
    fn test_position_unknown_values_fail_both_directions() {
        let err = Position::from_request_label("bogus").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid position. Expected one of: employee, manager, admin."
        );
        let err = Position::from_code(3).unwrap_err();
        assert!(err.to_string().contains("Invalid position code 3"));
        assert!(Position::from_code(-1).is_err());
    }

    #[test]
    fn test_position_parse_request_accepts_codes() {
        assert_eq!(Position::parse_request("1").unwrap(), Position::Manager);
        assert_eq!(Position::parse_request("manager").unwrap(), Position::Manager);
        assert!(Position::parse_request("5").is_err());
    }

    #[test]
    fn test_department_roundtrip() {
        for (code, label) in [(0, "hr"), (1, "it"), (2, "sales")] {
            let d = Department::from_code(code).unwrap();
            assert_eq!(d.code(), code);
            assert_eq!(Department::from_label(label).unwrap(), d);
            assert_eq!(d.response_label(), label);
        }
    }

    #[test]
    fn test_department_case_insensitive() {
        assert_eq!(Department::from_label("IT").unwrap(), Department::It);
        assert_eq!(Department::from_label("Sales").unwrap(), Department::Sales);
        assert!(Department::from_label("finance").is_err());
        assert!(Department::from_code(9).is_err());
    }

    #[test]
    fn test_employee_status_roundtrip() {
        assert_eq!(
            EmployeeStatus::from_code(0).unwrap(),
            EmployeeStatus::Inactive
        );
        assert_eq!(EmployeeStatus::from_code(1).unwrap(), EmployeeStatus::Active);
        assert_eq!(
            EmployeeStatus::from_label("ACTIVE").unwrap(),
            EmployeeStatus::Active
        );
        assert_eq!(EmployeeStatus::Active.response_label(), "active");
        assert!(EmployeeStatus::from_code(2).is_err());
        assert!(EmployeeStatus::from_label("retired").is_err());
    }

    #[test]
    fn test_document_status_canonicalizes() {
        assert_eq!(
            DocumentStatus::from_label("pending").unwrap().response_label(),
            "Pending"
        );
        assert_eq!(
            DocumentStatus::from_label("REJECTED").unwrap().response_label(),
            "Rejected"
        );
        assert!(DocumentStatus::from_label("cancelled").is_err());
        assert!(DocumentStatus::from_code(3).is_err());
    }

    #[test]
    fn test_error_messages_list_vocabulary() {
        let err = Department::from_label("x").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid department. Expected one of: hr, it, sales."
        );
        let err = Department::from_code(7).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid department code 7. Expected one of: 0 (hr), 1 (it), 2 (sales)."
        );
    }
}
