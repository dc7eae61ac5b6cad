//! Form checks that run before anything is sent to the backend.

use chrono::NaiveDateTime;

use crate::error::ApiError;
use crate::model::schedule::{EmployeeRef, NewSchedule};
use crate::models::{CreateScheduleReq, LoginReqDto, ManagerRef, RegisterEmployee, RegisterReq};

/// `@` followed by a non-empty domain.
pub fn is_valid_email(email: &str) -> bool {
    email
        .split_once('@')
        .is_some_and(|(_, domain)| !domain.trim().is_empty())
}

pub fn validate_login(login: &LoginReqDto) -> Result<(), ApiError> {
    if login.email.is_empty() {
        return Err(ApiError::validation("Email field should not be empty."));
    }
    if login.password.is_empty() {
        return Err(ApiError::validation("Password field should not be empty."));
    }
    if !is_valid_email(&login.email) {
        return Err(ApiError::validation(
            "Invalid email. Please provide a valid email.",
        ));
    }
    Ok(())
}

/// Checks the form and builds the body the backend expects.
pub fn validate_register(form: &RegisterReq) -> Result<RegisterEmployee, ApiError> {
    if form.id.trim().is_empty() {
        return Err(ApiError::validation("Employee ID field should not be empty."));
    }
    if form.first_name.trim().is_empty() {
        return Err(ApiError::validation("First Name field should not be empty."));
    }
    if form.last_name.trim().is_empty() {
        return Err(ApiError::validation("Last Name field should not be empty."));
    }
    if !is_valid_email(&form.email) {
        return Err(ApiError::validation(
            "Email must contain '@' followed by a valid domain.",
        ));
    }
    if form.role.trim().is_empty() {
        return Err(ApiError::validation(
            "Role not selected. Please select a role.",
        ));
    }
    if form.password.is_empty() {
        return Err(ApiError::validation("Password field should not be empty."));
    }
    if form.password != form.confirm_password {
        return Err(ApiError::validation(
            "Password and Confirm Password do not match.",
        ));
    }

    let manager_id = form.manager.id.trim();

    Ok(RegisterEmployee {
        id: form.id.trim().to_string(),
        name: format!("{} {}", form.first_name.trim(), form.last_name.trim()),
        email: form.email.trim().to_string(),
        role: form.role.trim().to_string(),
        credentials: form.password.clone(),
        manager: ManagerRef {
            id: (!manager_id.is_empty()).then(|| manager_id.to_string()),
        },
    })
}

fn parse_local_datetime(raw: &str) -> Option<NaiveDateTime> {
    ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw.trim(), fmt).ok())
}

/// Builds the `POST /schedules` body for a new team calendar entry.
pub fn validate_new_schedule(form: &CreateScheduleReq) -> Result<NewSchedule, ApiError> {
    let missing = || ApiError::validation("Please fill in all fields");

    if form.title.trim().is_empty() {
        return Err(missing());
    }
    let employee_id = form.employee_id.ok_or_else(missing)?;
    let start = parse_local_datetime(&form.start_time).ok_or_else(missing)?;
    let end = parse_local_datetime(&form.end_time).ok_or_else(missing)?;

    if end < start {
        return Err(ApiError::validation("End time must not be before start time"));
    }

    Ok(NewSchedule {
        employee: EmployeeRef {
            id: employee_id,
            name: None,
        },
        date: start.format("%Y-%m-%d").to_string(),
        start_time: start.format("%H:%M:%S").to_string(),
        end_time: end.format("%H:%M:%S").to_string(),
        event_type: "MEETING".to_string(),
        leave: false,
        leave_type: None,
        schedule_of_day: form.title.trim().to_string(),
    })
}
