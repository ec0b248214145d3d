//! People domain module: employee profile shapes and the events the people
//! domain publishes about them.
//!
//! Pure data definitions plus construction-time canonicalization; no
//! handlers, no storage, no transport.

pub mod employee;
pub mod error;
pub mod events;

pub use employee::{
    Address, ContactInfo, EmploymentInfo, EmploymentStatus, EmploymentType, PersonalInfo,
};
pub use error::{PeopleError, PeopleResult};
pub use events::{
    EMPLOYEE_AGGREGATE, EMPLOYEE_CREATED, EMPLOYEE_TERMINATED, EMPLOYEE_UPDATED, EmployeeCreated,
    EmployeeEvent, EmployeeTerminated, EmployeeUpdated, PEOPLE_DOMAIN, TERMINATION_TARGETS,
};
