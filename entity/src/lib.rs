pub mod employment_details;

pub use employment_details::Entity as EmploymentDetails;
