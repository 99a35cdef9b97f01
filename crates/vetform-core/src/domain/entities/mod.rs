//! Domain entities: the input record, the whitelist, the report, and the
//! validator aggregate that ties them together.

pub mod countries;
pub mod form;
pub mod report;
pub mod validator;

pub use countries::CountryList;
pub use form::{FieldValue, FormInput};
pub use report::{ValidationReport, Violation};
pub use validator::{
    FormValidator, FormValidatorBuilder, HasCountries, NoCountries, is_form_valid, validate_form,
};
