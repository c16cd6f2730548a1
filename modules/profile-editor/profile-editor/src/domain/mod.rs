pub mod draft;
pub mod error;
pub mod fields;
pub mod form;
pub mod service;
pub mod validation;

#[cfg(test)]
mod service_test;
#[cfg(test)]
mod test_support;
