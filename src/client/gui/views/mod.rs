pub mod advice;
pub mod form;
