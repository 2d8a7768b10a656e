pub mod issues;
pub mod submit;
