//! Domain Services - Rules that do not belong to a single entity

pub mod grade_service;
pub mod id_source;
pub mod student_id;
