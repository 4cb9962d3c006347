// src/models/mod.rs

pub mod user;
pub mod academic_course;
pub mod degree_requirement;
