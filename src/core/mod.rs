//! Core conversion modules

pub mod latex2html;
