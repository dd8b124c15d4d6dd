#![allow(dead_code)]

pub mod lexer;
pub mod sql_fixture;
