//! tricore — shared window support for tricalc: themes and config storage

pub mod storage;
pub mod theme;

pub use theme::{CalcTheme, ThemeKind};
