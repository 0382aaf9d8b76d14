//! Heuristic, line-oriented static checks for generated Dart code.
//!
//! No AST, no real parser — on purpose. Every check here is a regex or
//! substring heuristic over lines of text, approximate by design: generated
//! code is small and regular enough that this catches the mistakes templates
//! and prompt-driven generation actually make. Findings are returned as
//! data, never thrown; validity is strictly "no errors" and warnings never
//! affect it.
//!
//! Public surface: [`validate`], [`lint`], [`format_dart`], [`quick_fixes`],
//! [`analyze_complexity`].

mod complexity;
mod fixes;
mod format;
mod lint;
mod model;
mod validate;

pub use complexity::{ComplexityReport, analyze_complexity};
pub use fixes::quick_fixes;
pub use format::format_dart;
pub use lint::lint;
pub use model::{DartValidationError, DartValidationResult, Severity};
pub use validate::validate;
