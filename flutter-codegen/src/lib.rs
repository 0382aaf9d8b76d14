//! Template-based Dart/Flutter source generation.
//!
//! Public surface:
//! - [`TemplateStore`] + [`render_str`]: mustache-like substitution with
//!   `{{var}}` variables and `{{#key}}...{{/key}}` blocks whose behavior
//!   (repeat vs. include-if-truthy) follows the bound value's type.
//! - [`FlutterCodeGenerator`]: high-level helpers rendering the app entry
//!   point, widgets, screens, and whole project file sets, including the
//!   keyword-dispatched [`FlutterCodeGenerator::generate_flutter_code_from_prompt`].
//! - [`pubspec`]: structured Flutter package manifest handling.
//!
//! This crate owns no React generation: prompts for non-Flutter projects are
//! rejected with [`CodegenError::UnsupportedProjectType`].

mod error;
mod generator;
mod template;

pub mod naming;
pub mod pubspec;

pub use error::{CodegenError, Result};
pub use generator::{
    FlutterCodeGenerator, GeneratedFile, ProjectKind, ScreenOptions, StateField,
};
pub use template::{TemplateConfig, TemplateStore, TemplateValue, render_str};
