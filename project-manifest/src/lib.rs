//! Read-only snapshot model of a generated project's file tree.
//!
//! The manifest is produced by the sandbox file-sync layer and consumed by the
//! intent classifier. It indexes files by path, tags each with a semantic
//! [`FileType`], and carries derived route and component-tree indexes used to
//! find related files. Nothing in this crate mutates a manifest after it has
//! been built.

pub mod manifest;

pub use manifest::{
    ComponentInfo, ComponentTreeNode, FileInfo, FileManifest, FileType, FlutterWidgetInfo,
    ManifestError, RouteInfo,
};
