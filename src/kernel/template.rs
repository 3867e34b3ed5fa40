//! Template resolution.
//!
//! The compiler asks a [`TemplateLoader`] for a named resource. The loader
//! tries its primary [`TemplateSource`] and, when that reports the resource
//! as absent, its fallback. By default the primary is the copy bundled into
//! the crate and the fallback is the crate's own `templates/` directory.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::error::KernelError;

/// Logical path of the kernel template.
pub const KERNEL_TEMPLATE: &str = "templates/kernel.tex";

/// Kernel template embedded at compile time.
const EMBEDDED_KERNEL_TEX: &str = include_str!("../../templates/kernel.tex");

/// Something that can produce the text of a named static resource.
pub trait TemplateSource: fmt::Debug + Send + Sync {
    /// Read the resource `name`.
    ///
    /// Returns `Ok(None)` when this source does not have the resource; any
    /// other failure is an error.
    fn read(&self, name: &str) -> Result<Option<String>, KernelError>;
}

/// Resources compiled into the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

impl TemplateSource for EmbeddedTemplates {
    fn read(&self, name: &str) -> Result<Option<String>, KernelError> {
        Ok(match name {
            KERNEL_TEMPLATE => Some(EMBEDDED_KERNEL_TEX.to_string()),
            _ => None,
        })
    }
}

/// Resources read from a directory on disk, by relative path.
#[derive(Debug, Clone)]
pub struct DirTemplates {
    root: PathBuf,
}

impl DirTemplates {
    /// Read resources relative to `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Read resources relative to this crate's source directory.
    pub fn crate_root() -> Self {
        Self::new(env!("CARGO_MANIFEST_DIR"))
    }

    /// The directory resources are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TemplateSource for DirTemplates {
    fn read(&self, name: &str) -> Result<Option<String>, KernelError> {
        let path = self.root.join(name);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// A fixed template text, returned for every resource name.
#[derive(Debug, Clone)]
pub struct InlineTemplate {
    text: String,
}

impl InlineTemplate {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl TemplateSource for InlineTemplate {
    fn read(&self, _name: &str) -> Result<Option<String>, KernelError> {
        Ok(Some(self.text.clone()))
    }
}

/// Resolves templates through a primary source and an optional fallback.
#[derive(Debug, Clone)]
pub struct TemplateLoader {
    primary: Arc<dyn TemplateSource>,
    fallback: Option<Arc<dyn TemplateSource>>,
}

impl TemplateLoader {
    /// Loader with a single source and no fallback.
    pub fn new(primary: impl TemplateSource + 'static) -> Self {
        Self {
            primary: Arc::new(primary),
            fallback: None,
        }
    }

    /// Set the source consulted when the primary does not have a resource.
    pub fn with_fallback(mut self, fallback: impl TemplateSource + 'static) -> Self {
        self.fallback = Some(Arc::new(fallback));
        self
    }

    /// Read the resource `name`, failing with [`KernelError::TemplateMissing`]
    /// if no source has it.
    pub fn load(&self, name: &str) -> Result<String, KernelError> {
        if let Some(text) = self.primary.read(name)? {
            return Ok(text);
        }

        if let Some(fallback) = &self.fallback {
            log::warn!(
                "Template {} not found in {:?}, trying {:?}",
                name,
                self.primary,
                fallback
            );
            if let Some(text) = fallback.read(name)? {
                return Ok(text);
            }
        }

        Err(KernelError::TemplateMissing(name.to_string()))
    }

    /// Read the kernel template.
    pub fn load_kernel(&self) -> Result<String, KernelError> {
        self.load(KERNEL_TEMPLATE)
    }
}

impl Default for TemplateLoader {
    fn default() -> Self {
        Self::new(EmbeddedTemplates).with_fallback(DirTemplates::crate_root())
    }
}
