//! Pipeline adapter.
//!
//! Documents arrive from the surrounding pipeline as null (no contents),
//! buffered text, or a stream. Only buffered documents reach the engine:
//! null documents pass through untouched and streams are rejected.

use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{InjectConfig, InjectOptions};
use crate::constants::{ADAPTER_NAME, STREAMING_NOT_SUPPORTED};
use crate::engine::InjectionEngine;
use crate::errors::{InjectError, Result};
use crate::types::DirectiveScope;

/// Contents of a pipeline document.
pub enum DocumentContents {
    /// No contents (e.g. a directory entry).
    Null,
    /// Fully materialized, decoded text.
    Buffer(String),
    /// Unread streamed contents.
    Stream(Box<dyn Read + Send>),
}

impl std::fmt::Debug for DocumentContents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "Null"),
            Self::Buffer(text) => f.debug_tuple("Buffer").field(&text.len()).finish(),
            Self::Stream(_) => write!(f, "Stream(..)"),
        }
    }
}

/// A document flowing through the pipeline.
#[derive(Debug)]
pub struct Document {
    /// Source path, carried through unchanged.
    pub path: PathBuf,
    /// Document contents.
    pub contents: DocumentContents,
}

impl Document {
    /// A document without contents.
    pub fn null(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            contents: DocumentContents::Null,
        }
    }

    /// A buffered text document.
    pub fn buffer(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: DocumentContents::Buffer(text.into()),
        }
    }

    /// A streamed document.
    pub fn stream(path: impl Into<PathBuf>, reader: impl Read + Send + 'static) -> Self {
        Self {
            path: path.into(),
            contents: DocumentContents::Stream(Box::new(reader)),
        }
    }

    /// Whether the document has no contents.
    pub fn is_null(&self) -> bool {
        matches!(self.contents, DocumentContents::Null)
    }

    /// Buffered text, if any.
    pub fn text(&self) -> Option<&str> {
        match &self.contents {
            DocumentContents::Buffer(text) => Some(text.as_str()),
            _ => None,
        }
    }
}

/// Pipeline stage that injects content into buffered documents.
#[derive(Debug)]
pub struct Injector {
    engine: InjectionEngine,
}

impl Injector {
    /// Build an injector from partial options (defaults applied).
    pub fn new(options: InjectOptions) -> Result<Self> {
        Ok(Self::with_config(InjectConfig::from_options(options)?))
    }

    /// Build an injector recognising `$:pre{…}` placeholders.
    pub fn pre(options: InjectOptions) -> Result<Self> {
        Self::new(options.with_scope(DirectiveScope::Pre))
    }

    /// Build an injector recognising `$:post{…}` placeholders.
    pub fn post(options: InjectOptions) -> Result<Self> {
        Self::new(options.with_scope(DirectiveScope::Post))
    }

    /// Build an injector from a resolved configuration.
    pub fn with_config(config: InjectConfig) -> Self {
        Self {
            engine: InjectionEngine::new(config),
        }
    }

    /// Run one document through the injector.
    ///
    /// Null documents are returned unchanged; streamed documents fail with
    /// [`InjectError::StreamingNotSupported`].
    pub fn transform(&mut self, document: Document) -> Result<Document> {
        let Document { path, contents } = document;
        match contents {
            DocumentContents::Null => {
                debug!(path = %path.display(), "passing through null document");
                Ok(Document::null(path))
            }
            DocumentContents::Stream(_) => Err(InjectError::StreamingNotSupported {
                plugin: ADAPTER_NAME,
                message: STREAMING_NOT_SUPPORTED,
            }),
            DocumentContents::Buffer(text) => {
                let processed = self.engine.process(&text);
                Ok(Document::buffer(path, processed))
            }
        }
    }

    /// Injection directory in use.
    pub fn directory(&self) -> &Path {
        self.engine.config().directory()
    }

    /// Underlying engine.
    pub fn engine(&self) -> &InjectionEngine {
        &self.engine
    }
}
