//! C5: a single-method collector for non-fatal warnings emitted during
//! translation (§4.5). Warnings never alter the returned string and are never
//! fatal to the translator itself; the host decides whether to promote one.

use tsz_common::{Diagnostic, DiagnosticCategory};

/// Diagnostic codes the translator's own warnings use. Hosts embedding this
/// crate alongside a larger diagnostic table should reserve this range.
pub mod codes {
    pub const UNSUPPORTED_TYPE_CONSTRUCT: u32 = 90001;
    pub const NEVER_TYPE: u32 = 90002;
    pub const QUOTED_PROPERTY_NAME: u32 = 90003;
    pub const TYPE_VALUE_CONFLICT: u32 = 90004;
    pub const ANONYMOUS_SYMBOL: u32 = 90005;
    pub const GENERIC_CONSTRUCT_SIGNATURE: u32 = 90006;
    pub const MISSING_DECLARATION: u32 = 90007;
    pub const UNRECOGNIZED_REST_TYPE: u32 = 90008;
    pub const UNHANDLED_ANONYMOUS_SHAPE: u32 = 90009;
}

/// Accepts warnings produced while translating one type. The host decides
/// whether any of them should be promoted to an error.
pub trait DiagnosticSink {
    fn warn(&mut self, code: u32, message: String);
}

/// Collects warnings as [`tsz_common::Diagnostic`] values tagged against a
/// reference site, for hosts that want to fold them into a broader
/// diagnostics pipeline.
#[derive(Default, Debug, Clone)]
pub struct VecDiagnosticSink {
    pub diagnostics: Vec<Diagnostic>,
    pub file: String,
    pub start: u32,
    pub length: u32,
}

impl VecDiagnosticSink {
    #[must_use]
    pub fn new(file: impl Into<String>, start: u32, length: u32) -> Self {
        Self {
            diagnostics: Vec::new(),
            file: file.into(),
            start,
            length,
        }
    }
}

impl DiagnosticSink for VecDiagnosticSink {
    fn warn(&mut self, code: u32, message: String) {
        tracing::debug!(code, %message, "type translation warning");
        let mut diagnostic = Diagnostic::error(self.file.clone(), self.start, self.length, message, code);
        diagnostic.category = DiagnosticCategory::Warning;
        self.diagnostics.push(diagnostic);
    }
}
