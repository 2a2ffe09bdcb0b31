//! Renders the abstract `WebCore::LogClient` interface.
//!
//! The interface is the fixed prologue (license, includes, class head with the
//! `log` and `isWebKitLogClient` members), one overridable no-op method per
//! record, and the fixed epilogue closing the class and declaring the
//! `logClient()` accessor. The accessor returns a `std::unique_ptr` owned by
//! the host: constructed on first access, never torn down by this header.

use crate::ir::LogMessage;
use crate::params::RenderOptions;

const PROLOGUE: &str = include_str!("../../templates/log_client_prologue.h.in");
const EPILOGUE: &str = include_str!("../../templates/log_client_epilogue.h.in");

/// Knobs for the interface artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InterfaceOptions {
    /// Emit `Type argN` formal parameters instead of bare types.
    pub named_parameters: bool,
}

impl InterfaceOptions {
    /// How each method's formal parameters are rendered.
    pub fn parameter_rendering(&self) -> RenderOptions {
        if self.named_parameters {
            RenderOptions {
                include_name: true,
                ..RenderOptions::interface()
            }
        } else {
            RenderOptions::interface()
        }
    }
}

/// Renders one `virtual void NAME(params) { }` line, indented for the class body.
pub fn method_declaration(record: &LogMessage, options: InterfaceOptions) -> String {
    let parameters = record.parameters().render(options.parameter_rendering());
    format!("    virtual void {}({}) {{ }}\n", record.identifier, parameters)
}

/// Renders the complete interface header; methods follow catalog order.
pub fn render_interface(records: &[LogMessage], options: InterfaceOptions) -> String {
    let mut out = String::from(PROLOGUE);
    for record in records {
        out.push_str(&method_declaration(record, options));
    }
    out.push_str(EPILOGUE);
    out
}
