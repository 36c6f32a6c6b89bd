use cspinline_types::{InlineScriptMode, TraceEntry};

/// Output of one full rule-chain evaluation.
#[derive(Clone, Debug)]
pub struct Decision {
    /// Final mode after all rules ran. Always a declared variant; the chain
    /// cannot leave the mode unset.
    pub mode: InlineScriptMode,

    /// Downgrades applied, in execution order.
    pub trace: Vec<TraceEntry>,

    /// Rules whose `process` step ran (relevant and enabled by policy).
    pub rules_evaluated: u32,
}

impl Decision {
    /// Rules that actually downgraded the mode.
    pub fn rules_applied(&self) -> u32 {
        self.trace.len() as u32
    }
}
