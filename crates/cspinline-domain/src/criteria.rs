use crate::model::ClientContext;
use cspinline_types::InlineScriptMode;

/// Mutable decision state threaded through the rule chain.
///
/// One instance exists per page-render decision; it is owned exclusively by
/// the `decide` call that created it and never escapes it.
#[derive(Debug)]
pub struct Criteria<'a> {
    context: &'a ClientContext,
    mode: InlineScriptMode,
}

impl<'a> Criteria<'a> {
    pub fn new(context: &'a ClientContext, initial_mode: InlineScriptMode) -> Self {
        Self {
            context,
            mode: initial_mode,
        }
    }

    pub fn mode(&self) -> InlineScriptMode {
        self.mode
    }

    /// Plain mutator, no validation: any rule may set any mode. Monotonic
    /// downgrading is a contract on the rules, not on this struct.
    pub fn set_mode(&mut self, mode: InlineScriptMode) {
        self.mode = mode;
    }

    // Returns the context at its own lifetime, not the borrow of `self`:
    // rules read client data and mutate the mode in the same scope.
    pub fn context(&self) -> &'a ClientContext {
        self.context
    }
}
