#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableMode {
    Nonce,
    UnsafeInline,
    Unsupported,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableTraceEntry {
    pub rule_id: String,
    pub code: String,
    pub message: String,
    pub mode_after: RenderableMode,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableDecision {
    pub mode: RenderableMode,
    pub client_family: Option<String>,
    pub trace: Vec<RenderableTraceEntry>,
}
