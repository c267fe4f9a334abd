/// Event tag attached to every fallback warning.
pub const FALLBACK_EVENT: &str = "translation,fallback";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Warn,
}

#[derive(Debug, Clone, Copy)]
pub struct LogMeta<'a> {
    pub kind: LogKind,
    pub event: &'a str,
    pub lexicon_key: &'a str,
}

/// Observability sink for fallback events. Implementations must treat the
/// call as fire-and-forget; nothing the sink does can change what
/// `translate` returns.
pub trait TranslationLogger {
    fn log(&self, message: &str, meta: &LogMeta<'_>);
}
