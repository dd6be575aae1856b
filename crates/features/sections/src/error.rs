use std::borrow::Cow;
use vinewood_kernel::error::format_context;

#[derive(Debug, thiserror::Error)]
pub enum SectionError {
    #[error("Unknown section{}: {name}", format_context(.context))]
    Unknown { name: String, context: Option<Cow<'static, str>> },
}
