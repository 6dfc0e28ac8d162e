use akari_parse::ParseError;

#[derive(Debug, thiserror::Error)]
pub enum AkariError {
    #[error("failed to parse the text: {0}")]
    Parse(#[from] ParseError),
}

pub type Result<T> = std::result::Result<T, AkariError>;
