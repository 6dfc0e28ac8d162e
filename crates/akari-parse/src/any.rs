use crate::cotoha::CotohaParser;
#[cfg(feature = "mock")]
use crate::mock::MockParser;
use crate::parser::DependencyParser;
use crate::sentence::Sentence;
use crate::yahoo::YahooParser;

/// Generates a match over all `AnyParser` variants, binding the inner
/// parser and evaluating the given closure for each arm.
macro_rules! delegate_parser {
    ($self:expr, |$p:ident| $expr:expr) => {
        match $self {
            AnyParser::Yahoo($p) => $expr,
            AnyParser::Cotoha($p) => $expr,
            #[cfg(feature = "mock")]
            AnyParser::Mock($p) => $expr,
        }
    };
}

/// Statically dispatched provider selection, one variant per conforming
/// parse client.
#[derive(Debug, Clone)]
pub enum AnyParser {
    Yahoo(YahooParser),
    Cotoha(CotohaParser),
    #[cfg(feature = "mock")]
    Mock(MockParser),
}

impl DependencyParser for AnyParser {
    async fn parse(&self, text: &str) -> Result<Sentence, crate::ParseError> {
        delegate_parser!(self, |p| p.parse(text).await)
    }

    fn name(&self) -> &'static str {
        delegate_parser!(self, |p| p.name())
    }
}
