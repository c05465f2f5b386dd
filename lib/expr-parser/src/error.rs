use snafu::Snafu;

pub type Result<T, E = ParseError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ParseError {
    #[snafu(display("Expression is empty"))]
    EmptyExpression,

    #[snafu(display("Malformed expression `{}`: {}", input, reason))]
    MalformedExpression { input: String, reason: String },

    #[snafu(display("Expression ended before every operator received its operands"))]
    TruncatedExpression,
}
