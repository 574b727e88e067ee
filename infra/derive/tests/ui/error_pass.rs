use regscope_derive::regscope_error;
use std::borrow::Cow;

#[regscope_error]
pub enum ParseError {
    #[error("Number parse error{}: {source}", format_context(.context))]
    Number {
        #[source]
        source: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal parse error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err: ParseError = "boom".into();
    let _ = err.to_string();
}
