pub mod error;
pub mod letter;
pub mod normalize;
pub mod token;

pub use error::{ParseError, Result};
pub use letter::Letter;
pub use normalize::{find_main_operator_index, normalize, strip_parens};
pub use token::{Preorder, Token};
