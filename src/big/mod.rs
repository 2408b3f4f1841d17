mod karatsuba;
mod magnitude;
mod signed;

pub use self::magnitude::DIGITS_INLINE;
pub use self::signed::*;
