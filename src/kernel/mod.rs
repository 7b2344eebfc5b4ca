//! Kernel functions and their composition

pub mod bound;
pub mod noise;
pub mod sq_exp;
pub mod sum;
pub mod traits;

pub use self::bound::*;
pub use self::noise::*;
pub use self::sq_exp::*;
pub use self::sum::*;
pub use self::traits::*;
