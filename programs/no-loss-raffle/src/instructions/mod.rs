pub mod calculate_accrued_value;
pub mod checkpoint;
pub mod commit_randomness;
pub mod deposit;
pub mod generate_random_number;
pub mod initialize_pool;
pub mod reveal_random_number;
pub mod withdraw;

pub use calculate_accrued_value::*;
pub use checkpoint::*;
pub use commit_randomness::*;
pub use deposit::*;
pub use generate_random_number::*;
pub use initialize_pool::*;
pub use reveal_random_number::*;
pub use withdraw::*;
