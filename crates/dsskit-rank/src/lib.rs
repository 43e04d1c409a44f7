mod error;
mod table;
mod wsm;

pub use error::RankError;
pub use table::RankingTable;
pub use wsm::{rank, Alternative, RankingResult, ScoredAlternative};
