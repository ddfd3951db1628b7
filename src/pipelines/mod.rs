mod paginate;

pub use paginate::{DiscardedPost, Paginator, ScrapeReport, Termination};
