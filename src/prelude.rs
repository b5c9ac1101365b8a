pub use crate::ds::PopularityCounter;
pub use crate::error::{EmptyStateError, InvariantError};
pub use crate::iter::PopularIter;
pub use crate::map::PopularMap;
pub use crate::store::MapStore;

#[cfg(feature = "concurrency")]
pub use crate::concurrent::SharedPopularMap;
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::PopularMapMetricsSnapshot;
