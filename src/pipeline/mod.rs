/*!
 * The translation pipeline: concurrent fan-out across eligible translators
 * and organization of their outcomes.
 *
 * - `aggregator`: single-flight guard, detection, concurrent invocation
 * - `organizer`: deduplication and merging of per-translator outcomes
 */

pub use self::aggregator::Aggregator;
pub use self::organizer::{organize, OrganizedResult};

pub mod aggregator;
pub mod organizer;
