//! Full-coverage route planning for directed road networks.
//!
//! Computes a single trail traversing every directed edge of a strongly
//! connected road graph at least once, duplicating the cheapest possible set
//! of edges when the graph admits no Euler trail on its own. This is the
//! open-trail variant of the directed Chinese Postman Problem: the trail may
//! start and end at different nodes, and the start/end pair is chosen
//! together with the duplicated edges so the total added distance is minimal.

pub use roadcover_graph::{connect, DiGraph, Edge, GraphError, NodeId};

pub use self::errors::{PlanError, Result};
pub use self::euler::Trail;
pub use self::planner::{plan_full_coverage, CoveragePlan, CoverageStats};

pub mod augment;
pub mod euler;
pub mod flow;
pub mod imbalance;
pub mod pairing;
pub mod pathsearch;
pub mod planner;

mod errors;
