pub mod coordinator;
pub mod poller;

pub use coordinator::{CycleReport, DashboardCoordinator, STATUS_ERROR};
pub use poller::{PollState, Poller, PollingHandle, refresh};
