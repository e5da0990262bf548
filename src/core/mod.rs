pub mod gravity;
pub mod kinematics;
pub mod scene;
pub mod scrub;
pub mod trajectory;
pub mod window;

pub use gravity::{BODIES, Body, default_body, find_body};
pub use kinematics::LaunchInputs;
pub use scene::Scene;
pub use scrub::TimeScrub;
pub use trajectory::{Direction, FlightState, Trajectory};
pub use window::PlotWindow;
