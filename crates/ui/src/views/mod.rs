mod checkup;
mod home;
mod results;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use checkup::CheckupView;
pub use home::HomeView;
pub use results::ResultsView;
pub use state::ViewError;
