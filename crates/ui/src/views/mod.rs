mod builder;
mod complete;
mod home;
mod present;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use builder::BuilderView;
pub use complete::CompleteView;
pub use home::HomeView;
pub use present::{AutoPresentView, PresentView};
