//! App screens, shared by every platform launcher.
//!
//! Navigation is the launcher's business: screens expose `EventHandler`
//! props for the transitions they trigger and never touch the router.

mod welcome;
pub use welcome::Welcome;

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod home;
pub use home::Home;

mod add_listing;
pub use add_listing::AddListing;

mod renter_profile;
pub use renter_profile::RenterProfileForm;

mod account;
pub use account::Account;

mod matches;
pub use matches::Matches;
