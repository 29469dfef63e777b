mod auth;
mod clock;
mod credentials;

pub use auth::EXPIRY_MARGIN;
pub use auth::TokenSession;
pub use clock::Clock;
pub use clock::ManualClock;
pub use clock::SystemClock;
pub use credentials::CredentialStore;
